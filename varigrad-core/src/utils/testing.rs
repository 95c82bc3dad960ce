use ndarray::ArrayD;

/// Checks that an array has the expected shape and data within tolerance.
/// Panics if shapes differ or any element differs by more than `tolerance`.
pub fn check_array_near(
    actual: &ArrayD<f64>,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(actual.len(), expected_data.len(), "Data length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected_data.iter()).enumerate() {
        if !approx::abs_diff_eq!(*a, *e, epsilon = tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a,
                e,
                (a - e).abs(),
                tolerance
            );
        }
    }
}

/// Checks that every element of `actual` is exactly zero and its shape is `expected_shape`.
pub fn check_all_zeros(actual: &ArrayD<f64>, expected_shape: &[usize]) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert!(
        actual.iter().all(|&x| x == 0.0),
        "Expected all zeros, got {:?}",
        actual
    );
}
