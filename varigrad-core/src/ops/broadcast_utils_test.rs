use super::*;
use crate::utils::testing::check_array_near;
use ndarray::array;

#[test]
fn test_ensure_same_shape() {
    let a = array![[1.0, 2.0]].into_dyn();
    let b = array![[3.0, 4.0]].into_dyn();
    let c = array![3.0, 4.0].into_dyn();
    assert!(ensure_same_shape("test", &a, &b).is_ok());
    assert!(matches!(ensure_same_shape("test", &a, &c), Err(AutogradError::Shape(_))));
}

#[test]
fn test_ensure_row_broadcast() {
    let m = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].into_dyn();
    assert!(ensure_row_broadcast("test", &m, &array![0.0, 0.0, 0.0].into_dyn()).is_ok());
    assert!(ensure_row_broadcast("test", &m, &array![0.0, 0.0].into_dyn()).is_err());
    assert!(ensure_row_broadcast("test", &m, &array![[0.0, 0.0, 0.0]].into_dyn()).is_err());
}

#[test]
fn test_column_sum() {
    let g = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]].into_dyn();
    check_array_near(&column_sum(&g), &[2], &[9.0, 12.0], 1e-12);
}

#[test]
fn test_reshape_logical_ignores_memory_layout() -> Result<(), AutogradError> {
    let m = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    // the transposed view is column-major in memory
    let reshaped = reshape_logical(&m.t(), &[6])?;
    check_array_near(&reshaped, &[6], &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0], 0.0);
    assert!(matches!(reshape_logical(&m, &[4]), Err(AutogradError::Shape(_))));
    Ok(())
}
