use varigrad_core::ndarray::ArrayD;

/// Installs `env_logger` once for the test binary. Safe to call from every test.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Asserts element-wise closeness of a gradient or value to the expected row-major data.
#[allow(dead_code)]
pub fn assert_close(actual: &ArrayD<f64>, expected_shape: &[usize], expected: &[f64]) {
    varigrad_core::utils::testing::check_array_near(actual, expected_shape, expected, 1e-9);
}
