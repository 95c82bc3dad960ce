use super::*;
use crate::utils::testing::check_array_near;
use ndarray::array;

#[test]
fn test_relu_forward() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![[-2.0, -0.0, 0.5], [3.0, -1e-9, 0.0]])?;
    let r = relu_op(&mut graph, a)?;
    check_array_near(graph.data(r)?, &[2, 3], &[0.0, 0.0, 0.5, 3.0, 0.0, 0.0], 0.0);
    Ok(())
}

#[test]
fn test_relu_backward_masks_non_positive() -> Result<(), AutogradError> {
    let input = array![-1.0, 0.0, 2.0, 5.0].into_dyn();
    let dy = array![10.0, 10.0, 3.0, -4.0].into_dyn();
    let grads = relu_backward(&input, &dy)?;
    check_array_near(&grads[0], &[4], &[0.0, 0.0, 3.0, -4.0], 0.0);
    Ok(())
}

#[test]
fn test_relu_backward_shape_mismatch() {
    let input = array![1.0, 2.0].into_dyn();
    let dy = array![1.0, 2.0, 3.0].into_dyn();
    assert!(matches!(relu_backward(&input, &dy), Err(AutogradError::Shape(_))));
}
