use super::*;
use crate::utils::testing::check_array_near;
use ndarray::array;

#[test]
fn test_sub_forward() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![5.0, 7.0, 9.0])?;
    let b = graph.leaf(array![1.0, 2.0, 3.0])?;
    let c = sub_op(&mut graph, a, b)?;
    check_array_near(graph.data(c)?, &[3], &[4.0, 5.0, 6.0], 1e-12);
    Ok(())
}

#[test]
fn test_sub_shape_mismatch() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![1.0, 2.0, 3.0])?;
    let b = graph.leaf(array![1.0, 2.0])?;
    assert!(matches!(sub_op(&mut graph, a, b), Err(AutogradError::Shape(_))));
    Ok(())
}

#[test]
fn test_sub_backward_negates_rhs() {
    let dy = array![1.0, -2.0, 0.0].into_dyn();
    let grads = sub_backward(&dy);
    check_array_near(&grads[0], &[3], &[1.0, -2.0, 0.0], 0.0);
    check_array_near(&grads[1], &[3], &[-1.0, 2.0, 0.0], 0.0);
}

#[test]
fn test_sub_self_has_zero_gradient() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![3.0, 4.0])?;
    let c = sub_op(&mut graph, a, a)?;
    graph.backward_graph(c)?;
    check_array_near(graph.grad(a)?, &[2], &[0.0, 0.0], 1e-12);
    Ok(())
}
