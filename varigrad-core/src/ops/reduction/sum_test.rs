use super::*;
use crate::utils::testing::check_array_near;
use ndarray::array;

#[test]
fn test_sum_forward() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
    let s = sum_op(&mut graph, a)?;
    check_array_near(graph.data(s)?, &[1], &[21.0], 1e-12);
    Ok(())
}

#[test]
fn test_sum_of_empty_is_zero() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf_from_vec(Vec::new(), &[0])?;
    let s = sum_op(&mut graph, a)?;
    check_array_near(graph.data(s)?, &[1], &[0.0], 0.0);
    graph.backward_graph(s)?;
    assert_eq!(graph.grad(a)?.shape(), &[0]);
    Ok(())
}

#[test]
fn test_sum_backward_broadcasts_gradient() -> Result<(), AutogradError> {
    let input = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]].into_dyn();
    let dy = array![2.5].into_dyn();
    let grads = sum_backward(&input, &dy)?;
    check_array_near(&grads[0], &[3, 2], &[2.5; 6], 0.0);
    Ok(())
}

#[test]
fn test_sum_backward_rejects_non_scalar_gradient() {
    let input = array![1.0, 2.0, 3.0].into_dyn();
    let dy = array![1.0, 1.0].into_dyn();
    assert!(matches!(sum_backward(&input, &dy), Err(AutogradError::Shape(_))));
}
