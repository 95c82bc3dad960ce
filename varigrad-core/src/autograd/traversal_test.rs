use super::*;
use crate::error::AutogradError;
use crate::utils::testing::{check_all_zeros, check_array_near};
use ndarray::{array, Array1, Array2};

#[test]
fn test_topological_sort_diamond() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![1.0, 2.0])?;
    let b = graph.relu(a)?;
    let c = graph.scale(a, 3.0)?;
    let d = graph.add(b, c)?;
    let e = graph.sum(d)?;

    let order = topological_sort(&graph, e)?;
    assert_eq!(order.len(), 4, "leaves are not part of the order");
    assert!(!order.contains(&a));

    let position = |id: NodeId| order.iter().position(|&x| x == id);
    let (pb, pc, pd, pe) = (position(b), position(c), position(d), position(e));
    assert!(pb < pd && pc < pd && pd < pe);
    assert_eq!(pe, Some(3));
    Ok(())
}

#[test]
fn test_topological_sort_shared_operand_listed_once() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![1.0, -1.0])?;
    let r = graph.relu(a)?;
    let m = graph.mul(r, r)?;

    let order = topological_sort(&graph, m)?;
    assert_eq!(order, vec![r, m]);
    Ok(())
}

#[test]
fn test_topological_sort_leaf_root_is_empty() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![1.0])?;
    assert!(topological_sort(&graph, a)?.is_empty());
    Ok(())
}

#[test]
fn test_backward_mul_then_sum() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![2.0])?;
    let b = graph.leaf(array![3.0])?;
    let c = graph.mul(a, b)?;
    let d = graph.sum(c)?;

    backward_graph(&mut graph, d)?;
    check_array_near(graph.grad(a)?, &[1], &[3.0], 1e-12);
    check_array_near(graph.grad(b)?, &[1], &[2.0], 1e-12);
    check_array_near(graph.grad(c)?, &[1], &[1.0], 1e-12);
    check_array_near(graph.grad(d)?, &[1], &[1.0], 1e-12);
    Ok(())
}

#[test]
fn test_backward_relu_masks_negative_inputs() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![-1.0, 2.0])?;
    let r = graph.relu(a)?;
    let s = graph.sum(r)?;

    backward_graph(&mut graph, s)?;
    check_array_near(graph.grad(a)?, &[2], &[0.0, 1.0], 1e-12);
    Ok(())
}

#[test]
fn test_backward_broadcast_add_row_sums() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(Array2::<f64>::ones((2, 3)))?;
    let b = graph.leaf(Array1::<f64>::zeros(3))?;
    let y = graph.broadcast_add(a, b)?;
    let s = graph.sum(y)?;

    backward_graph(&mut graph, s)?;
    check_array_near(graph.grad(b)?, &[3], &[2.0, 2.0, 2.0], 1e-12);
    check_array_near(graph.grad(a)?, &[2, 3], &[1.0; 6], 1e-12);
    Ok(())
}

#[test]
fn test_backward_accumulates_over_multiple_paths() -> Result<(), AutogradError> {
    // loss = sum(a * a) + sum(3a)  =>  d loss / da = 2a + 3
    let mut graph = Graph::new();
    let a = graph.leaf(array![1.0, -2.0, 0.5])?;
    let sq = graph.mul(a, a)?;
    let lin = graph.scale(a, 3.0)?;
    let s1 = graph.sum(sq)?;
    let s2 = graph.sum(lin)?;
    let loss = graph.add(s1, s2)?;

    backward_graph(&mut graph, loss)?;
    check_array_near(graph.grad(a)?, &[3], &[5.0, -1.0, 4.0], 1e-12);
    Ok(())
}

#[test]
fn test_repeated_backward_accumulates_until_zeroed() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![1.0, 2.0])?;
    let s = graph.sum(a)?;

    backward_graph(&mut graph, s)?;
    backward_graph(&mut graph, s)?;
    check_array_near(graph.grad(a)?, &[2], &[2.0, 2.0], 1e-12);
    // the root is re-seeded, not accumulated
    check_array_near(graph.grad(s)?, &[1], &[1.0], 0.0);

    graph.zero_grad(a)?;
    check_all_zeros(graph.grad(a)?, &[2]);
    backward_graph(&mut graph, s)?;
    check_array_near(graph.grad(a)?, &[2], &[1.0, 1.0], 1e-12);
    Ok(())
}

#[test]
fn test_backward_with_leaf_root_only_seeds() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![4.0, 5.0])?;
    backward_graph(&mut graph, a)?;
    check_array_near(graph.grad(a)?, &[2], &[1.0, 1.0], 0.0);
    Ok(())
}

#[test]
fn test_backward_vector_root_seeds_ones() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![1.0, 2.0, 3.0])?;
    let y = graph.scale(a, -2.0)?;
    backward_graph(&mut graph, y)?;
    check_array_near(graph.grad(a)?, &[3], &[-2.0, -2.0, -2.0], 1e-12);
    Ok(())
}

#[test]
fn test_backward_reads_current_operand_data() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(array![2.0])?;
    let b = graph.leaf(array![3.0])?;
    let c = graph.mul(a, b)?;
    let d = graph.sum(c)?;

    // b changes after the forward pass; its current value drives a's gradient.
    graph.node_mut(b)?.accumulate_grad(&array![1.0].into_dyn())?;
    graph.step(b, 1.0)?;
    graph.zero_grad(b)?;

    backward_graph(&mut graph, d)?;
    check_array_near(graph.grad(a)?, &[1], &[2.0], 1e-12);
    Ok(())
}

#[test]
fn test_backward_foreign_root() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let mut other = Graph::new();
    graph.leaf(array![1.0])?;
    let foreign = other.leaf(array![1.0])?;
    let result = backward_graph(&mut graph, foreign);
    assert!(matches!(result, Err(AutogradError::InvalidArgument(_))));
    Ok(())
}
