use crate::autograd::BackwardOp;
use crate::error::{incompatible_shapes, AutogradError};
use crate::graph::Graph;
use crate::node::NodeId;
use ndarray::{ArrayD, IxDyn};

/// Sums every element of `a` into a 1-element node.
pub fn sum_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, AutogradError> {
    let total = graph.data(a)?.sum();
    graph.push_op(
        ArrayD::from_elem(IxDyn(&[1]), total),
        BackwardOp::Sum { input: a },
    )
}

/// Every input element contributed once to the sum, so the single output gradient
/// is broadcast back over the input's full shape.
pub(crate) fn sum_backward(
    input: &ArrayD<f64>,
    grad_output: &ArrayD<f64>,
) -> Result<Vec<ArrayD<f64>>, AutogradError> {
    let grad = grad_output
        .broadcast(input.raw_dim())
        .ok_or_else(|| incompatible_shapes("sum backward", grad_output.shape(), input.shape()))?
        .to_owned();
    Ok(vec![grad])
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
