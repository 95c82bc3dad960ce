use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use ndarray::ArrayD;

/// Reverses the axes of `a` (a no-op on vectors).
pub fn transpose_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, AutogradError> {
    let result = reversed_axes(graph.data(a)?);
    graph.push_op(result, BackwardOp::Transpose { input: a })
}

/// The gradient is transposed back to the operand's layout.
pub(crate) fn transpose_backward(grad_output: &ArrayD<f64>) -> Vec<ArrayD<f64>> {
    vec![reversed_axes(grad_output)]
}

/// Owned, row-major copy with axes reversed.
fn reversed_axes(array: &ArrayD<f64>) -> ArrayD<f64> {
    array.t().as_standard_layout().into_owned()
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;
