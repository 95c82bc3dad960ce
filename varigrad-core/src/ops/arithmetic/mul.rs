use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::broadcast_utils::ensure_same_shape;
use ndarray::ArrayD;

// --- Forward Operation ---

/// Element-wise (Hadamard) product of two nodes of identical shape.
pub fn mul_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
    let result = {
        let (lhs, rhs) = (graph.data(a)?, graph.data(b)?);
        ensure_same_shape("mul", lhs, rhs)?;
        lhs * rhs
    };
    graph.push_op(result, BackwardOp::Mul { lhs: a, rhs: b })
}

// --- Backward Operation ---

/// `da = dy ⊙ b`, `db = dy ⊙ a`, using the operands' current data.
pub(crate) fn mul_backward(
    lhs: &ArrayD<f64>,
    rhs: &ArrayD<f64>,
    grad_output: &ArrayD<f64>,
) -> Result<Vec<ArrayD<f64>>, AutogradError> {
    ensure_same_shape("mul backward", grad_output, lhs)?;
    ensure_same_shape("mul backward", grad_output, rhs)?;
    Ok(vec![grad_output * rhs, grad_output * lhs])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
