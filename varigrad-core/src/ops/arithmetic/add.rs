// varigrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::broadcast_utils::{column_sum, ensure_row_broadcast, ensure_same_shape};
use ndarray::ArrayD;

// --- Forward Operations ---

/// Element-wise addition of two nodes of identical shape.
///
/// # Errors
/// `InvalidArgument` for a foreign handle, a shape error if the shapes differ.
pub fn add_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
    let result = {
        let (lhs, rhs) = (graph.data(a)?, graph.data(b)?);
        ensure_same_shape("add", lhs, rhs)?;
        lhs + rhs
    };
    graph.push_op(result, BackwardOp::Add { lhs: a, rhs: b })
}

/// Adds a length-`n` vector `b` to every row of an `m×n` matrix `a` (bias addition).
///
/// No other broadcasting is performed: `a` must be rank 2 and `b` rank 1 with
/// `b.len() == a.ncols()`.
pub fn broadcast_add_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
    let result = {
        let (matrix, row) = (graph.data(a)?, graph.data(b)?);
        ensure_row_broadcast("broadcast_add", matrix, row)?;
        matrix + row
    };
    graph.push_op(result, BackwardOp::BroadcastAdd { matrix: a, row: b })
}

// --- Backward Operations ---

/// `d(a + b)/da = d(a + b)/db = 1`: the output gradient flows unchanged to both sides.
pub(crate) fn add_backward(grad_output: &ArrayD<f64>) -> Vec<ArrayD<f64>> {
    vec![grad_output.clone(), grad_output.clone()]
}

/// The matrix side receives the output gradient as is; the row was used by every
/// matrix row, so its gradient is the column sum.
pub(crate) fn broadcast_add_backward(grad_output: &ArrayD<f64>) -> Vec<ArrayD<f64>> {
    vec![grad_output.clone(), column_sum(grad_output)]
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
