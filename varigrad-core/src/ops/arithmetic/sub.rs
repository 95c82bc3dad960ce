use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::broadcast_utils::ensure_same_shape;
use ndarray::ArrayD;

/// Element-wise `a - b` for nodes of identical shape.
pub fn sub_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
    let result = {
        let (lhs, rhs) = (graph.data(a)?, graph.data(b)?);
        ensure_same_shape("sub", lhs, rhs)?;
        lhs - rhs
    };
    graph.push_op(result, BackwardOp::Sub { lhs: a, rhs: b })
}

pub(crate) fn sub_backward(grad_output: &ArrayD<f64>) -> Vec<ArrayD<f64>> {
    vec![grad_output.clone(), grad_output.mapv(|g| -g)]
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
