use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::broadcast_utils::ensure_same_shape;
use ndarray::{ArrayD, Zip};

// --- Forward Operation ---

/// Applies the Rectified Linear Unit element-wise: `max(x, 0)`.
pub fn relu_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, AutogradError> {
    let result = graph.data(a)?.mapv(|x| x.max(0.0));
    graph.push_op(result, BackwardOp::Relu { input: a })
}

// --- Backward Operation ---

/// Masks the output gradient: elements whose input is `<= 0` receive nothing.
pub(crate) fn relu_backward(
    input: &ArrayD<f64>,
    grad_output: &ArrayD<f64>,
) -> Result<Vec<ArrayD<f64>>, AutogradError> {
    ensure_same_shape("relu backward", grad_output, input)?;
    let grad = Zip::from(grad_output)
        .and(input)
        .map_collect(|&g, &x| if x > 0.0 { g } else { 0.0 });
    Ok(vec![grad])
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
