use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use ndarray::ArrayD;
use num_traits::ToPrimitive;

/// Multiplies every element of `a` by the plain number `factor`.
///
/// # Errors
/// `InvalidArgument` if `factor` cannot be represented as an `f64`.
pub fn scale_op<S: ToPrimitive>(graph: &mut Graph, a: NodeId, factor: S) -> Result<NodeId, AutogradError> {
    let factor = factor.to_f64().ok_or_else(|| {
        AutogradError::invalid_argument("scalar operand is not representable as f64")
    })?;
    let result = graph.data(a)? * factor;
    graph.push_op(result, BackwardOp::Scale { input: a, factor })
}

pub(crate) fn scale_backward(grad_output: &ArrayD<f64>, factor: f64) -> Vec<ArrayD<f64>> {
    vec![grad_output * factor]
}

#[cfg(test)]
#[path = "scale_test.rs"]
mod tests;
