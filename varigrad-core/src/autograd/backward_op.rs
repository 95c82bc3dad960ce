use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::activation::relu;
use crate::ops::arithmetic::{add, mul, scale, sub};
use crate::ops::linalg::{matmul, transpose};
use crate::ops::reduction::sum;
use ndarray::ArrayD;

/// Backward rule of a non-leaf node.
///
/// Each variant records the operation that produced the node and the handles of its
/// operands, plus any constant the adjoint needs (the factor of a scalar multiply).
/// Operand values are not copied: the adjoint reads them from the live graph when it
/// runs, so a change to an operand's data between forward and backward is observed.
#[derive(Debug, Clone, PartialEq)]
pub enum BackwardOp {
    /// `lhs + rhs`, same shapes.
    Add { lhs: NodeId, rhs: NodeId },
    /// `matrix (m×n) + row (n)`, the row broadcast over every matrix row.
    BroadcastAdd { matrix: NodeId, row: NodeId },
    /// `lhs - rhs`.
    Sub { lhs: NodeId, rhs: NodeId },
    /// Elementwise `lhs ⊙ rhs`.
    Mul { lhs: NodeId, rhs: NodeId },
    /// `input * factor` for a plain number.
    Scale { input: NodeId, factor: f64 },
    /// Matrix product `lhs · rhs`.
    Dot { lhs: NodeId, rhs: NodeId },
    /// Sum of all elements.
    Sum { input: NodeId },
    /// `max(input, 0)`.
    Relu { input: NodeId },
    /// Axes reversed.
    Transpose { input: NodeId },
}

impl BackwardOp {
    /// Short operation name, for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            BackwardOp::Add { .. } => "AddBackward",
            BackwardOp::BroadcastAdd { .. } => "BroadcastAddBackward",
            BackwardOp::Sub { .. } => "SubBackward",
            BackwardOp::Mul { .. } => "MulBackward",
            BackwardOp::Scale { .. } => "ScaleBackward",
            BackwardOp::Dot { .. } => "DotBackward",
            BackwardOp::Sum { .. } => "SumBackward",
            BackwardOp::Relu { .. } => "ReluBackward",
            BackwardOp::Transpose { .. } => "TransposeBackward",
        }
    }

    /// Operand handles in the order the forward operation consumed them.
    ///
    /// The gradients returned by `backward` follow the same order.
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Add { lhs, rhs }
            | BackwardOp::Sub { lhs, rhs }
            | BackwardOp::Mul { lhs, rhs }
            | BackwardOp::Dot { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::BroadcastAdd { matrix, row } => vec![matrix, row],
            BackwardOp::Scale { input, .. }
            | BackwardOp::Sum { input }
            | BackwardOp::Relu { input }
            | BackwardOp::Transpose { input } => vec![input],
        }
    }

    /// Computes the gradient contribution for each input given the gradient flowing
    /// into this node's output (`grad_output`).
    ///
    /// Nothing is accumulated here; [`Graph::backward`] adds the returned arrays into
    /// the operands' `grad`.
    pub(crate) fn backward(
        &self,
        graph: &Graph,
        grad_output: &ArrayD<f64>,
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        match *self {
            BackwardOp::Add { .. } => Ok(add::add_backward(grad_output)),
            BackwardOp::BroadcastAdd { .. } => Ok(add::broadcast_add_backward(grad_output)),
            BackwardOp::Sub { .. } => Ok(sub::sub_backward(grad_output)),
            BackwardOp::Mul { lhs, rhs } => {
                mul::mul_backward(graph.data(lhs)?, graph.data(rhs)?, grad_output)
            }
            BackwardOp::Scale { factor, .. } => Ok(scale::scale_backward(grad_output, factor)),
            BackwardOp::Dot { lhs, rhs } => {
                matmul::dot_backward(graph.data(lhs)?, graph.data(rhs)?, grad_output)
            }
            BackwardOp::Sum { input } => sum::sum_backward(graph.data(input)?, grad_output),
            BackwardOp::Relu { input } => relu::relu_backward(graph.data(input)?, grad_output),
            BackwardOp::Transpose { .. } => Ok(transpose::transpose_backward(grad_output)),
        }
    }
}
