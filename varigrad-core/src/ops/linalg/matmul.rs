// varigrad-core/src/ops/linalg/matmul.rs

use crate::autograd::BackwardOp;
use crate::error::{incompatible_shapes, AutogradError};
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::broadcast_utils::reshape_logical;
use ndarray::{Array2, ArrayD, Ix2};

// --- Forward Operation ---

/// Matrix product `a · b`.
///
/// Operands are matrices or vectors. A vector on the left is treated as a row
/// (`1×n`), a vector on the right as a column (`n×1`), and the corresponding axis is
/// dropped from the result:
///
/// | `a` | `b` | result |
/// |---|---|---|
/// | `m×k` | `k×n` | `m×n` |
/// | `k` | `k×n` | `n` |
/// | `m×k` | `k` | `m` |
/// | `k` | `k` | `1` |
///
/// # Errors
/// A shape error for operands of rank other than 1 or 2, or mismatched inner
/// dimensions.
pub fn dot_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
    let result = {
        let (lhs, rhs) = (graph.data(a)?, graph.data(b)?);
        let lhs_2d = as_matrix(lhs, VectorRole::Row)?;
        let rhs_2d = as_matrix(rhs, VectorRole::Column)?;
        if lhs_2d.ncols() != rhs_2d.nrows() {
            return Err(incompatible_shapes("dot", lhs.shape(), rhs.shape()));
        }
        let product = lhs_2d.dot(&rhs_2d);
        reshape_logical(&product, &output_shape(lhs, rhs, &product))?
    };
    graph.push_op(result, BackwardOp::Dot { lhs: a, rhs: b })
}

// --- Backward Operation ---

/// `da = dy · bᵗ`, `db = aᵗ · dy`, computed on the 2-D forms of the operands and
/// reshaped back to each operand's own shape.
pub(crate) fn dot_backward(
    lhs: &ArrayD<f64>,
    rhs: &ArrayD<f64>,
    grad_output: &ArrayD<f64>,
) -> Result<Vec<ArrayD<f64>>, AutogradError> {
    let lhs_2d = as_matrix(lhs, VectorRole::Row)?;
    let rhs_2d = as_matrix(rhs, VectorRole::Column)?;
    let grad_2d = Array2::from_shape_vec(
        (lhs_2d.nrows(), rhs_2d.ncols()),
        grad_output.iter().copied().collect(),
    )?;

    let grad_lhs = grad_2d.dot(&rhs_2d.t());
    let grad_rhs = lhs_2d.t().dot(&grad_2d);
    Ok(vec![
        reshape_logical(&grad_lhs, lhs.shape())?,
        reshape_logical(&grad_rhs, rhs.shape())?,
    ])
}

// --- Helpers ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VectorRole {
    Row,
    Column,
}

/// 2-D copy of a matrix or vector operand.
fn as_matrix(array: &ArrayD<f64>, role: VectorRole) -> Result<Array2<f64>, AutogradError> {
    if array.ndim() == 1 {
        let n = array.len();
        let shape = match role {
            VectorRole::Row => (1, n),
            VectorRole::Column => (n, 1),
        };
        return Ok(Array2::from_shape_vec(shape, array.iter().copied().collect())?);
    }
    Ok(array.view().into_dimensionality::<Ix2>()?.to_owned())
}

fn output_shape(lhs: &ArrayD<f64>, rhs: &ArrayD<f64>, product: &Array2<f64>) -> Vec<usize> {
    match (lhs.ndim(), rhs.ndim()) {
        (1, 1) => vec![1],
        (1, _) => vec![product.ncols()],
        (_, 1) => vec![product.nrows()],
        _ => vec![product.nrows(), product.ncols()],
    }
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
