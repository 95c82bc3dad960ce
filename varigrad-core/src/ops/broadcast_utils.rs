use crate::error::{incompatible_shapes, AutogradError};
use ndarray::{ArrayBase, ArrayD, Axis, Data, Dimension, IxDyn};

/// Fails unless `lhs` and `rhs` have exactly the same shape.
pub(crate) fn ensure_same_shape(
    operation: &str,
    lhs: &ArrayD<f64>,
    rhs: &ArrayD<f64>,
) -> Result<(), AutogradError> {
    if lhs.shape() == rhs.shape() {
        Ok(())
    } else {
        Err(incompatible_shapes(operation, lhs.shape(), rhs.shape()))
    }
}

/// Checks that a length-`n` vector can be broadcast over the rows of an `m×n` matrix.
pub(crate) fn ensure_row_broadcast(
    operation: &str,
    matrix: &ArrayD<f64>,
    row: &ArrayD<f64>,
) -> Result<(), AutogradError> {
    match (matrix.shape(), row.shape()) {
        (&[_, cols], &[len]) if cols == len => Ok(()),
        (m, r) => Err(incompatible_shapes(operation, m, r)),
    }
}

/// Sums a gradient over the rows it was broadcast across: `(m×n) -> (n)`.
pub(crate) fn column_sum(grad: &ArrayD<f64>) -> ArrayD<f64> {
    grad.sum_axis(Axis(0))
}

/// Rebuilds `array` with `shape`, walking elements in logical (row-major) order
/// regardless of the source memory layout.
pub(crate) fn reshape_logical<S, D>(
    array: &ArrayBase<S, D>,
    shape: &[usize],
) -> Result<ArrayD<f64>, AutogradError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Ok(ArrayD::from_shape_vec(
        IxDyn(shape),
        array.iter().copied().collect(),
    )?)
}

#[cfg(test)]
#[path = "broadcast_utils_test.rs"]
mod tests;
