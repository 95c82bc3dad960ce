use ndarray::ShapeError;
use thiserror::Error;

/// Custom error type for the varigrad engine.
#[derive(Error, Debug, Clone)]
pub enum AutogradError {
    /// An operand handle, scalar or raw buffer was rejected at construction time.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not valid for the node in its current state
    /// (e.g. `backward()` on a leaf).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Shape failure reported by the array backend. Not re-interpreted.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl AutogradError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        AutogradError::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        AutogradError::InvalidState(message.into())
    }
}

/// Builds the backend's "incompatible shape" error after logging the offending shapes.
pub(crate) fn incompatible_shapes(operation: &str, lhs: &[usize], rhs: &[usize]) -> AutogradError {
    log::debug!(
        "{}: incompatible shapes {:?} and {:?}",
        operation,
        lhs,
        rhs
    );
    AutogradError::Shape(ShapeError::from_kind(ndarray::ErrorKind::IncompatibleShape))
}
