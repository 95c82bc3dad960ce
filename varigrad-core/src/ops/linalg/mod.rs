//! Linear algebra: matrix product and transpose.

pub mod matmul;
pub mod transpose;

pub use matmul::dot_op;
pub use transpose::transpose_op;
