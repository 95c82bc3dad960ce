//! Elementwise arithmetic: add, broadcast add, sub, mul and scalar mul.

pub mod add;
pub mod mul;
pub mod scale;
pub mod sub;

pub use add::{add_op, broadcast_add_op};
pub use mul::mul_op;
pub use scale::scale_op;
pub use sub::sub_op;
