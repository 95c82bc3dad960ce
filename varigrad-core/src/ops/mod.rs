//! # Graph Operations Module (`ops`)
//!
//! Every primitive operation of the engine, grouped by family.
//!
//! - **`_op` functions:** each operation has a function (`add_op`, `dot_op`, ...) that
//!   validates its operand handles, computes the forward value from the operands'
//!   `data` and records the result in the graph with the matching
//!   [`BackwardOp`](crate::autograd::BackwardOp). [`Graph`](crate::graph::Graph)
//!   exposes them as methods (`graph.add(a, b)`).
//! - **`_backward` functions:** the adjoint of each operation lives next to its
//!   forward. It returns one gradient per operand and never touches the graph;
//!   accumulation is done by [`Graph::backward`](crate::graph::Graph::backward).
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, broadcast add, sub, elementwise mul, scalar mul.
//! - [`linalg`]: matrix product and transpose.
//! - [`reduction`]: sum of all elements.
//! - [`activation`]: ReLU.
//! - [`broadcast_utils`]: shape checks and reshaping glue shared by the above.

pub mod activation;
pub mod arithmetic;
pub mod broadcast_utils;
pub mod linalg;
pub mod reduction;
