//! # Autograd
//!
//! Reverse-mode differentiation over a [`Graph`](crate::graph::Graph):
//!
//! - [`BackwardOp`]: the backward rule recorded on every non-leaf node.
//! - [`topological_sort`] / [`backward_graph`]: the traversal that drives the rules
//!   so that each node's gradient is complete before it propagates further.
//! - [`grad_check`]: finite-difference verification of the analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod traversal;

pub use backward_op::BackwardOp;
pub use traversal::{backward_graph, topological_sort};
