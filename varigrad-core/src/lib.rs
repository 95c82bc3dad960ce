//! # varigrad-core
//!
//! Reverse-mode automatic differentiation over a dynamically built graph of
//! tensor-valued nodes.
//!
//! A [`Graph`] owns every [`Node`]. Leaves are created directly from arrays;
//! operations ([`Graph::add`], [`Graph::dot`], [`Graph::relu`], ...) append derived
//! nodes that remember how to push a gradient back to their operands.
//! [`backward_graph`] seeds the root with ones and runs those rules in reverse
//! topological order, accumulating gradients into every node it reaches.
//!
//! ```
//! use varigrad_core::{ndarray::array, Graph};
//!
//! let mut graph = Graph::new();
//! let a = graph.leaf(array![2.0]).unwrap();
//! let b = graph.leaf(array![3.0]).unwrap();
//! let c = graph.mul(a, b).unwrap();
//! let d = graph.sum(c).unwrap();
//! graph.backward_graph(d).unwrap();
//! assert_eq!(graph.grad(a).unwrap().as_slice().unwrap(), &[3.0]);
//! assert_eq!(graph.grad(b).unwrap().as_slice().unwrap(), &[2.0]);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod node;
pub mod ops;
pub mod utils;

pub use autograd::{backward_graph, topological_sort, BackwardOp};
pub use error::AutogradError;
pub use graph::{Checkpoint, Graph};
pub use node::{Node, NodeId};

// Re-export the array backend and numeric traits used in public signatures
pub use ndarray;
pub use num_traits;
