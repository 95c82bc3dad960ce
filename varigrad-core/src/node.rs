// src/node.rs

use crate::autograd::BackwardOp;
use crate::error::{incompatible_shapes, AutogradError};
use ndarray::{ArrayD, IxDyn};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of process-unique node ids. Ids only help debugging and never drive the
/// topological sort.
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a `Node` stored in a [`Graph`](crate::graph::Graph).
///
/// A handle pairs the arena slot with the node's unique id, so a handle coming from
/// another graph (or from a slot released by [`Graph::rewind`](crate::graph::Graph::rewind))
/// is rejected instead of silently aliasing a different node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) uid: u64,
}

impl NodeId {
    /// The unique id of the node this handle points to.
    pub fn uid(&self) -> u64 {
        self.uid
    }

    /// The arena slot of the node.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.uid)
    }
}

/// A vertex of the computation graph.
///
/// A `Node` exclusively owns its value (`data`) and its accumulated gradient (`grad`),
/// which always have the same shape. Leaves are created by the caller and carry no
/// backward rule; every other node is produced by an operation and records that
/// operation, including its operand handles, in a [`BackwardOp`].
///
/// Not `Clone`: a node is identified by its handle, never by the numbers it holds.
#[derive(Debug)]
pub struct Node {
    id: u64,
    data: ArrayD<f64>,
    grad: ArrayD<f64>,
    is_leaf: bool,
    backward: Option<BackwardOp>,
}

impl Node {
    /// Creates a node, normalizing 0-d data to a 1-element array and zeroing `grad`.
    ///
    /// # Errors
    /// `InvalidArgument` if a non-leaf is given no backward rule, or a leaf is given one.
    pub(crate) fn new(
        data: ArrayD<f64>,
        is_leaf: bool,
        backward: Option<BackwardOp>,
    ) -> Result<Self, AutogradError> {
        match (is_leaf, &backward) {
            (false, None) => {
                return Err(AutogradError::invalid_argument(
                    "non-leaf nodes require a backward rule",
                ))
            }
            (true, Some(op)) => {
                return Err(AutogradError::invalid_argument(format!(
                    "leaf nodes cannot carry a backward rule (got {})",
                    op.name()
                )))
            }
            _ => {}
        }

        let data = normalize_rank(data);
        let grad = ArrayD::zeros(data.raw_dim());
        Ok(Node {
            id: NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed),
            data,
            grad,
            is_leaf,
            backward,
        })
    }

    /// Returns the process-unique id assigned at construction.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the node's value.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Returns the gradient accumulated so far.
    pub fn grad(&self) -> &ArrayD<f64> {
        &self.grad
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Returns the backward rule of a non-leaf node, `None` for leaves.
    pub fn backward_op(&self) -> Option<&BackwardOp> {
        self.backward.as_ref()
    }

    /// Returns the operand handles this node was derived from, in operand order.
    pub fn parents(&self) -> Vec<NodeId> {
        self.backward
            .as_ref()
            .map(BackwardOp::inputs)
            .unwrap_or_default()
    }

    /// Overwrites `grad` with zeros of the same shape.
    pub fn zero_grad(&mut self) {
        self.grad.fill(0.0);
    }

    /// Gradient descent update `data -= lr * grad`, in place.
    ///
    /// Meant for leaves; on a derived node this rewrites a computed value.
    pub fn step(&mut self, lr: f64) {
        self.data.scaled_add(-lr, &self.grad);
    }

    /// Adds `contribution` into `grad`. Never overwrites.
    pub(crate) fn accumulate_grad(&mut self, contribution: &ArrayD<f64>) -> Result<(), AutogradError> {
        if contribution.shape() != self.grad.shape() {
            return Err(incompatible_shapes(
                "accumulate_grad",
                self.grad.shape(),
                contribution.shape(),
            ));
        }
        self.grad += contribution;
        Ok(())
    }

    /// Seeds the gradient of a traversal root with ones.
    pub(crate) fn seed_grad(&mut self) {
        self.grad.fill(1.0);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parents: Vec<String> = self.parents().iter().map(|p| p.uid.to_string()).collect();
        write!(
            f,
            "Node(id:{},parents:[{}],is_leaf:{})",
            self.id,
            parents.join(","),
            self.is_leaf
        )
    }
}

/// Scalars (0-d arrays) become 1-element vectors.
fn normalize_rank(data: ArrayD<f64>) -> ArrayD<f64> {
    if data.ndim() == 0 {
        ArrayD::from_elem(IxDyn(&[1]), data.sum())
    } else {
        data
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
