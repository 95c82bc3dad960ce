// src/graph.rs

use crate::autograd::{self, BackwardOp};
use crate::error::AutogradError;
use crate::node::{Node, NodeId};
use crate::ops;
use ndarray::{Array, ArrayD, Dimension, IxDyn};
use num_traits::ToPrimitive;

/// Arena owning every `Node` of a computation graph.
///
/// Nodes refer to their parents through [`NodeId`] handles into this arena, so the
/// graph never holds reference cycles and the traversal's visited set is a plain
/// bitset over slots. Single-threaded: the graph is mutated only through `&mut self`.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

/// Marker returned by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
}

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Number of nodes currently alive in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // --- Leaf construction ---

    /// Adds a leaf holding `data`. A 0-d array is stored as a 1-element vector.
    pub fn leaf<D: Dimension>(&mut self, data: Array<f64, D>) -> Result<NodeId, AutogradError> {
        let node = Node::new(data.into_dyn(), true, None)?;
        Ok(self.push(node))
    }

    /// Adds a leaf holding a single number, stored with shape `[1]`.
    pub fn leaf_scalar<S: ToPrimitive>(&mut self, value: S) -> Result<NodeId, AutogradError> {
        let value = value.to_f64().ok_or_else(|| {
            AutogradError::invalid_argument("leaf value is not representable as f64")
        })?;
        self.leaf(ArrayD::from_elem(IxDyn(&[1]), value))
    }

    /// Adds a leaf from raw row-major values.
    ///
    /// # Errors
    /// `InvalidArgument` if `values` cannot fill `shape`.
    pub fn leaf_from_vec(&mut self, values: Vec<f64>, shape: &[usize]) -> Result<NodeId, AutogradError> {
        let len = values.len();
        let data = ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|e| {
            AutogradError::invalid_argument(format!(
                "cannot build an array of shape {:?} from {} values: {}",
                shape, len, e
            ))
        })?;
        self.leaf(data)
    }

    /// Records the output of an operation together with its backward rule.
    pub(crate) fn push_op(&mut self, data: ArrayD<f64>, op: BackwardOp) -> Result<NodeId, AutogradError> {
        let node = Node::new(data, false, Some(op))?;
        Ok(self.push(node))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId {
            index: self.nodes.len(),
            uid: node.id(),
        };
        log::trace!("graph: created {}", node);
        self.nodes.push(node);
        id
    }

    // --- Access ---

    /// Resolves a handle.
    ///
    /// # Errors
    /// `InvalidArgument` if the handle does not designate a live node of this graph.
    pub fn node(&self, id: NodeId) -> Result<&Node, AutogradError> {
        self.nodes
            .get(id.index)
            .filter(|node| node.id() == id.uid)
            .ok_or_else(|| {
                AutogradError::invalid_argument(format!(
                    "{} does not refer to a node of this graph",
                    id
                ))
            })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, AutogradError> {
        self.nodes
            .get_mut(id.index)
            .filter(|node| node.id() == id.uid)
            .ok_or_else(|| {
                AutogradError::invalid_argument(format!(
                    "{} does not refer to a node of this graph",
                    id
                ))
            })
    }

    pub fn data(&self, id: NodeId) -> Result<&ArrayD<f64>, AutogradError> {
        Ok(self.node(id)?.data())
    }

    pub fn grad(&self, id: NodeId) -> Result<&ArrayD<f64>, AutogradError> {
        Ok(self.node(id)?.grad())
    }

    pub fn is_leaf(&self, id: NodeId) -> Result<bool, AutogradError> {
        Ok(self.node(id)?.is_leaf())
    }

    pub fn parents(&self, id: NodeId) -> Result<Vec<NodeId>, AutogradError> {
        Ok(self.node(id)?.parents())
    }

    // --- Mutation ---

    pub fn zero_grad(&mut self, id: NodeId) -> Result<(), AutogradError> {
        self.node_mut(id)?.zero_grad();
        Ok(())
    }

    /// Zeroes the gradient of every node in the arena.
    pub fn zero_grad_all(&mut self) {
        self.nodes.iter_mut().for_each(Node::zero_grad);
    }

    /// `data -= lr * grad` on one node. Intended for leaves.
    pub fn step(&mut self, id: NodeId, lr: f64) -> Result<(), AutogradError> {
        let node = self.node_mut(id)?;
        if !node.is_leaf() {
            log::warn!("step() called on non-leaf {}; derived data is overwritten", id);
        }
        node.step(lr);
        Ok(())
    }

    /// Applies the backward rule of `id` with its current `grad` as output gradient,
    /// accumulating one contribution into each parent.
    ///
    /// # Errors
    /// `InvalidState` if `id` is a leaf.
    pub fn backward(&mut self, id: NodeId) -> Result<(), AutogradError> {
        let node = self.node(id)?;
        let op = node.backward_op().ok_or_else(|| {
            AutogradError::invalid_state(format!("backward() called on leaf node {}", id))
        })?;

        // --- 1. Calculate all local gradients FIRST ---
        let input_grads = op.backward(self, node.grad())?;
        let input_ids = op.inputs();
        if input_grads.len() != input_ids.len() {
            return Err(AutogradError::invalid_state(format!(
                "{} returned {} gradients for {} inputs",
                op.name(),
                input_grads.len(),
                input_ids.len()
            )));
        }
        log::trace!("backward: {} ({}) -> {:?}", id, op.name(), input_ids);

        // --- 2. Accumulate gradients into the parents ---
        for (input_id, grad) in input_ids.into_iter().zip(input_grads) {
            self.node_mut(input_id)?.accumulate_grad(&grad)?;
        }
        Ok(())
    }

    /// Runs the full backward traversal from `root`. See [`autograd::backward_graph`].
    pub fn backward_graph(&mut self, root: NodeId) -> Result<(), AutogradError> {
        autograd::backward_graph(self, root)
    }

    // --- Lifecycle ---

    /// Remembers the current arena size.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            len: self.nodes.len(),
        }
    }

    /// Drops every node created after `checkpoint`. Their handles become invalid.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        if checkpoint.len < self.nodes.len() {
            log::debug!(
                "graph: rewinding {} nodes",
                self.nodes.len() - checkpoint.len
            );
            self.nodes.truncate(checkpoint.len);
        }
    }

    // --- Operations ---

    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
        ops::arithmetic::add::add_op(self, a, b)
    }

    pub fn broadcast_add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
        ops::arithmetic::add::broadcast_add_op(self, a, b)
    }

    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
        ops::arithmetic::sub::sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
        ops::arithmetic::mul::mul_op(self, a, b)
    }

    pub fn scale<S: ToPrimitive>(&mut self, a: NodeId, factor: S) -> Result<NodeId, AutogradError> {
        ops::arithmetic::scale::scale_op(self, a, factor)
    }

    pub fn dot(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
        ops::linalg::matmul::dot_op(self, a, b)
    }

    pub fn transpose(&mut self, a: NodeId) -> Result<NodeId, AutogradError> {
        ops::linalg::transpose::transpose_op(self, a)
    }

    pub fn sum(&mut self, a: NodeId) -> Result<NodeId, AutogradError> {
        ops::reduction::sum::sum_op(self, a)
    }

    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, AutogradError> {
        ops::activation::relu::relu_op(self, a)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
