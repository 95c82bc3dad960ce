use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use ndarray::{Array, Dimension};
use std::fmt;

/// A learnable leaf of a [`Module`](crate::nn::Module).
///
/// Thin wrapper over the leaf's handle: the values themselves live in the graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter(NodeId);

impl Parameter {
    /// Registers `data` as a new leaf of `graph`.
    pub fn new<D: Dimension>(graph: &mut Graph, data: Array<f64, D>) -> Result<Self, AutogradError> {
        Ok(Parameter(graph.leaf(data)?))
    }

    /// Handle of the underlying leaf, for use as an operand.
    pub fn id(&self) -> NodeId {
        self.0
    }
}

impl From<Parameter> for NodeId {
    fn from(param: Parameter) -> Self {
        param.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({})", self.0)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
