use crate::error::AutogradError;
use crate::graph::Graph;
use crate::nn::Parameter;
use crate::node::NodeId;

/// The base trait for parameter containers.
///
/// A module owns handles to leaves of a [`Graph`]; the graph owns the values. The
/// gradient utilities below work on whatever [`parameters`](Module::parameters)
/// returns, so implementors only provide the forward composition.
pub trait Module: std::fmt::Debug {
    /// Builds the module's output node from `input`.
    fn forward(&self, graph: &mut Graph, input: NodeId) -> Result<NodeId, AutogradError>;

    /// Returns all learnable parameters of the module.
    fn parameters(&self) -> Vec<Parameter>;

    /// Resets the gradient of every parameter to zeros.
    fn zero_grad(&self, graph: &mut Graph) -> Result<(), AutogradError> {
        for param in self.parameters() {
            graph.zero_grad(param.id())?;
        }
        Ok(())
    }

    /// Plain gradient descent on every parameter: `data -= lr * grad`.
    fn step(&self, graph: &mut Graph, lr: f64) -> Result<(), AutogradError> {
        for param in self.parameters() {
            graph.step(param.id(), lr)?;
        }
        Ok(())
    }
}
