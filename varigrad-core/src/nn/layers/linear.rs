use crate::error::{incompatible_shapes, AutogradError};
use crate::graph::Graph;
use crate::nn::init::{uniform_array, uniform_bound};
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::node::NodeId;
use ndarray::{Array1, Array2};
use rand::Rng;

/// Applies a linear transformation to the incoming data: `y = x · W + b`.
///
/// `W` has shape `[in_features, out_features]` and `b` shape `[out_features]`; the
/// bias is broadcast over the rows of a `[batch, in_features]` input.
#[derive(Debug, Clone)]
pub struct Linear {
    weight: Parameter,
    bias: Parameter,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a new Linear layer with parameters drawn from `U[-1/in, 1/in]`.
    ///
    /// # Arguments
    ///
    /// * `graph` - Graph that will own the weight and bias leaves.
    /// * `in_features` - Size of each input sample.
    /// * `out_features` - Size of each output sample.
    pub fn new(graph: &mut Graph, in_features: usize, out_features: usize) -> Result<Self, AutogradError> {
        Self::with_rng(graph, in_features, out_features, &mut rand::thread_rng())
    }

    /// Same as [`Linear::new`] with a caller-provided random number generator.
    pub fn with_rng<R: Rng + ?Sized>(
        graph: &mut Graph,
        in_features: usize,
        out_features: usize,
        rng: &mut R,
    ) -> Result<Self, AutogradError> {
        if in_features == 0 || out_features == 0 {
            return Err(AutogradError::invalid_argument(format!(
                "Linear requires non-zero feature counts, got {}x{}",
                in_features, out_features
            )));
        }
        let bound = uniform_bound(in_features);
        let weight = uniform_array(&[in_features, out_features], bound, rng);
        let bias = uniform_array(&[out_features], bound, rng);
        log::debug!(
            "Linear({}, {}): uniform init in [-{}, {}]",
            in_features,
            out_features,
            bound,
            bound
        );
        Ok(Linear {
            weight: Parameter::new(graph, weight)?,
            bias: Parameter::new(graph, bias)?,
            in_features,
            out_features,
        })
    }

    /// Builds a layer from explicit parameter values.
    ///
    /// # Errors
    /// A shape error if `bias.len()` differs from the number of weight columns.
    pub fn from_arrays(graph: &mut Graph, weight: Array2<f64>, bias: Array1<f64>) -> Result<Self, AutogradError> {
        if weight.ncols() != bias.len() {
            return Err(incompatible_shapes("Linear::from_arrays", weight.shape(), bias.shape()));
        }
        let (in_features, out_features) = weight.dim();
        Ok(Linear {
            weight: Parameter::new(graph, weight)?,
            bias: Parameter::new(graph, bias)?,
            in_features,
            out_features,
        })
    }

    pub fn weight(&self) -> Parameter {
        self.weight
    }

    pub fn bias(&self) -> Parameter {
        self.bias
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl Module for Linear {
    fn forward(&self, graph: &mut Graph, input: NodeId) -> Result<NodeId, AutogradError> {
        let product = graph.dot(input, self.weight.id())?;
        graph.broadcast_add(product, self.bias.id())
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![self.weight, self.bias]
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
