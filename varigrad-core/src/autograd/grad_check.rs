use crate::autograd::backward_graph;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use ndarray::ArrayD;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical_grad:?} != numerical {numerical_grad:?} (difference {difference:?})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}, element {element_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        value: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutogradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutogradError),

    #[error("Graph error during gradient check: {0}")]
    GraphError(AutogradError),
}

impl From<AutogradError> for GradCheckError {
    fn from(err: AutogradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Step size and tolerances of [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckOptions {
    /// Perturbation used for the central difference.
    pub epsilon: f64,
    /// Absolute tolerance between analytical and numerical gradients.
    pub abs_tolerance: f64,
    /// Relative tolerance, used when the absolute one is exceeded.
    pub rel_tolerance: f64,
}

impl Default for GradCheckOptions {
    fn default() -> Self {
        GradCheckOptions {
            epsilon: 1e-6,
            abs_tolerance: 1e-4,
            rel_tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` builds a graph from the leaves it receives (one per entry of `inputs`, in
/// order) and returns its output node. The objective is the sum of the output's
/// elements, which is what the all-ones seed of [`backward_graph`] differentiates.
/// Every evaluation runs on a fresh `Graph`.
///
/// For each input element `x_i` the numerical gradient is
/// `(f(x + eps * e_i) - f(x - eps * e_i)) / (2 * eps)`.
pub fn check_grad<F>(
    func: F,
    inputs: &[ArrayD<f64>],
    options: &GradCheckOptions,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, AutogradError>,
{
    // --- 1. Analytical gradients ---
    let mut graph = Graph::new();
    let leaves = inputs
        .iter()
        .map(|input| graph.leaf(input.clone()))
        .collect::<Result<Vec<_>, _>>()?;
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    backward_graph(&mut graph, output).map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Compare against central differences, element by element ---
    for (input_index, &leaf) in leaves.iter().enumerate() {
        let analytical: Vec<f64> = graph.grad(leaf)?.iter().copied().collect();

        for (element_index, &analytical_grad) in analytical.iter().enumerate() {
            let loss_plus = evaluate(&func, inputs, input_index, element_index, options.epsilon)?;
            let loss_minus = evaluate(&func, inputs, input_index, element_index, -options.epsilon)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * options.epsilon);

            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index,
                    element_index,
                    loss_plus,
                    loss_minus,
                });
            }
            if !analytical_grad.is_finite() {
                return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                    input_index,
                    element_index,
                    value: analytical_grad,
                });
            }

            let close = approx::relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = options.abs_tolerance,
                max_relative = options.rel_tolerance
            );
            if !close {
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical_grad,
                    numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }
    log::debug!("check_grad: {} inputs passed", inputs.len());
    Ok(())
}

/// Sum of `func`'s output with one input element shifted by `delta`.
fn evaluate<F>(
    func: &F,
    inputs: &[ArrayD<f64>],
    input_index: usize,
    element_index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, AutogradError>,
{
    let mut graph = Graph::new();
    let mut leaves = Vec::with_capacity(inputs.len());
    for (i, input) in inputs.iter().enumerate() {
        let mut data = input.clone();
        if i == input_index {
            if let Some(x) = data.iter_mut().nth(element_index) {
                *x += delta;
            }
        }
        leaves.push(graph.leaf(data)?);
    }
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(graph.data(output)?.sum())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
