use crate::autograd::{Graph, NodeId};
use crate::error::PicogradError;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(PicogradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(PicogradError),

    #[error("Graph error during intermediate calculation: {0}")]
    GraphError(PicogradError),
}

impl From<PicogradError> for GradCheckError {
    fn from(err: PicogradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs` and must
/// return the scalar output node. The analytical gradient of each input comes
/// from a single backward pass seeded with `1.0`; the numerical one is
/// `(f(x + eps) - f(x - eps)) / (2 * eps)`, each side evaluated on its own
/// graph.
///
/// Gradients agree when their absolute difference is within `tolerance`, or
/// their relative difference is.
///
/// # Errors
/// Returns the first mismatching or non-finite gradient, or the error raised
/// by `func` itself.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, PicogradError>,
{
    // --- 1. Analytical gradients ---
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|x| graph.input(*x)).collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph.set_grad(output, 1.0)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves
        .iter()
        .map(|id| graph.grad(*id))
        .collect::<Result<_, _>>()?;

    // --- 2. Numerical gradients, one input at a time ---
    for (i, analytical_grad) in analytical.into_iter().enumerate() {
        let loss_plus = evaluate(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        log::trace!(
            "[check_grad] input {}: analytical {} numerical {}",
            i,
            analytical_grad,
            numerical_grad
        );
    }
    Ok(())
}

/// Evaluates `func` on a fresh graph with input `index` shifted by `delta`.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, PicogradError>,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(j, x)| graph.input(if j == index { x + delta } else { *x }))
        .collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(graph.value(output)?)
}
