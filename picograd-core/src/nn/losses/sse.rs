use crate::autograd::{Graph, NodeId};
use crate::error::PicogradError;
use crate::ops::{mul_op, pairwise_sum_op, sub_op};

/// Sum of squared errors: `sum_i (predictions[i] - targets[i])^2`.
///
/// Each target becomes a constant node; every term is built as `d * d` with
/// `d = p - t`, and the terms are combined with [`pairwise_sum_op`]. Gradients
/// flow back only into `predictions`.
///
/// # Errors
/// * `DimensionMismatch` if the two slices differ in length.
/// * `EmptyInput` if there are no predictions.
pub fn sum_squared_error(
    graph: &mut Graph,
    predictions: &[NodeId],
    targets: &[f64],
) -> Result<NodeId, PicogradError> {
    if predictions.len() != targets.len() {
        return Err(PicogradError::DimensionMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            operation: "sum_squared_error".to_string(),
        });
    }
    if predictions.is_empty() {
        return Err(PicogradError::EmptyInput {
            operation: "sum_squared_error".to_string(),
        });
    }
    let squares = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| {
            let target = graph.constant(*t);
            graph.set_label(target, "ygt")?;
            let diff = sub_op(graph, *p, target)?;
            mul_op(graph, diff, diff)
        })
        .collect::<Result<Vec<_>, _>>()?;
    pairwise_sum_op(graph, &squares)
}

#[cfg(test)]
#[path = "sse_test.rs"]
mod tests;
