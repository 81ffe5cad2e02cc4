use crate::autograd::{Graph, NodeId};
use crate::error::PicogradError;
use crate::ops::arithmetic::add_op;

/// Sums `values` with a balanced tree of additions.
///
/// The slice is split recursively at `mid = (start + end) / 2` (inclusive
/// bounds); two elements are added directly and a lone element is added to a
/// fresh zero constant. Graph depth stays `O(log n)` instead of the `O(n)` of a
/// left fold, which keeps both traversal depth and accumulated rounding error
/// small.
///
/// # Errors
/// * `EmptyInput` if `values` is empty.
/// * `NodeOutOfBounds` if any value does not belong to `graph`.
pub fn pairwise_sum_op(graph: &mut Graph, values: &[NodeId]) -> Result<NodeId, PicogradError> {
    if values.is_empty() {
        return Err(PicogradError::EmptyInput {
            operation: "pairwise_sum".to_string(),
        });
    }
    for id in values {
        graph.node(*id)?;
    }
    pairwise_sum_range(graph, values, 0, values.len() - 1)
}

fn pairwise_sum_range(
    graph: &mut Graph,
    values: &[NodeId],
    start: usize,
    end: usize,
) -> Result<NodeId, PicogradError> {
    if start == end {
        let zero = graph.constant(0.0);
        graph.set_label(zero, "zero")?;
        return add_op(graph, values[end], zero);
    }
    if end - start == 1 {
        return add_op(graph, values[start], values[end]);
    }
    let mid = (start + end) / 2;
    let left = pairwise_sum_range(graph, values, start, mid)?;
    let right = pairwise_sum_range(graph, values, mid + 1, end)?;
    add_op(graph, left, right)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
