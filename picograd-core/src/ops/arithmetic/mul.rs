use crate::autograd::{Graph, NodeId, Op};
use crate::error::PicogradError;

/// Builds `a * b`.
///
/// Backward rule: product rule, `a.grad += b.value * grad` and
/// `b.grad += a.value * grad`.
///
/// # Errors
/// `NodeOutOfBounds` if either operand does not belong to `graph`.
pub fn mul_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, PicogradError> {
    let value = graph.value(a)? * graph.value(b)?;
    Ok(graph.push_op(value, Op::Mul(a, b)))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
