use crate::autograd::{Graph, NodeId, Op};
use crate::error::PicogradError;

/// Builds `a + b`.
///
/// Backward rule (see [`crate::autograd::backward`]): the local derivative of a
/// sum with respect to each operand is 1, so both operands receive the node's
/// gradient unchanged.
///
/// # Errors
/// `NodeOutOfBounds` if either operand does not belong to `graph`.
pub fn add_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, PicogradError> {
    let value = graph.value(a)? + graph.value(b)?;
    Ok(graph.push_op(value, Op::Add(a, b)))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
