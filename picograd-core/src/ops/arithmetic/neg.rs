use crate::autograd::{Graph, NodeId};
use crate::error::PicogradError;
use crate::ops::arithmetic::mul_op;

/// Builds `-a` as `a * (-1)`.
///
/// The `-1` constant is a fresh leaf, so the result inherits the `Mul` rule.
pub fn neg_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, PicogradError> {
    graph.node(a)?;
    let minus_one = graph.constant(-1.0);
    graph.set_label(minus_one, "neg")?;
    mul_op(graph, a, minus_one)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
