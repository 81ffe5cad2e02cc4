use crate::autograd::{Graph, NodeId};
use crate::error::PicogradError;
use crate::ops::arithmetic::{add_op, neg_op};

/// Builds `a - b` as `a + (-b)`.
pub fn sub_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, PicogradError> {
    graph.node(a)?;
    let neg_b = neg_op(graph, b)?;
    add_op(graph, a, neg_b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
