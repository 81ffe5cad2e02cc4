use crate::autograd::graph::Graph;
use crate::autograd::graph_sort::topological_sort;
use crate::autograd::node::{NodeId, Op};
use crate::error::PicogradError;

/// Replays the propagation rule of every node reachable from `root`.
///
/// Seeding `root`'s gradient (normally to `1.0`) is the caller's job. Nodes are
/// processed in the order produced by [`topological_sort`], root first, and a
/// rule only ever writes to the node's operands. By the time a node is reached,
/// every consumer has therefore already contributed to its gradient.
///
/// Gradients accumulate: running this twice on the same graph without
/// resetting them adds the contributions twice.
///
/// # Errors
/// `NodeOutOfBounds` if `root` does not belong to `graph`.
pub fn backward(graph: &mut Graph, root: NodeId) -> Result<(), PicogradError> {
    let seed = graph.grad(root)?;
    if seed == 0.0 {
        log::warn!("backward() called on {} with a zero gradient seed; nothing will propagate", root);
    }

    let order = topological_sort(graph, root)?;
    for id in order.iter().copied() {
        propagate(graph, id)?;
    }
    log::debug!("Backward from {} visited {} nodes", root, order.len());
    Ok(())
}

/// Applies the local chain-rule step of a single node to its operands.
/// Leaves have nothing to propagate.
pub(crate) fn propagate(graph: &mut Graph, id: NodeId) -> Result<(), PicogradError> {
    let node = graph.node(id)?;
    let (op, value, grad) = (node.op(), node.value(), node.grad());
    log::trace!("[backward] {} {:?} value={} grad={}", id, op, value, grad);

    match op {
        Op::Leaf => {}
        Op::Add(a, b) => {
            graph.node_mut(a)?.grad += grad;
            graph.node_mut(b)?.grad += grad;
        }
        Op::Mul(a, b) => {
            let a_value = graph.value(a)?;
            let b_value = graph.value(b)?;
            graph.node_mut(a)?.grad += b_value * grad;
            graph.node_mut(b)?.grad += a_value * grad;
        }
        Op::Tanh(a) => {
            // Derivative expressed through the node's own output.
            graph.node_mut(a)?.grad += (1.0 - value * value) * grad;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
