use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::PicogradError;

/// Orders every node reachable from `root` so that each node precedes both of
/// its operands. `root` comes first and every reachable node appears exactly
/// once, however many paths lead to it.
///
/// The order matches a recursive depth-first walk that marks a node visited,
/// visits `operand_a`, then `operand_b`, and finally prepends the node to the
/// result. It is computed with an explicit work stack and a visited bitset
/// sized to the arena, so deep graphs cannot overflow the call stack.
///
/// # Errors
/// `NodeOutOfBounds` if `root` does not belong to `graph`.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, PicogradError> {
    graph.node(root)?;

    let mut visited = vec![false; graph.len()];
    let mut post_order = Vec::new();
    // (node, operands already scheduled)
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            post_order.push(id);
            continue;
        }
        if visited[id.0] {
            continue;
        }
        visited[id.0] = true;
        log::trace!("[topological_sort] Visiting node {}", id);

        let node = graph.node(id)?;
        stack.push((id, true));
        // Pushed in reverse so operand_a is fully processed before operand_b.
        if let Some(b) = node.operand_b() {
            stack.push((b, false));
        }
        if let Some(a) = node.operand_a() {
            stack.push((a, false));
        }
    }

    post_order.reverse();
    Ok(post_order)
}

#[cfg(test)]
#[path = "graph_sort_test.rs"]
mod tests;
