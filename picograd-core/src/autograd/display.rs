use crate::autograd::{Graph, NodeId};
use crate::error::PicogradError;
use std::fmt::Write;

const INDENT: &str = "• • ";

/// Renders the expression tree below `root` for debugging.
///
/// Each node prints as `label = data: v, grad: g`; its first operand, its
/// operator symbol and its second operand follow on separate lines, indented
/// one level deeper. Shared sub-expressions are printed once per path, so the
/// output can grow exponentially with depth on graphs with heavy sharing,
/// such as a full network; use it on small expressions.
pub fn render_graph(graph: &Graph, root: NodeId) -> Result<String, PicogradError> {
    let mut out = String::new();
    render_node(graph, root, 0, &mut out)?;
    Ok(out)
}

fn render_node(graph: &Graph, id: NodeId, depth: usize, out: &mut String) -> Result<(), PicogradError> {
    let node = graph.node(id)?;
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", node);

    let indent = INDENT.repeat(depth + 1);
    if let Some(a) = node.operand_a() {
        out.push_str(&indent);
        render_node(graph, a, depth + 1, out)?;
    }
    let symbol = node.op_kind().symbol();
    if !symbol.is_empty() {
        let _ = writeln!(out, "{}{}", indent, symbol);
    }
    if let Some(b) = node.operand_b() {
        out.push_str(&indent);
        render_node(graph, b, depth + 1, out)?;
    }
    Ok(())
}
