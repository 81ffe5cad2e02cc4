use crate::autograd::{Graph, NodeId, Op};
use crate::error::PicogradError;

/// Builds `tanh(a)`.
///
/// Mathematically `(e^{2x} - 1) / (e^{2x} + 1)`, but evaluated with
/// [`f64::tanh`], which saturates to `±1` for large `|x|` where the quotient
/// form overflows to `inf / inf = NaN`. A NaN input still yields NaN.
///
/// Backward rule: `a.grad += (1 - tanh(a)^2) * grad`, expressed through the
/// node's own output so `x` is never revisited.
pub fn tanh_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, PicogradError> {
    let x = graph.value(a)?;
    Ok(graph.push_op(x.tanh(), Op::Tanh(a)))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
