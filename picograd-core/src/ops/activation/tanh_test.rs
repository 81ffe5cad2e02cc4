use super::*;
use crate::autograd::grad_check::check_grad;
use crate::autograd::OpKind;
use approx::assert_relative_eq;

#[test]
fn test_tanh_forward() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let zero = graph.constant(0.0);
    let one = graph.constant(1.0);
    let t0 = tanh_op(&mut graph, zero)?;
    let t1 = tanh_op(&mut graph, one)?;

    assert_relative_eq!(graph.value(t0)?, 0.0, epsilon = 1e-15);
    let e2 = (2.0f64).exp();
    assert_relative_eq!(graph.value(t1)?, (e2 - 1.0) / (e2 + 1.0), epsilon = 1e-15);

    let node = graph.node(t1)?;
    assert_eq!(node.op_kind(), OpKind::Tanh);
    assert_eq!(node.operand_a(), Some(one));
    assert_eq!(node.operand_b(), None);
    Ok(())
}

#[test]
fn test_tanh_saturates_on_extreme_inputs() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let big = graph.constant(1000.0);
    let small = graph.constant(-1000.0);
    let tb = tanh_op(&mut graph, big)?;
    let ts = tanh_op(&mut graph, small)?;
    assert_eq!(graph.value(tb)?, 1.0);
    assert_eq!(graph.value(ts)?, -1.0);

    graph.set_grad(tb, 1.0)?;
    graph.backward(tb)?;
    assert_eq!(graph.grad(big)?, 0.0);
    Ok(())
}

#[test]
fn test_tanh_propagates_nan() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let x = graph.constant(f64::NAN);
    let t = tanh_op(&mut graph, x)?;
    assert!(graph.value(t)?.is_nan());
    Ok(())
}

#[test]
fn test_tanh_grad_check() {
    for x in [-2.0, -0.3, 0.0, 0.6, 1.9] {
        let result = check_grad(|g, xs| tanh_op(g, xs[0]), &[x], 1e-6, 1e-6);
        assert!(result.is_ok(), "x = {}: {:?}", x, result);
    }
}
