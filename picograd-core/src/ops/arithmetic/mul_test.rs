use super::*;
use crate::autograd::grad_check::check_grad;
use crate::autograd::OpKind;

#[test]
fn test_mul_forward() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let a = graph.constant(2.0);
    let b = graph.constant(3.0);
    let c = mul_op(&mut graph, a, b)?;
    assert_eq!(graph.value(c)?, 6.0);
    assert_eq!(graph.node(c)?.op_kind(), OpKind::Mul);
    Ok(())
}

#[test]
fn test_mul_backward_product_rule() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let a = graph.constant(-4.0);
    let b = graph.constant(0.5);
    let c = mul_op(&mut graph, a, b)?;
    graph.set_grad(c, 2.0)?;
    graph.backward(c)?;
    assert_eq!(graph.grad(a)?, 1.0);
    assert_eq!(graph.grad(b)?, -8.0);
    Ok(())
}

#[test]
fn test_mul_grad_check() {
    let result = check_grad(
        |g, xs| {
            let ab = mul_op(g, xs[0], xs[1])?;
            mul_op(g, ab, xs[0])
        },
        &[1.3, -0.4],
        1e-6,
        1e-5,
    );
    assert!(result.is_ok(), "{:?}", result);
}
