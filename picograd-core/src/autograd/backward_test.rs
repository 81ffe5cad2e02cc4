use super::*;
use crate::ops::activation::tanh_op as tanh;
use crate::ops::arithmetic::{add_op as add, mul_op as mul, neg_op as neg, sub_op as sub};
use approx::assert_relative_eq;

fn seed_and_backward(graph: &mut Graph, root: NodeId) -> Result<(), PicogradError> {
    graph.set_grad(root, 1.0)?;
    backward(graph, root)
}

#[test]
fn test_add_backward() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let a = graph.constant(2.0);
    let b = graph.constant(3.0);
    let c = add(&mut graph, a, b)?;
    seed_and_backward(&mut graph, c)?;
    assert_eq!(graph.grad(a)?, 1.0);
    assert_eq!(graph.grad(b)?, 1.0);
    Ok(())
}

#[test]
fn test_mul_backward() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let a = graph.constant(2.0);
    let b = graph.constant(3.0);
    let c = mul(&mut graph, a, b)?;
    seed_and_backward(&mut graph, c)?;
    assert_eq!(graph.grad(a)?, 3.0);
    assert_eq!(graph.grad(b)?, 2.0);
    Ok(())
}

#[test]
fn test_square_backward() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let x = graph.constant(3.0);
    let y = mul(&mut graph, x, x)?;
    seed_and_backward(&mut graph, y)?;
    // d(x^2)/dx = 2x
    assert_eq!(graph.grad(x)?, 6.0);
    Ok(())
}

#[test]
fn test_shared_subexpression_accumulates() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let x = graph.constant(2.0);
    let sq = mul(&mut graph, x, x)?;
    let y = add(&mut graph, sq, x)?;
    assert_eq!(graph.value(y)?, 6.0);
    seed_and_backward(&mut graph, y)?;
    // 2x + 1
    assert_eq!(graph.grad(x)?, 5.0);
    Ok(())
}

#[test]
fn test_neg_and_sub_backward() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let a = graph.constant(5.0);
    let b = graph.constant(2.0);
    let n = neg(&mut graph, a)?;
    let d = sub(&mut graph, b, n)?; // b - (-a)
    assert_eq!(graph.value(d)?, 7.0);
    seed_and_backward(&mut graph, d)?;
    assert_eq!(graph.grad(a)?, 1.0);
    assert_eq!(graph.grad(b)?, 1.0);
    Ok(())
}

#[test]
fn test_tanh_backward() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let x = graph.constant(0.8814);
    let t = tanh(&mut graph, x)?;
    seed_and_backward(&mut graph, t)?;
    let expected = 1.0 - 0.8814f64.tanh().powi(2);
    assert_relative_eq!(graph.grad(x)?, expected, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_chain_rule_through_neuron_like_graph() -> Result<(), PicogradError> {
    // o = tanh(x1*w1 + x2*w2 + b)
    let mut graph = Graph::new();
    let x1 = graph.input(2.0);
    let x2 = graph.input(0.0);
    let w1 = graph.parameter(-3.0);
    let w2 = graph.parameter(1.0);
    let b = graph.parameter(6.881_373_587_019_543);
    let p1 = mul(&mut graph, x1, w1)?;
    let p2 = mul(&mut graph, x2, w2)?;
    let s = add(&mut graph, p1, p2)?;
    let n = add(&mut graph, s, b)?;
    let o = tanh(&mut graph, n)?;
    assert_relative_eq!(graph.value(o)?, 0.707_106_781_186_547_6, epsilon = 1e-9);

    seed_and_backward(&mut graph, o)?;
    assert_relative_eq!(graph.grad(n)?, 0.5, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(x1)?, -1.5, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(w1)?, 1.0, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(x2)?, 0.5, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(w2)?, 0.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_second_backward_double_accumulates() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let a = graph.constant(2.0);
    let b = graph.constant(3.0);
    let c = mul(&mut graph, a, b)?;
    seed_and_backward(&mut graph, c)?;
    backward(&mut graph, c)?;
    assert_eq!(graph.grad(a)?, 6.0);
    Ok(())
}

#[test]
fn test_zero_then_backward_is_idempotent() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let w = graph.parameter(0.4);
    let b = graph.parameter(-0.2);
    let mark = graph.freeze_parameters();

    let run = |graph: &mut Graph| -> Result<(f64, f64), PicogradError> {
        let x = graph.input(1.5);
        let p = mul(graph, w, x)?;
        let s = add(graph, p, b)?;
        let t = tanh(graph, s)?;
        let sq = mul(graph, t, t)?;
        graph.set_grad(w, 0.0)?;
        graph.set_grad(b, 0.0)?;
        seed_and_backward(graph, sq)?;
        let grads = (graph.grad(w)?, graph.grad(b)?);
        graph.rewind(mark)?;
        Ok(grads)
    };

    let first = run(&mut graph)?;
    let second = run(&mut graph)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_unseeded_backward_propagates_nothing() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let a = graph.constant(2.0);
    let b = graph.constant(3.0);
    let c = add(&mut graph, a, b)?;
    backward(&mut graph, c)?;
    assert_eq!(graph.grad(a)?, 0.0);
    Ok(())
}
