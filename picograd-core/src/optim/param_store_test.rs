use super::*;
use crate::model::Mlp;
use crate::nn::{ConstantInit, Neuron, UniformInit};
use approx::assert_relative_eq;

#[test]
fn test_collect_parameters_order() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let mlp = Mlp::new(&mut graph, &[3, 4, 4, 1], &mut UniformInit::new(42))?;
    let store = collect_parameters(&mlp);
    assert_eq!(store.len(), 41);
    assert_eq!(store.as_slice(), mlp.parameters().as_slice());
    assert_eq!(store, ParameterStore::from_module(&mlp));

    let first = &mlp.layers()[0].neurons()[0];
    assert_eq!(&store.as_slice()[..3], first.weights());
    assert_eq!(store.as_slice()[3], first.bias());
    Ok(())
}

#[test]
fn test_zero_grad_and_update() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let neuron = Neuron::from_values(&mut graph, &[0.5, -0.5], 0.25)?;
    let store = collect_parameters(&neuron);
    graph.set_grad(neuron.weights()[0], 2.0)?;
    graph.set_grad(neuron.weights()[1], -1.0)?;
    graph.set_grad(neuron.bias(), 0.5)?;

    store.update(&mut graph, 0.1)?;
    let values = store.values(&graph)?;
    assert_relative_eq!(values[0], 0.3, epsilon = 1e-12);
    assert_relative_eq!(values[1], -0.4, epsilon = 1e-12);
    assert_relative_eq!(values[2], 0.2, epsilon = 1e-12);

    store.zero_grad(&mut graph)?;
    for id in store.iter() {
        assert_eq!(graph.grad(id)?, 0.0);
    }
    Ok(())
}

#[test]
fn test_update_with_zero_grad_is_noop() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let neuron = Neuron::new(&mut graph, 3, &mut ConstantInit(0.7))?;
    let store = collect_parameters(&neuron);
    store.update(&mut graph, 0.5)?;
    assert_eq!(store.values(&graph)?, vec![0.7; 4]);
    Ok(())
}

#[test]
fn test_describe() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let neuron = Neuron::from_values(&mut graph, &[1.5], -0.5)?;
    graph.set_grad(neuron.bias(), 0.25)?;
    let text = collect_parameters(&neuron).describe(&graph)?;
    assert_eq!(
        text,
        "0 weight (1.50000000, 0.00000000)\n1 bias (-0.50000000, 0.25000000)\n"
    );
    Ok(())
}

#[test]
fn test_foreign_node_is_rejected() {
    let mut graph = Graph::new();
    let store = ParameterStore::new(vec![graph.parameter(1.0)]);
    let mut other = Graph::new();
    assert!(matches!(
        store.zero_grad(&mut other),
        Err(PicogradError::NodeOutOfBounds { .. })
    ));
}
