use super::*;
use crate::nn::{Neuron, UniformInit};
use crate::optim::collect_parameters;
use approx::assert_relative_eq;

#[test]
fn test_sgd_basic_step() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let neuron = Neuron::from_values(&mut graph, &[1.0, 2.0, 3.0], 4.0)?;
    let grads = [0.1, 0.2, 0.3, 0.4];
    let mut optimizer = SgdOptimizer::new(collect_parameters(&neuron), 0.1)?;
    for (id, g) in optimizer.store().iter().zip(grads) {
        graph.set_grad(id, g)?;
    }

    optimizer.step(&mut graph)?;

    let values = optimizer.store().values(&graph)?;
    for (i, expected) in [1.0, 2.0, 3.0, 4.0].iter().enumerate() {
        assert_relative_eq!(values[i], expected - 0.1 * grads[i], epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let neuron = Neuron::new(&mut graph, 2, &mut UniformInit::new(5))?;
    let mut optimizer = SgdOptimizer::for_module(&neuron);
    assert_eq!(optimizer.lr(), SgdOptimizer::DEFAULT_LR);
    for id in neuron.parameters() {
        graph.set_grad(id, 3.0)?;
    }
    optimizer.zero_grad(&mut graph)?;
    for id in neuron.parameters() {
        assert_eq!(graph.grad(id)?, 0.0);
    }
    Ok(())
}

#[test]
fn test_sgd_descends_a_neuron_loss() -> Result<(), PicogradError> {
    let mut graph = Graph::new();
    let neuron = Neuron::from_values(&mut graph, &[0.1, -0.2], 0.0)?;
    let params = graph.freeze_parameters();
    let mut optimizer = SgdOptimizer::new(collect_parameters(&neuron), 0.05)?;

    let mut losses = Vec::new();
    for _ in 0..20 {
        let xs = [graph.input(1.0), graph.input(-1.0)];
        let out = neuron.activate(&mut graph, &xs)?;
        let loss = crate::nn::sum_squared_error(&mut graph, &[out], &[0.9])?;
        losses.push(graph.value(loss)?);
        optimizer.zero_grad(&mut graph)?;
        graph.set_grad(loss, 1.0)?;
        graph.backward(loss)?;
        optimizer.step(&mut graph)?;
        graph.rewind(params)?;
    }
    assert!(losses[19] < losses[0]);
    assert_eq!(graph.len(), 3);
    Ok(())
}

#[test]
fn test_sgd_rejects_bad_learning_rate() {
    for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        let result = SgdOptimizer::new(ParameterStore::default(), lr);
        assert!(matches!(
            result,
            Err(PicogradError::InvalidHyperparameter { ref name, .. }) if name == "learning_rate"
        ));
    }
}

#[test]
fn test_sgd_and_train_config_share_learning_rate_rule() {
    use crate::train::TrainConfig;
    for lr in [0.0, -0.5, f64::NAN, f64::NEG_INFINITY, 1e-9, 0.01, 3.0] {
        let optimizer_ok = SgdOptimizer::new(ParameterStore::default(), lr).is_ok();
        let config_ok = TrainConfig::default().with_learning_rate(lr).validate().is_ok();
        assert_eq!(optimizer_ok, config_ok, "learning rate {}", lr);
    }
}
