//! Gradient-descent training loop for an [`Mlp`].
//!
//! Every step builds the loss over all samples, clears the parameter
//! gradients, seeds the loss gradient with 1, runs backward and applies the
//! update. The step's intermediate nodes are then dropped by rewinding the
//! graph to the parameter checkpoint.

use crate::autograd::{Checkpoint, Graph, NodeId};
use crate::error::PicogradError;
use crate::model::{Mlp, MlpConfig};
use crate::nn::{sum_squared_error, Initializer, Module, UniformInit};
use crate::optim::sgd::check_learning_rate;
use crate::optim::{collect_parameters, Optimizer, ParameterStore, SgdOptimizer};

/// Hyperparameters of a training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub steps: usize,
    /// Seed of the uniform initializer used by [`Trainer::new`].
    pub seed: u64,
    /// Log a summary every `log_every` steps; 0 disables step logging.
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: SgdOptimizer::DEFAULT_LR,
            steps: 60,
            seed: 42,
            log_every: 10,
        }
    }
}

impl TrainConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    /// # Errors
    /// `InvalidHyperparameter` if the learning rate is not a positive finite number.
    pub fn validate(&self) -> Result<(), PicogradError> {
        check_learning_rate(self.learning_rate)
    }
}

/// One training example.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Sample {
    pub fn new(inputs: Vec<f64>, targets: Vec<f64>) -> Self {
        Sample { inputs, targets }
    }
}

/// The four-sample toy dataset: `(2, 3, -1) -> 1`, `(3, -1, 0.5) -> -1`,
/// `(0.5, 1, 1) -> -1`, `(1, 1, -1) -> 1`.
pub fn toy_dataset() -> Vec<Sample> {
    vec![
        Sample::new(vec![2.0, 3.0, -1.0], vec![1.0]),
        Sample::new(vec![3.0, -1.0, 0.5], vec![-1.0]),
        Sample::new(vec![0.5, 1.0, 1.0], vec![-1.0]),
        Sample::new(vec![1.0, 1.0, -1.0], vec![1.0]),
    ]
}

/// Loss history of a [`Trainer::fit`] run, one entry per step.
///
/// Each entry is the loss computed by that step's forward pass, i.e. before
/// the step's update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainReport {
    pub losses: Vec<f64>,
}

impl TrainReport {
    pub fn initial_loss(&self) -> Option<f64> {
        self.losses.first().copied()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }

    pub fn steps(&self) -> usize {
        self.losses.len()
    }
}

/// Owns a graph, the network whose parameters live in it, and the optimizer.
#[derive(Debug)]
pub struct Trainer {
    graph: Graph,
    mlp: Mlp,
    params: Checkpoint,
    optimizer: SgdOptimizer,
    config: TrainConfig,
}

impl Trainer {
    /// Builds a network of shape `shape` initialized uniformly in `[-1, 1)`
    /// from `config.seed`.
    pub fn new(config: TrainConfig, shape: MlpConfig) -> Result<Self, PicogradError> {
        let mut init = UniformInit::new(config.seed);
        Trainer::with_initializer(config, shape, &mut init)
    }

    /// Like [`Trainer::new`] but draws parameters from `init`; `config.seed`
    /// is ignored.
    pub fn with_initializer<I>(
        config: TrainConfig,
        shape: MlpConfig,
        init: &mut I,
    ) -> Result<Self, PicogradError>
    where
        I: Initializer + ?Sized,
    {
        config.validate()?;
        let mut graph = Graph::with_capacity(shape.num_parameters());
        let mlp = Mlp::from_config(&mut graph, shape, init)?;
        let params = graph.freeze_parameters();
        let optimizer = SgdOptimizer::new(collect_parameters(&mlp), config.learning_rate)?;
        log::info!(
            "Trainer ready: sizes {:?}, {} parameters, lr {}, {} steps",
            shape.sizes(),
            optimizer.store().len(),
            config.learning_rate,
            config.steps
        );
        Ok(Trainer {
            graph,
            mlp,
            params,
            optimizer,
            config,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn mlp(&self) -> &Mlp {
        &self.mlp
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn parameters(&self) -> &ParameterStore {
        self.optimizer.store()
    }

    /// Runs `config.steps` gradient-descent steps over `samples`.
    ///
    /// # Errors
    /// * `EmptyInput` if `samples` is empty.
    /// * `DimensionMismatch` if a sample does not fit the network's widths.
    /// * `NonFiniteLoss` as soon as a step's loss is NaN or infinite; the
    ///   parameters are left as they were before that step.
    pub fn fit(&mut self, samples: &[Sample]) -> Result<TrainReport, PicogradError> {
        let mut report = TrainReport {
            losses: Vec::with_capacity(self.config.steps),
        };
        for step in 0..self.config.steps {
            let loss = self.train_step(step, samples)?;
            report.losses.push(loss);
            if self.config.log_every > 0
                && (step % self.config.log_every == 0 || step + 1 == self.config.steps)
            {
                log::info!("step {:>4}  loss {:.6}", step, loss);
            }
        }
        if let (Some(first), Some(last)) = (report.initial_loss(), report.final_loss()) {
            log::debug!("Training done: loss {:.6} -> {:.6}", first, last);
        }
        Ok(report)
    }

    fn train_step(&mut self, step: usize, samples: &[Sample]) -> Result<f64, PicogradError> {
        let result = self.descend(step, samples);
        self.graph.rewind(self.params)?;
        result
    }

    fn descend(&mut self, step: usize, samples: &[Sample]) -> Result<f64, PicogradError> {
        let loss_id = self.build_loss(samples)?;
        let loss = self.graph.value(loss_id)?;
        if !loss.is_finite() {
            log::warn!("Non-finite loss {} at step {}", loss, step);
            return Err(PicogradError::NonFiniteLoss { step, value: loss });
        }
        self.optimizer.zero_grad(&mut self.graph)?;
        self.graph.set_grad(loss_id, 1.0)?;
        self.graph.backward(loss_id)?;
        self.optimizer.step(&mut self.graph)?;
        Ok(loss)
    }

    /// Computes the loss over `samples` without updating any parameter.
    pub fn evaluate(&mut self, samples: &[Sample]) -> Result<f64, PicogradError> {
        let result = self
            .build_loss(samples)
            .and_then(|loss| self.graph.value(loss));
        self.graph.rewind(self.params)?;
        result
    }

    /// Runs one forward pass and returns the output values.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<Vec<f64>, PicogradError> {
        let result = self.mlp.run(&mut self.graph, inputs).and_then(|outputs| {
            outputs
                .iter()
                .map(|id| self.graph.value(*id))
                .collect::<Result<Vec<_>, _>>()
        });
        self.graph.rewind(self.params)?;
        result
    }

    /// Forward pass over every sample followed by the summed squared error of
    /// all outputs.
    fn build_loss(&mut self, samples: &[Sample]) -> Result<NodeId, PicogradError> {
        if samples.is_empty() {
            return Err(PicogradError::EmptyInput {
                operation: "Trainer::fit".to_string(),
            });
        }
        let mut predictions = Vec::with_capacity(samples.len() * self.mlp.num_outputs());
        let mut targets = Vec::with_capacity(predictions.capacity());
        for sample in samples {
            if sample.targets.len() != self.mlp.num_outputs() {
                return Err(PicogradError::DimensionMismatch {
                    expected: self.mlp.num_outputs(),
                    actual: sample.targets.len(),
                    operation: "Trainer targets".to_string(),
                });
            }
            predictions.extend(self.mlp.run(&mut self.graph, &sample.inputs)?);
            targets.extend_from_slice(&sample.targets);
        }
        sum_squared_error(&mut self.graph, &predictions, &targets)
    }
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;
