use crate::autograd::Graph;
use crate::error::PicogradError;
use crate::nn::Module;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::param_store::ParameterStore;

/// Plain gradient descent: `p -= lr * p.grad` for every managed parameter.
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    store: ParameterStore,
    lr: f64,
}

impl SgdOptimizer {
    pub const DEFAULT_LR: f64 = 0.01;

    /// Creates a new `SgdOptimizer` over `store`.
    ///
    /// # Errors
    /// `InvalidHyperparameter` unless `lr` is a positive finite number.
    pub fn new(store: ParameterStore, lr: f64) -> Result<Self, PicogradError> {
        check_learning_rate(lr)?;
        if store.is_empty() {
            log::warn!("SgdOptimizer created without parameters");
        }
        Ok(SgdOptimizer { store, lr })
    }

    /// Optimizer over every parameter of `module` with the default rate.
    pub fn for_module(module: &dyn Module) -> Self {
        SgdOptimizer {
            store: ParameterStore::from_module(module),
            lr: Self::DEFAULT_LR,
        }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }
}

/// Accepts only positive finite learning rates.
pub(crate) fn check_learning_rate(lr: f64) -> Result<(), PicogradError> {
    if !lr.is_finite() || lr <= 0.0 {
        return Err(PicogradError::InvalidHyperparameter {
            name: "learning_rate".to_string(),
            value: lr,
        });
    }
    Ok(())
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self, graph: &mut Graph) -> Result<(), PicogradError> {
        self.store.update(graph, self.lr)?;
        log::trace!("SGD step over {} parameters (lr = {})", self.store.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), PicogradError> {
        self.store.zero_grad(graph)
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
