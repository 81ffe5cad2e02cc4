use std::fmt::Write;

use crate::autograd::{Graph, NodeId};
use crate::error::PicogradError;
use crate::nn::Module;

/// Flat, ordered list of every trainable node of a module.
///
/// The order is the module's [`Module::parameters`] order: layers, then
/// neurons, then each neuron's weights followed by its bias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterStore {
    params: Vec<NodeId>,
}

/// Collects the parameters of `module` into a store.
pub fn collect_parameters(module: &dyn Module) -> ParameterStore {
    ParameterStore::from_module(module)
}

impl ParameterStore {
    pub fn new(params: Vec<NodeId>) -> Self {
        ParameterStore { params }
    }

    pub fn from_module(module: &dyn Module) -> Self {
        ParameterStore::new(module.parameters())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.params.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.params
    }

    /// Sets every parameter gradient to zero.
    pub fn zero_grad(&self, graph: &mut Graph) -> Result<(), PicogradError> {
        for id in &self.params {
            graph.set_grad(*id, 0.0)?;
        }
        Ok(())
    }

    /// Applies `value -= learning_rate * grad` to every parameter.
    pub fn update(&self, graph: &mut Graph, learning_rate: f64) -> Result<(), PicogradError> {
        for id in &self.params {
            let node = graph.node(*id)?;
            let updated = node.value() - learning_rate * node.grad();
            graph.set_value(*id, updated)?;
        }
        Ok(())
    }

    /// Current parameter values, in store order.
    pub fn values(&self, graph: &Graph) -> Result<Vec<f64>, PicogradError> {
        self.params.iter().map(|id| graph.value(*id)).collect()
    }

    /// One line per parameter: `index label (value, grad)`.
    pub fn describe(&self, graph: &Graph) -> Result<String, PicogradError> {
        let mut out = String::new();
        for (i, id) in self.params.iter().enumerate() {
            let node = graph.node(*id)?;
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "{} {} ({:.8}, {:.8})",
                i,
                node.label().unwrap_or("param"),
                node.value(),
                node.grad()
            );
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "param_store_test.rs"]
mod tests;
