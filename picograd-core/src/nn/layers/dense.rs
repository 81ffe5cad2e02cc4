use crate::autograd::{Graph, NodeId};
use crate::error::PicogradError;
use crate::nn::init::Initializer;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{check_width, Module};

/// A fully connected layer of tanh neurons sharing the same input width.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    num_inputs: usize,
}

impl Layer {
    /// Creates `num_neurons` neurons of `num_inputs` weights each.
    ///
    /// # Errors
    /// `InvalidArchitecture` if either width is zero.
    pub fn new<I>(
        graph: &mut Graph,
        num_inputs: usize,
        num_neurons: usize,
        init: &mut I,
    ) -> Result<Self, PicogradError>
    where
        I: Initializer + ?Sized,
    {
        if num_neurons == 0 {
            return Err(PicogradError::InvalidArchitecture(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..num_neurons)
            .map(|_| Neuron::new(graph, num_inputs, &mut *init))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, num_inputs })
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `neurons` is empty, `DimensionMismatch` if the
    /// neurons disagree on their input width.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, PicogradError> {
        let num_inputs = match neurons.first() {
            Some(first) => first.num_inputs(),
            None => {
                return Err(PicogradError::InvalidArchitecture(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some(odd) = neurons.iter().find(|n| n.num_inputs() != num_inputs) {
            return Err(PicogradError::DimensionMismatch {
                expected: num_inputs,
                actual: odd.num_inputs(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer { neurons, num_inputs })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// Applies every neuron to the same `inputs`; the input nodes are shared by
    /// all neurons of the layer.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, PicogradError> {
        check_width(self.num_inputs, inputs, "Layer::forward")?;
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(j, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, id)| (format!("neuron{}.{}", j, name), id))
            })
            .collect()
    }

    fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    fn num_outputs(&self) -> usize {
        self.neurons.len()
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons.iter().map(|n| n as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "dense_test.rs"]
mod tests;
