use crate::autograd::{Graph, NodeId};
use crate::error::PicogradError;
use crate::nn::init::Initializer;
use crate::nn::module::{check_width, Module};
use crate::ops::{add_op, mul_op, pairwise_sum_op, tanh_op};

/// A single tanh unit: `tanh(sum_i(w_i * x_i) + b)`.
///
/// Holds one weight parameter per input plus a bias parameter. The number of
/// weights is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
}

impl Neuron {
    /// Creates a neuron with `num_inputs` weights, drawing the bias first and
    /// then each weight from `init`.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `num_inputs` is zero.
    pub fn new<I>(graph: &mut Graph, num_inputs: usize, init: &mut I) -> Result<Self, PicogradError>
    where
        I: Initializer + ?Sized,
    {
        if num_inputs == 0 {
            return Err(PicogradError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let bias = graph.parameter(init.sample());
        graph.set_label(bias, "bias")?;
        let weights = (0..num_inputs)
            .map(|_| {
                let w = graph.parameter(init.sample());
                graph.set_label(w, "weight")
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Neuron { weights, bias })
    }

    /// Creates a neuron with explicit parameter values.
    pub fn from_values(graph: &mut Graph, weights: &[f64], bias: f64) -> Result<Self, PicogradError> {
        let mut values = std::iter::once(bias).chain(weights.iter().copied());
        Neuron::new(graph, weights.len(), &mut || values.next().unwrap_or(0.0))
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    /// Appends the neuron's computation for `inputs` and returns its output.
    ///
    /// Products `w_i * x_i` are combined with [`pairwise_sum_op`] so the graph
    /// depth grows logarithmically with the input width.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len()` differs from the weight count.
    pub fn activate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, PicogradError> {
        check_width(self.weights.len(), inputs, "Neuron::activate")?;
        let products = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| mul_op(graph, *w, *x))
            .collect::<Result<Vec<_>, _>>()?;
        let weighted_sum = pairwise_sum_op(graph, &products)?;
        let biased = add_op(graph, weighted_sum, self.bias)?;
        tanh_op(graph, biased)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, PicogradError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), *w))
            .collect();
        named.push(("b".to_string(), self.bias));
        named
    }

    fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    fn num_outputs(&self) -> usize {
        1
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
