use crate::autograd::{Graph, NodeId};
use crate::error::PicogradError;

/// The base trait for all network building blocks (neurons, layers, networks).
///
/// A module owns parameter nodes living in a [`Graph`] and knows how to append
/// its forward computation to that same graph.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `graph`: The graph holding the module's parameters; new nodes are appended to it.
    /// * `inputs`: One node per input of the module.
    ///
    /// # Returns
    /// One node per output of the module, or `DimensionMismatch` if
    /// `inputs.len() != self.num_inputs()`.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, PicogradError>;

    /// Returns every trainable node of the module, including those of its
    /// children.
    ///
    /// The order is stable: children in order, and within a neuron its weights
    /// in order followed by its bias.
    fn parameters(&self) -> Vec<NodeId>;

    /// Returns the same nodes as [`Module::parameters`], in the same order,
    /// paired with hierarchical names such as `"layer0.neuron2.w1"`.
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    /// Number of inputs the module expects.
    fn num_inputs(&self) -> usize;

    /// Number of outputs the module produces.
    fn num_outputs(&self) -> usize;

    /// Returns a vector of direct child `Module`s.
    /// For modules that do not contain other modules, this should return an empty vector.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }
}

/// Fails with `DimensionMismatch` unless `inputs` has the expected width.
pub(crate) fn check_width(
    expected: usize,
    inputs: &[NodeId],
    operation: &str,
) -> Result<(), PicogradError> {
    if inputs.len() != expected {
        return Err(PicogradError::DimensionMismatch {
            expected,
            actual: inputs.len(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}
