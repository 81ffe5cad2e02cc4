use crate::autograd::Graph;
use crate::error::PicogradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers hold the ids of the parameters they manage; the values and
/// gradients themselves live in the [`Graph`] passed to each call.
pub trait Optimizer {
    /// Performs a single optimization step, updating every managed parameter
    /// from its accumulated gradient.
    fn step(&mut self, graph: &mut Graph) -> Result<(), PicogradError>;

    /// Clears the gradients of all managed parameters.
    ///
    /// Called before each backward pass, since backward accumulates.
    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), PicogradError>;
}
