use crate::autograd::{Graph, NodeId};
use crate::error::PicogradError;
use crate::nn::init::Initializer;
use crate::nn::layers::Layer;
use crate::nn::module::{check_width, Module};

/// Shape of a multi-layer perceptron with equally sized hidden layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlpConfig {
    pub inputs: usize,
    pub hidden_layers: usize,
    pub hidden_size: usize,
    pub outputs: usize,
}

impl MlpConfig {
    /// Layer widths from the input to the output, e.g. `[3, 4, 4, 1]`.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers + 2);
        sizes.push(self.inputs);
        sizes.extend(std::iter::repeat(self.hidden_size).take(self.hidden_layers));
        sizes.push(self.outputs);
        sizes
    }

    /// Number of weights and biases a network of this shape holds.
    pub fn num_parameters(&self) -> usize {
        self.sizes().windows(2).map(|w| w[1] * (w[0] + 1)).sum()
    }
}

impl Default for MlpConfig {
    /// 3 inputs, two hidden layers of 4, one output.
    fn default() -> Self {
        MlpConfig {
            inputs: 3,
            hidden_layers: 2,
            hidden_size: 4,
            outputs: 1,
        }
    }
}

/// Feed-forward network: layer `i`'s outputs are layer `i + 1`'s inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network whose layer widths are given by `sizes`, from the
    /// input width to the output width.
    ///
    /// # Errors
    /// `InvalidArchitecture` if fewer than two sizes are given or any is zero.
    pub fn new<I>(graph: &mut Graph, sizes: &[usize], init: &mut I) -> Result<Self, PicogradError>
    where
        I: Initializer + ?Sized,
    {
        if sizes.len() < 2 {
            return Err(PicogradError::InvalidArchitecture(format!(
                "expected at least an input and an output size, got {:?}",
                sizes
            )));
        }
        if sizes.contains(&0) {
            return Err(PicogradError::InvalidArchitecture(format!(
                "layer sizes must be non-zero, got {:?}",
                sizes
            )));
        }
        let layers = sizes
            .windows(2)
            .map(|w| Layer::new(graph, w[0], w[1], &mut *init))
            .collect::<Result<Vec<_>, _>>()?;
        let mlp = Mlp { layers };
        log::debug!("Built MLP {:?} with {} parameters", sizes, mlp.parameters().len());
        Ok(mlp)
    }

    pub fn from_config<I>(graph: &mut Graph, config: MlpConfig, init: &mut I) -> Result<Self, PicogradError>
    where
        I: Initializer + ?Sized,
    {
        Mlp::new(graph, &config.sizes(), init)
    }

    /// Builds a network from existing layers.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `layers` is empty, `DimensionMismatch` if a
    /// layer's input width differs from the previous layer's output width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, PicogradError> {
        if layers.is_empty() {
            return Err(PicogradError::InvalidArchitecture(
                "a network needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[0].num_outputs() != pair[1].num_inputs() {
                return Err(PicogradError::DimensionMismatch {
                    expected: pair[0].num_outputs(),
                    actual: pair[1].num_inputs(),
                    operation: "Mlp::from_layers".to_string(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Wraps `inputs` as leaves and runs the network over them.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len()` differs from the input width.
    pub fn run(&self, graph: &mut Graph, inputs: &[f64]) -> Result<Vec<NodeId>, PicogradError> {
        if inputs.len() != self.num_inputs() {
            return Err(PicogradError::DimensionMismatch {
                expected: self.num_inputs(),
                actual: inputs.len(),
                operation: "Mlp::run".to_string(),
            });
        }
        let leaves: Vec<NodeId> = inputs.iter().map(|x| graph.input(*x)).collect();
        self.forward(graph, &leaves)
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, PicogradError> {
        check_width(self.num_inputs(), inputs, "Mlp::forward")?;
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, id)| (format!("layer{}.{}", i, name), id))
            })
            .collect()
    }

    fn num_inputs(&self) -> usize {
        // Construction guarantees at least one layer.
        self.layers.first().map_or(0, |l| l.num_inputs())
    }

    fn num_outputs(&self) -> usize {
        self.layers.last().map_or(0, |l| l.num_outputs())
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.iter().map(|l| l as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
