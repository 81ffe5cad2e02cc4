//! Neural network building blocks on top of the scalar graph: the `Module`
//! trait, parameter initializers, tanh neurons and layers, and losses.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

pub use init::{ConstantInit, Initializer, NormalInit, UniformInit};
pub use layers::{Layer, Neuron};
pub use losses::sum_squared_error;
pub use module::Module;
