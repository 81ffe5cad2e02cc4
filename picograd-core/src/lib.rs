//! Scalar reverse-mode automatic differentiation with a small multi-layer
//! perceptron trained by gradient descent.
//!
//! Every value is a node in a [`Graph`] arena. Operations append nodes,
//! [`Graph::backward`] propagates gradients from a seeded root, and the
//! [`train::Trainer`] ties the pieces together.

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod train;

pub use autograd::{Graph, NodeId};
pub use error::PicogradError;
