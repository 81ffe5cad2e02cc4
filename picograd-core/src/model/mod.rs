//! Complete networks assembled from [`crate::nn`] layers.

pub mod mlp;

pub use mlp::{Mlp, MlpConfig};
