//! Parameter collection and gradient-descent updates.

pub mod optimizer_trait;
pub mod param_store;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use param_store::{collect_parameters, ParameterStore};
pub use sgd::SgdOptimizer;
