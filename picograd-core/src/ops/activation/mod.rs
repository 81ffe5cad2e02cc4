//! # Activation Functions
//!
//! Non-linear activations applied to a single scalar node.
//!
//! ## Currently Implemented:
//! - [`tanh_op`](tanh/fn.tanh_op.html): hyperbolic tangent.

pub mod tanh;

pub use tanh::tanh_op;
