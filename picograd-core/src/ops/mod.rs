//! # Operation Builders (`ops`)
//!
//! Every builder takes existing nodes of a [`Graph`](crate::autograd::Graph),
//! appends one or more new nodes and returns the id of the result. Operands are
//! never modified; the only side effect is the allocation.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a function named `xxx_op` that
//!   computes the forward value and records the [`Op`](crate::autograd::Op)
//!   whose propagation rule [`backward`](crate::autograd::backward) replays.
//! - **Compositions:** `neg_op` and `sub_op` introduce no rule of their own.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, sub.
//! - [`activation`]: tanh.
//! - [`reduction`]: balanced pairwise summation.

pub mod activation;
pub mod arithmetic;
pub mod reduction;

pub use activation::tanh_op;
pub use arithmetic::{add_op, mul_op, neg_op, sub_op};
pub use reduction::pairwise_sum_op;
