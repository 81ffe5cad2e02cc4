//! Reductions of many scalar nodes into one.

pub mod sum;

pub use sum::pairwise_sum_op;
