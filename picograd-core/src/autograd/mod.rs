//! Reverse-mode automatic differentiation over scalar nodes.
//!
//! A [`Graph`] arena owns the nodes, builders in [`crate::ops`] append to it,
//! [`topological_sort`] orders the part reachable from a root and [`backward`]
//! replays the propagation rule of every node in that order.

pub mod backward;
pub mod display;
pub mod grad_check;
pub mod graph;
pub mod graph_sort;
pub mod node;

pub use backward::backward;
pub use graph::{Checkpoint, Graph};
pub use graph_sort::topological_sort;
pub use node::{Node, NodeId, Op, OpKind};
