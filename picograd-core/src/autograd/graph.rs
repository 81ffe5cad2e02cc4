use crate::autograd::node::{Node, NodeId, Op};
use crate::error::PicogradError;

/// Arena length recorded by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

impl Checkpoint {
    pub fn len(self) -> usize {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Arena owning every scalar node of a computation.
///
/// Nodes are addressed by [`NodeId`] and can only reference nodes that already
/// exist, so operands always sit at lower indices than the nodes using them and
/// the graph cannot contain a cycle.
///
/// Parameters are created once and frozen with [`Graph::freeze_parameters`].
/// Every forward pass appends fresh intermediate nodes, which are dropped
/// wholesale with [`Graph::rewind`] once the update step is done.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    frozen: usize,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
            frozen: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn push_op(&mut self, value: f64, op: Op) -> NodeId {
        self.push(Node::with_op(value, op))
    }

    // --- Leaf construction ---

    /// Creates a leaf holding a fixed value.
    pub fn constant(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(value))
    }

    /// Creates a leaf for an input sample. Identical to [`Graph::constant`];
    /// the name documents intent at call sites.
    pub fn input(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(value))
    }

    /// Creates a trainable leaf. Its gradient is zero until a backward pass
    /// reaches it.
    pub fn parameter(&mut self, value: f64) -> NodeId {
        let mut node = Node::leaf(value);
        node.label = Some("param");
        self.push(node)
    }

    // --- Accessors ---

    /// Returns the node addressed by `id`.
    ///
    /// # Errors
    /// `NodeOutOfBounds` if `id` does not address a live node, e.g. it belongs to
    /// another graph or was dropped by a rewind.
    pub fn node(&self, id: NodeId) -> Result<&Node, PicogradError> {
        self.nodes.get(id.0).ok_or(PicogradError::NodeOutOfBounds {
            index: id.0,
            len: self.nodes.len(),
        })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, PicogradError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .ok_or(PicogradError::NodeOutOfBounds { index: id.0, len })
    }

    pub fn value(&self, id: NodeId) -> Result<f64, PicogradError> {
        Ok(self.node(id)?.value)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, PicogradError> {
        Ok(self.node(id)?.grad)
    }

    /// Overwrites a node's gradient. Used to seed the root before a backward pass.
    pub fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<(), PicogradError> {
        self.node_mut(id)?.grad = grad;
        Ok(())
    }

    /// Overwrites a node's value.
    ///
    /// Only meaningful for leaves: values of dependent nodes were computed at
    /// construction time and are not recomputed.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<(), PicogradError> {
        self.node_mut(id)?.value = value;
        Ok(())
    }

    /// Attaches a debug label to a node and hands the id back for chaining.
    pub fn set_label(&mut self, id: NodeId, label: &'static str) -> Result<NodeId, PicogradError> {
        self.node_mut(id)?.label = Some(label);
        Ok(id)
    }

    /// Iterates over every live node in allocation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Resets the gradient of every node in the arena.
    pub fn zero_grad_all(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    // --- Lifetime management ---

    /// Records the current arena length.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.nodes.len())
    }

    /// Marks every node allocated so far as a parameter that must survive
    /// [`Graph::rewind`].
    pub fn freeze_parameters(&mut self) -> Checkpoint {
        self.frozen = self.nodes.len();
        Checkpoint(self.frozen)
    }

    /// Number of nodes protected by [`Graph::freeze_parameters`].
    pub fn frozen_len(&self) -> usize {
        self.frozen
    }

    /// Drops every node allocated after `mark`.
    ///
    /// Ids of dropped nodes become invalid; they will either fail with
    /// `NodeOutOfBounds` or alias nodes allocated later.
    ///
    /// # Errors
    /// `RewindBelowParameters` if `mark` lies below the frozen parameter prefix.
    pub fn rewind(&mut self, mark: Checkpoint) -> Result<(), PicogradError> {
        if mark.0 < self.frozen {
            return Err(PicogradError::RewindBelowParameters {
                mark: mark.0,
                parameters: self.frozen,
            });
        }
        let dropped = self.nodes.len().saturating_sub(mark.0);
        self.nodes.truncate(mark.0);
        log::debug!("Rewound graph to {} nodes ({} dropped)", mark.0, dropped);
        Ok(())
    }

    /// Runs the backward driver from `root`. See [`crate::autograd::backward`].
    pub fn backward(&mut self, root: NodeId) -> Result<(), PicogradError> {
        crate::autograd::backward::backward(self, root)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
