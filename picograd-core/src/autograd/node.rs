use std::fmt;

/// Handle to a node stored in a [`Graph`](crate::autograd::Graph) arena.
///
/// Identity is positional: two nodes holding the same value are still distinct
/// if they were allocated separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node inside its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The operation that produced a node, together with its operands.
///
/// Arity is carried by the variant, so a leaf can never hold operands and a
/// binary node always holds exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Tanh(NodeId),
}

/// Tag identifying which propagation rule applies to a node.
///
/// Negation and subtraction do not appear here: they are built from `Mul` by a
/// constant and `Add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    None,
    Add,
    Mul,
    Tanh,
}

impl OpKind {
    /// Short symbol used when rendering graphs.
    pub fn symbol(self) -> &'static str {
        match self {
            OpKind::None => "",
            OpKind::Add => "+",
            OpKind::Mul => "*",
            OpKind::Tanh => "tanh",
        }
    }
}

/// A scalar value in the computation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<&'static str>,
}

impl Node {
    pub(crate) fn leaf(value: f64) -> Self {
        Node {
            value,
            grad: 0.0,
            op: Op::Leaf,
            label: None,
        }
    }

    pub(crate) fn with_op(value: f64, op: Op) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            label: None,
        }
    }

    /// Forward-computed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Accumulated gradient of the backward root with respect to this node.
    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn op_kind(&self) -> OpKind {
        match self.op {
            Op::Leaf => OpKind::None,
            Op::Add(..) => OpKind::Add,
            Op::Mul(..) => OpKind::Mul,
            Op::Tanh(_) => OpKind::Tanh,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.op, Op::Leaf)
    }

    /// First operand, absent for leaves.
    pub fn operand_a(&self) -> Option<NodeId> {
        match self.op {
            Op::Leaf => None,
            Op::Add(a, _) | Op::Mul(a, _) | Op::Tanh(a) => Some(a),
        }
    }

    /// Second operand, absent for leaves and unary operations.
    pub fn operand_b(&self) -> Option<NodeId> {
        match self.op {
            Op::Add(_, b) | Op::Mul(_, b) => Some(b),
            Op::Leaf | Op::Tanh(_) => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = data: {:.4}, grad: {:.4}",
            self.label.unwrap_or("value"),
            self.value,
            self.grad
        )
    }
}
