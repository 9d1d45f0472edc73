//! Expression graph for automatic differentiation.
//!
//! This module implements the immutable expression graph that arithmetic on
//! [`Expr`] handles builds. Every node is reference counted, so a
//! sub-expression referenced by several parents is shared rather than copied,
//! and stays alive for as long as any parent or caller holds a handle to it.

use crate::ops::OpType;
use kyadet_core::Scalar;
use std::collections::HashSet;
use std::fmt::{self, Debug};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Unique identifier for nodes in the expression graph.
///
/// Identifiers are allocated once per node and never reused, so two leaves
/// holding the same value still have different identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node{}", self.0)
    }
}

static NEXT_NODE_ID: AtomicUsize = AtomicUsize::new(0);

/// Generates a new unique node ID.
fn new_node_id() -> NodeId {
    NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
}

/// A leaf of the graph: an input variable or a literal constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<T> {
    value: T,
    name: Option<String>,
}

impl<T: Scalar> Leaf<T> {
    /// Creates an anonymous leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self { value, name: None }
    }

    /// Creates a leaf with a display name.
    pub fn named(value: T, name: impl Into<String>) -> Self {
        Self {
            value,
            name: Some(name.into()),
        }
    }

    /// Returns the stored value.
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A node in the expression graph.
///
/// The variant encodes the operation, so evaluation and differentiation
/// dispatch on the tag alone.
#[derive(Debug)]
pub enum Node<T: Scalar> {
    /// Input variable or constant
    Leaf(Leaf<T>),
    /// `l + r`
    Add(Expr<T>, Expr<T>),
    /// `l - r`
    Sub(Expr<T>, Expr<T>),
    /// `l * r`
    Mult(Expr<T>, Expr<T>),
    /// `l / r`
    Div(Expr<T>, Expr<T>),
    /// `exp(x)`
    Exp(Expr<T>),
}

impl<T: Scalar> Node<T> {
    /// Returns the operation tag of this node.
    pub fn op_type(&self) -> OpType {
        match self {
            Node::Leaf(_) => OpType::Leaf,
            Node::Add(..) => OpType::Add,
            Node::Sub(..) => OpType::Sub,
            Node::Mult(..) => OpType::Mult,
            Node::Div(..) => OpType::Div,
            Node::Exp(_) => OpType::Exp,
        }
    }
}

#[derive(Debug)]
struct NodeCell<T: Scalar> {
    id: NodeId,
    node: Node<T>,
}

/// Shared handle to a node of the expression graph.
///
/// Cloning an `Expr` clones the handle, not the node: both handles refer to
/// the same node and therefore the same identity.
pub struct Expr<T: Scalar> {
    cell: Rc<NodeCell<T>>,
}

impl<T: Scalar> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Scalar> Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expr")
            .field("id", &self.cell.id)
            .field("node", &self.cell.node)
            .finish()
    }
}

impl<T: Scalar> Expr<T> {
    /// Creates a new anonymous leaf.
    pub fn new(value: T) -> Self {
        Self::from_node(Node::Leaf(Leaf::new(value)))
    }

    /// Creates a new leaf with a display name.
    ///
    /// The name is only used when rendering the graph; identity is still
    /// given by the node itself.
    pub fn named(value: T, name: impl Into<String>) -> Self {
        Self::from_node(Node::Leaf(Leaf::named(value, name)))
    }

    /// Wraps a node into a fresh handle with a new identity.
    pub(crate) fn from_node(node: Node<T>) -> Self {
        Self {
            cell: Rc::new(NodeCell {
                id: new_node_id(),
                node,
            }),
        }
    }

    /// Returns the identity of this node.
    pub fn id(&self) -> NodeId {
        self.cell.id
    }

    /// Returns the node behind this handle.
    pub fn node(&self) -> &Node<T> {
        &self.cell.node
    }

    /// Returns the operation tag of this node.
    pub fn op_type(&self) -> OpType {
        self.cell.node.op_type()
    }

    /// Checks if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self.cell.node, Node::Leaf(_))
    }

    /// Returns the leaf data if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&Leaf<T>> {
        match &self.cell.node {
            Node::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// Returns the operands of this node, left to right.
    pub fn operands(&self) -> Vec<&Expr<T>> {
        match &self.cell.node {
            Node::Leaf(_) => Vec::new(),
            Node::Add(l, r) | Node::Sub(l, r) | Node::Mult(l, r) | Node::Div(l, r) => {
                vec![l, r]
            }
            Node::Exp(x) => vec![x],
        }
    }

    /// Returns true if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }

    /// Gets all distinct nodes reachable from this one in topological order.
    ///
    /// Operands come before the nodes using them and a node shared by
    /// several parents appears once. The last entry is `self`.
    pub fn topological_order(&self) -> Vec<Expr<T>> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.visit_topological(&mut visited, &mut order);
        order
    }

    /// Helper for topological sort using DFS.
    fn visit_topological(&self, visited: &mut HashSet<NodeId>, order: &mut Vec<Expr<T>>) {
        if !visited.insert(self.id()) {
            return;
        }

        for operand in self.operands() {
            operand.visit_topological(visited, order);
        }

        order.push(self.clone());
    }

    /// Returns the number of distinct nodes in the graph rooted here.
    pub fn num_nodes(&self) -> usize {
        self.topological_order().len()
    }

    /// Returns the distinct leaves of the graph rooted here.
    pub fn leaves(&self) -> Vec<Expr<T>> {
        self.topological_order()
            .into_iter()
            .filter(Expr::is_leaf)
            .collect()
    }
}

impl<T: Scalar> From<T> for Expr<T> {
    fn from(value: T) -> Self {
        Expr::new(value)
    }
}

impl<T: Scalar> From<Leaf<T>> for Expr<T> {
    fn from(leaf: Leaf<T>) -> Self {
        Expr::from_node(Node::Leaf(leaf))
    }
}
