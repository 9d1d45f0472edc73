//! Evaluation of expression graphs.
//!
//! Values are computed bottom-up on every call; nothing is cached on the
//! nodes. [`Bindings`] lets the same graph be evaluated at another point by
//! substituting leaf values by identity, without touching the graph itself.

use crate::graph::{Expr, Node, NodeId};
use kyadet_core::Scalar;
use std::collections::HashMap;

/// Leaf values substituted during evaluation, keyed by node identity.
#[derive(Debug, Clone, Default)]
pub struct Bindings<T> {
    values: HashMap<NodeId, T>,
}

impl<T: Scalar> Bindings<T> {
    /// Creates an empty set of bindings.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Binds `leaf` to `value`, replacing any previous binding.
    ///
    /// Only leaves consult bindings; binding an operation node has no effect
    /// on evaluation.
    pub fn bind(&mut self, leaf: &Expr<T>, value: T) -> &mut Self {
        self.values.insert(leaf.id(), value);
        self
    }

    /// Builder-style variant of [`bind`](Self::bind).
    pub fn with(mut self, leaf: &Expr<T>, value: T) -> Self {
        self.bind(leaf, value);
        self
    }

    /// Returns the value bound to `id`, if any.
    pub fn get(&self, id: NodeId) -> Option<T> {
        self.values.get(&id).copied()
    }

    /// Removes the binding for `leaf`.
    pub fn unbind(&mut self, leaf: &Expr<T>) -> Option<T> {
        self.values.remove(&leaf.id())
    }

    /// Returns the number of bound leaves.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolves the value of a leaf: the bound value, or the stored one.
    pub(crate) fn resolve(&self, id: NodeId, stored: T) -> T {
        self.get(id).unwrap_or(stored)
    }
}

impl<T: Scalar> Expr<T> {
    /// Computes the value of this node from its leaves' stored values.
    pub fn value(&self) -> T {
        self.evaluate(&|_, stored| stored)
    }

    /// Computes the value of this node with some leaves substituted.
    ///
    /// Leaves without a binding use their stored value.
    pub fn value_with(&self, bindings: &Bindings<T>) -> T {
        self.evaluate(&|id, stored| bindings.resolve(id, stored))
    }

    /// Recursive evaluation, with `leaf_value` choosing each leaf's value.
    pub(crate) fn evaluate<F>(&self, leaf_value: &F) -> T
    where
        F: Fn(NodeId, T) -> T,
    {
        match self.node() {
            Node::Leaf(leaf) => leaf_value(self.id(), leaf.value()),
            Node::Add(l, r) => l.evaluate(leaf_value) + r.evaluate(leaf_value),
            Node::Sub(l, r) => l.evaluate(leaf_value) - r.evaluate(leaf_value),
            Node::Mult(l, r) => l.evaluate(leaf_value) * r.evaluate(leaf_value),
            Node::Div(l, r) => l.evaluate(leaf_value) / r.evaluate(leaf_value),
            Node::Exp(x) => x.evaluate(leaf_value).exp(),
        }
    }
}
