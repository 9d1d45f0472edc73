//! Value-mode differentiation.
//!
//! A single forward sweep carries each node's value together with its
//! derivative with respect to one target leaf, the way dual numbers do. The
//! result is a plain number and cannot be differentiated again; use
//! [`diff_graph`](crate::graph::Expr::diff_graph) for that.
//!
//! For every graph `g` and leaf `x`,
//! `g.diff(x.id()) == g.diff_graph(x.id()).value()`.

use crate::eval::Bindings;
use crate::graph::{Expr, Node, NodeId};
use kyadet_core::Scalar;

impl<T: Scalar> Expr<T> {
    /// Derivative of this node with respect to the leaf identified by `target`.
    ///
    /// A leaf contributes `1` if it is the target and `0` otherwise; the
    /// comparison is on identity, never on value. Every occurrence of a
    /// shared leaf contributes, so `(x * x).diff(x.id())` is `2x`.
    pub fn diff(&self, target: NodeId) -> T {
        self.value_and_diff(target).1
    }

    /// Value and derivative of this node in one sweep.
    pub fn value_and_diff(&self, target: NodeId) -> (T, T) {
        self.sweep(target, &|_, stored| stored)
    }

    /// Derivative with some leaves substituted, see [`Expr::value_with`].
    pub fn diff_with(&self, target: NodeId, bindings: &Bindings<T>) -> T {
        self.sweep(target, &|id, stored| bindings.resolve(id, stored))
            .1
    }

    fn sweep<F>(&self, target: NodeId, leaf_value: &F) -> (T, T)
    where
        F: Fn(NodeId, T) -> T,
    {
        match self.node() {
            Node::Leaf(leaf) => {
                let d = if self.id() == target { T::one() } else { T::zero() };
                (leaf_value(self.id(), leaf.value()), d)
            }
            Node::Add(l, r) => {
                let (lv, ld) = l.sweep(target, leaf_value);
                let (rv, rd) = r.sweep(target, leaf_value);
                (lv + rv, ld + rd)
            }
            Node::Sub(l, r) => {
                let (lv, ld) = l.sweep(target, leaf_value);
                let (rv, rd) = r.sweep(target, leaf_value);
                (lv - rv, ld - rd)
            }
            Node::Mult(l, r) => {
                // Product rule
                let (lv, ld) = l.sweep(target, leaf_value);
                let (rv, rd) = r.sweep(target, leaf_value);
                (lv * rv, ld * rv + lv * rd)
            }
            Node::Div(l, r) => {
                // Quotient rule
                let (lv, ld) = l.sweep(target, leaf_value);
                let (rv, rd) = r.sweep(target, leaf_value);
                (lv / rv, (ld * rv - lv * rd) / (rv * rv))
            }
            Node::Exp(x) => {
                let (xv, xd) = x.sweep(target, leaf_value);
                let e = xv.exp();
                (e, e * xd)
            }
        }
    }
}
