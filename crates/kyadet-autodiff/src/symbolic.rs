//! Graph-mode differentiation.
//!
//! Instead of collapsing to a number, the derivative is built as a new
//! expression graph. Wherever a rule needs an operand's value the operand
//! handle itself is reused, so the derivative graph still refers to the
//! original leaves and can be differentiated again with respect to any of
//! them. The original graph is never modified.

use crate::graph::{Expr, Node, NodeId};
use kyadet_core::Scalar;
use log::debug;
use std::collections::HashMap;

impl<T: Scalar> Expr<T> {
    /// Builds the derivative of this node with respect to `target` as a graph.
    ///
    /// Leaves become fresh constants `1` (the target) or `0` (any other leaf).
    /// Chaining gives higher and mixed derivatives:
    /// `z.diff_graph(x.id()).diff_graph(y.id()).value()` is `∂²z/∂x∂y`.
    ///
    /// Within one call the derivative of a shared node is built once and
    /// reused, so the result grows linearly with the input graph. Terms are
    /// not simplified.
    pub fn diff_graph(&self, target: NodeId) -> Expr<T> {
        let mut derived = HashMap::new();
        self.derive(target, &mut derived)
    }

    /// Each node is derived once per call, so a child shared by several
    /// parents keeps a single derivative node shared the same way.
    fn derive(&self, target: NodeId, derived: &mut HashMap<NodeId, Expr<T>>) -> Expr<T> {
        if let Some(d) = derived.get(&self.id()) {
            return d.clone();
        }

        let d = match self.node() {
            Node::Leaf(_) => {
                if self.id() == target {
                    Expr::new(T::one())
                } else {
                    Expr::new(T::zero())
                }
            }
            Node::Add(l, r) => l.derive(target, derived) + r.derive(target, derived),
            Node::Sub(l, r) => l.derive(target, derived) - r.derive(target, derived),
            Node::Mult(l, r) => {
                let (dl, dr) = (l.derive(target, derived), r.derive(target, derived));
                dl * r + l * dr
            }
            Node::Div(l, r) => {
                let (dl, dr) = (l.derive(target, derived), r.derive(target, derived));
                (dl * r - l * dr) / (r * r)
            }
            Node::Exp(x) => x.exp() * x.derive(target, derived),
        };

        derived.insert(self.id(), d.clone());
        d
    }

    /// Builds the `n`-th derivative with respect to `target` as a graph.
    ///
    /// `n == 0` returns this handle unchanged.
    pub fn nth_derivative(&self, target: NodeId, n: usize) -> Expr<T> {
        let mut current = self.clone();
        for order in 1..=n {
            current = current.diff_graph(target);
            debug!(
                "order {} derivative w.r.t. {} has {} nodes",
                order,
                target,
                current.num_nodes()
            );
        }
        current
    }
}
