//! Infix rendering of expression graphs.
//!
//! Binary operations are fully parenthesised, named leaves print their name
//! and anonymous leaves print their value. Shared sub-expressions are printed
//! at each occurrence.

use crate::graph::{Expr, Node};
use kyadet_core::Scalar;
use std::fmt;

impl<T: Scalar> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Leaf(leaf) => match leaf.name() {
                Some(name) => f.write_str(name),
                None => write!(f, "{}", leaf.value()),
            },
            Node::Exp(x) => write!(f, "exp({})", x),
            Node::Add(l, r) | Node::Sub(l, r) | Node::Mult(l, r) | Node::Div(l, r) => {
                let symbol = self.op_type().symbol().unwrap_or("?");
                write!(f, "({} {} {})", l, symbol, r)
            }
        }
    }
}
