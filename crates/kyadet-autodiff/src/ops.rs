//! Composition operators for the expression graph.
//!
//! The arithmetic operators `+ - * /` and [`exp`] are the only way to grow a
//! graph. Each call allocates one new node that references its operands;
//! existing nodes are never modified. Either side of a binary operator may be
//! a handle (owned or borrowed) or a raw literal, and literals are promoted to
//! fresh anonymous leaves before the node is built.
//!
//! A literal on the right works for any [`Scalar`]. A literal on the left is
//! implemented for `f32` and `f64` only, so it needs the scalar type to be
//! known: `2.0 + &x` does not infer when `x` was built from an unsuffixed
//! literal, while `&x + 2.0` does. Suffix the literal (`2.0_f64 + &x`) or
//! annotate the leaf (`Expr::<f64>::new(1.0)`).

use crate::graph::{Expr, Node};
use kyadet_core::Scalar;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Enumeration of operation types for easier matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    Leaf,
    Add,
    Sub,
    Mult,
    Div,
    Exp,
}

impl OpType {
    /// Returns the name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            OpType::Leaf => "Leaf",
            OpType::Add => "Add",
            OpType::Sub => "Sub",
            OpType::Mult => "Mult",
            OpType::Div => "Div",
            OpType::Exp => "Exp",
        }
    }

    /// Returns the number of operands.
    pub fn arity(&self) -> usize {
        match self {
            OpType::Leaf => 0,
            OpType::Exp => 1,
            OpType::Add | OpType::Sub | OpType::Mult | OpType::Div => 2,
        }
    }

    /// Returns the infix symbol of a binary operation.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            OpType::Add => Some("+"),
            OpType::Sub => Some("-"),
            OpType::Mult => Some("*"),
            OpType::Div => Some("/"),
            OpType::Leaf | OpType::Exp => None,
        }
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conversion of an operand into a graph handle.
///
/// Handles convert to themselves (borrowed handles are cloned, which shares
/// the node) and raw scalars become new anonymous leaves.
pub trait IntoExpr<T: Scalar> {
    fn into_expr(self) -> Expr<T>;
}

impl<T: Scalar> IntoExpr<T> for Expr<T> {
    fn into_expr(self) -> Expr<T> {
        self
    }
}

impl<T: Scalar> IntoExpr<T> for &Expr<T> {
    fn into_expr(self) -> Expr<T> {
        self.clone()
    }
}

impl<T: Scalar> IntoExpr<T> for T {
    fn into_expr(self) -> Expr<T> {
        Expr::new(self)
    }
}

macro_rules! impl_binary_op {
    ($Trait:ident, $method:ident, $Variant:ident) => {
        impl<T: Scalar, R: IntoExpr<T>> $Trait<R> for Expr<T> {
            type Output = Expr<T>;

            fn $method(self, rhs: R) -> Expr<T> {
                Expr::from_node(Node::$Variant(self, rhs.into_expr()))
            }
        }

        impl<T: Scalar, R: IntoExpr<T>> $Trait<R> for &Expr<T> {
            type Output = Expr<T>;

            fn $method(self, rhs: R) -> Expr<T> {
                Expr::from_node(Node::$Variant(self.clone(), rhs.into_expr()))
            }
        }

        impl_binary_op!(@literal $Trait, $method, $Variant, f32);
        impl_binary_op!(@literal $Trait, $method, $Variant, f64);
    };
    (@literal $Trait:ident, $method:ident, $Variant:ident, $t:ty) => {
        impl $Trait<Expr<$t>> for $t {
            type Output = Expr<$t>;

            fn $method(self, rhs: Expr<$t>) -> Expr<$t> {
                Expr::from_node(Node::$Variant(Expr::new(self), rhs))
            }
        }

        impl $Trait<&Expr<$t>> for $t {
            type Output = Expr<$t>;

            fn $method(self, rhs: &Expr<$t>) -> Expr<$t> {
                Expr::from_node(Node::$Variant(Expr::new(self), rhs.clone()))
            }
        }
    };
}

impl_binary_op!(Add, add, Add);
impl_binary_op!(Sub, sub, Sub);
impl_binary_op!(Mul, mul, Mult);
impl_binary_op!(Div, div, Div);

/// Builds `exp(x)`.
///
/// A literal argument is promoted to an anonymous leaf first.
pub fn exp<T: Scalar>(x: impl IntoExpr<T>) -> Expr<T> {
    Expr::from_node(Node::Exp(x.into_expr()))
}

impl<T: Scalar> Expr<T> {
    /// Builds `exp(self)`, sharing this node as the operand.
    pub fn exp(&self) -> Expr<T> {
        exp(self)
    }
}
