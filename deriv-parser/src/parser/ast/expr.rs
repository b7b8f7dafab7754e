use crate::parser::{
    ast::{binary::Binary, unary::Unary},
    iter::ExprIter,
    token::op::{BinOpKind, UnaryOpKind},
};
use std::collections::BTreeSet;

/// A node of an expression tree.
///
/// The operator of a [`Expr::Binary`] or [`Expr::Unary`] node never changes after construction;
/// only its children can be replaced, which is what [`Expr::specify`] and the simplifier do.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant, such as `2` or `0.5`.
    Constant(f64),

    /// A free variable, such as `x`.
    Variable(String),

    /// A binary operation, such as `x + 1`.
    Binary(Binary),

    /// A unary function application, such as `sin(x)`.
    Unary(Unary),
}

impl Expr {
    /// Creates a constant node.
    pub fn constant(value: f64) -> Self {
        Expr::Constant(value)
    }

    /// Creates a variable node.
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// Creates a binary operation node that owns both operands.
    pub fn binary(lhs: Expr, op: BinOpKind, rhs: Expr) -> Self {
        Expr::Binary(Binary::new(lhs, op, rhs))
    }

    /// Creates a unary function node that owns its operand.
    pub fn unary(op: UnaryOpKind, operand: Expr) -> Self {
        Expr::Unary(Unary::new(op, operand))
    }

    /// Returns the value of this node if it is a constant.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this node is a constant with exactly the given value.
    pub fn is_constant(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the names of all variables that appear in the expression, in sorted order.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(|expr| match expr {
                Expr::Variable(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns true if no variable appears in the expression. Such an expression can be evaluated
    /// without any bindings.
    pub fn is_constant_free(&self) -> bool {
        self.post_order_iter().all(|expr| !matches!(expr, Expr::Variable(_)))
    }

    /// Replaces every occurrence of the variable `name` with a constant holding `value`, in
    /// place.
    pub fn specify(&mut self, name: &str, value: f64) {
        match self {
            Expr::Variable(var) if var == name => *self = Expr::Constant(value),
            Expr::Constant(_) | Expr::Variable(_) => (),
            Expr::Binary(binary) => {
                binary.lhs.specify(name, value);
                binary.rhs.specify(name, value);
            },
            Expr::Unary(unary) => unary.operand.specify(name, value),
        }
    }
}
