use crate::parser::{ast::expr::Expr, token::op::UnaryOpKind};

/// A unary function application, such as `sin(x)` or `ln(x + 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    /// The function being applied.
    pub op: UnaryOpKind,

    /// The operand of the function.
    pub operand: Box<Expr>,
}

impl Unary {
    /// Creates a new unary function application.
    pub fn new(op: UnaryOpKind, operand: Expr) -> Self {
        Self {
            op,
            operand: Box::new(operand),
        }
    }
}
