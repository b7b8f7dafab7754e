//! Symbolic derivatives of the unary functions.

use deriv_parser::parser::{ast::expr::Expr, token::op::{BinOpKind, UnaryOpKind}};
use super::differentiate;

/// Computes the derivative of a function application and performs the chain rule.
pub(super) fn function_derivative(op: UnaryOpKind, operand: &Expr, with: &str) -> Expr {
    let inner = differentiate(operand, with);
    match op {
        // sin(u)' = cos(u) * u'
        UnaryOpKind::Sin => Expr::binary(
            Expr::unary(UnaryOpKind::Cos, operand.clone()),
            BinOpKind::Mul,
            inner,
        ),
        // cos(u)' = -sin(u) * u'
        UnaryOpKind::Cos => Expr::binary(
            Expr::binary(
                Expr::constant(0.0),
                BinOpKind::Sub,
                Expr::unary(UnaryOpKind::Sin, operand.clone()),
            ),
            BinOpKind::Mul,
            inner,
        ),
        // ln(u)' = u' / u
        UnaryOpKind::Ln => Expr::binary(inner, BinOpKind::Div, operand.clone()),
        // exp(u)' = exp(u) * u'
        UnaryOpKind::Exp => Expr::binary(
            Expr::unary(UnaryOpKind::Exp, operand.clone()),
            BinOpKind::Mul,
            inner,
        ),
    }
}
