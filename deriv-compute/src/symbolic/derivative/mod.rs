//! Symbolic differentiation of expression trees.
//!
//! The derivative is built structurally, without simplifying along the way: `d/dx (x * y)` is
//! `((1 * y) + (x * 0))`. Pass the result to [`simplify`](crate::symbolic::simplify) to clean it
//! up.

use deriv_parser::parser::{
    ast::{binary::Binary, expr::Expr},
    token::op::{BinOpKind, UnaryOpKind},
};
use tracing::trace;

mod function;

/// `(f ± g)' = f' ± g'`
fn sum_rule(binary: &Binary, with: &str) -> Expr {
    Expr::binary(differentiate(&binary.lhs, with), binary.op, differentiate(&binary.rhs, with))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(binary: &Binary, with: &str) -> Expr {
    let (f, g) = (&*binary.lhs, &*binary.rhs);
    Expr::binary(
        Expr::binary(differentiate(f, with), BinOpKind::Mul, g.clone()),
        BinOpKind::Add,
        Expr::binary(f.clone(), BinOpKind::Mul, differentiate(g, with)),
    )
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(binary: &Binary, with: &str) -> Expr {
    let (f, g) = (&*binary.lhs, &*binary.rhs);
    let numerator = Expr::binary(
        Expr::binary(differentiate(f, with), BinOpKind::Mul, g.clone()),
        BinOpKind::Sub,
        Expr::binary(f.clone(), BinOpKind::Mul, differentiate(g, with)),
    );
    Expr::binary(
        numerator,
        BinOpKind::Div,
        Expr::binary(g.clone(), BinOpKind::Exp, Expr::constant(2.0)),
    )
}

/// `(f ^ g)' = (exp(g * ln(f)))'`
///
/// The rewrite is only valid where `f > 0`; elsewhere the derivative evaluates to NaN, even for
/// integer exponents such as `x ^ 2` at `x = -1`.
fn power_rule(binary: &Binary, with: &str) -> Expr {
    let rewritten = Expr::unary(
        UnaryOpKind::Exp,
        Expr::binary(
            (*binary.rhs).clone(),
            BinOpKind::Mul,
            Expr::unary(UnaryOpKind::Ln, (*binary.lhs).clone()),
        ),
    );
    differentiate(&rewritten, with)
}

fn differentiate(f: &Expr, with: &str) -> Expr {
    match f {
        Expr::Constant(_) => Expr::constant(0.0),
        Expr::Variable(name) => Expr::constant(if name == with { 1.0 } else { 0.0 }),
        Expr::Binary(binary) => match binary.op {
            BinOpKind::Add | BinOpKind::Sub => sum_rule(binary, with),
            BinOpKind::Mul => product_rule(binary, with),
            BinOpKind::Div => quotient_rule(binary, with),
            BinOpKind::Exp => power_rule(binary, with),
        },
        Expr::Unary(unary) => function::function_derivative(unary.op, &unary.operand, with),
    }
}

/// Computes the partial derivative of the given expression with respect to the variable `with`.
///
/// Every other variable is treated as a constant. The input is left untouched; the result is a
/// new, independent tree.
pub fn derivative(f: &Expr, with: &str) -> Expr {
    trace!(expr = %f, with, "differentiating");
    differentiate(f, with)
}
