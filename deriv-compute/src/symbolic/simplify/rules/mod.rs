//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given; the operands have already
//! been simplified by the time a rule runs.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod power;

use crate::symbolic::step_collector::StepCollector;
use deriv_parser::parser::{ast::expr::Expr, token::op::BinOpKind};
use super::step::Step;

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right-hand-side.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    op: BinOpKind,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Binary(binary) if binary.op == op => f(&binary.lhs, &binary.rhs),
        _ => None,
    }
}

/// Applies all rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| divide::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
}
