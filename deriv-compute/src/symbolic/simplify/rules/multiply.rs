//! Simplification rules for multiplication.

use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use deriv_parser::parser::{ast::expr::Expr, token::op::BinOpKind};

/// `0*a = 0`
/// `a*0 = 0`
///
/// This holds for finite `a` only; `0 * inf` is NaN when evaluated.
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        (lhs.is_constant(0.0) || rhs.is_constant(0.0)).then(|| Expr::constant(0.0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_constant(1.0) {
            Some(rhs.clone())
        } else if rhs.is_constant(1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
}
