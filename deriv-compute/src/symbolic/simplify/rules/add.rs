//! Simplification rules for addition and subtraction.

use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use deriv_parser::parser::{ast::expr::Expr, token::op::BinOpKind};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if lhs.is_constant(0.0) {
            Some(rhs.clone())
        } else if rhs.is_constant(0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a-0 = a`
///
/// `0-a` is left alone, since it is how negation is written.
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        rhs.is_constant(0.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| subtract_zero(expr, step_collector))
}
