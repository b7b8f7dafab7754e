//! Simplification rules for powers.

use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use deriv_parser::parser::{ast::expr::Expr, token::op::BinOpKind};

/// `a^0 = 1`
pub fn zero_exponent(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Exp, |_, rhs| {
        rhs.is_constant(0.0).then(|| Expr::constant(1.0))
    })?;

    step_collector.push(Step::ZeroExponent);
    Some(opt)
}

/// `a^1 = a`
pub fn one_exponent(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Exp, |lhs, rhs| {
        rhs.is_constant(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::OneExponent);
    Some(opt)
}

/// `0^a = 0`
///
/// Only valid for positive `a`, which is assumed.
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Exp, |lhs, _| {
        lhs.is_constant(0.0).then(|| Expr::constant(0.0))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Exp, |lhs, _| {
        lhs.is_constant(1.0).then(|| Expr::constant(1.0))
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    zero_exponent(expr, step_collector)
        .or_else(|| one_exponent(expr, step_collector))
        .or_else(|| power_zero(expr, step_collector))
        .or_else(|| power_one(expr, step_collector))
}
