//! Simplification rules for division.

use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use deriv_parser::parser::{ast::expr::Expr, token::op::BinOpKind};

/// `0/a = 0`
pub fn divide_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, _| {
        lhs.is_constant(0.0).then(|| Expr::constant(0.0))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        rhs.is_constant(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// Applies all division rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    divide_zero(expr, step_collector)
        .or_else(|| divide_one(expr, step_collector))
}
