//! Simplification of expression trees.
//!
//! [`simplify`] makes a single bottom-up pass over the tree. Every node's operands are
//! simplified first, then the node itself is considered:
//!
//! - If all of its operands are free of variables, the node is replaced by a constant holding its
//!   value.
//! - Otherwise, the identity rules in [`rules`] are tried in order, and the first one that applies
//!   replaces the node.
//!
//! A single pass does not always reach a fixed point. Use [`simplify_fully`] to repeat the pass
//! until nothing changes.
//!
//! ```
//! use deriv_compute::symbolic::simplify::{simplify, NodeKind};
//! use deriv_parser::parser::parse;
//!
//! let (expr, kind) = simplify(parse("(x * 1) + 2 * 3").unwrap());
//! assert_eq!(expr.to_string(), "(x + 6)");
//! assert_eq!(kind, NodeKind::HasVariable);
//! ```

pub mod rules;
pub mod step;

use crate::numerical::eval::Eval;
use deriv_parser::parser::ast::expr::Expr;
use super::step_collector::{CountingCollector, StepCollector};
use tracing::trace;

pub use step::Step;

/// What the simplifier knows about a simplified node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The node contains no variables and is a single constant after simplification.
    ConstantFree,

    /// The node contains at least one variable.
    HasVariable,

    /// Reserved for folding `0 - x` into a negation. No rule produces it yet.
    ZeroCollapse,
}

impl NodeKind {
    /// Combines the kinds of two operands: the result is constant-free only if both are.
    fn and(self, other: NodeKind) -> NodeKind {
        match (self, other) {
            (NodeKind::ConstantFree, NodeKind::ConstantFree) => NodeKind::ConstantFree,
            _ => NodeKind::HasVariable,
        }
    }

    /// The kind of a node produced by a rule.
    fn of(expr: &Expr) -> NodeKind {
        if expr.is_constant_free() {
            NodeKind::ConstantFree
        } else {
            NodeKind::HasVariable
        }
    }
}

/// Simplifies the node's operands in place, then returns the replacement for the node itself, or
/// [`None`] if it should be kept as-is.
fn simplify_node(
    expr: &mut Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> (Option<Expr>, NodeKind) {
    let operands = match expr {
        Expr::Constant(_) => return (None, NodeKind::ConstantFree),
        Expr::Variable(_) => return (None, NodeKind::HasVariable),
        Expr::Unary(unary) => simplify_operand(&mut unary.operand, step_collector),
        Expr::Binary(binary) => {
            let lhs = simplify_operand(&mut binary.lhs, step_collector);
            let rhs = simplify_operand(&mut binary.rhs, step_collector);
            lhs.and(rhs)
        },
    };

    if operands == NodeKind::ConstantFree {
        let value = expr.eval_default();
        trace!(from = %expr, to = value, "folded constant");
        step_collector.push(Step::FoldConstant);
        return (Some(Expr::constant(value)), NodeKind::ConstantFree);
    }

    match rules::all(expr, step_collector) {
        Some(replacement) => {
            trace!(from = %expr, to = %replacement, "applied identity rule");
            let kind = NodeKind::of(&replacement);
            (Some(replacement), kind)
        },
        None => (None, NodeKind::HasVariable),
    }
}

/// Simplifies an operand, replacing it in place if the simplifier produced a replacement.
fn simplify_operand(
    operand: &mut Box<Expr>,
    step_collector: &mut dyn StepCollector<Step>,
) -> NodeKind {
    let (replacement, kind) = simplify_node(operand, step_collector);
    if let Some(replacement) = replacement {
        **operand = replacement;
    }
    kind
}

/// Simplifies the expression with a single bottom-up pass, returning the simplified expression
/// and what is known about it.
pub fn simplify(expr: Expr) -> (Expr, NodeKind) {
    simplify_with_steps(expr, &mut ())
}

/// Simplifies the expression with a single bottom-up pass, recording every rewrite in the given
/// step collector.
pub fn simplify_with_steps(
    mut expr: Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> (Expr, NodeKind) {
    let (replacement, kind) = simplify_node(&mut expr, step_collector);
    (replacement.unwrap_or(expr), kind)
}

/// Repeats the simplification pass until it no longer changes the expression.
///
/// Every rewrite strictly shrinks the tree, so this always terminates.
pub fn simplify_fully(expr: Expr) -> (Expr, NodeKind) {
    simplify_fully_with_steps(expr, &mut ())
}

/// Repeats the simplification pass until it no longer changes the expression, recording every
/// rewrite in the given step collector.
pub fn simplify_fully_with_steps(
    mut expr: Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> (Expr, NodeKind) {
    let mut counter = CountingCollector::new(step_collector);
    let mut passes = 0usize;
    loop {
        let before = counter.count();
        let (next, kind) = simplify_with_steps(expr, &mut counter);
        passes += 1;

        expr = next;
        if counter.count() == before {
            trace!(passes, steps = counter.count(), "simplification reached a fixed point");
            return (expr, kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
    use crate::numerical::ctxt::Ctxt;
    use crate::symbolic::derivative;
    use deriv_parser::parser::{parse, token::op::BinOpKind};
    use pretty_assertions::assert_eq;
    use super::*;

    fn simplified(source: &str) -> (String, NodeKind) {
        let (expr, kind) = simplify(parse(source).unwrap());
        (expr.to_string(), kind)
    }

    #[test]
    fn constant_folding() {
        let (expr, kind) = simplify(parse("2 * 3 + 1").unwrap());
        assert_eq!(expr, Expr::constant(7.0));
        assert_eq!(kind, NodeKind::ConstantFree);

        let (expr, kind) = simplify(parse("exp(0) + cos(0) * 2 ^ 3").unwrap());
        assert_eq!(expr, Expr::constant(9.0));
        assert_eq!(kind, NodeKind::ConstantFree);
    }

    #[test]
    fn constant_leaf_is_kept() {
        assert_eq!(simplify(Expr::constant(4.0)), (Expr::constant(4.0), NodeKind::ConstantFree));
        assert_eq!(simplify(Expr::variable("x")), (Expr::variable("x"), NodeKind::HasVariable));
    }

    #[test]
    fn folding_follows_ieee() {
        let (expr, kind) = simplify(parse("1 / 0").unwrap());
        assert_eq!(expr, Expr::constant(f64::INFINITY));
        assert_eq!(kind, NodeKind::ConstantFree);

        let (expr, _) = simplify(parse("ln(0 - 1)").unwrap());
        assert!(expr.as_constant().is_some_and(f64::is_nan));
    }

    #[test]
    fn addition_identities() {
        assert_eq!(simplified("x + 0"), ("x".to_string(), NodeKind::HasVariable));
        assert_eq!(simplified("0 + x"), ("x".to_string(), NodeKind::HasVariable));
        assert_eq!(simplified("x - 0"), ("x".to_string(), NodeKind::HasVariable));
    }

    #[test]
    fn negation_is_kept() {
        assert_eq!(simplified("0 - x"), ("(-x)".to_string(), NodeKind::HasVariable));
    }

    #[test]
    fn multiplication_identities() {
        assert_eq!(simplified("x * 0"), ("0".to_string(), NodeKind::ConstantFree));
        assert_eq!(simplified("0 * x"), ("0".to_string(), NodeKind::ConstantFree));
        assert_eq!(simplified("x * 1"), ("x".to_string(), NodeKind::HasVariable));
        assert_eq!(simplified("1 * x"), ("x".to_string(), NodeKind::HasVariable));
    }

    #[test]
    fn division_identities() {
        assert_eq!(simplified("0 / x"), ("0".to_string(), NodeKind::ConstantFree));
        assert_eq!(simplified("x / 1"), ("x".to_string(), NodeKind::HasVariable));
        assert_eq!(simplified("1 / x"), ("(1 / x)".to_string(), NodeKind::HasVariable));
    }

    #[test]
    fn power_identities() {
        assert_eq!(simplified("0 ^ x"), ("0".to_string(), NodeKind::ConstantFree));
        assert_eq!(simplified("1 ^ x"), ("1".to_string(), NodeKind::ConstantFree));
        assert_eq!(simplified("x ^ 0"), ("1".to_string(), NodeKind::ConstantFree));
        assert_eq!(simplified("x ^ 1"), ("x".to_string(), NodeKind::HasVariable));
    }

    #[test]
    fn rules_see_simplified_operands() {
        assert_eq!(simplified("(x * (3 - 3)) + y"), ("y".to_string(), NodeKind::HasVariable));
        assert_eq!(simplified("sin(0) + x"), ("x".to_string(), NodeKind::HasVariable));
        assert_eq!(simplified("x ^ (2 - 1)"), ("x".to_string(), NodeKind::HasVariable));
    }

    #[test]
    fn unchanged_tree() {
        let expr = parse("sin(x) * (y + 2)").unwrap();
        let mut steps: Vec<Step> = Vec::new();
        let (simplified, kind) = simplify_with_steps(expr.clone(), &mut steps);
        assert_eq!(simplified, expr);
        assert_eq!(kind, NodeKind::HasVariable);
        assert!(steps.is_empty());
    }

    #[test]
    fn steps_are_recorded_bottom_up() {
        let mut steps: Vec<Step> = Vec::new();
        let (expr, _) = simplify_with_steps(parse("x * 1 + (2 - 2)").unwrap(), &mut steps);
        assert_eq!(expr, Expr::variable("x"));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::FoldConstant, Step::AddZero]);
    }

    #[test]
    fn partial_derivative() {
        let (dx, kind) = simplify(derivative(&parse("x * y").unwrap(), "x"));
        assert_eq!(dx, Expr::variable("y"));
        assert_eq!(kind, NodeKind::HasVariable);
    }

    #[test]
    fn derivative_of_square() {
        let (dx, _) = simplify(derivative(&parse("x ^ 2").unwrap(), "x"));
        assert_eq!(dx.to_string(), "(exp(2 * ln(x)) * (2 * (1 / x)))");
    }

    #[test]
    fn fixed_point() {
        let expr = parse("(x + 0) * (y ^ 1) - 0").unwrap();
        let (once, _) = simplify(expr.clone());
        let (full, kind) = simplify_fully(expr);
        assert_eq!(full, once);
        assert_eq!(full, Expr::binary(Expr::variable("x"), BinOpKind::Mul, Expr::variable("y")));
        assert_eq!(kind, NodeKind::HasVariable);

        let mut steps: Vec<Step> = Vec::new();
        let (again, _) = simplify_fully_with_steps(full.clone(), &mut steps);
        assert_eq!(again, full);
        assert!(steps.is_empty());
    }

    #[test]
    fn full_simplification_forwards_steps() {
        let mut steps: Vec<Step> = Vec::new();
        let (expr, _) = simplify_fully_with_steps(parse("x * 1 + (2 - 2)").unwrap(), &mut steps);
        assert_eq!(expr, Expr::variable("x"));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::FoldConstant, Step::AddZero]);
    }

    #[test]
    fn soundness() {
        let sources = [
            "x * 1 + 0 * y",
            "(x - 0) / 1 + sin(0 * x)",
            "x ^ 1 * y ^ 0 + 1 ^ x",
            "exp(ln(x) * 1) - (2 + 3) * y",
            "cos(x / 5) - exp(2 ^ x)",
            "0 / (x + 1) + x / (y * 1)",
        ];
        let bindings = [(0.5, 2.0), (1.5, -1.0), (3.0, 0.25)];

        for source in sources {
            let expr = parse(source).unwrap();
            let (simplified, _) = simplify(expr.clone());
            for (x, y) in bindings {
                let ctxt = Ctxt::new().with_var("x", x).with_var("y", y);
                assert_float_absolute_eq!(expr.eval(&ctxt), simplified.eval(&ctxt), 1e-9);
            }
        }
    }

    #[test]
    fn folded_non_finite_constants_render_back() {
        let ctxt = Ctxt::new().with_var("x", 1.0);
        for source in ["x + 1 / 0", "x + ln(0)", "x * (0 / 0)"] {
            let (simplified, _) = simplify(parse(source).unwrap());
            let back = parse(&simplified.to_string()).unwrap().eval(&ctxt);
            let expected = simplified.eval(&ctxt);
            assert!(
                back == expected || (back.is_nan() && expected.is_nan()),
                "source: {source}, rendered: {simplified}, got {back}",
            );
        }

        let (simplified, _) = simplify(parse("x + 1 / 0").unwrap());
        assert_eq!(simplified.to_string(), "(x + (1 / 0))");
    }

    #[test]
    fn constant_trees_fold_to_one_constant() {
        for source in ["1 + 2 * 3", "sin(1) ^ 2 + cos(1) ^ 2", "ln(exp(3)) / (4 - 2)", "-(2 ^ 0.5)"] {
            let expr = parse(source).unwrap();
            let expected = expr.eval_default();
            let (simplified, kind) = simplify(expr);
            assert_eq!(kind, NodeKind::ConstantFree);
            assert_eq!(simplified.as_constant(), Some(expected));
        }
    }

    #[test]
    fn derivative_linearity() {
        let a = parse("sin(x) * x").unwrap();
        let b = parse("exp(x / 2)").unwrap();
        let sum = Expr::binary(a.clone(), BinOpKind::Add, b.clone());

        let (of_sum, _) = simplify(derivative(&sum, "x"));
        let (sum_of, _) = simplify(Expr::binary(
            derivative(&a, "x"),
            BinOpKind::Add,
            derivative(&b, "x"),
        ));

        for x in [-2.0, 0.0, 0.7, 3.0] {
            let ctxt = Ctxt::new().with_var("x", x);
            assert_float_absolute_eq!(of_sum.eval(&ctxt), sum_of.eval(&ctxt), 1e-9);
        }
    }
}
