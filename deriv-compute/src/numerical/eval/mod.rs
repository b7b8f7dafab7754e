mod binary;
mod unary;

use deriv_parser::parser::ast::expr::Expr;
use super::ctxt::Ctxt;
use tracing::debug;

pub use binary::apply_binary;
pub use unary::apply_unary;

/// Any type that can be evaluated to produce a number.
///
/// Evaluation never fails. A variable missing from the context evaluates to `0`, and domain
/// errors (`ln(-1)`, `1 / 0`, `(-8) ^ 0.5`) produce the IEEE-754 result: NaN or an infinity.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> f64;

    /// Evaluate the expression to produce a value, using an empty context.
    fn eval_default(&self) -> f64 {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> f64 {
        match self {
            Expr::Constant(value) => *value,
            Expr::Variable(name) => ctxt.get_var(name).unwrap_or_else(|| {
                debug!(name = name.as_str(), "variable is not bound, evaluating it as 0");
                0.0
            }),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
        }
    }
}
