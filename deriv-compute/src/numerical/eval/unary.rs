use deriv_parser::parser::{ast::unary::Unary, token::op::UnaryOpKind};
use crate::numerical::{ctxt::Ctxt, eval::Eval};

/// Applies the unary function to an already-evaluated operand.
pub fn apply_unary(op: UnaryOpKind, operand: f64) -> f64 {
    match op {
        UnaryOpKind::Sin => operand.sin(),
        UnaryOpKind::Cos => operand.cos(),
        UnaryOpKind::Ln => operand.ln(),
        UnaryOpKind::Exp => operand.exp(),
    }
}

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> f64 {
        apply_unary(self.op, self.operand.eval(ctxt))
    }
}
