use deriv_parser::parser::{ast::binary::Binary, token::op::BinOpKind};
use crate::numerical::{ctxt::Ctxt, eval::Eval};

/// Applies the binary operator to two already-evaluated operands.
///
/// Division by zero and powers outside of the real domain follow IEEE-754 semantics, producing
/// infinities or NaN instead of an error.
pub fn apply_binary(op: BinOpKind, left: f64, right: f64) -> f64 {
    match op {
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
        BinOpKind::Mul => left * right,
        BinOpKind::Div => left / right,
        BinOpKind::Exp => left.powf(right),
    }
}

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> f64 {
        let left = self.lhs.eval(ctxt);
        let right = self.rhs.eval(ctxt);
        apply_binary(self.op, left, right)
    }
}
