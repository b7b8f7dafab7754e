//! The kinds of errors reported while parsing an expression.
//!
//! Every kind implements [`ErrorKind`], so it can be wrapped in an [`Error`](deriv_error::Error)
//! together with the spans it points at.

use ariadne::{Fmt, Report};
use deriv_error::{simple_report, ErrorKind, EXPR};
use crate::parser::token::op::{BinOpKind, UnaryOpKind};
use std::ops::Range;

/// A parenthesis was not closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnclosedParenthesis {
    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<(&'a str, Range<usize>)> {
        let help = if self.opening {
            "add a closing parenthesis `)` somewhere after this"
        } else {
            "add an opening parenthesis `(` somewhere before this"
        };
        simple_report(
            src_id,
            spans,
            "unclosed parenthesis",
            &["this parenthesis is not closed".to_string()],
            Some(help.to_string()),
        )
    }
}

/// A binary operator is missing one of its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingOperand {
    /// The operator with the missing operand.
    pub op: BinOpKind,

    /// Whether the left-hand side is the missing operand. Otherwise, the right-hand side is.
    pub left: bool,
}

impl ErrorKind for MissingOperand {
    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<(&'a str, Range<usize>)> {
        let side = if self.left { "before" } else { "after" };
        simple_report(
            src_id,
            spans,
            format!("missing operand for `{}`", self.op),
            &[format!("I expected to see an {} {} this operator", "expression".fg(EXPR), side)],
            None,
        )
    }
}

/// A region of the source could not be split into an operation: it is neither a numeral, a
/// variable, a function call, nor does it contain an operator outside of parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingOperator {
    /// A known function name that the user may have meant to write.
    pub suggestion: Option<&'static str>,
}

impl ErrorKind for MissingOperator {
    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<(&'a str, Range<usize>)> {
        let help = match self.suggestion {
            Some(name) => format!("did you mean the function `{}`?", name.fg(EXPR)),
            None => format!(
                "join the parts with one of the operators {}",
                "+ - * / ^".fg(EXPR),
            ),
        };
        simple_report(
            src_id,
            spans,
            "invalid expression",
            &["I could not find an operator to split this expression at".to_string()],
            Some(help),
        )
    }
}

/// The name of a unary function was not followed immediately by a parenthesized operand.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidFunctionCall {
    /// The function whose operand is missing.
    pub op: UnaryOpKind,
}

impl ErrorKind for InvalidFunctionCall {
    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<(&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            format!("invalid use of the function `{}`", self.op),
            &[format!("`{}` must be followed directly by an operand in parentheses", self.op)],
            Some(format!("write it as {}", format!("{}(x)", self.op).fg(EXPR))),
        )
    }
}

/// A character that is not part of the expression grammar was found.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedCharacter {
    /// The offending text.
    pub found: String,
}

impl ErrorKind for UnexpectedCharacter {
    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<(&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            format!("unexpected character `{}`", self.found),
            &["this character cannot appear in an expression".to_string()],
            Some("expressions may only contain numbers, names, parentheses and + - * / ^".to_string()),
        )
    }
}

/// A numeral is too large to be represented as a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct NumeralOutOfRange;

impl ErrorKind for NumeralOutOfRange {
    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<(&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            "number is too large",
            &["this number does not fit in a 64-bit float".to_string()],
            None,
        )
    }
}

/// The expression is nested more deeply than the parser allows.
#[derive(Debug, Clone, PartialEq)]
pub struct TooDeep {
    /// The maximum nesting depth that was configured.
    pub max: usize,
}

impl ErrorKind for TooDeep {
    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<(&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            "expression is nested too deeply",
            &[format!("nesting exceeds the limit of {} here", self.max)],
            None,
        )
    }
}
