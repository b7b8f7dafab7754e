//! Rendering of expression trees back to text.
//!
//! The rendering is canonical rather than faithful to the source: every binary operation except
//! `^` is wrapped in parentheses with spaces around the operator, function operands lose one
//! redundant layer of parentheses, and `0 - x` is written with the sign shorthand `(-x)`. The
//! result always parses back into a tree that evaluates to the same value.

use std::fmt::{self, Display, Formatter};
use super::{ast::expr::Expr, token::op::BinOpKind};

/// Formatting options for expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// The number of fractional digits used to format constants, before trailing zeros are
    /// trimmed. Constants smaller than this precision render as `0`.
    pub precision: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

impl FormatOptions {
    /// Wraps the given [`FormatOptions`] into a builder for further customization.
    pub fn into_builder(self) -> FormatOptionsBuilder {
        FormatOptionsBuilder(self)
    }
}

/// Helper struct to build a [`FormatOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of fractional digits. See [`FormatOptions::precision`] for more
    /// information.
    pub fn precision(mut self, precision: usize) -> Self {
        self.0.precision = precision;
        self
    }

    /// Builds the [`FormatOptions`] struct.
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

/// Trims trailing zeros, and then a trailing decimal point, from a string assumed to represent a
/// single number in fixed-point notation.
fn trim_trailing(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Formats a number in fixed-point notation with the given number of fractional digits, then
/// trims trailing zeros and a trailing decimal point.
pub fn fmt_number(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    } else if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    let formatted = format!("{:.*}", precision, value);
    match trim_trailing(&formatted) {
        // small negative numbers round to zero
        "-0" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Formats a computed value for display. This is [`fmt_number`], except that a nonzero value too
/// small to show at the given precision is written in scientific notation, as in `1e-7`, instead
/// of collapsing to `0`.
pub fn fmt_value(value: f64, precision: usize) -> String {
    let fixed = fmt_number(value, precision);
    if fixed != "0" || value == 0.0 {
        return fixed;
    }

    let scientific = format!("{:.*e}", precision, value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => format!("{}e{}", trim_trailing(mantissa), exponent),
        None => scientific,
    }
}

/// Removes exactly one pair of parentheses enclosing the whole string, if the first character is
/// an opening parenthesis whose matching closing parenthesis is the last character.
///
/// `(x + 1)` becomes `x + 1`, while `(a) * (b)` is returned unchanged.
pub fn strip_outer_parens(s: &str) -> &str {
    if !s.starts_with('(') {
        return s;
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return if i == s.len() - 1 { &s[1..i] } else { s };
                }
            },
            _ => (),
        }
    }

    s
}

/// Formatter for an [`Expr`] with specific [`FormatOptions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprFormatter<'a> {
    /// The expression to format.
    pub expr: &'a Expr,

    /// The options to use when formatting.
    pub options: FormatOptions,
}

impl ExprFormatter<'_> {
    /// Formats a child expression with the same options.
    fn child<'b>(&self, expr: &'b Expr) -> ExprFormatter<'b> {
        ExprFormatter { expr, options: self.options }
    }
}

impl Display for ExprFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.expr {
            // no numeral denotes a non-finite value, so write an expression that evaluates to it
            Expr::Constant(value) if value.is_nan() => write!(f, "(0 / 0)"),
            Expr::Constant(value) if value.is_infinite() => {
                if value.is_sign_negative() {
                    write!(f, "(-(1 / 0))")
                } else {
                    write!(f, "(1 / 0)")
                }
            },
            Expr::Constant(value) => {
                let number = fmt_number(*value, self.options.precision);
                if number.starts_with('-') {
                    write!(f, "({})", number)
                } else {
                    write!(f, "{}", number)
                }
            },
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Unary(unary) => {
                let operand = self.child(&unary.operand).to_string();
                write!(f, "{}({})", unary.op, strip_outer_parens(&operand))
            },
            Expr::Binary(binary) => match binary.op {
                BinOpKind::Exp => {
                    write!(f, "{}^", self.child(&binary.lhs))?;
                    // `^` is left-associative, so a power in the exponent needs parentheses
                    match &*binary.rhs {
                        Expr::Binary(rhs) if rhs.op == BinOpKind::Exp => {
                            write!(f, "({})", self.child(&binary.rhs))
                        },
                        rhs => write!(f, "{}", self.child(rhs)),
                    }
                },
                BinOpKind::Sub if binary.lhs.is_constant(0.0) => {
                    write!(f, "(-{})", self.child(&binary.rhs))
                },
                op => write!(f, "({} {} {})", self.child(&binary.lhs), op, self.child(&binary.rhs)),
            },
        }
    }
}

impl Expr {
    /// Wraps the expression in an [`ExprFormatter`] that renders it with the given options.
    pub fn fmt_with(&self, options: FormatOptions) -> ExprFormatter<'_> {
        ExprFormatter { expr: self, options }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_with(FormatOptions::default()).fmt(f)
    }
}
