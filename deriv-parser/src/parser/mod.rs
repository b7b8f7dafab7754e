//! Recursive-descent parser that turns a source string into an [`Expr`] tree.
//!
//! The parser does not consume tokens left to right. Instead, each call looks at a whole region
//! of tokens and decides what kind of node the region is:
//!
//! 1. Surrounding whitespace is skipped, and parenthesis pairs that enclose the whole region are
//!    removed (each pair is verified with a matching scan, so `(a) + (b)` is left alone).
//! 2. An empty region is the constant `0`.
//! 3. A single number token is a [`Expr::Constant`].
//! 4. A single name token that is not a function name is a [`Expr::Variable`].
//! 5. A function name directly followed by a parenthesized operand that spans the rest of the
//!    region is a [`Expr::Unary`].
//! 6. Otherwise, the region is split at every top-level additive operator, or failing that every
//!    top-level multiplicative operator, or failing that every top-level `^`. The operands are
//!    parsed recursively and folded from the left into nested [`Expr::Binary`] nodes.
//!
//! Folding from the left makes `+`, `-`, `*`, `/` and `^` all left-associative: `a - b - c` is
//! `(a - b) - c` and `2^3^2` is `(2^3)^2`. A chain of operators of the same class is handled in
//! one step, so only parentheses, function calls and changes of operator class count towards
//! [`ParseOptions::max_depth`].

pub mod ast;
pub mod error;
pub mod fmt;
pub mod iter;
pub mod literal;
pub mod token;

use ast::expr::Expr;
use error::{kind, Error};
use levenshtein::levenshtein;
use literal::{identifier_name, numeral_value};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use token::op::{BinOpKind, Precedence, UnaryOpKind};
use tracing::{debug, trace};

/// The default maximum nesting depth accepted by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 1 << 8;

/// Options that control the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// The maximum nesting depth allowed in an expression. Every function call and every change
    /// of operator class adds one level, while a chain like `1 + 2 + 3` adds only one. Parsing
    /// fails with [`kind::TooDeep`] past this depth.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl ParseOptions {
    /// Utility function to create new [`ParseOptions`] with the given maximum depth.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}

/// Parses the given source with the default [`ParseOptions`].
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(source).parse()
}

/// A parser for a single expression.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source code being parsed.
    source: &'source str,

    /// The tokens of the whole source.
    tokens: Box<[Token<'source>]>,

    /// The options to parse with.
    options: ParseOptions,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    /// Create a new parser for the given source, using the given options.
    pub fn with_options(source: &'source str, options: ParseOptions) -> Self {
        Self {
            source,
            tokens: tokenize_complete(source),
            options,
        }
    }

    /// Parses the whole source into an expression tree.
    pub fn parse(&self) -> Result<Expr, Error> {
        debug!(source = self.source, "parsing expression");
        if let Some(token) = self.tokens.iter().find(|token| token.kind == TokenKind::Symbol) {
            return Err(Error::new(vec![token.span.clone()], kind::UnexpectedCharacter {
                found: token.lexeme.to_string(),
            }));
        }

        self.parse_region(&self.tokens, 0)
    }

    /// Returns the span covering the given tokens, or a span pointing at the end of the source
    /// code if there are no tokens.
    fn span_of(&self, tokens: &[Token]) -> Range<usize> {
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => first.span.start..last.span.end,
            _ => self.source.len()..self.source.len(),
        }
    }

    /// Parses a region of tokens into an expression.
    fn parse_region(&self, tokens: &[Token<'source>], depth: usize) -> Result<Expr, Error> {
        if depth > self.options.max_depth {
            return Err(Error::new(vec![self.span_of(tokens)], kind::TooDeep {
                max: self.options.max_depth,
            }));
        }

        let mut tokens = trim(tokens);
        while let Some(inner) = strip_enclosing_parens(tokens) {
            tokens = trim(inner);
        }

        if tokens.is_empty() {
            trace!("empty region parsed as 0");
            return Ok(Expr::Constant(0.0));
        }

        if let Some(value) = numeral_value(tokens) {
            return Ok(Expr::Constant(value));
        }

        if let [token] = tokens {
            if token.kind == TokenKind::Number {
                return Err(Error::new(vec![token.span.clone()], kind::NumeralOutOfRange));
            }
        }

        if let Some(name) = identifier_name(tokens) {
            return Ok(Expr::Variable(name.to_string()));
        }

        if let Some(expr) = self.try_parse_unary(tokens, depth)? {
            return Ok(expr);
        }

        self.parse_binary(tokens, depth)
    }

    /// Parses the region as a function call if it starts with a function name.
    ///
    /// Returns `Ok(None)` if the region does not start with a function name, or if the
    /// parenthesized operand does not extend to the end of the region (as in `sin(x) + 1`), in
    /// which case the region must be split at an operator instead.
    fn try_parse_unary(&self, tokens: &[Token<'source>], depth: usize) -> Result<Option<Expr>, Error> {
        let Some(op) = UnaryOpKind::from_name(tokens[0].lexeme)
            .filter(|_| tokens[0].kind == TokenKind::Name) else {
            return Ok(None);
        };

        match tokens.get(1) {
            Some(open) if open.kind == TokenKind::OpenParen && open.span.start == tokens[0].span.end => {
                match find_close(tokens, 1) {
                    Some(close) if close == tokens.len() - 1 => {
                        let operand = self.parse_region(&tokens[2..close], depth + 1)?;
                        Ok(Some(Expr::unary(op, operand)))
                    },
                    Some(_) => Ok(None),
                    None => Err(Error::new(vec![open.span.clone()], kind::UnclosedParenthesis {
                        opening: true,
                    })),
                }
            },
            _ => Err(Error::new(vec![tokens[0].span.clone()], kind::InvalidFunctionCall { op })),
        }
    }

    /// Splits the region at every top-level operator of its loosest-binding class, then folds the
    /// operands from the left.
    fn parse_binary(&self, tokens: &[Token<'source>], depth: usize) -> Result<Expr, Error> {
        let splits = self.find_splits(tokens)?;

        let mut operands = Vec::with_capacity(splits.len() + 1);
        let mut start = 0;
        for &(index, _) in &splits {
            operands.push(trim(&tokens[start..index]));
            start = index + 1;
        }
        operands.push(trim(&tokens[start..]));

        // report the rightmost missing operand first
        for (i, &(index, op)) in splits.iter().enumerate().rev() {
            if operands[i + 1].is_empty() {
                return Err(Error::new(vec![tokens[index].span.clone()], kind::MissingOperand {
                    op,
                    left: false,
                }));
            }
        }

        // a missing left operand of `+` or `-` is a sign, as in `-x`
        let (first_index, first_op) = splits[0];
        if operands[0].is_empty() && first_op.precedence() != Precedence::Term {
            return Err(Error::new(vec![tokens[first_index].span.clone()], kind::MissingOperand {
                op: first_op,
                left: true,
            }));
        }

        trace!(operators = splits.len(), "folding operator chain");
        let mut expr = self.parse_region(operands[0], depth + 1)?;
        for (&(_, op), operand) in splits.iter().zip(&operands[1..]) {
            let rhs = self.parse_region(operand, depth + 1)?;
            expr = Expr::binary(expr, op, rhs);
        }
        Ok(expr)
    }

    /// Scans the region for the operators to split at, skipping over parenthesized spans.
    ///
    /// Returns every top-level additive operator in order; if there are none, every
    /// multiplicative operator; if there are none, every power operator. The returned list is
    /// never empty.
    fn find_splits(&self, tokens: &[Token<'source>]) -> Result<Vec<(usize, BinOpKind)>, Error> {
        let mut open_parens = Vec::new();
        let mut additive = Vec::new();
        let mut multiplicative = Vec::new();
        let mut power = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::OpenParen => open_parens.push(i),
                TokenKind::CloseParen => {
                    if open_parens.pop().is_none() {
                        return Err(Error::new(vec![token.span.clone()], kind::UnclosedParenthesis {
                            opening: false,
                        }));
                    }
                },
                _ if !open_parens.is_empty() => (),
                kind => {
                    let Some(op) = BinOpKind::from_token(kind) else {
                        continue;
                    };
                    match op.precedence() {
                        Precedence::Term => additive.push((i, op)),
                        Precedence::Factor => multiplicative.push((i, op)),
                        Precedence::Exp => power.push((i, op)),
                    }
                },
            }
        }

        if let Some(&open) = open_parens.first() {
            return Err(Error::new(vec![tokens[open].span.clone()], kind::UnclosedParenthesis {
                opening: true,
            }));
        }

        [additive, multiplicative, power]
            .into_iter()
            .find(|splits| !splits.is_empty())
            .ok_or_else(|| Error::new(vec![self.span_of(tokens)], kind::MissingOperator {
                suggestion: suggest_function(tokens),
            }))
    }
}

/// Removes whitespace tokens from both ends of the region.
fn trim<'a, 'source>(tokens: &'a [Token<'source>]) -> &'a [Token<'source>] {
    let start = tokens.iter().position(|token| !token.is_whitespace()).unwrap_or(tokens.len());
    let end = tokens.iter().rposition(|token| !token.is_whitespace()).map_or(start, |i| i + 1);
    &tokens[start..end]
}

/// Returns the index of the parenthesis that closes the one at `open`, or [`None`] if it is never
/// closed.
fn find_close(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            },
            _ => (),
        }
    }
    None
}

/// If the whole region is wrapped in a single matching pair of parentheses, returns the tokens
/// inside of it.
fn strip_enclosing_parens<'a, 'source>(tokens: &'a [Token<'source>]) -> Option<&'a [Token<'source>]> {
    let first = tokens.first()?;
    if first.kind != TokenKind::OpenParen {
        return None;
    }

    let last = tokens.len() - 1;
    (find_close(tokens, 0)? == last).then(|| &tokens[1..last])
}

/// If the region looks like a call to an unknown function, returns a known function with a
/// similar name.
fn suggest_function(tokens: &[Token]) -> Option<&'static str> {
    let [name, open, ..] = tokens else {
        return None;
    };
    if name.kind != TokenKind::Name || open.kind != TokenKind::OpenParen {
        return None;
    }

    UnaryOpKind::ALL
        .into_iter()
        .map(|op| (levenshtein(op.name(), name.lexeme), op.name()))
        .filter(|(distance, _)| *distance < 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parser::token::op::BinOpKind::*;

    fn c(value: f64) -> Expr {
        Expr::constant(value)
    }

    fn v(name: &str) -> Expr {
        Expr::variable(name)
    }

    fn bin(lhs: Expr, op: BinOpKind, rhs: Expr) -> Expr {
        Expr::binary(lhs, op, rhs)
    }

    /// Returns the debug representation of the error kind produced by parsing the source.
    fn parse_err(source: &str) -> (String, Vec<Range<usize>>) {
        let err = parse(source).unwrap_err();
        (format!("{:?}", err.kind), err.spans)
    }

    #[test]
    fn literal_number() {
        assert_eq!(parse("16").unwrap(), c(16.0));
        assert_eq!(parse("  3.14 ").unwrap(), c(3.14));
    }

    #[test]
    fn literal_variable() {
        assert_eq!(parse("x_1").unwrap(), v("x_1"));
        assert_eq!(parse("sinx").unwrap(), v("sinx"));
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(parse("").unwrap(), c(0.0));
        assert_eq!(parse("   ").unwrap(), c(0.0));
        assert_eq!(parse("()").unwrap(), c(0.0));
        assert_eq!(parse("sin()").unwrap(), Expr::unary(UnaryOpKind::Sin, c(0.0)));
    }

    #[test]
    fn strip_parens() {
        assert_eq!(parse("(x + 1)").unwrap(), parse("x + 1").unwrap());
        assert_eq!(parse("((x))").unwrap(), v("x"));
        assert_eq!(parse(" ( (2) ) ").unwrap(), c(2.0));
    }

    #[test]
    fn parens_not_enclosing() {
        // `(a) * (b)` starts and ends with parentheses, but they are not one pair
        assert_eq!(parse("(a) * (b)").unwrap(), bin(v("a"), Mul, v("b")));
    }

    #[test]
    fn precedence() {
        assert_eq!(
            parse("1 + 2 * 3").unwrap(),
            bin(c(1.0), Add, bin(c(2.0), Mul, c(3.0))),
        );
        assert_eq!(
            parse("2 * x ^ 3").unwrap(),
            bin(c(2.0), Mul, bin(v("x"), Exp, c(3.0))),
        );
        assert_eq!(
            parse("(1 + 2) * 3").unwrap(),
            bin(bin(c(1.0), Add, c(2.0)), Mul, c(3.0)),
        );
    }

    #[test]
    fn left_associative() {
        assert_eq!(
            parse("a - b - c").unwrap(),
            bin(bin(v("a"), Sub, v("b")), Sub, v("c")),
        );
        assert_eq!(
            parse("a / b * c").unwrap(),
            bin(bin(v("a"), Div, v("b")), Mul, v("c")),
        );
        assert_eq!(
            parse("2^3^2").unwrap(),
            bin(bin(c(2.0), Exp, c(3.0)), Exp, c(2.0)),
        );
    }

    #[test]
    fn unary_functions() {
        assert_eq!(
            parse("sin(x * 5) + ln(x ^ 2)").unwrap(),
            bin(
                Expr::unary(UnaryOpKind::Sin, bin(v("x"), Mul, c(5.0))),
                Add,
                Expr::unary(UnaryOpKind::Ln, bin(v("x"), Exp, c(2.0))),
            ),
        );
        assert_eq!(
            parse("exp(cos(x))").unwrap(),
            Expr::unary(UnaryOpKind::Exp, Expr::unary(UnaryOpKind::Cos, v("x"))),
        );
        assert_eq!(
            parse("sin(x)^2").unwrap(),
            bin(Expr::unary(UnaryOpKind::Sin, v("x")), Exp, c(2.0)),
        );
    }

    #[test]
    fn sign_shorthand() {
        assert_eq!(parse("-x").unwrap(), bin(c(0.0), Sub, v("x")));
        assert_eq!(parse("(-x) * 2").unwrap(), bin(bin(c(0.0), Sub, v("x")), Mul, c(2.0)));
    }

    #[test]
    fn missing_operand() {
        let (kind, spans) = parse_err("x +");
        assert_eq!(kind, "MissingOperand { op: Add, left: false }");
        assert_eq!(spans, vec![2..3]);

        let (kind, _) = parse_err("* x");
        assert_eq!(kind, "MissingOperand { op: Mul, left: true }");
    }

    #[test]
    fn unclosed_parenthesis() {
        let (kind, spans) = parse_err("(x + 1");
        assert_eq!(kind, "UnclosedParenthesis { opening: true }");
        assert_eq!(spans, vec![0..1]);

        let (kind, spans) = parse_err("x + 1)");
        assert_eq!(kind, "UnclosedParenthesis { opening: false }");
        assert_eq!(spans, vec![5..6]);

        let (kind, _) = parse_err("sin(x");
        assert_eq!(kind, "UnclosedParenthesis { opening: true }");
    }

    #[test]
    fn missing_operator() {
        let (kind, spans) = parse_err("x y");
        assert_eq!(kind, "MissingOperator { suggestion: None }");
        assert_eq!(spans, vec![0..3]);

        let (kind, _) = parse_err("2x");
        assert_eq!(kind, "MissingOperator { suggestion: None }");
    }

    #[test]
    fn suggest_similar_function() {
        let (kind, _) = parse_err("sinn(x)");
        assert_eq!(kind, "MissingOperator { suggestion: Some(\"sin\") }");

        let (kind, _) = parse_err("foo(x)");
        assert_eq!(kind, "MissingOperator { suggestion: None }");
    }

    #[test]
    fn invalid_function_call() {
        let (kind, spans) = parse_err("sin x");
        assert_eq!(kind, "InvalidFunctionCall { op: Sin }");
        assert_eq!(spans, vec![0..3]);

        let (kind, _) = parse_err("ln (x)");
        assert_eq!(kind, "InvalidFunctionCall { op: Ln }");

        let (kind, _) = parse_err("exp");
        assert_eq!(kind, "InvalidFunctionCall { op: Exp }");
    }

    #[test]
    fn unexpected_character() {
        let (kind, spans) = parse_err("x $ y");
        assert_eq!(kind, "UnexpectedCharacter { found: \"$\" }");
        assert_eq!(spans, vec![2..3]);
    }

    #[test]
    fn depth_limit() {
        let options = ParseOptions::default().with_max_depth(3);
        assert!(Parser::with_options("sin(cos(x))", options).parse().is_ok());

        let err = Parser::with_options("sin(cos(ln(exp(x))))", options).parse().unwrap_err();
        assert_eq!(format!("{:?}", err.kind), "TooDeep { max: 3 }");
        assert_eq!(err.spans, vec![15..16]);

        let err = Parser::with_options("((((((x + 1) * 2) + 1) * 2) + 1) * 2)", options)
            .parse()
            .unwrap_err();
        assert_eq!(format!("{:?}", err.kind), "TooDeep { max: 3 }");
    }

    #[test]
    fn flat_chain_is_one_level() {
        let options = ParseOptions::default().with_max_depth(1);
        assert!(Parser::with_options("1 + 2 - 3 + 4 - 5 + 6", options).parse().is_ok());

        let source = vec!["1"; 1100].join(" + ");
        let expr = parse(&source).unwrap();
        let constants = expr.post_order_iter().filter(|e| e.is_constant(1.0)).count();
        assert_eq!(constants, 1100);
    }

    #[test]
    fn chain_folds_left() {
        assert_eq!(
            parse("a + b - c + d").unwrap(),
            bin(bin(bin(v("a"), Add, v("b")), Sub, v("c")), Add, v("d")),
        );
        assert_eq!(
            parse("-a - b").unwrap(),
            bin(bin(c(0.0), Sub, v("a")), Sub, v("b")),
        );
    }

    #[test]
    fn missing_operand_in_chain() {
        let (kind, spans) = parse_err("x + + y");
        assert_eq!(kind, "MissingOperand { op: Add, left: false }");
        assert_eq!(spans, vec![2..3]);

        let (kind, spans) = parse_err("x * y / ");
        assert_eq!(kind, "MissingOperand { op: Div, left: false }");
        assert_eq!(spans, vec![6..7]);
    }

    #[test]
    fn numeral_out_of_range() {
        let source = format!("1{} - 1", "0".repeat(400));
        let (kind, spans) = parse_err(&source);
        assert_eq!(kind, "NumeralOutOfRange");
        assert_eq!(spans, vec![0..401]);
    }
}
