//! Parser for textual arithmetic expressions.
//!
//! An expression is built from numeric constants, named variables, the binary operators `+`, `-`,
//! `*`, `/` and `^`, and the unary functions `sin`, `cos`, `ln` and `exp`. Parsing produces an
//! [`Expr`](parser::ast::Expr) tree, which can be rendered back to a canonical textual form with
//! its [`Display`](std::fmt::Display) implementation.
//!
//! ```
//! use deriv_parser::parser::parse;
//!
//! let expr = parse("sin(x * 5) + ln(x ^ 2)").unwrap();
//! assert_eq!(expr.to_string(), "(sin(x * 5) + ln(x^2))");
//! ```

pub mod parser;
pub mod tokenizer;
