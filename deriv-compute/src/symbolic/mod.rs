//! Symbolic manipulation of expression trees.
//!
//! # Differentiation
//!
//! [`derivative()`] computes the partial derivative of an expression with respect to one
//! variable, using the sum, product, quotient and chain rules. Powers `f ^ g` are rewritten as
//! `exp(g * ln(f))` before being differentiated, which handles variable exponents at the cost of
//! only being defined where `f > 0`.
//!
//! The result is not simplified, and tends to be full of `0 * f` and `1 * g` terms.
//!
//! # Simplification
//!
//! [`simplify()`] cleans up such trees by folding constant subtrees and removing identity
//! operations (`x + 0`, `x * 1`, `x ^ 1`, ...). See the [`mod@simplify`] module for details.
//!
//! ```
//! use deriv_compute::symbolic::{derivative, simplify};
//! use deriv_parser::parser::parse;
//!
//! let expr = parse("sin(x) * 3").unwrap();
//! let (dx, _) = simplify(derivative(&expr, "x"));
//! assert_eq!(dx.to_string(), "(cos(x) * 3)");
//! ```

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use simplify::{simplify, simplify_fully, simplify_with_steps, NodeKind};
pub use step_collector::{CountingCollector, StepCollector};
