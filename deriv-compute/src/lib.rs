//! Numerical evaluation, symbolic differentiation and simplification of the expression trees
//! produced by [`deriv_parser`].
//!
//! ```
//! use deriv_compute::numerical::{ctxt::Ctxt, eval::Eval};
//! use deriv_compute::symbolic::{derivative, simplify};
//! use deriv_parser::parser::parse;
//!
//! let expr = parse("x * y").unwrap();
//! let (dx, _) = simplify(derivative(&expr, "x"));
//! assert_eq!(dx.to_string(), "y");
//!
//! let ctxt = Ctxt::new().with_var("y", 3.0);
//! assert_eq!(dx.eval(&ctxt), 3.0);
//! ```

pub mod numerical;
pub mod symbolic;
