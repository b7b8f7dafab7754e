//! Numerical evaluation of expression trees.

pub mod ctxt;
pub mod error;
pub mod eval;
