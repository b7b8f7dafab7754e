//! The expression tree produced by the parser.
//!
//! The tree is strictly owned: every [`Binary`] owns its two operands and every [`Unary`] owns its
//! operand through a [`Box`]. Cloning an [`Expr`] clones the whole subtree, so transformations
//! that reuse a subtree in several places (such as the product rule) always produce independent
//! copies.

pub mod binary;
pub mod expr;
pub mod unary;

pub use binary::Binary;
pub use expr::Expr;
pub use unary::Unary;
