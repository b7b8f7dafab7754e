//! Binary operators and unary functions understood by the parser.

use crate::tokenizer::TokenKind;
use std::fmt;

/// The precedence class of a binary operator. Classes are ordered from loosest binding to
/// tightest binding, so `Precedence::Term < Precedence::Exp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Addition and subtraction.
    Term,

    /// Multiplication and division.
    Factor,

    /// Exponentiation.
    Exp,
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns the binary operation represented by the given token kind, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Exp => Some(Self::Exp),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            _ => None,
        }
    }

    /// Returns the symbol used to write the operation.
    pub fn symbol(&self) -> char {
        match self {
            Self::Exp => '^',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Add => '+',
            Self::Sub => '-',
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The unary function that is being applied. These are the only names that can be followed by a
/// parenthesized operand, and they can never be used as variable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOpKind {
    Sin,
    Cos,
    Ln,
    Exp,
}

impl UnaryOpKind {
    /// All unary functions, in the order the parser tries them.
    pub const ALL: [UnaryOpKind; 4] = [Self::Sin, Self::Cos, Self::Ln, Self::Exp];

    /// Returns the name the function is written with.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Ln => "ln",
            Self::Exp => "exp",
        }
    }

    /// Returns the unary function with the given name, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
