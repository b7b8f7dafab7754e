pub mod op;

pub use op::{BinOpKind, Precedence, UnaryOpKind};
