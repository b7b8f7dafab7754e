//! Command-line argument handling.

use deriv_parser::parser::literal::is_identifier;
use std::fmt;

/// Usage text printed on malformed invocations.
pub const USAGE: &str = "\
usage: differentiator --eval \"expr\" name=value ...
       differentiator --diff \"expr\" --by name [--full]";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Evaluate the expression with the given `name=value` bindings.
    Eval {
        expr: String,
        bindings: Vec<String>,
    },

    /// Differentiate the expression with respect to `by` and simplify the result, once or until
    /// nothing changes if `full` is set.
    Diff {
        expr: String,
        by: String,
        full: bool,
    },
}

/// A malformed invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum UsageError {
    /// Fewer than two arguments were given.
    TooFewArguments,

    /// The first argument is neither `--eval` nor `--diff`.
    UnknownMode(String),

    /// `--diff` was not followed by `--by`.
    ExpectedBy(Option<String>),

    /// `--by` was not followed by a variable name.
    MissingVariable,

    /// The argument after `--by` is not a valid variable name.
    InvalidVariable(String),

    /// An argument was left over.
    UnexpectedArgument(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewArguments => write!(f, "too few arguments"),
            Self::UnknownMode(mode) => write!(f, "unknown mode: {}", mode),
            Self::ExpectedBy(Some(found)) => write!(f, "unknown command: {}", found),
            Self::ExpectedBy(None) => write!(f, "expected `--by` after the expression"),
            Self::MissingVariable => write!(f, "expected a variable name after `--by`"),
            Self::InvalidVariable(name) => write!(f, "`{}` is not a valid variable name", name),
            Self::UnexpectedArgument(arg) => write!(f, "unexpected argument: {}", arg),
        }
    }
}

/// Parses the arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let (Some(mode), Some(expr)) = (args.next(), args.next()) else {
        return Err(UsageError::TooFewArguments);
    };

    match mode.as_str() {
        "--eval" => Ok(Command::Eval { expr, bindings: args.collect() }),
        "--diff" => {
            match args.next() {
                Some(flag) if flag == "--by" => (),
                other => return Err(UsageError::ExpectedBy(other)),
            }

            let by = args.next().ok_or(UsageError::MissingVariable)?;
            if !is_identifier(&by) {
                return Err(UsageError::InvalidVariable(by));
            }

            let full = match args.next() {
                None => false,
                Some(flag) if flag == "--full" => true,
                Some(other) => return Err(UsageError::UnexpectedArgument(other)),
            };
            if let Some(extra) = args.next() {
                return Err(UsageError::UnexpectedArgument(extra));
            }

            Ok(Command::Diff { expr, by, full })
        },
        _ => Err(UsageError::UnknownMode(mode)),
    }
}
