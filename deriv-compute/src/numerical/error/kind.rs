//! Errors reported while reading a `name=value` variable binding.

use ariadne::{Fmt, Report};
use deriv_error::{simple_report, ErrorKind, EXPR};
use std::ops::Range;

/// The binding has no `=` separating the name from the value.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingEquals;

impl ErrorKind for MissingEquals {
    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<(&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            "missing `=` in variable binding",
            &["this binding".to_string()],
            Some(format!("write the binding as {}", "name=value".fg(EXPR))),
        )
    }
}

/// The left-hand side of a binding is not a valid variable name.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidIdentifier {
    /// The name that was given.
    pub name: String,
}

impl ErrorKind for InvalidIdentifier {
    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<(&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            format!("`{}` is not a valid variable name", self.name),
            &["this name".to_string()],
            Some(
                "variable names use letters, digits and underscores, do not start with a digit, \
                and cannot be the name of a function".to_string()
            ),
        )
    }
}

/// The right-hand side of a binding is not a numeral.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumeral {
    /// The value that was given.
    pub value: String,
}

impl ErrorKind for InvalidNumeral {
    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<(&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            format!("`{}` is not a number", self.value),
            &["this value".to_string()],
            Some(format!("values are written as plain numerals, such as {} or {}", "2".fg(EXPR), "0.5".fg(EXPR))),
        )
    }
}
