//! Contains the common [`ErrorKind`] trait implemented by every user-facing error of the
//! differentiator, and the span-carrying [`Error`] type that wraps them.
//!
//! Errors are rendered with [`ariadne`], which underlines the offending region of the input
//! expression.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while parsing an expression or reading variable
/// bindings.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error into the given writer, using `input` as the source text
    /// that the spans point into.
    pub fn write_report<W: io::Write>(&self, src_id: &str, input: &str, writer: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), writer)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only print it through one of its writer-based methods.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

/// Builds a report with a single message, one label per span and an optional help message. Most
/// error kinds only need this shape of report.
pub fn simple_report<'a, 'b>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    labels: &[String],
    help: Option<String>,
) -> Report<'b, (&'a str, Range<usize>)> {
    let start = spans.first().map_or(0, |span| span.start);
    let mut builder = Report::build(ariadne::ReportKind::Error, src_id, start)
        .with_message(message)
        .with_labels(
            spans.iter()
                .cloned()
                .enumerate()
                .map(|(i, span)| {
                    let label = ariadne::Label::new((src_id, span)).with_color(EXPR);
                    match labels.get(i) {
                        Some(text) if !text.is_empty() => label.with_message(text),
                        _ => label,
                    }
                }),
        );
    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}
