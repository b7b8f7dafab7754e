use std::io;

/// An error in one of the user-provided inputs, packaged with the input it points into.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be parsed.
    Expr {
        error: deriv_error::Error,
        input: String,
    },

    /// A `name=value` binding was malformed.
    Binding {
        error: deriv_error::Error,
        input: String,
    },
}

impl Error {
    /// Packages an error in the expression.
    pub fn expr(error: deriv_error::Error, input: &str) -> Self {
        Self::Expr { error, input: input.to_string() }
    }

    /// Packages an error in a variable binding.
    pub fn binding(error: deriv_error::Error, input: &str) -> Self {
        Self::Binding { error, input: input.to_string() }
    }

    /// Writes the report for this error into the given writer.
    pub fn write_report<W: io::Write>(&self, writer: W) -> io::Result<()> {
        match self {
            Self::Expr { error, input } => error.write_report("expr", input, writer),
            Self::Binding { error, input } => error.write_report("binding", input, writer),
        }
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self) {
        if let Err(err) = self.write_report(io::stderr()) {
            eprintln!("failed to write error report: {}", err);
        }
    }
}
