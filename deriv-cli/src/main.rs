mod args;
mod error;

use args::{parse_args, Command, USAGE};
use deriv_compute::{
    numerical::{ctxt::Ctxt, eval::Eval},
    symbolic::{derivative, simplify, simplify_fully},
};
use deriv_parser::parser::{fmt::{fmt_value, strip_outer_parens, FormatOptions}, parse};
use error::Error;
use std::{io, process::ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Parses the expression and evaluates it with the given bindings, returning the formatted value.
fn eval(expr: &str, bindings: &[String]) -> Result<String, Error> {
    let tree = parse(expr).map_err(|err| Error::expr(err, expr))?;
    let ctxt = Ctxt::from_bindings(bindings)
        .map_err(|(binding, err)| Error::binding(err, binding))?;
    let value = tree.eval(&ctxt);
    debug!(value, "evaluated expression");
    Ok(fmt_value(value, FormatOptions::default().precision))
}

/// Parses the expression, differentiates it with respect to `by` and simplifies the result,
/// returning its rendering without a redundant outer pair of parentheses.
fn diff(expr: &str, by: &str, full: bool) -> Result<String, Error> {
    let tree = parse(expr).map_err(|err| Error::expr(err, expr))?;
    let derived = derivative(&tree, by);
    let (simplified, kind) = if full {
        simplify_fully(derived)
    } else {
        simplify(derived)
    };
    debug!(?kind, "simplified derivative");
    Ok(strip_outer_parens(&simplified.to_string()).to_string())
}

/// Runs the command, returning the line to print.
fn run(command: &Command) -> Result<String, Error> {
    match command {
        Command::Eval { expr, bindings } => eval(expr, bindings),
        Command::Diff { expr, by, full } => diff(expr, by, *full),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", USAGE);
            return ExitCode::from(1);
        },
    };

    match run(&command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        },
        Err(err) => {
            err.report_to_stderr();
            ExitCode::from(2)
        },
    }
}
