//! Reference expressions with known results at a given `x`.

use deriv_compute::{
    numerical::{ctxt::Ctxt, eval::Eval},
    symbolic::{derivative, simplify},
};
use deriv_error::Error;
use deriv_parser::parser::{fmt::{fmt_number, fmt_value}, parse};
use std::io::{self, Write};
use tracing::debug;

/// Results within this distance of the expected value pass.
pub const TOLERANCE: f64 = 1e-4;

/// Whether a fixture checks the expression itself or its derivative with respect to `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Eval,
    Diff,
}

/// An expression, the point `x` to check it at and the value expected there.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub name: &'static str,
    pub expr: &'static str,
    pub x: f64,
    pub expected: f64,
    pub mode: Mode,
}

/// Every fixture, in the order they are numbered in the shell.
pub const FIXTURES: [Fixture; 5] = [
    Fixture { name: "TEST1", expr: "sin(x * 5) + ln(x ^ 2)", x: 5.0, expected: 3.08652407477, mode: Mode::Eval },
    Fixture { name: "TEST2", expr: "cos(x / 5) - exp(2 ^ x)", x: 0.5, expected: -3.1182462135, mode: Mode::Eval },
    Fixture { name: "TEST3", expr: "sin(x * cos(x * 2))", x: 2.0, expected: 0.61824308331, mode: Mode::Diff },
    Fixture { name: "TEST4", expr: "exp(ln(x^2))", x: 1.0, expected: 2.0, mode: Mode::Diff },
    // `y` is unbound and evaluates to 0, leaving cos(0.5)
    Fixture { name: "TEST5", expr: "sin(x) * exp(y)", x: 0.5, expected: 0.87758256189, mode: Mode::Diff },
];

impl Fixture {
    fn ctxt(&self) -> Ctxt {
        Ctxt::new().with_var("x", self.x)
    }

    /// Computes the value this fixture checks.
    pub fn calculate(&self) -> Result<f64, Error> {
        debug!(name = self.name, expr = self.expr, "running fixture");
        let expr = parse(self.expr)?;
        Ok(match self.mode {
            Mode::Eval => expr.eval(&self.ctxt()),
            Mode::Diff => derivative(&expr, "x").eval(&self.ctxt()),
        })
    }

    /// Returns true if the calculated value is within [`TOLERANCE`] of the expected one.
    pub fn passes(&self) -> Result<bool, Error> {
        Ok((self.calculate()? - self.expected).abs() < TOLERANCE)
    }

    /// Writes a detailed breakdown of the fixture: the source expression, how it was parsed, the
    /// derivative if one is checked, and both results.
    pub fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        let expr = match parse(self.expr) {
            Ok(expr) => expr,
            Err(err) => return err.report_to_stderr(self.name, self.expr),
        };
        let x = fmt_number(self.x, 6);

        writeln!(out, "{}:", self.name)?;
        match self.mode {
            Mode::Eval => writeln!(out, "    source expression: {}    via x = {}", self.expr, x)?,
            Mode::Diff => writeln!(out, "    source expression: ({})'    via x = {}", self.expr, x)?,
        }
        writeln!(out, "    converted expression: {}", expr)?;

        let result = match self.mode {
            Mode::Eval => expr.eval(&self.ctxt()),
            Mode::Diff => {
                let (derived, _) = simplify(derivative(&expr, "x"));
                writeln!(out, "    calculated derivative: {}", derived)?;
                derived.eval(&self.ctxt())
            },
        };

        writeln!(out, "    expected result:   {}", fmt_value(self.expected, 6))?;
        writeln!(out, "    calculated result: {}", fmt_value(result, 6))?;
        let verdict = if (result - self.expected).abs() < TOLERANCE { "OK" } else { "FAIL" };
        writeln!(out, "    {}", verdict)
    }
}
