use deriv_parser::parser::literal::{is_identifier, parse_numeral};
use std::collections::HashMap;
use super::error::{kind::{InvalidIdentifier, InvalidNumeral, MissingEquals}, Error};
use tracing::debug;

/// A context to use when evaluating an expression, containing the values bound to its variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new, empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context from `name=value` bindings, such as those given on the command line.
    ///
    /// If a name is bound more than once, the first binding is kept. The first malformed binding
    /// is returned as an error whose spans point into that binding's text.
    pub fn from_bindings<I, S>(bindings: I) -> Result<Self, (S, Error)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ctxt = Self::new();
        for binding in bindings {
            match parse_binding(binding.as_ref()) {
                Ok((name, value)) if ctxt.vars.contains_key(&name) => {
                    debug!(name = name.as_str(), value, "variable is already bound, ignoring binding");
                },
                Ok((name, value)) => ctxt.add_var(&name, value),
                Err(err) => return Err((binding, err)),
            }
        }
        Ok(ctxt)
    }

    /// Binds the variable to the given value, returning the context. Convenient for building
    /// contexts inline.
    pub fn with_var(mut self, name: &str, value: f64) -> Self {
        self.add_var(name, value);
        self
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        debug!(name, value, "binding variable");
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Get all variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }
}

/// Splits a `name=value` binding at its first `=` and validates both halves.
///
/// The name must be an identifier and the value a plain numeral; no whitespace is allowed around
/// either of them.
pub fn parse_binding(binding: &str) -> Result<(String, f64), Error> {
    let Some(eq) = binding.find('=') else {
        return Err(Error::new(vec![0..binding.len()], MissingEquals));
    };

    let (name, value) = (&binding[..eq], &binding[eq + 1..]);
    if !is_identifier(name) {
        return Err(Error::new(
            vec![0..eq],
            InvalidIdentifier { name: name.to_string() },
        ));
    }

    let Some(value) = parse_numeral(value) else {
        return Err(Error::new(
            vec![eq + 1..binding.len()],
            InvalidNumeral { value: value.to_string() },
        ));
    };

    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn kind_of(err: &Error) -> String {
        format!("{:?}", err.kind)
    }

    #[test]
    fn valid_binding() {
        assert_eq!(parse_binding("x=0.5").unwrap(), ("x".to_string(), 0.5));
        assert_eq!(parse_binding("rate_2=3").unwrap(), ("rate_2".to_string(), 3.0));
        assert_eq!(parse_binding("_=.25").unwrap(), ("_".to_string(), 0.25));
    }

    #[test]
    fn missing_equals() {
        let err = parse_binding("x").unwrap_err();
        assert_eq!(kind_of(&err), "MissingEquals");
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn invalid_identifier() {
        let err = parse_binding("2x=1").unwrap_err();
        assert_eq!(kind_of(&err), r#"InvalidIdentifier { name: "2x" }"#);
        assert_eq!(err.spans, vec![0..2]);

        let err = parse_binding("sin=1").unwrap_err();
        assert_eq!(kind_of(&err), r#"InvalidIdentifier { name: "sin" }"#);

        let err = parse_binding("=1").unwrap_err();
        assert_eq!(kind_of(&err), r#"InvalidIdentifier { name: "" }"#);
    }

    #[test]
    fn invalid_numeral() {
        let err = parse_binding("x=abc").unwrap_err();
        assert_eq!(kind_of(&err), r#"InvalidNumeral { value: "abc" }"#);
        assert_eq!(err.spans, vec![2..5]);

        // only the first `=` separates the name from the value
        let err = parse_binding("x=1=2").unwrap_err();
        assert_eq!(kind_of(&err), r#"InvalidNumeral { value: "1=2" }"#);

        let err = parse_binding("x=-1").unwrap_err();
        assert_eq!(kind_of(&err), r#"InvalidNumeral { value: "-1" }"#);

        let err = parse_binding("x=").unwrap_err();
        assert_eq!(kind_of(&err), r#"InvalidNumeral { value: "" }"#);
    }

    #[test]
    fn first_binding_wins() {
        let ctxt = Ctxt::from_bindings(["x=1", "y=2", "x=3"]).unwrap();
        assert_eq!(ctxt.get_var("x"), Some(1.0));
        assert_eq!(ctxt.get_var("y"), Some(2.0));
        assert_eq!(ctxt.get_var("z"), None);
        assert_eq!(ctxt.get_vars().len(), 2);
    }

    #[test]
    fn from_bindings_reports_offending_binding() {
        let (binding, err) = Ctxt::from_bindings(["x=1", "y"]).unwrap_err();
        assert_eq!(binding, "y");
        assert_eq!(kind_of(&err), "MissingEquals");
    }
}
