pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. The parser
/// works on sub-slices of this array, so it is collected up front.
///
/// Every character of the input is covered by some token; characters that are not part of the
/// expression grammar are produced as [`TokenKind::Symbol`] and rejected by the parser.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // `Symbol` matches any single character, so the lexer can only fail on input it cannot
        // split at a character boundary; keep the slice so the parser can still point at it
        let kind = result.unwrap_or(TokenKind::Symbol);
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn function_call() {
        compare_tokens(
            "sin(x_1 * 2.5)^.5",
            [
                (TokenKind::Name, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x_1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Mul, "*"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2.5"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Exp, "^"),
                (TokenKind::Number, ".5"),
            ],
        );
    }

    #[test]
    fn unknown_characters() {
        compare_tokens(
            "3x $ 5.",
            [
                (TokenKind::Number, "3"),
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "5."),
            ],
        );
    }

    #[test]
    fn complete_spans() {
        let tokens = tokenize_complete("ln(y)");
        let spans = tokens.iter().map(|t| t.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![0..2, 2..3, 3..4, 4..5]);
    }
}
