use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Represents all errors that can occur while parsing a token stream.
pub enum SyntaxError {
    /// Found a token of the wrong kind where a specific construct was
    /// required.
    #[error("Expected {expected}, found {found} at position {position}")]
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: &'static str,
        /// The token actually encountered.
        found:    Token,
        /// The source position of the encountered token.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')', found {found} at position {position}")]
    ExpectedClosingParen {
        /// The token found instead of `)`.
        found:    Token,
        /// The source position of that token.
        position: usize,
    },
    /// Found extra tokens after a complete statement.
    #[error("Unexpected token {found} at position {position}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        found:    Token,
        /// The source position of that token.
        position: usize,
    },
    /// Parentheses or prefix signs are nested deeper than the parser allows.
    #[error("Expression nested deeper than {limit} levels at position {position}")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// The source position where the limit was exceeded.
        position: usize,
    },
}
