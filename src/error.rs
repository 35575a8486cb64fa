/// Lexical errors.
///
/// Raised while turning raw source text into tokens: characters that belong
/// to no token and integer literals that do not fit in 64 bits.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while matching the token stream
/// against the grammar: unexpected tokens, missing closing parentheses and
/// trailing input after a complete statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// variables, division by zero, integer overflow and lossy numeric
/// promotion.
pub mod runtime_error;

pub use lex_error::LexicalError;
pub use parse_error::SyntaxError;
pub use runtime_error::RuntimeError;

/// Any failure produced by running one line through the pipeline.
///
/// The `Display` form is `<Category> error: <detail>`, which the REPL prefixes
/// with `Error: ` when reporting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The lexer met input it could not tokenize.
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexicalError),
    /// The token stream did not match the grammar.
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    /// A well-formed statement failed while being evaluated.
    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Short classification string used for logging.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Lexical(_) => "lexical",
            Self::Syntax(_) => "syntax",
            Self::Runtime(_) => "runtime",
        }
    }
}
