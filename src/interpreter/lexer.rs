use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::LexicalError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFailure)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Float literal tokens, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Assign,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never matched by the scanner; produced by [`Lexer`]
    /// once the text is exhausted.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(r) => write!(f, "float literal {r:?}"),
            Self::Integer(n) => write!(f, "integer literal {n}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Assign => write!(f, "'='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Why the scanner rejected a slice of input.
///
/// The scanner only knows the failing slice; [`Lexer::next_token`] turns this
/// into a positioned [`LexicalError`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFailure {
    /// No token pattern matched.
    #[default]
    InvalidCharacter,
    /// The digits matched an integer but overflow `i64`.
    IntegerTooLarge,
}

/// A token paired with the character offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The classified token.
    pub token:    Token,
    /// Zero-based character offset into the source line.
    pub position: usize,
}

/// Pull-based tokenizer over a single line of source text.
///
/// Each call to [`Lexer::next_token`] scans exactly one more token. Once the
/// text is exhausted every further call yields [`Token::Eof`].
///
/// # Example
/// ```
/// use calcrepl::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x = 4.5");
/// assert_eq!(lexer.next_token().unwrap().token, Token::Identifier("x".to_string()));
/// assert_eq!(lexer.next_token().unwrap().token, Token::Assign);
/// assert_eq!(lexer.next_token().unwrap().token, Token::Float(4.5));
/// assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
/// ```
pub struct Lexer<'source> {
    source: &'source str,
    inner:  logos::Lexer<'source, Token>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { source,
               inner: Token::lexer(source) }
    }

    /// Scans the next token.
    ///
    /// Whitespace is skipped. At end of text a [`Token::Eof`] lexeme is
    /// returned, positioned one past the last character.
    ///
    /// # Errors
    /// - `InvalidCharacter` for a character that starts no token.
    /// - `IntegerTooLarge` for an integer literal outside the `i64` range.
    pub fn next_token(&mut self) -> Result<Lexeme, LexicalError> {
        let Some(result) = self.inner.next() else {
            let position = self.source.chars().count();
            trace!(position, "reached end of input");
            return Ok(Lexeme { token: Token::Eof,
                               position });
        };

        let span = self.inner.span();
        let position = self.char_offset(span.start);

        match result {
            Ok(token) => {
                trace!(%token, position, "scanned token");
                Ok(Lexeme { token, position })
            },
            Err(LexFailure::IntegerTooLarge) => {
                Err(LexicalError::IntegerTooLarge { literal: self.inner.slice().to_string(),
                                                    position })
            },
            Err(LexFailure::InvalidCharacter) => {
                let character = self.source[span.start..].chars()
                                                         .next()
                                                         .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(LexicalError::InvalidCharacter { character, position })
            },
        }
    }

    /// Converts a byte offset from the scanner into a character offset.
    fn char_offset(&self, byte_offset: usize) -> usize {
        self.source[..byte_offset].chars().count()
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// Every slice matching the float pattern is a valid `f64`, including a
/// trailing `.` as in `2.`.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// Returns `LexFailure::IntegerTooLarge` when the digits overflow `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexFailure> {
    lex.slice().parse().map_err(|_| LexFailure::IntegerTooLarge)
}
