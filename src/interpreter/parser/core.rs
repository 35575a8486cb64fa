use std::collections::VecDeque;

use tracing::debug;

use crate::{
    Error,
    ast::{Expr, Statement},
    error::{LexicalError, SyntaxError},
    interpreter::{
        lexer::{Lexeme, Lexer, Token},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

/// Result type used by the parser.
///
/// Lexing happens on demand while parsing, so a parse can fail with either a
/// lexical or a syntax error.
pub type ParseResult<T> = Result<T, Error>;

/// Deepest nesting of parentheses and prefix signs accepted in one line.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Lookahead buffer over a [`Lexer`].
///
/// Tokens are scanned only when the parser asks for them. At most two tokens
/// are buffered, which is enough to tell `x = ...` from `x ...` without
/// rescanning.
///
/// The stream also tracks how deeply the parser has recursed, so that
/// pathological input fails with an error instead of exhausting the stack.
pub struct TokenStream<'source> {
    lexer:  Lexer<'source>,
    buffer: VecDeque<Lexeme>,
    depth:  usize,
}

impl<'source> TokenStream<'source> {
    /// Creates a stream over a fresh lexer for `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { lexer:  Lexer::new(source),
               buffer: VecDeque::with_capacity(2),
               depth:  0, }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> ParseResult<&Lexeme> {
        self.fill(1)?;
        Ok(&self.buffer[0])
    }

    /// Returns the token after the next one without consuming either.
    pub fn peek_second(&mut self) -> ParseResult<&Lexeme> {
        self.fill(2)?;
        Ok(&self.buffer[1])
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> ParseResult<Lexeme> {
        match self.buffer.pop_front() {
            Some(lexeme) => Ok(lexeme),
            None => Ok(self.lexer.next_token()?),
        }
    }

    /// Records one more level of recursion.
    ///
    /// # Errors
    /// `NestingTooDeep` once more than [`MAX_NESTING_DEPTH`] levels are open.
    pub fn descend(&mut self, position: usize) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                     position }.into());
        }
        Ok(())
    }

    /// Closes a level opened by [`TokenStream::descend`].
    pub const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn fill(&mut self, count: usize) -> Result<(), LexicalError> {
        while self.buffer.len() < count {
            self.buffer.push_back(self.lexer.next_token()?);
        }
        Ok(())
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_additive(tokens)
}

/// Parses one line of source text into a statement.
///
/// Exactly one statement must make up the whole line; anything left over
/// before the end of input is rejected.
///
/// # Errors
/// - A lexical error from the first unscannable character that the parser
///   reached.
/// - `UnexpectedToken` or `ExpectedClosingParen` for grammar violations.
/// - `UnexpectedTrailingTokens` when input remains after the statement.
///
/// # Example
/// ```
/// use calcrepl::{
///     ast::{Expr, LiteralValue, Statement},
///     interpreter::parser::core::parse_line,
/// };
///
/// let statement = parse_line("x = 5").unwrap();
/// assert_eq!(statement,
///            Statement::Assignment { name:     "x".to_string(),
///                                    value:    Expr::Literal { value:    LiteralValue::Integer(5),
///                                                              position: 4, },
///                                    position: 0, });
///
/// assert!(parse_line("1 + 2 3").is_err());
/// ```
pub fn parse_line(source: &str) -> ParseResult<Statement> {
    let mut tokens = TokenStream::new(source);
    let statement = parse_statement(&mut tokens)?;

    let Lexeme { token, position } = tokens.advance()?;
    if token != Token::Eof {
        return Err(SyntaxError::UnexpectedTrailingTokens { found: token,
                                                           position }.into());
    }

    debug!(?statement, "parsed statement");
    Ok(statement)
}
