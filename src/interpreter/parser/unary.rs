use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::{ParseResult, TokenStream, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix signs `+` and `-`. Unary operators are
/// right-associative and bind tighter than any binary operator, so `--5` is
/// parsed as `-(-5)` and `-2 * 3` as `(-2) * 3`.
///
/// If no sign is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let lexeme = tokens.peek()?;
    let position = lexeme.position;
    let Some(op) = token_to_unary_operator(&lexeme.token) else {
        return parse_primary(tokens);
    };

    tokens.advance()?;
    tokens.descend(position)?;
    let expr = parse_unary(tokens)?;
    tokens.ascend();

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       position })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - integer and float literals
/// - identifiers
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := INTEGER | FLOAT | IDENT | "(" expr ")"
/// ```
/// # Errors
/// `UnexpectedToken` for any other token, including end of input.
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let Lexeme { token, position } = tokens.advance()?;

    match token {
        Token::Integer(n) => Ok(Expr::Literal { value: LiteralValue::Integer(n),
                                                position }),
        Token::Float(r) => Ok(Expr::Literal { value: LiteralValue::Float(r),
                                              position }),
        Token::Identifier(name) => Ok(Expr::Variable { name, position }),
        Token::LParen => parse_grouping(tokens, position),
        found => Err(SyntaxError::UnexpectedToken { expected: "a number, identifier, sign or '('",
                                                    found,
                                                    position }.into()),
    }
}

/// Parses the inside of a parenthesized expression, after the `(` at
/// `position`.
///
/// # Errors
/// `ExpectedClosingParen` if the expression is not followed by `)`.
fn parse_grouping(tokens: &mut TokenStream<'_>, position: usize) -> ParseResult<Expr> {
    tokens.descend(position)?;
    let expr = parse_expression(tokens)?;
    tokens.ascend();

    match tokens.advance()? {
        Lexeme { token: Token::RParen,
                 .. } => Ok(expr),
        Lexeme { token, position } => {
            Err(SyntaxError::ExpectedClosingParen { found: token,
                                                    position }.into())
        },
    }
}

/// Maps a token to the prefix sign it denotes, if any.
#[must_use]
const fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Minus => Some(UnaryOperator::Negate),
        _ => None,
    }
}
