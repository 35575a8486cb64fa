use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. Each repetition
/// folds the expression built so far into the left child, so `10 - 3 - 2`
/// becomes `(10 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(tokens)?;
    loop {
        let lexeme = tokens.peek()?;
        if let Some(op) = token_to_binary_operator(&lexeme.token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = lexeme.position;
            tokens.advance()?;
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_unary(tokens)?;
    loop {
        let lexeme = tokens.peek()?;
        if let Some(op) = token_to_binary_operator(&lexeme.token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = lexeme.position;
            tokens.advance()?;
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is `+`, `-`, `*` or `/`,
/// and `None` for all other tokens.
///
/// # Example
/// ```
/// use calcrepl::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
