use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, TokenStream, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an assignment.
/// - an expression used as a statement.
///
/// Assignment is attempted first; if it does not match, the input is parsed
/// as an expression statement.
///
/// Grammar: `statement := assignment | expr`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the line.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let position = tokens.peek()?.position;
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, position })
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The function performs a limited lookahead: only if the next token is an
/// identifier and the following token is `=` is anything consumed. Otherwise
/// it returns `Ok(None)` and the identifier is left for expression parsing.
///
/// # Parameters
/// - `tokens`: Token stream positioned at a potential identifier.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` for an assignment,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns an error if the assigned expression fails to parse.
fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Option<Statement>> {
    let lexeme = tokens.peek()?;
    let Token::Identifier(name) = &lexeme.token else {
        return Ok(None);
    };
    let name = name.clone();
    let position = lexeme.position;

    if !matches!(tokens.peek_second()?.token, Token::Assign) {
        return Ok(None);
    }

    // identifier and '='
    tokens.advance()?;
    tokens.advance()?;

    let value = parse_expression(tokens)?;
    Ok(Some(Statement::Assignment { name,
                                    value,
                                    position }))
}
