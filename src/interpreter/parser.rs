/// Binary operator parsing.
///
/// Implements the left-associative `+ -` and `* /` precedence levels.
pub mod binary;

/// Unary operator and primary expression parsing.
///
/// Handles prefix signs, numeric literals, variable references and
/// parenthesized sub-expressions.
pub mod unary;

/// Core parsing entry points and the token stream.
///
/// Contains the lookahead buffer over the lexer, the result type and the
/// top-level functions that parse a full line.
pub mod core;

/// Statement parsing.
///
/// Decides between an assignment and a bare expression using one token of
/// lookahead.
pub mod statement;
