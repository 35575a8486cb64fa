/// The evaluator module walks AST nodes and computes results.
///
/// The evaluator traverses the AST, performs arithmetic, reads and writes
/// variables, and reports runtime errors such as division by zero or
/// undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand:
/// numbers, identifiers, operators and parentheses, each tagged with its
/// position.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Distinguishes integer from float literals.
/// - Reports lexical errors for invalid characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and constructs a statement tree
/// following the grammar, by recursive descent with one level of function
/// per precedence level.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with positions.
/// - Tells assignments from expressions with one token of lookahead.
pub mod parser;
/// The variable store of a session.
///
/// Maps case-sensitive names to the values last assigned to them.
pub mod symbol_table;
/// The value module defines the runtime number type.
///
/// Values are either integers or floats. This module also provides the
/// checked promotion from integer to float and the printed representation.
pub mod value;
