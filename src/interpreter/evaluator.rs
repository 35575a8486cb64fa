/// Binary operator evaluation logic.
///
/// Handles the four arithmetic operators, integer-to-float promotion and
/// the division-by-zero check.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix signs `+` and `-`.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, which owns the symbol table, the result type
/// and the dispatch over AST variants.
pub mod core;
