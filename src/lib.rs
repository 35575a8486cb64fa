//! # calcrepl
//!
//! calcrepl is an interpreter for a small arithmetic language with variables,
//! written in Rust. A line of input is lexed, parsed into an abstract syntax
//! tree and evaluated against the variables of a [`Session`].
//!
//! ```
//! use calcrepl::{Session, interpreter::value::Value};
//!
//! let mut session = Session::new();
//! assert_eq!(session.run_line("x = 10 + 5").unwrap(), None);
//! assert_eq!(session.run_line("x * 2").unwrap(), Some(Value::Integer(30)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{
    evaluator::core::Interpreter,
    parser::core::parse_line,
    symbol_table::SymbolTable,
    value::Value,
};
pub use crate::error::Error;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of one input line as a tree. The AST is built by the
/// parser and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every failure carries enough detail (offending character or token,
/// position, variable name) to produce a readable message.
pub mod error;
/// Orchestrates the pipeline stages.
///
/// This module ties together lexing, parsing, evaluation, the variable store
/// and the value representation.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads lines from any buffered reader, runs them through a [`Session`] and
/// writes results and errors to any writer.
pub mod repl;

/// One interpreter session: a variable store plus the pipeline entry point.
///
/// Sessions are independent of each other; variables assigned in one are
/// never visible in another.
#[derive(Debug, Clone, Default)]
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    /// Creates a session with no variables defined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one line of source text.
    ///
    /// The line is lexed, parsed as a single statement and evaluated.
    /// Expressions return `Some(value)`; assignments return `None`. On error
    /// the variables are exactly as they were before the call.
    ///
    /// # Errors
    /// Returns a lexical, syntax or runtime [`Error`].
    ///
    /// # Examples
    /// ```
    /// use calcrepl::{Error, Session, error::RuntimeError, interpreter::value::Value};
    ///
    /// let mut session = Session::new();
    /// session.run_line("x = 10").unwrap();
    /// session.run_line("y = (x + 10) / 5").unwrap();
    /// assert_eq!(session.run_line("y").unwrap(), Some(Value::Float(4.0)));
    ///
    /// let err = session.run_line("10 / 0").unwrap_err();
    /// assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero));
    /// assert_eq!(err.to_string(), "Runtime error: Division by zero");
    /// ```
    pub fn run_line(&mut self, source: &str) -> Result<Option<Value>, Error> {
        let result = parse_line(source).and_then(|statement| {
                                           self.interpreter
                                               .eval_statement(&statement)
                                               .map_err(Error::from)
                                       });

        if let Err(e) = &result {
            debug!(category = e.category(), error = %e, "line failed");
        }
        result
    }

    /// The variables assigned so far in this session.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        self.interpreter.symbols()
    }
}

/// Evaluates a single line in a fresh session.
///
/// Convenient for one-off calculations that do not need variables from
/// earlier lines.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use calcrepl::{evaluate_line, interpreter::value::Value};
///
/// assert_eq!(evaluate_line("2 + 3 * 4").unwrap(), Some(Value::Integer(14)));
///
/// // Unknown variable: nothing is defined in a fresh session.
/// assert!(evaluate_line("z").is_err());
/// ```
pub fn evaluate_line(source: &str) -> Result<Option<Value>, Error> {
    Session::new().run_line(source)
}
