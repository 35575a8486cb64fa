use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{symbol_table::SymbolTable, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation state.
///
/// The interpreter owns the [`SymbolTable`] that assignments write to and
/// variable references read from. Two interpreters never share variables.
///
/// ## Usage
///
/// An `Interpreter` is created once per session and reused for every
/// statement of that session.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    symbols: SymbolTable,
}

impl Interpreter {
    /// Creates an interpreter with an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant. Expressions never modify the
    /// symbol table.
    ///
    /// # Example
    /// ```
    /// use calcrepl::{
    ///     ast::{Expr, LiteralValue},
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let interpreter = Interpreter::new();
    /// let expr = Expr::Literal { value:    LiteralValue::Integer(7),
    ///                            position: 0, };
    ///
    /// assert_eq!(interpreter.eval(&expr), Ok(Value::Integer(7)));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, .. } => self.eval_variable(name),
            Expr::UnaryOp { op, expr, .. } => Self::eval_unary(*op, self.eval(expr)?),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
        }
    }

    /// Evaluates a single statement.
    ///
    /// An expression statement yields its value. An assignment evaluates its
    /// right-hand side completely before writing to the symbol table, so a
    /// failing right-hand side leaves the table untouched; it yields `None`.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Expression { expr, .. } => self.eval(expr).map(Some),
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                let previous = self.symbols.assign(name, value);
                debug!(name = %name, %value, ?previous, "assigned variable");
                Ok(None)
            },
        }
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// `UndefinedVariable` if the name was never assigned.
    pub fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.symbols
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }
}
