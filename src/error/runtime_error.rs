#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    ///
    /// This is the name-error kind of runtime error.
    #[error("Undefined variable '{name}'")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// Integer arithmetic overflowed 64 bits.
    #[error("Integer overflow while computing {operation}")]
    Overflow {
        /// The operation that overflowed, rendered as source text.
        operation: String,
    },
}

impl RuntimeError {
    /// Returns `true` for the undefined-variable kind.
    ///
    /// # Example
    /// ```
    /// use calcrepl::error::RuntimeError;
    ///
    /// let err = RuntimeError::UndefinedVariable { name: "z".to_string() };
    /// assert!(err.is_name_error());
    /// assert!(!RuntimeError::DivisionByZero.is_name_error());
    /// ```
    #[must_use]
    pub const fn is_name_error(&self) -> bool {
        matches!(self, Self::UndefinedVariable { .. })
    }
}
