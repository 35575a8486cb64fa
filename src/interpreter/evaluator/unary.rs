use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the operand unchanged.
    /// - `Negate`: numeric negation; negating `i64::MIN` overflows.
    ///
    /// # Example
    /// ```
    /// use calcrepl::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Plus, Value::Float(2.5)).unwrap();
    /// assert_eq!(v, Value::Float(2.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, value) => Ok(value),
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or_else(|| RuntimeError::Overflow { operation: format!("-({n})") })
            },
            (UnaryOperator::Negate, Value::Float(r)) => Ok(Value::Float(-r)),
        }
    }
}
