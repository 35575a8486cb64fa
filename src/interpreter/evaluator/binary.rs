use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates both operands of a binary expression, left first, then
    /// applies the operator.
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr)
                          -> EvalResult<Value> {
        let lval = self.eval(left)?;
        let rval = self.eval(right)?;

        Self::eval_binary(op, lval, rval)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// `+`, `-` and `*` keep integers as integers when both operands are
    /// integers and promote to float otherwise. Integer results are checked
    /// for overflow. `/` always produces a float, and a zero right operand is
    /// an error for integers and floats alike.
    ///
    /// # Example
    /// ```
    /// use calcrepl::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4));
    /// assert_eq!(sum, Ok(Value::Integer(7)));
    ///
    /// let quotient = Interpreter::eval_binary(BinaryOperator::Div,
    ///                                         Value::Integer(10),
    ///                                         Value::Integer(5));
    /// assert_eq!(quotient, Ok(Value::Float(2.0)));
    ///
    /// let err = Interpreter::eval_binary(BinaryOperator::Div, Value::Integer(1), Value::Float(0.0));
    /// assert_eq!(err, Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Float, Integer};

        match (left, right) {
            _ if op == Div => {
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Float(left.as_float() / right.as_float()))
            },
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Div => unreachable!(),
                };
                result.map(Integer)
                      .ok_or_else(|| RuntimeError::Overflow { operation: format!("{a} {op} {b}") })
            },
            _ => {
                let left = left.as_float();
                let right = right.as_float();

                Ok(Float(match op {
                             Add => left + right,
                             Sub => left - right,
                             Mul => left * right,
                             Div => unreachable!(),
                         }))
            },
        }
    }
}
