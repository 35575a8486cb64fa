use std::fmt;

use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to one of these, and the symbol table only ever
/// stores them. Integers stay integers until an operation involving a float or
/// a division promotes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match *literal {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Float(r) => Self::Float(r),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Floats are returned unchanged. Integers become the nearest `f64`, so
    /// magnitudes beyond `2^53` may round.
    ///
    /// # Example
    /// ```
    /// use calcrepl::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_float(), 10.0);
    /// assert_eq!(Value::Integer(9_007_199_254_740_993).as_float(), 9_007_199_254_740_992.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> f64 {
        match *self {
            Self::Float(r) => r,
            Self::Integer(n) => n as f64,
        }
    }

    /// Returns `true` if the value is integer or float zero.
    ///
    /// Negative float zero counts as zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Integer(n) => n == 0,
            Self::Float(r) => r == 0.0,
        }
    }
}

/// Integers print in plain decimal. Floats use the shortest text that reads
/// back to the same number, always with a fractional part or an exponent, so
/// `5.0` never collapses to `5`. Exponents carry a sign and at least two
/// digits (`1e+16`, `1e-05`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{}", format_float(r)),
        }
    }
}

/// Renders a float the way the REPL prints it.
fn format_float(r: f64) -> String {
    if r.is_nan() {
        return "nan".to_string();
    }

    let repr = format!("{r:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent.strip_prefix('-')
                                         .map_or(("+", exponent), |digits| ("-", digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => repr,
    }
}
