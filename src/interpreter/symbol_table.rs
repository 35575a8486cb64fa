use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Mapping from variable names to their last assigned values.
///
/// Names are case-sensitive. Entries are created or overwritten by
/// assignment and never removed. Each session owns its own table.
///
/// # Example
/// ```
/// use calcrepl::interpreter::{symbol_table::SymbolTable, value::Value};
///
/// let mut symbols = SymbolTable::new();
/// symbols.assign("x", Value::Integer(15));
///
/// assert_eq!(symbols.get("x"), Some(Value::Integer(15)));
/// assert_eq!(symbols.get("X"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    variables: HashMap<String, Value>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// Returns the previous value, if there was one.
    pub fn assign(&mut self, name: &str, value: Value) -> Option<Value> {
        self.variables.insert(name.to_string(), value)
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` before the first assignment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
