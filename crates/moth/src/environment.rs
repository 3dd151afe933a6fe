//! Runtime environment managing symbol bindings

mod prelude;

use indexmap::IndexMap;

use crate::value::{Builtin, Value};

/// The runtime environment mapping symbol names to values.
///
/// Every bound value is owned by the environment. Storing through
/// [`Environment::put`] deep-copies the value, and reading through
/// [`Environment::get`] hands back a deep copy, so nothing bound here is
/// ever shared with the evaluator.
///
/// # Example
///
/// ```
/// use moth::{Environment, Value};
///
/// let mut env = Environment::new();
/// let x = Value::number(1);
/// env.put("x", &x);
/// env.put("x", &Value::number(10)); // Overwrites in place
///
/// assert_eq!(env.get("x"), Some(Value::number(10)));
/// assert_eq!(env.len(), 1);
/// assert_eq!(env.get("y"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: IndexMap<String, Value>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` to a copy of `value`, overwriting any existing binding.
    pub fn put(&mut self, name: &str, value: &Value) {
        tracing::debug!(name, value = %value, "binding symbol");
        self.define(name, value.clone());
    }

    /// Bind `name` to `value`, taking ownership of it.
    ///
    /// An existing binding keeps its position and has its value replaced.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Register a built-in function under its own name.
    pub fn define_builtin(&mut self, builtin: Builtin) {
        self.define(builtin.name, Value::Function(builtin));
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a binding, returning a copy of its value.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.lookup(name).cloned()
    }

    /// Borrow a bound value without copying it.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Check if a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over all bindings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get all binding names (for completion).
    pub fn names(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}
