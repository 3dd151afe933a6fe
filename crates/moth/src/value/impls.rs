//! Value trait implementations: constructors, container operations,
//! predicates, extractors, From traits, PartialEq

use super::*;
use crate::error::{type_name, EvalError};

// ═══════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a number value
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    /// Create an error value
    pub fn error(msg: impl Into<String>) -> Self {
        Value::Error(msg.into())
    }

    /// Create a symbol value
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create an empty s-expression
    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Create an empty q-expression
    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    /// Create a function value
    pub fn function(builtin: Builtin) -> Self {
        Value::Function(builtin)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Container Operations
    // ═══════════════════════════════════════════════════════════════════

    /// Move `child` onto the end of this s- or q-expression.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a container.
    pub fn push(&mut self, child: Value) {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => items.push(child),
            other => panic!("cannot append to {}", type_name(other)),
        }
    }

    /// Remove and return the child at `index`, shifting later children left.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a container or `index` is out of range.
    /// Callers check counts before taking.
    pub fn take_at(&mut self, index: usize) -> Value {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => items.remove(index),
            other => panic!("cannot take from {}", type_name(other)),
        }
    }

    /// Take the child at `index` and drop the rest of the container.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Value::take_at`].
    pub fn consume(mut self, index: usize) -> Value {
        self.take_at(index)
    }

    /// Number of children (zero for non-containers).
    pub fn len(&self) -> usize {
        self.children().map_or(0, <[Value]>::len)
    }

    /// True for empty containers and for non-containers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the children of an s- or q-expression.
    pub fn children(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => Some(items),
            _ => None,
        }
    }

    /// Unwrap the children of an s- or q-expression.
    pub fn into_children(self) -> Option<Vec<Value>> {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => Some(items),
            _ => None,
        }
    }

    /// Retag a container as a q-expression. Non-containers are returned as is.
    pub fn into_qexpr(self) -> Value {
        match self {
            Value::SExpr(items) => Value::QExpr(items),
            other => other,
        }
    }

    /// Retag a container as an s-expression. Non-containers are returned as is.
    pub fn into_sexpr(self) -> Value {
        match self {
            Value::QExpr(items) => Value::SExpr(items),
            other => other,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is a number
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Check if value is a symbol
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Check if value is an s-expression
    pub fn is_sexpr(&self) -> bool {
        matches!(self, Value::SExpr(_))
    }

    /// Check if value is a q-expression
    pub fn is_qexpr(&self) -> bool {
        matches!(self, Value::QExpr(_))
    }

    /// Check if value is callable
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Value Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Extract the number, if any
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract a symbol name, if any
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Extract an error message, if any
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Value::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

// Functions never compare equal, not even to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::SExpr(a), Value::SExpr(b)) => a == b,
            (Value::QExpr(a), Value::QExpr(b)) => a == b,
            _ => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err.to_string())
    }
}

impl From<Builtin> for Value {
    fn from(builtin: Builtin) -> Self {
        Value::Function(builtin)
    }
}
