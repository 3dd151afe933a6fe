//! Error types for Moth evaluation

use thiserror::Error;

use crate::value::Value;

/// An evaluation failure.
///
/// Builtins return these through `Result` so they can use `?`, but they never
/// cross the evaluator boundary as a `Result`: every `EvalError` is turned into
/// a [`Value::Error`] carrying its message, and from there it flows through
/// evaluation like any other value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A numeric literal that does not fit in an `i64`
    #[error("invalid number: {literal}")]
    InvalidNumber {
        /// The literal text as written
        literal: String,
    },

    /// A punctuation or marker node was handed to the reader
    #[error("invalid node: {kind}")]
    InvalidNode {
        /// Kind of the offending node
        kind: String,
    },

    /// Symbol lookup missed the environment
    #[error("unbound symbol '{name}'")]
    UnboundSymbol {
        /// The symbol that was looked up
        name: String,
    },

    /// Operator position does not hold a function
    #[error("first element is not a function, got {got}")]
    NotAFunction {
        /// Type of the value found in operator position
        got: &'static str,
    },

    /// Operator position does not hold a symbol (symbolic dispatch)
    #[error("first element is not a symbol, got {got}")]
    NotASymbol {
        /// Type of the value found in operator position
        got: &'static str,
    },

    /// Operator symbol names no builtin (symbolic dispatch)
    #[error("unknown function '{name}'")]
    UnknownFunction {
        /// The operator name
        name: String,
    },

    /// Wrong number of arguments
    #[error("function '{name}' expects {expected}, got {got}")]
    ArityMismatch {
        /// Builtin name
        name: &'static str,
        /// Human readable expectation, e.g. "1 argument"
        expected: &'static str,
        /// Number of arguments received
        got: usize,
    },

    /// Argument of the wrong type
    #[error("function '{name}' passed incorrect type: expected {expected}, got {got}")]
    TypeMismatch {
        /// Builtin name
        name: &'static str,
        /// Expected type name
        expected: &'static str,
        /// Actual type name
        got: &'static str,
    },

    /// Argument that must be non-empty was `{}`
    #[error("function '{name}' passed {{}}")]
    EmptyArgument {
        /// Builtin name
        name: &'static str,
    },

    /// Arithmetic on something other than a number
    #[error("can't operate on non-number, got {got}")]
    NonNumber {
        /// Type of the offending argument
        got: &'static str,
    },

    /// Division by a zero operand
    #[error("division by zero")]
    DivisionByZero,

    /// Arithmetic result does not fit in an `i64`
    #[error("integer overflow in '{op}'")]
    IntegerOverflow {
        /// Operator symbol
        op: &'static str,
    },

    /// `def` given a different number of names and values
    #[error("function 'def' cannot define {names} symbol(s) with {values} value(s)")]
    DefineCountMismatch {
        /// Number of names
        names: usize,
        /// Number of values
        values: usize,
    },
}

/// Result type alias for builtin implementations and their helpers
pub type Result<T> = std::result::Result<T, EvalError>;

/// Human-readable type name of a value, for error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Number(_) => "number",
        Value::Error(_) => "error",
        Value::Symbol(_) => "symbol",
        Value::SExpr(_) => "s-expression",
        Value::QExpr(_) => "q-expression",
        Value::Function(_) => "function",
    }
}
