//! Callable value type: native builtins

use crate::{Environment, EvalContext, Result};

use super::Value;

/// Signature shared by every native function.
///
/// The argument list is owned by the callee; whatever it does not return is
/// dropped before the call ends.
pub type BuiltinFnPtr = fn(&mut Environment, &EvalContext, Vec<Value>) -> Result<Value>;

/// A built-in native function.
///
/// These are Rust functions exposed to the interpreter.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// Function name (for display/debugging)
    pub name: &'static str,

    /// The actual function pointer
    pub func: BuiltinFnPtr,
}

impl Builtin {
    /// Create a new builtin.
    pub const fn new(name: &'static str, func: BuiltinFnPtr) -> Self {
        Self { name, func }
    }

    /// Invoke the builtin, folding any failure into an error value.
    pub fn call(&self, env: &mut Environment, ctx: &EvalContext, args: Vec<Value>) -> Value {
        tracing::debug!(builtin = self.name, argc = args.len(), "applying builtin");
        match (self.func)(env, ctx, args) {
            Ok(value) => value,
            Err(err) => Value::from(err),
        }
    }
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}
