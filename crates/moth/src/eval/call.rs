//! Function application

use crate::builtins;
use crate::context::Dispatch;
use crate::error::type_name;
use crate::{Environment, EvalContext, EvalError, Value};

/// Apply an operator to an evaluated argument list.
///
/// Under [`Dispatch::Environment`] the operator must already be a function
/// value. Under [`Dispatch::Symbolic`] it must be a symbol naming one of the
/// arithmetic [`OPERATORS`](builtins::OPERATORS).
pub fn apply(operator: Value, args: Vec<Value>, env: &mut Environment, ctx: &EvalContext) -> Value {
    match (ctx.dispatch, operator) {
        (Dispatch::Environment, Value::Function(builtin)) => builtin.call(env, ctx, args),
        (Dispatch::Environment, other) => EvalError::NotAFunction {
            got: type_name(&other),
        }
        .into(),
        (Dispatch::Symbolic, Value::Symbol(name)) => match builtins::lookup_operator(&name) {
            Some(builtin) => builtin.call(env, ctx, args),
            None => EvalError::UnknownFunction { name }.into(),
        },
        (Dispatch::Symbolic, other) => EvalError::NotASymbol {
            got: type_name(&other),
        }
        .into(),
    }
}
