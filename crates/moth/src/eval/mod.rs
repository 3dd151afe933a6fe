//! Expression evaluation

pub mod call;

use crate::context::Dispatch;
use crate::{Environment, EvalContext, EvalError, Value};

pub use call::apply;

/// Trait for reducing values to normal form.
///
/// Evaluation consumes its input: the result either reuses parts of it or
/// replaces it, and whatever is left over is dropped.
pub trait Evaluate {
    /// Evaluate this value in the given environment.
    fn eval(self, env: &mut Environment, ctx: &EvalContext) -> Value;
}

impl Evaluate for Value {
    fn eval(self, env: &mut Environment, ctx: &EvalContext) -> Value {
        match self {
            Value::Symbol(name) => match ctx.dispatch {
                Dispatch::Environment => lookup_symbol(&name, env),
                Dispatch::Symbolic => Value::Symbol(name),
            },
            Value::SExpr(children) => eval_sexpr(children, env, ctx),
            other => other,
        }
    }
}

/// Resolve a symbol to a copy of its binding.
fn lookup_symbol(name: &str, env: &Environment) -> Value {
    match env.get(name) {
        Some(value) => {
            tracing::trace!(name, "resolved symbol");
            value
        }
        None => EvalError::UnboundSymbol {
            name: name.to_string(),
        }
        .into(),
    }
}

/// Reduce the children of an s-expression.
///
/// Children are evaluated left to right. The first error among them wins;
/// otherwise `()` stays `()`, a single child stands for itself, and anything
/// longer is a function application.
pub fn eval_sexpr(children: Vec<Value>, env: &mut Environment, ctx: &EvalContext) -> Value {
    let mut children: Vec<Value> = children
        .into_iter()
        .map(|child| child.eval(env, ctx))
        .collect();

    if let Some(index) = children.iter().position(Value::is_error) {
        return children.swap_remove(index);
    }

    match children.len() {
        0 => Value::SExpr(children),
        1 => children.swap_remove(0),
        _ => {
            let operator = children.remove(0);
            apply(operator, children, env, ctx)
        }
    }
}

/// Evaluate a value (convenience wrapper).
pub fn eval_value(value: Value, env: &mut Environment, ctx: &EvalContext) -> Value {
    value.eval(env, ctx)
}
