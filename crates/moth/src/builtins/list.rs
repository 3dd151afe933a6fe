//! List builtins: `list head tail join eval`

use super::{expect_qexpr, single_arg};
use crate::eval::Evaluate;
use crate::{Environment, EvalContext, EvalError, Result, Value};

/// `(list a b ...)` → `{a b ...}`
pub fn list(_env: &mut Environment, _ctx: &EvalContext, args: Vec<Value>) -> Result<Value> {
    Ok(Value::QExpr(args))
}

/// `(head {a b ...})` → `a`
pub fn head(_env: &mut Environment, _ctx: &EvalContext, args: Vec<Value>) -> Result<Value> {
    let items = non_empty("head", args)?;
    Ok(Value::QExpr(items).consume(0))
}

/// `(tail {a b ...})` → `{b ...}`
pub fn tail(_env: &mut Environment, _ctx: &EvalContext, args: Vec<Value>) -> Result<Value> {
    let mut qexpr = Value::QExpr(non_empty("tail", args)?);
    qexpr.take_at(0);
    Ok(qexpr)
}

/// `(join {a} {b c} ...)` → `{a b c ...}`
pub fn join(_env: &mut Environment, _ctx: &EvalContext, args: Vec<Value>) -> Result<Value> {
    let mut joined = Vec::new();
    for arg in args {
        joined.extend(expect_qexpr("join", arg)?);
    }
    Ok(Value::QExpr(joined))
}

/// `(eval {f a ...})` evaluates the quoted expression.
pub fn eval(env: &mut Environment, ctx: &EvalContext, args: Vec<Value>) -> Result<Value> {
    let items = expect_qexpr("eval", single_arg("eval", args)?)?;
    Ok(Value::SExpr(items).eval(env, ctx))
}

fn non_empty(name: &'static str, args: Vec<Value>) -> Result<Vec<Value>> {
    let items = expect_qexpr(name, single_arg(name, args)?)?;
    if items.is_empty() {
        return Err(EvalError::EmptyArgument { name });
    }
    Ok(items)
}
