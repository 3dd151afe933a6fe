//! Binding builtin: `def`

use crate::error::type_name;
use crate::{Environment, EvalContext, EvalError, Result, Value};

/// `(def {a b} 1 2)` binds copies of the values to the quoted names.
pub fn def(env: &mut Environment, _ctx: &EvalContext, mut args: Vec<Value>) -> Result<Value> {
    if args.is_empty() {
        return Err(EvalError::ArityMismatch {
            name: "def",
            expected: "at least 1 argument",
            got: 0,
        });
    }
    let names = super::expect_qexpr("def", args.remove(0))?;

    let names = names
        .into_iter()
        .map(|name| match name {
            Value::Symbol(s) => Ok(s),
            other => Err(EvalError::TypeMismatch {
                name: "def",
                expected: "symbol",
                got: type_name(&other),
            }),
        })
        .collect::<Result<Vec<String>>>()?;

    if names.len() != args.len() {
        return Err(EvalError::DefineCountMismatch {
            names: names.len(),
            values: args.len(),
        });
    }

    for (name, value) in names.iter().zip(&args) {
        env.put(name, value);
    }
    Ok(Value::sexpr())
}
