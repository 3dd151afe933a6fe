//! Native function table
//!
//! Every builtin takes ownership of its argument list. Failures are reported
//! as [`EvalError`](crate::EvalError)s and turned into error values by
//! [`Builtin::call`].

pub mod arith;
pub mod def;
pub mod list;

use crate::value::{Builtin, Value};
use crate::{EvalError, Result};

/// All builtins, in prelude order.
pub const BUILTINS: &[Builtin] = &[
    Builtin::new("+", arith::add),
    Builtin::new("-", arith::sub),
    Builtin::new("*", arith::mul),
    Builtin::new("/", arith::div),
    Builtin::new("list", list::list),
    Builtin::new("head", list::head),
    Builtin::new("tail", list::tail),
    Builtin::new("join", list::join),
    Builtin::new("eval", list::eval),
    Builtin::new("def", def::def),
];

/// Operators reachable by name under symbolic dispatch.
///
/// Only arithmetic: symbols never resolve in that mode, so list and
/// binding builtins would have nothing to work with.
pub const OPERATORS: &[Builtin] = &[
    Builtin::new("+", arith::add),
    Builtin::new("-", arith::sub),
    Builtin::new("*", arith::mul),
    Builtin::new("/", arith::div),
];

/// Find a builtin by name in the fixed table.
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|b| b.name == name).copied()
}

/// Find an operator by name for symbolic dispatch.
pub fn lookup_operator(name: &str) -> Option<Builtin> {
    OPERATORS.iter().find(|b| b.name == name).copied()
}

/// Require exactly one argument and return it.
pub(crate) fn single_arg(name: &'static str, mut args: Vec<Value>) -> Result<Value> {
    if args.len() != 1 {
        return Err(EvalError::ArityMismatch {
            name,
            expected: "1 argument",
            got: args.len(),
        });
    }
    Ok(args.swap_remove(0))
}

/// Unwrap a q-expression argument or report a type mismatch.
pub(crate) fn expect_qexpr(name: &'static str, arg: Value) -> Result<Vec<Value>> {
    match arg {
        Value::QExpr(items) => Ok(items),
        other => Err(EvalError::TypeMismatch {
            name,
            expected: "q-expression",
            got: crate::error::type_name(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(lookup("head").map(|b| b.name), Some("head"));
        assert!(lookup("cons").is_none());
    }

    #[test]
    fn test_operators_are_arithmetic_builtins() {
        let names: Vec<_> = OPERATORS.iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["+", "-", "*", "/"]);
        assert!(OPERATORS.iter().all(|op| lookup(op.name).is_some()));
        assert!(lookup_operator("def").is_none());
        assert!(lookup_operator("head").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = BUILTINS.iter().map(|b| b.name).collect();
        assert_eq!(names.len(), BUILTINS.len());
    }

    #[test]
    fn test_single_arg_arity() {
        let err = single_arg("tail", vec![]).unwrap_err();
        assert_eq!(
            err,
            EvalError::ArityMismatch {
                name: "tail",
                expected: "1 argument",
                got: 0
            }
        );
    }
}
