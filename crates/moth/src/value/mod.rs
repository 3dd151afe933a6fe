//! Value representation for runtime values

mod callable;
mod display;
mod impls;

pub use callable::{Builtin, BuiltinFnPtr};

/// Runtime value representation for the Moth interpreter.
///
/// Every container exclusively owns its children: there is no sharing and
/// no cycles, so dropping a value releases the whole tree beneath it and
/// `Clone` is always a deep structural copy.
#[derive(Clone)]
pub enum Value {
    /// Signed integer
    Number(i64),

    /// Error message; poisons any s-expression that contains it
    Error(String),

    /// Name resolved against an environment during evaluation
    Symbol(String),

    /// S-expression, reduced by evaluation
    SExpr(Vec<Value>),

    /// Q-expression, literal data until forced with `eval`
    QExpr(Vec<Value>),

    /// Built-in native function
    Function(Builtin),
}
