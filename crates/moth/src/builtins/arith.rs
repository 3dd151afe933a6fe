//! Arithmetic builtins: `+ - * /`

use crate::error::type_name;
use crate::{Environment, EvalContext, EvalError, Result, Value};

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl ArithOp {
    /// The operator's symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }

    /// Apply to two operands with overflow and zero checks.
    pub fn apply(self, x: i64, y: i64) -> Result<i64> {
        let result = match self {
            ArithOp::Add => x.checked_add(y),
            ArithOp::Sub => x.checked_sub(y),
            ArithOp::Mul => x.checked_mul(y),
            ArithOp::Div => {
                if y == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                x.checked_div(y)
            }
        };
        result.ok_or(EvalError::IntegerOverflow { op: self.symbol() })
    }
}

/// Fold `args` left to right with `op`.
///
/// Every argument is type-checked before any arithmetic happens. A lone
/// argument to `-` is negated.
pub fn fold(op: ArithOp, args: Vec<Value>) -> Result<Value> {
    let nums = args
        .into_iter()
        .map(|arg| match arg {
            Value::Number(n) => Ok(n),
            other => Err(EvalError::NonNumber {
                got: type_name(&other),
            }),
        })
        .collect::<Result<Vec<i64>>>()?;

    let (&first, rest) = nums.split_first().ok_or(EvalError::ArityMismatch {
        name: op.symbol(),
        expected: "at least 1 argument",
        got: 0,
    })?;

    if op == ArithOp::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or(EvalError::IntegerOverflow { op: op.symbol() });
    }

    rest.iter()
        .try_fold(first, |acc, &y| op.apply(acc, y))
        .map(Value::Number)
}

/// `(+ a b ...)`
pub fn add(_env: &mut Environment, _ctx: &EvalContext, args: Vec<Value>) -> Result<Value> {
    fold(ArithOp::Add, args)
}

/// `(- a b ...)`, or `(- a)` for negation
pub fn sub(_env: &mut Environment, _ctx: &EvalContext, args: Vec<Value>) -> Result<Value> {
    fold(ArithOp::Sub, args)
}

/// `(* a b ...)`
pub fn mul(_env: &mut Environment, _ctx: &EvalContext, args: Vec<Value>) -> Result<Value> {
    fold(ArithOp::Mul, args)
}

/// `(/ a b ...)`, truncating toward zero
pub fn div(_env: &mut Environment, _ctx: &EvalContext, args: Vec<Value>) -> Result<Value> {
    fold(ArithOp::Div, args)
}
