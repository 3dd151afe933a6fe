//! Evaluation context configuration

use std::fmt;
use std::str::FromStr;

/// How the operator of an s-expression is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dispatch {
    /// Symbols are looked up in the environment and the operator must
    /// evaluate to a function value.
    #[default]
    Environment,

    /// Symbols evaluate to themselves and the operator symbol is matched by
    /// name against the fixed builtin table.
    Symbolic,
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatch::Environment => write!(f, "environment"),
            Dispatch::Symbolic => write!(f, "symbolic"),
        }
    }
}

impl FromStr for Dispatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "environment" | "env" => Ok(Dispatch::Environment),
            "symbolic" | "sym" => Ok(Dispatch::Symbolic),
            other => Err(format!(
                "unknown dispatch policy `{}` (expected `environment` or `symbolic`)",
                other
            )),
        }
    }
}

/// Configuration for evaluation.
///
/// This is passed through all evaluation calls, builtins included.
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    /// Operator resolution policy
    pub dispatch: Dispatch,
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with an explicit dispatch policy.
    pub fn with_dispatch(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }
}
