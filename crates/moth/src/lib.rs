//! # Moth
//!
//! A minimal Lisp with s-expressions, q-expressions and native builtins.
//!
//! ## Architecture
//!
//! ```text
//! Source → [syntax] → Node tree → [reader] → Value → [eval] → Value
//! ```
//!
//! - **Syntax**: lex and parse a line into a generic tree of tagged nodes
//! - **Reader**: turn that tree into an owned [`Value`] tree
//! - **Evaluator**: reduce s-expressions under an [`Environment`],
//!   dispatching to [`builtins`]
//! - **REPL**: line reading, history and printing
//!
//! Failures during evaluation are values ([`Value::Error`]), not panics:
//! they short-circuit the enclosing expression and are printed as results.
//!
//! ```
//! use moth::repl::Session;
//!
//! let mut session = Session::default();
//! assert_eq!(session.eval_line("(+ 1 (* 7 5) 3)"), "38");
//! assert_eq!(session.eval_line("(head (list 1 2 3))"), "1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builtins;
pub mod config;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod reader;
pub mod repl;
pub mod syntax;
pub mod value;

// Re-export main types
pub use config::ReplConfig;
pub use context::{Dispatch, EvalContext};
pub use environment::Environment;
pub use error::{EvalError, Result};
pub use eval::{eval_sexpr, eval_value, Evaluate};
pub use reader::read;
pub use value::{Builtin, BuiltinFnPtr, Value};

/// Moth version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
