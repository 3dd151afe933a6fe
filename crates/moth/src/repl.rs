//! Interactive read-eval-print loop
//!
//! The loop itself only depends on [`LineReader`], so it can be driven by
//! `rustyline` in the binary and by a scripted reader in tests.

use std::io::Write;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::config::ReplConfig;
use crate::context::Dispatch;
use crate::eval::Evaluate;
use crate::reader::read;
use crate::syntax::{self, ParseError};
use crate::{Environment, EvalContext, Value};

/// Failure of the interactive front end itself (not of evaluation).
#[derive(Error, Debug)]
pub enum ReplError {
    /// The line editor failed
    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of input lines.
pub trait LineReader {
    /// Show `prompt` and block for one line. `None` ends the session.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReplError>;

    /// Record a line in the history. Failures are not fatal.
    fn add_history(&mut self, line: &str);
}

impl LineReader for rustyline::DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReplError> {
        match self.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(err) = self.add_history_entry(line) {
            tracing::warn!(%err, "could not record history entry");
        }
    }
}

/// Evaluation state that outlives individual lines.
#[derive(Debug)]
pub struct Session {
    env: Environment,
    ctx: EvalContext,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Dispatch::default())
    }
}

impl Session {
    /// Create a session with the prelude loaded.
    pub fn new(dispatch: Dispatch) -> Self {
        Self {
            env: Environment::with_prelude(),
            ctx: EvalContext::with_dispatch(dispatch),
        }
    }

    /// Create a session from a configuration.
    pub fn from_config(config: &ReplConfig) -> Self {
        Self::new(config.dispatch)
    }

    /// Parse, read and evaluate one input.
    pub fn eval_source(&mut self, source: &str) -> Result<Value, ParseError> {
        let tree = syntax::parse(source)?;
        Ok(read(&tree).eval(&mut self.env, &self.ctx))
    }

    /// Evaluate one input and render the outcome for display.
    pub fn eval_line(&mut self, line: &str) -> String {
        match self.eval_source(line) {
            Ok(value) => value.to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// The session's environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

/// Run the loop until the reader runs out of lines.
pub fn run<R, W>(config: &ReplConfig, reader: &mut R, out: &mut W) -> Result<(), ReplError>
where
    R: LineReader,
    W: Write,
{
    let mut session = Session::from_config(config);
    tracing::debug!(dispatch = %config.dispatch, "starting session");

    if config.banner {
        writeln!(out, "Moth v{}", crate::VERSION)?;
        writeln!(out, "Press Ctrl-C to exit")?;
        writeln!(out)?;
    }

    while let Some(line) = reader.read_line(&config.prompt)? {
        if line.trim().is_empty() {
            continue;
        }
        reader.add_history(&line);
        writeln!(out, "{}", session.eval_line(&line))?;
    }
    Ok(())
}
