//! Moth command-line entry point

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::DefaultEditor;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use moth::repl::{self, Session};
use moth::{Dispatch, ReplConfig};

/// A minimal Lisp with s-expressions and q-expressions.
#[derive(Parser, Debug)]
#[command(name = "moth", version, about)]
struct Cli {
    /// Evaluate an expression, print the result and exit
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Operator resolution policy: `environment` or `symbolic`
    #[arg(long, default_value_t = Dispatch::Environment)]
    dispatch: Dispatch,

    /// Prompt shown before each line
    #[arg(long, default_value = "moth> ")]
    prompt: String,

    /// Load and save line history from this file
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,

    /// Do not print the startup banner
    #[arg(long)]
    no_banner: bool,
}

impl Cli {
    fn config(&self) -> ReplConfig {
        let mut config = ReplConfig::new()
            .with_prompt(self.prompt.clone())
            .with_banner(!self.no_banner)
            .with_dispatch(self.dispatch);
        if let Some(path) = &self.history {
            config = config.with_history_file(path.clone());
        }
        config
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.config();

    if let Some(source) = &cli.eval {
        let mut session = Session::from_config(&config);
        println!("{}", session.eval_line(source));
        return Ok(());
    }

    let mut editor = DefaultEditor::new().context("failed to initialise line editor")?;
    if let Some(path) = &config.history_file {
        // A missing history file is normal on first run.
        if let Err(err) = editor.load_history(path) {
            tracing::debug!(path = %path.display(), %err, "no history loaded");
        }
    }

    let mut stdout = io::stdout();
    repl::run(&config, &mut editor, &mut stdout).context("REPL failed")?;

    if let Some(path) = &config.history_file {
        editor
            .save_history(path)
            .with_context(|| format!("failed to save history to {}", path.display()))?;
    }
    Ok(())
}
