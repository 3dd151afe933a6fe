//! REPL loop tests driven by a scripted line reader

use std::collections::VecDeque;

use moth::repl::{self, LineReader, ReplError, Session};
use moth::{Dispatch, ReplConfig};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct Script {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    history: Vec<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl LineReader for Script {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReplError> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}

fn run(config: &ReplConfig, lines: &[&str]) -> (String, Script) {
    let mut script = Script::new(lines);
    let mut out = Vec::new();
    repl::run(config, &mut script, &mut out).expect("repl failed");
    (String::from_utf8(out).expect("utf8"), script)
}

#[test]
fn test_repl_prints_one_result_per_line() {
    let config = ReplConfig::new().with_banner(false);
    let (out, _) = run(
        &config,
        &["+ 1 2", "(head {})", "def {x} 5", "* x x", "foo"],
    );
    assert_eq!(
        out,
        "3\nError: function 'head' passed {}\n()\n25\nError: unbound symbol 'foo'\n"
    );
}

#[test]
fn test_repl_banner_and_prompt() {
    let config = ReplConfig::new().with_prompt("> ");
    let (out, script) = run(&config, &["1"]);
    assert!(out.starts_with(&format!("Moth v{}\n", moth::VERSION)));
    assert!(out.ends_with("\n1\n"));
    // One prompt per line, plus the one that hit end of input.
    assert_eq!(script.prompts, vec!["> ", "> "]);
}

#[test]
fn test_repl_skips_blank_lines() {
    let config = ReplConfig::new().with_banner(false);
    let (out, script) = run(&config, &["", "   ", "5"]);
    assert_eq!(out, "5\n");
    assert_eq!(script.history, vec!["5"]);
}

#[test]
fn test_repl_reports_parse_errors_and_continues() {
    let config = ReplConfig::new().with_banner(false);
    let (out, script) = run(&config, &["(+ 1", "(+ 1 1)"]);
    assert_eq!(
        out,
        "<stdin>:1:5: error: expected ')' before end of input\n2\n"
    );
    assert_eq!(script.history, vec!["(+ 1", "(+ 1 1)"]);
}

#[test]
fn test_repl_honours_dispatch() {
    let config = ReplConfig::new()
        .with_banner(false)
        .with_dispatch(Dispatch::Symbolic);
    let (out, _) = run(&config, &["(frob 1)", "(- 5)"]);
    assert_eq!(out, "Error: unknown function 'frob'\n-5\n");
}

#[test]
fn test_session_keeps_definitions_between_lines() {
    let mut session = Session::default();
    session.eval_line("def {a} {1 2}");
    session.eval_line("def {b} (join a a)");
    assert_eq!(session.eval_line("b"), "{1 2 1 2}");
    assert_eq!(session.eval_line("eval (join {+} b)"), "6");
}

#[test]
fn test_config_defaults() {
    let config = ReplConfig::default();
    assert_eq!(config.prompt, "moth> ");
    assert!(config.banner);
    assert_eq!(config.history_file, None);
    assert_eq!(config.dispatch, Dispatch::Environment);
}
