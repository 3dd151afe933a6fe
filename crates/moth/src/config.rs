//! Session configuration

use std::path::PathBuf;

use crate::context::Dispatch;

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt shown before each line
    pub prompt: String,

    /// Whether to print the version banner on start
    pub banner: bool,

    /// File to load history from and save it to, if any
    pub history_file: Option<PathBuf>,

    /// Operator resolution policy
    pub dispatch: Dispatch,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "moth> ".to_string(),
            banner: true,
            history_file: None,
            dispatch: Dispatch::default(),
        }
    }
}

impl ReplConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Enable or disable the banner.
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Persist history to `path`.
    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = Some(path.into());
        self
    }

    /// Choose the dispatch policy.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }
}
