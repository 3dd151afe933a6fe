//! Standard prelude with built-in functions

use super::Environment;
use crate::builtins::BUILTINS;

impl Environment {
    /// Create an environment with every builtin bound to its name.
    pub fn with_prelude() -> Self {
        let mut env = Self::new();
        env.load_prelude();
        env
    }

    /// Load the standard prelude into this environment.
    pub fn load_prelude(&mut self) {
        for builtin in BUILTINS {
            self.define_builtin(*builtin);
        }
    }
}
