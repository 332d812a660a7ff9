//! Tokenizer configuration.

use crate::lexer::state::DEFAULT_STATE_STACK_CAPACITY;

/// Bash language level requested for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShellVersion {
    /// Bash 3 lexical rules.
    #[default]
    Bash3,
    /// Bash 4 lexical rules, adding features such as `;&` and `;;&` case
    /// terminators.
    Bash4,
}

/// Options fixed when a tokenizer session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Language level gating version-specific keywords and operators.
    pub version: ShellVersion,
    /// Saved-state slots reserved up front; the stack grows past this.
    pub state_stack_capacity: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            version: ShellVersion::Bash3,
            state_stack_capacity: DEFAULT_STATE_STACK_CAPACITY,
        }
    }
}

impl LexerOptions {
    /// Returns default options for `version`.
    pub fn for_version(version: ShellVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }
}
