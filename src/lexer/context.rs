//! Per-session lexical context flags.

use tracing::trace;

use crate::lexer::diagnostics::InvariantViolation;
use crate::lexer::options::ShellVersion;

/// Independent flags and counters describing the current lexical situation.
///
/// Grammar actions set and clear these at lexical boundaries; the context
/// only enforces its own invariants. One context exists per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerContext {
    in_here_string: bool,
    in_case_body: bool,
    empty_conditional_command: bool,
    param_expansion_hash: bool,
    param_expansion_word: bool,
    param_expansion_other: bool,
    open_parenthesis_count: u32,
    bash4: bool,
}

impl LexerContext {
    /// Creates a cleared context for `version`.
    pub fn new(version: ShellVersion) -> Self {
        Self {
            bash4: version == ShellVersion::Bash4,
            ..Self::default()
        }
    }

    /// Returns `true` when Bash 4 lexical features are enabled.
    pub fn is_bash4(&self) -> bool {
        self.bash4
    }

    /// Returns `true` while scanning `<<<` here-string content.
    pub fn is_in_here_string(&self) -> bool {
        self.in_here_string
    }

    /// Marks the start of here-string content.
    ///
    /// Entering twice without leaving is a grammar bug.
    pub fn enter_here_string(&mut self) -> Result<(), InvariantViolation> {
        if self.in_here_string {
            return Err(InvariantViolation::HereStringReentry);
        }
        trace!("enter here-string content");
        self.in_here_string = true;
        Ok(())
    }

    /// Marks the end of here-string content.
    pub fn leave_here_string(&mut self) {
        trace!("leave here-string content");
        self.in_here_string = false;
    }

    /// Returns `true` inside a `case ... esac` body, where `in` is a keyword.
    pub fn is_in_case_body(&self) -> bool {
        self.in_case_body
    }

    /// Sets whether a `case` body is being scanned.
    pub fn set_in_case_body(&mut self, value: bool) {
        self.in_case_body = value;
    }

    /// Returns `true` for an empty `[[ ]]` / `[ ]` conditional command.
    pub fn is_empty_conditional_command(&self) -> bool {
        self.empty_conditional_command
    }

    /// Sets whether the current conditional command is empty.
    pub fn set_empty_conditional_command(&mut self, value: bool) {
        self.empty_conditional_command = value;
    }

    /// `${#name}` length sub-mode.
    pub fn is_param_expansion_hash(&self) -> bool {
        self.param_expansion_hash
    }

    /// Sets the `${#name}` length sub-mode.
    pub fn set_param_expansion_hash(&mut self, value: bool) {
        self.param_expansion_hash = value;
    }

    /// `${name:-word}` style word operator sub-mode.
    pub fn is_param_expansion_word(&self) -> bool {
        self.param_expansion_word
    }

    /// Sets the word operator sub-mode.
    pub fn set_param_expansion_word(&mut self, value: bool) {
        self.param_expansion_word = value;
    }

    /// Any other `${...}` operator sub-mode.
    pub fn is_param_expansion_other(&self) -> bool {
        self.param_expansion_other
    }

    /// Sets the other-operator sub-mode.
    pub fn set_param_expansion_other(&mut self, value: bool) {
        self.param_expansion_other = value;
    }

    /// Returns the number of currently open parentheses.
    pub fn open_parenthesis_count(&self) -> u32 {
        self.open_parenthesis_count
    }

    /// Counts one opening parenthesis.
    pub fn inc_open_parenthesis(&mut self) {
        self.open_parenthesis_count = self.open_parenthesis_count.saturating_add(1);
    }

    /// Counts one closing parenthesis; the count never goes below zero.
    pub fn dec_open_parenthesis(&mut self) -> Result<(), InvariantViolation> {
        self.open_parenthesis_count = self
            .open_parenthesis_count
            .checked_sub(1)
            .ok_or(InvariantViolation::ParenthesisUnderflow)?;
        Ok(())
    }
}
