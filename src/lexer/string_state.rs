//! Double-quoted string nesting across command substitutions.
//!
//! Inside `"a $(echo "b") c"` the inner quotes open a new string rather than
//! closing the outer one. Each subshell gets its own frame counting the
//! strings opened inside it.

use crate::lexer::diagnostics::InvariantViolation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SubshellFrame {
    open_strings: u32,
}

/// String and subshell nesting for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringNesting {
    top_level: SubshellFrame,
    subshells: Vec<SubshellFrame>,
}

impl StringNesting {
    /// Creates nesting state with no open strings or subshells.
    pub fn new() -> Self {
        Self::default()
    }

    fn innermost(&self) -> &SubshellFrame {
        self.subshells.last().unwrap_or(&self.top_level)
    }

    fn innermost_mut(&mut self) -> &mut SubshellFrame {
        match self.subshells.last_mut() {
            Some(frame) => frame,
            None => &mut self.top_level,
        }
    }

    /// Opens a `$( ... )` or backquote subshell.
    pub fn enter_subshell(&mut self) {
        self.subshells.push(SubshellFrame::default());
    }

    /// Closes the innermost subshell along with any strings left open in it.
    pub fn leave_subshell(&mut self) -> Result<(), InvariantViolation> {
        self.subshells
            .pop()
            .map(|_| ())
            .ok_or(InvariantViolation::SubshellUnderflow)
    }

    /// Opens a double-quoted string in the innermost subshell.
    pub fn enter_string(&mut self) {
        let frame = self.innermost_mut();
        frame.open_strings = frame.open_strings.saturating_add(1);
    }

    /// Closes a double-quoted string in the innermost subshell.
    pub fn leave_string(&mut self) -> Result<(), InvariantViolation> {
        let frame = self.innermost_mut();
        frame.open_strings = frame
            .open_strings
            .checked_sub(1)
            .ok_or(InvariantViolation::StringNestingUnderflow)?;
        Ok(())
    }

    /// Returns `true` inside at least one subshell.
    pub fn is_in_subshell(&self) -> bool {
        !self.subshells.is_empty()
    }

    /// Returns `true` when the innermost subshell has an open string.
    pub fn is_in_substring(&self) -> bool {
        self.is_in_subshell() && self.innermost().open_strings > 0
    }

    /// Returns `true` when a string opened now would nest in a subshell.
    pub fn is_substring_allowed(&self) -> bool {
        self.is_in_subshell() && self.innermost().open_strings == 0
    }

    /// Returns `true` when any string is open in the innermost frame.
    pub fn is_in_string(&self) -> bool {
        self.innermost().open_strings > 0
    }
}
