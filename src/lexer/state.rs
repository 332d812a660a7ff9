//! Nested lexical state management.
//!
//! The grammar enters sub-states such as arithmetic expansion or command
//! substitution and later resumes exactly where it left off, to any depth:
//! `$(( 1 + $(echo 3) ))` nests a command substitution inside arithmetic.

use std::fmt;

use tracing::trace;

use crate::lexer::diagnostics::InvariantViolation;

/// Opaque lexer mode identifier.
///
/// The concrete set of states belongs to the grammar. `0` is the initial
/// top-level state and is never pushed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LexicalState(u32);

impl LexicalState {
    /// The top-level state a session starts in.
    pub const INITIAL: Self = Self(0);

    /// Creates a state identifier.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LexicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default number of saved states reserved up front.
pub const DEFAULT_STATE_STACK_CAPACITY: usize = 25;

/// Active lexer state plus the stack of states to resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateStack {
    current: LexicalState,
    saved: Vec<LexicalState>,
}

impl Default for StateStack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_STATE_STACK_CAPACITY)
    }
}

impl StateStack {
    /// Creates a stack in [`LexicalState::INITIAL`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stack reserving room for `capacity` saved states.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current: LexicalState::INITIAL,
            saved: Vec::with_capacity(capacity),
        }
    }

    /// Returns the active state.
    pub fn current(&self) -> LexicalState {
        self.current
    }

    /// Returns the number of saved states.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Returns `true` when no state is saved.
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }

    /// Switches the active state without saving the previous one.
    pub fn begin(&mut self, state: LexicalState) {
        self.current = state;
    }

    /// Saves the active state and switches to `state`.
    pub fn enter(&mut self, state: LexicalState) {
        trace!(
            from = %self.current,
            to = %state,
            depth = self.saved.len() + 1,
            "enter lexer state"
        );
        self.saved.push(self.current);
        self.current = state;
    }

    /// Resumes the most recently saved state and returns it.
    pub fn leave_to_previous(&mut self) -> Result<LexicalState, InvariantViolation> {
        let previous = self
            .saved
            .pop()
            .ok_or(InvariantViolation::StateStackUnderflow {
                active: self.current,
            })?;
        trace!(from = %self.current, to = %previous, depth = self.saved.len(), "leave lexer state");
        self.current = previous;
        Ok(previous)
    }

    /// Unwinds saved states until `target` is active again.
    ///
    /// When `target` is already active, exactly one state is left. Otherwise
    /// states are left until `target` becomes active; nothing happens when
    /// `target` is not saved at all.
    pub fn pop_states(&mut self, target: LexicalState) -> Result<(), InvariantViolation> {
        trace!(target = %target, depth = self.saved.len(), "pop lexer states");
        if self.current == target {
            self.leave_to_previous()?;
            return Ok(());
        }

        while self.saved.contains(&target) {
            if self.leave_to_previous()? == target {
                break;
            }
        }

        Ok(())
    }

    /// Returns `true` when `state` is saved at any depth.
    ///
    /// [`LexicalState::INITIAL`] also counts as present while nothing is
    /// saved. The active state itself is not consulted.
    pub fn is_in_state(&self, state: LexicalState) -> bool {
        (state == LexicalState::INITIAL && self.saved.is_empty()) || self.saved.contains(&state)
    }
}
