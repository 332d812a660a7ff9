//! Pending here-document queue.
//!
//! Several here-documents may start on one line (`cat <<A <<B`); their
//! bodies follow in encounter order. The queue remembers each clean marker
//! until its terminating line is seen.

use std::collections::VecDeque;

use tracing::trace;

use crate::lexer::diagnostics::InvariantViolation;
use crate::lexer::marker::{clean_marker, is_evaluating_marker};

/// One here-document whose body has not been terminated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingHeredoc {
    /// Delimiter with quoting, escaping and tabs removed.
    pub marker: String,
    /// Whether the body undergoes expansion.
    pub evaluating: bool,
    /// Whether body lines may be indented with tabs (`<<-`).
    pub ignore_leading_tabs: bool,
}

/// Here-documents awaiting their bodies, in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeredocQueue {
    pending: VecDeque<PendingHeredoc>,
}

/// Returns line contents without trailing newline for marker matching.
fn line_for_match(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

impl HeredocQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no here-document is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns the number of pending here-documents.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns the here-document whose body is read next.
    pub fn front(&self) -> Option<&PendingHeredoc> {
        self.pending.front()
    }

    /// Queues the delimiter token `raw` of a `<<` or `<<-` redirection.
    pub fn push_marker(&mut self, raw: &str, ignore_leading_tabs: bool) {
        let entry = PendingHeredoc {
            marker: clean_marker(raw, ignore_leading_tabs).to_string(),
            evaluating: is_evaluating_marker(raw),
            ignore_leading_tabs,
        };
        trace!(marker = %entry.marker, evaluating = entry.evaluating, "queue here-document");
        self.pending.push_back(entry);
    }

    /// Returns `true` when `line` terminates the next here-document body.
    pub fn is_next_marker(&self, line: &str) -> bool {
        self.pending
            .front()
            .is_some_and(|entry| Self::matches(entry, line))
    }

    /// Returns `true` when the next body undergoes expansion.
    pub fn is_expecting_evaluating_heredoc(&self) -> bool {
        self.pending.front().is_some_and(|entry| entry.evaluating)
    }

    /// Returns `true` when the next body was introduced by `<<-`.
    pub fn is_ignoring_tabs(&self) -> bool {
        self.pending
            .front()
            .is_some_and(|entry| entry.ignore_leading_tabs)
    }

    /// Removes the next here-document once `line` terminated its body.
    pub fn pop_marker(&mut self, line: &str) -> Result<PendingHeredoc, InvariantViolation> {
        let entry = self
            .pending
            .front()
            .ok_or(InvariantViolation::NoPendingHeredoc)?;
        if !Self::matches(entry, line) {
            return Err(InvariantViolation::UnexpectedHeredocMarker {
                expected: entry.marker.clone(),
                found: line_for_match(line).to_string(),
            });
        }

        let entry = self
            .pending
            .pop_front()
            .ok_or(InvariantViolation::NoPendingHeredoc)?;
        trace!(marker = %entry.marker, remaining = self.pending.len(), "close here-document");
        Ok(entry)
    }

    fn matches(entry: &PendingHeredoc, line: &str) -> bool {
        let mut text = line_for_match(line);
        if entry.ignore_leading_tabs {
            text = text.trim_start_matches('\t');
        }
        text == entry.marker
    }
}
