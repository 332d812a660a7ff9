//! Error contracts for the tokenizer core.
//!
//! Every error here is fatal for the lexing session. Contract violations
//! point at a grammar action bug; scan failures carry the whole buffer so the
//! offending input can be located.

use thiserror::Error;

use crate::lexer::state::LexicalState;

/// Stable diagnostic codes for fatal lexer errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// The raw matcher found no rule for the input at the cursor.
    NoMatch,
    /// A grammar action broke a state-keeping contract.
    InternalInvariant,
    /// Reading the input stream failed.
    ReadFailure,
}

/// Broken contract between grammar actions and the lexer state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// `leave_to_previous` was called without a matching `enter`.
    #[error("lexer state stack is empty (active state {active})")]
    StateStackUnderflow { active: LexicalState },
    /// Here-string content was entered while already inside one.
    #[error("here-string content entered while already inside a here-string")]
    HereStringReentry,
    /// A closing parenthesis was counted with none open.
    #[error("open parenthesis count would become negative")]
    ParenthesisUnderflow,
    /// A here-document end marker was removed out of order.
    #[error("here-document marker `{found}` is not expected (next is `{expected}`)")]
    UnexpectedHeredocMarker { expected: String, found: String },
    /// A here-document end marker was removed with none pending.
    #[error("no here-document marker is pending")]
    NoPendingHeredoc,
    /// A string was closed with none open.
    #[error("no open string to leave")]
    StringNestingUnderflow,
    /// A subshell was closed with none open.
    #[error("no open subshell to leave")]
    SubshellUnderflow,
}

/// Failure reported by a raw matcher while advancing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No rule matched the input at `offset`.
    #[error("no lexer rule matches input at byte {offset}")]
    NoMatch { offset: usize },
    /// A grammar action broke a lexer state contract.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Fatal tokenizer error.
#[derive(Debug, Error)]
pub enum FatalLexError {
    /// Matching failed; `buffer` is the complete input of the session.
    #[error("error lexing shell script:\n{buffer}")]
    Scan {
        buffer: String,
        #[source]
        source: MatchError,
    },
    /// The input stream could not be read.
    #[error("failed to read shell script: {0}")]
    Read(#[from] std::io::Error),
}

impl FatalLexError {
    /// Returns the stable diagnostic code of this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            Self::Scan {
                source: MatchError::NoMatch { .. },
                ..
            } => DiagnosticCode::NoMatch,
            Self::Scan {
                source: MatchError::Invariant(_),
                ..
            } => DiagnosticCode::InternalInvariant,
            Self::Read(_) => DiagnosticCode::ReadFailure,
        }
    }

    /// Returns the buffered input attached to a scan failure.
    pub fn buffer(&self) -> Option<&str> {
        match self {
            Self::Scan { buffer, .. } => Some(buffer),
            Self::Read(_) => None,
        }
    }
}
