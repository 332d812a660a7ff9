//! Bash tokenizer core.
//!
//! Rule matching itself is delegated to a [`RawMatcher`]. This module owns
//! everything that matcher needs to remember between lexemes: nested lexer
//! states, context flags, pending here-documents, and string nesting.

pub mod context;
pub mod diagnostics;
pub mod heredoc;
pub mod marker;
pub mod options;
pub mod state;
pub mod string_state;
pub mod token;

use std::io::{BufReader, Read};

use tracing::debug;

pub use context::LexerContext;
pub use diagnostics::{DiagnosticCode, FatalLexError, InvariantViolation, MatchError};
pub use heredoc::{HeredocQueue, PendingHeredoc};
pub use marker::{
    clean_marker, end_marker_offset, is_evaluating_marker, marker_offsets, start_marker_offset,
    wrap_marker,
};
pub use options::{LexerOptions, ShellVersion};
pub use state::{DEFAULT_STATE_STACK_CAPACITY, LexicalState, StateStack};
pub use string_state::StringNesting;
pub use token::LexStep;

/// Mutable lexing state owned by one tokenizer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexSession {
    /// Context flags and counters.
    pub context: LexerContext,
    /// Active lexer state and saved states.
    pub states: StateStack,
    /// Here-documents awaiting their bodies.
    pub heredocs: HeredocQueue,
    /// String nesting inside command substitutions.
    pub strings: StringNesting,
}

impl LexSession {
    /// Creates a fresh session state from `options`.
    pub fn new(options: LexerOptions) -> Self {
        Self {
            context: LexerContext::new(options.version),
            states: StateStack::with_capacity(options.state_stack_capacity),
            heredocs: HeredocQueue::new(),
            strings: StringNesting::new(),
        }
    }
}

/// Rule-driven scanner that recognizes raw lexemes.
///
/// Implementations read and update the session state from their rule
/// actions, typically by entering and leaving lexer states.
pub trait RawMatcher {
    /// Token type produced for the grammar.
    type Token;

    /// Matches the next lexeme; `Ok(None)` signals end of input.
    fn advance(&mut self, session: &mut LexSession) -> Result<Option<Self::Token>, MatchError>;

    /// Returns the complete input buffer being matched.
    fn buffer(&self) -> &str;
}

/// Drives a [`RawMatcher`] and owns the session state it works against.
#[derive(Debug)]
pub struct Tokenizer<M> {
    matcher: M,
    session: LexSession,
}

impl<M: RawMatcher> Tokenizer<M> {
    /// Creates a tokenizer session over `matcher`.
    pub fn new(matcher: M, options: LexerOptions) -> Self {
        Self {
            matcher,
            session: LexSession::new(options),
        }
    }

    /// Produces the next token.
    ///
    /// Matcher failures are fatal and carry the whole input buffer.
    pub fn next_token(&mut self) -> Result<LexStep<M::Token>, FatalLexError> {
        match self.matcher.advance(&mut self.session) {
            Ok(Some(token)) => Ok(LexStep::Token(token)),
            Ok(None) => Ok(LexStep::EndOfInput),
            Err(source) => {
                let buffer = self.matcher.buffer();
                debug!(
                    buffer_len = buffer.len(),
                    state = %self.session.states.current(),
                    error = %source,
                    "lexing failed"
                );
                Err(FatalLexError::Scan {
                    buffer: buffer.to_string(),
                    source,
                })
            }
        }
    }

    /// Tokenizes until end of input.
    pub fn tokenize_all(&mut self) -> Result<Vec<M::Token>, FatalLexError> {
        let mut tokens = Vec::new();
        while let LexStep::Token(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns `true` when Bash 4 lexical features are enabled.
    pub fn is_bash4(&self) -> bool {
        self.session.context.is_bash4()
    }

    /// Returns the session state.
    pub fn session(&self) -> &LexSession {
        &self.session
    }

    /// Returns the session state for grammar actions.
    pub fn session_mut(&mut self) -> &mut LexSession {
        &mut self.session
    }

    /// Returns the context flags.
    pub fn context(&self) -> &LexerContext {
        &self.session.context
    }

    /// Returns the context flags for grammar actions.
    pub fn context_mut(&mut self) -> &mut LexerContext {
        &mut self.session.context
    }

    /// Returns the lexer state stack.
    pub fn states(&self) -> &StateStack {
        &self.session.states
    }

    /// Returns the lexer state stack for grammar actions.
    pub fn states_mut(&mut self) -> &mut StateStack {
        &mut self.session.states
    }

    /// Returns the raw matcher.
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Splits the tokenizer into its matcher and session state.
    pub fn into_parts(self) -> (M, LexSession) {
        (self.matcher, self.session)
    }
}

/// Reads a whole script from `reader` for a matcher buffer.
pub fn read_script<R: Read>(reader: R) -> Result<String, FatalLexError> {
    let mut buffer = String::new();
    BufReader::new(reader).read_to_string(&mut buffer)?;
    Ok(buffer)
}
