//! Step results handed to the grammar layer.

/// One step produced by [`crate::lexer::Tokenizer::next_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexStep<T> {
    /// A token was produced.
    Token(T),
    /// End of input was reached.
    EndOfInput,
}

impl<T> LexStep<T> {
    /// Returns the token, if this step carries one.
    pub fn into_token(self) -> Option<T> {
        match self {
            Self::Token(token) => Some(token),
            Self::EndOfInput => None,
        }
    }

    /// Returns `true` for [`LexStep::EndOfInput`].
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}
