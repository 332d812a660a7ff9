//! Library entrypoint for `bashlex`.
//!
//! The crate exposes the stateful core of a Bash tokenizer: lexical state
//! nesting, per-session context flags, and here-document marker handling.

pub mod lexer;
