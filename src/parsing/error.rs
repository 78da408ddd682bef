//! Misuse errors
//!
//! A rejected input is never an error: it is a failed [`ParseResult`](super::ParseResult).
//! The variants here describe broken grammar definitions and abort construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrammarError {
    /// A builder referenced a rule that was never registered.
    #[error("invalid rule: `{name}` (referenced by `{referenced_by}`)")]
    UnknownRule { name: String, referenced_by: String },

    #[error("start rule `{0}` is not registered")]
    UnknownStart(String),

    #[error("rule `{0}` is declared more than once")]
    DuplicateRule(String),

    #[error("seq expects at least one parser and a combine function")]
    EmptySequence,

    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
