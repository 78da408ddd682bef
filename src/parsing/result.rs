//! Outcome of a single parse attempt

use serde::Serialize;

/// The result of running a [`Parser`](super::Parser) once.
///
/// On success `matched` holds the text the parser reports and `remaining` the unconsumed
/// suffix of its input. On failure `matched` is empty and `remaining` is the untouched
/// input, so the caller can backtrack by simply trying something else on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult<'a> {
    ok: bool,
    matched: String,
    remaining: &'a str,
}

impl<'a> ParseResult<'a> {
    /// A successful parse that consumed `matched` and left `remaining`.
    pub fn success(matched: impl Into<String>, remaining: &'a str) -> Self {
        Self {
            ok: true,
            matched: matched.into(),
            remaining,
        }
    }

    /// A failed parse. `input` must be the exact input the failing parser was given.
    pub fn failure(input: &'a str) -> Self {
        Self {
            ok: false,
            matched: String::new(),
            remaining: input,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn is_failure(&self) -> bool {
        !self.ok
    }

    pub fn matched(&self) -> &str {
        &self.matched
    }

    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    pub fn into_matched(self) -> String {
        self.matched
    }

    /// Number of bytes of `input` this result consumed.
    ///
    /// `input` must be the string the producing parser ran on; failures consume nothing.
    pub fn consumed(&self, input: &str) -> usize {
        input.len().saturating_sub(self.remaining.len())
    }
}
