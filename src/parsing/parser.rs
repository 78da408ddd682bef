//! The parser abstraction
//!
//! A [`Parser`] owns a parse function behind an `Arc`. Cloning a parser shares the
//! function; nothing about a parser changes after construction, which is what lets one
//! built grammar be run concurrently from several threads.

use std::fmt;
use std::sync::Arc;

use super::result::ParseResult;

/// Signature every parse function has.
pub(crate) type ParseFn = dyn for<'a> Fn(&'a str) -> ParseResult<'a> + Send + Sync;

/// A named function from input text to a [`ParseResult`].
///
/// Parsers are composed, never subclassed: the combinator methods and the primitives in
/// [`primitives`](super::primitives) return new parsers closing over their operands.
#[derive(Clone)]
pub struct Parser {
    name: Arc<str>,
    parse: Arc<ParseFn>,
}

impl Parser {
    /// Wrap a parse function.
    ///
    /// The function must be referentially transparent and must return
    /// [`ParseResult::failure`] with its own input whenever it fails.
    pub fn new<F>(name: impl Into<Arc<str>>, parse: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> ParseResult<'a> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            parse: Arc::new(parse),
        }
    }

    /// Run the parser against `input`. Never panics on malformed or exhausted input.
    pub fn run<'a>(&self, input: &'a str) -> ParseResult<'a> {
        (self.parse)(input)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The same parser under a different name.
    pub fn with_name(self, name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            parse: self.parse,
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Parser").field(&self.name).finish()
    }
}
