//! Sequencing into caller-defined values
//!
//! [`seq`] is the one builder whose success value is not a [`ParseResult`]: it runs its
//! parsers in order and hands their matched texts to a combine function, whose return value
//! becomes the output. This is how a grammar produces typed values instead of raw text.

use std::fmt;
use std::sync::Arc;

use super::error::GrammarError;
use super::parser::Parser;
use super::result::ParseResult;

type CombineFn<T> = dyn Fn(Vec<String>) -> T + Send + Sync;

/// A sequence of parsers whose matches are combined into a `T`.
pub struct Seq<T> {
    parsers: Vec<Parser>,
    combine: Arc<CombineFn<T>>,
}

/// Build a [`Seq`] from at least one parser and a combine function.
///
/// ```rust,ignore
/// let pair = seq([many1(any_letter()), many0(any_number())], |parts| {
///     (parts[0].clone(), parts[1].clone())
/// })?;
/// assert_eq!(pair.run("w8"), Ok(("w".to_string(), "8".to_string())));
/// ```
pub fn seq<T, F>(
    parsers: impl IntoIterator<Item = Parser>,
    combine: F,
) -> Result<Seq<T>, GrammarError>
where
    F: Fn(Vec<String>) -> T + Send + Sync + 'static,
{
    let parsers: Vec<Parser> = parsers.into_iter().collect();
    if parsers.is_empty() {
        return Err(GrammarError::EmptySequence);
    }
    Ok(Seq {
        parsers,
        combine: Arc::new(combine),
    })
}

impl<T> Seq<T> {
    /// Run every parser in order on the shrinking input.
    ///
    /// Returns the combined value, or the failure of the whole sequence, which always
    /// carries the original `input`.
    pub fn run<'a>(&self, input: &'a str) -> Result<T, ParseResult<'a>> {
        let mut remaining = input;
        let mut parts = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            let result = parser.run(remaining);
            if result.is_failure() {
                return Err(ParseResult::failure(input));
            }
            remaining = result.remaining();
            parts.push(result.into_matched());
        }
        Ok((self.combine)(parts))
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            parsers: self.parsers.clone(),
            combine: Arc::clone(&self.combine),
        }
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq")
            .field("parsers", &self.parsers)
            .finish_non_exhaustive()
    }
}
