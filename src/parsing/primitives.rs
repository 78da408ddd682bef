//! Base parsers and parser builders
//!
//! Character-level primitives work on Unicode scalar values and advance by the UTF-8
//! width of what they consume. Repetition builders take the parser to repeat by value;
//! [`Parser`] is a cheap shared handle, so there is nothing to defer.
//!
//! Two primitives cover the "nothing left" cases:
//! - [`eof`] succeeds only on empty input,
//! - [`empty`] always succeeds and consumes nothing.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::GrammarError;
use super::parser::Parser;
use super::result::ParseResult;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A[ \n\t]+").unwrap());
static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A[a-zA-Z]").unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A[0-9]").unwrap());

/// Match `regex` at the very start of `input`, consuming the whole match.
fn scan<'a>(regex: &Regex, input: &'a str) -> ParseResult<'a> {
    match regex.find(input) {
        Some(found) => ParseResult::success(found.as_str(), &input[found.end()..]),
        None => ParseResult::failure(input),
    }
}

/// Split off the first character, if any.
fn first_char(input: &str) -> Option<(char, &str)> {
    let ch = input.chars().next()?;
    Some((ch, &input[ch.len_utf8()..]))
}

/// Succeeds, consuming nothing, only when the input is empty.
pub fn eof() -> Parser {
    Parser::new("eof", |input| {
        if input.is_empty() {
            ParseResult::success("", input)
        } else {
            ParseResult::failure(input)
        }
    })
}

/// Always succeeds, consuming nothing.
pub fn empty() -> Parser {
    Parser::new("empty", |input| ParseResult::success("", input))
}

/// One or more spaces, tabs or newlines.
pub fn whitespace() -> Parser {
    Parser::new("whitespace", |input| scan(&WHITESPACE, input))
}

/// Exactly the character `expected`.
pub fn one(expected: char) -> Parser {
    Parser::new(format!("{expected:?}"), move |input| match first_char(input) {
        Some((ch, rest)) if ch == expected => ParseResult::success(ch, rest),
        _ => ParseResult::failure(input),
    })
}

/// The literal string `expected`.
pub fn literal(expected: impl Into<String>) -> Parser {
    let expected = expected.into();
    Parser::new(format!("{expected:?}"), move |input| {
        match input.strip_prefix(expected.as_str()) {
            Some(rest) => ParseResult::success(expected.as_str(), rest),
            None => ParseResult::failure(input),
        }
    })
}

/// One ASCII letter, `[a-zA-Z]`.
pub fn any_letter() -> Parser {
    Parser::new("anyLetter", |input| scan(&LETTER, input))
}

/// One ASCII digit, `[0-9]`.
pub fn any_number() -> Parser {
    Parser::new("anyNumber", |input| scan(&NUMBER, input))
}

/// The longest match of `pattern` starting at the beginning of the input.
///
/// The pattern is anchored for you; `regex("foo")` does not match `"xfoo"`.
pub fn regex(pattern: &str) -> Result<Parser, GrammarError> {
    let compiled =
        Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| GrammarError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
    Ok(Parser::new(format!("/{pattern}/"), move |input| {
        scan(&compiled, input)
    }))
}

/// One character from `chars`.
pub fn any_char(chars: impl IntoIterator<Item = char>) -> Parser {
    let set: BTreeSet<char> = chars.into_iter().collect();
    let name = format!("anyChar{:?}", set.iter().collect::<String>());
    Parser::new(name, move |input| match first_char(input) {
        Some((ch, rest)) if set.contains(&ch) => ParseResult::success(ch, rest),
        _ => ParseResult::failure(input),
    })
}

/// One character not in `chars`. Fails on empty input.
pub fn any_char_but(chars: impl IntoIterator<Item = char>) -> Parser {
    let set: BTreeSet<char> = chars.into_iter().collect();
    let name = format!("anyCharBut{:?}", set.iter().collect::<String>());
    Parser::new(name, move |input| match first_char(input) {
        Some((ch, rest)) if !set.contains(&ch) => ParseResult::success(ch, rest),
        _ => ParseResult::failure(input),
    })
}

/// Outcome of running a parser repeatedly.
struct Repetition<'a> {
    count: usize,
    matched: String,
    remaining: &'a str,
}

/// Run `parser` until it fails, stops consuming, or exhausts the input.
fn repeat<'a>(parser: &Parser, input: &'a str) -> Repetition<'a> {
    let mut repetition = Repetition {
        count: 0,
        matched: String::new(),
        remaining: input,
    };

    loop {
        let before = repetition.remaining;
        let result = parser.run(before);
        if result.is_failure() {
            break;
        }
        repetition.count += 1;
        repetition.matched.push_str(result.matched());
        repetition.remaining = result.remaining();
        if repetition.remaining.is_empty() || repetition.remaining.len() == before.len() {
            break;
        }
    }

    repetition
}

/// Zero or more repetitions of `parser`. Never fails.
pub fn many0(parser: Parser) -> Parser {
    let name = format!("many0({})", parser.name());
    Parser::new(name, move |input| {
        let repetition = repeat(&parser, input);
        ParseResult::success(repetition.matched, repetition.remaining)
    })
}

/// One or more repetitions of `parser`.
pub fn many1(parser: Parser) -> Parser {
    let name = format!("many1({})", parser.name());
    Parser::new(name, move |input| {
        let repetition = repeat(&parser, input);
        if repetition.count == 0 {
            return ParseResult::failure(input);
        }
        ParseResult::success(repetition.matched, repetition.remaining)
    })
}

/// Exactly `n` consecutive repetitions of `parser`; further matches are left unconsumed.
pub fn exactly(n: usize, parser: Parser) -> Parser {
    let name = format!("exactly({n}, {})", parser.name());
    Parser::new(name, move |input| {
        let mut matched = String::new();
        let mut remaining = input;
        for _ in 0..n {
            let result = parser.run(remaining);
            if result.is_failure() {
                return ParseResult::failure(input);
            }
            matched.push_str(result.matched());
            remaining = result.remaining();
        }
        ParseResult::success(matched, remaining)
    })
}

/// `inner` wrapped in `open` and `close`. The match is the whole consumed span.
pub fn between(inner: Parser, open: Parser, close: Parser) -> Parser {
    let name = format!(
        "between({}, {}, {})",
        inner.name(),
        open.name(),
        close.name()
    );
    Parser::new(name, move |input| {
        let lhs = open.run(input);
        if lhs.is_failure() {
            return ParseResult::failure(input);
        }
        let middle = inner.run(lhs.remaining());
        if middle.is_failure() {
            return ParseResult::failure(input);
        }
        let rhs = close.run(middle.remaining());
        if rhs.is_failure() {
            return ParseResult::failure(input);
        }
        let matched = lhs.into_matched() + middle.matched() + rhs.matched();
        ParseResult::success(matched, rhs.remaining())
    })
}

/// Turn an arbitrary function into a parser.
///
/// The function has the same obligations as any parser: on failure it must return
/// [`ParseResult::failure`] with its own input.
pub fn satisfy<F>(parse: F) -> Parser
where
    F: for<'a> Fn(&'a str) -> ParseResult<'a> + Send + Sync + 'static,
{
    Parser::new("satisfy", parse)
}
