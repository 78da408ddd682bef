//! Testing utilities for grammars
//!
//! Asserting on a parse means asserting on three things at once: the success flag, the
//! matched text and the remainder. Checking only the flag hides grammars that succeed
//! by consuming too little, so these helpers always pin the remainder.
//!
//! ```rust-example
//! use parsnip::testing::{assert_parses, assert_rejects};
//!
//! assert_parses(&parser, "asd123", "123");
//! assert_rejects(&parser, "123");
//! ```
//!
//! [`assert_rejects`] also verifies the backtracking contract: a failed parse must hand
//! back its input untouched.

use crate::parsing::{ParseResult, Parser};

/// Assert that `parser` accepts `input` and leaves exactly `remaining`.
#[track_caller]
pub fn assert_parses<'a>(parser: &Parser, input: &'a str, remaining: &str) -> ParseResult<'a> {
    let result = parser.run(input);
    assert!(
        result.is_ok(),
        "{} should parse {:?}, got {:?}",
        parser.name(),
        input,
        result
    );
    assert_eq!(
        result.remaining(),
        remaining,
        "{} left the wrong remainder for {:?}",
        parser.name(),
        input
    );
    result
}

/// Assert that `parser` accepts `input`, reporting `matched` and leaving `remaining`.
#[track_caller]
pub fn assert_parses_matching<'a>(
    parser: &Parser,
    input: &'a str,
    matched: &str,
    remaining: &str,
) -> ParseResult<'a> {
    let result = assert_parses(parser, input, remaining);
    assert_eq!(
        result.matched(),
        matched,
        "{} reported the wrong match for {:?}",
        parser.name(),
        input
    );
    result
}

/// Assert that `parser` rejects `input` without consuming any of it.
#[track_caller]
pub fn assert_rejects(parser: &Parser, input: &str) {
    let result = parser.run(input);
    assert_eq!(
        result,
        ParseResult::failure(input),
        "{} should reject {:?} and leave it untouched",
        parser.name(),
        input
    );
}
