//! Binary combinators
//!
//! Each method builds a new [`Parser`] out of `self` and `other`. The names map onto the
//! operator notation grammars are usually sketched in:
//!
//! | method          | notation | both required | output            |
//! |-----------------|----------|---------------|-------------------|
//! | `or_else`       | `a \| b` | no            | whichever matched |
//! | `and_then`      | `a >> b` | yes           | `a` + `b`         |
//! | `then_optional` | `a > b`  | `a` only      | `a` [+ `b`]       |
//! | `optional_then` | `a < b`  | `b` only      | [`a` +] `b`       |
//! | `then_ignore`   | `a >= b` | yes           | `a`               |
//! | `ignore_then`   | `a <= b` | yes           | `b`               |
//!
//! `|` and `>>` are also available as operators through [`BitOr`] and [`Shr`].
//!
//! A composed parser that fails always reports the original input as its remainder, even
//! when its first operand had already consumed something.

use std::ops::{BitOr, Shr};

use super::parser::Parser;
use super::result::ParseResult;

impl Parser {
    /// Try `self`; if it fails, try `other` against the same input.
    pub fn or_else(self, other: Parser) -> Parser {
        let name = format!("({} | {})", self.name(), other.name());
        Parser::new(name, move |input| {
            let first = self.run(input);
            if first.is_ok() {
                return first;
            }
            other.run(input)
        })
    }

    /// Run `self`, then `other` on what is left. Both must succeed.
    pub fn and_then(self, other: Parser) -> Parser {
        let name = format!("({} >> {})", self.name(), other.name());
        Parser::new(name, move |input| {
            let first = self.run(input);
            if first.is_failure() {
                return ParseResult::failure(input);
            }
            let second = other.run(first.remaining());
            if second.is_failure() {
                return ParseResult::failure(input);
            }
            ParseResult::success(first.into_matched() + second.matched(), second.remaining())
        })
    }

    /// Run `self`, then `other` if it matches. `other` failing is not an error.
    pub fn then_optional(self, other: Parser) -> Parser {
        let name = format!("({} > {})", self.name(), other.name());
        Parser::new(name, move |input| {
            let first = self.run(input);
            if first.is_failure() {
                return ParseResult::failure(input);
            }
            let second = other.run(first.remaining());
            if second.is_failure() {
                return first;
            }
            ParseResult::success(first.into_matched() + second.matched(), second.remaining())
        })
    }

    /// Optionally run `self`, then require `other`.
    pub fn optional_then(self, other: Parser) -> Parser {
        let name = format!("({} < {})", self.name(), other.name());
        Parser::new(name, move |input| {
            let first = self.run(input);
            let (prefix, rest) = if first.is_ok() {
                let rest = first.remaining();
                (first.into_matched(), rest)
            } else {
                (String::new(), input)
            };
            let second = other.run(rest);
            if second.is_failure() {
                return ParseResult::failure(input);
            }
            ParseResult::success(prefix + second.matched(), second.remaining())
        })
    }

    /// Require both, but keep only `self`'s match. `other` is consumed and dropped.
    pub fn then_ignore(self, other: Parser) -> Parser {
        let name = format!("({} >= {})", self.name(), other.name());
        Parser::new(name, move |input| {
            let first = self.run(input);
            if first.is_failure() {
                return ParseResult::failure(input);
            }
            let second = other.run(first.remaining());
            if second.is_failure() {
                return ParseResult::failure(input);
            }
            ParseResult::success(first.into_matched(), second.remaining())
        })
    }

    /// Require both, but keep only `other`'s match. `self` is consumed and dropped.
    pub fn ignore_then(self, other: Parser) -> Parser {
        let name = format!("({} <= {})", self.name(), other.name());
        Parser::new(name, move |input| {
            let first = self.run(input);
            if first.is_failure() {
                return ParseResult::failure(input);
            }
            let second = other.run(first.remaining());
            if second.is_failure() {
                return ParseResult::failure(input);
            }
            second
        })
    }
}

impl BitOr for Parser {
    type Output = Parser;

    fn bitor(self, other: Parser) -> Parser {
        self.or_else(other)
    }
}

impl Shr for Parser {
    type Output = Parser;

    fn shr(self, other: Parser) -> Parser {
        self.and_then(other)
    }
}
