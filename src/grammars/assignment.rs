//! Assignment tutorial grammar
//!
//! `name = digit`, in two steps:
//! 1. [`strict`]: exactly one space on each side of `=`
//! 2. [`grammar`]: any whitespace, or none, around `=`

use crate::parsing::prelude::*;

/// Step one: `foo = 1`, spacing fixed.
pub fn strict() -> Result<Parser, GrammarError> {
    Grammar::build(|g| {
        g.rule("assign", |_| {
            many1(any_letter()) >> literal(" = ") >> any_number()
        });
        g.start("assign")
    })
}

/// Step two: the `equals` rule makes the surrounding whitespace optional.
pub fn grammar() -> Result<Parser, GrammarError> {
    Grammar::build(|g| {
        g.rule("equals", |_| {
            whitespace()
                .optional_then(one('='))
                .then_optional(whitespace())
        });
        g.rule("assign", |r| {
            many1(any_letter()) >> r.rule("equals") >> any_number()
        });
        g.start("assign")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("foo = 1")]
    #[case("bar = 3")]
    #[case("baz = 9")]
    fn test_strict_accepts_single_spaces(#[case] input: &str) {
        assert!(strict().unwrap().run(input).is_ok());
    }

    #[rstest]
    #[case("bar =3")]
    #[case("baz= 9")]
    #[case("qux=0")]
    fn test_strict_rejects_other_spacing(#[case] input: &str) {
        assert_eq!(strict().unwrap().run(input), ParseResult::failure(input));
    }

    #[rstest]
    #[case("foo = 1")]
    #[case("bar =3")]
    #[case("baz= 9")]
    #[case("qux\t=\n0")]
    fn test_grammar_accepts_any_spacing(#[case] input: &str) {
        let result = grammar().unwrap().run(input);
        assert_eq!(result, ParseResult::success(input, ""));
    }

    #[test]
    fn test_grammar_leaves_trailing_text() {
        let result = grammar().unwrap().run("x = 12");
        assert_eq!(result, ParseResult::success("x = 1", "2"));
    }
}
