//! Combinators exercised through grammars

use parsnip::parsing::prelude::*;
use parsnip::testing::{assert_parses, assert_parses_matching, assert_rejects};

fn letter_and_number<F>(compose: F) -> Parser
where
    F: FnOnce(&Rules) -> Parser + 'static,
{
    Grammar::build(|g| {
        g.rule("letter", |_| many1(any_letter()));
        g.rule("number", |_| many0(any_number()));
        g.rule("foo", compose);
        g.start("foo")
    })
    .expect("grammar to build")
}

mod or_else {
    use super::*;

    #[test]
    fn test_single_branch() {
        let parser = letter_and_number(|r| r.rule("letter") | r.rule("number"));

        assert_parses_matching(&parser, "n", "n", "");
        assert_parses_matching(&parser, "6", "6", "");
        assert_parses_matching(&parser, "", "", "");
    }

    #[test]
    fn test_multiple_branches() {
        let parser = letter_and_number(|r| {
            r.rule("letter") | many1(any_number()) | eof()
        });

        assert_parses_matching(&parser, "n", "n", "");
        assert_parses_matching(&parser, "6", "6", "");
        assert_parses_matching(&parser, "", "", "");
        assert_rejects(&parser, "!");
    }

    #[test]
    fn test_with_satisfy() {
        let parser = letter_and_number(|r| {
            r.rule("letter")
                | satisfy(|input| {
                    if input == "1" {
                        ParseResult::success("1", "")
                    } else {
                        ParseResult::failure(input)
                    }
                })
        });

        assert_parses(&parser, "n", "");
        assert_parses(&parser, "1", "");
    }
}

mod and_then {
    use super::*;

    #[test]
    fn test_single_branch() {
        let parser = letter_and_number(|r| r.rule("letter") >> r.rule("number"));
        assert_parses_matching(&parser, "foo123", "foo123", "");
    }

    #[test]
    fn test_multiple_branches() {
        let parser = letter_and_number(|r| {
            r.rule("letter") >> r.rule("number") >> r.rule("letter")
        });

        assert_parses_matching(&parser, "foo123asd", "foo123asd", "");
        assert_rejects(&parser, "foo123");
    }

    #[test]
    fn test_rules_and_primitives() {
        let parser = letter_and_number(|r| r.rule("letter") >> many0(any_number()));

        assert_parses(&parser, "foo123", "");
        assert_parses(&parser, "foo", "");
        assert_rejects(&parser, "123a");
    }
}

#[test]
fn test_then_optional() {
    let parser = letter_and_number(|r| r.rule("letter").then_optional(whitespace()));
    assert_parses_matching(&parser, "foo   ", "foo   ", "");
}

#[test]
fn test_optional_then() {
    let parser = letter_and_number(|r| whitespace().optional_then(r.rule("letter")));
    assert_parses_matching(&parser, "   foo", "   foo", "");
}

#[test]
fn test_then_ignore() {
    let parser = letter_and_number(|r| r.rule("letter").then_ignore(whitespace()));
    assert_parses_matching(&parser, "foo   ", "foo", "");
}

#[test]
fn test_ignore_then() {
    let parser = letter_and_number(|r| whitespace().ignore_then(r.rule("letter")));
    assert_parses_matching(&parser, "   foo", "foo", "");
}
