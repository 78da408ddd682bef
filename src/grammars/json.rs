//! JSON grammar
//!
//! Accepts a complete JSON document: any value, optionally surrounded by whitespace, and
//! nothing after it. The parser reports the document text; it does not build values.
//!
//! Reading the rules: `then_optional` (`a > b`) and `optional_then` (`a < b`) are an open
//! duck mouth, the mandatory side is the one the mouth eats. Punctuation uses them to
//! swallow the whitespace next to it.
//!
//! Element and member lists are `item (comma item)*`. Each item is parsed once, and a
//! trailing comma is left unconsumed so the closing bracket fails to match: `[1, 2,]` and
//! `{"a": 1,}` are rejected.
//!
//! Whitespace between tokens is any run of space, tab, line feed and carriage return, so
//! CRLF documents parse.
//!
//! Arrays and objects are parsed recursively. Documents nesting them deeper than
//! [`MAX_DEPTH`] are rejected before parsing starts, like any other invalid input.

use crate::parsing::prelude::*;

/// Deepest array/object nesting a document may have.
pub const MAX_DEPTH: usize = 128;

/// Escapable characters after a backslash, other than `u`.
const ESCAPES: [char; 8] = ['"', '\\', '/', 'b', 'f', 'n', 'r', 't'];

/// Build the JSON grammar. Its entry rule is `document`.
pub fn grammar() -> Result<Parser, GrammarError> {
    Grammar::build(|g| {
        // Punctuation
        g.rule("ws", |_| many1(any_char([' ', '\t', '\n', '\r'])));
        g.rule("bopen", |r| one('{').then_optional(r.rule("ws")));
        g.rule("bclose", |r| r.rule("ws").optional_then(one('}')));
        g.rule("sopen", |r| one('[').then_optional(r.rule("ws")));
        g.rule("sclose", |r| r.rule("ws").optional_then(one(']')));
        g.rule("colon", |r| {
            r.rule("ws")
                .optional_then(one(':'))
                .then_optional(r.rule("ws"))
        });
        g.rule("comma", |r| {
            r.rule("ws")
                .optional_then(one(','))
                .then_optional(r.rule("ws"))
        });
        g.rule("quote", |_| one('"'));

        // Literals
        g.rule("true", |_| literal("true"));
        g.rule("false", |_| literal("false"));
        g.rule("null", |_| literal("null"));

        // Strings
        g.rule("hexdigit", |_| any_char("0123456789abcdefABCDEF".chars()));
        g.rule("unicode", |r| one('u') >> exactly(4, r.rule("hexdigit")));
        g.rule("escaped", |r| one('\\') >> (any_char(ESCAPES) | r.rule("unicode")));
        g.rule("unescaped", |_| {
            any_char_but(['"', '\\'].into_iter().chain('\u{0}'..='\u{1f}'))
        });
        g.rule("string_char", |r| r.rule("unescaped") | r.rule("escaped"));
        g.rule("string", |r| {
            between(many0(r.rule("string_char")), r.rule("quote"), r.rule("quote"))
        });

        // Numbers
        g.rule("digits", |_| many1(any_number()));
        g.rule("integer", |r| one('0') | r.rule("digits"));
        g.rule("fraction", |r| one('.') >> r.rule("digits"));
        g.rule("exponent", |r| {
            any_char(['e', 'E']) >> any_char(['+', '-']).optional_then(r.rule("digits"))
        });
        g.rule("number", |r| {
            one('-').optional_then(
                r.rule("integer")
                    .then_optional(r.rule("fraction"))
                    .then_optional(r.rule("exponent")),
            )
        });

        // Arrays
        g.rule("elements", |r| {
            r.rule("value") >> many0(r.rule("comma") >> r.rule("value"))
        });
        g.rule("array", |r| {
            between(r.rule("elements") | empty(), r.rule("sopen"), r.rule("sclose"))
        });

        // Objects
        g.rule("pair", |r| r.rule("string") >> r.rule("colon") >> r.rule("value"));
        g.rule("members", |r| {
            r.rule("pair") >> many0(r.rule("comma") >> r.rule("pair"))
        });
        g.rule("object", |r| {
            between(r.rule("members") | empty(), r.rule("bopen"), r.rule("bclose"))
        });

        g.rule("value", |r| {
            r.rule("string")
                | r.rule("number")
                | r.rule("object")
                | r.rule("array")
                | r.rule("true")
                | r.rule("false")
                | r.rule("null")
        });
        g.rule("document", |r| {
            within_depth(
                r.rule("ws")
                    .optional_then(r.rule("value"))
                    .then_optional(r.rule("ws"))
                    >> eof(),
            )
        });

        g.start("document")
    })
}

/// Fail without running `document` when the input nests deeper than [`MAX_DEPTH`].
fn within_depth(document: Parser) -> Parser {
    let name = document.name().to_string();
    Parser::new(name, move |input| {
        let depth = nesting_depth(input);
        if depth > MAX_DEPTH {
            tracing::debug!(depth, limit = MAX_DEPTH, "document nested too deeply");
            return ParseResult::failure(input);
        }
        document.run(input)
    })
}

/// Deepest bracket nesting outside string literals.
fn nesting_depth(input: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0;
    let mut in_string = false;
    let mut escaped = false;

    for ch in input.chars() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '[' | '{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_rule_is_document() {
        assert_eq!(grammar().unwrap().name(), "document");
    }

    #[test]
    fn test_scalars_are_documents() {
        let parser = grammar().unwrap();
        for input in ["true", "false", "null", "0", "-12.5E+3", "\"\"", " 1 "] {
            assert!(parser.run(input).is_ok(), "expected {input:?} to parse");
        }
    }

    #[test]
    fn test_nesting_depth_ignores_brackets_in_strings() {
        assert_eq!(nesting_depth(r#"{"a": [1, {"b": []}]}"#), 4);
        assert_eq!(nesting_depth(r#"["[[[", "\"{{"]"#), 1);
        assert_eq!(nesting_depth("1"), 0);
    }

    #[test]
    fn test_leading_zeros_are_rejected() {
        let parser = grammar().unwrap();
        assert!(parser.run("[0123]").is_failure());
    }

    #[test]
    fn test_raw_control_characters_are_rejected_in_strings() {
        let parser = grammar().unwrap();
        assert!(parser.run("\"a\tb\"").is_failure());
        assert!(parser.run(r#""a\tb""#).is_ok());
    }
}
