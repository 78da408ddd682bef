//! Grammar registry
//!
//! A grammar is a set of named rules plus an entry point. Rules may reference one another,
//! and themselves, in any declaration order:
//!
//! ```rust,ignore
//! let parens = Grammar::build(|g| {
//!     g.rule("parens", |r| between(many0(r.rule("parens")), one('('), one(')')));
//!     g.start("parens")
//! })?;
//! ```
//!
//! ## Deferred resolution
//!
//! Building rules eagerly would unwind forever on the first cycle. Instead, registration
//! only stores each builder. When [`Grammar::build`] closes the registration phase it runs
//! the builders in declaration order, and every [`Rules::rule`] call inside them yields a
//! thin reference parser holding the rule's slot in a shared table. The reference looks the
//! slot up when it runs, by which time the table is frozen.
//!
//! References hold the table weakly; only the entry parser returned by `build` owns it.
//! A recursive grammar therefore never forms a reference-count cycle and is freed with its
//! entry parser.
//!
//! ## Termination
//!
//! Nothing here enforces termination. A rule that recurses before consuming anything
//! (`g.rule("a", |r| r.rule("a"))`) overflows the stack when run. Grammars must consume at
//! least one character before re-entering a rule.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, Weak};

use super::error::GrammarError;
use super::parser::Parser;
use super::result::ParseResult;

type Builder = Box<dyn FnOnce(&Rules) -> Parser>;

/// Entry point for defining grammars.
pub struct Grammar;

impl Grammar {
    /// Open a fresh registry, let `declare` register rules in it, and return the parser for
    /// the rule `declare` names as start.
    ///
    /// Fails if the definition is broken: an unknown start rule, a reference to a rule never
    /// declared, or a rule declared twice.
    pub fn build<F>(declare: F) -> Result<Parser, GrammarError>
    where
        F: FnOnce(&mut Declarations) -> Start,
    {
        let mut declarations = Declarations::default();
        let start = declare(&mut declarations);
        declarations.finish(start)
    }
}

/// Marker for the start rule. Only [`Declarations::start`] creates one, so every grammar
/// has exactly one entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Start(String);

impl Start {
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// The rules declared so far in a [`Grammar::build`] call.
#[derive(Default)]
pub struct Declarations {
    names: Vec<String>,
    builders: Vec<Builder>,
    duplicates: Vec<String>,
}

impl Declarations {
    /// Register rule `name`. `builder` runs once, after every rule has been declared, and
    /// receives a [`Rules`] handle for referencing other rules.
    pub fn rule<F>(&mut self, name: impl Into<String>, builder: F) -> &mut Self
    where
        F: FnOnce(&Rules) -> Parser + 'static,
    {
        let name = name.into();
        if self.names.contains(&name) {
            self.duplicates.push(name);
        } else {
            self.names.push(name);
            self.builders.push(Box::new(builder));
        }
        self
    }

    /// Designate the entry rule.
    pub fn start(&mut self, name: impl Into<String>) -> Start {
        Start(name.into())
    }

    fn finish(self, start: Start) -> Result<Parser, GrammarError> {
        if let Some(name) = self.duplicates.into_iter().next() {
            return Err(GrammarError::DuplicateRule(name));
        }

        let index: HashMap<String, usize> = self
            .names
            .iter()
            .enumerate()
            .map(|(slot, name)| (name.clone(), slot))
            .collect();
        let entry = *index
            .get(start.name())
            .ok_or_else(|| GrammarError::UnknownStart(start.name().to_string()))?;

        let table = Arc::new(RuleTable {
            names: self.names,
            parsers: OnceLock::new(),
        });

        let mut parsers = Vec::with_capacity(self.builders.len());
        for (slot, builder) in self.builders.into_iter().enumerate() {
            let rules = Rules {
                table: Arc::downgrade(&table),
                index: &index,
                current: &table.names[slot],
                unresolved: RefCell::new(Vec::new()),
            };
            let parser = builder(&rules);
            if let Some(name) = rules.unresolved.into_inner().into_iter().next() {
                return Err(GrammarError::UnknownRule {
                    name,
                    referenced_by: table.names[slot].clone(),
                });
            }
            parsers.push(parser);
        }

        // The table was created above, so this is its only initialization.
        let _ = table.parsers.set(parsers);

        tracing::debug!(
            rules = table.names.len(),
            start = start.name(),
            "grammar built"
        );

        Ok(Parser::new(start.0, move |input| table.run(entry, input)))
    }
}

/// Handle given to rule builders for referencing rules by name.
pub struct Rules<'g> {
    table: Weak<RuleTable>,
    index: &'g HashMap<String, usize>,
    current: &'g str,
    unresolved: RefCell<Vec<String>>,
}

impl Rules<'_> {
    /// A parser that runs rule `name`, looked up when it runs rather than now.
    ///
    /// Referencing a name that was never declared makes [`Grammar::build`] fail with
    /// [`GrammarError::UnknownRule`].
    pub fn rule(&self, name: &str) -> Parser {
        let Some(&slot) = self.index.get(name) else {
            self.unresolved.borrow_mut().push(name.to_string());
            return Parser::new(name.to_string(), |input| ParseResult::failure(input));
        };

        let table = Weak::clone(&self.table);
        Parser::new(name.to_string(), move |input| match table.upgrade() {
            Some(table) => table.run(slot, input),
            None => {
                tracing::warn!(slot, "rule reference used after its grammar was dropped");
                ParseResult::failure(input)
            }
        })
    }

    /// Name of the rule whose builder is running.
    pub fn current(&self) -> &str {
        self.current
    }
}

/// Frozen rule bodies, indexed by declaration order.
struct RuleTable {
    names: Vec<String>,
    parsers: OnceLock<Vec<Parser>>,
}

impl RuleTable {
    fn run<'a>(&self, slot: usize, input: &'a str) -> ParseResult<'a> {
        let Some(parser) = self.parsers.get().and_then(|parsers| parsers.get(slot)) else {
            return ParseResult::failure(input);
        };

        let rule = self.names[slot].as_str();
        tracing::trace!(rule, remaining = input.len(), "enter rule");
        let result = parser.run(input);
        tracing::trace!(
            rule,
            ok = result.is_ok(),
            consumed = result.consumed(input),
            "exit rule"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::primitives::{
        any_letter, any_number, between, empty, eof, many0, many1, one, satisfy,
    };

    #[test]
    fn test_single_rule() {
        let parser = Grammar::build(|g| {
            g.rule("word", |_| many1(any_letter()));
            g.start("word")
        })
        .unwrap();

        assert_eq!(parser.name(), "word");
        assert_eq!(parser.run("asd123"), ParseResult::success("asd", "123"));
    }

    #[test]
    fn test_rules_can_be_made_by_hand() {
        let parser = Grammar::build(|g| {
            g.rule("foo", |_| {
                satisfy(|input| {
                    if input == "foo" {
                        ParseResult::success("foo", "")
                    } else {
                        ParseResult::failure(input)
                    }
                })
            });
            g.start("foo")
        })
        .unwrap();

        assert_eq!(parser.run("foo"), ParseResult::success("foo", ""));
    }

    #[test]
    fn test_forward_references() {
        let parser = Grammar::build(|g| {
            g.rule("pair", |r| r.rule("letter").and_then(r.rule("number")));
            g.rule("letter", |_| many1(any_letter()));
            g.rule("number", |_| many0(any_number()));
            g.start("pair")
        })
        .unwrap();

        assert_eq!(parser.run("foo123"), ParseResult::success("foo123", ""));
    }

    #[test]
    fn test_self_recursion() {
        let parser = Grammar::build(|g| {
            g.rule("parens", |r| {
                between(many0(r.rule("parens")), one('('), one(')'))
            });
            g.start("parens")
        })
        .unwrap();

        assert_eq!(parser.run("(()(()))x"), ParseResult::success("(()(()))", "x"));
        assert_eq!(parser.run("(()"), ParseResult::failure("(()"));
    }

    #[test]
    fn test_mutual_recursion() {
        // list := '[' items? ']' ; items := item (',' items)? ; item := digit | list
        let parser = Grammar::build(|g| {
            g.rule("list", |r| between(r.rule("items") | empty(), one('['), one(']')));
            g.rule("items", |r| {
                r.rule("item")
                    .then_optional(one(',').and_then(r.rule("items")))
            });
            g.rule("item", |r| any_number() | r.rule("list"));
            g.start("list")
        })
        .unwrap();

        assert_eq!(parser.run("[1,[2,[]],3]"), ParseResult::success("[1,[2,[]],3]", ""));
        assert_eq!(parser.run("[1,[2,]"), ParseResult::failure("[1,[2,]"));
    }

    #[test]
    fn test_unknown_rule_is_reported() {
        let err = Grammar::build(|g| {
            g.rule("foo", |r| r.rule("letter") >> eof());
            g.start("foo")
        })
        .unwrap_err();

        assert!(matches!(
            err,
            GrammarError::UnknownRule { ref name, ref referenced_by }
                if name == "letter" && referenced_by == "foo"
        ));
        assert_eq!(
            err.to_string(),
            "invalid rule: `letter` (referenced by `foo`)"
        );
    }

    #[test]
    fn test_unknown_start_is_reported() {
        let err = Grammar::build(|g| {
            g.rule("foo", |_| eof());
            g.start("bar")
        })
        .unwrap_err();

        assert!(matches!(err, GrammarError::UnknownStart(ref name) if name == "bar"));
    }

    #[test]
    fn test_duplicate_rule_is_reported() {
        let err = Grammar::build(|g| {
            g.rule("foo", |_| eof());
            g.rule("foo", |_| empty());
            g.start("foo")
        })
        .unwrap_err();

        assert!(matches!(err, GrammarError::DuplicateRule(ref name) if name == "foo"));
    }

    #[test]
    fn test_builders_see_their_own_name() {
        let parser = Grammar::build(|g| {
            g.rule("foo", |r| {
                assert_eq!(r.current(), "foo");
                eof()
            });
            g.start("foo")
        })
        .unwrap();

        assert!(parser.run("").is_ok());
    }

    #[test]
    fn test_references_fail_once_the_grammar_is_gone() {
        let escaped = Arc::new(std::sync::Mutex::new(None));
        let slot = Arc::clone(&escaped);
        let parser = Grammar::build(move |g| {
            g.rule("word", |_| many1(any_letter()));
            g.rule("outer", move |r| {
                *slot.lock().unwrap() = Some(r.rule("word"));
                r.rule("word")
            });
            g.start("outer")
        })
        .unwrap();
        let reference = escaped.lock().unwrap().take().unwrap();

        assert!(reference.run("abc").is_ok());
        drop(parser);
        assert_eq!(reference.run("abc"), ParseResult::failure("abc"));
    }

    #[test]
    fn test_built_grammar_runs_on_many_threads() {
        let parser = Grammar::build(|g| {
            g.rule("word", |_| many1(any_letter()));
            g.start("word")
        })
        .unwrap();

        let handles: Vec<_> = ["abc", "de1", "f"]
            .into_iter()
            .map(|input| {
                let parser = parser.clone();
                std::thread::spawn(move || parser.run(input).into_matched())
            })
            .collect();
        let matched: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(matched, vec!["abc", "de", "f"]);
    }
}
