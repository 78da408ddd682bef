//! # parsnip
//!
//! A small parser-combinator engine for assembling recursive-descent parsers.
//!
//! File Layout
//!
//! The engine lives in [`parsing`]; everything else consumes it.
//!
//! src/
//!   ├── parsing      The engine: results, parsers, combinators, primitives, grammars of rules
//!   ├── grammars     Grammars written with the engine (JSON, the assignment tutorial)
//!   └── testing      Assertion helpers shared by the test suites
//!
//! A parser is a function from an input string to a [`ParseResult`]. Parsers never consume
//! partially: a failure always hands back the input it was given, so alternation can retry
//! from the same spot. Rules registered in a [`Grammar`] may reference each other (and
//! themselves) in any order, because a rule reference only resolves when it runs.
//!
//! ```rust,ignore
//! use parsnip::parsing::prelude::*;
//!
//! let parser = Grammar::build(|g| {
//!     g.rule("word", |_| many1(any_letter()));
//!     g.start("word")
//! })?;
//!
//! let result = parser.run("asd123");
//! assert_eq!(result.matched(), "asd");
//! assert_eq!(result.remaining(), "123");
//! ```

pub mod grammars;
pub mod parsing;
pub mod testing;

pub use parsing::{Grammar, GrammarError, ParseResult, Parser};
