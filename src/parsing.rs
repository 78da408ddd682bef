//! Parsing engine
//!
//! Components, leaves first:
//! 1. **result**: [`ParseResult`], the outcome of one parse attempt
//! 2. **parser**: [`Parser`], a named, shareable wrapper around a parse function
//! 3. **combinators**: binary operators building a parser out of two others
//! 4. **primitives**: base parsers (characters, literals, classes, regexes, repetition)
//! 5. **sequence**: [`seq`](sequence::seq), the one primitive returning a caller-defined value
//! 6. **grammar**: named, possibly recursive rules and the entry point
//!
//! ## Backtracking
//!
//! Every parser in this module restores the original input on failure. Nothing leaves
//! the input partially consumed after reporting failure, so `a.or_else(b)` can always
//! run `b` against exactly what `a` saw.
//!
//! ## Terminology
//!
//! - **matched**: the text a successful parser reports as its output
//! - **remaining**: the unconsumed suffix of the input
//! - **misuse**: a broken grammar definition, reported as [`GrammarError`] rather than a
//!   failed [`ParseResult`]

pub mod combinators;
pub mod error;
pub mod grammar;
pub mod parser;
pub mod primitives;
pub mod result;
pub mod sequence;

pub use error::GrammarError;
pub use grammar::{Declarations, Grammar, Rules, Start};
pub use parser::Parser;
pub use result::ParseResult;
pub use sequence::{seq, Seq};

/// Everything needed to write a grammar, in one import.
pub mod prelude {
    pub use super::grammar::{Declarations, Grammar, Rules, Start};
    pub use super::parser::Parser;
    pub use super::primitives::{
        any_char, any_char_but, any_letter, any_number, between, empty, eof, exactly, literal,
        many0, many1, one, regex, satisfy, whitespace,
    };
    pub use super::result::ParseResult;
    pub use super::sequence::{seq, Seq};
    pub use super::GrammarError;
}
