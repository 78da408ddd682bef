//! Grammars built with the engine
//!
//! These are ordinary consumers of [`crate::parsing`]: nothing in them is special-cased by
//! the engine. They double as worked examples and as the grammars the CLI can run.
//!
//! - [`json`]: JSON documents (objects, arrays, strings with escapes, numbers, literals)
//! - [`assignment`]: the two-step `name = digit` tutorial grammar

pub mod assignment;
pub mod json;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parsing::{GrammarError, Parser};

/// The grammars shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinGrammar {
    Json,
    Assignment,
}

impl BuiltinGrammar {
    pub const ALL: [BuiltinGrammar; 2] = [BuiltinGrammar::Json, BuiltinGrammar::Assignment];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinGrammar::Json => "json",
            BuiltinGrammar::Assignment => "assignment",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BuiltinGrammar::Json => "A complete JSON document",
            BuiltinGrammar::Assignment => {
                "A `name = digit` assignment, spacing around `=` optional"
            }
        }
    }

    pub fn build(self) -> Result<Parser, GrammarError> {
        match self {
            BuiltinGrammar::Json => json::grammar(),
            BuiltinGrammar::Assignment => assignment::grammar(),
        }
    }
}

impl fmt::Display for BuiltinGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for grammar names that are not built in.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grammar `{0}` (available: {names})", names = available_names())]
pub struct UnknownGrammar(pub String);

fn available_names() -> String {
    BuiltinGrammar::ALL
        .iter()
        .map(|grammar| grammar.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for BuiltinGrammar {
    type Err = UnknownGrammar;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        BuiltinGrammar::ALL
            .into_iter()
            .find(|grammar| grammar.name() == name)
            .ok_or_else(|| UnknownGrammar(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for grammar in BuiltinGrammar::ALL {
            assert_eq!(grammar.name().parse::<BuiltinGrammar>(), Ok(grammar));
        }
        assert_eq!(
            "yaml".parse::<BuiltinGrammar>(),
            Err(UnknownGrammar("yaml".to_string()))
        );
    }

    #[test]
    fn test_unknown_grammar_lists_every_builtin() {
        let message = UnknownGrammar("xml".to_string()).to_string();
        assert_eq!(message, "unknown grammar `xml` (available: json, assignment)");
        for grammar in BuiltinGrammar::ALL {
            assert!(message.contains(grammar.name()));
        }
    }

    #[test]
    fn test_every_builtin_grammar_builds() {
        for grammar in BuiltinGrammar::ALL {
            assert!(grammar.build().is_ok(), "{grammar} failed to build");
        }
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&BuiltinGrammar::Assignment).unwrap();
        assert_eq!(json, "\"assignment\"");
    }
}
