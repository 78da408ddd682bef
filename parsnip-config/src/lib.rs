//! Shared configuration loader for the parsnip tools.
//!
//! `defaults/parsnip.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ParsnipConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use parsnip::grammars::BuiltinGrammar;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/parsnip.default.toml");

/// Top-level configuration consumed by parsnip applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsnipConfig {
    pub parse: ParseConfig,
    pub logging: LoggingConfig,
}

/// What to parse with and how to report it.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub grammar: BuiltinGrammar,
    pub format: OutputFormat,
    pub trim_trailing_newline: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A `tracing` filter directive such as `warn` or `parsnip=trace`.
    pub level: String,
}

/// Builds a [`ParsnipConfig`] from layered sources, later layers winning.
///
/// The `parsnip` binary stacks, in order: the embedded defaults, `./parsnip.toml` when it
/// exists ([`Loader::with_optional_file`]), the `--config` file ([`Loader::with_file`]), and
/// finally `--grammar` / `--format` ([`Loader::set_override`]).
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// The bottom layer: `defaults/parsnip.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that must exist, such as one named with `--config`.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file that is skipped when absent, such as the working directory's
    /// `parsnip.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path)
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Top layer: one dotted key, e.g. `parse.grammar`, set from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers. Unknown grammar or format names fail here.
    pub fn build(self) -> Result<ParsnipConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The configuration with no files or flags applied.
pub fn load_defaults() -> Result<ParsnipConfig, ConfigError> {
    Loader::new().build()
}
