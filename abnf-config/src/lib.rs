//! Shared configuration loader for abnf2peg.
//!
//! `defaults/abnf2peg.default.toml` is embedded into the binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`AbnfConfig`].

use abnf_parser::abnf::GeneratorOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/abnf2peg.default.toml");

/// Top-level configuration consumed by abnf2peg.
#[derive(Debug, Clone, Deserialize)]
pub struct AbnfConfig {
    pub generator: GeneratorConfig,
    pub names: NamesConfig,
}

/// Code generation knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub prefix: String,
    pub forward_declarations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamesConfig {
    /// Extra identifiers that may not be used as rule names
    pub reserved: Vec<String>,
}

impl AbnfConfig {
    /// Settings for the code generator.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            prefix: self.generator.prefix.clone(),
            forward_declarations: self.generator.forward_declarations,
            reserved: self.names.reserved.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AbnfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AbnfConfig, ConfigError> {
    Loader::new().build()
}
