//! Grammar loading utilities
//!
//! [`GrammarLoader`] reads grammar source from a file or a string and runs
//! transforms on it. The command line tool and the integration tests both go
//! through it.
//!
//! ```rust,ignore
//! use abnf_parser::abnf::{GeneratorOptions, GrammarLoader};
//!
//! let loader = GrammarLoader::from_path("grammar.abnf")?;
//! for line in loader.compile(&GeneratorOptions::default())? {
//!     println!("{}", line);
//! }
//! ```

use crate::abnf::codegen::GeneratorOptions;
use crate::abnf::error::CompileError;
use crate::abnf::resolve::Rulelist;
use crate::abnf::transforms::standard::{compile_transform, TokenStream, TOKENIZATION, TO_RULELIST};
use crate::abnf::transforms::{Transform, TransformError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Grammar source with transform shortcuts
pub struct GrammarLoader {
    source: String,
}

impl GrammarLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CompileError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = source.len(), "loaded grammar");
        Ok(GrammarLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        GrammarLoader {
            source: source.into(),
        }
    }

    /// Run a custom transform on the source
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, TransformError> {
        transform.run(self.source.clone())
    }

    /// Shortcut for `.with(&TOKENIZATION)`.
    pub fn tokenize(&self) -> Result<TokenStream, TransformError> {
        self.with(&TOKENIZATION)
    }

    /// Parse the source into a rulelist. Shortcut for `.with(&TO_RULELIST)`.
    pub fn parse(&self) -> Result<Rulelist, TransformError> {
        self.with(&TO_RULELIST)
    }

    /// Compile the source to one line per generated statement.
    pub fn compile(&self, options: &GeneratorOptions) -> Result<Vec<String>, TransformError> {
        self.with(&compile_transform(options.clone()))
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
