//! Generation stage

use crate::abnf::codegen::{generate, GeneratorOptions};
use crate::abnf::error::CompileError;
use crate::abnf::resolve::Rulelist;
use crate::abnf::transforms::{Runnable, TransformError};

/// Generation stage: [`Rulelist`] → one line per emitted statement
pub struct Generation {
    options: GeneratorOptions,
}

impl Generation {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::new(GeneratorOptions::default())
    }
}

impl Runnable<Rulelist, Vec<String>> for Generation {
    fn run(&self, input: Rulelist) -> Result<Vec<String>, TransformError> {
        generate(&input, &self.options).map_err(|err| CompileError::from(err).into())
    }
}
