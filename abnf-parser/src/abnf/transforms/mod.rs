//! Transform pipeline infrastructure
//!
//! Compilation is split into stages that can be composed whenever the output
//! type of one matches the input type of the next.
//!
//! ## The `Runnable` Trait
//!
//! Anything implementing `Runnable<I, O>` turns an `I` into an `O`:
//!
//! ```rust,ignore
//! pub trait Runnable<I, O> {
//!     fn run(&self, input: I) -> Result<O, TransformError>;
//! }
//! ```
//!
//! ## The `Transform<I, O>` Type
//!
//! Wraps a chain of stages. `.then()` appends a stage and the compiler checks
//! that the types line up:
//!
//! ```rust,ignore
//! let compile = Transform::from_fn(Ok)
//!     .then(Parsing::new())                          // String → Rulelist
//!     .then(Generation::new(GeneratorOptions::default())); // Rulelist → Vec<String>
//! ```
//!
//! ## Standard Transforms
//!
//! Common pipelines are prebuilt in [`standard`] as `once_cell::sync::Lazy`
//! statics. Most callers go through
//! [`GrammarLoader`](crate::abnf::loader::GrammarLoader) instead.
//!
//! - [`stages`]: the individual stages
//! - [`standard`]: prebuilt pipelines

pub mod stages;
pub mod standard;

use crate::abnf::error::CompileError;
use std::fmt;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The grammar failed to compile
    Compile(CompileError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Compile(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for TransformError {}

impl From<CompileError> for TransformError {
    fn from(err: CompileError) -> Self {
        TransformError::Compile(err)
    }
}

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Append a stage, returning a transform with the stage's output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Append a prebuilt (static) transform.
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abnf::ast::SourceText;
    use crate::abnf::resolve::{SemanticError, SemanticErrorKind};

    struct CountLines;
    impl Runnable<String, usize> for CountLines {
        fn run(&self, input: String) -> Result<usize, TransformError> {
            Ok(input.lines().count())
        }
    }

    struct Double;
    impl Runnable<usize, usize> for Double {
        fn run(&self, input: usize) -> Result<usize, TransformError> {
            Ok(input * 2)
        }
    }

    struct Reject;
    impl Runnable<usize, usize> for Reject {
        fn run(&self, _input: usize) -> Result<usize, TransformError> {
            Err(CompileError::Io("rejected".to_string()).into())
        }
    }

    #[test]
    fn test_stages_compose() {
        let transform = Transform::from_fn(Ok).then(CountLines).then(Double);
        assert_eq!(transform.run("a = b\nc = d\n".to_string()).unwrap(), 4);
    }

    #[test]
    fn test_error_stops_the_chain() {
        let transform = Transform::from_fn(Ok)
            .then(CountLines)
            .then(Reject)
            .then(Double);
        assert_eq!(
            transform.run("a = b\n".to_string()).unwrap_err(),
            TransformError::Compile(CompileError::Io("rejected".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        let source = SourceText::new("a = 0b\n");
        let compile: TransformError = CompileError::from(SemanticError::new(
            SemanticErrorKind::ZeroRepetition,
            source.range(4..6),
        ))
        .into();
        assert_eq!(compile.to_string(), "1:5: repetition of zero not allowed");
    }
}
