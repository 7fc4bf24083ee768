//! Compilation errors
//!
//! Every stage reports its own error type. [`CompileError`] collects them so
//! callers deal with one type; its `Display` renders `line:column: message`
//! with 1-based positions for everything found in the source.

use crate::abnf::parsing::ParseDiagnostic;
use crate::abnf::resolve::SemanticError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The grammar source could not be read
    Io(String),
    /// Syntax error
    Parse(ParseDiagnostic),
    /// The grammar is well-formed but cannot be compiled
    Semantic(SemanticError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Io(msg) => write!(f, "{}", msg),
            CompileError::Parse(err) => write!(f, "{}", err),
            CompileError::Semantic(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<ParseDiagnostic> for CompileError {
    fn from(err: ParseDiagnostic) -> Self {
        CompileError::Parse(err)
    }
}

impl From<SemanticError> for CompileError {
    fn from(err: SemanticError) -> Self {
        CompileError::Semantic(err)
    }
}

impl From<std::io::Error> for CompileError {
    fn from(err: std::io::Error) -> Self {
        CompileError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abnf::ast::SourceText;
    use crate::abnf::parsing::ParseErrorKind;
    use crate::abnf::resolve::SemanticErrorKind;

    #[test]
    fn test_display_is_positioned() {
        let source = SourceText::new("a = b\nc = 0d\n");
        let parse: CompileError =
            ParseDiagnostic::new(ParseErrorKind::UnterminatedRule, source.range(5..5)).into();
        assert_eq!(parse.to_string(), "1:6: unterminated rule");

        let semantic: CompileError =
            SemanticError::new(SemanticErrorKind::ZeroRepetition, source.range(10..12)).into();
        assert_eq!(semantic.to_string(), "2:5: repetition of zero not allowed");
    }

    #[test]
    fn test_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CompileError = io.into();
        assert_eq!(err, CompileError::Io("no such file".to_string()));
        assert_eq!(err.to_string(), "no such file");
    }
}
