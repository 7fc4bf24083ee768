//! Semantic resolution
//!
//! - [`names`]: rule name canonicalization, reserved words and the
//!   per-compilation name registry
//! - [`rulelist`]: the ordered list of rules, with duplicate detection and
//!   the splicing of incremental alternations (`=/`)
//!
//! Every problem found here (and by the generator) is a [`SemanticError`]
//! positioned at the offending node.

pub mod names;
pub mod rulelist;

pub use names::{canonical_name, is_reserved, NameRegistry, Resolved, RESERVED_WORDS};
pub use rulelist::Rulelist;

use crate::abnf::ast::{NodeKind, Range};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticErrorKind {
    ReservedName(String),
    DuplicateRule(String),
    MissingPreviousRule(String),
    InvalidOperator(String),
    ZeroRepetition,
    ZeroMaximum,
    MinimumAboveMaximum,
    NumericOutOfRange,
    MissingMapping(NodeKind),
}

impl fmt::Display for SemanticErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticErrorKind::ReservedName(name) => write!(f, "'{}' is a reserved rulename", name),
            SemanticErrorKind::DuplicateRule(name) => {
                write!(f, "rule '{}' is already defined", name)
            }
            SemanticErrorKind::MissingPreviousRule(name) => write!(
                f,
                "incremental alternation '{}' without previous rule definition",
                name
            ),
            SemanticErrorKind::InvalidOperator(op) => {
                write!(f, "invalid operator '{}', this should not happen!", op)
            }
            SemanticErrorKind::ZeroRepetition => f.write_str("repetition of zero not allowed"),
            SemanticErrorKind::ZeroMaximum => {
                f.write_str("repetition maximum of zero not allowed")
            }
            SemanticErrorKind::MinimumAboveMaximum => f.write_str(
                "repetition minimum which is greater than the repetition maximum not allowed",
            ),
            SemanticErrorKind::NumericOutOfRange => f.write_str("numeric value out of range"),
            SemanticErrorKind::MissingMapping(kind) => {
                write!(f, "missing generator mapping for {}", kind)
            }
        }
    }
}

/// A tree-level error, positioned at the node it was found on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub range: Range,
}

impl SemanticError {
    pub fn new(kind: SemanticErrorKind, range: Range) -> Self {
        Self { kind, range }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.range.start.display_one_based(), self.kind)
    }
}

impl std::error::Error for SemanticError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abnf::ast::SourceText;

    #[test]
    fn test_messages() {
        let source = SourceText::new("a = b\nfor = c\n");
        let err = SemanticError::new(
            SemanticErrorKind::ReservedName("for".to_string()),
            source.range(6..9),
        );
        assert_eq!(err.to_string(), "2:1: 'for' is a reserved rulename");

        assert_eq!(
            SemanticErrorKind::MissingPreviousRule("x".to_string()).to_string(),
            "incremental alternation 'x' without previous rule definition"
        );
        assert_eq!(
            SemanticErrorKind::MissingMapping(NodeKind::RepeatCount).to_string(),
            "missing generator mapping for repeat-count"
        );
    }
}
