//! Parse diagnostics
//!
//! [`ParseError`] is the error type threaded through the chumsky combinators.
//! It starts out as [`ParseErrorKind::Unexpected`] and is escalated to a
//! specific diagnostic by [`must`](super::combinators::must) once the parser is
//! past the opening token of a construct. When chumsky merges two errors found
//! at the same position, the more specific kind is kept (see
//! [`ParseErrorKind::rank`]).
//!
//! Errors are positioned by token index while parsing. The engine converts them
//! into a [`ParseDiagnostic`] with a byte position once a line fails.

use crate::abnf::ast::{Base, Range, SourceText};
use crate::abnf::lexing::{Token, TokenLocation};
use std::fmt;
use std::ops::Range as TokenSpan;

/// What went wrong while parsing a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnterminatedComment,
    UnterminatedString,
    UnterminatedProse,
    /// Digits missing after a base specifier, `-` or `.`
    ExpectedValue(Base),
    ExpectedBase,
    UnterminatedOption,
    UnterminatedGroup,
    UnterminatedRule,
    ExpectedDefinedAs,
    ExpectedElement,
    ExpectedRule,
    /// Not yet attributed to a construct
    Unexpected,
}

impl ParseErrorKind {
    /// Specificity used when two errors meet at the same position.
    pub fn rank(&self) -> u8 {
        match self {
            ParseErrorKind::UnterminatedComment => 8,
            ParseErrorKind::UnterminatedString
            | ParseErrorKind::UnterminatedProse
            | ParseErrorKind::ExpectedValue(_)
            | ParseErrorKind::ExpectedBase => 7,
            ParseErrorKind::UnterminatedOption | ParseErrorKind::UnterminatedGroup => 6,
            ParseErrorKind::UnterminatedRule => 5,
            ParseErrorKind::ExpectedDefinedAs => 4,
            ParseErrorKind::ExpectedElement => 3,
            ParseErrorKind::ExpectedRule => 2,
            ParseErrorKind::Unexpected => 0,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParseErrorKind::UnterminatedComment => "unterminated comment".to_string(),
            ParseErrorKind::UnterminatedString => {
                "unterminated string (missing '\"')".to_string()
            }
            ParseErrorKind::UnterminatedProse => {
                "unterminated prose description (missing '>')".to_string()
            }
            ParseErrorKind::ExpectedValue(base) => format!("expected {} value", base.name()),
            ParseErrorKind::ExpectedBase => {
                "expected base specifier (one of 'bBdDxX')".to_string()
            }
            ParseErrorKind::UnterminatedOption => "unterminated option (missing ']')".to_string(),
            ParseErrorKind::UnterminatedGroup => "unterminated group (missing ')')".to_string(),
            ParseErrorKind::UnterminatedRule => "unterminated rule".to_string(),
            ParseErrorKind::ExpectedDefinedAs => "expected '=' or '=/'".to_string(),
            ParseErrorKind::ExpectedElement => "expected element".to_string(),
            ParseErrorKind::ExpectedRule => "expected rule".to_string(),
            ParseErrorKind::Unexpected => "unexpected input".to_string(),
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// The chumsky error type of the line parser
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Token index span of the offending token
    pub span: TokenSpan<usize>,
    /// Byte offset of the error when it is not the start of the offending token
    pub byte: Option<usize>,
    pub found: Option<Token>,
    pub label: Option<&'static str>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: TokenSpan<usize>) -> Self {
        Self {
            kind,
            span,
            byte: None,
            found: None,
            label: None,
        }
    }

    /// Position the error at an explicit byte offset.
    pub fn at_byte(mut self, byte: usize) -> Self {
        self.byte = Some(byte);
        self
    }

    /// Attribute an unexpected-input error to a construct.
    ///
    /// Errors that already carry a specific kind are left alone, so the
    /// innermost attribution wins.
    pub fn escalate(mut self, kind: ParseErrorKind) -> Self {
        if self.kind == ParseErrorKind::Unexpected {
            self.kind = kind;
        }
        self
    }

    /// Resolve the error to a source position.
    ///
    /// `tokens` is the line the parser was run on; an error at its end is
    /// positioned at `end_of_input`.
    pub fn into_diagnostic(
        self,
        tokens: &[TokenLocation],
        source: &SourceText,
        end_of_input: usize,
    ) -> ParseDiagnostic {
        let byte = self.byte.unwrap_or_else(|| match tokens.get(self.span.start) {
            // The comment body starts after the `;`
            Some((Token::UnterminatedComment, range)) => range.start + 1,
            Some((_, range)) => range.start,
            None => end_of_input,
        });
        ParseDiagnostic::new(self.kind, source.range(byte..byte))
    }
}

impl chumsky::Error<TokenLocation> for ParseError {
    type Span = TokenSpan<usize>;
    type Label = &'static str;

    fn expected_input_found<Iter: IntoIterator<Item = Option<TokenLocation>>>(
        span: Self::Span,
        _expected: Iter,
        found: Option<TokenLocation>,
    ) -> Self {
        let found = found.map(|(token, _)| token);
        let kind = match found {
            Some(Token::UnterminatedComment) => ParseErrorKind::UnterminatedComment,
            _ => ParseErrorKind::Unexpected,
        };
        Self {
            kind,
            span,
            byte: None,
            found,
            label: None,
        }
    }

    fn with_label(mut self, label: Self::Label) -> Self {
        self.label.get_or_insert(label);
        self
    }

    fn merge(self, other: Self) -> Self {
        if other.kind.rank() > self.kind.rank() {
            other
        } else {
            self
        }
    }
}

/// A parse failure resolved to a source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub kind: ParseErrorKind,
    pub range: Range,
}

impl ParseDiagnostic {
    pub fn new(kind: ParseErrorKind, range: Range) -> Self {
        Self { kind, range }
    }

    pub fn message(&self) -> String {
        self.kind.message()
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.range.start.display_one_based(),
            self.kind
        )
    }
}

impl std::error::Error for ParseDiagnostic {}

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::Error as _;

    #[test]
    fn test_merge_keeps_most_specific_kind() {
        let generic = ParseError::new(ParseErrorKind::Unexpected, 2..3);
        let group = ParseError::new(ParseErrorKind::UnterminatedGroup, 2..3);
        let element = ParseError::new(ParseErrorKind::ExpectedElement, 2..3);

        assert_eq!(generic.clone().merge(group.clone()).kind, ParseErrorKind::UnterminatedGroup);
        assert_eq!(group.clone().merge(element.clone()).kind, ParseErrorKind::UnterminatedGroup);
        assert_eq!(element.merge(generic).kind, ParseErrorKind::ExpectedElement);
    }

    #[test]
    fn test_escalate_only_replaces_unexpected() {
        let err = ParseError::new(ParseErrorKind::Unexpected, 0..1)
            .escalate(ParseErrorKind::ExpectedElement)
            .escalate(ParseErrorKind::ExpectedRule);
        assert_eq!(err.kind, ParseErrorKind::ExpectedElement);
    }

    #[test]
    fn test_found_unterminated_comment() {
        let err = ParseError::expected_input_found(
            3..4,
            Vec::new(),
            Some((Token::UnterminatedComment, 6..12)),
        );
        assert_eq!(err.kind, ParseErrorKind::UnterminatedComment);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ParseErrorKind::ExpectedValue(Base::Hex).message(),
            "expected hexadecimal value"
        );
        assert_eq!(
            ParseErrorKind::UnterminatedString.message(),
            "unterminated string (missing '\"')"
        );
        assert_eq!(
            ParseErrorKind::ExpectedBase.message(),
            "expected base specifier (one of 'bBdDxX')"
        );
    }

    #[test]
    fn test_diagnostic_position() {
        let source = SourceText::new("a = b ; open");
        let tokens = vec![
            (Token::Rulename, 0..1),
            (Token::DefinedAs, 2..3),
            (Token::Rulename, 4..5),
            (Token::UnterminatedComment, 6..12),
        ];
        let err = ParseError::new(ParseErrorKind::UnterminatedComment, 3..4);
        let diagnostic = err.into_diagnostic(&tokens, &source, source.len());
        assert_eq!(diagnostic.to_string(), "1:8: unterminated comment");

        let err = ParseError::new(ParseErrorKind::UnterminatedRule, 4..5);
        let diagnostic = err.into_diagnostic(&tokens, &source, source.len());
        assert_eq!(diagnostic.range.start.column, 12);
    }
}
