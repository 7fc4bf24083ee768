//! Parser engine
//!
//! Drives the line grammar over a token stream. Lines are parsed in source
//! order and every rule is appended to the [`Rulelist`] as soon as it has been
//! parsed, so a duplicate definition is reported before a syntax error further
//! down in the file.

use super::error::{ParseDiagnostic, ParseError, ParseErrorKind};
use super::grammar;
use crate::abnf::ast::SourceText;
use crate::abnf::error::CompileError;
use crate::abnf::lexing::{split_lines, tokenize, Token, TokenLocation};
use crate::abnf::resolve::Rulelist;
use chumsky::Parser;
use std::sync::Arc;
use tracing::{debug, trace};

/// Parse grammar source text into a rulelist.
pub fn parse_rulelist(source: &str) -> Result<Rulelist, CompileError> {
    let tokens = tokenize(source);
    parse_from_tokens(&tokens, source)
}

/// Parse an already tokenized grammar.
pub fn parse_from_tokens(tokens: &[TokenLocation], source: &str) -> Result<Rulelist, CompileError> {
    let source = Arc::new(SourceText::new(source));
    let parser = grammar::line(source.clone());
    let mut rulelist = Rulelist::new(source.clone());
    let mut line_start = 0;

    debug!(tokens = tokens.len(), "parsing grammar");

    for line in split_lines(tokens) {
        check_line_start(line, line_start, &source)?;

        match parser.parse(line.to_vec()) {
            Ok(Some(rule)) => {
                trace!(rule = %rule.content, "parsed rule");
                rulelist.append(rule)?;
            }
            Ok(None) => {}
            Err(errors) => {
                let error = errors
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| ParseError::new(ParseErrorKind::Unexpected, 0..1));
                return Err(error.into_diagnostic(line, &source, source.len()).into());
            }
        }

        if let Some((_, range)) = line.last() {
            line_start = range.end;
        }
    }

    debug!(rules = rulelist.len(), "parsed grammar");
    Ok(rulelist)
}

/// A rule has to start in the first column.
///
/// Whitespace in front of a line ending (or of an unterminated trailing
/// comment) is a blank line and allowed.
fn check_line_start(
    line: &[TokenLocation],
    line_start: usize,
    source: &SourceText,
) -> Result<(), ParseDiagnostic> {
    match line.first() {
        Some((token, range))
            if !token.is_line_end()
                && *token != Token::UnterminatedComment
                && range.start != line_start =>
        {
            Err(ParseDiagnostic::new(
                ParseErrorKind::ExpectedRule,
                source.range(line_start..line_start),
            ))
        }
        _ => Ok(()),
    }
}
