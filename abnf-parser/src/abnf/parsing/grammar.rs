//! ABNF line grammar
//!
//! The grammar is applied to one logical line at a time (see
//! [`split_lines`](crate::abnf::lexing::split_lines)). A line is either blank
//! or a rule:
//!
//! ```text
//! line          = line-end / rule
//! rule          = rulename defined-as alternation line-end
//! defined-as    = "=" / "=/"
//! alternation   = concatenation *("/" concatenation)
//! concatenation = predicate *predicate
//! predicate     = ("&" / "!") repetition / repetition
//! repetition    = [repeat] element
//! element       = rulename / group / option / char-val / num-val / prose-val
//! group         = "(" alternation ")"
//! option        = "[" alternation "]"
//! ```
//!
//! Alternatives are ordered, the first match wins. Once the opening token of
//! a construct matched, a failure is reported with the construct's diagnostic
//! through [`must`]. The same grammar is described as data in
//! [`analysis`](super::analysis) for the self-check.

use super::combinators::{must, reject, token, token_where};
use super::error::{ParseError, ParseErrorKind};
use crate::abnf::ast::{Node, NodeKind, SourceText};
use crate::abnf::building::{builders, numeric};
use crate::abnf::lexing::{Token, TokenLocation};
use chumsky::prelude::*;
use std::sync::Arc;

/// Parser for one logical line: `None` for a blank line, the rule node otherwise.
pub fn line(
    source: Arc<SourceText>,
) -> impl Parser<TokenLocation, Option<Node>, Error = ParseError> + Clone {
    let line_end = token_where(Token::is_line_end).ignored();

    choice((
        line_end.to(None),
        must(rule(source), ParseErrorKind::ExpectedRule).map(Some),
    ))
    .then_ignore(end())
}

/// `rulename defined-as alternation line-end`
pub fn rule(
    source: Arc<SourceText>,
) -> impl Parser<TokenLocation, Node, Error = ParseError> + Clone {
    let name = {
        let source = source.clone();
        token(Token::Rulename).map(move |(_, range)| builders::rulename(range, &source))
    };
    let defined_as = {
        let source = source.clone();
        token_where(|t| matches!(t, Token::DefinedAs | Token::IncrementalAs))
            .map(move |(_, range)| builders::assignment_operator(range, &source))
    };
    let line_end = token_where(Token::is_line_end).ignored();

    name.then(must(defined_as, ParseErrorKind::ExpectedDefinedAs))
        .then(must(alternation(source.clone()), ParseErrorKind::ExpectedElement))
        .then_ignore(must(line_end, ParseErrorKind::UnterminatedRule))
        .map(move |((name, operator), assignee)| {
            builders::rule(name, operator, assignee, &source)
        })
}

/// `concatenation *("/" concatenation)`, recursive through groups and options
pub fn alternation(
    source: Arc<SourceText>,
) -> impl Parser<TokenLocation, Node, Error = ParseError> + Clone {
    recursive(move |alternation| {
        let element = element(source.clone(), alternation);

        let repetition = {
            let source = source.clone();
            token(Token::Repeat)
                .map(|(_, range)| Some(range))
                .then(must(element.clone(), ParseErrorKind::ExpectedElement))
                .or(element.map(|element| (None, element)))
                .map(move |(count, element)| builders::repetition(count, element, &source))
        };

        let predicate = {
            let source = source.clone();
            token_where(|t| matches!(t, Token::And | Token::Not))
                .then(must(repetition.clone(), ParseErrorKind::ExpectedElement))
                .map(move |((operator, range), inner)| {
                    let kind = if operator == Token::And {
                        NodeKind::AndPredicate
                    } else {
                        NodeKind::NotPredicate
                    };
                    builders::predicate(kind, range, inner, &source)
                })
                .or(repetition)
        };

        let concatenation = {
            let source = source.clone();
            predicate
                .repeated()
                .at_least(1)
                .map(move |items| builders::concatenation(items, &source))
        };

        let source = source.clone();
        concatenation
            .clone()
            .then(
                token(Token::Slash)
                    .ignore_then(must(concatenation, ParseErrorKind::ExpectedElement))
                    .repeated(),
            )
            .map(move |(first, rest)| builders::alternation(first, rest, &source))
    })
}

/// `rulename / group / option / char-val / num-val / prose-val`
///
/// Error tokens produced by the lexer are matched here too, so that their
/// diagnostics are raised where an element is expected.
fn element<P>(
    source: Arc<SourceText>,
    alternation: P,
) -> impl Parser<TokenLocation, Node, Error = ParseError> + Clone
where
    P: Parser<TokenLocation, Node, Error = ParseError> + Clone,
{
    let rulename = {
        let source = source.clone();
        token(Token::Rulename).map(move |(_, range)| builders::rulename(range, &source))
    };

    let group = {
        let source = source.clone();
        token(Token::OpenParen)
            .then(must(alternation.clone(), ParseErrorKind::ExpectedElement))
            .then(must(token(Token::CloseParen), ParseErrorKind::UnterminatedGroup))
            .map(move |(((_, open), inner), (_, close))| {
                builders::group(open, inner, close, &source)
            })
    };

    let option = {
        let source = source.clone();
        token(Token::OpenBracket)
            .then(must(alternation, ParseErrorKind::ExpectedElement))
            .then(must(token(Token::CloseBracket), ParseErrorKind::UnterminatedOption))
            .map(move |(((_, open), inner), (_, close))| {
                builders::option(open, inner, close, &source)
            })
    };

    let quoted_string = {
        let source = source.clone();
        token(Token::QuotedString).map(move |(_, range)| builders::quoted_string(range, &source))
    };

    let case_sensitive_string = {
        let source = source.clone();
        token(Token::CaseSensitiveString)
            .map(move |(_, range)| builders::case_sensitive_string(range, &source))
    };

    let num_val = {
        let source = source.clone();
        token_where(Token::is_numeric).try_map(move |(tok, range), span| {
            let base = numeric::base_of(tok)
                .ok_or_else(|| ParseError::new(ParseErrorKind::Unexpected, span.clone()))?;
            numeric::numeric_value(base, range, &source).map_err(|missing| {
                ParseError::new(ParseErrorKind::ExpectedValue(missing.base), span)
                    .at_byte(missing.byte)
            })
        })
    };

    let prose = {
        let source = source.clone();
        token(Token::Prose).map(move |(_, range)| builders::prose(range, &source))
    };

    let unterminated_string = {
        let source = source.clone();
        reject::<Node, _>(
            Token::UnterminatedString,
            ParseErrorKind::UnterminatedString,
            move |range| {
                let quote = source.slice(range).find('"').unwrap_or(0);
                range.start + quote + 1
            },
        )
    };

    choice((
        rulename,
        group,
        option,
        quoted_string,
        case_sensitive_string,
        num_val,
        prose,
        unterminated_string,
        reject::<Node, _>(
            Token::UnterminatedProse,
            ParseErrorKind::UnterminatedProse,
            |range| range.start + 1,
        ),
        reject::<Node, _>(Token::Percent, ParseErrorKind::ExpectedBase, |range| range.end),
    ))
}
