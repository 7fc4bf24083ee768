//! Token-level parser combinators
//!
//! Small helpers shared by the grammar: matching a token kind, turning an
//! error token into its diagnostic, and [`must`], which attributes a failure
//! to the construct being parsed.

use super::error::{ParseError, ParseErrorKind};
use crate::abnf::lexing::{Token, TokenLocation};
use chumsky::prelude::*;
use std::ops::Range as ByteRange;

/// Match a specific token kind, keeping the token and its byte range
pub(crate) fn token(
    kind: Token,
) -> impl Parser<TokenLocation, TokenLocation, Error = ParseError> + Clone {
    filter(move |(tok, _): &TokenLocation| *tok == kind)
}

/// Match any token accepted by `predicate`
pub(crate) fn token_where<F>(
    predicate: F,
) -> impl Parser<TokenLocation, TokenLocation, Error = ParseError> + Clone
where
    F: Fn(&Token) -> bool + Clone,
{
    filter(move |(tok, _): &TokenLocation| predicate(tok))
}

/// Once a construct has been opened, a failure of `parser` is reported as
/// `kind` instead of a generic unexpected token.
pub(crate) fn must<P, O>(
    parser: P,
    kind: ParseErrorKind,
) -> impl Parser<TokenLocation, O, Error = ParseError> + Clone
where
    P: Parser<TokenLocation, O, Error = ParseError> + Clone,
{
    parser.map_err(move |err: ParseError| err.escalate(kind))
}

/// Match an error token and fail with `kind`.
///
/// `position` maps the token's byte range to the byte where the diagnostic
/// points.
pub(crate) fn reject<O, F>(
    kind_of_token: Token,
    kind: ParseErrorKind,
    position: F,
) -> impl Parser<TokenLocation, O, Error = ParseError> + Clone
where
    F: Fn(&ByteRange<usize>) -> usize + Clone,
{
    token(kind_of_token).try_map(move |(_, range), span| {
        Err(ParseError::new(kind, span).at_byte(position(&range)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(tokens: &[Token]) -> Vec<TokenLocation> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (*t, i * 2..i * 2 + 1))
            .collect()
    }

    #[test]
    fn test_token_matches_kind() {
        let parser = token(Token::Slash);
        let result = parser.parse(stream(&[Token::Slash]));
        assert_eq!(result, Ok((Token::Slash, 0..1)));
        assert!(parser.parse(stream(&[Token::Rulename])).is_err());
    }

    #[test]
    fn test_must_escalates_failure() {
        let parser = token(Token::Rulename).then(must(token(Token::DefinedAs), ParseErrorKind::ExpectedDefinedAs));
        let errors = parser
            .parse(stream(&[Token::Rulename, Token::Rulename]))
            .unwrap_err();
        assert_eq!(errors[0].kind, ParseErrorKind::ExpectedDefinedAs);
        assert_eq!(errors[0].span, 1..2);
    }

    #[test]
    fn test_reject_positions_diagnostic() {
        let parser = reject::<(), _>(
            Token::UnterminatedString,
            ParseErrorKind::UnterminatedString,
            |range| range.start + 1,
        );
        let errors = parser
            .parse(vec![(Token::UnterminatedString, 4..9)])
            .unwrap_err();
        assert_eq!(errors[0].kind, ParseErrorKind::UnterminatedString);
        assert_eq!(errors[0].byte, Some(5));
    }
}
