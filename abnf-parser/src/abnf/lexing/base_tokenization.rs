//! Base tokenization
//!
//! Runs the logos lexer over the source and then marks every place where two
//! elements touch without whitespace in between. ABNF separates the items of
//! a concatenation with whitespace, so `b"c"` is not a concatenation but a rule
//! that ends after `b`. The zero-width [`Token::MissingSpace`] marker lets the
//! parser reject that input at the right position.
//!
//! The opposite holds for repeat counts and the `&`/`!` predicates: they bind
//! to the element right after them. Blanks in between are marked with
//! [`Token::DetachedOperand`] at the end of the operator.

use super::tokens::Token;
use logos::Logos;
use std::ops::Range;

/// Tokenize source text, returning tokens with their byte ranges.
///
/// Lexer errors become [`Token::Invalid`] tokens, so this never fails.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens: Vec<(Token, Range<usize>)> = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(Token::Invalid);
        let span = lexer.span();
        if let Some((previous, previous_span)) = tokens.last() {
            let end = previous_span.end;
            if previous.ends_element() && token.starts_predicate() && end == span.start {
                tokens.push((Token::MissingSpace, span.start..span.start));
            } else if previous.binds_operand() && end != span.start {
                tokens.push((Token::DetachedOperand, end..end));
            }
        }
        tokens.push((token, span));
    }

    tokens
}

/// Split a token stream into logical lines.
///
/// Each line keeps its terminating [`Token::Newline`] or [`Token::Comment`]. The
/// last line has no terminator when the source does not end with one.
pub fn split_lines(tokens: &[(Token, Range<usize>)]) -> Vec<&[(Token, Range<usize>)]> {
    tokens
        .split_inclusive(|(token, _)| token.is_line_end())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[(Token, Range<usize>)]) -> Vec<Token> {
        tokens.iter().map(|(t, _)| *t).collect()
    }

    #[test]
    fn test_tokenize_preserves_ranges() {
        let source = "ALPHA = %x41-5A / %x61-7A\n";
        let tokens = tokenize(source);
        assert_eq!(tokens[0], (Token::Rulename, 0..5));
        assert_eq!(tokens[2], (Token::HexValue, 8..15));
        assert_eq!(&source[tokens[4].1.clone()], "%x61-7A");
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_invalid_characters() {
        let tokens = tokenize("a = b #\n");
        assert_eq!(tokens[3], (Token::Invalid, 6..7));
    }

    #[test]
    fn test_missing_space_between_elements() {
        let tokens = tokenize("a = b\"c\"\n");
        assert_eq!(
            kinds(&tokens),
            vec![
                Token::Rulename,
                Token::DefinedAs,
                Token::Rulename,
                Token::MissingSpace,
                Token::QuotedString,
                Token::Newline
            ]
        );
        assert_eq!(tokens[3].1, 5..5);
    }

    #[test]
    fn test_no_marker_where_whitespace_is_optional() {
        let tokens = tokenize("a=(b/c) [d] 2*3e\n");
        assert!(!kinds(&tokens).contains(&Token::MissingSpace));
    }

    #[test]
    fn test_detached_operands_are_marked() {
        let tokens = tokenize("a = 3 b & c\n");
        assert_eq!(
            kinds(&tokens),
            vec![
                Token::Rulename,
                Token::DefinedAs,
                Token::Repeat,
                Token::DetachedOperand,
                Token::Rulename,
                Token::And,
                Token::DetachedOperand,
                Token::Rulename,
                Token::Newline
            ]
        );
        assert_eq!(tokens[3].1, 5..5);
        assert_eq!(tokens[6].1, 9..9);

        let tokens = tokenize("a = !1*b &(c)\n");
        assert!(!kinds(&tokens).contains(&Token::DetachedOperand));
    }

    #[test]
    fn test_split_lines() {
        let tokens = tokenize("a = b\n\nc = d ; note\ne = f");
        let lines = split_lines(&tokens);
        assert_eq!(lines.len(), 4);
        assert_eq!(kinds(lines[1]), vec![Token::Newline]);
        assert_eq!(lines[2].last().map(|(t, _)| *t), Some(Token::Comment));
        assert_eq!(lines[3].last().map(|(t, _)| *t), Some(Token::Rulename));
    }
}
