//! Numeric value nodes
//!
//! A `%b`, `%d` or `%x` token is split into a [`NodeKind::NumericType`] node
//! with one [`NodeKind::NumericValue`] child per digit run. For a range
//! (`%x41-5A`) the upper bound is wrapped in a [`NodeKind::NumericRange`] node:
//!
//! ```text
//! %x41-5A     NumericType [ NumericValue(41), NumericRange [ NumericValue(5A) ] ]
//! %d13.10     NumericType [ NumericValue(13), NumericValue(10) ]
//! ```
//!
//! The lexer accepts base specifiers without digits so the missing digits can
//! be reported at the exact byte where they are expected.

use crate::abnf::ast::{Base, Node, NodeKind, SourceText};
use crate::abnf::lexing::Token;
use std::ops::Range as ByteRange;

/// Digits were expected at `byte` but none were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingDigits {
    pub base: Base,
    pub byte: usize,
}

pub fn base_of(token: Token) -> Option<Base> {
    match token {
        Token::BinaryValue => Some(Base::Binary),
        Token::DecimalValue => Some(Base::Decimal),
        Token::HexValue => Some(Base::Hex),
        _ => None,
    }
}

/// Build the node for a numeric value token covering `span`.
pub fn numeric_value(
    base: Base,
    span: ByteRange<usize>,
    source: &SourceText,
) -> Result<Node, MissingDigits> {
    let text = source.slice(&span).as_bytes();
    // Skip the `%` and the base letter
    let mut pos = 2;
    let mut children = Vec::new();

    let first = digit_run(base, text, pos);
    if first == pos {
        return Err(MissingDigits {
            base,
            byte: span.start + pos,
        });
    }
    children.push(value(base, span.start + pos..span.start + first, source));
    pos = first;

    match text.get(pos) {
        Some(b'-') => {
            let end = digit_run(base, text, pos + 1);
            if end == pos + 1 {
                return Err(MissingDigits {
                    base,
                    byte: span.start + end,
                });
            }
            let upper = value(base, span.start + pos + 1..span.start + end, source);
            children.push(Node::with_children(
                NodeKind::NumericRange(base),
                span.start + pos..span.start + end,
                source,
                vec![upper],
            ));
        }
        Some(b'.') => {
            while text.get(pos) == Some(&b'.') {
                let end = digit_run(base, text, pos + 1);
                if end == pos + 1 {
                    return Err(MissingDigits {
                        base,
                        byte: span.start + end,
                    });
                }
                children.push(value(base, span.start + pos + 1..span.start + end, source));
                pos = end;
            }
        }
        _ => {}
    }

    Ok(Node::with_children(
        NodeKind::NumericType(base),
        span,
        source,
        children,
    ))
}

fn value(base: Base, span: ByteRange<usize>, source: &SourceText) -> Node {
    Node::leaf(NodeKind::NumericValue(base), span, source)
}

/// End of the run of `base` digits starting at `from`.
fn digit_run(base: Base, text: &[u8], from: usize) -> usize {
    let mut end = from;
    while end < text.len() && base.is_digit(text[end] as char) {
        end += 1;
    }
    end
}
