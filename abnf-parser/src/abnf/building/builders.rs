//! Node builders
//!
//! The grammar calls these as soon as a production matches. They create the
//! [`Node`] for the production and apply its transformation right away:
//!
//! - alternation, group, concatenation and repetition are replaced by their
//!   only child when they have exactly one;
//! - quoted strings lose their delimiters and are classified as
//!   literal-one, literal-string or literal-istring;
//! - every other kept production becomes a node as is.

use crate::abnf::ast::{Node, NodeKind, SourceText};
use std::ops::Range as ByteRange;

/// Classify the content of a quoted string.
///
/// Case-sensitive strings (`%s"..."`) are classified by length only. Any other
/// string containing a letter has to be matched case-insensitively.
pub fn classify_literal(content: &str, case_sensitive: bool) -> NodeKind {
    if !case_sensitive && content.chars().any(|c| c.is_ascii_alphabetic()) {
        return NodeKind::LiteralIstring;
    }
    if content.chars().count() == 1 {
        NodeKind::LiteralOne
    } else {
        NodeKind::LiteralString
    }
}

/// Replace a foldable node by its only child.
pub fn fold_if_singleton(mut node: Node) -> Node {
    if node.kind.folds_singleton() && node.children.len() == 1 {
        if let Some(child) = node.children.pop() {
            return child;
        }
    }
    node
}

pub fn rulename(span: ByteRange<usize>, source: &SourceText) -> Node {
    Node::leaf(NodeKind::Rulename, span, source)
}

pub fn assignment_operator(span: ByteRange<usize>, source: &SourceText) -> Node {
    Node::leaf(NodeKind::AssignmentOperator, span, source)
}

pub fn prose(span: ByteRange<usize>, source: &SourceText) -> Node {
    Node::leaf(NodeKind::ProseDescription, span, source)
}

/// `"..."` or `%i"..."`
pub fn quoted_string(span: ByteRange<usize>, source: &SourceText) -> Node {
    let inner = string_body(&span, source);
    let kind = classify_literal(source.slice(&inner), false);
    Node::leaf(kind, inner, source)
}

/// `%s"..."`
pub fn case_sensitive_string(span: ByteRange<usize>, source: &SourceText) -> Node {
    let inner = string_body(&span, source);
    let kind = classify_literal(source.slice(&inner), true);
    Node::leaf(kind, inner, source)
}

/// The span between the quotes, skipping an optional `%s`/`%i` marker.
fn string_body(span: &ByteRange<usize>, source: &SourceText) -> ByteRange<usize> {
    let marker = if source.slice(span).starts_with('%') { 2 } else { 0 };
    let start = (span.start + marker + 1).min(span.end);
    let end = span.end.saturating_sub(1).max(start);
    start..end
}

pub fn repetition(count: Option<ByteRange<usize>>, element: Node, source: &SourceText) -> Node {
    match count {
        Some(count) => {
            let span = count.start..element.range.span.end;
            let children = vec![Node::leaf(NodeKind::RepeatCount, count, source), element];
            fold_if_singleton(Node::with_children(NodeKind::Repetition, span, source, children))
        }
        None => element,
    }
}

/// `&x` or `!x`
pub fn predicate(
    kind: NodeKind,
    operator: ByteRange<usize>,
    inner: Node,
    source: &SourceText,
) -> Node {
    let span = operator.start..inner.range.span.end;
    Node::with_children(kind, span, source, vec![inner])
}

pub fn concatenation(items: Vec<Node>, source: &SourceText) -> Node {
    fold_if_singleton(spanning(NodeKind::Concatenation, items, source))
}

pub fn alternation(first: Node, rest: Vec<Node>, source: &SourceText) -> Node {
    let mut items = Vec::with_capacity(rest.len() + 1);
    items.push(first);
    items.extend(rest);
    fold_if_singleton(spanning(NodeKind::Alternation, items, source))
}

pub fn group(
    open: ByteRange<usize>,
    inner: Node,
    close: ByteRange<usize>,
    source: &SourceText,
) -> Node {
    let node = Node::with_children(NodeKind::Group, open.start..close.end, source, vec![inner]);
    fold_if_singleton(node)
}

pub fn option(
    open: ByteRange<usize>,
    inner: Node,
    close: ByteRange<usize>,
    source: &SourceText,
) -> Node {
    Node::with_children(NodeKind::Option, open.start..close.end, source, vec![inner])
}

pub fn rule(name: Node, operator: Node, assignee: Node, source: &SourceText) -> Node {
    let span = name.range.span.start..assignee.range.span.end;
    Node::with_children(NodeKind::Rule, span, source, vec![name, operator, assignee])
}

/// A node spanning from its first to its last child.
fn spanning(kind: NodeKind, children: Vec<Node>, source: &SourceText) -> Node {
    let start = children.first().map_or(0, |n| n.range.span.start);
    let end = children.last().map_or(start, |n| n.range.span.end);
    Node::with_children(kind, start..end, source, children)
}
