//! Grammar tree nodes
//!
//! Every construct the parser keeps is a [`Node`]: a [`NodeKind`] tag, the
//! exclusively owned children, the source [`Range`] and the source slice it
//! covers. Dispatch over node kinds is done with exhaustive `match`es in the
//! builders and the generator.

use super::range::{Range, SourceText};
use std::fmt;

/// Base of a numeric value (`%b`, `%d`, `%x`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    Binary,
    Decimal,
    Hex,
}

impl Base {
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker.to_ascii_lowercase() {
            'b' => Some(Base::Binary),
            'd' => Some(Base::Decimal),
            'x' => Some(Base::Hex),
            _ => None,
        }
    }

    pub fn is_digit(&self, c: char) -> bool {
        match self {
            Base::Binary => matches!(c, '0' | '1'),
            Base::Decimal => c.is_ascii_digit(),
            Base::Hex => c.is_ascii_hexdigit(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Base::Binary => "binary",
            Base::Decimal => "decimal",
            Base::Hex => "hexadecimal",
        }
    }
}

/// The kind tag of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Rulename,
    /// Single character matcher
    LiteralOne,
    /// Case-sensitive string matcher
    LiteralString,
    /// Case-insensitive string matcher
    LiteralIstring,
    ProseDescription,
    /// One run of digits inside a numeric value
    NumericValue(Base),
    /// The `-value` tail of a numeric range
    NumericRange(Base),
    /// A complete `%b`/`%d`/`%x` value, range or sequence
    NumericType(Base),
    Alternation,
    Option,
    Group,
    RepeatCount,
    Repetition,
    AndPredicate,
    NotPredicate,
    Concatenation,
    AssignmentOperator,
    Rule,
}

impl NodeKind {
    /// Kinds that are replaced by their only child when they have exactly one.
    pub fn folds_singleton(&self) -> bool {
        matches!(
            self,
            NodeKind::Alternation | NodeKind::Group | NodeKind::Concatenation | NodeKind::Repetition
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Rulename => "rulename",
            NodeKind::LiteralOne => "literal-one",
            NodeKind::LiteralString => "literal-string",
            NodeKind::LiteralIstring => "literal-istring",
            NodeKind::ProseDescription => "prose-description",
            NodeKind::NumericValue(_) => "numeric-value",
            NodeKind::NumericRange(_) => "numeric-range",
            NodeKind::NumericType(Base::Binary) => "numeric-type(binary)",
            NodeKind::NumericType(Base::Decimal) => "numeric-type(decimal)",
            NodeKind::NumericType(Base::Hex) => "numeric-type(hex)",
            NodeKind::Alternation => "alternation",
            NodeKind::Option => "option",
            NodeKind::Group => "group",
            NodeKind::RepeatCount => "repeat-count",
            NodeKind::Repetition => "repetition",
            NodeKind::AndPredicate => "and-predicate",
            NodeKind::NotPredicate => "not-predicate",
            NodeKind::Concatenation => "concatenation",
            NodeKind::AssignmentOperator => "assignment-operator",
            NodeKind::Rule => "rule",
        };
        f.write_str(name)
    }
}

/// A grammar tree node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    pub range: Range,
    /// Source text covered by `range`
    pub content: String,
}

impl Node {
    /// Create a childless node covering `span` of the source.
    pub fn leaf(kind: NodeKind, span: std::ops::Range<usize>, source: &SourceText) -> Self {
        Self::with_children(kind, span, source, Vec::new())
    }

    pub fn with_children(
        kind: NodeKind,
        span: std::ops::Range<usize>,
        source: &SourceText,
        children: Vec<Node>,
    ) -> Self {
        let content = source.slice(&span).to_string();
        Self {
            kind,
            children,
            range: source.range(span),
            content,
        }
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    pub fn front(&self) -> Option<&Node> {
        self.children.first()
    }

    pub fn back(&self) -> Option<&Node> {
        self.children.last()
    }

    /// Extend this node's span to end where `other` ends, refreshing `content`.
    pub fn extend_to(&mut self, other: &Range, source: &SourceText) {
        self.range.extend_to(other);
        self.content = source.slice(&self.range.span).to_string();
    }
}

/// Accessors for a node of kind [`NodeKind::Rule`]
///
/// A rule node always has three children: the rulename, the assignment
/// operator and the assignee.
impl Node {
    pub fn rulename(&self) -> Option<&Node> {
        self.children.first().filter(|n| n.is(NodeKind::Rulename))
    }

    pub fn operator(&self) -> Option<&str> {
        self.children
            .get(1)
            .filter(|n| n.is(NodeKind::AssignmentOperator))
            .map(|n| n.content.as_str())
    }

    pub fn assignee(&self) -> Option<&Node> {
        self.children.get(2)
    }

    pub fn assignee_mut(&mut self) -> Option<&mut Node> {
        self.children.get_mut(2)
    }
}
