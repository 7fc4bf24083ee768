//! The rulelist
//!
//! Rules are appended in source order. Appending validates the assignment
//! operator against the rules already present:
//!
//! - `=` defines a new rule; a name that already exists (ignoring case) is an
//!   error;
//! - `=/` extends an existing rule with more alternatives. The previous
//!   rule's assignee is turned into an alternation if it is not one already,
//!   and the new alternatives are moved into it. The previous rule keeps its
//!   place in the list; the new rule node is dropped.

use super::names::{canonical_name, name_key};
use super::{SemanticError, SemanticErrorKind};
use crate::abnf::ast::{Node, NodeKind, SourceText};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// Ordered top-level rules of a grammar
#[derive(Debug, Clone)]
pub struct Rulelist {
    rules: Vec<Node>,
    /// Name key to index in `rules`
    index: HashMap<String, usize>,
    source: Arc<SourceText>,
}

impl Rulelist {
    pub fn new(source: Arc<SourceText>) -> Self {
        Self {
            rules: Vec::new(),
            index: HashMap::new(),
            source,
        }
    }

    pub fn rules(&self) -> &[Node] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn source(&self) -> &SourceText {
        &self.source
    }

    /// Append a rule node, merging incremental alternations.
    pub fn append(&mut self, mut rule: Node) -> Result<(), SemanticError> {
        let name = rule
            .rulename()
            .map(|n| canonical_name(&n.content))
            .unwrap_or_default();
        let key = name_key(&name);
        let operator = rule.operator().unwrap_or_default().to_string();

        match operator.as_str() {
            "=" => {
                if self.index.contains_key(&key) {
                    return Err(SemanticError::new(
                        SemanticErrorKind::DuplicateRule(name),
                        rule.range.clone(),
                    ));
                }
                trace!(rule = %name, "appending rule");
                self.index.insert(key, self.rules.len());
                self.rules.push(rule);
                Ok(())
            }
            "=/" => {
                let Some(&position) = self.index.get(&key) else {
                    return Err(SemanticError::new(
                        SemanticErrorKind::MissingPreviousRule(name),
                        rule.range.clone(),
                    ));
                };
                let Some(addition) = rule.children.pop() else {
                    return Ok(());
                };
                trace!(rule = %name, "merging incremental alternation");
                self.merge(position, addition);
                Ok(())
            }
            _ => Err(SemanticError::new(
                SemanticErrorKind::InvalidOperator(operator),
                rule.range.clone(),
            )),
        }
    }

    /// Splice `addition` into the assignee of the rule at `position`.
    fn merge(&mut self, position: usize, mut addition: Node) {
        let source = Arc::clone(&self.source);
        let Some(previous) = self.rules[position].assignee_mut() else {
            return;
        };

        if !previous.is(NodeKind::Alternation) {
            let wrapper =
                Node::with_children(NodeKind::Alternation, previous.range.span.clone(), &source, Vec::new());
            let assignee = std::mem::replace(previous, wrapper);
            previous.children.push(assignee);
        }

        previous.extend_to(&addition.range, &source);
        if addition.is(NodeKind::Alternation) {
            previous.children.append(&mut addition.children);
        } else {
            previous.children.push(addition);
        }
    }
}
