//! Rule names
//!
//! A rule name becomes a C++ identifier by replacing every `-` with `_`. Names
//! are case-insensitive in ABNF but not in C++, so the spelling of the first
//! occurrence is used for every later reference.

use super::{SemanticError, SemanticErrorKind};
use crate::abnf::ast::{Node, NodeKind};
use std::collections::HashSet;

/// C++ keywords and alternative tokens, which cannot be used as rule names
#[rustfmt::skip]
pub const RESERVED_WORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq",
    "asm", "auto", "bitand", "bitor",
    "bool", "break", "case", "catch",
    "char", "char16_t", "char32_t", "class",
    "compl", "const", "constexpr", "const_cast",
    "continue", "decltype", "default", "delete",
    "do", "double", "dynamic_cast", "else",
    "enum", "explicit", "export", "extern",
    "false", "float", "for", "friend",
    "goto", "if", "inline", "int",
    "long", "mutable", "namespace", "new",
    "noexcept", "not", "not_eq", "nullptr",
    "operator", "or", "or_eq", "private",
    "protected", "public", "register", "reinterpret_cast",
    "return", "short", "signed", "sizeof",
    "static", "static_assert", "static_cast", "struct",
    "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef",
    "typeid", "typename", "union", "unsigned",
    "using", "virtual", "void", "volatile",
    "wchar_t", "while", "xor", "xor_eq",
];

/// The identifier spelling of a rule name.
pub fn canonical_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Key under which a name is compared: canonical and lowercased.
pub fn name_key(name: &str) -> String {
    canonical_name(name).to_ascii_lowercase()
}

/// Whether `name` (already canonical) may not be used as an identifier.
///
/// `extra` holds additional reserved words, compared ignoring case like the
/// built-in ones.
pub fn is_reserved(name: &str, extra: &[String]) -> bool {
    name.contains("__")
        || RESERVED_WORDS.iter().any(|w| w.eq_ignore_ascii_case(name))
        || extra.iter().any(|w| w.eq_ignore_ascii_case(name))
}

/// Outcome of resolving a rulename reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub name: String,
    /// The reference is the first use of a rule defined later in the
    /// rulelist, so a forward declaration has to be emitted before it.
    pub needs_forward_declaration: bool,
}

/// Rule names of one compilation
///
/// `defined` holds every rule the rulelist defines and is only consulted to
/// decide whether a first reference needs a forward declaration. `seen` holds
/// the first-seen spellings in order.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    defined: HashSet<String>,
    seen: Vec<String>,
    extra_reserved: Vec<String>,
}

impl NameRegistry {
    pub fn new(extra_reserved: Vec<String>) -> Self {
        Self {
            extra_reserved,
            ..Self::default()
        }
    }

    /// Record the names defined by `rules` (the pre-pass over the rulelist).
    pub fn define_all<'a>(&mut self, rules: impl IntoIterator<Item = &'a Node>) {
        for rule in rules {
            if let Some(name) = rule.rulename() {
                self.defined.insert(name_key(&name.content));
            }
        }
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.defined.contains(&name_key(name))
    }

    /// The first-seen spelling of `name`, if it has been seen.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let canonical = canonical_name(name);
        self.seen
            .iter()
            .find(|seen| seen.eq_ignore_ascii_case(&canonical))
            .map(String::as_str)
    }

    /// Resolve a rulename node to its identifier.
    ///
    /// The first occurrence of a name is validated and becomes the canonical
    /// spelling. When `forward_declare` is set and the name is defined by the
    /// rulelist, that first occurrence reports that it needs a forward
    /// declaration.
    pub fn resolve(&mut self, node: &Node, forward_declare: bool) -> Result<Resolved, SemanticError> {
        debug_assert!(node.is(NodeKind::Rulename));
        if let Some(seen) = self.lookup(&node.content) {
            return Ok(Resolved {
                name: seen.to_string(),
                needs_forward_declaration: false,
            });
        }

        let name = canonical_name(&node.content);
        if is_reserved(&name, &self.extra_reserved) {
            return Err(SemanticError::new(
                SemanticErrorKind::ReservedName(name),
                node.range.clone(),
            ));
        }

        let needs_forward_declaration = forward_declare && self.is_defined(&name);
        self.seen.push(name.clone());
        Ok(Resolved {
            name,
            needs_forward_declaration,
        })
    }

    pub fn seen(&self) -> &[String] {
        &self.seen
    }
}
