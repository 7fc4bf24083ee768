//! PEGTL code generation
//!
//! Every rule of the rulelist becomes one C++ statement:
//!
//! ```text
//! rule1 = "ab" / %x41
//! struct rule1 : tao::pegtl::sor< tao::pegtl::istring< 'a', 'b' >, tao::pegtl::one< 0x41 > > {};
//! ```
//!
//! A reference to a rule that is defined further down is preceded by a
//! forward declaration (`struct name;`) the first time it is used. Rule names
//! are case-insensitive, so every reference is spelled the way the name was
//! first seen.
//!
//! - [`literals`]: character lists and numeric values
//! - [`repetition`]: repeat counts

pub mod literals;
pub mod repetition;

use crate::abnf::ast::{Base, Node, NodeKind};
use crate::abnf::resolve::{NameRegistry, Rulelist, SemanticError, SemanticErrorKind};
use tracing::{debug, trace};

/// Generator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Namespace qualifier put in front of every PEGTL rule
    pub prefix: String,
    /// Emit `struct name;` before the first use of a rule defined later
    pub forward_declarations: bool,
    /// Identifiers rejected as rule names on top of the C++ keywords
    pub reserved: Vec<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            prefix: "tao::pegtl::".to_string(),
            forward_declarations: true,
            reserved: Vec::new(),
        }
    }
}

/// Generate the statements for a rulelist.
pub fn generate(rulelist: &Rulelist, options: &GeneratorOptions) -> Result<Vec<String>, SemanticError> {
    let mut generator = Generator::new(options);
    generator.define_all(rulelist);

    let mut lines = Vec::with_capacity(rulelist.len());
    for rule in rulelist.rules() {
        lines.extend(generator.emit_rule(rule)?);
    }

    debug!(rules = rulelist.len(), lines = lines.len(), "generated rules");
    Ok(lines)
}

/// Per-compilation generator state
pub struct Generator<'a> {
    options: &'a GeneratorOptions,
    names: NameRegistry,
    /// Forward declarations collected while rendering the current rule
    pending: Vec<String>,
}

impl<'a> Generator<'a> {
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self {
            options,
            names: NameRegistry::new(options.reserved.clone()),
            pending: Vec::new(),
        }
    }

    /// Register the rules that will be defined, so that references to them
    /// can be forward declared.
    pub fn define_all(&mut self, rulelist: &Rulelist) {
        self.names.define_all(rulelist.rules());
    }

    /// The lines for one rule: its forward declarations, then the definition.
    pub fn emit_rule(&mut self, rule: &Node) -> Result<Vec<String>, SemanticError> {
        let statement = self.render(rule)?;
        let mut lines = std::mem::take(&mut self.pending);
        trace!(forward = lines.len(), "emitting rule");
        lines.push(statement);
        Ok(lines)
    }

    fn render(&mut self, node: &Node) -> Result<String, SemanticError> {
        let options = self.options;
        let prefix = options.prefix.as_str();
        match node.kind {
            NodeKind::Rule => self.render_rule(node),
            NodeKind::Rulename => self.reference(node),
            NodeKind::LiteralOne => Ok(format!(
                "{}one< {} >",
                prefix,
                literals::render_chars(&node.content)
            )),
            NodeKind::LiteralString => Ok(format!(
                "{}string< {} >",
                prefix,
                literals::render_chars(&node.content)
            )),
            NodeKind::LiteralIstring => Ok(format!(
                "{}istring< {} >",
                prefix,
                literals::render_chars(&node.content)
            )),
            NodeKind::ProseDescription => Ok(literals::render_prose(&node.content)),
            NodeKind::NumericValue(base) => literals::render_value(base, node),
            NodeKind::NumericType(base) => self.render_numeric(base, node),
            NodeKind::Alternation => self.wrap("sor", node),
            NodeKind::Option => self.wrap("opt", node),
            NodeKind::Group | NodeKind::Concatenation => self.wrap("seq", node),
            NodeKind::AndPredicate => self.wrap("at", node),
            NodeKind::NotPredicate => self.wrap("not_at", node),
            NodeKind::Repetition => self.render_repetition(node),
            NodeKind::RepeatCount | NodeKind::NumericRange(_) | NodeKind::AssignmentOperator => Err(
                SemanticError::new(SemanticErrorKind::MissingMapping(node.kind), node.range.clone()),
            ),
        }
    }

    fn render_rule(&mut self, rule: &Node) -> Result<String, SemanticError> {
        let (Some(name), Some(assignee)) = (rule.rulename(), rule.assignee()) else {
            return Err(SemanticError::new(
                SemanticErrorKind::MissingMapping(rule.kind),
                rule.range.clone(),
            ));
        };
        let name = self.names.resolve(name, false)?.name;
        let assignee = self.render(assignee)?;
        Ok(format!("struct {} : {} {{}};", name, assignee))
    }

    fn reference(&mut self, node: &Node) -> Result<String, SemanticError> {
        let resolved = self.names.resolve(node, self.options.forward_declarations)?;
        if resolved.needs_forward_declaration {
            self.pending.push(format!("struct {};", resolved.name));
        }
        Ok(resolved.name)
    }

    /// `P<name>< child, child, ... >`
    fn wrap(&mut self, name: &str, node: &Node) -> Result<String, SemanticError> {
        let children = node
            .children
            .iter()
            .map(|child| self.render(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{}{}< {} >", self.options.prefix, name, children.join(", ")))
    }

    fn render_numeric(&self, base: Base, node: &Node) -> Result<String, SemanticError> {
        let prefix = self.options.prefix.as_str();
        match node.children.as_slice() {
            [low, range] if range.is(NodeKind::NumericRange(base)) => {
                let high = range.front().ok_or_else(|| {
                    SemanticError::new(SemanticErrorKind::MissingMapping(range.kind), range.range.clone())
                })?;
                Ok(format!(
                    "{}range< {}, {} >",
                    prefix,
                    literals::render_value(base, low)?,
                    literals::render_value(base, high)?
                ))
            }
            [value] => Ok(format!("{}one< {} >", prefix, literals::render_value(base, value)?)),
            values => {
                let values = values
                    .iter()
                    .map(|value| literals::render_value(base, value))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("{}string< {} >", prefix, values.join(", ")))
            }
        }
    }

    fn render_repetition(&mut self, node: &Node) -> Result<String, SemanticError> {
        let [count, element] = node.children.as_slice() else {
            return Err(SemanticError::new(
                SemanticErrorKind::MissingMapping(node.kind),
                node.range.clone(),
            ));
        };
        let content = self.render(element)?;
        let bounds = repetition::parse_bounds(&count.content)
            .map_err(|kind| SemanticError::new(kind, node.range.clone()))?;
        Ok(repetition::render(bounds, &content, &self.options.prefix))
    }
}
