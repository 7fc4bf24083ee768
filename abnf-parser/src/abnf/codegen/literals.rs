//! Character and numeric literals

use crate::abnf::ast::{Base, Node};
use crate::abnf::resolve::{SemanticError, SemanticErrorKind};

/// Render the characters of a literal as C++ character literals.
///
/// `'` and `\` are escaped; the characters are joined by `, `.
pub fn render_chars(content: &str) -> String {
    content
        .chars()
        .map(|c| match c {
            '\'' | '\\' => format!("'\\{}'", c),
            c => format!("'{}'", c),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render one digit run of a numeric value.
///
/// Hexadecimal values keep their digits behind `0x`, decimal values are used
/// verbatim and binary values are converted to decimal.
pub fn render_value(base: Base, node: &Node) -> Result<String, SemanticError> {
    match base {
        Base::Hex => Ok(format!("0x{}", node.content)),
        Base::Decimal => Ok(node.content.clone()),
        Base::Binary => u64::from_str_radix(&node.content, 2)
            .map(|value| value.to_string())
            .map_err(|_| {
                SemanticError::new(SemanticErrorKind::NumericOutOfRange, node.range.clone())
            }),
    }
}

/// Prose descriptions cannot be generated and are kept as a comment.
pub fn render_prose(content: &str) -> String {
    format!("/* {} */", content)
}
