//! Parsing stage

use crate::abnf::parsing::parse_rulelist;
use crate::abnf::resolve::Rulelist;
use crate::abnf::transforms::{Runnable, TransformError};

/// Parsing stage: `String` → [`Rulelist`]
///
/// Tokenizes and parses the source, appending and merging the rules.
pub struct Parsing;

impl Parsing {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Parsing {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Rulelist> for Parsing {
    fn run(&self, input: String) -> Result<Rulelist, TransformError> {
        Ok(parse_rulelist(&input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing() {
        let rulelist = Parsing::new()
            .run("a = b\nb = \"c\"\n".to_string())
            .unwrap();
        assert_eq!(rulelist.len(), 2);
    }

    #[test]
    fn test_parse_error_is_a_compile_error() {
        let err = Parsing::new().run("a = (b\n".to_string()).unwrap_err();
        assert!(matches!(err, TransformError::Compile(_)));
        assert_eq!(err.to_string(), "1:7: unterminated group (missing ')')");
    }
}
