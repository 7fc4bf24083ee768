//! Tokenization stage
//!
//! Converts source text into a flat stream of tokens using the logos lexer.

use crate::abnf::lexing::{tokenize, TokenLocation};
use crate::abnf::transforms::{Runnable, TransformError};

/// Tokenization stage: `String` → `Vec<(Token, Range<usize>)>`
///
/// Never fails; characters the lexer does not know become
/// [`Token::Invalid`](crate::abnf::lexing::Token::Invalid).
pub struct Tokenization;

impl Tokenization {
    pub fn new() -> Self {
        Tokenization
    }
}

impl Default for Tokenization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<TokenLocation>> for Tokenization {
    fn run(&self, input: String) -> Result<Vec<TokenLocation>, TransformError> {
        Ok(tokenize(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abnf::lexing::Token;

    #[test]
    fn test_tokenization() {
        let stage = Tokenization::new();
        let tokens = stage.run("a = b\n".to_string()).unwrap();
        let kinds: Vec<Token> = tokens.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            kinds,
            vec![Token::Rulename, Token::DefinedAs, Token::Rulename, Token::Newline]
        );
    }

    #[test]
    fn test_tokenization_empty() {
        let stage = Tokenization::new();
        assert!(stage.run(String::new()).unwrap().is_empty());
    }
}
