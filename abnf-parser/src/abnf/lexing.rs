//! Lexer
//!
//! Tokenization is done in one logos pass (see [tokens]) followed by a marker
//! pass over the token stream (see [base_tokenization]).
//!
//! Line Handling
//!
//!     ABNF is line based: a rule ends at the first line ending that is not
//!     followed by whitespace. Continuation line endings are skipped by the
//!     lexer, so every [`Token::Newline`] or [`Token::Comment`] left in the
//!     stream ends a logical line. The parser consumes the stream one logical
//!     line at a time, see [`split_lines`].
//!
//!     Logos tokens carry the byte range of their source text. Every later
//!     stage keeps those ranges intact: diagnostics and tree nodes are
//!     positioned from them.

pub mod base_tokenization;
pub mod tokens;

pub use base_tokenization::{split_lines, tokenize};
pub use tokens::Token;

/// A token together with its byte range in the source
pub type TokenLocation = (Token, std::ops::Range<usize>);
