//! Parsing
//!
//! The line grammar is written with chumsky combinators over the logos token
//! stream:
//!
//! - [`grammar`]: the productions of a line, building nodes as they match
//! - [`combinators`]: token matching and diagnostic attribution helpers
//! - [`error`]: the chumsky error type and positioned diagnostics
//! - [`engine`]: runs the grammar line by line and fills the rulelist
//! - [`analysis`]: the grammar described as data, for the self-check

pub mod analysis;
pub mod combinators;
pub mod engine;
pub mod error;
pub mod grammar;

pub use engine::{parse_from_tokens, parse_rulelist};
pub use error::{ParseDiagnostic, ParseError, ParseErrorKind};
