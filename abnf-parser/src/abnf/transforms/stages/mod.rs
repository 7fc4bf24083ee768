//! Individual transformation stages
//!
//! Each stage implements [`Runnable`](super::Runnable).

pub mod generation;
pub mod parsing;
pub mod tokenization;

pub use generation::Generation;
pub use parsing::Parsing;
pub use tokenization::Tokenization;
