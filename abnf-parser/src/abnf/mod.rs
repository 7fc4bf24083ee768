//! ABNF to PEG compilation
//!
//! Data flows one way: source text → tokens → line parser (building nodes as
//! productions match) → [`Rulelist`](resolve::Rulelist) append/merge →
//! [`Generator`](codegen::Generator) → emitted lines.

pub mod ast;
pub mod building;
pub mod codegen;
pub mod error;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod resolve;
pub mod transforms;

pub use codegen::{generate, GeneratorOptions};
pub use error::CompileError;
pub use loader::GrammarLoader;
