//! Grammar tree definitions
//!
//! The parser produces a tree of [`Node`]s per rule; the [`Rulelist`](crate::abnf::resolve::Rulelist)
//! owns the top-level rule nodes. Positions are tracked through [`Range`] so every
//! diagnostic can point back into the source.

pub mod node;
pub mod range;

pub use node::{Base, Node, NodeKind};
pub use range::{Position, Range, SourceText};
