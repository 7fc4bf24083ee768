//! Standard transform definitions
//!
//! Prebuilt pipelines, defined as `once_cell::sync::Lazy` statics where they
//! need no settings.

use crate::abnf::codegen::GeneratorOptions;
use crate::abnf::lexing::TokenLocation;
use crate::abnf::resolve::Rulelist;
use crate::abnf::transforms::stages::{Generation, Parsing, Tokenization};
use crate::abnf::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for token stream (to satisfy clippy::type_complexity)
pub type TokenStream = Vec<TokenLocation>;

pub type TokenizationTransform = Transform<String, TokenStream>;

pub type RulelistTransform = Transform<String, Rulelist>;

/// Source text to generated lines
pub type CompileTransform = Transform<String, Vec<String>>;

/// String → token stream
pub static TOKENIZATION: Lazy<TokenizationTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenization::new()));

/// String → rulelist, with incremental alternations merged
pub static TO_RULELIST: Lazy<RulelistTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Parsing::new()));

/// String → generated lines, using `options`
pub fn compile_transform(options: GeneratorOptions) -> CompileTransform {
    Transform::<String, String>::from_fn(Ok)
        .then_transform(&*TO_RULELIST)
        .then(Generation::new(options))
}
