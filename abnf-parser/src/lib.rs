//! # abnf-parser
//!
//! Compiles ABNF grammars (RFC 5234, updated by RFC 7405, extended with the
//! PEG `&` and `!` predicates) into PEGTL rule definitions.
//!
//! File Layout
//!
//! src/abnf
//!   ├── ast          Grammar tree nodes and source positions
//!   ├── lexing       logos tokens and line handling
//!   ├── parsing      chumsky line grammar, diagnostics and the grammar self-check
//!   ├── building     Node construction hooks run as productions match
//!   ├── resolve      Rule names, the rulelist and incremental alternations
//!   ├── codegen      PEGTL code generation
//!   ├── transforms   Composable pipeline stages
//!   └── loader       Convenience entry point over the standard pipelines
//!
//! A grammar is always compiled as a whole: the first error aborts the
//! compilation and no partial output is produced.

pub mod abnf;
