//! Tree construction
//!
//! Node builders invoked by the grammar as each production matches. The tree
//! is transformed while it is built (folding, literal classification), so the
//! rulelist only ever sees finished rule nodes.

pub mod builders;
pub mod numeric;

pub use numeric::MissingDigits;
