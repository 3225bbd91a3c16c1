//! Error types for acquiring lexer sources.
//!
//! Opening a source can fail in two ways, and each maps to a sentinel
//! token kind:
//!
//! - `FileNotFound` - the path does not exist or cannot be read
//! - `InvalidFileName` - the path cannot name a readable file at all
//!
//! Problems with individual lexemes are not errors; they surface as
//! `Illegal` tokens.

pub mod errors;

#[cfg(test)]
mod tests;
