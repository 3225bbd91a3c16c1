//! Lexical analysis for Clite source files.
//!
//! This module turns source text into a stream of classified tokens for a
//! parser to consume. It handles:
//!
//! - The token catalog and the immutable keyword and symbol tables
//! - Splitting each line into lexeme candidates (longest symbol first)
//! - Classifying candidates into token kinds
//! - Line tracking, comment skipping and the pull-driven token stream

pub mod classifier;
pub mod lexer;
pub mod patterns;
pub mod tokens;
