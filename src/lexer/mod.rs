//! Lexical analysis for GML sources.
//!
//! This module contains the lexer (tokenizer) that turns source text into a
//! stream of tokens for a parser. It handles:
//!
//! - Line/column tracking for diagnostics
//! - Longest-match recognition of operators and punctuation
//! - Keywords, identifiers and real literals
//! - String literals with escapes and the `#` line break convention
//! - Line and block comments

pub mod cursor;
pub mod lexer;
pub mod symbols;
pub mod tokens;
