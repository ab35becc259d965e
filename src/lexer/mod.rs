//! Lexical analysis module.
//!
//! This module turns source text into tokens for a parser. It handles:
//!
//! - Position tracking (1-based lines, columns counted per consumed character)
//! - Skipping whitespace and `#` line comments
//! - Recognition of keywords, identifiers, integers, operators and delimiters
//! - Reporting the first character that cannot start a token

pub mod cursor;
pub mod lexer;
pub mod tokens;
