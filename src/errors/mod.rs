//! Error types for the lexer.
//!
//! - `Error` - a lexical error carrying the line and column it starts at
//! - `ErrorImpl` - why the input was rejected
//! - `SourceError` - the source file could not be read

pub mod errors;

#[cfg(test)]
mod tests;
