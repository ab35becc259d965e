//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The lexeme as consumed
/// * `$position` - Where the lexeme starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, String::from("42"), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $position:expr) => {
        Token {
            kind: $kind,
            text: $text,
            position: $position,
        }
    };
}
