//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance at a source position

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$position` - The [`Position`](crate::Position) of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, Position::new(1, 4));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $position:expr) => {{
        let position: $crate::Position = $position;
        $crate::lexer::tokens::Token {
            kind: $kind,
            line: position.line,
            column: position.column,
        }
    }};
}
