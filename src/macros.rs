//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_POSITION!` - Creates a Position in the lexer's current file

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's raw source text
/// * `$line` - The 1-based line the token starts on
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
            span: $span,
        }
    };
}

/// Creates a Position at a byte offset and line of the lexer's file.
///
/// Offsets past `u32::MAX` saturate.
///
/// # Example
///
/// ```ignore
/// let start = MK_POSITION!(lexer, lexer.start, lexer.start_line);
/// ```
#[macro_export]
macro_rules! MK_POSITION {
    ($lexer:expr, $offset:expr, $line:expr) => {
        Position::new(
            u32::try_from($offset).unwrap_or(u32::MAX),
            $line,
            Rc::clone(&$lexer.file),
        )
    };
}
