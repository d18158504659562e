use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map.insert("mut", TokenKind::Mut);
        map.insert("const", TokenKind::Const);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("struct", TokenKind::Struct);
        map.insert("self", TokenKind::SelfRef);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("extern", TokenKind::Extern);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    Semicolon,
    Colon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Fn,
    Let,
    Mut,
    Const,
    Return,
    If,
    Else,
    For,
    While,
    Struct,
    SelfRef,
    True,
    False,
    Extern,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text; string literals keep their quotes and escapes.
    pub lexeme: String,
    pub line: u32,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4} {:<14} {}", self.line, self.kind.to_string(), self.lexeme)
    }
}

impl Token {
    /// Text used to name this token in diagnostics.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::EOF {
            String::from("end of input")
        } else {
            self.lexeme.clone()
        }
    }

    /// Decodes the escape sequences of a `String` token.
    ///
    /// Returns `None` for any other token kind. Unknown escapes keep their
    /// backslash. `\xHH` only covers ASCII (`\x00` to `\x7F`); higher or
    /// malformed `\x` escapes are kept as written.
    pub fn string_value(&self) -> Option<String> {
        if self.kind != TokenKind::String {
            return None;
        }

        let inner = self
            .lexeme
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(&self.lexeme);

        let mut result = String::new();
        let mut chars = inner.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '\\' {
                result.push(ch);
                continue;
            }

            match chars.peek() {
                Some('n') => {
                    result.push('\n');
                    chars.next();
                }
                Some('t') => {
                    result.push('\t');
                    chars.next();
                }
                Some('r') => {
                    result.push('\r');
                    chars.next();
                }
                Some('\\') => {
                    result.push('\\');
                    chars.next();
                }
                Some('"') => {
                    result.push('"');
                    chars.next();
                }
                Some('0') => {
                    result.push('\0');
                    chars.next();
                }
                Some('x') => {
                    chars.next();
                    let mut hex = String::new();

                    for _ in 0..2 {
                        match chars.peek() {
                            Some(ch) if ch.is_ascii_hexdigit() => {
                                hex.push(*ch);
                                chars.next();
                            }
                            _ => break,
                        }
                    }

                    match u8::from_str_radix(&hex, 16) {
                        Ok(byte) if byte.is_ascii() => result.push(char::from(byte)),
                        _ => {
                            result.push_str("\\x");
                            result.push_str(&hex);
                        }
                    }
                }
                _ => result.push(ch), // Keep the backslash
            }
        }

        Some(result)
    }
}
