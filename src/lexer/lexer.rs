use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_POSITION, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Single-pass scanner over one source buffer.
///
/// `start`/`start_line` mark the beginning of the token being scanned and
/// `pos` is the byte offset of the next unread character.
pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: String,
    start: usize,
    start_line: u32,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            errors: vec![],
            source,
            start: 0,
            start_line: 1,
            pos: 0,
            line: 1,
            file: file_name,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The next unread character.
    pub fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// The character after `at()`.
    pub fn peek_next(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.at()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Consumes the next character only if it is `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.at() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn mark_start(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
    }

    fn push(&mut self, kind: TokenKind) {
        let lexeme = self.source[self.start..self.pos].to_string();
        let span = Span {
            start: MK_POSITION!(self, self.start, self.start_line),
            end: MK_POSITION!(self, self.pos, self.line),
        };

        self.tokens.push(MK_TOKEN!(kind, lexeme, self.start_line, span));
    }

    fn error(&mut self, error: ErrorImpl) {
        let position = MK_POSITION!(self, self.start, self.start_line);
        self.errors.push(Error::new(error, position));
    }

    fn scan_token(&mut self) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            c if c.is_whitespace() => {}
            '(' => self.push(TokenKind::OpenParen),
            ')' => self.push(TokenKind::CloseParen),
            '{' => self.push(TokenKind::OpenCurly),
            '}' => self.push(TokenKind::CloseCurly),
            '[' => self.push(TokenKind::OpenBracket),
            ']' => self.push(TokenKind::CloseBracket),
            ',' => self.push(TokenKind::Comma),
            ';' => self.push(TokenKind::Semicolon),
            ':' => self.push(TokenKind::Colon),
            '.' => self.push(TokenKind::Dot),
            '+' => self.push(TokenKind::Plus),
            '-' => self.push(TokenKind::Dash),
            '*' => self.push(TokenKind::Star),
            '%' => self.push(TokenKind::Percent),
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::Equals
                } else {
                    TokenKind::Assignment
                };
                self.push(kind);
            }
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::NotEquals
                } else {
                    TokenKind::Not
                };
                self.push(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEquals
                } else {
                    TokenKind::Less
                };
                self.push(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEquals
                } else {
                    TokenKind::Greater
                };
                self.push(kind);
            }
            '&' if self.match_char('&') => self.push(TokenKind::And),
            '|' if self.match_char('|') => self.push(TokenKind::Or),
            '/' => {
                if self.match_char('/') {
                    self.skip_comment();
                } else {
                    self.push(TokenKind::Slash);
                }
            }
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.identifier(),
            c => self.error(ErrorImpl::UnrecognisedToken {
                token: c.to_string(),
            }),
        }
    }

    fn skip_comment(&mut self) {
        while let Some(ch) = self.at() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn number(&mut self) {
        self.digits();

        if self.at() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.digits();
        }

        self.push(TokenKind::Number);
    }

    fn digits(&mut self) {
        while self.at().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn identifier(&mut self) {
        while self.at().is_some_and(is_identifier_continue) {
            self.advance();
        }

        let kind = match RESERVED_LOOKUP.get(&self.source[self.start..self.pos]) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        };

        self.push(kind);
    }

    fn string(&mut self) {
        loop {
            match self.advance() {
                None => {
                    self.error(ErrorImpl::UnterminatedString);
                    return;
                }
                Some('"') => break,
                Some('\\') => {
                    // The escaped character never closes the literal.
                    self.advance();
                }
                Some(_) => {}
            }
        }

        self.push(TokenKind::String);
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenizes a whole source buffer.
///
/// The returned sequence always ends with exactly one `EOF` token. Characters
/// that cannot start a token are reported and skipped, so scanning always
/// reaches the end of the buffer.
pub fn tokenize(source: String, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        lex.mark_start();
        lex.scan_token();
    }

    lex.mark_start();
    lex.push(TokenKind::EOF);

    (lex.tokens, lex.errors)
}
