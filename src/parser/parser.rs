//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the file-level parsing
//! loop. The parser walks the token sequence with a single forward cursor;
//! declarations and statements are parsed by recursive descent and binary
//! expressions by precedence climbing (see `expr` and `lookups`).
//!
//! Every parsing function returns `Result` and fails fast. Only the
//! file-level loop recovers: it records the diagnostic and carries on from
//! the token where the failed declaration stopped, so one run reports as
//! many problems as possible.

use crate::{
    ast::{Decl, File},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::stmt::parse_fn_decl;

/// How deeply expressions and blocks may nest before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Current nesting depth of expressions and blocks
    depth: usize,
}

impl Parser {
    /// Creates a new Parser over a token sequence.
    ///
    /// A sequence that does not end in `EOF` gets one appended, so the
    /// cursor always has a token to look at.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let (line, end) = match tokens.last() {
                Some(token) => (token.line, token.span.end.clone()),
                None => (1, Position::null()),
            };

            tokens.push(Token {
                kind: TokenKind::EOF,
                lexeme: String::new(),
                line,
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.tokens[index].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the consumed token, or the error (an `UnexpectedToken` when
    /// none is given) without moving the cursor.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(error.unwrap_or_else(|| {
                self.error_at_current(ErrorImpl::UnexpectedToken {
                    token: self.current_token().describe(),
                })
            }));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Expects a token of the specified kind, explaining what was wanted on failure.
    pub fn expect_detailed(
        &mut self,
        expected_kind: TokenKind,
        message: &str,
    ) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            return self.expect(expected_kind);
        }

        let error = self.detailed_error(message);
        self.expect_error(expected_kind, Some(error))
    }

    /// Expects the delimiter closing a construct opened earlier.
    pub fn expect_closing(&mut self, expected_kind: TokenKind, delimiter: &str) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            return self.expect(expected_kind);
        }

        let error = self.error_at_current(ErrorImpl::UnclosedDelimiter {
            expected: delimiter.to_string(),
            found: self.current_token().describe(),
        });
        self.expect_error(expected_kind, Some(error))
    }

    /// Builds an error located at the current token.
    pub fn error_at_current(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.get_position())
    }

    pub fn detailed_error(&self, message: &str) -> Error {
        self.error_at_current(ErrorImpl::UnexpectedTokenDetailed {
            token: self.current_token().describe(),
            message: message.to_string(),
        })
    }

    /// Runs `parse_fn` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` instead of recursing past
    /// `MAX_NESTING_DEPTH`.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_at_current(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the position of the current token in the source file.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a token sequence into a `File`.
///
/// This is the main entry point for parsing. Top-level `;` are skipped,
/// `fn` starts a function declaration and anything else is reported and
/// skipped one token at a time. A function that fails to parse is left out
/// of the tree entirely, and the loop resumes at the token it failed on.
///
/// # Returns
///
/// A tuple containing:
/// - The `File` with every declaration that parsed successfully
/// - The diagnostics, in source order
pub fn parse(tokens: Vec<Token>) -> (File, Vec<Error>) {
    let mut parser = Parser::new(tokens);
    let mut declarations = vec![];
    let mut errors = vec![];

    while parser.has_tokens() {
        match parser.current_token_kind() {
            TokenKind::Semicolon => {
                parser.advance();
            }
            TokenKind::Fn => match parse_fn_decl(&mut parser) {
                Ok(function) => declarations.push(Decl::Function(function)),
                // `fn` is already consumed, so the loop still moves forward.
                Err(error) => errors.push(error),
            },
            _ => {
                errors.push(parser.error_at_current(ErrorImpl::UnexpectedToken {
                    token: parser.current_token().describe(),
                }));
                parser.advance();
            }
        }
    }

    (File { declarations }, errors)
}
