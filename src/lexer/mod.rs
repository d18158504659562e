//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that converts source code into a
//! sequence of tokens for parsing. It handles:
//!
//! - Single-pass character dispatch with one character of lookahead
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
