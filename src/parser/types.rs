//! Type parsing implementation.
//!
//! A type annotation is currently a single identifier naming the type.
//! There is no fallback: a missing type is always an error.

use crate::{
    ast::types::{SymbolType, Type},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_symbol_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.expect_detailed(TokenKind::Identifier, "expected a type name")?;

    Ok(Type::Symbol(SymbolType { name: token.lexeme }))
}

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    parse_symbol_type(parser)
}
