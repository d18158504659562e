use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ExpressionStmt, FnDecl, Prototype, ReturnStmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_var_decl_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::OpenCurly => Ok(Stmt::Block(parse_block_stmt(parser)?)),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;

    parser.expect_detailed(TokenKind::Semicolon, "expected `;` after expression")?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

/// `let [mut] name type;` or `let [mut] name type = value;`
///
/// The type is mandatory: leaving it out is reported as an unsupported
/// feature rather than inferred.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let is_mutable = parser.current_token_kind() == TokenKind::Mut;
    if is_mutable {
        parser.advance();
    }

    let identifier = parser
        .expect_detailed(
            TokenKind::Identifier,
            "expected identifier during variable declaration",
        )?
        .lexeme;

    if matches!(
        parser.current_token_kind(),
        TokenKind::Assignment | TokenKind::Semicolon
    ) {
        return Err(parser.error_at_current(ErrorImpl::ExpectedExplicitType {
            variable: identifier,
        }));
    }

    let explicit_type = parse_type(parser)?;

    let assigned_value = if parser.current_token_kind() == TokenKind::Semicolon {
        None
    } else {
        parser.expect_detailed(
            TokenKind::Assignment,
            "expected `=` or `;` after the variable's type",
        )?;
        Some(parse_expr(parser)?)
    };

    parser.expect_detailed(
        TokenKind::Semicolon,
        "expected `;` after variable declaration",
    )?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        is_mutable,
        explicit_type: Some(explicit_type),
        assigned_value,
    }))
}

/// `{ statement* }`
///
/// The first statement that fails aborts the whole block.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.expect_detailed(TokenKind::OpenCurly, "expected `{` to start a block")?;

    parser.nested(|parser| {
        let mut body = Vec::new();

        while !matches!(
            parser.current_token_kind(),
            TokenKind::CloseCurly | TokenKind::EOF
        ) {
            body.push(parse_stmt(parser)?);
        }

        parser.expect_closing(TokenKind::CloseCurly, "}")?;

        Ok(BlockStmt { body })
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let value = parse_expr(parser)?;

    parser.expect_detailed(TokenKind::Semicolon, "expected `;` after return value")?;

    Ok(Stmt::Return(ReturnStmt { value }))
}

/// `name(param type, ...) return_type`
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, Error> {
    let name = parser
        .expect_detailed(TokenKind::Identifier, "expected function name in prototype")?
        .lexeme;

    parser.expect_detailed(TokenKind::OpenParen, "expected `(` in function prototype")?;

    let mut parameters = Vec::new();

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let name = parser
                .expect_detailed(TokenKind::Identifier, "expected parameter name")?
                .lexeme;
            let ty = parse_type(parser)?;
            parameters.push((name, ty));

            match parser.current_token_kind() {
                TokenKind::CloseParen => break,
                TokenKind::Comma => {
                    parser.advance();
                    if parser.current_token_kind() == TokenKind::CloseParen {
                        return Err(parser.error_at_current(ErrorImpl::TrailingComma {
                            list: String::from("parameter list"),
                        }));
                    }
                }
                _ => {
                    return Err(parser.detailed_error("expected `,` or `)` in function prototype"))
                }
            }
        }
    }

    parser.expect_detailed(TokenKind::CloseParen, "expected `)` in function prototype")?;

    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser.detailed_error("expected a return type after the parameter list"));
    }
    let return_type = parse_type(parser)?;

    Ok(Prototype {
        name,
        parameters,
        return_type,
    })
}

/// `fn prototype block`. Nothing is kept of a function that fails to parse.
pub fn parse_fn_decl(parser: &mut Parser) -> Result<FnDecl, Error> {
    parser.expect(TokenKind::Fn)?;

    let prototype = parse_prototype(parser)?;
    let body = parse_block_stmt(parser)?;

    Ok(FnDecl { prototype, body })
}
