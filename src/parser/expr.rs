use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, CallExpr, NumberExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, BindingPower},
    parser::Parser,
};

/// Parses a full expression: a primary followed by any binary operators.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        let left = parse_primary_expr(parser)?;
        parse_binary_rhs(parser, BindingPower::Default, left)
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => parse_identifier_expr(parser),
        TokenKind::Number => Ok(Expr::Number(NumberExpr {
            value: parser.advance().lexeme.clone(),
        })),
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ => Err(parser.error_at_current(ErrorImpl::ExpectedExpression {
            token: parser.current_token().describe(),
        })),
    }
}

/// Folds binary operators onto `left` by precedence climbing.
///
/// Operators looser than `min` are left for the caller. When the operator
/// after the right operand binds tighter than the current one, that tighter
/// run is folded into the right operand first; equal precedence folds into
/// `left`, which keeps every operator left-associative.
pub fn parse_binary_rhs(
    parser: &mut Parser,
    min: BindingPower,
    mut left: Expr,
) -> Result<Expr, Error> {
    loop {
        let Some(bp) = binding_power(parser.current_token_kind()) else {
            return Ok(left);
        };

        if bp < min {
            return Ok(left);
        }

        let operator = parser.advance().clone();
        let mut right = parse_primary_expr(parser)?;

        if binding_power(parser.current_token_kind()).is_some_and(|next| bp < next) {
            right = parse_binary_rhs(parser, bp.tighter(), right)?;
        }

        left = Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        });
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect_closing(TokenKind::CloseParen, ")")?;

    Ok(expr)
}

/// A bare identifier is a variable reference; one followed by `(` is a call.
///
/// Arguments are separated by `,`; a `,` directly before `)` is rejected.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.advance().lexeme.clone();

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(Expr::Symbol(SymbolExpr { value: name }));
    }
    parser.advance();

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser)?);

            match parser.current_token_kind() {
                // `EOF` is reported as an unclosed `(` below.
                TokenKind::CloseParen | TokenKind::EOF => break,
                TokenKind::Comma => {
                    parser.advance();
                    if parser.current_token_kind() == TokenKind::CloseParen {
                        return Err(parser.error_at_current(ErrorImpl::TrailingComma {
                            list: String::from("argument list"),
                        }));
                    }
                }
                _ => return Err(parser.detailed_error("expected `,` or `)` in argument list")),
            }
        }
    }

    parser.expect_closing(TokenKind::CloseParen, ")")?;

    Ok(Expr::Call(CallExpr {
        callee: name,
        arguments,
    }))
}
