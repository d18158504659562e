use crate::lexer::tokens::Token;

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
///
/// The literal text is kept exactly as written; choosing a numeric
/// representation is left to later stages.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: String,
}

/// Symbol Expression
/// A reference to a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
}

// COMPLEX

/// Binary Expression
/// `left operator right`, where `operator` is the token that was consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: Token,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Call Expression
/// A call of a named function with its arguments in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
}
