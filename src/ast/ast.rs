use std::fmt::{self, Display};

use super::{
    expressions::{BinaryExpr, CallExpr, NumberExpr, SymbolExpr},
    statements::{BlockStmt, ExpressionStmt, FnDecl, ReturnStmt, VarDeclStmt},
};

/// Expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    /// A reference to a variable by name.
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn number(value: &str) -> Self {
        Expr::Number(NumberExpr {
            value: value.to_string(),
        })
    }

    pub fn symbol(value: &str) -> Self {
        Expr::Symbol(SymbolExpr {
            value: value.to_string(),
        })
    }

    pub fn call(callee: &str, arguments: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            callee: callee.to_string(),
            arguments,
        })
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(number) => write!(f, "{}", number.value),
            Expr::Symbol(symbol) => write!(f, "{}", symbol.value),
            Expr::Binary(binary) => write!(
                f,
                "({} {} {})",
                binary.operator.lexeme, binary.left, binary.right
            ),
            Expr::Call(call) => {
                write!(f, "(call {}", call.callee)?;
                for argument in &call.arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Statement nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
    Return(ReturnStmt),
    Block(BlockStmt),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(stmt) => write!(f, "(expr {})", stmt.expression),
            Stmt::VarDecl(stmt) => {
                write!(f, "(let ")?;
                if stmt.is_mutable {
                    write!(f, "mut ")?;
                }
                write!(f, "{}", stmt.identifier)?;
                if let Some(explicit_type) = &stmt.explicit_type {
                    write!(f, " {}", explicit_type)?;
                }
                if let Some(value) = &stmt.assigned_value {
                    write!(f, " {}", value)?;
                }
                write!(f, ")")
            }
            Stmt::Return(stmt) => write!(f, "(return {})", stmt.value),
            Stmt::Block(block) => write!(f, "{}", block),
        }
    }
}

/// Top-level declarations.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Function(FnDecl),
}

impl Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decl::Function(function) => write!(f, "{}", function),
        }
    }
}

/// The parse root: top-level declarations in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    pub declarations: Vec<Decl>,
}

impl File {
    pub fn functions(&self) -> impl Iterator<Item = &FnDecl> {
        self.declarations.iter().map(|decl| match decl {
            Decl::Function(function) => function,
        })
    }
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decl in &self.declarations {
            writeln!(f, "{}", decl)?;
        }
        Ok(())
    }
}
