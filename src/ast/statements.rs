use std::fmt::{self, Display};

use super::{
    ast::{Expr, Stmt},
    types::Type,
};

/// A `{ ... }` sequence of statements. Order is significant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(block")?;
        for stmt in &self.body {
            write!(f, " {}", stmt)?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// `let [mut] name type [= value];`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub is_mutable: bool,
    pub explicit_type: Option<Type>,
    pub assigned_value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
}

/// A function signature. The return type is always written out.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub parameters: Vec<(String, Type)>,
    pub return_type: Type,
}

impl Display for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.name)?;
        for (i, (name, ty)) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "({} {})", name, ty)?;
        }
        write!(f, ") {}", self.return_type)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub prototype: Prototype,
    pub body: BlockStmt,
}

impl Display for FnDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(fn {} {})", self.prototype, self.body)
    }
}
