//! Type annotations in the AST.
//!
//! Types are stored as written; resolving a name to a concrete type is the
//! job of a later stage.

use std::fmt::{self, Display};

/// A type annotation.
///
/// Only named types exist today. The enum is non-exhaustive so composite
/// forms can be added without breaking downstream matches.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Type {
    Symbol(SymbolType),
}

impl Type {
    pub fn symbol(name: &str) -> Self {
        Type::Symbol(SymbolType {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Type::Symbol(symbol) => &symbol.name,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A type referred to by name, e.g. `int`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolType {
    pub name: String,
}
