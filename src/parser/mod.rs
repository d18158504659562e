//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a sequence of tokens
//! into an Abstract Syntax Tree. It handles:
//!
//! - Function declarations, prototypes and blocks (recursive descent)
//! - Statements: `let`, `return`, nested blocks and expression statements
//! - Expressions: literals, variable references, calls and binary operators
//! - Type annotations
//! - Error reporting and file-level recovery
//!
//! Binary operators are parsed by precedence climbing over the table in
//! `lookups`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
