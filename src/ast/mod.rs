/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed expression/statement/declaration enums and the `File` root
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for statements, prototypes and function declarations
/// - types: Definitions for type annotations in the AST
///
/// Every node owns its children outright; the tree has no shared nodes and
/// no back-references.
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

pub use ast::{Decl, Expr, File, Stmt};
pub use expressions::{BinaryExpr, CallExpr, NumberExpr, SymbolExpr};
pub use statements::{BlockStmt, ExpressionStmt, FnDecl, Prototype, ReturnStmt, VarDeclStmt};
pub use types::{SymbolType, Type};
