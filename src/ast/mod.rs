/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Stmt` and `Expr` node kinds
/// - expressions: Definitions for the expression nodes and their operators
/// - statements: Definitions for statements, blocks and conditions
pub mod ast;
pub mod expressions;
pub mod statements;
