use std::slice::Iter;

use crate::Span;

use super::{ast::{Expr, Stmt}, expressions::IdentifierExpr};

/// `{ ... }` body of a conditional or loop.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

/// Parenthesised condition of an `if`, `while` or `do-while`.
///
/// `expr` is empty only for partially built trees.
#[derive(Debug, Clone)]
pub struct Condition {
    pub expr: Option<Expr>,
    pub span: Span,
}

/// `declare name: type = value;`
#[derive(Debug, Clone)]
pub struct DeclareStmt {
    pub identifier: IdentifierExpr,
    /// Type keyword exactly as written
    pub type_name: String,
    pub value: Option<Expr>,
    pub span: Span,
}

/// `name = value;`
#[derive(Debug, Clone)]
pub struct AssignStmt {
    pub identifier: IdentifierExpr,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Condition,
    pub then_body: BlockStmt,
    pub else_body: Option<BlockStmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Condition,
    pub body: BlockStmt,
    pub span: Span,
}

/// `do { ... } while (condition);`
#[derive(Debug, Clone)]
pub struct DoWhileStmt {
    pub body: BlockStmt,
    pub condition: Condition,
    pub span: Span,
}
