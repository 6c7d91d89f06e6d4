use crate::Span;

use super::{
    expressions::{
        AdditiveExpr, BoolExpr, ComparisonExpr, FloatExpr, IdentifierExpr, IntegerExpr, ListExpr,
        LogicalExpr, MultiplicativeExpr, NegExpr, NotExpr, TernaryExpr, ValueExpr,
    },
    statements::{AssignStmt, DeclareStmt, DoWhileStmt, IfStmt, WhileStmt},
};

/// Statement
///
/// Every statement kind the parser produces. Blocks and conditions are not
/// statements of their own: they only appear inside `if` and loop statements.
#[derive(Debug, Clone)]
pub enum Stmt {
    Declare(DeclareStmt),
    Assign(AssignStmt),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
}

/// Expression
#[derive(Debug, Clone)]
pub enum Expr {
    Integer(IntegerExpr),
    Float(FloatExpr),
    Bool(BoolExpr),
    /// A bare identifier. Only read as a variable when wrapped in `Value`.
    Identifier(IdentifierExpr),
    Value(ValueExpr),
    List(ListExpr),
    Not(NotExpr),
    Neg(NegExpr),
    Additive(AdditiveExpr),
    Multiplicative(MultiplicativeExpr),
    Logical(LogicalExpr),
    Comparison(ComparisonExpr),
    Ternary(TernaryExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Integer(expr) => &expr.span,
            Expr::Float(expr) => &expr.span,
            Expr::Bool(expr) => &expr.span,
            Expr::Identifier(expr) => &expr.span,
            Expr::Value(expr) => &expr.span,
            Expr::List(expr) => &expr.span,
            Expr::Not(expr) => &expr.span,
            Expr::Neg(expr) => &expr.span,
            Expr::Additive(expr) => &expr.span,
            Expr::Multiplicative(expr) => &expr.span,
            Expr::Logical(expr) => &expr.span,
            Expr::Comparison(expr) => &expr.span,
            Expr::Ternary(expr) => &expr.span,
        }
    }

    /// Wraps an identifier so that it is read as a value.
    pub fn value(identifier: IdentifierExpr) -> Expr {
        let span = identifier.span.clone();
        Expr::Value(ValueExpr {
            inner: Some(Box::new(Expr::Identifier(identifier))),
            span,
        })
    }
}
