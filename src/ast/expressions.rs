use crate::{lexer::tokens::TokenKind, Span};

use super::ast::Expr;

// LITERALS

/// Integer literal
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub value: i64,
    pub span: Span,
}

/// Float literal
#[derive(Debug, Clone)]
pub struct FloatExpr {
    pub value: f64,
    pub span: Span,
}

/// Boolean literal
#[derive(Debug, Clone)]
pub struct BoolExpr {
    pub value: bool,
    pub span: Span,
}

/// List literal, `[a, b, c]`
#[derive(Debug, Clone)]
pub struct ListExpr {
    pub elements: Vec<Expr>,
    pub span: Span,
}

// NAMES

#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub value: String,
    pub span: Span,
}

/// Forwards to at most one child. Separates an identifier read as a value from
/// an identifier that is being declared or assigned.
#[derive(Debug, Clone)]
pub struct ValueExpr {
    pub inner: Option<Box<Expr>>,
    pub span: Span,
}

// UNARY

/// `!operand`
#[derive(Debug, Clone)]
pub struct NotExpr {
    pub operand: Box<Expr>,
    pub span: Span,
}

/// `-operand`
#[derive(Debug, Clone)]
pub struct NegExpr {
    pub operand: Box<Expr>,
    pub span: Span,
}

// N-ARY

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditiveOp {
    Add,
    Sub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplicativeOp {
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    NotEquals,
}

impl ComparisonOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<ComparisonOp> {
        match kind {
            TokenKind::Less => Some(ComparisonOp::Less),
            TokenKind::LessEquals => Some(ComparisonOp::LessEquals),
            TokenKind::Greater => Some(ComparisonOp::Greater),
            TokenKind::GreaterEquals => Some(ComparisonOp::GreaterEquals),
            TokenKind::Equals => Some(ComparisonOp::Equals),
            TokenKind::NotEquals => Some(ComparisonOp::NotEquals),
            _ => None,
        }
    }

    /// `< <= > >=` compare numbers; `== !=` compare any two values of one type.
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            ComparisonOp::Less
                | ComparisonOp::LessEquals
                | ComparisonOp::Greater
                | ComparisonOp::GreaterEquals
        )
    }
}

/// `a + b - c`. `operators[i]` sits between `operands[i]` and `operands[i + 1]`.
#[derive(Debug, Clone)]
pub struct AdditiveExpr {
    pub operands: Vec<Expr>,
    pub operators: Vec<AdditiveOp>,
    pub span: Span,
}

/// `a * b / c % d`
#[derive(Debug, Clone)]
pub struct MultiplicativeExpr {
    pub operands: Vec<Expr>,
    pub operators: Vec<MultiplicativeOp>,
    pub span: Span,
}

/// `a && b || c`
#[derive(Debug, Clone)]
pub struct LogicalExpr {
    pub operands: Vec<Expr>,
    pub operators: Vec<LogicalOp>,
    pub span: Span,
}

/// A comparison chain sharing one operator, `a < b < c`.
#[derive(Debug, Clone)]
pub struct ComparisonExpr {
    pub operator: ComparisonOp,
    pub operands: Vec<Expr>,
    pub span: Span,
}

/// `condition ? then : otherwise`, stored as its operand list.
#[derive(Debug, Clone)]
pub struct TernaryExpr {
    pub operands: Vec<Expr>,
    pub span: Span,
}
