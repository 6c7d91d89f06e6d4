use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// True for the violations raised by the checking pass itself, as opposed to
    /// lexing, parsing or malformed-tree errors.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnknownType { .. }
                | ErrorImpl::MultipleDeclaration { .. }
                | ErrorImpl::UndeclaredVariable { .. }
                | ErrorImpl::AssignmentTypeMismatch { .. }
                | ErrorImpl::InvalidCondition
                | ErrorImpl::InvalidExpressionType
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::MultipleDeclaration { .. } => "MultipleDeclaration",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::AssignmentTypeMismatch { .. } => "AssignmentTypeMismatch",
            ErrorImpl::InvalidCondition => "InvalidCondition",
            ErrorImpl::InvalidExpressionType => "InvalidExpressionType",
            ErrorImpl::MalformedNode { .. } => "MalformedNode",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnknownType { type_ } => ErrorTip::Suggestion(format!(
                "Unknown type `{}`, expected one of `int`, `float`, `bool` or `list`",
                type_
            )),
            ErrorImpl::MultipleDeclaration { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared in this scope", variable))
            }
            ErrorImpl::UndeclaredVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::AssignmentTypeMismatch { variable } => ErrorTip::Suggestion(format!(
                "Value does not match the declared type of `{}`",
                variable
            )),
            ErrorImpl::InvalidCondition => {
                ErrorTip::Suggestion(String::from("Conditions must be of type `bool`"))
            }
            ErrorImpl::InvalidExpressionType => ErrorTip::Suggestion(String::from(
                "Operand types are invalid for this operator, `int` and `float` never mix",
            )),
            ErrorImpl::MalformedNode { node, children } => ErrorTip::Suggestion(format!(
                "`{}` node with {} children cannot come out of the parser",
                node, children
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    // Semantic errors
    #[error("Invalid use of undefined Identifier {type_}")]
    UnknownType { type_: String },
    #[error("Identifier {variable} has multiple declarations")]
    MultipleDeclaration { variable: String },
    #[error("Variable {variable} was not declared")]
    UndeclaredVariable { variable: String },
    #[error("Invalid type in assignation of Identifier {variable}")]
    AssignmentTypeMismatch { variable: String },
    #[error("Invalid type in condition")]
    InvalidCondition,
    #[error("Invalid type in expression")]
    InvalidExpressionType,

    #[error("malformed {node} node with {children} children")]
    MalformedNode { node: &'static str, children: usize },
}
