//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.lang".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(!error.is_semantic());
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UndeclaredVariable {
            variable: "x".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_semantic_messages() {
    let cases = [
        (
            ErrorImpl::UnknownType { type_: "string".to_string() },
            "Invalid use of undefined Identifier string",
        ),
        (
            ErrorImpl::MultipleDeclaration { variable: "a".to_string() },
            "Identifier a has multiple declarations",
        ),
        (
            ErrorImpl::UndeclaredVariable { variable: "b".to_string() },
            "Variable b was not declared",
        ),
        (
            ErrorImpl::AssignmentTypeMismatch { variable: "c".to_string() },
            "Invalid type in assignation of Identifier c",
        ),
        (ErrorImpl::InvalidCondition, "Invalid type in condition"),
        (ErrorImpl::InvalidExpressionType, "Invalid type in expression"),
    ];

    for (error_impl, message) in cases {
        let error = Error::new(error_impl, at(0));
        assert!(error.is_semantic());
        assert_eq!(error.to_string(), message);
    }
}

#[test]
fn test_malformed_node_is_not_semantic() {
    let error = Error::new(
        ErrorImpl::MalformedNode {
            node: "Ternary",
            children: 2,
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "MalformedNode");
    assert!(!error.is_semantic());
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`}`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
