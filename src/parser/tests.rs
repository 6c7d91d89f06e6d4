//! Unit tests for the parser module.
//!
//! Covers statement shapes, operator precedence, n-ary chain construction,
//! comparison chain splitting, ternaries and parse errors.

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{AdditiveOp, ComparisonOp, LogicalOp},
        statements::BlockStmt,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<BlockStmt, Error> {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string()))?;
    parse(tokens, Rc::new("test.lang".to_string()))
}

/// Parses `declare x: int = <source>;` and returns the initializer.
fn parse_initializer(source: &str) -> Expr {
    let program = parse_source(&format!("declare x: int = {};", source)).unwrap();
    match &program.body[0] {
        Stmt::Declare(declare) => declare.value.clone().unwrap(),
        other => panic!("Expected declaration, found {:?}", other),
    }
}

#[test]
fn test_parse_declaration() {
    let program = parse_source("declare total: float = 1.5;").unwrap();

    match &program.body[0] {
        Stmt::Declare(declare) => {
            assert_eq!(declare.identifier.value, "total");
            assert_eq!(declare.type_name, "float");
            assert!(matches!(declare.value, Some(Expr::Float(_))));
        }
        other => panic!("Expected declaration, found {:?}", other),
    }
}

#[test]
fn test_parse_declaration_without_initializer() {
    let program = parse_source("declare flags: list;").unwrap();

    match &program.body[0] {
        Stmt::Declare(declare) => assert!(declare.value.is_none()),
        other => panic!("Expected declaration, found {:?}", other),
    }
}

#[test]
fn test_parse_assignment_reads_identifiers_as_values() {
    let program = parse_source("x = y;").unwrap();

    match &program.body[0] {
        Stmt::Assign(assign) => {
            assert_eq!(assign.identifier.value, "x");
            match &assign.value {
                Expr::Value(value) => {
                    assert!(matches!(value.inner.as_deref(), Some(Expr::Identifier(id)) if id.value == "y"))
                }
                other => panic!("Expected value wrapper, found {:?}", other),
            }
        }
        other => panic!("Expected assignment, found {:?}", other),
    }
}

#[test]
fn test_parse_if_else() {
    let program = parse_source("if (a) { b = 1; } else { c = 2; d = 3; }").unwrap();

    match &program.body[0] {
        Stmt::If(if_stmt) => {
            assert!(if_stmt.condition.expr.is_some());
            assert_eq!(if_stmt.then_body.body.len(), 1);
            assert_eq!(if_stmt.else_body.as_ref().unwrap().body.len(), 2);
        }
        other => panic!("Expected if statement, found {:?}", other),
    }
}

#[test]
fn test_parse_loops() {
    let program = parse_source("while (a) { } do { x = 1; } while (b);").unwrap();

    assert!(matches!(&program.body[0], Stmt::While(w) if w.body.body.is_empty()));
    assert!(matches!(&program.body[1], Stmt::DoWhile(d) if d.body.body.len() == 1));
}

#[test]
fn test_additive_chain_is_flat() {
    match parse_initializer("1 + 2 - 3") {
        Expr::Additive(additive) => {
            assert_eq!(additive.operands.len(), 3);
            assert_eq!(additive.operators, vec![AdditiveOp::Add, AdditiveOp::Sub]);
        }
        other => panic!("Expected additive chain, found {:?}", other),
    }
}

#[test]
fn test_precedence() {
    match parse_initializer("1 + 2 * 3") {
        Expr::Additive(additive) => {
            assert_eq!(additive.operands.len(), 2);
            assert!(matches!(&additive.operands[1], Expr::Multiplicative(m) if m.operands.len() == 2));
        }
        other => panic!("Expected additive chain, found {:?}", other),
    }
}

#[test]
fn test_single_operand_builds_no_operator_node() {
    assert!(matches!(parse_initializer("(4)"), Expr::Integer(_)));
}

#[test]
fn test_comparison_chain_shares_operator() {
    match parse_initializer("1 < 2 < 3") {
        Expr::Comparison(comparison) => {
            assert_eq!(comparison.operator, ComparisonOp::Less);
            assert_eq!(comparison.operands.len(), 3);
        }
        other => panic!("Expected comparison chain, found {:?}", other),
    }
}

#[test]
fn test_mixed_comparison_operators_nest() {
    match parse_initializer("1 < 2 == true") {
        Expr::Comparison(outer) => {
            assert_eq!(outer.operator, ComparisonOp::Equals);
            assert_eq!(outer.operands.len(), 2);
            assert!(matches!(&outer.operands[0], Expr::Comparison(inner) if inner.operator == ComparisonOp::Less));
        }
        other => panic!("Expected comparison chain, found {:?}", other),
    }
}

#[test]
fn test_logical_chain() {
    match parse_initializer("a && b || !c") {
        Expr::Logical(logical) => {
            assert_eq!(logical.operands.len(), 3);
            assert_eq!(logical.operators, vec![LogicalOp::And, LogicalOp::Or]);
            assert!(matches!(&logical.operands[2], Expr::Not(_)));
        }
        other => panic!("Expected logical chain, found {:?}", other),
    }
}

#[test]
fn test_negation_binds_tighter_than_multiplication() {
    match parse_initializer("-a * b") {
        Expr::Multiplicative(mult) => assert!(matches!(&mult.operands[0], Expr::Neg(_))),
        other => panic!("Expected multiplicative chain, found {:?}", other),
    }
}

#[test]
fn test_ternary_is_right_associative() {
    match parse_initializer("a ? 1 : b ? 2 : 3") {
        Expr::Ternary(ternary) => {
            assert_eq!(ternary.operands.len(), 3);
            assert!(matches!(&ternary.operands[2], Expr::Ternary(_)));
        }
        other => panic!("Expected ternary, found {:?}", other),
    }
}

#[test]
fn test_list_literal() {
    assert!(matches!(parse_initializer("[]"), Expr::List(list) if list.elements.is_empty()));
    assert!(matches!(parse_initializer("[1, 2, 3]"), Expr::List(list) if list.elements.len() == 3));
}

#[test]
fn test_missing_semicolon() {
    let error = parse_source("x = 1").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_expression_is_not_a_statement() {
    let error = parse_source("1 + 2;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_unterminated_block() {
    let error = parse_source("if (a) { x = 1;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_integer_overflow() {
    let error = parse_source("x = 99999999999999999999;").unwrap_err();
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_deeply_nested_expression_is_rejected() {
    let source = format!("declare x: int = {}1{};", "(".repeat(20000), ")".repeat(20000));
    let error = parse_source(&source).unwrap_err();

    match error.get_impl() {
        ErrorImpl::UnexpectedTokenDetailed { message, .. } => assert_eq!(message, "nesting is too deep"),
        other => panic!("Expected a nesting error, found {:?}", other),
    }
}

#[test]
fn test_deeply_nested_blocks_are_rejected() {
    let source = format!("{}{}", "while (true) { ".repeat(20000), "}".repeat(20000));
    let error = parse_source(&source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_nesting_depth_is_released() {
    // Each initializer nests close to the limit on its own; the depth must not
    // accumulate across statements
    let nested = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    let source = format!("declare a: int = {0}; declare b: int = {0}; if (true) {{ x = {0}; }}", nested);

    let program = parse_source(&source).unwrap();
    assert_eq!(program.body.len(), 3);
    assert!(matches!(parse_initializer(&nested), Expr::Integer(integer) if integer.value == 1));
}
