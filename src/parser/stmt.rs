use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{AssignStmt, BlockStmt, Condition, DeclareStmt, DoWhileStmt, IfStmt, WhileStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        Some(handler) => {
            let handler = *handler;
            handler(parser)
        }
        None => Err(parser.detailed_error("expected a statement")),
    }
}

fn parse_identifier(parser: &mut Parser, message: &str) -> Result<IdentifierExpr, Error> {
    let error = parser.detailed_error(message);
    let token = parser.expect_error(TokenKind::Identifier, Some(error))?;

    Ok(IdentifierExpr {
        value: token.value,
        span: token.span,
    })
}

pub fn parse_declare_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let identifier = parse_identifier(parser, "expected identifier during variable declaration")?;
    parser.expect(TokenKind::Colon)?;

    let error = parser.detailed_error("expected a type name after `:`");
    let type_name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Declare(DeclareStmt {
        identifier,
        type_name,
        value,
        span: Span { start, end: parser.previous_end() },
    }))
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier = parse_identifier(parser, "expected identifier")?;
    let start = identifier.span.start.clone();

    let error = parser.detailed_error("expected `=` after identifier");
    parser.expect_error(TokenKind::Assignment, Some(error))?;

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assign(AssignStmt {
        identifier,
        value,
        span: Span { start, end: parser.previous_end() },
    }))
}

pub fn parse_condition(parser: &mut Parser) -> Result<Condition, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.span.start;

    let expr = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::CloseParen)?;

    Ok(Condition {
        expr: Some(expr),
        span: Span { start, end: parser.previous_end() },
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;
    parser.enter_nesting()?;

    let mut statements = Vec::new();
    while !parser.current_token().is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EOF]) {
        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.exit_nesting();
                return Err(error);
            }
        }
    }

    parser.exit_nesting();
    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body: statements,
        span: Span { start, end: parser.previous_end() },
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_condition(parser)?;
    let then_body = parse_block_stmt(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: Span { start, end: parser.previous_end() },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_condition(parser)?;
    let body = parse_block_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        span: Span { start, end: parser.previous_end() },
    }))
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let body = parse_block_stmt(parser)?;

    let error = parser.detailed_error("expected `while` after do block");
    parser.expect_error(TokenKind::While, Some(error))?;

    let condition = parse_condition(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::DoWhile(DoWhileStmt {
        body,
        condition,
        span: Span { start, end: parser.previous_end() },
    }))
}
