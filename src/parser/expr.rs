use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AdditiveExpr, AdditiveOp, BoolExpr, ComparisonExpr, ComparisonOp, FloatExpr,
            IdentifierExpr, IntegerExpr, ListExpr, LogicalExpr, LogicalOp, MultiplicativeExpr,
            MultiplicativeOp, NegExpr, NotExpr, TernaryExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let expr = parse_nested_expr(parser, bp);
    parser.exit_nesting();

    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than `bp`, keep extending the lhs
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() },
                    parser.get_position(),
                ))
            }
        };

        let binding_power = parser.current_binding_power();
        left = led(parser, left, binding_power)?;
    }

    Ok(left)
}

fn span_between(left: &Expr, right: &Expr) -> Span {
    Span {
        start: left.get_span().start.clone(),
        end: right.get_span().end.clone(),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => match parser.current_token().value.parse::<i64>() {
            Ok(value) => Ok(Expr::Integer(IntegerExpr { value, span: parser.advance().span.clone() })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: parser.current_token().value.clone() },
                parser.get_position(),
            )),
        },
        TokenKind::Float => match parser.current_token().value.parse::<f64>() {
            Ok(value) => Ok(Expr::Float(FloatExpr { value, span: parser.advance().span.clone() })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: parser.current_token().value.clone() },
                parser.get_position(),
            )),
        },
        TokenKind::True | TokenKind::False => {
            let token = parser.advance();
            Ok(Expr::Bool(BoolExpr {
                value: token.kind == TokenKind::True,
                span: token.span.clone(),
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::value(IdentifierExpr {
                value: token.value.clone(),
                span: token.span.clone(),
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() },
            parser.get_position(),
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operand = parse_expr(parser, BindingPower::Unary)?;
    let span = Span {
        start: operator_token.span.start.clone(),
        end: operand.get_span().end.clone(),
    };

    if operator_token.kind == TokenKind::Not {
        Ok(Expr::Not(NotExpr { operand: Box::new(operand), span }))
    } else {
        Ok(Expr::Neg(NegExpr { operand: Box::new(operand), span }))
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_list_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();

    let mut elements = vec![];
    while parser.current_token_kind() != TokenKind::CloseBracket {
        elements.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else if parser.current_token_kind() != TokenKind::CloseBracket {
            return Err(parser.detailed_error("expected `,` or `]` in list literal"));
        }
    }

    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::List(ListExpr {
        elements,
        span: Span { start, end: parser.previous_end() },
    }))
}

pub fn parse_additive_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let mut operands = vec![left];
    let mut operators = vec![];

    loop {
        let operator = match parser.current_token_kind() {
            TokenKind::Plus => AdditiveOp::Add,
            TokenKind::Dash => AdditiveOp::Sub,
            _ => break,
        };
        parser.advance();
        operators.push(operator);
        operands.push(parse_expr(parser, bp)?);
    }

    let span = span_between(&operands[0], &operands[operands.len() - 1]);
    Ok(Expr::Additive(AdditiveExpr { operands, operators, span }))
}

pub fn parse_multiplicative_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let mut operands = vec![left];
    let mut operators = vec![];

    loop {
        let operator = match parser.current_token_kind() {
            TokenKind::Star => MultiplicativeOp::Mul,
            TokenKind::Slash => MultiplicativeOp::Div,
            TokenKind::Percent => MultiplicativeOp::Mod,
            _ => break,
        };
        parser.advance();
        operators.push(operator);
        operands.push(parse_expr(parser, bp)?);
    }

    let span = span_between(&operands[0], &operands[operands.len() - 1]);
    Ok(Expr::Multiplicative(MultiplicativeExpr { operands, operators, span }))
}

pub fn parse_logical_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let mut operands = vec![left];
    let mut operators = vec![];

    loop {
        let operator = match parser.current_token_kind() {
            TokenKind::And => LogicalOp::And,
            TokenKind::Or => LogicalOp::Or,
            _ => break,
        };
        parser.advance();
        operators.push(operator);
        operands.push(parse_expr(parser, bp)?);
    }

    let span = span_between(&operands[0], &operands[operands.len() - 1]);
    Ok(Expr::Logical(LogicalExpr { operands, operators, span }))
}

/// Collects operands while the operator symbol stays the same. A different
/// comparison operator ends the chain; the Pratt loop then starts a new chain
/// with this one as its first operand.
pub fn parse_comparison_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let chain_kind = parser.current_token_kind();
    let operator = ComparisonOp::from_token_kind(chain_kind)
        .ok_or_else(|| parser.detailed_error("expected a comparison operator"))?;

    let mut operands = vec![left];
    while parser.current_token_kind() == chain_kind {
        parser.advance();
        operands.push(parse_expr(parser, bp)?);
    }

    let span = span_between(&operands[0], &operands[operands.len() - 1]);
    Ok(Expr::Comparison(ComparisonExpr { operator, operands, span }))
}

/// `condition ? then : otherwise`, right associative.
pub fn parse_ternary_expr(parser: &mut Parser, condition: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let then = parse_expr(parser, BindingPower::Default)?;

    let error = parser.detailed_error("expected `:` in ternary expression");
    parser.expect_error(TokenKind::Colon, Some(error))?;

    let otherwise = parse_expr(parser, BindingPower::Default)?;

    let span = span_between(&condition, &otherwise);
    Ok(Expr::Ternary(TernaryExpr {
        operands: vec![condition, then, otherwise],
        span,
    }))
}
