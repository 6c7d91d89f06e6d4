use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{ComparisonExpr, IdentifierExpr, ListExpr, ValueExpr},
        statements::{AssignStmt, BlockStmt, Condition, DeclareStmt},
    },
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::{
    environment::Environment,
    metrics::Metrics,
    types::{is_numeric, types_equal, VarType},
};

/// How an identifier node is being used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRole {
    /// Read for its value; must be declared.
    Value,
    /// Declared or assigned; resolved by the statement that owns it.
    Target,
}

#[derive(Debug, Default)]
pub struct TypeChecker {
    environment: Environment,
    /// Enclosing environments, innermost last
    parents: Vec<Environment>,
    pub metrics: Metrics,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            environment: Environment::new(),
            parents: vec![],
            metrics: Metrics::default(),
        }
    }

    pub fn get_current_environment(&self) -> &Environment {
        &self.environment
    }

    pub fn get_current_environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Enters a block: the block works on a snapshot of the current bindings.
    pub fn enter_scope(&mut self) {
        let child = self.environment.child();
        let parent = std::mem::replace(&mut self.environment, child);
        self.parents.push(parent);
    }

    /// Leaves a block, discarding every binding made inside it.
    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.parents.pop() {
            self.environment = parent;
        }
    }

    /// Number of blocks currently entered, 0 at top level.
    pub fn depth(&self) -> usize {
        self.parents.len()
    }
}

fn invalid_expression(span: &Span) -> Error {
    Error::new(ErrorImpl::InvalidExpressionType, span.start.clone())
}

fn malformed(node: &'static str, children: usize, span: &Span) -> Error {
    Error::new(ErrorImpl::MalformedNode { node, children }, span.start.clone())
}

/// Counts the operators of an n-ary chain, one between each pair of operands.
fn count_operators(type_checker: &mut TypeChecker, operands: usize) {
    if operands > 1 {
        type_checker.metrics.operators += operands - 1;
    }
}

/// Computes the type of an expression. `Ok(None)` is an expression that yields
/// no value.
pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> Result<Option<VarType>, Error> {
    match ast {
        Expr::Integer(_) => Ok(Some(VarType::Int)),
        Expr::Float(_) => Ok(Some(VarType::Float)),
        Expr::Bool(_) => Ok(Some(VarType::Bool)),
        Expr::Identifier(identifier) => type_check_identifier(type_checker, identifier, IdentifierRole::Target),
        Expr::Value(value) => type_check_value(type_checker, value),
        Expr::List(list) => type_check_list(type_checker, list),
        Expr::Not(not) => {
            type_checker.metrics.operators += 1;

            let operand = type_check_expr(type_checker, &not.operand)?;
            if operand != Some(VarType::Bool) {
                return Err(invalid_expression(not.operand.get_span()));
            }

            Ok(Some(VarType::Bool))
        }
        Expr::Neg(neg) => {
            type_checker.metrics.operators += 1;

            let operand = type_check_expr(type_checker, &neg.operand)?;
            if !is_numeric(operand) {
                return Err(invalid_expression(neg.operand.get_span()));
            }

            Ok(operand)
        }
        Expr::Additive(additive) => type_check_numeric_chain(type_checker, &additive.operands, "Additive", &additive.span),
        Expr::Multiplicative(mult) => type_check_numeric_chain(type_checker, &mult.operands, "Multiplicative", &mult.span),
        Expr::Logical(logical) => {
            if logical.operands.is_empty() {
                return Err(malformed("Logical", 0, &logical.span));
            }
            count_operators(type_checker, logical.operands.len());

            for operand in logical.operands.iter() {
                if type_check_expr(type_checker, operand)? != Some(VarType::Bool) {
                    return Err(invalid_expression(operand.get_span()));
                }
            }

            Ok(Some(VarType::Bool))
        }
        Expr::Comparison(comparison) => type_check_comparison(type_checker, comparison),
        Expr::Ternary(ternary) => match ternary.operands.as_slice() {
            [single] => type_check_expr(type_checker, single),
            [condition, then, otherwise] => {
                type_checker.metrics.conditionals += 1;

                if type_check_expr(type_checker, condition)? != Some(VarType::Bool) {
                    return Err(Error::new(ErrorImpl::InvalidCondition, condition.get_span().start.clone()));
                }

                let then_type = type_check_expr(type_checker, then)?;
                let otherwise_type = type_check_expr(type_checker, otherwise)?;
                if !types_equal(then_type, otherwise_type) {
                    return Err(invalid_expression(otherwise.get_span()));
                }

                Ok(then_type)
            }
            operands => Err(malformed("Ternary", operands.len(), &ternary.span)),
        },
    }
}

/// Identifiers only resolve to a type when read as a value.
pub fn type_check_identifier(type_checker: &mut TypeChecker, identifier: &IdentifierExpr, role: IdentifierRole) -> Result<Option<VarType>, Error> {
    match role {
        IdentifierRole::Value => type_checker
            .get_current_environment()
            .lookup(&identifier.value, identifier.span.start.clone())
            .map(Some),
        IdentifierRole::Target => Ok(None),
    }
}

pub fn type_check_value(type_checker: &mut TypeChecker, value: &ValueExpr) -> Result<Option<VarType>, Error> {
    match value.inner.as_deref() {
        None => Ok(None),
        Some(Expr::Identifier(identifier)) => type_check_identifier(type_checker, identifier, IdentifierRole::Value),
        Some(inner) => type_check_expr(type_checker, inner),
    }
}

/// Every element must share the first element's type. The element type is not
/// tracked past this point.
pub fn type_check_list(type_checker: &mut TypeChecker, list: &ListExpr) -> Result<Option<VarType>, Error> {
    let Some((first, rest)) = list.elements.split_first() else {
        return Ok(Some(VarType::List));
    };

    let first_type = type_check_expr(type_checker, first)?;
    for element in rest {
        let element_type = type_check_expr(type_checker, element)?;
        if !types_equal(first_type, element_type) {
            return Err(invalid_expression(element.get_span()));
        }
    }

    Ok(Some(VarType::List))
}

/// Additive and multiplicative chains: all operands numeric and of one
/// concrete type, which is the result.
fn type_check_numeric_chain(type_checker: &mut TypeChecker, operands: &[Expr], node: &'static str, span: &Span) -> Result<Option<VarType>, Error> {
    match operands {
        [] => Err(malformed(node, 0, span)),
        [single] => type_check_expr(type_checker, single),
        _ => {
            count_operators(type_checker, operands.len());

            let mut result_type = None;
            for operand in operands {
                let operand_type = type_check_expr(type_checker, operand)?;
                if !is_numeric(operand_type) {
                    return Err(invalid_expression(operand.get_span()));
                }

                match result_type {
                    None => result_type = operand_type,
                    Some(_) if result_type != operand_type => return Err(invalid_expression(operand.get_span())),
                    Some(_) => {}
                }
            }

            Ok(result_type)
        }
    }
}

/// Checks each operand against the one before it. Ordering operators accept any
/// two numbers; equality operators need identical types.
pub fn type_check_comparison(type_checker: &mut TypeChecker, comparison: &ComparisonExpr) -> Result<Option<VarType>, Error> {
    let (first, rest) = match comparison.operands.as_slice() {
        [] => return Err(malformed("Comparison", 0, &comparison.span)),
        [single] => return type_check_expr(type_checker, single),
        [first, rest @ ..] => (first, rest),
    };

    count_operators(type_checker, comparison.operands.len());

    let ordering = comparison.operator.is_ordering();
    let mut left_type = type_check_expr(type_checker, first)?;

    for operand in rest {
        let right_type = type_check_expr(type_checker, operand)?;

        let valid = if ordering {
            is_numeric(left_type) && is_numeric(right_type)
        } else {
            types_equal(left_type, right_type)
        };
        if !valid {
            return Err(invalid_expression(operand.get_span()));
        }

        left_type = right_type;
    }

    Ok(Some(VarType::Bool))
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, ast: &Stmt) -> Result<(), Error> {
    match ast {
        Stmt::Declare(declare) => type_check_declare(type_checker, declare),
        Stmt::Assign(assign) => type_check_assign(type_checker, assign),
        Stmt::If(if_stmt) => {
            type_checker.metrics.conditionals += 1;

            type_check_condition(type_checker, &if_stmt.condition)?;
            type_check_block(type_checker, &if_stmt.then_body)?;
            if let Some(else_body) = &if_stmt.else_body {
                type_check_block(type_checker, else_body)?;
            }

            Ok(())
        }
        Stmt::While(while_stmt) => {
            type_checker.metrics.loops += 1;

            type_check_condition(type_checker, &while_stmt.condition)?;
            type_check_block(type_checker, &while_stmt.body)
        }
        Stmt::DoWhile(do_while) => {
            type_checker.metrics.loops += 1;

            // Source order: the body comes before its condition
            type_check_block(type_checker, &do_while.body)?;
            type_check_condition(type_checker, &do_while.condition)
        }
    }
}

/// The declaration is counted as soon as the name is bound, before its
/// initializer is checked.
pub fn type_check_declare(type_checker: &mut TypeChecker, declare: &DeclareStmt) -> Result<(), Error> {
    let name = &declare.identifier.value;
    let position = declare.identifier.span.start.clone();

    // A redeclaration is reported ahead of an unknown type keyword
    if type_checker.get_current_environment().get_variable(name).is_some() {
        return Err(Error::new(ErrorImpl::MultipleDeclaration { variable: name.clone() }, position));
    }

    let declared_type = VarType::from_keyword(&declare.type_name).ok_or_else(|| {
        Error::new(ErrorImpl::UnknownType { type_: declare.type_name.clone() }, declare.span.start.clone())
    })?;

    type_checker
        .get_current_environment_mut()
        .declare_variable(name, declared_type, position)?;
    type_checker.metrics.variables += 1;

    if let Some(value) = &declare.value {
        let value_type = type_check_expr(type_checker, value)?;
        if !types_equal(Some(declared_type), value_type) {
            return Err(Error::new(
                ErrorImpl::AssignmentTypeMismatch { variable: name.clone() },
                value.get_span().start.clone(),
            ));
        }
    }

    Ok(())
}

pub fn type_check_assign(type_checker: &mut TypeChecker, assign: &AssignStmt) -> Result<(), Error> {
    let name = &assign.identifier.value;

    // The target must exist before its value is looked at
    type_checker
        .get_current_environment()
        .lookup(name, assign.identifier.span.start.clone())?;

    let value_type = type_check_expr(type_checker, &assign.value)?;

    type_checker
        .get_current_environment()
        .assign(name, value_type, assign.value.get_span().start.clone())
}

/// An empty condition only occurs in partial trees and is accepted.
pub fn type_check_condition(type_checker: &mut TypeChecker, condition: &Condition) -> Result<(), Error> {
    if let Some(expr) = &condition.expr {
        if type_check_expr(type_checker, expr)? != Some(VarType::Bool) {
            return Err(Error::new(ErrorImpl::InvalidCondition, expr.get_span().start.clone()));
        }
    }

    Ok(())
}

pub fn type_check_block(type_checker: &mut TypeChecker, ast: &BlockStmt) -> Result<(), Error> {
    type_checker.enter_scope();
    let result = ast.iter().try_for_each(|stmt| type_check_stmt(type_checker, stmt));
    type_checker.exit_scope();

    result
}

/// Checks a whole program from a fresh root scope and returns its counters.
///
/// The first violation aborts the pass; no counters are returned on failure.
pub fn type_check(ast: &BlockStmt) -> Result<Metrics, Error> {
    let mut type_checker = TypeChecker::new();

    for stmt in ast.iter() {
        type_check_stmt(&mut type_checker, stmt)?;
    }

    Ok(type_checker.metrics)
}
