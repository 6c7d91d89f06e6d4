//! Type checking and semantic analysis module.
//!
//! This module verifies that a parsed program obeys the static typing rules
//! of the language. It:
//!
//! - Infers the type of every expression and checks operator operands
//! - Checks declarations, assignments and conditions against declared types
//! - Tracks identifier visibility through nested block scopes
//! - Counts declarations, loops, conditionals and operators
//!
//! Checking is a single depth-first pass that stops at the first violation.

pub mod environment;
pub mod metrics;
pub mod type_checker;
pub mod types;
