use std::collections::HashMap;

use crate::{errors::errors::{Error, ErrorImpl}, Position};

use super::types::VarType;

/// Identifier-to-type bindings of one lexical block.
///
/// A block's environment starts as a snapshot of its parent's bindings, so outer
/// variables stay readable while block-local declarations never leak out.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variable_lookup: HashMap<String, VarType>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn declare_variable(&mut self, variable_name: &str, variable_type: VarType, current_position: Position) -> Result<(), Error> {
        if self.variable_lookup.contains_key(variable_name) {
            Err(Error::new(ErrorImpl::MultipleDeclaration { variable: variable_name.to_string() }, current_position))
        } else {
            self.variable_lookup.insert(variable_name.to_string(), variable_type);
            Ok(())
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<VarType> {
        self.variable_lookup.get(variable_name).copied()
    }

    pub fn lookup(&self, variable_name: &str, current_position: Position) -> Result<VarType, Error> {
        self.get_variable(variable_name).ok_or_else(|| {
            Error::new(ErrorImpl::UndeclaredVariable { variable: variable_name.to_string() }, current_position)
        })
    }

    /// Checks that a value of `value_type` may be stored in `variable_name`.
    /// The declared type never changes.
    pub fn assign(&self, variable_name: &str, value_type: Option<VarType>, current_position: Position) -> Result<(), Error> {
        let declared = self.lookup(variable_name, current_position.clone())?;

        if value_type != Some(declared) {
            return Err(Error::new(ErrorImpl::AssignmentTypeMismatch { variable: variable_name.to_string() }, current_position));
        }

        Ok(())
    }

    /// Independent copy of every current binding.
    pub fn child(&self) -> Environment {
        self.clone()
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}
