use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::value::{Value, ValueKind};

/// A declared variable: the kind it was declared with and its current value.
///
/// Assignment replaces the value without checking it against `kind`; the
/// kind only drives how `read` converts input.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub kind: ValueKind,
    pub value: Value,
}

/// Flat variable storage for one evaluation session.
///
/// There are no nested scopes. Declaring a name twice replaces the earlier
/// entry, kind included.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Variable>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    pub fn declare(&mut self, name: &str, kind: ValueKind, value: Value) {
        self.variables
            .insert(name.to_string(), Variable { kind, value });
    }

    pub fn get(&self, name: &str, position: &Position) -> Result<&Variable, Error> {
        self.variables
            .get(name)
            .ok_or_else(|| not_declared(name, position))
    }

    /// Overwrites the value of an existing variable.
    pub fn assign(&mut self, name: &str, value: Value, position: &Position) -> Result<(), Error> {
        match self.variables.get_mut(name) {
            Some(variable) => {
                variable.value = value;
                Ok(())
            }
            None => Err(not_declared(name, position)),
        }
    }
}

fn not_declared(name: &str, position: &Position) -> Error {
    Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: name.to_string(),
        },
        position.clone(),
    )
}
