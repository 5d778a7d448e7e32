//! Variable storage for a single execution.

use crate::ast::Var;
use crate::error::EvalError;
use crate::value::Int;
use std::collections::HashMap;

/// Mapping from variables to their current integer value.
///
/// A store belongs to exactly one execution. Variables are mutable slots: an
/// assignment overwrites any previous binding. Reading a variable that was
/// never bound is an error rather than a default value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Store {
    vars: HashMap<Var, Int>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the current value of `var`.
    ///
    /// # Returns
    /// * `Ok(Int)` - The bound value
    /// * `Err(EvalError::UnboundVariable)` - If `var` has no binding yet
    pub fn read(&self, var: &Var) -> Result<Int, EvalError> {
        self.vars
            .get(var)
            .copied()
            .ok_or_else(|| EvalError::UnboundVariable(var.clone()))
    }

    /// Binds `var` to `value`, overwriting any previous binding.
    pub fn assign(&mut self, var: &Var, value: Int) {
        self.vars.insert(var.clone(), value);
    }

    pub fn get(&self, var: &Var) -> Option<Int> {
        self.vars.get(var).copied()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<V: Into<Var>> FromIterator<(V, Int)> for Store {
    fn from_iter<I: IntoIterator<Item = (V, Int)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(var, value)| (var.into(), value)).collect(),
        }
    }
}
