use std::fmt;

/// Integer type stored in variables and produced by arithmetic.
///
/// Arithmetic on this type is checked: overflow aborts the run instead of wrapping.
pub type Int = i64;

/// Type information for values during interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Signed integer type
    Int,
    /// Boolean type, only produced by comparisons
    Bool,
}

/// Result of evaluating an expression.
///
/// Only integers can be stored in variables or returned from a program.
/// Booleans exist solely to feed branch conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Int(Int),
    Bool(bool),
}

impl Value {
    pub fn ty(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Bool(_) => ValueType::Bool,
        }
    }

    /// Try to interpret as an integer
    pub fn as_int(&self) -> Option<Int> {
        match self {
            Value::Int(value) => Some(*value),
            Value::Bool(_) => None,
        }
    }

    /// Try to interpret as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            Value::Int(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Int => f.write_str("int"),
            ValueType::Bool => f.write_str("bool"),
        }
    }
}
