//! Failures raised while building or running a program.
//!
//! Every error is fatal: execution stops at the first one and the error is
//! returned to the caller unchanged.

use crate::ast::{Label, Var};
use crate::interpreter::BinOp;
use crate::value::{Int, ValueType};
use thiserror::Error;

/// Structural problems detected when a [`Program`](crate::ast::Program) is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("program has no blocks")]
    Empty,
    #[error("duplicate block label `{0}`")]
    DuplicateLabel(Label),
    #[error("duplicate input variable `{0}`")]
    DuplicateInput(Var),
}

/// Errors raised during execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("undefined label `{0}`")]
    UndefinedLabel(Label),

    #[error("unbound variable read: `{0}`")]
    UnboundVariable(Var),

    #[error("boolean value cannot be stored in variable `{0}`")]
    BoolAssignment(Var),

    #[error("branch condition must be boolean, found {0}")]
    NonBoolCondition(ValueType),

    #[error("return value must be integer, found {0}")]
    NonIntReturn(ValueType),

    #[error("operands of `{op}` must be integers, found {left} and {right}")]
    NonIntOperands {
        op: BinOp,
        left: ValueType,
        right: ValueType,
    },

    #[error("unsupported operation `{0}`")]
    UnsupportedOperation(String),

    #[error("operation `{op}` must have exactly two arguments, found {found}")]
    ArgumentCount { op: String, found: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in `{left} {op} {right}`")]
    Overflow { op: BinOp, left: Int, right: Int },

    #[error("program terminated without reaching a return")]
    NoReturn,
}
