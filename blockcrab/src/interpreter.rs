//! This module provides the core interpretation logic.
//!
//! Blocks are executed one at a time by a dispatch loop. Each block runs its
//! assignments and then reports where control goes next, so transfers between
//! blocks never grow the native call stack.

mod block;
mod expr;

pub use block::{ControlFlow, Interpreter};
pub use expr::{BinOp, BinaryEval};
