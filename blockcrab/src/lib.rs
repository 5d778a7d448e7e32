//! BlockCrab Interpreter Library
//!
//! Executes programs written as a control-flow graph of labeled basic blocks.
//! Each block assigns integer variables and ends with a goto, a conditional
//! branch or a return. The result of a program is the integer it returns.
//!
//! # Examples
//! ```
//! use blockcrab::samples;
//!
//! let program = samples::euclid().unwrap();
//! let gcd = blockcrab::run_program(&program, [("x", 1071), ("y", 462)]).unwrap();
//! assert_eq!(gcd, 21);
//! ```

pub mod ast;
pub mod error;
pub mod interpreter;
pub mod runner;
pub mod samples;
pub mod store;
pub mod value;

use crate::ast::{Program, Var};
use crate::error::EvalError;
use crate::interpreter::Interpreter;
use crate::store::Store;
use crate::value::Int;

/// Execute `program` with the given initial variable bindings.
///
/// The store is built from exactly the supplied pairs. Callers are responsible
/// for binding every input the program reads; a missing binding surfaces as an
/// [`EvalError::UnboundVariable`] only if the read actually happens.
///
/// # Arguments
/// * `program` - The program to run; it is only borrowed
/// * `args` - Initial `(variable, value)` bindings
///
/// # Returns
/// * `Ok(Int)` - The value of the first `return` reached
/// * `Err(EvalError)` - The first failure encountered; execution stops there
pub fn run_program<V, I>(program: &Program, args: I) -> Result<Int, EvalError>
where
    V: Into<Var>,
    I: IntoIterator<Item = (V, Int)>,
{
    let store: Store = args.into_iter().collect();
    Interpreter::new(program, store).run()
}
