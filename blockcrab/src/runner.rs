//! Positional front door to the interpreter.
//!
//! Callers that hold plain integer values, such as the command line shell,
//! use this module to bind them to a program's declared inputs.

use crate::ast::Program;
use crate::run_program;
use crate::value::Int;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Parses a line of whitespace-separated integers.
pub fn parse_values(line: &str) -> Result<Vec<Int>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<Int>()
                .with_context(|| format!("Invalid integer argument '{}'", token))
        })
        .collect()
}

/// Runs `program` with `values` bound to its declared inputs in order.
///
/// Values are zipped against the inputs: extra values are ignored and missing
/// ones leave the corresponding inputs unbound. A mismatch is only logged,
/// since a program may never read some of its inputs.
pub fn run_with_values(program: &Program, values: &[Int]) -> Result<Int> {
    let inputs = program.inputs();
    if inputs.len() != values.len() {
        warn!(
            "Program declares {} inputs but {} values were supplied",
            inputs.len(),
            values.len()
        );
    }

    let args = inputs.iter().cloned().zip(values.iter().copied());
    let result = run_program(program, args).context("Program execution failed")?;
    info!("Program result: {}", result);
    Ok(result)
}

/// Parses `line` and runs `program` with the resulting values.
pub fn run_from_line(program: &Program, line: &str) -> Result<Int> {
    let values = parse_values(line)?;
    run_with_values(program, &values)
}
