//! Built-in sample programs.

use crate::ast::{Assignment, BasicBlock, Expr, Jump, Program};
use crate::error::ProgramError;
use crate::value::Int;

/// Declares `x` and `y` but ignores them and returns `value`.
pub fn constant(value: Int) -> Result<Program, ProgramError> {
    Program::new(
        ["x", "y"],
        [BasicBlock::new(1, [], Jump::ret(Expr::constant(value)))],
    )
}

/// Greatest common divisor of `x` and `y` by repeated subtraction.
///
/// Both inputs must be positive; otherwise the program never terminates.
pub fn euclid() -> Result<Program, ProgramError> {
    let x = || Expr::var("x");
    let y = || Expr::var("y");
    Program::new(
        ["x", "y"],
        [
            BasicBlock::new(1, [], Jump::if_else(Expr::apply("=", x(), y()), 7, 2)),
            BasicBlock::new(2, [], Jump::if_else(Expr::apply("<", x(), y()), 5, 3)),
            BasicBlock::new(
                3,
                [Assignment::new("x", Expr::apply("-", x(), y()))],
                Jump::goto(1),
            ),
            BasicBlock::new(
                5,
                [Assignment::new("y", Expr::apply("-", y(), x()))],
                Jump::goto(1),
            ),
            BasicBlock::new(7, [], Jump::ret(x())),
        ],
    )
}

/// Counts `n` down to zero and returns the number of iterations.
///
/// Every iteration jumps back and forth between two blocks, which makes it a
/// convenient stress test for long-running block cycles.
pub fn countdown() -> Result<Program, ProgramError> {
    let n = || Expr::var("n");
    let acc = || Expr::var("acc");
    Program::new(
        ["n"],
        [
            BasicBlock::new(
                "entry",
                [Assignment::new("acc", Expr::constant(0))],
                Jump::goto("loop"),
            ),
            BasicBlock::new(
                "loop",
                [],
                Jump::if_else(Expr::apply("<=", n(), Expr::constant(0)), "exit", "body"),
            ),
            BasicBlock::new(
                "body",
                [
                    Assignment::new("n", Expr::apply("-", n(), Expr::constant(1))),
                    Assignment::new("acc", Expr::apply("+", acc(), Expr::constant(1))),
                ],
                Jump::goto("loop"),
            ),
            BasicBlock::new("exit", [], Jump::ret(acc())),
        ],
    )
}
