//! Common test utilities and macros

use blockcrab::ast::{Assignment, BasicBlock, Expr, Jump, Label, Program};
use blockcrab::value::Int;

#[derive(Debug)]
pub enum TestResult {
    SuccessWithValue(Int),
    Error(String),
    ErrorRegex(String),
}

impl PartialEq for TestResult {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TestResult::SuccessWithValue(a), TestResult::SuccessWithValue(b)) => a == b,
            (TestResult::Error(a), TestResult::Error(b)) => a == b,
            (TestResult::ErrorRegex(pattern), TestResult::Error(msg)) => {
                regex::Regex::new(pattern).unwrap().is_match(msg)
            }
            (TestResult::Error(msg), TestResult::ErrorRegex(pattern)) => {
                regex::Regex::new(pattern).unwrap().is_match(msg)
            }
            _ => false,
        }
    }
}

pub fn run_program_test(program: &Program, args: &[(&str, Int)]) -> TestResult {
    match blockcrab::run_program(program, args.iter().copied()) {
        Ok(value) => TestResult::SuccessWithValue(value),
        Err(e) => TestResult::Error(e.to_string()),
    }
}

/// Builds a program over inputs `x` and `y`.
pub fn program(blocks: Vec<BasicBlock>) -> Program {
    Program::new(["x", "y"], blocks).unwrap()
}

pub fn block(label: impl Into<Label>, assignments: Vec<Assignment>, jump: Jump) -> BasicBlock {
    BasicBlock::new(label, assignments, jump)
}

pub fn var(name: &str) -> Expr {
    Expr::var(name)
}

pub fn num(value: Int) -> Expr {
    Expr::constant(value)
}

pub fn apply(op: &str, left: Expr, right: Expr) -> Expr {
    Expr::apply(op, left, right)
}

#[macro_export]
macro_rules! check_program {
    (
        $test_name:ident,
        program=$program:expr,
        args=[$(($var:expr, $val:expr)),* $(,)?],
        result=$expected:expr
    ) => {
        #[test]
        fn $test_name() {
            let program = $program;
            let result = crate::common::run_program_test(&program, &[$(($var, $val)),*]);
            assert_eq!(result, $expected);
        }
    };
}
