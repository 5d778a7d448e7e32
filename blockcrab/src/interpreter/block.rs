use crate::ast::{Assignment, BasicBlock, Jump, Label, Program};
use crate::error::EvalError;
use crate::store::Store;
use crate::value::Int;
use tracing::{debug, info};

/// Execution state of one program run.
///
/// The interpreter owns the variable store and borrows the program, so the
/// same program can be run by several interpreters at once.
#[derive(Debug)]
pub struct Interpreter<'p> {
    program: &'p Program,
    store: Store,
    next_block: Option<&'p BasicBlock>,
    result: Option<Int>,
    /// Number of blocks executed so far
    steps: u64,
}

/// Outcome of executing a single block.
#[derive(Debug, PartialEq)]
pub enum ControlFlow<'p> {
    Continue(&'p BasicBlock),
    Return(Int),
}

impl<'p> Interpreter<'p> {
    /// Creates an interpreter positioned at the program's entry block.
    pub fn new(program: &'p Program, store: Store) -> Self {
        Self {
            program,
            store,
            next_block: Some(program.entry()),
            result: None,
            steps: 0,
        }
    }

    /// Runs blocks until one of them returns.
    ///
    /// The loop keeps the native stack depth constant no matter how many
    /// jumps the program performs. There is no step limit: a program that
    /// never returns keeps running.
    pub fn run(&mut self) -> Result<Int, EvalError> {
        info!(
            "Starting interpretation at block {} with {} bound variables",
            self.program.entry().label,
            self.store.len()
        );

        while let Some(block) = self.next_block.take() {
            self.steps += 1;
            match self.execute_block(block)? {
                ControlFlow::Continue(next_block) => {
                    self.next_block = Some(next_block);
                }
                ControlFlow::Return(value) => {
                    info!(
                        "Program returned {} after executing {} blocks",
                        value, self.steps
                    );
                    self.result = Some(value);
                }
            }
        }

        self.result.ok_or(EvalError::NoReturn)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Executes the assignments of `block` in order, then its jump.
    pub fn execute_block(&mut self, block: &'p BasicBlock) -> Result<ControlFlow<'p>, EvalError> {
        debug!("Executing block {}", block.label);

        for assignment in &block.assignments {
            self.execute_assignment(assignment)?;
        }

        self.execute_jump(&block.jump)
    }

    fn execute_assignment(&mut self, assignment: &Assignment) -> Result<(), EvalError> {
        let value = assignment
            .expr
            .evaluate(&self.store)?
            .as_int()
            .ok_or_else(|| EvalError::BoolAssignment(assignment.variable.clone()))?;
        debug!("Assigning {} to {}", value, assignment.variable);
        self.store.assign(&assignment.variable, value);
        Ok(())
    }

    fn execute_jump(&self, jump: &Jump) -> Result<ControlFlow<'p>, EvalError> {
        debug!("Executing jump: {}", jump);

        match jump {
            Jump::Goto(target) => self.resolve(target).map(ControlFlow::Continue),
            Jump::IfElse {
                condition,
                then_label,
                else_label,
            } => {
                let value = condition.evaluate(&self.store)?;
                let taken = value
                    .as_bool()
                    .ok_or(EvalError::NonBoolCondition(value.ty()))?;
                let target = if taken { then_label } else { else_label };
                self.resolve(target).map(ControlFlow::Continue)
            }
            Jump::Return(expr) => {
                let value = expr.evaluate(&self.store)?;
                value
                    .as_int()
                    .map(ControlFlow::Return)
                    .ok_or(EvalError::NonIntReturn(value.ty()))
            }
        }
    }

    fn resolve(&self, label: &Label) -> Result<&'p BasicBlock, EvalError> {
        self.program
            .block(label)
            .ok_or_else(|| EvalError::UndefinedLabel(label.clone()))
    }
}
