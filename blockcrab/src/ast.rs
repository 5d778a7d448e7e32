//! Program representation.
//!
//! A program is a list of labeled basic blocks. Each block runs a sequence of
//! assignments and then leaves through exactly one [`Jump`]. The first block is
//! the entry point.
//!
//! Programs are built in code, either directly from the enum variants or through
//! the small constructor helpers on each type:
//!
//! ```
//! use blockcrab::ast::{Assignment, BasicBlock, Expr, Jump, Program};
//!
//! let program = Program::new(
//!     ["x"],
//!     [
//!         BasicBlock::new(
//!             1,
//!             [Assignment::new("x", Expr::apply("*", Expr::var("x"), Expr::constant(2)))],
//!             Jump::goto(2),
//!         ),
//!         BasicBlock::new(2, [], Jump::ret(Expr::var("x"))),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(blockcrab::run_program(&program, [("x", 21)]).unwrap(), 42);
//! ```

use crate::error::ProgramError;
use crate::value::Int;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// A variable name. Variables are compared by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(String);

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Var {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a basic block. Only used as a jump target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Int(Int),
    Str(String),
}

impl From<Int> for Label {
    fn from(value: Int) -> Self {
        Label::Int(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Str(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Str(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(value) => write!(f, "{}", value),
            Label::Str(value) => f.write_str(value),
        }
    }
}

/// Operator name of an application node.
///
/// The name is kept as written; it is resolved to an operation when the
/// application is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Op(String);

impl Op {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Op {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Expression tree. Evaluating an expression never modifies the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal
    Constant(Int),
    /// Read of a variable
    Var(Var),
    /// Operator application. Well-formed programs always carry two arguments.
    Application { op: Op, args: Vec<Expr> },
}

impl Expr {
    pub fn constant(value: Int) -> Self {
        Expr::Constant(value)
    }

    pub fn var(var: impl Into<Var>) -> Self {
        Expr::Var(var.into())
    }

    /// Create a binary application `left op right`.
    pub fn apply(op: impl Into<Op>, left: Expr, right: Expr) -> Self {
        Expr::Application {
            op: op.into(),
            args: vec![left, right],
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{}", value),
            Expr::Var(var) => write!(f, "{}", var),
            Expr::Application { op, args } => match args.as_slice() {
                [left, right] => write!(f, "({} {} {})", left, op, right),
                _ => {
                    write!(f, "{}(", op)?;
                    for (idx, arg) in args.iter().enumerate() {
                        if idx > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    f.write_str(")")
                }
            },
        }
    }
}

/// `variable := expr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub variable: Var,
    pub expr: Expr,
}

impl Assignment {
    pub fn new(variable: impl Into<Var>, expr: Expr) -> Self {
        Self {
            variable: variable.into(),
            expr,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} := {}", self.variable, self.expr)
    }
}

/// Terminal control transfer of a basic block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Jump {
    /// Unconditional transfer to a block
    Goto(Label),
    /// Transfer to `then_label` if `condition` holds, to `else_label` otherwise.
    /// The condition must evaluate to a boolean.
    IfElse {
        condition: Expr,
        then_label: Label,
        else_label: Label,
    },
    /// Finish the program. The expression must evaluate to an integer.
    Return(Expr),
}

impl Jump {
    pub fn goto(label: impl Into<Label>) -> Self {
        Jump::Goto(label.into())
    }

    pub fn if_else(
        condition: Expr,
        then_label: impl Into<Label>,
        else_label: impl Into<Label>,
    ) -> Self {
        Jump::IfElse {
            condition,
            then_label: then_label.into(),
            else_label: else_label.into(),
        }
    }

    pub fn ret(expr: Expr) -> Self {
        Jump::Return(expr)
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jump::Goto(label) => write!(f, "goto {}", label),
            Jump::IfElse {
                condition,
                then_label,
                else_label,
            } => write!(f, "if {} goto {} else goto {}", condition, then_label, else_label),
            Jump::Return(expr) => write!(f, "return {}", expr),
        }
    }
}

/// Straight-line assignments followed by one jump. Blocks never fall through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicBlock {
    pub label: Label,
    /// Most blocks are short, so keep a few assignments inline.
    pub assignments: SmallVec<[Assignment; 4]>,
    pub jump: Jump,
}

impl BasicBlock {
    pub fn new(
        label: impl Into<Label>,
        assignments: impl IntoIterator<Item = Assignment>,
        jump: Jump,
    ) -> Self {
        Self {
            label: label.into(),
            assignments: assignments.into_iter().collect(),
            jump,
        }
    }
}

/// A validated program.
///
/// Construction guarantees that there is at least one block, that labels are
/// unique and that declared inputs are unique. A program is never mutated by
/// execution and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Program {
    inputs: Vec<Var>,
    blocks: Vec<BasicBlock>,
    /// Label to position in `blocks`
    index: HashMap<Label, usize>,
}

impl Program {
    /// Builds a program and its label lookup table.
    ///
    /// # Arguments
    /// * `inputs` - Variables the caller is expected to bind, in positional order
    /// * `blocks` - Basic blocks; the first one is the entry point
    ///
    /// # Returns
    /// * `Ok(Program)` - The validated program
    /// * `Err(ProgramError)` - If there are no blocks, or a label or input is declared twice
    pub fn new<V>(
        inputs: impl IntoIterator<Item = V>,
        blocks: impl IntoIterator<Item = BasicBlock>,
    ) -> Result<Self, ProgramError>
    where
        V: Into<Var>,
    {
        let mut declared: Vec<Var> = Vec::new();
        for var in inputs.into_iter().map(Into::into) {
            if declared.contains(&var) {
                return Err(ProgramError::DuplicateInput(var));
            }
            declared.push(var);
        }

        let blocks: Vec<BasicBlock> = blocks.into_iter().collect();
        if blocks.is_empty() {
            return Err(ProgramError::Empty);
        }

        let mut index = HashMap::with_capacity(blocks.len());
        for (position, block) in blocks.iter().enumerate() {
            match index.entry(block.label.clone()) {
                Entry::Occupied(_) => {
                    return Err(ProgramError::DuplicateLabel(block.label.clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        Ok(Self {
            inputs: declared,
            blocks,
            index,
        })
    }

    /// Declared input variables, in positional order.
    pub fn inputs(&self) -> &[Var] {
        &self.inputs
    }

    pub fn blocks(&self) -> &[BasicBlock] {
        &self.blocks
    }

    /// The entry block.
    pub fn entry(&self) -> &BasicBlock {
        // Non-empty by construction.
        &self.blocks[0]
    }

    /// Look up a block by label.
    pub fn block(&self, label: &Label) -> Option<&BasicBlock> {
        self.index.get(label).map(|&position| &self.blocks[position])
    }
}
