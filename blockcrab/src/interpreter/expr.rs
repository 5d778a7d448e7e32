use crate::ast::Expr;
use crate::error::EvalError;
use crate::store::Store;
use crate::value::{Int, Value};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

impl Expr {
    /// Evaluates an expression against the current store.
    ///
    /// # Arguments
    /// * `store` - Variable bindings visible to the expression
    ///
    /// # Returns
    /// * `Ok(Value)` - The computed value, integer or boolean
    /// * `Err(EvalError)` - If a variable is unbound, the operator is unknown,
    ///   the operands are not integers, or the arithmetic fails
    pub fn evaluate(&self, store: &Store) -> Result<Value, EvalError> {
        match self {
            Expr::Constant(value) => Ok(Value::Int(*value)),
            Expr::Var(var) => store.read(var).map(Value::Int),
            Expr::Application { op, args } => {
                let [left, right] = args.as_slice() else {
                    return Err(EvalError::ArgumentCount {
                        op: op.name().to_string(),
                        found: args.len(),
                    });
                };
                // Left is evaluated first, so its errors win.
                let left_val = left.evaluate(store)?;
                let right_val = right.evaluate(store)?;
                let op: BinOp = op.name().parse()?;
                let result = op.eval(left_val, right_val)?;
                trace!("{} {} {} = {}", left_val, op, right_val, result);
                Ok(result)
            }
        }
    }
}

/// Operators supported in application nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Eq => "=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl FromStr for BinOp {
    type Err = EvalError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "=" => BinOp::Eq,
            "<" => BinOp::Lt,
            "<=" => BinOp::Le,
            ">" => BinOp::Gt,
            ">=" => BinOp::Ge,
            "+" => BinOp::Add,
            "-" => BinOp::Sub,
            "*" => BinOp::Mul,
            "/" => BinOp::Div,
            _ => return Err(EvalError::UnsupportedOperation(name.to_string())),
        })
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Trait for evaluating binary operations on values.
pub trait BinaryEval {
    /// Evaluates a binary operation on two values.
    ///
    /// # Arguments
    /// * `left` - Left operand value
    /// * `right` - Right operand value
    ///
    /// # Returns
    /// * `Ok(Value)` - Result of the operation
    /// * `Err(EvalError)` - If the operands have the wrong type or the arithmetic fails
    fn eval(&self, left: Value, right: Value) -> Result<Value, EvalError>;
}

impl BinaryEval for BinOp {
    fn eval(&self, left: Value, right: Value) -> Result<Value, EvalError> {
        match (left, right) {
            (Value::Int(l), Value::Int(r)) => eval_int_binop(*self, l, r),
            _ => Err(EvalError::NonIntOperands {
                op: *self,
                left: left.ty(),
                right: right.ty(),
            }),
        }
    }
}

/// Evaluates a binary operation on integers.
///
/// Arithmetic is checked; overflow is reported as an error.
fn eval_int_binop(op: BinOp, left: Int, right: Int) -> Result<Value, EvalError> {
    let overflow = || EvalError::Overflow { op, left, right };
    match op {
        BinOp::Eq => Ok(Value::Bool(left == right)),
        BinOp::Lt => Ok(Value::Bool(left < right)),
        BinOp::Le => Ok(Value::Bool(left <= right)),
        BinOp::Gt => Ok(Value::Bool(left > right)),
        BinOp::Ge => Ok(Value::Bool(left >= right)),
        BinOp::Add => CheckedAdd::checked_add(&left, &right)
            .map(Value::Int)
            .ok_or_else(overflow),
        BinOp::Sub => CheckedSub::checked_sub(&left, &right)
            .map(Value::Int)
            .ok_or_else(overflow),
        BinOp::Mul => CheckedMul::checked_mul(&left, &right)
            .map(Value::Int)
            .ok_or_else(overflow),
        BinOp::Div => {
            if right.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            CheckedDiv::checked_div(&left, &right)
                .map(Value::Int)
                .ok_or_else(overflow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Op, Var};
    use crate::value::ValueType;

    fn store() -> Store {
        [("x", 1071), ("y", 462), ("zero", 0)].into_iter().collect()
    }

    fn apply(op: &str, left: Expr, right: Expr) -> Expr {
        Expr::apply(op, left, right)
    }

    #[test]
    fn test_leaves() {
        let store = store();
        assert_eq!(Expr::constant(-5).evaluate(&store), Ok(Value::Int(-5)));
        assert_eq!(Expr::var("y").evaluate(&store), Ok(Value::Int(462)));
        assert_eq!(
            Expr::var("w").evaluate(&store),
            Err(EvalError::UnboundVariable(Var::new("w")))
        );
    }

    #[test]
    fn test_int_binary_operations() {
        assert_eq!(BinOp::Add.eval(Value::Int(5), Value::Int(3)), Ok(Value::Int(8)));
        assert_eq!(BinOp::Sub.eval(Value::Int(5), Value::Int(8)), Ok(Value::Int(-3)));
        assert_eq!(BinOp::Mul.eval(Value::Int(-4), Value::Int(6)), Ok(Value::Int(-24)));
        assert_eq!(BinOp::Div.eval(Value::Int(17), Value::Int(5)), Ok(Value::Int(3)));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(BinOp::Div.eval(Value::Int(-7), Value::Int(2)), Ok(Value::Int(-3)));
        assert_eq!(BinOp::Div.eval(Value::Int(7), Value::Int(-2)), Ok(Value::Int(-3)));
    }

    #[test]
    fn test_comparisons() {
        let cases = [
            (BinOp::Eq, 3, 3, true),
            (BinOp::Eq, 3, 4, false),
            (BinOp::Lt, 3, 4, true),
            (BinOp::Lt, 4, 4, false),
            (BinOp::Le, 4, 4, true),
            (BinOp::Gt, 5, 4, true),
            (BinOp::Gt, 4, 4, false),
            (BinOp::Ge, 4, 4, true),
            (BinOp::Ge, 3, 4, false),
        ];
        for (op, left, right, expected) in cases {
            assert_eq!(
                op.eval(Value::Int(left), Value::Int(right)),
                Ok(Value::Bool(expected)),
                "{} {} {}",
                left,
                op,
                right
            );
        }
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            BinOp::Div.eval(Value::Int(10), Value::Int(0)),
            Err(EvalError::DivisionByZero)
        );
        // Zero divisor is reported even when the quotient would also overflow.
        assert_eq!(
            BinOp::Div.eval(Value::Int(Int::MIN), Value::Int(0)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_division_by_zero_nested() {
        let expr = apply(
            "+",
            Expr::constant(1),
            apply("*", Expr::var("x"), apply("/", Expr::var("y"), Expr::var("zero"))),
        );
        assert_eq!(expr.evaluate(&store()), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_int_overflow() {
        assert_eq!(
            BinOp::Add.eval(Value::Int(Int::MAX), Value::Int(1)),
            Err(EvalError::Overflow {
                op: BinOp::Add,
                left: Int::MAX,
                right: 1
            })
        );
        assert!(BinOp::Sub.eval(Value::Int(Int::MIN), Value::Int(1)).is_err());
        assert!(BinOp::Mul.eval(Value::Int(Int::MAX), Value::Int(2)).is_err());
        assert!(BinOp::Div.eval(Value::Int(Int::MIN), Value::Int(-1)).is_err());
    }

    #[test]
    fn test_non_int_operands() {
        let result = BinOp::Add.eval(Value::Bool(true), Value::Int(1));
        assert_eq!(
            result,
            Err(EvalError::NonIntOperands {
                op: BinOp::Add,
                left: ValueType::Bool,
                right: ValueType::Int
            })
        );

        // Comparing booleans is not allowed either.
        let nested = apply(
            "=",
            apply("<", Expr::var("x"), Expr::var("y")),
            apply("<", Expr::var("y"), Expr::var("x")),
        );
        assert!(matches!(
            nested.evaluate(&store()),
            Err(EvalError::NonIntOperands { op: BinOp::Eq, .. })
        ));
    }

    #[test]
    fn test_unsupported_operation() {
        let expr = apply("%", Expr::var("x"), Expr::var("y"));
        assert_eq!(
            expr.evaluate(&store()),
            Err(EvalError::UnsupportedOperation("%".to_string()))
        );
        assert!("and".parse::<BinOp>().is_err());
    }

    #[test]
    fn test_operands_evaluated_before_operator() {
        let expr = apply("%", Expr::var("unbound"), Expr::constant(1));
        assert_eq!(
            expr.evaluate(&store()),
            Err(EvalError::UnboundVariable(Var::new("unbound")))
        );
    }

    #[test]
    fn test_left_error_wins() {
        let expr = apply("+", Expr::var("a"), Expr::var("b"));
        assert_eq!(
            expr.evaluate(&store()),
            Err(EvalError::UnboundVariable(Var::new("a")))
        );
    }

    #[test]
    fn test_argument_count() {
        let unary = Expr::Application {
            op: Op::new("-"),
            args: vec![Expr::constant(1)],
        };
        assert_eq!(
            unary.evaluate(&store()),
            Err(EvalError::ArgumentCount {
                op: "-".to_string(),
                found: 1
            })
        );

        let ternary = Expr::Application {
            op: Op::new("+"),
            args: vec![Expr::constant(1), Expr::constant(2), Expr::constant(3)],
        };
        assert!(matches!(
            ternary.evaluate(&store()),
            Err(EvalError::ArgumentCount { found: 3, .. })
        ));
    }

    #[test]
    fn test_evaluate_does_not_touch_store() {
        let store = store();
        let before = store.clone();
        let expr = apply("-", apply("*", Expr::var("x"), Expr::constant(2)), Expr::var("y"));

        assert_eq!(expr.evaluate(&store), Ok(Value::Int(1680)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_op_symbols_round_trip() {
        for op in [
            BinOp::Eq,
            BinOp::Lt,
            BinOp::Le,
            BinOp::Gt,
            BinOp::Ge,
            BinOp::Add,
            BinOp::Sub,
            BinOp::Mul,
            BinOp::Div,
        ] {
            assert_eq!(op.symbol().parse::<BinOp>(), Ok(op));
        }
    }
}
