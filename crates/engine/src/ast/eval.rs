use crate::error::{EvalError, EvalResult};

use super::{BinaryOp, Expr, UnaryOp};

/// Constant-folds a tree down to a single constant leaf.
pub trait Eval {
    fn eval(&self) -> EvalResult<Expr>;
}

impl Eval for Expr {
    fn eval(&self) -> EvalResult<Expr> {
        match self {
            Expr::Integer(_) | Expr::Double(_) => Ok(self.clone()),
            Expr::Unary(op, operand) => eval_unary(*op, operand),
            Expr::Binary(op, lhs, rhs) => {
                // Left before right. Nothing observable depends on the
                // order yet, but sequence semantics require it.
                let lhs = lhs.eval()?;
                let rhs = rhs.eval()?;
                eval_binary(*op, lhs, rhs)
            }
        }
    }
}

/// Unary operators have no evaluation semantics; the result is a fixed
/// placeholder zero no matter the operator or operand.
///
/// Increment and decrement would need a mutable binding target, which
/// the tree cannot express.
/// TODO: define semantics for Positive/Negative/Invert/Not, which need
/// no binding target.
fn eval_unary(_op: UnaryOp, _operand: &Expr) -> EvalResult<Expr> {
    Ok(Expr::Integer(0))
}

fn eval_binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> EvalResult<Expr> {
    use Expr::{Double, Integer};

    match (lhs, rhs) {
        (Integer(l), Integer(r)) => integer_op(op, l, r),
        (Double(l), Double(r)) => double_op(op, l, r),
        // Mixed kinds promote the integer side to double
        (Integer(l), Double(r)) => double_op(op, l as f64, r),
        (Double(l), Integer(r)) => double_op(op, l, r as f64),
        (lhs, rhs) => Err(EvalError::UnhandledOperands {
            operator: op,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }),
    }
}

fn integer_op(op: BinaryOp, l: i64, r: i64) -> EvalResult<Expr> {
    let value = match op {
        BinaryOp::Multiply => l.checked_mul(r),
        // Checked division truncates toward zero and also catches the
        // one overflowing case, MIN / -1
        BinaryOp::Divide => {
            if r == 0 {
                return Err(EvalError::DivisionByZero(op));
            }
            l.checked_div(r)
        }
        BinaryOp::Modulo => {
            if r == 0 {
                return Err(EvalError::DivisionByZero(op));
            }
            l.checked_rem(r)
        }
        BinaryOp::Add => l.checked_add(r),
        BinaryOp::Subtract => l.checked_sub(r),
        BinaryOp::Sequence => Some(r),
    };
    value.map(Expr::Integer).ok_or(EvalError::Overflow(op))
}

fn double_op(op: BinaryOp, l: f64, r: f64) -> EvalResult<Expr> {
    let value = match op {
        BinaryOp::Multiply => l * r,
        // IEEE division, infinities and all
        BinaryOp::Divide => l / r,
        BinaryOp::Modulo => return Err(EvalError::KindUnsupported),
        BinaryOp::Add => l + r,
        BinaryOp::Subtract => l - r,
        BinaryOp::Sequence => r,
    };
    Ok(Expr::Double(value))
}
