use std::fmt::Display;
use std::ops::Range;

use crate::ast::BinaryOp;

pub type CalcResult<T> = Result<T, CalcError>;

/// An error from any stage of the pipeline, carrying the byte span of
/// the offending input where one is known.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcError {
    pub kind: CalcErrorKind,
    pub span: Range<usize>,
    pub msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcErrorKind {
    Lexical,
    Parse,
    Eval,
}

impl CalcError {
    pub fn lexer(span: Range<usize>, msg: String) -> Self {
        Self {
            kind: CalcErrorKind::Lexical,
            span,
            msg,
        }
    }

    pub fn parser(span: Range<usize>, msg: String) -> Self {
        Self {
            kind: CalcErrorKind::Parse,
            span,
            msg,
        }
    }

    pub fn evaluator(msg: String) -> Self {
        Self {
            kind: CalcErrorKind::Eval,
            span: 0..0,
            msg,
        }
    }
}

impl Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} error: {}", self.kind, self.msg)
    }
}

impl std::error::Error for CalcError {}

impl From<EvalError> for CalcError {
    fn from(value: EvalError) -> Self {
        Self::evaluator(value.to_string())
    }
}

pub type EvalResult<T> = Result<T, EvalError>;

/// Errors raised while folding a tree down to a constant. Evaluation is
/// all-or-nothing; any of these aborts the whole fold.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Modulo applied to operands of the double kind.
    KindUnsupported,
    /// Integer division or remainder with a zero divisor.
    DivisionByZero(BinaryOp),
    /// Integer arithmetic produced a value outside the integer kind's
    /// range.
    Overflow(BinaryOp),
    /// An operand pair no rule covers; carries renderings of both
    /// subtrees for debugging.
    UnhandledOperands {
        operator: BinaryOp,
        lhs: String,
        rhs: String,
    },
}

impl Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KindUnsupported => write!(f, "cannot take modulo of this type"),
            Self::DivisionByZero(op) => write!(f, "division by zero in '{op}'"),
            Self::Overflow(op) => write!(f, "integer overflow in '{op}'"),
            Self::UnhandledOperands { operator, lhs, rhs } => write!(
                f,
                "no evaluation rule for '{operator}' with operands {lhs} and {rhs}"
            ),
        }
    }
}

impl std::error::Error for EvalError {}
