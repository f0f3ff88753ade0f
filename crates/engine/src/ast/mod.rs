use std::fmt::Display;

mod eval;
mod render;

pub use eval::Eval;
pub use render::TreeView;

/// A parsed expression tree. Each node exclusively owns its children
/// and the tree is immutable once built; evaluation only ever produces
/// new leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(i64),
    Double(f64),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// True for the two constant leaves.
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Double(_))
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Integer(value) => write!(f, "{value}"),
            Expr::Double(value) => write!(f, "{value}"),
            Expr::Unary(op, operand) if op.is_postfix() => {
                write!(f, "({}{})", operand, op.symbol())
            }
            Expr::Unary(op, operand) => write!(f, "({}{})", op.symbol(), operand),
            Expr::Binary(BinaryOp::Sequence, lhs, rhs) => write!(f, "({lhs}, {rhs})"),
            Expr::Binary(op, lhs, rhs) => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    PostIncrement,
    PostDecrement,
    PreIncrement,
    PreDecrement,
    Positive,
    Negative,
    Invert,
    Not,
}

impl UnaryOp {
    /// The bare operator symbol, without the pre/post qualifier.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::PostIncrement | Self::PreIncrement => "++",
            Self::PostDecrement | Self::PreDecrement => "--",
            Self::Positive => "+",
            Self::Negative => "-",
            Self::Invert => "~",
            Self::Not => "!",
        }
    }

    pub fn is_postfix(&self) -> bool {
        matches!(self, Self::PostIncrement | Self::PostDecrement)
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PostIncrement => write!(f, "++ (post)"),
            Self::PostDecrement => write!(f, "-- (post)"),
            Self::PreIncrement => write!(f, "++ (pre)"),
            Self::PreDecrement => write!(f, "-- (pre)"),
            Self::Positive => write!(f, "+"),
            Self::Negative => write!(f, "-"),
            Self::Invert => write!(f, "~"),
            Self::Not => write!(f, "!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Multiply,
    Divide,
    Modulo,
    Add,
    Subtract,
    Sequence,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::Modulo => write!(f, "%"),
            Self::Add => write!(f, "+"),
            Self::Subtract => write!(f, "-"),
            Self::Sequence => write!(f, ","),
        }
    }
}
