use std::fmt::{self, Display, Formatter};

use super::Expr;

const TAB_SIZE: usize = 4;

/// Displays an expression as a line-oriented, indented diagnostic tree.
///
/// This is a debugging view for humans; nothing guarantees the output
/// parses back into an [`Expr`].
pub struct TreeView<'a> {
    expr: &'a Expr,
    indent: usize,
}

impl<'a> TreeView<'a> {
    pub fn new(expr: &'a Expr) -> Self {
        Self { expr, indent: 0 }
    }

    /// Same view, starting at the given indentation.
    pub fn indented(expr: &'a Expr, indent: usize) -> Self {
        Self { expr, indent }
    }
}

impl Display for TreeView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render_node(f, self.expr, self.indent)
    }
}

fn render_node(f: &mut Formatter<'_>, expr: &Expr, indent: usize) -> fmt::Result {
    match expr {
        Expr::Integer(value) => writeln!(f, "{:indent$}constant integer: {value}", ""),
        Expr::Double(value) => writeln!(f, "{:indent$}constant double: {value}", ""),
        Expr::Unary(op, operand) => {
            writeln!(f, "{:indent$}operator: {op}", "")?;
            writeln!(f, "{:indent$}`- expression", "")?;
            render_node(f, operand, indent + TAB_SIZE)
        }
        Expr::Binary(op, lhs, rhs) => {
            writeln!(f, "{:indent$}operator: {op}", "")?;
            writeln!(f, "{:indent$}`- lhs", "")?;
            render_node(f, lhs, indent + TAB_SIZE)?;
            writeln!(f, "{:indent$}`- rhs", "")?;
            render_node(f, rhs, indent + TAB_SIZE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, UnaryOp};

    fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    #[test]
    fn render_leaves() {
        assert_eq!("constant integer: 42\n", TreeView::new(&Expr::Integer(42)).to_string());
        assert_eq!("constant double: 2.5\n", TreeView::new(&Expr::Double(2.5)).to_string());
    }

    #[test]
    fn render_binary() {
        let expr = binary(BinaryOp::Add, Expr::Integer(1), Expr::Double(2.5));
        let expected = concat!(
            "operator: +\n",
            "`- lhs\n",
            "    constant integer: 1\n",
            "`- rhs\n",
            "    constant double: 2.5\n",
        );
        assert_eq!(expected, TreeView::new(&expr).to_string());
    }

    #[test]
    fn render_nested_binary() {
        let expr = binary(
            BinaryOp::Multiply,
            binary(BinaryOp::Add, Expr::Integer(1), Expr::Integer(2)),
            Expr::Integer(3),
        );
        let expected = concat!(
            "operator: *\n",
            "`- lhs\n",
            "    operator: +\n",
            "    `- lhs\n",
            "        constant integer: 1\n",
            "    `- rhs\n",
            "        constant integer: 2\n",
            "`- rhs\n",
            "    constant integer: 3\n",
        );
        assert_eq!(expected, TreeView::new(&expr).to_string());
    }

    #[test]
    fn render_unary() {
        let expr = Expr::Unary(UnaryOp::PostIncrement, Box::new(Expr::Integer(7)));
        let expected = concat!(
            "operator: ++ (post)\n",
            "`- expression\n",
            "    constant integer: 7\n",
        );
        assert_eq!(expected, TreeView::new(&expr).to_string());
    }

    #[test]
    fn render_with_starting_indent() {
        let expr = Expr::Integer(1);
        assert_eq!(
            "        constant integer: 1\n",
            TreeView::indented(&expr, 8).to_string()
        );
    }
}
