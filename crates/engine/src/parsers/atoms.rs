use chumsky::prelude::*;

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::lexer::Token;

/// The error/state configuration shared by every parser in the crate.
pub type CalcExtra<'src> = extra::Err<Rich<'src, Token>>;

/// A numeric literal. The lexer has already settled the integer/double
/// question: anything with a fractional or exponent part arrives as a
/// `Double` token, a bare run of digits as an `Integer`.
pub fn literal<'src>() -> impl Parser<'src, &'src [Token], Expr, CalcExtra<'src>> + Clone {
    select! {
        Token::Integer(value) => Expr::Integer(value),
        Token::Double(value) => Expr::Double(value),
    }
    .labelled("Numeric Literal")
}

impl From<Token> for BinaryOp {
    fn from(value: Token) -> Self {
        match value {
            Token::Asterisk => BinaryOp::Multiply,
            Token::Slash => BinaryOp::Divide,
            Token::Modulo => BinaryOp::Modulo,
            Token::Plus => BinaryOp::Add,
            Token::Minus => BinaryOp::Subtract,
            Token::Comma => BinaryOp::Sequence,
            _ => unreachable!(),
        }
    }
}

pub fn op<'src>(token: Token) -> impl Parser<'src, &'src [Token], BinaryOp, CalcExtra<'src>> + Clone {
    just(token).map(BinaryOp::from).labelled("Binary Operator")
}

pub fn prefix_op<'src>() -> impl Parser<'src, &'src [Token], UnaryOp, CalcExtra<'src>> + Clone {
    select! {
        Token::PlusPlus => UnaryOp::PreIncrement,
        Token::MinusMinus => UnaryOp::PreDecrement,
        Token::Plus => UnaryOp::Positive,
        Token::Minus => UnaryOp::Negative,
        Token::Tilde => UnaryOp::Invert,
        Token::Bang => UnaryOp::Not,
    }
    .labelled("Prefix Operator")
}

pub fn postfix_op<'src>() -> impl Parser<'src, &'src [Token], UnaryOp, CalcExtra<'src>> + Clone {
    select! {
        Token::PlusPlus => UnaryOp::PostIncrement,
        Token::MinusMinus => UnaryOp::PostDecrement,
    }
    .labelled("Postfix Operator")
}
