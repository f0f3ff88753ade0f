use chumsky::prelude::*;

use crate::ast::Expr;
use crate::lexer::Token;

pub use atoms::CalcExtra;
pub use expressions::expression;

mod atoms;
mod expressions;

/// Parses the longest expression prefix of the token stream, yielding
/// the tree together with the number of tokens consumed. Trailing
/// tokens are ignored here; noticing them is the caller's job.
pub fn parser<'src>()
-> impl Parser<'src, &'src [Token], (Expr, usize), CalcExtra<'src>> + Clone {
    expression()
        .map_with(|expr, extra| (expr, extra.span().end))
        .then_ignore(any().repeated())
}
