//! A calculator-grade arithmetic expression language.
//!
//! Input text flows through the lexer and parser into an [`ast::Expr`]
//! tree, which has two independent read-only consumers: the diagnostic
//! tree renderer ([`ast::TreeView`]) and the constant-folding evaluator
//! ([`ast::Eval`]).

use std::cmp::min;
use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::prelude::*;

use ast::{Eval, Expr};
use error::{CalcError, CalcResult};
use lexer::Lexicon;

pub mod ast;
pub mod error;
pub mod lexer;

mod parsers;

pub mod prelude {
    pub use crate::ast::{BinaryOp, Eval, Expr, TreeView, UnaryOp};
    pub use crate::error::{CalcError, CalcErrorKind, EvalError};
    pub use crate::{ParseOutcome, evaluate, parse, report_errors};
}

/// Outcome of a parse. The grammar matches the longest valid prefix of
/// the input, so the caller-facing question is whether everything was
/// consumed.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The whole input matched.
    Complete(Expr),
    /// A valid prefix matched; the offset is the first byte of the
    /// input that was not consumed.
    Trailing(Expr, usize),
    /// No prefix of the input forms an expression. No tree is produced.
    Failed(Vec<CalcError>),
}

/// Parses the source text into an expression tree.
pub fn parse(source: &str) -> ParseOutcome {
    let (lexicon, lex_stop) = lexer::tokenize(source);
    let tokens: Vec<_> = lexicon.iter().map(|(token, _)| token.clone()).collect();

    match parsers::parser().parse(&tokens).into_output_errors() {
        (Some((expr, consumed)), _) => {
            if consumed == tokens.len() && lex_stop.is_none() {
                ParseOutcome::Complete(expr)
            } else {
                let rest = if consumed < lexicon.len() {
                    lexicon[consumed].1.start
                } else {
                    lex_stop.unwrap_or(source.len())
                };
                ParseOutcome::Trailing(expr, rest)
            }
        }
        (None, errs) => {
            let mut errs: Vec<_> = errs
                .iter()
                .map(|err| {
                    let span = source_span(&lexicon, &err.span().into_range(), source);
                    CalcError::parser(span, err.to_string())
                })
                .collect();
            if let Some(stop) = lex_stop {
                errs.push(CalcError::lexer(
                    stop..stop + 1,
                    "unrecognized character".into(),
                ));
            }
            ParseOutcome::Failed(errs)
        }
    }
}

/// Folds a parsed tree down to its constant leaf.
pub fn evaluate(expr: &Expr) -> CalcResult<Expr> {
    Ok(expr.eval()?)
}

/// Translates a token-index span from the parser back into a byte span
/// of the source text.
fn source_span(lexicon: &Lexicon, span: &Range<usize>, source: &str) -> Range<usize> {
    if lexicon.is_empty() {
        return 0..source.len();
    }
    let start = min(span.start, lexicon.len() - 1);
    let end = min(span.end.saturating_sub(1), lexicon.len() - 1);
    lexicon[start].1.start..lexicon[end].1.end
}

/// Pretty-prints pipeline errors against the source text on stderr.
pub fn report_errors(name: &str, source: &str, errs: &[CalcError]) {
    for err in errs {
        Report::build(ReportKind::Error, (name, err.span.clone()))
            .with_message(&err.msg)
            .with_label(
                Label::new((name, err.span.clone()))
                    .with_message("Problem here")
                    .with_color(Color::Red),
            )
            .finish()
            .eprint((name, Source::from(source)))
            .unwrap();
    }
}
