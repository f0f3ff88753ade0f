use std::fmt::Display;

use logos::{Lexer, Logos, Span};

fn integer(lex: &mut Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

fn double(lex: &mut Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// All the Tokens that the lexer can produce
#[rustfmt::skip]
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\x0b\x0c]+")]
pub enum Token {
    // A real number needs a fractional or exponent part; a bare run of
    // digits always lexes as an integer.
    #[regex(r"(\d+\.\d*|\.\d+)([eE][+-]?\d+)?|\d+[eE][+-]?\d+", double)]
                        Double(f64),
    #[regex(r"\d+", integer)]
                        Integer(i64),

    // Longest match means these win over bare Plus/Minus
    #[token("++")]      PlusPlus,
    #[token("--")]      MinusMinus,

    // Operators
    #[token("+")]       Plus,
    #[token("-")]       Minus,
    #[token("*")]       Asterisk,
    #[token("/")]       Slash,
    #[token("%")]       Modulo,
    #[token("~")]       Tilde,
    #[token("!")]       Bang,
    #[token(",")]       Comma,

    // Grouping
    #[token("(")]       LParens,
    #[token(")")]       RParens,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

pub type Lexicon = Vec<(Token, Span)>;

/// Lexes the source string into a bare vector of tokens, ignoring any
/// lexical errors.
pub fn quick_tokens(source: &str) -> Vec<Token> {
    Token::lexer(source).flatten().collect()
}

/// Lexes the longest valid prefix of the source into tokens with their
/// byte spans. Lexing stops at the first character that cannot start a
/// token; its offset is returned so the caller can treat the remainder
/// of the input as unconsumed.
pub fn tokenize(source: &str) -> (Lexicon, Option<usize>) {
    let mut lex = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lex.next() {
        let span = lex.span();
        match token {
            Ok(token) => tokens.push((token, span)),
            Err(()) => return (tokens, Some(span.start)),
        }
    }

    (tokens, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_integer_literals() {
        assert_eq!(vec![Token::Integer(123)], quick_tokens("123"));
        assert_eq!(vec![Token::Integer(0)], quick_tokens("0"));
    }

    #[test]
    fn lex_double_literals() {
        assert_eq!(vec![Token::Double(123.45)], quick_tokens("123.45"));
        assert_eq!(vec![Token::Double(123.0)], quick_tokens("123."));
        assert_eq!(vec![Token::Double(0.5)], quick_tokens(".5"));
        assert_eq!(vec![Token::Double(1000.0)], quick_tokens("1e3"));
        assert_eq!(vec![Token::Double(250.0)], quick_tokens("2.5E+2"));
    }

    #[test]
    fn lex_digits_never_make_a_double() {
        // The fraction/exponent requirement keeps "123" out of Double
        let tokens = quick_tokens("123 45");
        assert_eq!(vec![Token::Integer(123), Token::Integer(45)], tokens);
    }

    #[test]
    fn lex_operators() {
        assert_eq!(
            vec![
                Token::Plus,
                Token::Minus,
                Token::Asterisk,
                Token::Slash,
                Token::Modulo,
                Token::Tilde,
                Token::Bang,
                Token::Comma,
                Token::LParens,
                Token::RParens,
            ],
            quick_tokens("+ - * / % ~ ! , ( )")
        );
    }

    #[test]
    fn lex_increment_decrement_munch() {
        assert_eq!(vec![Token::PlusPlus, Token::MinusMinus], quick_tokens("++--"));
        // Three in a row: the pair wins, the straggler is a bare operator
        assert_eq!(vec![Token::PlusPlus, Token::Plus], quick_tokens("+++"));
        // Whitespace splits the pair
        assert_eq!(vec![Token::Plus, Token::Plus], quick_tokens("+ +"));
    }

    #[test]
    fn lex_whitespace_skipped() {
        assert_eq!(
            vec![Token::Integer(1), Token::Plus, Token::Integer(2)],
            quick_tokens(" 1\t+\n 2 ")
        );
    }

    #[test]
    fn lex_whole_ascii_space_class_skipped() {
        // Vertical tab and form feed count as spacing too
        assert_eq!(
            vec![Token::Integer(1), Token::Plus, Token::Integer(2)],
            quick_tokens("1\x0b+\x0c2")
        );
        let (lexicon, stop) = tokenize("1 \x0c+ \x0b2");
        assert_eq!(None, stop);
        assert_eq!(3, lexicon.len());
    }

    #[test]
    fn tokenize_full_input() {
        let (lexicon, stop) = tokenize("1+2");
        assert_eq!(None, stop);
        assert_eq!(3, lexicon.len());
        assert_eq!((Token::Plus, 1..2), lexicon[1]);
    }

    #[test]
    fn tokenize_stops_at_garbage() {
        let (lexicon, stop) = tokenize("1+@2");
        assert_eq!(Some(2), stop);
        assert_eq!(
            vec![Token::Integer(1), Token::Plus],
            lexicon.into_iter().map(|(token, _)| token).collect::<Vec<_>>()
        );
    }

    #[test]
    fn tokenize_empty_input() {
        let (lexicon, stop) = tokenize("");
        assert!(lexicon.is_empty());
        assert_eq!(None, stop);
    }
}
