//! Token definitions

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum Token {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"-?[0-9]+")]
    Number,

    // Never starts where a number could, so `5x` is `5 x` and `1-2` is `1 -2`.
    #[regex(r"[a-zA-Z_+*/\\=<>!&][a-zA-Z0-9_+\-*/\\=<>!&]*")]
    #[regex(r"-([a-zA-Z_+*/\\=<>!&\-][a-zA-Z0-9_+\-*/\\=<>!&]*)?")]
    Symbol,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Result<Token, ()>> {
        Token::lexer(src).collect()
    }

    #[test]
    fn test_number_versus_symbol() {
        assert_eq!(kinds("-5"), vec![Ok(Token::Number)]);
        assert_eq!(kinds("-"), vec![Ok(Token::Symbol)]);
        assert_eq!(kinds("42"), vec![Ok(Token::Number)]);
        assert_eq!(kinds("x5"), vec![Ok(Token::Symbol)]);
        assert_eq!(kinds("-x"), vec![Ok(Token::Symbol)]);
        assert_eq!(kinds("--5"), vec![Ok(Token::Symbol)]);
    }

    #[test]
    fn test_number_prefix_is_taken_first() {
        assert_eq!(kinds("5x"), vec![Ok(Token::Number), Ok(Token::Symbol)]);
        assert_eq!(kinds("1-2"), vec![Ok(Token::Number), Ok(Token::Number)]);
        assert_eq!(kinds("a-1"), vec![Ok(Token::Symbol)]);
    }

    #[test]
    fn test_delimiters_and_whitespace() {
        assert_eq!(
            kinds(" ( {}\n) "),
            vec![
                Ok(Token::LParen),
                Ok(Token::LBrace),
                Ok(Token::RBrace),
                Ok(Token::RParen)
            ]
        );
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(kinds("#"), vec![Err(())]);
    }
}
