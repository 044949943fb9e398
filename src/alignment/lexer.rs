//! Lexer for alignment specs using logos

use std::fmt;

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Vertical keywords
    #[token("top")]
    Top,
    #[token("bottom")]
    Bottom,

    // Horizontal keywords
    #[token("left")]
    Left,
    #[token("right")]
    Right,

    // Shared by both axes
    #[token("center")]
    Center,

    // Anything word-like that isn't a keyword, kept so errors can name it
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Top => f.write_str("top"),
            Token::Bottom => f.write_str("bottom"),
            Token::Left => f.write_str("left"),
            Token::Right => f.write_str("right"),
            Token::Center => f.write_str("center"),
            Token::Word(w) => write!(f, "'{}'", w),
        }
    }
}

/// Lex input string into tokens with spans
///
/// Unlike a filtering lexer, unrecognized input is kept as `Err(())` so the
/// caller can point at it.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).filter_map(|(t, _)| t.ok()).collect()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            tokens("top bottom left right center"),
            vec![
                Token::Top,
                Token::Bottom,
                Token::Left,
                Token::Right,
                Token::Center
            ]
        );
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(tokens("  top \t left\n"), vec![Token::Top, Token::Left]);
    }

    #[test]
    fn test_keyword_prefix_is_a_word() {
        assert_eq!(
            tokens("topmost top-left"),
            vec![
                Token::Word("topmost".to_string()),
                Token::Word("top-left".to_string())
            ]
        );
    }

    #[test]
    fn test_spans() {
        let spans: Vec<_> = lex("bottom right").map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..6, 7..12]);
    }

    #[test]
    fn test_unrecognized_character() {
        let results: Vec<_> = lex("top @").collect();
        assert_eq!(results[0], (Ok(Token::Top), 0..3));
        assert!(results[1].0.is_err());
        assert_eq!(results[1].1, 4..5);
    }
}
