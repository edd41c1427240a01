use std::fmt::{self, Display, Formatter};

use smol_str::SmolStr;

use crate::range::Range;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone)]
pub struct Token {
    pub range: Range,
    pub kind: TokenKind,
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone)]
pub enum TokenKind {
    Asterisk,
    Caret,
    Eof,
    LParen,
    Minus,
    /// Raw digit run, kept as text. Conversion to an integer happens at
    /// evaluation time so that out-of-range literals surface there.
    NumberLiteral(SmolStr),
    Plus,
    RParen,
    Slash,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.kind)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match &self {
            TokenKind::Asterisk => write!(f, "*"),
            TokenKind::Caret => write!(f, "^"),
            TokenKind::Eof => write!(f, ""),
            TokenKind::LParen => write!(f, "("),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::NumberLiteral(digits) => write!(f, "{}", digits),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Slash => write!(f, "/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TokenKind::Plus, "+")]
    #[case(TokenKind::Minus, "-")]
    #[case(TokenKind::Asterisk, "*")]
    #[case(TokenKind::Slash, "/")]
    #[case(TokenKind::Caret, "^")]
    #[case(TokenKind::LParen, "(")]
    #[case(TokenKind::RParen, ")")]
    #[case(TokenKind::Eof, "")]
    #[case(TokenKind::NumberLiteral(SmolStr::new("42")), "42")]
    fn test_display(#[case] kind: TokenKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn test_is_eof() {
        let token = Token {
            range: Range::default(),
            kind: TokenKind::Eof,
        };
        assert!(token.is_eof());

        let token = Token {
            range: Range::default(),
            kind: TokenKind::Plus,
        };
        assert!(!token.is_eof());
    }
}
