pub mod error;
pub mod token;

use error::LexerError;
use nom::Parser;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, multispace0},
    combinator::map,
    multi::many0,
    sequence::{preceded, terminated},
};
use smol_str::SmolStr;
use token::{Token, TokenKind};

use crate::range::{Range, Span};

macro_rules! define_token_parser {
    ($name:ident, $tag:expr, $kind:expr) => {
        fn $name(input: Span) -> IResult<Span, Token> {
            map(tag($tag), |span: Span| Token {
                range: span.into(),
                kind: $kind,
            })
            .parse(input)
        }
    };
}

define_token_parser!(plus, "+", TokenKind::Plus);
define_token_parser!(minus, "-", TokenKind::Minus);
define_token_parser!(asterisk, "*", TokenKind::Asterisk);
define_token_parser!(slash, "/", TokenKind::Slash);
define_token_parser!(caret, "^", TokenKind::Caret);
define_token_parser!(l_paren, "(", TokenKind::LParen);
define_token_parser!(r_paren, ")", TokenKind::RParen);

fn number_literal(input: Span) -> IResult<Span, Token> {
    map(digit1, |span: Span| Token {
        range: span.into(),
        kind: TokenKind::NumberLiteral(SmolStr::new(*span.fragment())),
    })
    .parse(input)
}

fn operators(input: Span) -> IResult<Span, Token> {
    alt((plus, minus, asterisk, slash, caret)).parse(input)
}

fn punctuations(input: Span) -> IResult<Span, Token> {
    alt((l_paren, r_paren)).parse(input)
}

fn tokens(input: Span) -> IResult<Span, Vec<Token>> {
    preceded(
        multispace0,
        many0(terminated(
            alt((number_literal, operators, punctuations)),
            multispace0,
        )),
    )
    .parse(input)
}

/// Splits an expression into tokens, appending a trailing [`TokenKind::Eof`].
///
/// The grammar's alphabet is digits, the five operators, parentheses and
/// whitespace. Scanning stops at the first character outside of it.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
    match tokens(Span::new(input)) {
        Ok((span, tokens)) => {
            if span.fragment().is_empty() {
                let eof: Range = span.into();

                Ok([
                    tokens,
                    vec![Token {
                        range: eof,
                        kind: TokenKind::Eof,
                    }],
                ]
                .concat())
            } else {
                Err(LexerError::UnexpectedToken(
                    span.into(),
                    span.fragment().chars().next().unwrap_or_default(),
                ))
            }
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(LexerError::UnexpectedToken(
            e.input.into(),
            e.input.fragment().chars().next().unwrap_or_default(),
        )),
        _ => unreachable!(),
    }
}
