use std::iter::Peekable;

use crate::lexer::token::{Token, TokenKind};

use super::node::{Expr, Node};

/// Recursive-descent parser for fully parenthesized arithmetic expressions.
///
/// The grammar is `expr := digit+ | '(' expr ')' operator expr`; the tree
/// shape is dictated entirely by parenthesization, so there is no precedence
/// table. The cursor over the token stream is held by the parser and advances
/// as tokens are consumed.
///
/// Parsing is best-effort and never fails: structural problems (a missing
/// operand, an unterminated group, trailing tokens) produce a partial tree,
/// or no tree at all, and surface at evaluation time if ever.
pub struct Parser<'a> {
    tokens: Peekable<core::slice::Iter<'a, Token>>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: core::slice::Iter<'a, Token>) -> Self {
        Self {
            tokens: tokens.peekable(),
        }
    }

    pub fn parse(&mut self) -> Option<Box<Node>> {
        self.parse_expr()
    }

    fn parse_expr(&mut self) -> Option<Box<Node>> {
        let left = self.parse_operand();

        match self.tokens.peek() {
            Some(token) if Self::is_binary_op(&token.kind) => {
                let token = self.tokens.next().unwrap();
                let right = self.parse_expr();

                Some(Box::new(Node::binary(
                    Self::binary_op_char(&token.kind),
                    left,
                    right,
                    token.range.clone(),
                )))
            }
            _ => left,
        }
    }

    fn parse_operand(&mut self) -> Option<Box<Node>> {
        match self.tokens.peek().map(|token| &token.kind) {
            Some(TokenKind::NumberLiteral(_)) => {
                let token = self.tokens.next().unwrap();
                match &token.kind {
                    TokenKind::NumberLiteral(digits) => {
                        Some(Box::new(Node::leaf(digits.clone(), token.range.clone())))
                    }
                    _ => unreachable!(),
                }
            }
            Some(TokenKind::LParen) => {
                self.tokens.next();
                let expr = self.parse_expr();

                // A missing closing parenthesis is tolerated.
                if matches!(
                    self.tokens.peek().map(|token| &token.kind),
                    Some(TokenKind::RParen)
                ) {
                    self.tokens.next();
                }

                expr
            }
            _ => None,
        }
    }

    #[inline(always)]
    fn is_binary_op(kind: &TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Caret
        )
    }

    #[inline(always)]
    fn binary_op_char(kind: &TokenKind) -> char {
        match kind {
            TokenKind::Asterisk => '*',
            TokenKind::Caret => '^',
            TokenKind::Minus => '-',
            TokenKind::Plus => '+',
            TokenKind::Slash => '/',
            _ => unreachable!(),
        }
    }
}
