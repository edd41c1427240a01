//! `extree` parses fully parenthesized arithmetic expressions into binary
//! trees, evaluates them to integers and renders them back as in-order or
//! post-order token streams.
//!
//! Precedence is dictated entirely by parenthesization: the tree shape
//! mirrors the nesting of `(`, so there is no precedence table. Operands are
//! non-negative integer literals; operators are `+ - * / ^`.
//!
//! ## Examples
//!
//! ```
//! use extree::ExpressionTree;
//!
//! let tree = ExpressionTree::parse("((2)+(3))*(4)")?;
//!
//! assert_eq!(tree.result()?, 20);
//! assert_eq!(tree.in_order().to_string(), "2 + 3 * 4");
//! assert_eq!(tree.post_order().to_string(), "2 3 + 4 *");
//!
//! // Trees are values: clones are deep and fully independent.
//! let mut copy = tree.clone();
//! copy.set_expression("(1)+(1)")?;
//! assert_eq!(tree.result()?, 20);
//! # Ok::<(), extree::Error>(())
//! ```
//!
//! Structurally malformed input is not rejected up front; it parses
//! best-effort and surfaces, if at all, when the result is queried:
//!
//! ```
//! use extree::ExpressionTree;
//!
//! let tree = ExpressionTree::parse("(5)/(0)")?;
//! assert!(tree.result().is_err());
//! # Ok::<(), extree::Error>(())
//! ```
mod error;
mod eval;
mod lexer;
mod range;
mod tree;

pub use error::{Error, InnerError};
pub use eval::Evaluator;
pub use eval::Options as EvalOptions;
pub use eval::error::EvalError;
pub use lexer::error::LexerError;
pub use lexer::token::{Token, TokenKind};
pub use range::{Position, Range};
pub use tree::ExpressionTree;
pub use tree::node::{Expr, Node};
pub use tree::parser::Parser;
pub use tree::printer::{InOrder, PostOrder};

/// Splits an expression into tokens.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, Error> {
    lexer::tokenize(expr).map_err(|e| Error::from_error(expr, InnerError::Lexer(e)))
}

/// Tokenizes and parses an expression into a tree, returning its root node.
///
/// Returns `Ok(None)` when the input holds no expression at all; structural
/// problems do not error here, by design (see [`Parser`]).
pub fn parse(expr: &str) -> Result<Option<Box<Node>>, Error> {
    let tokens = lexer::tokenize(expr).map_err(|e| Error::from_error(expr, InnerError::Lexer(e)))?;
    Ok(Parser::new(tokens.iter()).parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("(3)+(4)").unwrap();
        assert_eq!(tokens.len(), 8);
        assert!(tokens.last().unwrap().is_eof());
    }

    #[test]
    fn test_parse() {
        let root = parse("((2)+(3))*(4)").unwrap().unwrap();
        assert!(!root.is_leaf());
        assert_eq!(parse("").unwrap(), None);
    }

    #[test]
    fn test_parse_reports_lexer_errors() {
        assert!(parse("2 @ 3").is_err());
    }
}
