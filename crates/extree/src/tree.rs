pub mod node;
pub mod parser;
pub mod printer;

use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;

#[cfg(feature = "tree-json")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, InnerError};
use crate::eval::Evaluator;
use crate::lexer;
use node::Node;
use parser::Parser;
use printer::{InOrder, PostOrder};

/// A binary expression tree built from a fully parenthesized arithmetic
/// expression.
///
/// The tree exclusively owns its nodes; `Clone` performs a structural deep
/// copy, so two values never share a node and mutating one cannot affect the
/// other.
#[cfg_attr(feature = "tree-json", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionTree {
    root: Option<Box<Node>>,
    source: String,
}

impl ExpressionTree {
    /// Creates a tree with no expression. Its result is 0 and it prints
    /// nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree directly from a root node, with no source text.
    ///
    /// Hand-built trees are not checked for well-formedness; the evaluator's
    /// defensive errors cover them.
    pub fn from_root(root: Option<Box<Node>>) -> Self {
        Self {
            root,
            source: String::new(),
        }
    }

    /// Builds a tree from an expression such as `"((2)+(3))*(4)"`.
    ///
    /// An empty string yields an empty tree. Only characters outside the
    /// grammar's alphabet are rejected here; structurally malformed input
    /// parses best-effort and surfaces at [`ExpressionTree::result`].
    pub fn parse(expr: &str) -> Result<Self, Error> {
        let mut tree = Self::new();
        tree.set_expression(expr)?;
        Ok(tree)
    }

    /// Replaces the current tree wholesale with a parse of `expr`.
    ///
    /// On error the previous tree is discarded and the value is left empty,
    /// with `expr` recorded as its source text.
    pub fn set_expression(&mut self, expr: &str) -> Result<(), Error> {
        self.source = expr.to_string();
        self.root = None;

        if expr.is_empty() {
            return Ok(());
        }

        let tokens = lexer::tokenize(expr)
            .map_err(|e| Error::from_error(expr, InnerError::Lexer(e)))?;
        self.root = Parser::new(tokens.iter()).parse();

        Ok(())
    }

    /// Evaluates the tree to an integer with the default evaluator.
    pub fn result(&self) -> Result<i64, Error> {
        Evaluator::default()
            .eval(self)
            .map_err(|e| Error::from_error(self.source.clone(), InnerError::Eval(e)))
    }

    /// The expression text last supplied.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Writes the in-order rendering into `out` and hands the sink back for
    /// chaining. An empty tree writes nothing.
    pub fn write_in_order<W: Write>(&self, out: &mut W) -> fmt::Result {
        match &self.root {
            Some(root) => printer::write_in_order(out, root),
            None => Ok(()),
        }
    }

    /// Writes the post-order (reverse-Polish) rendering into `out`.
    pub fn write_post_order<W: Write>(&self, out: &mut W) -> fmt::Result {
        match &self.root {
            Some(root) => printer::write_post_order(out, root),
            None => Ok(()),
        }
    }

    /// In-order rendering as a lazy [`Display`] value.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder(self)
    }

    /// Post-order rendering as a lazy [`Display`] value.
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder(self)
    }
}

impl FromStr for ExpressionTree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for ExpressionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        self.write_in_order(f)
    }
}
