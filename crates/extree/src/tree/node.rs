use std::fmt::{self, Display, Formatter};

#[cfg(feature = "tree-json")]
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::range::Range;

/// A node of the binary expression tree.
///
/// Child slots are single-owner `Box` handles, so no two trees can ever share
/// a node and `Clone` is a structural deep copy. A well-formed tree holds a
/// digit run in every `Leaf` and both children of every `Binary`; absent
/// children only appear in best-effort parses of malformed input.
#[cfg_attr(feature = "tree-json", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Node {
    pub range: Range,
    pub expr: Expr,
}

#[cfg_attr(feature = "tree-json", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Expr {
    Leaf(SmolStr),
    Binary {
        op: char,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
}

impl Node {
    pub fn leaf(digits: impl Into<SmolStr>, range: Range) -> Self {
        Self {
            range,
            expr: Expr::Leaf(digits.into()),
        }
    }

    pub fn binary(op: char, left: Option<Box<Node>>, right: Option<Box<Node>>, range: Range) -> Self {
        Self {
            range,
            expr: Expr::Binary { op, left, right },
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.expr, Expr::Leaf(_))
    }

    pub fn left(&self) -> Option<&Node> {
        match &self.expr {
            Expr::Leaf(_) => None,
            Expr::Binary { left, .. } => left.as_deref(),
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match &self.expr {
            Expr::Leaf(_) => None,
            Expr::Binary { right, .. } => right.as_deref(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Expr::Leaf(digits) => write!(f, "{}", digits),
            Expr::Binary { op, .. } => write!(f, "{}", op),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(digits: &str) -> Option<Box<Node>> {
        Some(Box::new(Node::leaf(digits, Range::default())))
    }

    #[test]
    fn test_accessors() {
        let node = Node::binary('+', leaf("2"), leaf("3"), Range::default());
        assert!(!node.is_leaf());
        assert_eq!(node.left().map(|node| node.expr.to_string()), Some("2".to_string()));
        assert_eq!(node.right().map(|node| node.expr.to_string()), Some("3".to_string()));

        let node = Node::leaf("42", Range::default());
        assert!(node.is_leaf());
        assert_eq!(node.left(), None);
        assert_eq!(node.right(), None);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Node::binary('*', leaf("2"), leaf("3"), Range::default());
        let mut copy = original.clone();
        assert_eq!(original, copy);

        if let Expr::Binary { left, .. } = &mut copy.expr {
            *left = leaf("9");
        }
        assert_ne!(original, copy);
        assert_eq!(original.left().map(|node| node.expr.to_string()), Some("2".to_string()));
    }
}
