use std::fmt::{self, Display, Formatter, Write};

use itertools::Itertools;
use smol_str::SmolStr;

use super::ExpressionTree;
use super::node::{Expr, Node};

/// Writes the in-order rendering of a subtree: left subtree, node, right
/// subtree, space-separated with no leading separator.
pub fn write_in_order<W: Write>(out: &mut W, node: &Node) -> fmt::Result {
    let mut tokens = Vec::new();
    collect(node, Order::In, &mut tokens);
    write!(out, "{}", tokens.iter().join(" "))
}

/// Writes the post-order (reverse-Polish) rendering of a subtree.
pub fn write_post_order<W: Write>(out: &mut W, node: &Node) -> fmt::Result {
    let mut tokens = Vec::new();
    collect(node, Order::Post, &mut tokens);
    write!(out, "{}", tokens.iter().join(" "))
}

#[derive(Clone, Copy)]
enum Order {
    In,
    Post,
}

fn collect(node: &Node, order: Order, tokens: &mut Vec<SmolStr>) {
    match &node.expr {
        Expr::Leaf(digits) => {
            // An empty leaf is a construction artifact, not a token.
            if !digits.is_empty() {
                tokens.push(digits.clone());
            }
        }
        Expr::Binary { op, left, right } => {
            if let Some(left) = left {
                collect(left, order, tokens);
            }
            match order {
                Order::In => {
                    tokens.push(SmolStr::new(op.to_string()));
                    if let Some(right) = right {
                        collect(right, order, tokens);
                    }
                }
                Order::Post => {
                    if let Some(right) = right {
                        collect(right, order, tokens);
                    }
                    tokens.push(SmolStr::new(op.to_string()));
                }
            }
        }
    }
}

/// Borrowed [`Display`] adapter returned by [`ExpressionTree::in_order`].
pub struct InOrder<'a>(pub(crate) &'a ExpressionTree);

impl Display for InOrder<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        self.0.write_in_order(f)
    }
}

/// Borrowed [`Display`] adapter returned by [`ExpressionTree::post_order`].
pub struct PostOrder<'a>(pub(crate) &'a ExpressionTree);

impl Display for PostOrder<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        self.0.write_post_order(f)
    }
}
