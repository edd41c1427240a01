// Evaluates a parsed expression tree to an integer by a recursive walk over
// the nodes, combining child results per the operator character at each
// binary node.
pub mod error;

use error::EvalError;

use crate::tree::ExpressionTree;
use crate::tree::node::{Expr, Node};

/// Configuration options for the evaluator.
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum tree depth the walk will descend to before giving up, guarding
    /// the call stack against pathologically nested input.
    pub max_depth: u32,
}

#[cfg(debug_assertions)]
impl Default for Options {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

#[cfg(not(debug_assertions))]
impl Default for Options {
    fn default() -> Self {
        Self { max_depth: 192 }
    }
}

/// Walks an [`ExpressionTree`] and computes its integer result.
///
/// All arithmetic is on `i64` with two's-complement wrapping on overflow.
/// Division truncates toward zero. `^` is integer exponentiation; a negative
/// exponent yields the truncated rational result (0 except for bases 1
/// and -1).
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    pub(crate) options: Options,
}

impl Evaluator {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn eval(&self, tree: &ExpressionTree) -> Result<i64, EvalError> {
        self.eval_node(tree.root(), 0)
    }

    fn eval_node(&self, node: Option<&Node>, depth: u32) -> Result<i64, EvalError> {
        // An absent node evaluates as the identity value; best-effort trees
        // may be missing an operand.
        let Some(node) = node else {
            return Ok(0);
        };

        if depth >= self.options.max_depth {
            return Err(EvalError::Recursion(self.options.max_depth));
        }

        match &node.expr {
            Expr::Leaf(digits) => digits
                .parse::<i64>()
                .map_err(|_| EvalError::InvalidNumber(node.range.clone(), digits.clone())),
            Expr::Binary { op, left, right } => {
                let left = self.eval_node(left.as_deref(), depth + 1)?;
                let right = self.eval_node(right.as_deref(), depth + 1)?;

                match op {
                    '+' => Ok(left.wrapping_add(right)),
                    '-' => Ok(left.wrapping_sub(right)),
                    '*' => Ok(left.wrapping_mul(right)),
                    '/' if right == 0 => Err(EvalError::ZeroDivision(node.range.clone())),
                    '/' => Ok(left.wrapping_div(right)),
                    '^' => Ok(pow(left, right)),
                    op => Err(EvalError::InvalidOperator(node.range.clone(), *op)),
                }
            }
        }
    }
}

fn pow(base: i64, exp: i64) -> i64 {
    if exp >= 0 {
        base.wrapping_pow(u32::try_from(exp).unwrap_or(u32::MAX))
    } else {
        // Negative exponents truncate toward zero; only bases 1 and -1
        // survive.
        match base {
            1 => 1,
            -1 if exp % 2 == 0 => 1,
            -1 => -1,
            _ => 0,
        }
    }
}
