use smol_str::SmolStr;
use thiserror::Error;

use crate::range::Range;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid integer literal `{1}`")]
    InvalidNumber(Range, SmolStr),
    #[error("Divided by 0")]
    ZeroDivision(Range),
    #[error("Invalid operator `{1}`")]
    InvalidOperator(Range, char),
    #[error("Maximum recursion depth exceeded `{0}`")]
    Recursion(u32),
}

impl EvalError {
    #[cold]
    pub fn range(&self) -> Option<&Range> {
        match self {
            EvalError::InvalidNumber(range, _) => Some(range),
            EvalError::ZeroDivision(range) => Some(range),
            EvalError::InvalidOperator(range, _) => Some(range),
            EvalError::Recursion(_) => None,
        }
    }
}
