use thiserror::Error;

use crate::range::Range;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LexerError {
    #[error("Unexpected token `{1}`")]
    UnexpectedToken(Range, char),
}

impl LexerError {
    pub fn range(&self) -> &Range {
        match self {
            LexerError::UnexpectedToken(range, _) => range,
        }
    }
}
