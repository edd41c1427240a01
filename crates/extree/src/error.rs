use miette::{Diagnostic, LabeledSpan, SourceOffset, SourceSpan};

use crate::eval::error::EvalError;
use crate::lexer::error::LexerError;
use crate::range::Range;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InnerError {
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Lexer(#[from] LexerError),
}

/// Represents a high-level error with diagnostic information for the user.
#[derive(PartialEq, Debug, thiserror::Error)]
#[error("{cause}")]
pub struct Error {
    /// The underlying cause of the error.
    pub cause: InnerError,
    /// The expression text related to the error.
    pub source_code: String,
    /// The location in the expression text for diagnostics.
    pub location: SourceSpan,
}

impl Error {
    pub fn from_error(source_code: impl Into<String>, cause: InnerError) -> Self {
        let source_code = source_code.into();
        let range = match &cause {
            InnerError::Lexer(err) => Some(err.range()),
            InnerError::Eval(err) => err.range(),
        };

        let location = match range {
            Some(range) => span_from_range(&source_code, range),
            None => SourceSpan::new(SourceOffset::from_location(&source_code, 1, 1), 0),
        };

        Self {
            cause,
            source_code,
            location,
        }
    }
}

fn span_from_range(source_code: &str, range: &Range) -> SourceSpan {
    let start = SourceOffset::from_location(
        source_code,
        range.start.line as usize,
        range.start.column,
    );
    let end = SourceOffset::from_location(
        source_code,
        range.end.line as usize,
        range.end.column,
    );

    SourceSpan::new(
        start,
        std::cmp::max(end.offset().saturating_sub(start.offset()), 1),
    )
}

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self.cause {
            InnerError::Lexer(LexerError::UnexpectedToken(_, _)) => "LexerError::UnexpectedToken",
            InnerError::Eval(EvalError::InvalidNumber(_, _)) => "EvalError::InvalidNumber",
            InnerError::Eval(EvalError::ZeroDivision(_)) => "EvalError::ZeroDivision",
            InnerError::Eval(EvalError::InvalidOperator(_, _)) => "EvalError::InvalidOperator",
            InnerError::Eval(EvalError::Recursion(_)) => "EvalError::Recursion",
        };

        Some(Box::new(code.to_string()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source_code)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            None,
            self.location,
        ))))
    }
}
