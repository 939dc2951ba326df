//! Front-end errors

use arbor_ast::ShapeError;
use arbor_reader::ReadError;
use thiserror::Error;

/// Translation failed. Nothing partial is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The reader reported a syntax error, the message is passed on unchanged
    #[error("syntax error: {0}")]
    Syntax(String),
    /// A node didn't have any shape the translator knows
    #[error("malformed tree: {0}")]
    MalformedTree(String),
    #[error("tree is nested deeper than the limit of {0}")]
    TooDeep(usize),
    #[error(transparent)]
    Read(#[from] ReadError),
}

impl TranslateError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTree(reason.into())
    }

    /// Checks if this error is [TranslateError::MalformedTree]
    pub fn is_malformed(&self) -> bool {
        matches!(self, TranslateError::MalformedTree(_))
    }
}

impl From<ShapeError> for TranslateError {
    fn from(value: ShapeError) -> Self {
        Self::MalformedTree(value.to_string())
    }
}

/// A type alias for results in the front-end
pub type TranslateResult<T> = Result<T, TranslateError>;

/// An error occurred while building a [Frontend](crate::Frontend)
#[derive(Debug, Error)]
pub enum BuildFrontendError {
    #[error("the maximum tree depth must be at least 1")]
    ZeroMaxDepth,
}
