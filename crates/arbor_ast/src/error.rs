//! Shape errors

use crate::head::Head;
use thiserror::Error;

/// A node did not have the shape an operation requires.
///
/// Translation is deterministic, so these always point at a reader bug or at an accessor
/// being used on the wrong kind of node. They are never worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("expected a `{expected}` expression, found a `{found}` expression")]
    UnexpectedHead { expected: Head, found: Head },
    #[error("expected an expression, found {0}")]
    ExpectedExpr(&'static str),
    #[error("expected a symbol, found {0}")]
    ExpectedSymbol(&'static str),
    #[error("`{head}` does not accept {found} argument(s)")]
    Arity { head: Head, found: usize },
    #[error("`{head}` has no argument {index}")]
    MissingArgument { head: Head, index: usize },
}

impl ShapeError {
    pub(crate) fn unexpected_head(expected: Head, found: &Head) -> Self {
        Self::UnexpectedHead {
            expected,
            found: found.clone(),
        }
    }
}
