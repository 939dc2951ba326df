//! The seam between the parser front-end and the translator

use crate::node::GenericNode;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Produces generic trees from source text
pub trait TreeReader {
    /// Reads a tree from text.
    ///
    /// Returns `Ok(None)` when there's nothing left to read.
    fn read_str(&self, text: &str) -> ReadResult<Option<GenericNode>>;

    /// Reads a tree from a file. An empty file reads as [GenericNode::Null].
    fn read_file(&self, path: &Path) -> ReadResult<GenericNode> {
        let text = std::fs::read_to_string(path)?;
        debug!("read {} bytes from {path:?}", text.len());
        Ok(self.read_str(&text)?.unwrap_or_default())
    }
}

impl<R: TreeReader + ?Sized> TreeReader for &R {
    fn read_str(&self, text: &str) -> ReadResult<Option<GenericNode>> {
        (**self).read_str(text)
    }

    fn read_file(&self, path: &Path) -> ReadResult<GenericNode> {
        (**self).read_file(path)
    }
}

impl<R: TreeReader + ?Sized> TreeReader for Box<R> {
    fn read_str(&self, text: &str) -> ReadResult<Option<GenericNode>> {
        (**self).read_str(text)
    }

    fn read_file(&self, path: &Path) -> ReadResult<GenericNode> {
        (**self).read_file(path)
    }
}

/// The reader could not produce a tree
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unexpected input after the first datum: {0:?}")]
    TrailingInput(String),
}

pub type ReadResult<T> = Result<T, ReadError>;

/// Where parsing stopped, and why.
///
/// Only a short excerpt of the input is kept, however much of it was left.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} at byte {offset}, near {excerpt:?}")]
pub struct ParseError {
    /// Byte offset into the input of the innermost failure
    pub offset: usize,
    /// The start of the line at `offset`
    pub excerpt: String,
    /// What the innermost failing parser expected
    pub reason: String,
    /// Every parser that was unwinding, innermost first, as `(offset, what)`
    pub trace: Vec<(usize, String)>,
}
