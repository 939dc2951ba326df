//! Typed expressions

use crate::error::ShapeError;
use crate::head::Head;
use crate::value::TypedValue;
use log::trace;

/// An expression: a head and a fixed number of arguments.
///
/// Expressions are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpr {
    head: Head,
    args: Box<[TypedValue]>,
}

impl TypedExpr {
    /// Creates a new expression, checking the argument count when the head has a known arity
    pub fn new(head: Head, args: impl IntoIterator<Item = TypedValue>) -> Result<Self, ShapeError> {
        let args: Box<[TypedValue]> = args.into_iter().collect();
        if !head.accepts(args.len()) {
            trace!("rejecting `{head}` with {} argument(s)", args.len());
            return Err(ShapeError::Arity {
                head,
                found: args.len(),
            });
        }
        Ok(Self { head, args })
    }

    /// The head of this expression
    #[inline]
    pub fn head(&self) -> &Head {
        &self.head
    }

    /// The arguments of this expression
    #[inline]
    pub fn args(&self) -> &[TypedValue] {
        &self.args
    }

    /// Gets an argument by index
    pub fn arg(&self, index: usize) -> Option<&TypedValue> {
        self.args.get(index)
    }

    /// Gets an argument by index, or a [ShapeError] if this expression is too short
    pub fn expect_arg(&self, index: usize) -> Result<&TypedValue, ShapeError> {
        self.arg(index).ok_or_else(|| ShapeError::MissingArgument {
            head: self.head.clone(),
            index,
        })
    }

    /// The number of arguments
    #[inline]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Checks that this expression has the expected head
    pub fn expect_head(&self, expected: Head) -> Result<&Self, ShapeError> {
        if self.head == expected {
            Ok(self)
        } else {
            Err(ShapeError::unexpected_head(expected, &self.head))
        }
    }
}
