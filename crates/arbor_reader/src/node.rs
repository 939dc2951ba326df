//! The generic tree

use bytes::Bytes;
use std::str::Utf8Error;

/// A number as the reader gives it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenericNumber {
    /// An exact integer. Anything above `u64::MAX` is rejected by the reader.
    Integer(u64),
    Real(f64),
}

/// A node of the untyped tree produced by a [TreeReader](crate::TreeReader)
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GenericNode {
    Number(GenericNumber),
    /// Text, kept as the bytes the reader produced until someone decodes it
    String(Bytes),
    /// A bare atom
    Symbol(String),
    Pair(Box<Pair>),
    /// The empty list
    #[default]
    Null,
}

/// A cons cell.
///
/// Lists are chains of pairs through [Pair::rest], dropping one walks the chain in a loop
/// so long lists can't overflow the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    head: GenericNode,
    rest: GenericNode,
}

impl Pair {
    #[inline]
    pub fn head(&self) -> &GenericNode {
        &self.head
    }

    #[inline]
    pub fn rest(&self) -> &GenericNode {
        &self.rest
    }
}

impl Drop for Pair {
    fn drop(&mut self) {
        let mut rest = std::mem::take(&mut self.rest);
        while let GenericNode::Pair(mut pair) = rest {
            rest = std::mem::take(&mut pair.rest);
        }
    }
}

impl GenericNode {
    /// Creates a pair
    pub fn cons(head: GenericNode, rest: GenericNode) -> Self {
        GenericNode::Pair(Box::new(Pair { head, rest }))
    }

    /// Creates a proper list
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = GenericNode>,
        I::IntoIter: DoubleEndedIterator,
    {
        Self::list_with_tail(items, GenericNode::Null)
    }

    /// Creates a list ending in `tail` instead of the empty list
    pub fn list_with_tail<I>(items: I, tail: GenericNode) -> Self
    where
        I: IntoIterator<Item = GenericNode>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(tail, |rest, head| GenericNode::cons(head, rest))
    }

    /// Creates a string node
    pub fn string(text: impl Into<String>) -> Self {
        GenericNode::String(Bytes::from(text.into()))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        GenericNode::Symbol(name.into())
    }

    pub fn integer(n: u64) -> Self {
        GenericNode::Number(GenericNumber::Integer(n))
    }

    pub fn real(f: f64) -> Self {
        GenericNode::Number(GenericNumber::Real(f))
    }

    #[inline]
    pub fn is_pair(&self) -> bool {
        matches!(self, GenericNode::Pair(_))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, GenericNode::Null)
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            GenericNode::Pair(pair) => Some(pair.as_ref()),
            _ => None,
        }
    }

    /// Decodes a string node. Returns `None` if this isn't a string.
    ///
    /// The decoded text borrows from the node, nothing needs releasing afterward.
    pub fn decode(&self) -> Option<Result<&str, Utf8Error>> {
        match self {
            GenericNode::String(bytes) => Some(std::str::from_utf8(bytes)),
            _ => None,
        }
    }

    /// Iterates over the elements of the list starting at this node
    pub fn iter(&self) -> ListIter<'_> {
        ListIter { current: self }
    }

    /// Gets the `n`th element of the list starting at this node
    pub fn nth(&self, n: usize) -> Option<&GenericNode> {
        self.iter().nth(n)
    }
}

/// Iterator over the heads of a chain of pairs.
///
/// Stops at the first node that isn't a pair, which is then available as
/// [ListIter::remainder]. For a proper list that is [GenericNode::Null].
#[derive(Debug, Clone)]
pub struct ListIter<'a> {
    current: &'a GenericNode,
}

impl<'a> ListIter<'a> {
    /// The part of the list not yet iterated
    #[inline]
    pub fn remainder(&self) -> &'a GenericNode {
        self.current
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a GenericNode;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.current.as_pair()?;
        self.current = pair.rest();
        Some(pair.head())
    }
}
