//! An interned name

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An interned, immutable name.
///
/// Symbols handed out by the same [SymbolTable](crate::SymbolTable) for the same name
/// share storage, so cloning one is cheap and comparing two is usually a pointer check.
/// Equality still falls back to the name so symbols from different tables compare sanely.
#[derive(Clone)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub(crate) fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// The name of this symbol
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if two symbols are the same interned entry, not just equal names
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Symbol {}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_names_from_separate_storage() {
        let a = Symbol::new("x");
        let b = Symbol::new("x");
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, "x");
    }

    #[test]
    fn test_ordering_is_by_name() {
        let mut symbols = vec![Symbol::new("c"), Symbol::new("a"), Symbol::new("b")];
        symbols.sort();
        assert_eq!(
            symbols.iter().map(Symbol::as_str).collect::<Vec<_>>(),
            ["a", "b", "c"]
        );
    }
}
