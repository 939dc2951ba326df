//! responsible for interning symbols

use crate::symbol::Symbol;
use parking_lot::RwLock;
use std::collections::HashSet;

/// A synchronized registry of interned symbols.
///
/// Lookups take a shared lock, only the first interning of a name takes the exclusive one.
/// Symbols stay valid after the table that created them is dropped.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: RwLock<HashSet<Symbol>>,
}

impl SymbolTable {
    /// Creates a new, empty symbol table
    pub fn new() -> Self {
        Self {
            symbols: Default::default(),
        }
    }

    /// Interns a name, returning the existing symbol if the name was already interned
    pub fn intern(&self, name: &str) -> Symbol {
        if let Some(symbol) = self.symbols.read().get(name) {
            return symbol.clone();
        }
        let mut symbols = self.symbols.write();
        // another thread may have won the race between the two locks
        if let Some(symbol) = symbols.get(name) {
            return symbol.clone();
        }
        let symbol = Symbol::new(name);
        symbols.insert(symbol.clone());
        symbol
    }

    /// Gets a symbol only if it has already been interned
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.symbols.read().get(name).cloned()
    }

    /// Checks if a name has been interned
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.read().contains(name)
    }

    /// The number of interned symbols
    pub fn len(&self) -> usize {
        self.symbols.read().len()
    }

    /// Checks if nothing has been interned yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_intern_returns_same_entry() {
        let table = SymbolTable::new();
        let a = table.intern("lambda");
        let b = table.intern("lambda");
        assert!(a.ptr_eq(&b));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_get_does_not_intern() {
        let table = SymbolTable::new();
        assert!(table.get("x").is_none());
        assert!(table.is_empty());
        let x = table.intern("x");
        assert!(table.get("x").expect("interned").ptr_eq(&x));
    }

    #[test]
    fn test_concurrent_interning() {
        let table = Arc::new(SymbolTable::new());
        let handles = (0..4)
            .map(|_| {
                let table = table.clone();
                thread::spawn(move || {
                    (0..100)
                        .map(|i| table.intern(&format!("sym{i}")))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();
        let results = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread panicked"))
            .collect::<Vec<_>>();
        assert_eq!(table.len(), 100);
        for other in &results[1..] {
            for (a, b) in results[0].iter().zip(other) {
                assert!(a.ptr_eq(b));
            }
        }
    }
}
