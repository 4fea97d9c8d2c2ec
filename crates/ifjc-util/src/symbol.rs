//! Identifier interning.
//!
//! The teacher interns into a process-wide `DashMap` because its
//! compiler is built to scale across threads. This one is strictly
//! single-threaded (see the concurrency & resource model), so the
//! interner is a plain owned value threaded through the session
//! instead of a lazily-initialised global.

use rustc_hash::FxHashMap;

/// A handle to an interned string. Cheap to copy and compare; never
/// dereferenced directly — look the text back up through the
/// [`Interner`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    fn from_index(index: usize) -> Self {
        Symbol(index as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Owns the canonical text for every [`Symbol`] handed out. One
/// `Interner` lives for the whole compilation and is dropped with it.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    lookup: FxHashMap<Box<str>, Symbol>,
}

impl Interner {
    pub fn new() -> Self {
        Interner {
            strings: Vec::new(),
            lookup: FxHashMap::default(),
        }
    }

    /// Interns `text`, returning the existing handle if it was already
    /// known or allocating a fresh one otherwise.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&sym) = self.lookup.get(text) {
            return sym;
        }
        let sym = Symbol::from_index(self.strings.len());
        let boxed: Box<str> = text.into();
        self.strings.push(boxed.clone());
        self.lookup.insert(boxed, sym);
        sym
    }

    pub fn resolve(&self, symbol: Symbol) -> &str {
        &self.strings[symbol.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_the_same_text_twice_yields_the_same_symbol() {
        let mut interner = Interner::new();
        let a = interner.intern("main");
        let b = interner.intern("main");
        assert_eq!(a, b);
        assert_eq!(interner.resolve(a), "main");
    }

    #[test]
    fn distinct_text_yields_distinct_symbols() {
        let mut interner = Interner::new();
        let a = interner.intern("foo");
        let b = interner.intern("bar");
        assert_ne!(a, b);
    }
}
