//! Bidirectional term dictionary.
//!
//! Maps opaque term strings to small dense identifiers and back. A store owns
//! two of these: one for entities and one for predicates.
//!
//! # Invariants
//!
//! - Identifiers are handed out densely from 0 and never reused.
//! - `get(put(t)) == Some(t)` for every term ever put.
//! - Nothing is ever removed; the dictionary only grows.

use std::collections::HashMap;

use crate::types::TermId;

/// A bidirectional mapping between terms and identifiers of type `I`.
#[derive(Debug)]
pub struct Dictionary<I: TermId> {
    /// Reverse mapping, indexed by identifier.
    terms: Vec<String>,
    /// Forward mapping from term to its (latest) identifier.
    keys: HashMap<String, I>,
    next_key: u32,
}

impl<I: TermId> Default for Dictionary<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: TermId> Dictionary<I> {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
            keys: HashMap::new(),
            next_key: 0,
        }
    }

    /// Look up the identifier of an existing term.
    ///
    /// Returns `None` for unknown terms; never allocates.
    #[must_use]
    pub fn get_key(&self, term: &str) -> Option<I> {
        self.keys.get(term).copied()
    }

    /// Assign the next identifier to `term`.
    ///
    /// # Pre-conditions
    ///
    /// The caller must have checked with [`Dictionary::get_key`] that the term
    /// is absent. Putting the same term twice assigns it a second identifier;
    /// both identifiers resolve back to the term and `get_key` afterwards
    /// returns the newer one. This is not guarded here.
    ///
    /// # Panics
    ///
    /// Panics once `u32::MAX` identifiers have been handed out.
    pub fn put(&mut self, term: &str) -> I {
        let Some(next_key) = self.next_key.checked_add(1) else {
            panic!("dictionary identifier space exhausted after {} terms", self.next_key);
        };
        let key = I::from_index(self.next_key);
        self.terms.push(term.to_owned());
        self.keys.insert(term.to_owned(), key);
        self.next_key = next_key;
        key
    }

    /// Look up `term`, assigning a fresh identifier if it is not known yet.
    pub fn get_or_put(&mut self, term: &str) -> I {
        match self.get_key(term) {
            Some(key) => key,
            None => self.put(term),
        }
    }

    /// Reverse lookup of an identifier.
    #[must_use]
    pub fn get(&self, key: I) -> Option<&str> {
        let index = usize::try_from(key.index()).ok()?;
        self.terms.get(index).map(String::as_str)
    }

    /// The identifier the next `put` will hand out.
    #[must_use]
    pub const fn next_key(&self) -> u32 {
        self.next_key
    }

    /// Number of identifiers handed out so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over `(identifier, term)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &str)> {
        (0..self.next_key)
            .map(I::from_index)
            .zip(self.terms.iter().map(String::as_str))
    }
}
