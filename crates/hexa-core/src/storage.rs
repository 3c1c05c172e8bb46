// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Storage interface shared by the indexed store and the scan baseline.

use crate::error::StoreError;
use crate::pattern::{StarQuery, TriplePattern};
use crate::substitution::Substitution;
use crate::term::Atom;

/// A fact store answering single triple-pattern queries.
///
/// The trait is synchronous and object-safe. Writes take `&mut self` and
/// reads `&self`, so the single-writer / many-reader discipline is enforced
/// by the borrow checker rather than by locks.
///
/// # Absence Semantics
///
/// [`match_pattern`](RdfStorage::match_pattern) returns an empty vector both
/// when nothing matches and when a bound term was never stored. Neither is an
/// error.
pub trait RdfStorage {
    /// Stores `atom`. Returns `true` if the fact was new, `false` if it was
    /// already present (the store is left unchanged).
    fn add(&mut self, atom: &Atom) -> bool;

    /// Number of distinct facts stored.
    fn len(&self) -> usize;

    /// Returns `true` if no facts are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every substitution that turns `pattern` into a stored fact.
    ///
    /// Result order is unspecified.
    fn match_pattern(&self, pattern: &TriplePattern) -> Vec<Substitution>;

    /// Evaluates a star query.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unsupported`] from every store in this crate.
    fn match_star(&self, query: &StarQuery) -> Result<Vec<Substitution>, StoreError>;

    /// Materializes every stored fact. Order is unspecified.
    fn atoms(&self) -> Vec<Atom>;

    /// Adds every atom from `source` in one pass. Returns how many were new.
    fn load<I>(&mut self, source: I) -> usize
    where
        I: IntoIterator<Item = Atom>,
        Self: Sized,
    {
        source.into_iter().filter(|atom| self.add(atom)).count()
    }
}
