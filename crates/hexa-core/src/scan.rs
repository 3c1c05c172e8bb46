// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Linear-scan baseline store.
//!
//! [`ScanStore`] keeps facts in insertion order and answers every pattern
//! with one pass over all of them. It is the reference the indexed store is
//! checked against and the baseline it is benchmarked against.

use rustc_hash::FxHashSet;

use crate::error::StoreError;
use crate::pattern::{StarQuery, TriplePattern};
use crate::storage::RdfStorage;
use crate::substitution::Substitution;
use crate::term::{Atom, PatternTerm, Position};

/// Unindexed fact list.
///
/// Unlike [`HexaStore`](crate::HexaStore), a pattern with no bound term is
/// answered (every fact matches). A fully ground pattern still yields no
/// substitutions, for parity.
#[derive(Debug, Clone, Default)]
pub struct ScanStore {
    atoms: Vec<Atom>,
    seen: FxHashSet<Atom>,
}

impl ScanStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn bindings(pattern: &TriplePattern, atom: &Atom) -> Option<Substitution> {
        let mut sub = Substitution::new();
        for position in Position::ALL {
            let value = atom.get(position);
            match pattern.get(position) {
                PatternTerm::Bound(term) if term != value => return None,
                PatternTerm::Bound(_) => {}
                PatternTerm::Var(var) => {
                    if !sub.bind(var.clone(), value.clone()) {
                        return None;
                    }
                }
            }
        }
        Some(sub)
    }
}

impl RdfStorage for ScanStore {
    fn add(&mut self, atom: &Atom) -> bool {
        if !self.seen.insert(atom.clone()) {
            return false;
        }
        self.atoms.push(atom.clone());
        true
    }

    fn len(&self) -> usize {
        self.atoms.len()
    }

    fn match_pattern(&self, pattern: &TriplePattern) -> Vec<Substitution> {
        if pattern.is_ground() {
            return Vec::new();
        }
        self.atoms
            .iter()
            .filter_map(|atom| Self::bindings(pattern, atom))
            .collect()
    }

    fn match_star(&self, _query: &StarQuery) -> Result<Vec<Substitution>, StoreError> {
        Err(StoreError::Unsupported {
            operation: "star query",
        })
    }

    fn atoms(&self) -> Vec<Atom> {
        self.atoms.clone()
    }
}
