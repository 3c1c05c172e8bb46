// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Permutation indexes: one two-level map-of-sets per key ordering.
//!
//! A single [`PermutationIndex`] type is instantiated six times by the
//! store; the [`Permutation`] tag decides which triple position feeds which
//! level. Writers only ever go through `HexaStore::add`, which fans every
//! fact out to all six, so cross-index consistency holds by construction.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::dictionary::TermId;
use crate::term::Position;

/// Leaf level: the set of third-position ids under a `(k1, k2)` prefix.
pub type Leaf = FxHashSet<TermId>;

/// Second level: `k2 -> leaf` under a fixed `k1`.
pub type Branch = FxHashMap<TermId, Leaf>;

/// Key ordering of a permutation index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Permutation {
    /// subject → predicate → object
    Spo,
    /// subject → object → predicate
    Sop,
    /// predicate → subject → object
    Pso,
    /// predicate → object → subject
    Pos,
    /// object → subject → predicate
    Osp,
    /// object → predicate → subject
    Ops,
}

impl Permutation {
    /// All six orderings.
    pub const ALL: [Self; 6] = [
        Self::Spo,
        Self::Sop,
        Self::Pso,
        Self::Pos,
        Self::Osp,
        Self::Ops,
    ];

    /// Which triple position feeds each key level.
    pub fn order(self) -> [Position; 3] {
        use Position::{Object as O, Predicate as P, Subject as S};
        match self {
            Self::Spo => [S, P, O],
            Self::Sop => [S, O, P],
            Self::Pso => [P, S, O],
            Self::Pos => [P, O, S],
            Self::Osp => [O, S, P],
            Self::Ops => [O, P, S],
        }
    }

    /// Reorders an `(s, p, o)` triple into this index's key order.
    pub fn key(self, s: TermId, p: TermId, o: TermId) -> (TermId, TermId, TermId) {
        match self {
            Self::Spo => (s, p, o),
            Self::Sop => (s, o, p),
            Self::Pso => (p, s, o),
            Self::Pos => (p, o, s),
            Self::Osp => (o, s, p),
            Self::Ops => (o, p, s),
        }
    }

    /// Inverse of [`key`](Self::key): back to `(s, p, o)`.
    pub fn unkey(self, k1: TermId, k2: TermId, k3: TermId) -> (TermId, TermId, TermId) {
        match self {
            Self::Spo => (k1, k2, k3),
            Self::Sop => (k1, k3, k2),
            Self::Pso => (k2, k1, k3),
            Self::Pos => (k3, k1, k2),
            Self::Osp => (k2, k3, k1),
            Self::Ops => (k3, k2, k1),
        }
    }

    /// Slot of this ordering inside a six-element array.
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spo => "SPO",
            Self::Sop => "SOP",
            Self::Pso => "PSO",
            Self::Pos => "POS",
            Self::Osp => "OSP",
            Self::Ops => "OPS",
        };
        f.write_str(name)
    }
}

/// Two-level map `k1 -> (k2 -> set<k3>)`.
#[derive(Debug, Clone, Default)]
pub struct PermutationIndex {
    root: FxHashMap<TermId, Branch>,
}

impl PermutationIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `v` under `[k1][k2]`, creating levels on demand.
    ///
    /// Returns `true` if `v` was not already present.
    pub fn insert(&mut self, k1: TermId, k2: TermId, v: TermId) -> bool {
        self.root.entry(k1).or_default().entry(k2).or_default().insert(v)
    }

    /// Second-level map under `k1`.
    pub fn get(&self, k1: TermId) -> Option<&Branch> {
        self.root.get(&k1)
    }

    /// Leaf set under `[k1][k2]`.
    pub fn get_pair(&self, k1: TermId, k2: TermId) -> Option<&Leaf> {
        self.root.get(&k1).and_then(|branch| branch.get(&k2))
    }

    /// Returns `true` if `v` is stored under `[k1][k2]`.
    pub fn contains(&self, k1: TermId, k2: TermId, v: TermId) -> bool {
        self.get_pair(k1, k2).is_some_and(|leaf| leaf.contains(&v))
    }

    /// Number of distinct first-level keys.
    pub fn key_count(&self) -> usize {
        self.root.len()
    }

    /// Iterates every stored `(k1, k2, k3)` in index key order.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, TermId, TermId)> + '_ {
        self.root.iter().flat_map(|(&k1, branch)| {
            branch
                .iter()
                .flat_map(move |(&k2, leaf)| leaf.iter().map(move |&k3| (k1, k2, k3)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> TermId {
        TermId(raw)
    }

    #[test]
    fn insert_creates_levels_and_dedups() {
        let mut index = PermutationIndex::new();
        assert!(index.insert(id(1), id(2), id(3)));
        assert!(!index.insert(id(1), id(2), id(3)));
        assert!(index.insert(id(1), id(2), id(4)));
        assert_eq!(index.get_pair(id(1), id(2)).map(FxHashSet::len), Some(2));
        assert_eq!(index.key_count(), 1);
        assert!(index.contains(id(1), id(2), id(4)));
    }

    #[test]
    fn missing_keys_are_none() {
        let mut index = PermutationIndex::new();
        index.insert(id(1), id(2), id(3));
        assert!(index.get(id(9)).is_none());
        assert!(index.get_pair(id(1), id(9)).is_none());
        assert!(!index.contains(id(1), id(2), id(9)));
    }

    #[test]
    fn key_and_unkey_are_inverse_for_every_ordering() {
        let (s, p, o) = (id(1), id(2), id(3));
        for perm in Permutation::ALL {
            let (k1, k2, k3) = perm.key(s, p, o);
            assert_eq!(perm.unkey(k1, k2, k3), (s, p, o), "{perm}");
        }
    }

    #[test]
    fn order_agrees_with_key() {
        let spo = [id(10), id(20), id(30)];
        for perm in Permutation::ALL {
            let (k1, k2, k3) = perm.key(spo[0], spo[1], spo[2]);
            let expected = perm.order().map(|position| match position {
                Position::Subject => spo[0],
                Position::Predicate => spo[1],
                Position::Object => spo[2],
            });
            assert_eq!([k1, k2, k3], expected, "{perm}");
        }
    }

    #[test]
    fn slots_are_distinct() {
        let mut slots: Vec<_> = Permutation::ALL.iter().map(|p| p.slot()).collect();
        slots.sort_unstable();
        assert_eq!(slots, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn iter_yields_every_triple() {
        let mut index = PermutationIndex::new();
        index.insert(id(1), id(2), id(3));
        index.insert(id(1), id(2), id(4));
        index.insert(id(5), id(6), id(7));
        let mut all: Vec<_> = index.iter().collect();
        all.sort_unstable();
        assert_eq!(
            all,
            [
                (id(1), id(2), id(3)),
                (id(1), id(2), id(4)),
                (id(5), id(6), id(7)),
            ]
        );
    }
}
