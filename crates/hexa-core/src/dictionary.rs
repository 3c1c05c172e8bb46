// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bidirectional term ↔ dense integer mapping.
//!
//! Everything below the store surface works on [`TermId`]s. Ids are handed
//! out on first encounter, starting at the dictionary's base and growing by
//! one with no gaps. An id is never reassigned, so `decode(encode(t)) == t`
//! holds for the lifetime of the dictionary.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::term::Term;

/// Dense integer identifier assigned to a [`Term`].
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TermId(pub u32);

impl TermId {
    /// Raw integer value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Term dictionary owned by a single store.
///
/// The reverse direction is a `Vec` indexed by `id - first`, which keeps
/// decode a bounds-checked slice access and makes density structural.
#[derive(Debug, Clone)]
pub struct Dictionary {
    ids: FxHashMap<Term, TermId>,
    terms: Vec<Term>,
    first: u32,
}

impl Dictionary {
    /// Creates an empty dictionary whose first id is `0`.
    pub fn new() -> Self {
        Self::with_base(0, 0)
    }

    /// Creates an empty dictionary whose first id is `first` and which has
    /// room for `capacity` terms before reallocating.
    pub fn with_base(first: u32, capacity: usize) -> Self {
        let mut ids = FxHashMap::default();
        ids.reserve(capacity);
        Self {
            ids,
            terms: Vec::with_capacity(capacity),
            first,
        }
    }

    /// Returns the id for `term`, assigning the next free id on first sight.
    ///
    /// The returned id is exactly the slot the term is stored under for
    /// [`decode`](Self::decode).
    ///
    /// # Panics
    ///
    /// Panics if the `u32` id space above the base is exhausted.
    pub fn encode(&mut self, term: &Term) -> TermId {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = self.next_id();
        self.terms.push(term.clone());
        self.ids.insert(term.clone(), id);
        id
    }

    /// Returns the id for `term` without assigning one.
    pub fn lookup(&self, term: &Term) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    /// Returns the term assigned `id`, or `None` if this dictionary never
    /// assigned it.
    pub fn decode(&self, id: TermId) -> Option<&Term> {
        let offset = id.0.checked_sub(self.first)?;
        self.terms.get(usize::try_from(offset).ok()?)
    }

    /// Decodes an id read back out of an index.
    ///
    /// Every id stored in an index came from [`encode`](Self::encode) on this
    /// dictionary, so a miss here means the store's internal state is corrupt.
    pub(crate) fn resolve(&self, id: TermId) -> &Term {
        match self.decode(id) {
            Some(term) => term,
            None => unreachable!("term id {id} was never assigned by this dictionary"),
        }
    }

    /// Number of distinct terms encoded.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if nothing has been encoded.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The id assigned to the first encoded term.
    pub fn first_id(&self) -> TermId {
        TermId(self.first)
    }

    /// Iterates `(id, term)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, &Term)> + '_ {
        (self.first..).map(TermId).zip(self.terms.iter())
    }

    fn next_id(&self) -> TermId {
        let raw = u32::try_from(self.terms.len())
            .ok()
            .and_then(|assigned| self.first.checked_add(assigned));
        match raw {
            Some(raw) => TermId(raw),
            None => unreachable!("term id space exhausted above base {}", self.first),
        }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
