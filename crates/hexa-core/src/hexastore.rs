// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The indexed store: one dictionary, six permutation indexes.

use tracing::{debug, info_span, trace, warn, Span};

use crate::config::StoreConfig;
use crate::dictionary::{Dictionary, TermId};
use crate::error::{ConfigError, StoreError};
use crate::index::{Permutation, PermutationIndex};
use crate::pattern::{StarQuery, TriplePattern};
use crate::selection::{select, BoundMask, ProbeDepth, Selection};
use crate::storage::RdfStorage;
use crate::substitution::{bind_branch, bind_leaf, Substitution};
use crate::term::{Atom, PatternTerm};

/// In-memory triple store with six permutation indexes.
///
/// Every fact is dictionary-encoded once and written into all six orderings
/// (SPO, SOP, PSO, POS, OSP, OPS). A pattern with one or two bound positions
/// is answered from the single index whose leading levels are those bound
/// positions, so the cost is bounded by the size of the matching sub-index.
///
/// # Invariants
///
/// - Every stored fact is present in all six indexes. Only [`add`](Self::add)
///   writes, and it writes to all of them.
/// - `len()` equals the number of distinct facts.
/// - Querying never assigns dictionary ids.
/// - Each store logs into its own span; a clone gets a fresh one.
#[derive(Debug)]
pub struct HexaStore {
    dictionary: Dictionary,
    indexes: [PermutationIndex; 6],
    len: usize,
    config: StoreConfig,
    span: Span,
}

impl HexaStore {
    /// Creates an empty store with the default config.
    pub fn new() -> Self {
        Self::build(StoreConfig::default())
    }

    /// Creates an empty store after validating `config`.
    pub fn with_config(config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: StoreConfig) -> Self {
        let span = Self::span_for(&config);
        Self {
            dictionary: Dictionary::with_base(config.first_term_id, config.term_capacity),
            indexes: Default::default(),
            len: 0,
            config,
            span,
        }
    }

    fn span_for(config: &StoreConfig) -> Span {
        info_span!("hexastore", label = %config.label)
    }

    /// The config this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Read-only view of the term dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Read-only view of one permutation index.
    pub fn index(&self, permutation: Permutation) -> &PermutationIndex {
        &self.indexes[permutation.slot()]
    }

    /// Stores `atom` in all six indexes.
    ///
    /// Returns `true` if the fact was new and `false` if it was already
    /// present. `false` is not a failure: the fact is stored either way, and
    /// adding it again is a no-op.
    pub fn add(&mut self, atom: &Atom) -> bool {
        let s = self.dictionary.encode(atom.subject());
        let p = self.dictionary.encode(atom.predicate());
        let o = self.dictionary.encode(atom.object());

        let mut inserted = false;
        for permutation in Permutation::ALL {
            let (k1, k2, k3) = permutation.key(s, p, o);
            inserted |= self.indexes[permutation.slot()].insert(k1, k2, k3);
        }
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Adds every atom from `source` in one pass. Returns how many were new.
    pub fn load<I>(&mut self, source: I) -> usize
    where
        I: IntoIterator<Item = Atom>,
    {
        let mut seen = 0usize;
        let mut inserted = 0usize;
        for atom in source {
            seen += 1;
            if self.add(&atom) {
                inserted += 1;
            }
        }
        let _guard = self.span.enter();
        debug!(seen, inserted, terms = self.dictionary.len(), "bulk load complete");
        inserted
    }

    /// Number of distinct facts stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no facts are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Which index, if any, [`match_pattern`](Self::match_pattern) walks for
    /// `pattern`.
    pub fn plan(&self, pattern: &TriplePattern) -> Selection {
        select(BoundMask::of(pattern))
    }

    /// Every substitution that turns `pattern` into a stored fact.
    ///
    /// Two shapes are refused and yield an empty result with a `warn` event:
    /// a pattern with no bound term (no index can be probed) and a fully
    /// ground pattern (nothing to bind; use [`contains`](Self::contains) to
    /// test existence). A bound term that was never stored also yields an
    /// empty result, silently.
    pub fn match_pattern(&self, pattern: &TriplePattern) -> Vec<Substitution> {
        let _guard = self.span.enter();
        let mask = BoundMask::of(pattern);
        match select(mask) {
            Selection::Unbound => {
                self.refuse(pattern, "no bound term to probe an index with");
                Vec::new()
            }
            Selection::Ground => {
                self.refuse(pattern, "pattern is ground, no variable to bind");
                Vec::new()
            }
            Selection::Probe { index, depth } => {
                trace!(%pattern, %mask, %index, ?depth, "probing");
                self.probe(pattern, index, depth)
            }
        }
    }

    /// Returns `true` if `atom` is stored.
    pub fn contains(&self, atom: &Atom) -> bool {
        let ids = (
            self.dictionary.lookup(atom.subject()),
            self.dictionary.lookup(atom.predicate()),
            self.dictionary.lookup(atom.object()),
        );
        match ids {
            (Some(s), Some(p), Some(o)) => self.index(Permutation::Spo).contains(s, p, o),
            _ => false,
        }
    }

    /// Evaluates a star query. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`StoreError::Unsupported`].
    pub fn match_star(&self, query: &StarQuery) -> Result<Vec<Substitution>, StoreError> {
        let _guard = self.span.enter();
        debug!(
            center = %query.center(),
            branches = query.patterns().len(),
            "star query rejected"
        );
        Err(StoreError::Unsupported {
            operation: "star query",
        })
    }

    /// Every stored fact, decoded from the SPO index.
    pub fn atoms(&self) -> Vec<Atom> {
        self.permutation_atoms(Permutation::Spo)
    }

    /// Every stored fact, decoded from the index for `permutation`.
    ///
    /// All six orderings reconstruct the same fact set.
    pub fn permutation_atoms(&self, permutation: Permutation) -> Vec<Atom> {
        let mut out = Vec::with_capacity(self.len);
        for (k1, k2, k3) in self.index(permutation).iter() {
            let (s, p, o) = permutation.unkey(k1, k2, k3);
            out.push(Atom::new(
                self.dictionary.resolve(s).clone(),
                self.dictionary.resolve(p).clone(),
                self.dictionary.resolve(o).clone(),
            ));
        }
        out
    }

    fn probe(
        &self,
        pattern: &TriplePattern,
        permutation: Permutation,
        depth: ProbeDepth,
    ) -> Vec<Substitution> {
        let [first, second, third] = permutation.order();
        let index = self.index(permutation);
        let mut out = Vec::new();

        let Some(k1) = self.lookup(pattern.get(first)) else {
            return out;
        };
        match depth {
            ProbeDepth::Two => {
                let Some(k2) = self.lookup(pattern.get(second)) else {
                    return out;
                };
                if let (Some(leaf), Some(var)) =
                    (index.get_pair(k1, k2), pattern.get(third).as_var())
                {
                    bind_leaf(&self.dictionary, leaf, var, &mut out);
                }
            }
            ProbeDepth::One => {
                if let (Some(branch), Some(head), Some(tail)) = (
                    index.get(k1),
                    pattern.get(second).as_var(),
                    pattern.get(third).as_var(),
                ) {
                    bind_branch(&self.dictionary, branch, head, tail, &mut out);
                }
            }
        }
        out
    }

    fn lookup(&self, slot: &PatternTerm) -> Option<TermId> {
        slot.as_bound().and_then(|term| self.dictionary.lookup(term))
    }

    fn refuse(&self, pattern: &TriplePattern, reason: &'static str) {
        if self.config.warn_on_unmatchable {
            warn!(%pattern, reason, "pattern not matchable, returning no results");
        }
    }
}

impl Clone for HexaStore {
    fn clone(&self) -> Self {
        Self {
            dictionary: self.dictionary.clone(),
            indexes: self.indexes.clone(),
            len: self.len,
            config: self.config.clone(),
            span: Self::span_for(&self.config),
        }
    }
}

impl Default for HexaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RdfStorage for HexaStore {
    fn add(&mut self, atom: &Atom) -> bool {
        Self::add(self, atom)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn match_pattern(&self, pattern: &TriplePattern) -> Vec<Substitution> {
        Self::match_pattern(self, pattern)
    }

    fn match_star(&self, query: &StarQuery) -> Result<Vec<Substitution>, StoreError> {
        Self::match_star(self, query)
    }

    fn atoms(&self) -> Vec<Atom> {
        Self::atoms(self)
    }

    fn load<I>(&mut self, source: I) -> usize
    where
        I: IntoIterator<Item = Atom>,
    {
        Self::load(self, source)
    }
}
