// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Index selection: a fixed decision table from bound positions to a probe.
//!
//! | mask (S P O) | selection                 |
//! |--------------|---------------------------|
//! | `0 0 0`      | [`Selection::Unbound`]    |
//! | `1 1 1`      | [`Selection::Ground`]     |
//! | `1 0 1`      | SOP, two levels           |
//! | `1 1 0`      | SPO, two levels           |
//! | `1 0 0`      | SPO, one level            |
//! | `0 1 1`      | POS, two levels           |
//! | `0 1 0`      | PSO, one level            |
//! | `0 0 1`      | OPS, one level            |
//!
//! Subject wins first, then predicate, then object. Bound positions always
//! occupy the leading key levels so every bound value is consumed by a map
//! lookup and only the unbound tail is iterated.

use std::fmt;

use crate::index::Permutation;
use crate::pattern::TriplePattern;
use crate::term::Position;

/// Which triple positions of a pattern hold a concrete term.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct BoundMask(u8);

impl BoundMask {
    /// Bit set when the subject is bound.
    pub const SUBJECT: u8 = 4;
    /// Bit set when the predicate is bound.
    pub const PREDICATE: u8 = 2;
    /// Bit set when the object is bound.
    pub const OBJECT: u8 = 1;
    /// Every position bound.
    pub const GROUND: Self = Self(Self::SUBJECT | Self::PREDICATE | Self::OBJECT);

    /// Builds a mask from raw bits; bits above the low three are dropped.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::GROUND.0)
    }

    /// Computes the mask of `pattern`.
    pub fn of(pattern: &TriplePattern) -> Self {
        Position::ALL
            .iter()
            .filter(|&&position| !pattern.get(position).is_variable())
            .fold(Self::default(), |mask, &position| mask.with(position))
    }

    /// Returns a copy with `position` marked bound.
    pub fn with(self, position: Position) -> Self {
        Self(self.0 | Self::bit(position))
    }

    /// Returns `true` if `position` is bound.
    pub fn has(self, position: Position) -> bool {
        self.0 & Self::bit(position) != 0
    }

    /// Raw bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Number of bound positions.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    fn bit(position: Position) -> u8 {
        match position {
            Position::Subject => Self::SUBJECT,
            Position::Predicate => Self::PREDICATE,
            Position::Object => Self::OBJECT,
        }
    }
}

impl fmt::Display for BoundMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, tag) in Position::ALL.into_iter().zip(['S', 'P', 'O']) {
            let c = if self.has(position) { tag } else { '?' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// How many leading key levels a probe navigates with bound ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ProbeDepth {
    /// One bound position: iterate the whole second level.
    One,
    /// Two bound positions: iterate one leaf set.
    Two,
}

/// Outcome of index selection for one pattern shape.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Selection {
    /// Nothing bound; matching is rejected rather than scanning everything.
    Unbound,
    /// Everything bound; there are no variables to bind.
    Ground,
    /// Walk `index` using `depth` bound key levels.
    Probe {
        /// Chosen permutation.
        index: Permutation,
        /// Leading levels keyed by bound ids.
        depth: ProbeDepth,
    },
}

impl Selection {
    /// Returns `true` for the shapes matching refuses to evaluate.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Unbound | Self::Ground)
    }
}

/// Picks the index for a bound-position mask.
pub fn select(mask: BoundMask) -> Selection {
    use Position::{Object, Predicate, Subject};
    let probe = |index, depth| Selection::Probe { index, depth };
    let (s, p, o) = (mask.has(Subject), mask.has(Predicate), mask.has(Object));
    match (s, p, o) {
        (false, false, false) => Selection::Unbound,
        (true, true, true) => Selection::Ground,
        (true, false, true) => probe(Permutation::Sop, ProbeDepth::Two),
        (true, true, false) => probe(Permutation::Spo, ProbeDepth::Two),
        (true, false, false) => probe(Permutation::Spo, ProbeDepth::One),
        (false, true, true) => probe(Permutation::Pos, ProbeDepth::Two),
        (false, true, false) => probe(Permutation::Pso, ProbeDepth::One),
        (false, false, true) => probe(Permutation::Ops, ProbeDepth::One),
    }
}
