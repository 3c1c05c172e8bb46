// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use std::collections::BTreeSet;

use hexa_core::{Atom, PatternTerm, Position, Substitution, Term, TriplePattern, Variable};

pub fn iri(label: &str) -> Term {
    Term::iri(label)
}

pub fn lit(label: &str) -> Term {
    Term::literal(label)
}

pub fn var(name: &str) -> Variable {
    Variable::new(name)
}

pub fn fact(s: &str, p: &str, o: &str) -> Atom {
    Atom::new(iri(s), iri(p), iri(o))
}

/// Order-insensitive view of a match result.
pub fn as_set(subs: Vec<Substitution>) -> BTreeSet<Substitution> {
    subs.into_iter().collect()
}

/// Builds a substitution from `(variable name, term)` pairs.
///
/// Panics on a conflicting pair so a fixture typo can't silently shrink the
/// expected binding.
pub fn sub(pairs: &[(&str, Term)]) -> Substitution {
    let mut out = Substitution::new();
    for (name, term) in pairs {
        assert!(
            out.bind(var(name), term.clone()),
            "conflicting binding for ?{name}"
        );
    }
    out
}

/// Pattern over `atom` with the positions flagged in `mask` (S=4, P=2, O=1)
/// kept bound and the rest replaced by `?s`, `?p`, `?o`.
pub fn pattern_from(atom: &Atom, mask: u8) -> TriplePattern {
    let slot = |position: Position, bit: u8, name: &str| -> PatternTerm {
        if mask & bit != 0 {
            atom.get(position).clone().into()
        } else {
            var(name).into()
        }
    };
    TriplePattern::new(
        slot(Position::Subject, 4, "s"),
        slot(Position::Predicate, 2, "p"),
        slot(Position::Object, 1, "o"),
    )
}

/// Tiny deterministic RNG (xorshift64*) so fixtures don't need `rand`.
#[derive(Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a new PRNG with the given seed.
    ///
    /// If `seed` is 0, it is replaced with 1 (zero seeds would produce
    /// all-zero output in xorshift).
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Returns a pseudo-random value in `[0, upper)`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn gen_range_usize(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        (self.next_u64() as usize) % upper
    }
}

/// A small social graph with literals, reused by several tests.
pub fn social_graph() -> Vec<Atom> {
    vec![
        fact("alice", "knows", "bob"),
        fact("alice", "knows", "carol"),
        fact("bob", "knows", "carol"),
        fact("carol", "knows", "alice"),
        fact("alice", "likes", "carol"),
        Atom::new(iri("alice"), iri("age"), lit("30")),
        Atom::new(iri("bob"), iri("age"), lit("30")),
        Atom::new(iri("carol"), iri("age"), lit("41")),
        fact("dave", "knows", "dave"),
    ]
}

/// `count` facts drawn from small term pools so lookups collide often.
pub fn random_facts(seed: u64, count: usize) -> Vec<Atom> {
    let mut rng = XorShift64::new(seed);
    (0..count)
        .map(|_| {
            let s = format!("s{}", rng.gen_range_usize(12));
            let p = format!("p{}", rng.gen_range_usize(4));
            let o = rng.gen_range_usize(16);
            let object = if o % 3 == 0 {
                lit(&o.to_string())
            } else {
                iri(&format!("s{o}"))
            };
            Atom::new(iri(&s), iri(&p), object)
        })
        .collect()
}
