// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use common::{as_set, pattern_from};
use hexa_core::{
    Atom, Dictionary, HexaStore, Permutation, RdfStorage, ScanStore, Term, TriplePattern,
    Variable,
};

// Seeds are pinned so a failing case reproduces on every machine. Override
// locally with PROPTEST_SEED if you need fresh cases.
const SEED_BYTES: [u8; 32] = [
    0x68, 0x65, 0x78, 0x61, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0,
];

fn runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(PropConfig::with_cases(64), rng)
}

fn term() -> impl Strategy<Value = Term> {
    prop_oneof![
        (0u8..8).prop_map(|n| Term::iri(format!("n{n}"))),
        (0u8..4).prop_map(|n| Term::literal(n.to_string())),
    ]
}

fn atom() -> impl Strategy<Value = Atom> {
    (term(), (0u8..3).prop_map(|n| Term::iri(format!("p{n}"))), term())
        .prop_map(|(s, p, o)| Atom::new(s, p, o))
}

fn facts() -> impl Strategy<Value = Vec<Atom>> {
    prop::collection::vec(atom(), 0..40)
}

/// Every non-trivial pattern shape (masks 1..=6), probing both stored and
/// unseen atoms.
fn shapes() -> impl Strategy<Value = (Atom, u8)> {
    (atom(), 1u8..7)
}

#[test]
fn matches_reproduce_exactly_the_matching_facts() {
    runner()
        .run(
            &(facts(), prop::collection::vec(shapes(), 1..12)),
            |(facts, probes)| {
                let mut hexa = HexaStore::new();
                hexa.load(facts.iter().cloned());
                let stored: BTreeSet<Atom> = facts.iter().cloned().collect();

                for (probe, mask) in probes {
                    let pattern = pattern_from(&probe, mask);
                    let subs = hexa.match_pattern(&pattern);

                    // Applying each substitution back yields a stored, matching fact.
                    let produced: BTreeSet<Atom> = subs
                        .iter()
                        .filter_map(|sub| sub.apply(&pattern))
                        .collect();
                    prop_assert_eq!(produced.len(), subs.len(), "no duplicate bindings");

                    let expected: BTreeSet<Atom> = stored
                        .iter()
                        .filter(|fact| pattern.matches(fact))
                        .cloned()
                        .collect();
                    prop_assert_eq!(produced, expected, "pattern {}", pattern);
                }
                Ok(())
            },
        )
        .expect("pattern coverage property should hold");
}

#[test]
fn hexastore_agrees_with_scan_store() {
    runner()
        .run(&(facts(), prop::collection::vec(shapes(), 1..12)), |(facts, probes)| {
            let mut hexa = HexaStore::new();
            let mut scan = ScanStore::new();
            prop_assert_eq!(hexa.load(facts.iter().cloned()), scan.load(facts.iter().cloned()));
            prop_assert_eq!(hexa.len(), scan.len());

            for (probe, mask) in probes {
                let pattern = pattern_from(&probe, mask);
                prop_assert_eq!(
                    as_set(hexa.match_pattern(&pattern)),
                    as_set(scan.match_pattern(&pattern))
                );
            }
            Ok(())
        })
        .expect("hexastore should agree with the scan baseline");
}

#[test]
fn every_permutation_reconstructs_the_fact_set() {
    runner()
        .run(&facts(), |facts| {
            let mut hexa = HexaStore::new();
            // Insert twice, in opposite orders, to exercise dedup.
            hexa.load(facts.iter().cloned());
            hexa.load(facts.iter().rev().cloned());

            let distinct: BTreeSet<Atom> = facts.iter().cloned().collect();
            prop_assert_eq!(hexa.len(), distinct.len());
            prop_assert_eq!(hexa.atoms().len(), distinct.len());

            for permutation in Permutation::ALL {
                let rebuilt: BTreeSet<Atom> =
                    hexa.permutation_atoms(permutation).into_iter().collect();
                prop_assert_eq!(&rebuilt, &distinct, "index {}", permutation);
            }
            for fact in &distinct {
                prop_assert!(hexa.contains(fact));
            }
            Ok(())
        })
        .expect("all six indexes should hold the same facts");
}

#[test]
fn dictionary_round_trips_and_is_idempotent() {
    runner()
        .run(&prop::collection::vec(term(), 0..64), |terms| {
            let mut dict = Dictionary::with_base(1, 0);
            let first: Vec<_> = terms.iter().map(|t| dict.encode(t)).collect();
            let again: Vec<_> = terms.iter().map(|t| dict.encode(t)).collect();
            prop_assert_eq!(&first, &again);

            for (term, id) in terms.iter().zip(&first) {
                prop_assert_eq!(dict.decode(*id), Some(term));
            }

            // Dense: the assigned ids are exactly base..base+len.
            let distinct: BTreeSet<u32> = first.iter().map(|id| id.value()).collect();
            let len = u32::try_from(dict.len()).expect("small dictionary");
            prop_assert_eq!(distinct, (1..1 + len).collect::<BTreeSet<_>>());
            Ok(())
        })
        .expect("dictionary round-trip should hold");
}

#[test]
fn unmatchable_shapes_are_always_empty() {
    runner()
        .run(&(facts(), atom()), |(facts, probe)| {
            let mut hexa = HexaStore::new();
            hexa.load(facts);
            let all_vars =
                TriplePattern::new(Variable::new("s"), Variable::new("p"), Variable::new("o"));
            prop_assert!(hexa.match_pattern(&all_vars).is_empty());
            prop_assert!(hexa.match_pattern(&TriplePattern::from(&probe)).is_empty());
            Ok(())
        })
        .expect("unbound and ground patterns should yield nothing");
}
