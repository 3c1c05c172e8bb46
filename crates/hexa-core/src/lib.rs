// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! hexa-core: in-memory triple store over six permutation indexes.
//!
//! Facts are `(subject, predicate, object)` [`Atom`]s. Each term is mapped to
//! a dense [`TermId`] by a per-store [`Dictionary`], and every fact is written
//! into six [`PermutationIndex`]es, one per key ordering. A [`TriplePattern`]
//! with one or two bound positions is answered by [`HexaStore::match_pattern`]
//! from the single index whose leading levels are the bound positions,
//! returning one [`Substitution`] per matching fact.
//!
//! # Query shapes
//!
//! - No bound position, or all three bound: refused, empty result plus a
//!   `tracing` warning. Existence of a ground fact is
//!   [`HexaStore::contains`].
//! - Unknown bound term: empty result.
//! - Star queries: [`StoreError::Unsupported`].
//!
//! [`ScanStore`] implements the same [`RdfStorage`] trait with a linear scan
//! and serves as the reference implementation in tests.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod config;
mod dictionary;
mod error;
mod hexastore;
mod index;
mod pattern;
mod scan;
mod selection;
mod storage;
mod substitution;
mod term;

pub use config::StoreConfig;
pub use dictionary::{Dictionary, TermId};
pub use error::{ConfigError, StoreError};
pub use hexastore::HexaStore;
pub use index::{Branch, Leaf, Permutation, PermutationIndex};
pub use pattern::{StarQuery, TriplePattern};
pub use scan::ScanStore;
pub use selection::{select, BoundMask, ProbeDepth, Selection};
pub use storage::RdfStorage;
pub use substitution::Substitution;
pub use term::{Atom, PatternTerm, Position, Term, Variable};
