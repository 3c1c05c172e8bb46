// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Query shapes: single triple patterns and star queries.

use std::fmt;

use crate::term::{Atom, PatternTerm, Position, Term, Variable};

/// A triple whose positions may be variables.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TriplePattern {
    subject: PatternTerm,
    predicate: PatternTerm,
    object: PatternTerm,
}

impl TriplePattern {
    /// Creates a pattern.
    pub fn new(
        subject: impl Into<PatternTerm>,
        predicate: impl Into<PatternTerm>,
        object: impl Into<PatternTerm>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Subject position.
    pub fn subject(&self) -> &PatternTerm {
        &self.subject
    }

    /// Predicate position.
    pub fn predicate(&self) -> &PatternTerm {
        &self.predicate
    }

    /// Object position.
    pub fn object(&self) -> &PatternTerm {
        &self.object
    }

    /// Pattern term at `position`.
    pub fn get(&self, position: Position) -> &PatternTerm {
        match position {
            Position::Subject => &self.subject,
            Position::Predicate => &self.predicate,
            Position::Object => &self.object,
        }
    }

    /// Distinct variables in triple order.
    pub fn variables(&self) -> Vec<&Variable> {
        let mut vars: Vec<&Variable> = Vec::with_capacity(3);
        for position in Position::ALL {
            if let Some(var) = self.get(position).as_var() {
                if !vars.contains(&var) {
                    vars.push(var);
                }
            }
        }
        vars
    }

    /// Returns `true` when no position is a variable.
    pub fn is_ground(&self) -> bool {
        Position::ALL
            .iter()
            .all(|&position| !self.get(position).is_variable())
    }

    /// Returns `true` if `atom` is an instance of this pattern.
    ///
    /// Bound positions must be equal and a variable used twice must see the
    /// same term in both places.
    pub fn matches(&self, atom: &Atom) -> bool {
        let mut seen: Vec<(&Variable, &Term)> = Vec::with_capacity(3);
        for position in Position::ALL {
            let value = atom.get(position);
            match self.get(position) {
                PatternTerm::Bound(term) => {
                    if term != value {
                        return false;
                    }
                }
                PatternTerm::Var(var) => match seen.iter().find(|(v, _)| *v == var) {
                    Some((_, prior)) if *prior != value => return false,
                    Some(_) => {}
                    None => seen.push((var, value)),
                },
            }
        }
        true
    }
}

impl From<&Atom> for TriplePattern {
    fn from(atom: &Atom) -> Self {
        Self::new(
            atom.subject().clone(),
            atom.predicate().clone(),
            atom.object().clone(),
        )
    }
}

impl fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// A conjunction of triple patterns sharing a central variable.
///
/// Stores accept this shape through [`RdfStorage::match_star`] but do not
/// evaluate it yet; see [`StoreError::Unsupported`].
///
/// [`RdfStorage::match_star`]: crate::RdfStorage::match_star
/// [`StoreError::Unsupported`]: crate::StoreError::Unsupported
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StarQuery {
    center: Variable,
    patterns: Vec<TriplePattern>,
    answer: Vec<Variable>,
}

impl StarQuery {
    /// Creates a star query around `center`.
    pub fn new(center: Variable, patterns: Vec<TriplePattern>, answer: Vec<Variable>) -> Self {
        Self {
            center,
            patterns,
            answer,
        }
    }

    /// The variable shared by every branch.
    pub fn center(&self) -> &Variable {
        &self.center
    }

    /// Branch patterns.
    pub fn patterns(&self) -> &[TriplePattern] {
        &self.patterns
    }

    /// Projected answer variables.
    pub fn answer(&self) -> &[Variable] {
        &self.answer
    }
}
