// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Variable bindings and their generation from index windows.

use std::collections::BTreeMap;
use std::fmt;

use crate::dictionary::Dictionary;
use crate::index::{Branch, Leaf};
use crate::pattern::TriplePattern;
use crate::term::{Atom, PatternTerm, Term, Variable};

/// One match result: a mapping from pattern variables to terms.
///
/// Values are owned; holding a substitution never pins store internals.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Substitution {
    bindings: BTreeMap<Variable, Term>,
}

impl Substitution {
    /// Creates an empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `var` to `term`.
    ///
    /// Returns `false` and leaves the substitution unchanged if `var` is
    /// already bound to a different term.
    pub fn bind(&mut self, var: Variable, term: Term) -> bool {
        match self.bindings.get(&var) {
            Some(existing) => *existing == term,
            None => {
                self.bindings.insert(var, term);
                true
            }
        }
    }

    /// Term bound to `var`, if any.
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates bindings in variable-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> + '_ {
        self.bindings.iter()
    }

    /// Instantiates `pattern`, or `None` if some variable stays unbound.
    pub fn apply(&self, pattern: &TriplePattern) -> Option<Atom> {
        let ground = |slot: &PatternTerm| match slot {
            PatternTerm::Bound(term) => Some(term.clone()),
            PatternTerm::Var(var) => self.get(var).cloned(),
        };
        Some(Atom::new(
            ground(pattern.subject())?,
            ground(pattern.predicate())?,
            ground(pattern.object())?,
        ))
    }
}

/// Binds pairs in order. A pair that conflicts with an earlier binding of
/// the same variable is dropped and the first binding wins; use
/// [`Substitution::bind`] to observe conflicts.
impl FromIterator<(Variable, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Variable, Term)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (var, term) in iter {
            out.bind(var, term);
        }
        out
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (var, term)) in self.bindings.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{var} -> {term}")?;
        }
        f.write_str("}")
    }
}

/// Emits one substitution per leaf element, binding `var`.
pub(crate) fn bind_leaf(
    dict: &Dictionary,
    leaf: &Leaf,
    var: &Variable,
    out: &mut Vec<Substitution>,
) {
    out.reserve(leaf.len());
    for &id in leaf {
        let mut sub = Substitution::new();
        sub.bind(var.clone(), dict.resolve(id).clone());
        out.push(sub);
    }
}

/// Emits one substitution per `(k2, k3)` pair under a branch, binding
/// `first` to the decoded `k2` and `second` to the decoded `k3` jointly.
///
/// When `first == second` only pairs with `k2 == k3` survive.
pub(crate) fn bind_branch(
    dict: &Dictionary,
    branch: &Branch,
    first: &Variable,
    second: &Variable,
    out: &mut Vec<Substitution>,
) {
    for (&k2, leaf) in branch {
        let head = dict.resolve(k2);
        for &k3 in leaf {
            let mut sub = Substitution::new();
            sub.bind(first.clone(), head.clone());
            if sub.bind(second.clone(), dict.resolve(k3).clone()) {
                out.push(sub);
            }
        }
    }
}
