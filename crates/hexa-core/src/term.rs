// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Terms, variables and stored facts.
//!
//! Labels are held as `Arc<str>` so terms handed back to callers (decoded
//! atoms, substitution values) are owned and never borrow from store
//! internals, while cloning one stays a refcount bump.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A constant value that may occupy any position of a fact.
///
/// Identity is the label alone: `Term::iri("30") == Term::literal("30")`.
/// The kind only affects rendering and [`is_literal`](Self::is_literal).
#[derive(Clone, Debug)]
pub enum Term {
    /// An identifier (IRI or blank-node style name).
    Iri(Arc<str>),
    /// A literal value, kept as its lexical form.
    Literal(Arc<str>),
}

impl Term {
    /// Creates an identifier term.
    pub fn iri(label: impl AsRef<str>) -> Self {
        Self::Iri(Arc::from(label.as_ref()))
    }

    /// Creates a literal term.
    pub fn literal(label: impl AsRef<str>) -> Self {
        Self::Literal(Arc::from(label.as_ref()))
    }

    /// The underlying label without any kind decoration.
    pub fn label(&self) -> &str {
        match self {
            Self::Iri(label) | Self::Literal(label) => label,
        }
    }

    /// Returns `true` for literal terms.
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.label() == other.label()
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label().hash(state);
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(label) => write!(f, "<{label}>"),
            Self::Literal(label) => {
                f.write_str("\"")?;
                for c in label.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

/// A named query placeholder (`?name`).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Variable(Arc<str>);

impl Variable {
    /// Creates a variable. A leading `?` is accepted and stripped.
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Self(Arc::from(name.strip_prefix('?').unwrap_or(name)))
    }

    /// Variable name without the `?` sigil.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// One position of a triple pattern: a bound term or a variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum PatternTerm {
    /// A concrete term the matched fact must carry.
    Bound(Term),
    /// A variable to be bound by matching.
    Var(Variable),
}

impl PatternTerm {
    /// Returns `true` if this position is a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    /// The bound term, if any.
    pub fn as_bound(&self) -> Option<&Term> {
        match self {
            Self::Bound(term) => Some(term),
            Self::Var(_) => None,
        }
    }

    /// The variable, if any.
    pub fn as_var(&self) -> Option<&Variable> {
        match self {
            Self::Var(var) => Some(var),
            Self::Bound(_) => None,
        }
    }
}

impl From<Term> for PatternTerm {
    fn from(term: Term) -> Self {
        Self::Bound(term)
    }
}

impl From<Variable> for PatternTerm {
    fn from(var: Variable) -> Self {
        Self::Var(var)
    }
}

impl fmt::Display for PatternTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bound(term) => term.fmt(f),
            Self::Var(var) => var.fmt(f),
        }
    }
}

/// A position inside a triple.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Position {
    /// First position.
    Subject,
    /// Second position.
    Predicate,
    /// Third position.
    Object,
}

impl Position {
    /// All positions in triple order.
    pub const ALL: [Self; 3] = [Self::Subject, Self::Predicate, Self::Object];
}

/// A stored fact: three constant terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Atom {
    subject: Term,
    predicate: Term,
    object: Term,
}

impl Atom {
    /// Creates a fact.
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Subject term.
    pub fn subject(&self) -> &Term {
        &self.subject
    }

    /// Predicate term.
    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    /// Object term.
    pub fn object(&self) -> &Term {
        &self.object
    }

    /// Term at `position`.
    pub fn get(&self, position: Position) -> &Term {
        match position {
            Position::Subject => &self.subject,
            Position::Predicate => &self.predicate,
            Position::Object => &self.object,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
