//! Triple data model: terms, triples, patterns, and result bindings.
//!
//! Terms are validated at construction so that user-supplied identifiers
//! can never carry query syntax into generated SPARQL text. A `Triple` is
//! fully bound by construction and is the only input the write path
//! accepts; a `TriplePattern` leaves any position unbound for reads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TermError;

/// One concrete position of a triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// An IRI, rendered as `<iri>` in query text.
    Iri(String),
    /// A prefixed name such as `rdf:type`, rendered as-is.
    Prefixed(String),
}

impl Term {
    /// Build an IRI term, rejecting characters that would terminate or
    /// escape a SPARQL IRIREF.
    pub fn iri(iri: impl Into<String>) -> Result<Self, TermError> {
        let iri = iri.into();
        if iri.is_empty() {
            return Err(TermError::Empty);
        }
        check_chars(&iri)?;
        Ok(Self::Iri(iri))
    }

    /// Build a prefixed-name term. Requires a non-empty prefix and local
    /// part separated by a single colon.
    pub fn prefixed(name: impl Into<String>) -> Result<Self, TermError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TermError::Empty);
        }
        check_chars(&name)?;
        match name.split_once(':') {
            Some((prefix, local))
                if !prefix.is_empty() && !local.is_empty() && !local.contains(':') =>
            {
                Ok(Self::Prefixed(name))
            }
            _ => Err(TermError::MalformedPrefixed(name)),
        }
    }

    /// The bare identifier, without query-text decoration.
    pub fn value(&self) -> &str {
        match self {
            Self::Iri(s) => s,
            Self::Prefixed(s) => s,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(s) => write!(f, "<{s}>"),
            Self::Prefixed(s) => f.write_str(s),
        }
    }
}

/// Characters excluded from IRIREFs and prefixed names. Anything here
/// could terminate the term or open a new clause in generated query text.
fn check_chars(s: &str) -> Result<(), TermError> {
    for c in s.chars() {
        if c.is_whitespace()
            || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
        {
            return Err(TermError::ForbiddenChar(c));
        }
    }
    Ok(())
}

/// A fully-bound (subject, relation, object) statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: Term,
    pub relation: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, relation: Term, object: Term) -> Self {
        Self {
            subject,
            relation,
            object,
        }
    }

    /// The pattern that matches exactly this triple.
    pub fn as_pattern(&self) -> TriplePattern {
        TriplePattern {
            subject: Some(self.subject.clone()),
            relation: Some(self.relation.clone()),
            object: Some(self.object.clone()),
        }
    }
}

/// A read pattern. `None` positions are unbound and match anything;
/// the default pattern matches every triple in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: Option<Term>,
    pub relation: Option<Term>,
    pub object: Option<Term>,
}

/// One resolved row of a read query. Constructed per result row and not
/// retained past the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub subject: String,
    pub relation: String,
    pub object: String,
}
