//! Stored statements and query patterns.

use std::sync::Arc;
use termbase_graph_ir::{Term, Triple};

/// A statement as stored: a triple plus the context (named graph) it lives in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quad {
    /// The statement
    pub triple: Triple,
    /// Context IRI of the named graph holding the statement
    pub context: Arc<str>,
}

impl Quad {
    /// Create a quad from a triple and a context IRI
    pub fn new(triple: Triple, context: impl AsRef<str>) -> Self {
        Self {
            triple,
            context: Arc::from(context.as_ref()),
        }
    }
}

/// One position of a quad pattern: match anything, or exactly one term.
#[derive(Clone, Debug, Default)]
pub enum TermPattern {
    /// Wildcard
    #[default]
    Any,
    /// Exact term
    Is(Term),
}

impl TermPattern {
    fn matches(&self, term: &Term) -> bool {
        match self {
            TermPattern::Any => true,
            TermPattern::Is(t) => t == term,
        }
    }
}

impl From<Term> for TermPattern {
    fn from(term: Term) -> Self {
        TermPattern::Is(term)
    }
}

/// A parametrized graph query: fixed pattern positions, with the variable
/// positions left as wildcards. Exporters bind the vocabulary IRI into the
/// subject/context slots of pre-defined patterns.
#[derive(Clone, Debug, Default)]
pub struct QuadPattern {
    /// Subject position
    pub s: TermPattern,
    /// Predicate position
    pub p: TermPattern,
    /// Object position
    pub o: TermPattern,
    /// Restrict to one context, or search all contexts
    pub context: Option<String>,
}

impl QuadPattern {
    /// Match everything
    pub fn any() -> Self {
        Self::default()
    }

    /// Bind the subject position
    pub fn with_subject(mut self, s: impl Into<TermPattern>) -> Self {
        self.s = s.into();
        self
    }

    /// Bind the predicate position
    pub fn with_predicate(mut self, p: impl Into<TermPattern>) -> Self {
        self.p = p.into();
        self
    }

    /// Bind the object position
    pub fn with_object(mut self, o: impl Into<TermPattern>) -> Self {
        self.o = o.into();
        self
    }

    /// Scope the query to a single context
    pub fn in_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Check whether a quad matches this pattern
    pub fn matches(&self, quad: &Quad) -> bool {
        if let Some(ctx) = &self.context {
            if quad.context.as_ref() != ctx {
                return false;
            }
        }
        self.s.matches(&quad.triple.s)
            && self.p.matches(&quad.triple.p)
            && self.o.matches(&quad.triple.o)
    }
}
