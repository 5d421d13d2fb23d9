//! RDF graph - an ordered collection of statements
//!
//! `Graph` uses `Vec<Triple>` to preserve duplicates and insertion order (bag
//! semantics). Call `dedupe()` explicitly for set semantics.

use crate::{Term, Triple};
use std::collections::BTreeMap;

/// An ordered, duplicate-preserving collection of RDF statements.
///
/// A `Graph` is owned exclusively by the import or export operation that
/// builds it; it is never shared across concurrent operations.
///
/// # Design Decisions
///
/// - **Vec storage**: preserves duplicates and insertion order as produced by
///   parsing or query accumulation.
/// - **Explicit deduplication**: `dedupe()` applies set semantics.
/// - **Deterministic output**: `sort()` before formatting for stable output.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    /// Base IRI from parsing (kept for diagnostics)
    pub base: Option<String>,
    /// Prefix mappings from parsing (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base IRI
    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = Some(base.into());
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Get the number of statements
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over statements
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Sort statements by SPO for deterministic output
    pub fn sort(&mut self) {
        self.triples.sort();
    }

    /// Remove duplicate statements (apply set semantics)
    ///
    /// Sorts first to group duplicates, so the result is also deterministic.
    pub fn dedupe(&mut self) {
        self.triples.sort();
        self.triples.dedup();
    }

    /// Get all statements (consuming the graph)
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }

    /// Get a reference to the statements
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// All distinct subjects that carry `predicate -> object`.
    ///
    /// This is the lookup both IRI resolution (subjects typed as ontology /
    /// vocabulary) and exporters (subjects typed as concept) are built on.
    pub fn subjects_with(&self, predicate: &Term, object: &Term) -> Vec<&Term> {
        let mut subjects: Vec<&Term> = self
            .triples
            .iter()
            .filter(|t| &t.p == predicate && &t.o == object)
            .map(|t| &t.s)
            .collect();
        subjects.sort();
        subjects.dedup();
        subjects
    }

    /// All objects of `subject -> predicate`.
    pub fn objects_of(&self, subject: &Term, predicate: &Term) -> Vec<&Term> {
        self.triples
            .iter()
            .filter(|t| &t.s == subject && &t.p == predicate)
            .map(|t| &t.o)
            .collect()
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}
