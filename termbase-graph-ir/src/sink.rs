//! GraphSink trait for event-driven graph construction
//!
//! Parsers emit term and statement events to a sink without knowing the
//! concrete sink type. `GraphCollectorSink` is the standard implementation
//! that accumulates events into a [`Graph`]; a single collector can receive
//! the output of several parse passes, which is how multi-stream import
//! merges its inputs into one model.

use crate::{Datatype, Graph, Term, Triple};
use std::collections::HashMap;

/// Opaque term identifier for efficient triple emission
///
/// A `TermId` is only valid within a single sink session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TermId(u32);

impl TermId {
    /// Create a TermId from a raw index (for sink implementations outside
    /// this crate)
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Event-driven interface for RDF graph construction
pub trait GraphSink {
    /// Called when a base IRI is declared
    fn on_base(&mut self, base_iri: &str);

    /// Called when a prefix is declared
    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str);

    /// Create an IRI term and return its ID. The IRI must be fully expanded.
    fn term_iri(&mut self, iri: &str) -> TermId;

    /// Create a blank node term and return its ID.
    ///
    /// With `Some(label)` the same label yields the same term within the
    /// session; with `None` a fresh blank node is generated.
    fn term_blank(&mut self, label: Option<&str>) -> TermId;

    /// Create a literal term from its lexical form
    fn term_literal(&mut self, value: &str, datatype: Datatype, language: Option<&str>) -> TermId;

    /// Emit a statement using previously created term IDs
    fn emit_triple(&mut self, subject: TermId, predicate: TermId, object: TermId);
}

/// A sink that collects statements into a [`Graph`]
#[derive(Debug, Default)]
pub struct GraphCollectorSink {
    graph: Graph,
    terms: Vec<Term>,
    blank_counter: u32,
    blank_labels: HashMap<String, TermId>,
}

impl GraphCollectorSink {
    /// Create a new collector sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish building and return the graph, consuming the sink
    pub fn finish(self) -> Graph {
        self.graph
    }

    /// Get the current graph (non-consuming)
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    fn get_term(&self, id: TermId) -> &Term {
        &self.terms[id.0 as usize]
    }

    fn add_term(&mut self, term: Term) -> TermId {
        let id = TermId(self.terms.len() as u32);
        self.terms.push(term);
        id
    }
}

impl GraphSink for GraphCollectorSink {
    fn on_base(&mut self, base_iri: &str) {
        self.graph.set_base(base_iri);
    }

    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str) {
        self.graph.add_prefix(prefix, namespace_iri);
    }

    fn term_iri(&mut self, iri: &str) -> TermId {
        self.add_term(Term::iri(iri))
    }

    fn term_blank(&mut self, label: Option<&str>) -> TermId {
        match label {
            Some(l) => {
                if let Some(&id) = self.blank_labels.get(l) {
                    return id;
                }
                let id = self.add_term(Term::blank(l));
                self.blank_labels.insert(l.to_string(), id);
                id
            }
            None => {
                self.blank_counter += 1;
                let label = format!("b{}", self.blank_counter);
                self.add_term(Term::blank(label))
            }
        }
    }

    fn term_literal(&mut self, value: &str, datatype: Datatype, language: Option<&str>) -> TermId {
        let term = match language {
            Some(lang) => Term::lang_string(value, lang),
            None if datatype.is_xsd_string() => Term::string(value),
            None => Term::typed(value, datatype),
        };
        self.add_term(term)
    }

    fn emit_triple(&mut self, subject: TermId, predicate: TermId, object: TermId) {
        let s = self.get_term(subject).clone();
        let p = self.get_term(predicate).clone();
        let o = self.get_term(object).clone();
        self.graph.add(Triple::new(s, p, o));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_basic() {
        let mut sink = GraphCollectorSink::new();

        let s = sink.term_iri("https://example.org/term/a");
        let p = sink.term_iri(termbase_vocab::skos::PREF_LABEL);
        let o = sink.term_literal("alpha", Datatype::xsd_string(), None);
        sink.emit_triple(s, p, o);

        let graph = sink.finish();
        assert_eq!(graph.len(), 1);
        let triple = graph.iter().next().unwrap();
        assert_eq!(triple.s.as_iri(), Some("https://example.org/term/a"));
    }

    #[test]
    fn labelled_blank_nodes_are_stable() {
        let mut sink = GraphCollectorSink::new();

        let b1 = sink.term_blank(Some("b0"));
        let b2 = sink.term_blank(Some("b0"));
        assert_eq!(b1, b2);

        let anon1 = sink.term_blank(None);
        let anon2 = sink.term_blank(None);
        assert_ne!(anon1, anon2);
    }

    #[test]
    fn language_literal_roundtrip() {
        let mut sink = GraphCollectorSink::new();

        let s = sink.term_iri("https://example.org/term/a");
        let p = sink.term_iri(termbase_vocab::skos::PREF_LABEL);
        let o = sink.term_literal("alfa", Datatype::rdf_lang_string(), Some("cs"));
        sink.emit_triple(s, p, o);

        let graph = sink.finish();
        let triple = graph.iter().next().unwrap();
        let (_, dt, lang) = triple.o.as_literal().unwrap();
        assert!(dt.is_lang_string());
        assert_eq!(lang, Some("cs"));
    }

    #[test]
    fn one_sink_merges_multiple_sessions() {
        // Two "parse passes" into the same collector end up in one graph.
        let mut sink = GraphCollectorSink::new();
        for n in ["a", "b"] {
            let s = sink.term_iri(&format!("https://example.org/term/{n}"));
            let p = sink.term_iri(termbase_vocab::rdf::TYPE);
            let o = sink.term_iri(termbase_vocab::skos::CONCEPT);
            sink.emit_triple(s, p, o);
        }
        assert_eq!(sink.graph().len(), 2);
    }
}
