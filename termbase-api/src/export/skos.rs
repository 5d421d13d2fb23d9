//! SKOS glossary export.
//!
//! Two-phase accumulation into a private model, then one-shot Turtle
//! serialization. An exporter instance accumulates across calls and must be
//! fresh per export operation; reusing one across unrelated exports would
//! leak statements between them.

use std::sync::Arc;

use termbase_graph_format::format_turtle;
use termbase_graph_ir::{Graph, Term};
use termbase_store::{GraphStore, Quad, QuadPattern};
use termbase_vocab::{dcterms, owl, rdf, rdfs, skos, tb};

use crate::error::Result;
use crate::model::Vocabulary;

/// Glossary-level predicates exported by the instance query: typing, labels
/// and import relationships to other glossaries.
const GLOSSARY_PREDICATES: &[&str] = &[
    rdf::TYPE,
    rdfs::LABEL,
    dcterms::TITLE,
    dcterms::DESCRIPTION,
    owl::IMPORTS,
    tb::HAS_GLOSSARY,
    tb::IMPORTS_GLOSSARY,
    skos::HAS_TOP_CONCEPT,
];

/// Term-level predicates exported by the terms query: concept typing, labels,
/// hierarchy and scheme membership.
const TERM_PREDICATES: &[&str] = &[
    rdf::TYPE,
    skos::PREF_LABEL,
    skos::ALT_LABEL,
    skos::DEFINITION,
    skos::SCOPE_NOTE,
    skos::NOTATION,
    skos::BROADER,
    skos::NARROWER,
    skos::IN_SCHEME,
    skos::TOP_CONCEPT_OF,
];

/// Accumulating SKOS exporter over a vocabulary's canonical context.
pub struct SkosExporter<S> {
    store: Arc<S>,
    model: Graph,
}

impl<S: GraphStore> SkosExporter<S> {
    /// Create a fresh exporter. One instance serves one export operation.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            model: Graph::new(),
        }
    }

    /// Accumulate the statements describing the glossary itself: the
    /// vocabulary/concept-scheme resource, its labels, and its import links
    /// to other glossaries.
    pub async fn export_glossary_instance(&mut self, vocabulary: &Vocabulary) -> Result<()> {
        let context = vocabulary.context();

        // The vocabulary resource and, when present, its linked glossary
        let mut subjects = vec![Term::iri(&vocabulary.iri)];
        if let Some(glossary_iri) = &vocabulary.glossary_iri {
            subjects.push(Term::iri(glossary_iri));
        }

        for subject in subjects {
            let quads = self
                .store
                .select(
                    &QuadPattern::any()
                        .with_subject(subject)
                        .in_context(context),
                )
                .await?;
            self.append(quads, GLOSSARY_PREDICATES);
        }

        tracing::debug!(
            vocabulary = %vocabulary.iri,
            accumulated = self.model.len(),
            "glossary instance exported"
        );
        Ok(())
    }

    /// Accumulate all term-level statements of the vocabulary's glossary.
    pub async fn export_glossary_terms(&mut self, vocabulary: &Vocabulary) -> Result<()> {
        let context = vocabulary.context();

        let concepts = self
            .store
            .select(
                &QuadPattern::any()
                    .with_predicate(Term::iri(rdf::TYPE))
                    .with_object(Term::iri(skos::CONCEPT))
                    .in_context(context),
            )
            .await?;

        for concept in &concepts {
            let quads = self
                .store
                .select(
                    &QuadPattern::any()
                        .with_subject(concept.triple.s.clone())
                        .in_context(context),
                )
                .await?;
            self.append(quads, TERM_PREDICATES);
        }

        tracing::debug!(
            vocabulary = %vocabulary.iri,
            accumulated = self.model.len(),
            "glossary terms exported"
        );
        Ok(())
    }

    /// Serialize the accumulated model as Turtle.
    ///
    /// An empty model yields a valid, empty document.
    pub fn export_as_ttl(&self) -> Vec<u8> {
        format_turtle(&self.model).into_bytes()
    }

    /// Number of accumulated statements (after duplicate suppression).
    pub fn len(&self) -> usize {
        self.model.len()
    }

    /// Check whether anything has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    /// Append query results whose predicate is in the given whitelist,
    /// suppressing duplicates already accumulated.
    fn append(&mut self, quads: Vec<Quad>, predicates: &[&str]) {
        for quad in quads {
            let keep = quad
                .triple
                .p
                .as_iri()
                .is_some_and(|p| predicates.contains(&p));
            if keep {
                self.model.add(quad.triple);
            }
        }
        self.model.dedupe();
    }
}

impl<S> std::fmt::Debug for SkosExporter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkosExporter")
            .field("accumulated", &self.model.len())
            .finish()
    }
}
