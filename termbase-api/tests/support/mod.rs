//! Shared fixtures for integration tests.

// Helpers are used by some integration test crates but not others; keep them
// centralized and silence dead_code warnings where a crate skips a few.
#![allow(dead_code)]

use std::io::Read;
use std::sync::Arc;

use async_trait::async_trait;
use termbase_graph_ir::Triple;
use termbase_store::{GraphStore, MemoryGraphStore, Quad, QuadPattern, StoreError};

/// Turtle payload describing a complete small vocabulary: the ontology
/// resource, its glossary, and two terms.
pub const FINANCE_TTL: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix dcterms: <http://purl.org/dc/terms/> .
@prefix tb: <https://ns.termbase.dev/model#> .

<https://example.org/vocab/finance> a owl:Ontology ;
    dcterms:title "Finance vocabulary"@en ;
    tb:hasGlossary <https://example.org/vocab/finance/glossary> .

<https://example.org/vocab/finance/glossary> a skos:ConceptScheme ;
    dcterms:title "Finance glossary"@en .

<https://example.org/term/budget> a skos:Concept ;
    skos:prefLabel "budget"@en ;
    skos:definition "A plan of expected income and expenditure."@en ;
    skos:inScheme <https://example.org/vocab/finance/glossary> .

<https://example.org/term/deficit> a skos:Concept ;
    skos:prefLabel "deficit"@en ;
    skos:broader <https://example.org/term/budget> ;
    skos:inScheme <https://example.org/vocab/finance/glossary> .
"#;

/// Vocabulary-resource-only stream (no glossary, no terms).
pub const VOCABULARY_ONLY_TTL: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix dcterms: <http://purl.org/dc/terms/> .

<https://example.org/vocab/finance> a owl:Ontology ;
    dcterms:title "Finance vocabulary"@en .
"#;

/// Glossary/terms-only stream (no subject typed as ontology or vocabulary).
pub const GLOSSARY_ONLY_TTL: &str = r#"
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .

<https://example.org/term/budget> a skos:Concept ;
    skos:prefLabel "budget"@en .
"#;

/// Box a string payload as an import stream.
pub fn stream(content: &str) -> Box<dyn Read + Send> {
    Box::new(std::io::Cursor::new(content.as_bytes().to_vec()))
}

/// Store whose commits always fail after the batch is validated, while
/// reads pass through. Simulates a storage transaction failure.
#[derive(Debug, Default)]
pub struct FailingCommitStore {
    inner: MemoryGraphStore,
}

impl FailingCommitStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl GraphStore for FailingCommitStore {
    async fn insert(&self, _context: &str, _triples: Vec<Triple>) -> termbase_store::Result<()> {
        Err(StoreError::transaction("simulated commit failure"))
    }

    async fn select(&self, pattern: &QuadPattern) -> termbase_store::Result<Vec<Quad>> {
        self.inner.select(pattern).await
    }

    async fn contexts(&self) -> termbase_store::Result<Vec<String>> {
        self.inner.contexts().await
    }
}
