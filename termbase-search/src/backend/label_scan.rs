//! Label-scanning search backend.
//!
//! The native full-text mechanism of the in-memory store: scans label
//! literals (skos:prefLabel, skos:altLabel, rdfs:label, dcterms:title)
//! across all contexts and scores by matched query tokens. A query token
//! with a trailing `*` matches label tokens by prefix, which is what the
//! prefix-expanding decorator relies on for search-as-you-type.

use crate::backend::SearchBackend;
use crate::error::Result;
use crate::hit::SearchHit;
use async_trait::async_trait;
use std::sync::Arc;
use termbase_graph_ir::Term;
use termbase_store::{GraphStore, Quad, QuadPattern};
use termbase_vocab::{dcterms, rdf, rdfs, skos, tb};

/// Predicates whose literal objects are searchable, with the field name
/// reported in hit snippets.
const LABEL_FIELDS: &[(&str, &str)] = &[
    (skos::PREF_LABEL, "prefLabel"),
    (skos::ALT_LABEL, "altLabel"),
    (rdfs::LABEL, "label"),
    (dcterms::TITLE, "title"),
];

/// Search backend scanning label literals in a [`GraphStore`].
#[derive(Debug)]
pub struct LabelScanBackend<S> {
    store: Arc<S>,
}

impl<S: GraphStore> LabelScanBackend<S> {
    /// Create a backend over the given store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Classify the matched subject by its rdf:type within its context.
    async fn kind_of(&self, subject: &Term, context: &str) -> Result<String> {
        let types = self
            .store
            .select(
                &QuadPattern::any()
                    .with_subject(subject.clone())
                    .with_predicate(Term::iri(rdf::TYPE))
                    .in_context(context),
            )
            .await?;

        for quad in &types {
            match quad.triple.o.as_iri() {
                Some(iri) if iri == skos::CONCEPT => return Ok("term".to_string()),
                Some(iri)
                    if iri == tb::VOCABULARY
                        || iri == termbase_vocab::owl::ONTOLOGY =>
                {
                    return Ok("vocabulary".to_string())
                }
                _ => {}
            }
        }
        Ok("asset".to_string())
    }
}

#[async_trait]
impl<S: GraphStore> SearchBackend for LabelScanBackend<S> {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let query_tokens: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if query_tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits = Vec::new();

        for (predicate, field) in LABEL_FIELDS {
            let quads = self
                .store
                .select(&QuadPattern::any().with_predicate(Term::iri(*predicate)))
                .await?;

            for quad in quads {
                let Some(label) = literal_text(&quad) else {
                    continue;
                };
                let score = score_label(&label, &query_tokens);
                if score == 0.0 {
                    continue;
                }
                let Some(uri) = quad.triple.s.as_iri() else {
                    continue;
                };
                let kind = self.kind_of(&quad.triple.s, quad.context.as_ref()).await?;
                hits.push(SearchHit {
                    uri: uri.to_string(),
                    label: label.clone(),
                    vocabulary_uri: Some(quad.context.to_string()),
                    kind,
                    snippet_field: field.to_string(),
                    snippet_text: label,
                    score,
                });
            }
        }

        // Rank by descending score; ties broken by URI for determinism
        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.uri.cmp(&b.uri))
        });
        hits.truncate(limit);

        tracing::debug!(query, hits = hits.len(), "label scan complete");
        Ok(hits)
    }
}

fn literal_text(quad: &Quad) -> Option<String> {
    let (value, _, _) = quad.triple.o.as_literal()?;
    Some(value.lexical())
}

/// Score a label against query tokens: one point per matched token. A query
/// token ending in `*` matches by prefix; otherwise it matches exactly
/// (case-insensitive).
fn score_label(label: &str, query_tokens: &[String]) -> f32 {
    let label_tokens: Vec<String> = label
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();

    let mut score = 0.0;
    for qt in query_tokens {
        let matched = match qt.strip_suffix('*') {
            Some(prefix) if !prefix.is_empty() => {
                label_tokens.iter().any(|lt| lt.starts_with(prefix))
            }
            _ => label_tokens.iter().any(|lt| lt == qt),
        };
        if matched {
            score += 1.0;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use termbase_graph_ir::Triple;
    use termbase_store::MemoryGraphStore;

    async fn seeded_store() -> Arc<MemoryGraphStore> {
        let store = Arc::new(MemoryGraphStore::new());
        let vocab_ctx = "https://example.org/vocab/finance";
        store
            .insert(
                vocab_ctx,
                vec![
                    Triple::new(
                        Term::iri("https://example.org/term/budget"),
                        Term::iri(rdf::TYPE),
                        Term::iri(skos::CONCEPT),
                    ),
                    Triple::new(
                        Term::iri("https://example.org/term/budget"),
                        Term::iri(skos::PREF_LABEL),
                        Term::lang_string("annual budget", "en"),
                    ),
                    Triple::new(
                        Term::iri("https://example.org/term/deficit"),
                        Term::iri(skos::PREF_LABEL),
                        Term::lang_string("budget deficit", "en"),
                    ),
                ],
            )
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn exact_token_match_scores() {
        let backend = LabelScanBackend::new(seeded_store().await);
        let hits = backend.search("budget", 10).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.score == 1.0));
    }

    #[tokio::test]
    async fn prefix_token_matches_by_prefix() {
        let backend = LabelScanBackend::new(seeded_store().await);
        let hits = backend.search("def*", 10).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].uri, "https://example.org/term/deficit");
    }

    #[tokio::test]
    async fn typed_subject_is_reported_as_term() {
        let backend = LabelScanBackend::new(seeded_store().await);
        let hits = backend.search("annual", 10).await.unwrap();
        assert_eq!(hits[0].kind, "term");
        assert_eq!(
            hits[0].vocabulary_uri.as_deref(),
            Some("https://example.org/vocab/finance")
        );
        assert_eq!(hits[0].snippet_field, "prefLabel");
    }

    #[tokio::test]
    async fn no_match_is_empty_not_error() {
        let backend = LabelScanBackend::new(seeded_store().await);
        let hits = backend.search("nonexistent", 10).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn limit_truncates_ranked_hits() {
        let backend = LabelScanBackend::new(seeded_store().await);
        let hits = backend.search("budget", 1).await.unwrap();
        assert_eq!(hits.len(), 1);
    }
}
