//! Search service: DTO mapping over a search backend.

use serde::Serialize;
use termbase_search::{SearchBackend, SearchHit};

use crate::error::{ApiError, Result};

/// Default result cap per query.
const DEFAULT_LIMIT: usize = 100;

/// A search result as handed to callers.
#[derive(Clone, Debug, Serialize)]
pub struct SearchResult {
    /// IRI of the matched asset
    pub uri: String,
    /// The asset's label
    pub label: String,
    /// IRI of the vocabulary the asset belongs to
    pub vocabulary: Option<String>,
    /// Asset kind tag
    pub kind: String,
    /// Field the snippet was taken from
    pub snippet_field: String,
    /// The matching text
    pub snippet_text: String,
    /// Backend relevance score
    pub score: f32,
}

impl From<SearchHit> for SearchResult {
    fn from(hit: SearchHit) -> Self {
        Self {
            uri: hit.uri,
            label: hit.label,
            vocabulary: hit.vocabulary_uri,
            kind: hit.kind,
            snippet_field: hit.snippet_field,
            snippet_text: hit.snippet_text,
            score: hit.score,
        }
    }
}

/// Search service over a configured backend.
#[derive(Debug)]
pub struct SearchService<B> {
    backend: B,
    limit: usize,
}

impl<B: SearchBackend> SearchService<B> {
    /// Create a service with the default result cap
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Override the result cap
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Run a full-text search.
    ///
    /// An empty or whitespace-only query is a precondition violation,
    /// rejected before any store access. No matches is an empty list.
    pub async fn full_text_search(&self, query: &str) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(ApiError::validation("search query must not be empty"));
        }

        let hits = self.backend.search(query, self.limit).await?;
        Ok(hits.into_iter().map(SearchResult::from).collect())
    }

    /// Caller-facing alias for [`full_text_search`](Self::full_text_search).
    pub async fn search_by_label(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.full_text_search(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Backend returning a fixed hit set.
    #[derive(Debug)]
    struct FixedBackend;

    #[async_trait]
    impl SearchBackend for FixedBackend {
        async fn search(
            &self,
            _query: &str,
            _limit: usize,
        ) -> termbase_search::Result<Vec<SearchHit>> {
            Ok(vec![SearchHit {
                uri: "https://example.org/term/budget".to_string(),
                label: "budget".to_string(),
                vocabulary_uri: Some("https://example.org/vocab/finance".to_string()),
                kind: "term".to_string(),
                snippet_field: "prefLabel".to_string(),
                snippet_text: "budget".to_string(),
                score: 1.5,
            }])
        }
    }

    #[tokio::test]
    async fn hits_are_mapped_to_results() {
        let service = SearchService::new(FixedBackend);
        let results = service.full_text_search("budget").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].uri, "https://example.org/term/budget");
        assert_eq!(
            results[0].vocabulary.as_deref(),
            Some("https://example.org/vocab/finance")
        );
    }

    #[tokio::test]
    async fn empty_query_fails_before_backend() {
        let service = SearchService::new(FixedBackend);
        let err = service.full_text_search("   ").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn search_by_label_is_an_alias() {
        let service = SearchService::new(FixedBackend);
        let a = service.full_text_search("budget").await.unwrap();
        let b = service.search_by_label("budget").await.unwrap();
        assert_eq!(a.len(), b.len());
    }
}
