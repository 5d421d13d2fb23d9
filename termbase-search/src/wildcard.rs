//! Prefix-wildcard query expansion.
//!
//! Lucene-style backends support search-as-you-type by appending a
//! prefix-wildcarded duplicate of the final query token. The decorator here
//! applies that rewriting in front of any [`SearchBackend`]; the original
//! phrase stays in the query so exact matches keep their ranking.

use crate::backend::SearchBackend;
use crate::error::Result;
use crate::hit::SearchHit;
use async_trait::async_trait;

/// The wildcard character understood by prefix-capable backends.
pub const WILDCARD: char = '*';

/// Rewrite a query for prefix matching on its last token.
///
/// - A query already ending with the wildcard passes through unchanged.
/// - Otherwise the last whitespace-separated token is duplicated with the
///   wildcard appended, after the unmodified original query:
///   `"termOne termTwo token"` becomes `"termOne termTwo token token*"`.
pub fn expand_last_token(query: &str) -> String {
    if query.ends_with(WILDCARD) {
        return query.to_string();
    }
    match query.split_whitespace().last() {
        Some(last) => format!("{query} {last}{WILDCARD}"),
        None => query.to_string(),
    }
}

/// Decorator appending a prefix-wildcarded final token to every query before
/// delegating to the wrapped backend.
#[derive(Debug)]
pub struct PrefixExpandingBackend<B> {
    inner: B,
}

impl<B: SearchBackend> PrefixExpandingBackend<B> {
    /// Wrap a backend
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<B: SearchBackend> SearchBackend for PrefixExpandingBackend<B> {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let expanded = expand_last_token(query);
        tracing::debug!(original = query, expanded = %expanded, "expanded search query");
        self.inner.search(&expanded, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn single_token_is_doubled() {
        assert_eq!(expand_last_token("test"), "test test*");
    }

    #[test]
    fn multi_token_duplicates_only_last() {
        assert_eq!(
            expand_last_token("termOne termTwo token"),
            "termOne termTwo token token*"
        );
    }

    #[test]
    fn trailing_wildcard_passes_through() {
        assert_eq!(expand_last_token("test token*"), "test token*");
    }

    #[test]
    fn whitespace_only_query_is_unchanged() {
        assert_eq!(expand_last_token("   "), "   ");
    }

    /// Backend that records the query it receives.
    #[derive(Debug, Default)]
    struct RecordingBackend {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SearchBackend for RecordingBackend {
        async fn search(&self, query: &str, _limit: usize) -> Result<Vec<SearchHit>> {
            self.seen.lock().unwrap().push(query.to_string());
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn decorator_rewrites_before_delegating() {
        let backend = PrefixExpandingBackend::new(RecordingBackend::default());
        backend.search("test", 10).await.unwrap();
        backend.search("test token*", 10).await.unwrap();

        let seen = backend.inner.seen.lock().unwrap().clone();
        assert_eq!(seen, vec!["test test*", "test token*"]);
    }
}
