//! Search hit type returned by backends.

use serde::Serialize;

/// A single full-text match.
///
/// Produced per-query, never persisted. Ordering is whatever the backend
/// ranking returns; backends are expected (not required) to rank by
/// descending score.
#[derive(Clone, Debug, Serialize)]
pub struct SearchHit {
    /// IRI of the matched asset
    pub uri: String,
    /// The asset's label
    pub label: String,
    /// IRI of the vocabulary (context) the asset belongs to
    pub vocabulary_uri: Option<String>,
    /// Asset kind tag: "term", "vocabulary", or "asset"
    pub kind: String,
    /// Field the snippet was taken from (e.g. "prefLabel")
    pub snippet_field: String,
    /// The matching text
    pub snippet_text: String,
    /// Backend relevance score
    pub score: f32,
}
