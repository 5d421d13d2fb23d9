//! Search backend trait and implementations.

mod label_scan;

pub use label_scan::LabelScanBackend;

use crate::error::Result;
use crate::hit::SearchHit;
use async_trait::async_trait;

/// Trait for full-text search implementations.
///
/// The query string reaches the backend exactly as the caller (or a
/// decorating backend) produced it; backends define their own token syntax.
#[async_trait]
pub trait SearchBackend: std::fmt::Debug + Send + Sync {
    /// Run a full-text query, returning at most `limit` hits.
    ///
    /// An empty result list is a valid outcome, not an error.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>>;
}
