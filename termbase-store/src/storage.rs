//! Storage trait for the named-graph quad store
//!
//! The trait is the seam between the domain layer and whatever holds the
//! triples. It is deliberately narrow: atomic context-scoped insertion,
//! pattern selection, and context enumeration. Callers acquire nothing long-
//! lived; every call is its own scoped connection.
//!
//! ## Contract
//!
//! - `insert` is all-or-nothing: on error, no statement of the batch is
//!   visible to any subsequent `select`.
//! - `select` sees only committed data.
//! - Implementations must be safe for concurrent use (`Send + Sync`); two
//!   inserts into the same context are serialized by the implementation,
//!   not by the caller.

use crate::error::Result;
use crate::quad::{Quad, QuadPattern};
use async_trait::async_trait;
use std::fmt::Debug;
use termbase_graph_ir::Triple;

/// A store of RDF statements partitioned into named contexts.
#[async_trait]
pub trait GraphStore: Debug + Send + Sync {
    /// Atomically add statements to the given context.
    ///
    /// Either every statement in `triples` becomes visible or none does.
    /// Duplicates are stored as-is; dedup is a query-time concern.
    async fn insert(&self, context: &str, triples: Vec<Triple>) -> Result<()>;

    /// Evaluate a pattern query against committed data.
    async fn select(&self, pattern: &QuadPattern) -> Result<Vec<Quad>>;

    /// All context IRIs that currently hold at least one statement.
    async fn contexts(&self) -> Result<Vec<String>>;

    /// Number of statements in a context (0 for an absent context).
    async fn context_size(&self, context: &str) -> Result<usize> {
        let quads = self
            .select(&QuadPattern::any().in_context(context))
            .await?;
        Ok(quads.len())
    }
}
