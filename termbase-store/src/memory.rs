//! In-memory quad store.
//!
//! The reference `GraphStore` implementation: a single quad table behind an
//! `RwLock`. Each call takes the lock for its own duration and releases it on
//! return, so a guard is the scoped storage connection. The write lock makes
//! `insert` a transaction: the batch is validated before the first push, and
//! no reader can observe a partially-applied batch.

use crate::error::{Result, StoreError};
use crate::quad::{Quad, QuadPattern};
use crate::storage::GraphStore;
use async_trait::async_trait;
use std::sync::RwLock;
use termbase_graph_ir::Triple;

/// In-memory named-graph quad store.
#[derive(Debug, Default)]
pub struct MemoryGraphStore {
    quads: RwLock<Vec<Quad>>,
}

impl MemoryGraphStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of statements across all contexts
    pub fn len(&self) -> usize {
        self.quads.read().map(|q| q.len()).unwrap_or(0)
    }

    /// Check whether the store holds no statements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl GraphStore for MemoryGraphStore {
    async fn insert(&self, context: &str, triples: Vec<Triple>) -> Result<()> {
        // Validate the whole batch before touching the table
        for t in &triples {
            if !t.p.is_iri() {
                return Err(StoreError::invalid_statement(format!(
                    "predicate must be an IRI: {}",
                    t.p
                )));
            }
        }

        let mut table = self
            .quads
            .write()
            .map_err(|_| StoreError::storage("quad table lock poisoned"))?;

        let count = triples.len();
        table.extend(triples.into_iter().map(|t| Quad::new(t, context)));

        tracing::debug!(context, statements = count, "committed batch");
        Ok(())
    }

    async fn select(&self, pattern: &QuadPattern) -> Result<Vec<Quad>> {
        let table = self
            .quads
            .read()
            .map_err(|_| StoreError::storage("quad table lock poisoned"))?;

        Ok(table.iter().filter(|q| pattern.matches(q)).cloned().collect())
    }

    async fn contexts(&self) -> Result<Vec<String>> {
        let table = self
            .quads
            .read()
            .map_err(|_| StoreError::storage("quad table lock poisoned"))?;

        let mut contexts: Vec<String> =
            table.iter().map(|q| q.context.to_string()).collect();
        contexts.sort();
        contexts.dedup();
        Ok(contexts)
    }
}
