//! Terminology-management domain layer.
//!
//! This crate ties the termbase stack together: vocabularies and terms as
//! domain entities, SKOS import into working-copy contexts, glossary export
//! in several formats, change-tracking context resolution, and label search.
//!
//! # Architecture
//!
//! - [`SkosImporter`]: one-shot import of an RDF payload into a derived
//!   working-copy context (atomic commit, discriminator support)
//! - [`SkosExporter`] / [`VocabularyExporters`]: glossary reconstruction and
//!   format-dispatched export (CSV, Excel, Turtle/SKOS)
//! - [`resolve_change_context`]: maps a changed asset to the context holding
//!   its change records
//! - [`SearchService`]: full-text label search DTO mapping
//! - [`apply_provenance`] / [`strip_provenance_if_anonymous`]: explicit
//!   read/write-boundary provenance steps
//!
//! Importers and exporters are per-operation objects: construct, use once,
//! discard. The store and configuration they close over are the only
//! long-lived pieces.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use termbase_api::{Config, SkosImporter};
//! use termbase_store::MemoryGraphStore;
//!
//! let store = Arc::new(MemoryGraphStore::new());
//! let config = Config::default();
//!
//! let importer = SkosImporter::new(Arc::clone(&store), &config);
//! let vocabulary = importer
//!     .import_vocabulary("text/turtle", vec![Box::new(payload)])
//!     .await?;
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub mod provenance;
pub mod repository;
pub mod search;

pub use config::Config;
pub use context::{change_record_for, resolve_change_context, ChangeRecord};
pub use error::{ApiError, Result};
pub use export::{
    ExportKind, ExportResource, SkosExporter, VocabularyExporter, VocabularyExporters,
};
pub use import::{guess_media_type, SkosImporter};
pub use model::{Asset, Provenance, TermRecord, UserAccount, Vocabulary};
pub use provenance::{apply_provenance, strip_provenance_if_anonymous, HasProvenance};
pub use repository::load_glossary_terms;
pub use search::{SearchResult, SearchService};
