//! Vocabulary glossary export.
//!
//! Format-specific exporters behind one trait, selected by requested media
//! type through the [`VocabularyExporters`] façade. CSV and Excel flatten
//! the glossary into rows; Turtle and SKOS reconstruct the subgraph through
//! the accumulating [`SkosExporter`].

mod csv;
mod excel;
mod skos;

pub use csv::{CsvVocabularyExporter, CSV_HEADER, CSV_MEDIA_TYPE};
pub use excel::{ExcelVocabularyExporter, EXCEL_COLUMNS, EXCEL_MEDIA_TYPE};
pub use skos::SkosExporter;

use std::sync::Arc;

use async_trait::async_trait;
use termbase_graph_format::RdfFormat;
use termbase_store::GraphStore;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::model::Vocabulary;

/// A finished export: bytes tagged with media type and file extension.
#[derive(Clone, Debug)]
pub struct ExportResource {
    /// Serialized content
    pub bytes: Vec<u8>,
    /// MIME type of the content
    pub media_type: String,
    /// Customary file extension (without the dot)
    pub file_extension: String,
}

/// A format-specific glossary exporter.
#[async_trait]
pub trait VocabularyExporter: std::fmt::Debug + Send + Sync {
    /// Whether this exporter produces the given media type.
    fn supports(&self, media_type: &str) -> bool;

    /// Export the vocabulary's glossary.
    async fn export_glossary(&self, vocabulary: &Vocabulary) -> Result<ExportResource>;
}

/// Requested export kind, for callers that select by name rather than by
/// media type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    /// Comma-separated rows
    Csv,
    /// Single-sheet workbook
    Excel,
    /// Turtle serialization of the glossary subgraph
    Turtle,
    /// SKOS export (same serialization as Turtle)
    Skos,
}

impl ExportKind {
    /// The media type this kind dispatches on.
    pub fn media_type(self) -> &'static str {
        match self {
            ExportKind::Csv => CSV_MEDIA_TYPE,
            ExportKind::Excel => EXCEL_MEDIA_TYPE,
            ExportKind::Turtle | ExportKind::Skos => RdfFormat::Turtle.media_type(),
        }
    }
}

/// Turtle/SKOS exporter: reconstructs the glossary + terms subgraph via a
/// fresh [`SkosExporter`] per call and serializes it as Turtle.
#[derive(Debug)]
pub struct TurtleVocabularyExporter<S> {
    store: Arc<S>,
}

impl<S: GraphStore> TurtleVocabularyExporter<S> {
    /// Create a Turtle exporter
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: GraphStore> VocabularyExporter for TurtleVocabularyExporter<S> {
    fn supports(&self, media_type: &str) -> bool {
        RdfFormat::from_media_type(media_type) == Some(RdfFormat::Turtle)
    }

    async fn export_glossary(&self, vocabulary: &Vocabulary) -> Result<ExportResource> {
        // Fresh accumulator per export; the instance is discarded afterwards
        let mut exporter = SkosExporter::new(Arc::clone(&self.store));
        exporter.export_glossary_instance(vocabulary).await?;
        exporter.export_glossary_terms(vocabulary).await?;

        Ok(ExportResource {
            bytes: exporter.export_as_ttl(),
            media_type: RdfFormat::Turtle.media_type().to_string(),
            file_extension: RdfFormat::Turtle.file_extension().to_string(),
        })
    }
}

/// Façade selecting among the format-specific exporters.
#[derive(Debug)]
pub struct VocabularyExporters {
    exporters: Vec<Box<dyn VocabularyExporter>>,
}

impl VocabularyExporters {
    /// Wire up the standard exporter set over a store.
    pub fn new<S: GraphStore + 'static>(store: Arc<S>, config: &Config) -> Self {
        Self {
            exporters: vec![
                Box::new(CsvVocabularyExporter::new(
                    Arc::clone(&store),
                    config.language.clone(),
                )),
                Box::new(ExcelVocabularyExporter::new(
                    Arc::clone(&store),
                    config.language.clone(),
                )),
                Box::new(TurtleVocabularyExporter::new(store)),
            ],
        }
    }

    /// Export a vocabulary's glossary in the format matching `media_type`.
    pub async fn export_vocabulary_glossary(
        &self,
        vocabulary: &Vocabulary,
        media_type: &str,
    ) -> Result<ExportResource> {
        let exporter = self
            .exporters
            .iter()
            .find(|e| e.supports(media_type))
            .ok_or_else(|| ApiError::unsupported_media_type(media_type))?;
        exporter.export_glossary(vocabulary).await
    }

    /// Export by named kind instead of media type.
    pub async fn export_for_kind(
        &self,
        vocabulary: &Vocabulary,
        kind: ExportKind,
    ) -> Result<ExportResource> {
        self.export_vocabulary_glossary(vocabulary, kind.media_type())
            .await
    }

    /// Convenience: CSV export.
    pub async fn export_vocabulary_glossary_to_csv(
        &self,
        vocabulary: &Vocabulary,
    ) -> Result<ExportResource> {
        self.export_for_kind(vocabulary, ExportKind::Csv).await
    }

    /// Convenience: Excel export.
    pub async fn export_vocabulary_glossary_to_excel(
        &self,
        vocabulary: &Vocabulary,
    ) -> Result<ExportResource> {
        self.export_for_kind(vocabulary, ExportKind::Excel).await
    }
}
