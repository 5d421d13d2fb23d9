//! CSV glossary export.
//!
//! One row per term, label-sorted, RFC-4180-style quoting: a field
//! containing a comma, quote or newline is quoted and embedded quotes are
//! doubled.

use std::sync::Arc;

use async_trait::async_trait;
use termbase_store::GraphStore;

use crate::error::Result;
use crate::export::{ExportResource, VocabularyExporter};
use crate::model::Vocabulary;
use crate::repository::load_glossary_terms;

/// Fixed header row of the CSV export.
pub const CSV_HEADER: &str = "IRI,prefLabel,definition,broader,vocabulary";

/// MIME type of the CSV export.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// Escape a value for CSV output.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// CSV exporter over a vocabulary's glossary.
#[derive(Debug)]
pub struct CsvVocabularyExporter<S> {
    store: Arc<S>,
    language: String,
}

impl<S: GraphStore> CsvVocabularyExporter<S> {
    /// Create a CSV exporter
    pub fn new(store: Arc<S>, language: impl Into<String>) -> Self {
        Self {
            store,
            language: language.into(),
        }
    }
}

#[async_trait]
impl<S: GraphStore> VocabularyExporter for CsvVocabularyExporter<S> {
    fn supports(&self, media_type: &str) -> bool {
        media_type
            .split(';')
            .next()
            .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(CSV_MEDIA_TYPE))
    }

    async fn export_glossary(&self, vocabulary: &Vocabulary) -> Result<ExportResource> {
        let mut terms = load_glossary_terms(&self.store, vocabulary, &self.language).await?;
        terms.sort_by(|a, b| {
            (a.label.as_deref(), a.iri.as_str()).cmp(&(b.label.as_deref(), b.iri.as_str()))
        });

        let mut lines = Vec::with_capacity(terms.len() + 1);
        lines.push(CSV_HEADER.to_string());
        for term in &terms {
            let row = [
                csv_escape(&term.iri),
                csv_escape(term.label.as_deref().unwrap_or("")),
                csv_escape(term.definition.as_deref().unwrap_or("")),
                csv_escape(&term.broader.join(";")),
                csv_escape(&term.vocabulary_iri),
            ]
            .join(",");
            lines.push(row);
        }

        Ok(ExportResource {
            bytes: lines.join("\n").into_bytes(),
            media_type: CSV_MEDIA_TYPE.to_string(),
            file_extension: "csv".to_string(),
        })
    }
}
