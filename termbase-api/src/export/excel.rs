//! Excel glossary export.
//!
//! Single-sheet workbook: fixed header row, one data row per term,
//! label-sorted. Cell-level styling is deliberately minimal.

use std::sync::Arc;

use async_trait::async_trait;
use rust_xlsxwriter::Workbook;
use termbase_store::GraphStore;

use crate::error::{ApiError, Result};
use crate::export::{ExportResource, VocabularyExporter};
use crate::model::Vocabulary;
use crate::repository::load_glossary_terms;

/// Fixed column names of the glossary sheet.
pub const EXCEL_COLUMNS: &[&str] = &["IRI", "prefLabel", "definition", "broader", "vocabulary"];

/// MIME type of the Excel export.
pub const EXCEL_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Excel exporter over a vocabulary's glossary.
#[derive(Debug)]
pub struct ExcelVocabularyExporter<S> {
    store: Arc<S>,
    language: String,
}

impl<S: GraphStore> ExcelVocabularyExporter<S> {
    /// Create an Excel exporter
    pub fn new(store: Arc<S>, language: impl Into<String>) -> Self {
        Self {
            store,
            language: language.into(),
        }
    }
}

#[async_trait]
impl<S: GraphStore> VocabularyExporter for ExcelVocabularyExporter<S> {
    fn supports(&self, media_type: &str) -> bool {
        media_type
            .split(';')
            .next()
            .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(EXCEL_MEDIA_TYPE))
    }

    async fn export_glossary(&self, vocabulary: &Vocabulary) -> Result<ExportResource> {
        let mut terms = load_glossary_terms(&self.store, vocabulary, &self.language).await?;
        terms.sort_by(|a, b| {
            (a.label.as_deref(), a.iri.as_str()).cmp(&(b.label.as_deref(), b.iri.as_str()))
        });

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet
            .set_name("Glossary")
            .map_err(|e| ApiError::Export(e.to_string()))?;

        for (col, name) in EXCEL_COLUMNS.iter().enumerate() {
            sheet
                .write_string(0, col as u16, *name)
                .map_err(|e| ApiError::Export(e.to_string()))?;
        }

        for (row, term) in terms.iter().enumerate() {
            let cells = [
                term.iri.as_str(),
                term.label.as_deref().unwrap_or(""),
                term.definition.as_deref().unwrap_or(""),
                &term.broader.join(";"),
                term.vocabulary_iri.as_str(),
            ];
            for (col, value) in cells.iter().enumerate() {
                sheet
                    .write_string((row + 1) as u32, col as u16, *value)
                    .map_err(|e| ApiError::Export(e.to_string()))?;
            }
        }

        let bytes = workbook
            .save_to_buffer()
            .map_err(|e| ApiError::Export(e.to_string()))?;

        Ok(ExportResource {
            bytes,
            media_type: EXCEL_MEDIA_TYPE.to_string(),
            file_extension: "xlsx".to_string(),
        })
    }
}
