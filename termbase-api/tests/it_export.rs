//! Integration tests for glossary export: CSV shape, Excel workbook,
//! Turtle reconstruction, and façade dispatch.

mod support;

use std::sync::Arc;

use termbase_api::{Config, ExportKind, SkosExporter, Vocabulary, VocabularyExporters};
use termbase_graph_ir::{Term, Triple};
use termbase_store::{GraphStore, MemoryGraphStore};
use termbase_vocab::{dcterms, owl, rdf, skos, tb};

const VOCAB_IRI: &str = "https://example.org/vocab/finance";
const GLOSSARY_IRI: &str = "https://example.org/vocab/finance/glossary";

/// Seed the canonical context of a vocabulary with a glossary and terms.
async fn seeded_vocabulary(store: &Arc<MemoryGraphStore>) -> Vocabulary {
    let term = |local: &str| format!("https://example.org/term/{local}");
    let mut triples = vec![
        Triple::new(
            Term::iri(VOCAB_IRI),
            Term::iri(rdf::TYPE),
            Term::iri(owl::ONTOLOGY),
        ),
        Triple::new(
            Term::iri(VOCAB_IRI),
            Term::iri(dcterms::TITLE),
            Term::lang_string("Finance vocabulary", "en"),
        ),
        Triple::new(
            Term::iri(VOCAB_IRI),
            Term::iri(tb::HAS_GLOSSARY),
            Term::iri(GLOSSARY_IRI),
        ),
        Triple::new(
            Term::iri(GLOSSARY_IRI),
            Term::iri(rdf::TYPE),
            Term::iri(skos::CONCEPT_SCHEME),
        ),
    ];

    for (local, label) in [("budget", "budget"), ("deficit", "deficit"), ("audit", "audit")] {
        triples.push(Triple::new(
            Term::iri(term(local)),
            Term::iri(rdf::TYPE),
            Term::iri(skos::CONCEPT),
        ));
        triples.push(Triple::new(
            Term::iri(term(local)),
            Term::iri(skos::PREF_LABEL),
            Term::lang_string(label, "en"),
        ));
        triples.push(Triple::new(
            Term::iri(term(local)),
            Term::iri(skos::IN_SCHEME),
            Term::iri(GLOSSARY_IRI),
        ));
    }

    store.insert(VOCAB_IRI, triples).await.unwrap();

    Vocabulary {
        iri: VOCAB_IRI.to_string(),
        label: Some("Finance vocabulary".to_string()),
        glossary_iri: Some(GLOSSARY_IRI.to_string()),
        provenance: Default::default(),
    }
}

// ============================================================================
// CSV
// ============================================================================

#[tokio::test]
async fn csv_export_has_header_and_label_sorted_rows() {
    let store = Arc::new(MemoryGraphStore::new());
    let vocabulary = seeded_vocabulary(&store).await;
    let exporters = VocabularyExporters::new(Arc::clone(&store), &Config::default());

    let resource = exporters
        .export_vocabulary_glossary_to_csv(&vocabulary)
        .await
        .unwrap();
    assert_eq!(resource.media_type, "text/csv");
    assert_eq!(resource.file_extension, "csv");

    let text = String::from_utf8(resource.bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // N terms -> N + 1 lines, line 0 is the fixed header
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "IRI,prefLabel,definition,broader,vocabulary");

    // Label-sorted ascending: audit < budget < deficit
    assert!(lines[1].starts_with("https://example.org/term/audit,"));
    assert!(lines[2].starts_with("https://example.org/term/budget,"));
    assert!(lines[3].starts_with("https://example.org/term/deficit,"));

    // Each data line's leading field is exactly one exported term URI
    for line in &lines[1..] {
        let uri = line.split(',').next().unwrap();
        assert!(uri.starts_with("https://example.org/term/"));
    }
}

#[tokio::test]
async fn csv_export_of_empty_vocabulary_is_header_only() {
    let store = Arc::new(MemoryGraphStore::new());
    let vocabulary = Vocabulary::new("https://example.org/vocab/empty");
    let exporters = VocabularyExporters::new(Arc::clone(&store), &Config::default());

    let resource = exporters
        .export_vocabulary_glossary_to_csv(&vocabulary)
        .await
        .unwrap();
    let text = String::from_utf8(resource.bytes).unwrap();
    assert_eq!(text.lines().count(), 1);
}

// ============================================================================
// Excel
// ============================================================================

#[tokio::test]
async fn excel_export_is_a_zip_container_with_xlsx_tagging() {
    let store = Arc::new(MemoryGraphStore::new());
    let vocabulary = seeded_vocabulary(&store).await;
    let exporters = VocabularyExporters::new(Arc::clone(&store), &Config::default());

    let resource = exporters
        .export_vocabulary_glossary_to_excel(&vocabulary)
        .await
        .unwrap();

    assert_eq!(resource.file_extension, "xlsx");
    assert!(resource.media_type.contains("spreadsheetml"));
    // XLSX is a zip archive: PK magic
    assert_eq!(&resource.bytes[..2], b"PK");
}

// ============================================================================
// Turtle / SKOS
// ============================================================================

#[tokio::test]
async fn skos_exporter_accumulates_instance_and_terms() {
    let store = Arc::new(MemoryGraphStore::new());
    let vocabulary = seeded_vocabulary(&store).await;

    let mut exporter = SkosExporter::new(Arc::clone(&store));
    exporter.export_glossary_instance(&vocabulary).await.unwrap();
    let after_instance = exporter.len();
    assert!(after_instance > 0);

    exporter.export_glossary_terms(&vocabulary).await.unwrap();
    assert!(exporter.len() > after_instance);

    let ttl = String::from_utf8(exporter.export_as_ttl()).unwrap();
    assert!(ttl.contains("skos:ConceptScheme"));
    assert!(ttl.contains("skos:prefLabel \"budget\"@en"));
    assert!(ttl.contains("tb:hasGlossary"));
}

#[tokio::test]
async fn repeated_accumulation_does_not_duplicate() {
    let store = Arc::new(MemoryGraphStore::new());
    let vocabulary = seeded_vocabulary(&store).await;

    let mut exporter = SkosExporter::new(Arc::clone(&store));
    exporter.export_glossary_instance(&vocabulary).await.unwrap();
    let once = exporter.len();
    exporter.export_glossary_instance(&vocabulary).await.unwrap();
    assert_eq!(exporter.len(), once);
}

#[tokio::test]
async fn empty_model_serializes_to_an_empty_document() {
    let store = Arc::new(MemoryGraphStore::new());
    let exporter: SkosExporter<MemoryGraphStore> = SkosExporter::new(store);
    assert!(exporter.is_empty());
    assert!(exporter.export_as_ttl().is_empty());
}

#[tokio::test]
async fn exported_turtle_reimports_cleanly() {
    let store = Arc::new(MemoryGraphStore::new());
    let vocabulary = seeded_vocabulary(&store).await;
    let exporters = VocabularyExporters::new(Arc::clone(&store), &Config::default());

    let resource = exporters
        .export_for_kind(&vocabulary, ExportKind::Skos)
        .await
        .unwrap();

    // Round-trip through the importer
    let fresh: Arc<MemoryGraphStore> = Arc::new(MemoryGraphStore::new());
    let imported = termbase_api::SkosImporter::new(Arc::clone(&fresh), &Config::default())
        .import_vocabulary("text/turtle", vec![support::stream(
            std::str::from_utf8(&resource.bytes).unwrap(),
        )])
        .await
        .unwrap();
    assert_eq!(imported.iri, VOCAB_IRI);
    assert_eq!(imported.label.as_deref(), Some("Finance vocabulary"));
}

// ============================================================================
// Façade dispatch
// ============================================================================

#[tokio::test]
async fn facade_selects_by_media_type() {
    let store = Arc::new(MemoryGraphStore::new());
    let vocabulary = seeded_vocabulary(&store).await;
    let exporters = VocabularyExporters::new(Arc::clone(&store), &Config::default());

    let ttl = exporters
        .export_vocabulary_glossary(&vocabulary, "text/turtle")
        .await
        .unwrap();
    assert_eq!(ttl.file_extension, "ttl");

    let csv = exporters
        .export_vocabulary_glossary(&vocabulary, "text/csv")
        .await
        .unwrap();
    assert_eq!(csv.file_extension, "csv");
}

#[tokio::test]
async fn facade_rejects_unknown_media_types() {
    let store = Arc::new(MemoryGraphStore::new());
    let vocabulary = seeded_vocabulary(&store).await;
    let exporters = VocabularyExporters::new(Arc::clone(&store), &Config::default());

    let err = exporters
        .export_vocabulary_glossary(&vocabulary, "application/pdf")
        .await
        .unwrap_err();
    assert!(matches!(err, termbase_api::ApiError::UnsupportedMediaType(_)));
}
