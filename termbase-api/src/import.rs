//! SKOS vocabulary import.
//!
//! Parse one or more RDF payload streams into a single in-memory model,
//! resolve the vocabulary IRI they describe, and commit every statement
//! atomically into a freshly derived working-copy context.
//!
//! An importer is single-use: `import_vocabulary` consumes it, so the
//! IDLE → PARSED → IRI_RESOLVED → COMMITTED progression can only run once
//! per instance. Build a new importer per request.

use std::io::Read;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use termbase_graph_format::RdfFormat;
use termbase_graph_ir::{Graph, GraphCollectorSink, Term};
use termbase_store::GraphStore;
use termbase_vocab::{dcterms, owl, rdf, rdfs, skos, tb};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::model::Vocabulary;

/// Predicates accepted as a vocabulary label, in preference order.
const LABEL_PREDICATES: &[&str] = &[dcterms::TITLE, rdfs::LABEL, skos::PREF_LABEL];

/// Guess the RDF media type of a file from its extension.
///
/// Returns the canonical MIME type, or an unsupported-media-type error when
/// no format is registered for the extension.
pub fn guess_media_type(filename: &str) -> Result<&'static str> {
    RdfFormat::from_filename(filename)
        .map(RdfFormat::media_type)
        .ok_or_else(|| ApiError::unsupported_media_type(filename))
}

/// One-shot importer of a SKOS vocabulary payload.
pub struct SkosImporter<S> {
    store: Arc<S>,
    working_context_suffix: String,
    language: String,
    discriminator: Option<String>,
}

impl<S: GraphStore> SkosImporter<S> {
    /// Create an importer. One instance serves exactly one import.
    pub fn new(store: Arc<S>, config: &Config) -> Self {
        Self {
            store,
            working_context_suffix: config.working_context_suffix.clone(),
            language: config.language.clone(),
            discriminator: None,
        }
    }

    /// Set a context discriminator before importing.
    ///
    /// Its hash is appended to the target context IRI so repeated imports of
    /// structurally identical data land in distinct contexts.
    pub fn with_discriminator(mut self, discriminator: impl Into<String>) -> Self {
        self.discriminator = Some(discriminator.into());
        self
    }

    /// Import a vocabulary from one or more payload streams.
    ///
    /// All streams must share the declared media type and are merged into one
    /// model before IRI resolution, so the vocabulary resource and its
    /// glossary/terms may arrive in separate streams. The whole operation is
    /// atomic: any read, parse, resolution or commit failure leaves the store
    /// untouched.
    pub async fn import_vocabulary(
        self,
        media_type: &str,
        mut inputs: Vec<Box<dyn Read + Send>>,
    ) -> Result<Vocabulary> {
        if inputs.is_empty() {
            return Err(ApiError::validation("no input provided"));
        }

        let format = RdfFormat::from_media_type(media_type)
            .ok_or_else(|| ApiError::unsupported_media_type(media_type))?;

        // Parse every stream into one shared model
        let model = {
            let _span = tracing::debug_span!(
                "import_parse",
                media_type,
                streams = inputs.len(),
            )
            .entered();

            let mut sink = GraphCollectorSink::new();
            for input in &mut inputs {
                let mut text = String::new();
                input.read_to_string(&mut text)?;
                match format {
                    // N-Triples is a syntactic subset of Turtle
                    RdfFormat::Turtle | RdfFormat::NTriples => {
                        termbase_graph_turtle::parse(&text, &mut sink)?
                    }
                }
            }
            sink.finish()
        };

        let vocabulary_iri = resolve_vocabulary_iri(&model)?;
        let context = self.target_context(&vocabulary_iri);

        // Commit the merged model in one transaction
        let statements = model.len();
        self.store
            .insert(&context, model.triples().to_vec())
            .await?;

        tracing::info!(
            vocabulary = %vocabulary_iri,
            context = %context,
            statements,
            "vocabulary imported"
        );

        Ok(self.summarize(&model, vocabulary_iri))
    }

    /// Compute the working-copy context for the resolved vocabulary IRI.
    fn target_context(&self, vocabulary_iri: &str) -> String {
        let mut context = format!("{vocabulary_iri}{}", self.working_context_suffix);
        if let Some(discriminator) = &self.discriminator {
            context.push('#');
            context.push_str(&hash_discriminator(discriminator));
        }
        context
    }

    /// Build the summary entity for the imported vocabulary.
    fn summarize(&self, model: &Graph, vocabulary_iri: String) -> Vocabulary {
        let subject = Term::iri(&vocabulary_iri);

        let label = LABEL_PREDICATES.iter().find_map(|predicate| {
            model
                .objects_of(&subject, &Term::iri(*predicate))
                .into_iter()
                .find_map(|o| literal_in_language(o, &self.language))
        });

        let glossary_iri = model
            .objects_of(&subject, &Term::iri(tb::HAS_GLOSSARY))
            .into_iter()
            .find_map(|o| o.as_iri().map(str::to_string));

        Vocabulary {
            iri: vocabulary_iri,
            label,
            glossary_iri,
            provenance: Default::default(),
        }
    }
}

impl<S> std::fmt::Debug for SkosImporter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkosImporter")
            .field("working_context_suffix", &self.working_context_suffix)
            .field("language", &self.language)
            .field("discriminator", &self.discriminator)
            .finish()
    }
}

/// Find the single vocabulary IRI a merged payload describes.
///
/// First pass: exactly one subject typed `owl:Ontology`. Second pass:
/// exactly one subject typed as the domain vocabulary type. Zero or several
/// candidates in both passes means the payload cannot name its own storage
/// context, and the importer refuses to guess.
fn resolve_vocabulary_iri(model: &Graph) -> Result<String> {
    let rdf_type = Term::iri(rdf::TYPE);

    for type_iri in [owl::ONTOLOGY, tb::VOCABULARY] {
        let subjects: Vec<&str> = model
            .subjects_with(&rdf_type, &Term::iri(type_iri))
            .into_iter()
            .filter_map(Term::as_iri)
            .collect();
        if subjects.len() == 1 {
            return Ok(subjects[0].to_string());
        }
    }

    Err(ApiError::validation(
        "storage context cannot be determined: the payload must contain \
         exactly one ontology or vocabulary resource",
    ))
}

/// Accept a literal when its language tag equals the configured language, or
/// when it carries no tag at all (an untagged literal matches the configured
/// language).
fn literal_in_language(term: &Term, language: &str) -> Option<String> {
    let (value, _, tag) = term.as_literal()?;
    match tag {
        Some(tag) if !tag.eq_ignore_ascii_case(language) => None,
        _ => value.as_str().map(str::to_string),
    }
}

/// Hex digest of the discriminator, truncated to a fragment-sized token.
fn hash_discriminator(discriminator: &str) -> String {
    let digest = Sha256::digest(discriminator.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    hex[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use termbase_graph_ir::Graph;

    fn typed(model: &mut Graph, subject: &str, type_iri: &str) {
        model.add_triple(Term::iri(subject), Term::iri(rdf::TYPE), Term::iri(type_iri));
    }

    #[test]
    fn single_ontology_subject_wins() {
        let mut model = Graph::new();
        typed(&mut model, "https://example.org/vocab/a", owl::ONTOLOGY);
        assert_eq!(
            resolve_vocabulary_iri(&model).unwrap(),
            "https://example.org/vocab/a"
        );
    }

    #[test]
    fn vocabulary_type_is_the_fallback() {
        let mut model = Graph::new();
        typed(&mut model, "https://example.org/vocab/b", tb::VOCABULARY);
        assert_eq!(
            resolve_vocabulary_iri(&model).unwrap(),
            "https://example.org/vocab/b"
        );
    }

    #[test]
    fn two_ontologies_are_ambiguous() {
        let mut model = Graph::new();
        typed(&mut model, "https://example.org/vocab/a", owl::ONTOLOGY);
        typed(&mut model, "https://example.org/vocab/b", owl::ONTOLOGY);
        let err = resolve_vocabulary_iri(&model).unwrap_err();
        assert!(err
            .to_string()
            .contains("storage context cannot be determined"));
    }

    #[test]
    fn ontology_pass_wins_over_a_different_vocabulary_subject() {
        // Pinned behavior: the vocabulary-typed set is not cross-checked
        // when the ontology pass yields exactly one subject.
        let mut model = Graph::new();
        typed(&mut model, "https://example.org/vocab/a", owl::ONTOLOGY);
        typed(&mut model, "https://example.org/vocab/b", tb::VOCABULARY);
        assert_eq!(
            resolve_vocabulary_iri(&model).unwrap(),
            "https://example.org/vocab/a"
        );
    }

    #[test]
    fn empty_model_is_ambiguous() {
        assert!(resolve_vocabulary_iri(&Graph::new()).is_err());
    }

    #[test]
    fn untagged_literal_matches_configured_language() {
        assert_eq!(
            literal_in_language(&Term::string("Finance"), "en"),
            Some("Finance".to_string())
        );
        assert_eq!(
            literal_in_language(&Term::lang_string("Finance", "en"), "en"),
            Some("Finance".to_string())
        );
        assert_eq!(literal_in_language(&Term::lang_string("Finanz", "de"), "en"), None);
        assert_eq!(literal_in_language(&Term::iri("https://example.org"), "en"), None);
    }

    #[test]
    fn discriminator_hash_is_stable_and_short() {
        let a = hash_discriminator("upload-1");
        let b = hash_discriminator("upload-1");
        let c = hash_discriminator("upload-2");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn guess_media_type_consults_the_registry() {
        assert_eq!(guess_media_type("vocab.ttl").unwrap(), "text/turtle");
        assert_eq!(guess_media_type("dump.nt").unwrap(), "application/n-triples");
        assert!(matches!(
            guess_media_type("file.unknownext"),
            Err(ApiError::UnsupportedMediaType(_))
        ));
    }
}
