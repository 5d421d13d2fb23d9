//! Read-side reconstruction of domain records from stored statements.

use std::sync::Arc;

use termbase_graph_ir::Term;
use termbase_store::{GraphStore, QuadPattern};
use termbase_vocab::{rdf, skos};

use crate::error::Result;
use crate::model::{TermRecord, Vocabulary};

/// Load all terms of a vocabulary's glossary from its canonical context.
///
/// Terms are every subject typed `skos:Concept` in the vocabulary's context;
/// label and definition are filtered to the given language (untagged
/// literals match any language).
pub async fn load_glossary_terms<S: GraphStore>(
    store: &Arc<S>,
    vocabulary: &Vocabulary,
    language: &str,
) -> Result<Vec<TermRecord>> {
    let context = vocabulary.context();

    let concept_quads = store
        .select(
            &QuadPattern::any()
                .with_predicate(Term::iri(rdf::TYPE))
                .with_object(Term::iri(skos::CONCEPT))
                .in_context(context),
        )
        .await?;

    let mut terms = Vec::with_capacity(concept_quads.len());
    for quad in &concept_quads {
        let Some(iri) = quad.triple.s.as_iri() else {
            continue;
        };

        let label = first_literal(store, context, &quad.triple.s, skos::PREF_LABEL, language).await?;
        let definition =
            first_literal(store, context, &quad.triple.s, skos::DEFINITION, language).await?;

        let broader_quads = store
            .select(
                &QuadPattern::any()
                    .with_subject(quad.triple.s.clone())
                    .with_predicate(Term::iri(skos::BROADER))
                    .in_context(context),
            )
            .await?;
        let mut broader: Vec<String> = broader_quads
            .iter()
            .filter_map(|q| q.triple.o.as_iri().map(str::to_string))
            .collect();
        broader.sort();

        terms.push(TermRecord {
            iri: iri.to_string(),
            label,
            definition,
            vocabulary_iri: vocabulary.iri.clone(),
            broader,
            provenance: Default::default(),
        });
    }

    Ok(terms)
}

/// First literal value of `subject -> predicate` acceptable in `language`.
async fn first_literal<S: GraphStore>(
    store: &Arc<S>,
    context: &str,
    subject: &Term,
    predicate: &str,
    language: &str,
) -> Result<Option<String>> {
    let quads = store
        .select(
            &QuadPattern::any()
                .with_subject(subject.clone())
                .with_predicate(Term::iri(predicate))
                .in_context(context),
        )
        .await?;

    Ok(quads.iter().find_map(|q| {
        let (value, _, tag) = q.triple.o.as_literal()?;
        match tag {
            Some(tag) if !tag.eq_ignore_ascii_case(language) => None,
            _ => value.as_str().map(str::to_string),
        }
    }))
}
