//! Domain entities.
//!
//! Entities mirror the RDF resources they are stored as. A vocabulary's
//! canonical context in the store is its own IRI; terms live inside their
//! vocabulary's context.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Provenance metadata stamped onto entities at the write boundary.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Provenance {
    /// IRI of the author account
    pub author: Option<String>,
    /// Creation instant
    pub created: Option<DateTime<Utc>>,
}

/// A user account, as far as this layer needs to know one.
#[derive(Clone, Debug, Serialize)]
pub struct UserAccount {
    /// Account IRI
    pub iri: String,
    /// Display name
    pub full_name: String,
}

/// A managed vocabulary.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Vocabulary {
    /// Vocabulary IRI (also its canonical storage context)
    pub iri: String,
    /// Label in the configured language
    pub label: Option<String>,
    /// IRI of the glossary (concept scheme) holding the vocabulary's terms
    pub glossary_iri: Option<String>,
    /// Provenance metadata
    pub provenance: Provenance,
}

impl Vocabulary {
    /// Create a vocabulary shell with just an IRI
    pub fn new(iri: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            ..Default::default()
        }
    }

    /// The canonical storage context holding this vocabulary's data.
    pub fn context(&self) -> &str {
        &self.iri
    }
}

/// A single term (SKOS concept) of a vocabulary's glossary.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TermRecord {
    /// Term IRI
    pub iri: String,
    /// Preferred label in the configured language
    pub label: Option<String>,
    /// Definition in the configured language
    pub definition: Option<String>,
    /// IRI of the owning vocabulary
    pub vocabulary_iri: String,
    /// IRIs of broader terms
    pub broader: Vec<String>,
    /// Provenance metadata
    pub provenance: Provenance,
}

/// Any entity that can be the subject of change records, reduced to the
/// fields context resolution needs.
///
/// Modelled as a tagged union so resolution is an exhaustive match: a
/// variant cannot exist without the IRI its rule requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Asset {
    /// A vocabulary; change context derives from its own IRI
    Vocabulary {
        /// Vocabulary IRI
        iri: String,
    },
    /// A term; change context derives from the *owning vocabulary's* IRI
    Term {
        /// Term IRI
        iri: String,
        /// IRI of the owning vocabulary
        vocabulary_iri: String,
    },
    /// Any other asset; change context derives from its own IRI
    Resource {
        /// Asset IRI
        iri: String,
    },
}

impl Asset {
    /// The asset's own IRI
    pub fn iri(&self) -> &str {
        match self {
            Asset::Vocabulary { iri } | Asset::Term { iri, .. } | Asset::Resource { iri } => iri,
        }
    }
}

impl From<&Vocabulary> for Asset {
    fn from(v: &Vocabulary) -> Self {
        Asset::Vocabulary { iri: v.iri.clone() }
    }
}

impl From<&TermRecord> for Asset {
    fn from(t: &TermRecord) -> Self {
        Asset::Term {
            iri: t.iri.clone(),
            vocabulary_iri: t.vocabulary_iri.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_context_is_its_iri() {
        let v = Vocabulary::new("https://example.org/vocab/finance");
        assert_eq!(v.context(), "https://example.org/vocab/finance");
    }

    #[test]
    fn asset_conversions_carry_the_owning_vocabulary() {
        let term = TermRecord {
            iri: "https://example.org/term/budget".to_string(),
            vocabulary_iri: "https://example.org/vocab/finance".to_string(),
            ..Default::default()
        };
        let asset = Asset::from(&term);
        assert!(matches!(
            asset,
            Asset::Term { ref vocabulary_iri, .. }
                if vocabulary_iri == "https://example.org/vocab/finance"
        ));
    }
}
