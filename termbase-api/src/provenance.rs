//! Provenance pipeline.
//!
//! Provenance is applied and stripped by explicit pipeline steps called by
//! the repository/service layer at its read and write boundaries, not by
//! persistence-framework callbacks.

use crate::model::{Provenance, TermRecord, UserAccount, Vocabulary};
use chrono::Utc;

/// Entities carrying provenance metadata.
pub trait HasProvenance {
    /// Mutable access to the entity's provenance
    fn provenance_mut(&mut self) -> &mut Provenance;
}

impl HasProvenance for Vocabulary {
    fn provenance_mut(&mut self) -> &mut Provenance {
        &mut self.provenance
    }
}

impl HasProvenance for TermRecord {
    fn provenance_mut(&mut self) -> &mut Provenance {
        &mut self.provenance
    }
}

/// Stamp author and creation instant onto an entity.
///
/// Called at the write boundary, immediately before persisting. The creation
/// instant is only set on first save; the author always reflects the current
/// editor.
pub fn apply_provenance<E: HasProvenance>(entity: &mut E, current_user: &UserAccount) {
    let provenance = entity.provenance_mut();
    provenance.author = Some(current_user.iri.clone());
    if provenance.created.is_none() {
        provenance.created = Some(Utc::now());
    }
}

/// Remove author information before handing an entity to an anonymous reader.
///
/// Called at the read boundary. Authenticated readers see provenance
/// untouched.
pub fn strip_provenance_if_anonymous<E: HasProvenance>(entity: &mut E, authenticated: bool) {
    if !authenticated {
        entity.provenance_mut().author = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> UserAccount {
        UserAccount {
            iri: "https://example.org/user/editor".to_string(),
            full_name: "Editor".to_string(),
        }
    }

    #[test]
    fn apply_sets_author_and_created_once() {
        let mut vocab = Vocabulary::new("https://example.org/vocab/finance");
        apply_provenance(&mut vocab, &editor());

        let first_created = vocab.provenance.created;
        assert!(first_created.is_some());
        assert_eq!(
            vocab.provenance.author.as_deref(),
            Some("https://example.org/user/editor")
        );

        // A second save by another user keeps the original creation instant
        let other = UserAccount {
            iri: "https://example.org/user/other".to_string(),
            full_name: "Other".to_string(),
        };
        apply_provenance(&mut vocab, &other);
        assert_eq!(vocab.provenance.created, first_created);
        assert_eq!(
            vocab.provenance.author.as_deref(),
            Some("https://example.org/user/other")
        );
    }

    #[test]
    fn strip_clears_author_for_anonymous_readers_only() {
        let mut term = TermRecord {
            iri: "https://example.org/term/budget".to_string(),
            vocabulary_iri: "https://example.org/vocab/finance".to_string(),
            ..Default::default()
        };
        apply_provenance(&mut term, &editor());

        strip_provenance_if_anonymous(&mut term, true);
        assert!(term.provenance.author.is_some());

        strip_provenance_if_anonymous(&mut term, false);
        assert!(term.provenance.author.is_none());
        // Creation instant stays; only authorship is withheld
        assert!(term.provenance.created.is_some());
    }
}
