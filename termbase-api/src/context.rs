//! Change-tracking context resolution.
//!
//! Every change record is stored in a named context derived from the changed
//! asset: `<base IRI><suffix>`, where the base IRI is chosen by asset kind.
//! The naming convention is part of the persisted-state contract; other
//! tooling reads these contexts directly.

use crate::config::Config;
use crate::model::{Asset, UserAccount};
use chrono::{DateTime, Utc};

/// Resolve the change-tracking context for an asset.
///
/// Rules, first match wins:
/// 1. a vocabulary uses its own IRI,
/// 2. a term uses its owning vocabulary's IRI (not its own),
/// 3. any other asset uses its own IRI.
///
/// Pure over its arguments; the suffix comes from [`Config`] and never
/// changes after construction.
///
/// # Panics
///
/// Panics if the asset carries an empty base IRI - that is a caller contract
/// violation, not a recoverable error.
pub fn resolve_change_context(asset: &Asset, suffix: &str) -> String {
    let base = match asset {
        Asset::Vocabulary { iri } => iri,
        Asset::Term { vocabulary_iri, .. } => vocabulary_iri,
        Asset::Resource { iri } => iri,
    };
    assert!(
        !base.is_empty(),
        "change context cannot be derived from an empty IRI"
    );
    format!("{base}{suffix}")
}

/// A change-tracking record, stamped with the context it belongs in.
#[derive(Clone, Debug)]
pub struct ChangeRecord {
    /// IRI of the changed asset
    pub asset_iri: String,
    /// Context the record is stored under
    pub context: String,
    /// IRI of the author account, if authenticated
    pub author: Option<String>,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Build a change record for an asset, resolving its storage context.
pub fn change_record_for(
    asset: &Asset,
    author: Option<&UserAccount>,
    config: &Config,
) -> ChangeRecord {
    ChangeRecord {
        asset_iri: asset.iri().to_string(),
        context: resolve_change_context(asset, &config.change_context_suffix),
        author: author.map(|u| u.iri.clone()),
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = "/changes";

    #[test]
    fn vocabulary_uses_own_iri() {
        let asset = Asset::Vocabulary {
            iri: "https://example.org/vocab/finance".to_string(),
        };
        assert_eq!(
            resolve_change_context(&asset, SUFFIX),
            "https://example.org/vocab/finance/changes"
        );
    }

    #[test]
    fn term_uses_owning_vocabulary_iri() {
        let asset = Asset::Term {
            iri: "https://example.org/term/budget".to_string(),
            vocabulary_iri: "https://example.org/vocab/finance".to_string(),
        };
        // Not the term's own IRI
        assert_eq!(
            resolve_change_context(&asset, SUFFIX),
            "https://example.org/vocab/finance/changes"
        );
    }

    #[test]
    fn other_asset_uses_own_iri() {
        let asset = Asset::Resource {
            iri: "https://example.org/document/report".to_string(),
        };
        assert_eq!(
            resolve_change_context(&asset, SUFFIX),
            "https://example.org/document/report/changes"
        );
    }

    #[test]
    #[should_panic(expected = "empty IRI")]
    fn empty_iri_is_a_contract_violation() {
        let asset = Asset::Resource { iri: String::new() };
        resolve_change_context(&asset, SUFFIX);
    }

    #[test]
    fn change_record_is_stamped_with_context() {
        let config = Config::default();
        let user = UserAccount {
            iri: "https://example.org/user/editor".to_string(),
            full_name: "Editor".to_string(),
        };
        let asset = Asset::Term {
            iri: "https://example.org/term/budget".to_string(),
            vocabulary_iri: "https://example.org/vocab/finance".to_string(),
        };

        let record = change_record_for(&asset, Some(&user), &config);
        assert_eq!(record.context, "https://example.org/vocab/finance/changes");
        assert_eq!(record.asset_iri, "https://example.org/term/budget");
        assert_eq!(record.author.as_deref(), Some("https://example.org/user/editor"));
    }
}
