//! Runtime configuration.
//!
//! All values are read once at construction of the services that need them;
//! the struct is deserializable so a host application can load it from its
//! own config file or environment layer.

use serde::Deserialize;

/// Default change-tracking context suffix.
pub const DEFAULT_CHANGE_CONTEXT_SUFFIX: &str = "/changes";

/// Default working-copy context suffix for freshly imported vocabularies.
pub const DEFAULT_WORKING_CONTEXT_SUFFIX: &str = "/working-version";

/// Default content language for label filtering.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Application configuration consumed by the domain layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Suffix appended to an asset's base IRI to form its change-tracking
    /// context. Part of the persisted-state contract; external tooling
    /// depends on the naming convention.
    pub change_context_suffix: String,

    /// Suffix appended to a vocabulary IRI to form the working-copy context
    /// that imports write into.
    pub working_context_suffix: String,

    /// Language tag used when reconstructing labels from imported data.
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            change_context_suffix: DEFAULT_CHANGE_CONTEXT_SUFFIX.to_string(),
            working_context_suffix: DEFAULT_WORKING_CONTEXT_SUFFIX.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_wired() {
        let config = Config::default();
        assert_eq!(config.change_context_suffix, "/changes");
        assert_eq!(config.working_context_suffix, "/working-version");
        assert_eq!(config.language, "en");
    }
}
