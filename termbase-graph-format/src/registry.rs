//! Registry of accepted RDF serializations.
//!
//! A format is looked up either by declared MIME type (import requests carry
//! one) or by file extension (media-type sniffing for uploads). The registry
//! is the single source of truth: a media type or extension not listed here
//! is an unsupported format everywhere in the system.

/// An RDF serialization the system can parse and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfFormat {
    /// Terse RDF Triple Language (`text/turtle`, `.ttl`)
    Turtle,
    /// Line-based triples (`application/n-triples`, `.nt`)
    NTriples,
}

impl RdfFormat {
    /// All registered formats.
    pub const ALL: [RdfFormat; 2] = [RdfFormat::Turtle, RdfFormat::NTriples];

    /// The canonical MIME type of this format.
    pub fn media_type(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "text/turtle",
            RdfFormat::NTriples => "application/n-triples",
        }
    }

    /// The customary file extension (without the dot).
    pub fn file_extension(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "ttl",
            RdfFormat::NTriples => "nt",
        }
    }

    /// Look up a format by MIME type.
    ///
    /// Media-type parameters (`; charset=...`) are ignored and matching is
    /// case-insensitive, per RFC 2045.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or(media_type)
            .trim()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.media_type() == essence)
    }

    /// Look up a format by bare file extension (without the dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        let ext = extension.to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.file_extension() == ext)
    }

    /// Guess a format from a filename's extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        Self::from_extension(ext)
    }
}

impl std::fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.media_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_media_type() {
        assert_eq!(
            RdfFormat::from_media_type("text/turtle"),
            Some(RdfFormat::Turtle)
        );
        assert_eq!(
            RdfFormat::from_media_type("application/n-triples"),
            Some(RdfFormat::NTriples)
        );
        assert_eq!(RdfFormat::from_media_type("application/rdf+xml"), None);
    }

    #[test]
    fn media_type_parameters_are_ignored() {
        assert_eq!(
            RdfFormat::from_media_type("text/turtle; charset=utf-8"),
            Some(RdfFormat::Turtle)
        );
        assert_eq!(
            RdfFormat::from_media_type("TEXT/Turtle"),
            Some(RdfFormat::Turtle)
        );
    }

    #[test]
    fn lookup_by_filename() {
        assert_eq!(
            RdfFormat::from_filename("vocabulary.ttl"),
            Some(RdfFormat::Turtle)
        );
        assert_eq!(
            RdfFormat::from_filename("dump.NT"),
            Some(RdfFormat::NTriples)
        );
        assert_eq!(RdfFormat::from_filename("data.unknownext"), None);
        assert_eq!(RdfFormat::from_filename("no-extension"), None);
    }
}
