//! RDF serialization registry and graph writers
//!
//! This crate provides:
//!
//! - [`RdfFormat`]: the registry of RDF serializations the system accepts,
//!   keyed by MIME type and by file extension. Import and export both consult
//!   it; a media type absent from this registry is an unsupported format.
//! - [`format_turtle`]: Turtle writer over a `termbase_graph_ir::Graph`
//!   (prefix-compacted, grouped by subject, deterministic ordering).
//! - [`format_ntriples`]: line-based N-Triples writer.
//!
//! # Example
//!
//! ```
//! use termbase_graph_format::{format_turtle, RdfFormat};
//! use termbase_graph_ir::{Graph, Term};
//!
//! assert_eq!(RdfFormat::from_media_type("text/turtle"), Some(RdfFormat::Turtle));
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::iri("https://example.org/term/budget"),
//!     Term::iri("http://www.w3.org/2004/02/skos/core#prefLabel"),
//!     Term::lang_string("budget", "en"),
//! );
//! let ttl = format_turtle(&graph);
//! assert!(ttl.contains("skos:prefLabel \"budget\"@en"));
//! ```

mod registry;
mod turtle;

pub use registry::RdfFormat;
pub use turtle::{escape_turtle_string, format_ntriples, format_turtle};
