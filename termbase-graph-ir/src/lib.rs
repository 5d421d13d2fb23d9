//! In-memory RDF graph model for termbase
//!
//! Canonical statement types produced by parsers, accumulated by exporters and
//! flushed into the quad store, independent of any serialization format.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - prefixed names are resolved at parse time;
//!    compaction is a formatter concern.
//!
//! 2. **Explicit datatypes** - literals always carry a datatype. Plain strings
//!    are `xsd:string`, language-tagged strings are `rdf:langString`, anything
//!    else keeps its lexical form with the declared datatype IRI.
//!
//! 3. **Bag semantics by default** - `Graph` is `Vec<Triple>` underneath and
//!    preserves duplicates and insertion order. Call `dedupe()` explicitly
//!    for set semantics.
//!
//! 4. **Single ownership** - a `Graph` belongs to the import or export
//!    operation that built it and is never shared across operations.
//!
//! # Example
//!
//! ```
//! use termbase_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::iri("https://example.org/vocab/term/budget"),
//!     Term::iri("http://www.w3.org/2004/02/skos/core#prefLabel"),
//!     Term::lang_string("budget", "en"),
//! );
//! graph.sort();
//! ```

mod datatype;
mod graph;
mod sink;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::Graph;
pub use sink::{GraphCollectorSink, GraphSink, TermId};
pub use term::{BlankId, LiteralValue, Term};
pub use triple::Triple;
