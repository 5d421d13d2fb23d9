//! Turtle (TTL) parser for termbase.
//!
//! Parses Turtle documents and emits statements to a
//! `termbase_graph_ir::GraphSink`. N-Triples input is accepted by the same
//! grammar (it is a syntactic subset of Turtle).
//!
//! # Example
//!
//! ```
//! use termbase_graph_turtle::parse;
//! use termbase_graph_ir::GraphCollectorSink;
//!
//! let turtle = r#"
//!     @prefix skos: <http://www.w3.org/2004/02/skos/core#> .
//!     <https://example.org/term/budget> a skos:Concept ;
//!         skos:prefLabel "budget"@en .
//! "#;
//!
//! let mut sink = GraphCollectorSink::new();
//! parse(turtle, &mut sink).unwrap();
//! let graph = sink.finish();
//! assert_eq!(graph.len(), 2);
//! ```

pub mod error;
pub mod lex;
pub mod parser;

pub use error::{Result, TurtleError};
pub use lex::{tokenize, Lexer, Token, TokenKind};
pub use parser::{parse, Parser};
