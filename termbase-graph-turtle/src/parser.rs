//! Turtle parser that emits to a GraphSink.
//!
//! Recursive descent over the token stream. Prefixed names are expanded and
//! relative IRIs resolved during parsing, so the sink only ever sees
//! expanded IRIs. Collections are expanded into rdf:first / rdf:rest chains.

use std::collections::HashMap;

use termbase_graph_ir::{Datatype, GraphSink, TermId};
use termbase_vocab::rdf;

use crate::error::{Result, TurtleError};
use crate::lex::{tokenize, Token, TokenKind};

/// Turtle parser state.
pub struct Parser<'a, S> {
    tokens: Vec<Token>,
    pos: usize,
    sink: &'a mut S,
    /// Prefix mappings (prefix -> namespace IRI)
    prefixes: HashMap<String, String>,
    /// Base IRI for relative IRI resolution
    base: Option<String>,
}

/// Parse a Turtle document, emitting statements to the sink.
pub fn parse<S: GraphSink>(input: &str, sink: &mut S) -> Result<()> {
    Parser::new(input, sink)?.parse()
}

impl<'a, S: GraphSink> Parser<'a, S> {
    /// Create a new parser.
    pub fn new(input: &str, sink: &'a mut S) -> Result<Self> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
            sink,
            prefixes: HashMap::new(),
            base: None,
        })
    }

    /// Parse the entire document.
    pub fn parse(mut self) -> Result<()> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> &Token {
        let token = &self.tokens[self.pos];
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<&Token> {
        if std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind) {
            Ok(self.advance())
        } else {
            Err(TurtleError::parse(
                self.current().start,
                format!("expected {}, found {}", kind, self.current().kind),
            ))
        }
    }

    /// Parse a single statement (directive or triples).
    fn parse_statement(&mut self) -> Result<()> {
        match &self.current().kind {
            TokenKind::KwPrefix | TokenKind::KwSparqlPrefix => self.parse_prefix_directive(),
            TokenKind::KwBase | TokenKind::KwSparqlBase => self.parse_base_directive(),
            TokenKind::Eof => Ok(()),
            _ => self.parse_triples(),
        }
    }

    /// Parse `@prefix` or `PREFIX`.
    fn parse_prefix_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::KwSparqlPrefix);
        self.advance();

        let prefix = match &self.current().kind {
            TokenKind::PrefixedNameNs(p) => p.to_string(),
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected prefix namespace",
                ))
            }
        };
        self.advance();

        let namespace = match &self.current().kind {
            TokenKind::Iri(iri) => self.resolve_iri(iri)?,
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected IRI for prefix namespace",
                ))
            }
        };
        self.advance();

        self.sink.on_prefix(&prefix, &namespace);
        self.prefixes.insert(prefix, namespace);

        // Trailing dot is required for @prefix, absent for PREFIX
        if !is_sparql_style {
            self.expect(&TokenKind::Dot)?;
        }

        Ok(())
    }

    /// Parse `@base` or `BASE`.
    fn parse_base_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::KwSparqlBase);
        self.advance();

        let base_iri = match &self.current().kind {
            TokenKind::Iri(iri) => iri.to_string(),
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected IRI for base",
                ))
            }
        };
        self.advance();

        self.sink.on_base(&base_iri);
        self.base = Some(base_iri);

        if !is_sparql_style {
            self.expect(&TokenKind::Dot)?;
        }

        Ok(())
    }

    /// Parse a triple statement.
    fn parse_triples(&mut self) -> Result<()> {
        let subject = self.parse_subject()?;
        self.parse_predicate_object_list(subject)?;
        self.expect(&TokenKind::Dot)?;
        Ok(())
    }

    /// Parse a subject term.
    fn parse_subject(&mut self) -> Result<TermId> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(iri)?;
                self.advance();
                Ok(self.sink.term_iri(&resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(self.sink.term_blank(Some(label.as_ref())))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(self.sink.term_blank(None))
            }
            TokenKind::LBracket => self.parse_blank_node_property_list(),
            TokenKind::LParen => self.parse_collection(),
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected subject, found {}", self.current().kind),
            )),
        }
    }

    /// Parse a predicate-object list (semicolon separated).
    fn parse_predicate_object_list(&mut self, subject: TermId) -> Result<()> {
        loop {
            let predicate = self.parse_predicate()?;
            self.parse_object_list(subject, predicate)?;

            if matches!(self.current().kind, TokenKind::Semicolon) {
                self.advance();
                // A trailing semicolon before the closing token is legal
                if matches!(
                    self.current().kind,
                    TokenKind::Dot | TokenKind::RBracket | TokenKind::Eof
                ) {
                    break;
                }
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Parse a predicate.
    fn parse_predicate(&mut self) -> Result<TermId> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(iri)?;
                self.advance();
                Ok(self.sink.term_iri(&resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::KwA => {
                self.advance();
                Ok(self.sink.term_iri(rdf::TYPE))
            }
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected predicate, found {}", self.current().kind),
            )),
        }
    }

    /// Parse an object list (comma separated).
    fn parse_object_list(&mut self, subject: TermId, predicate: TermId) -> Result<()> {
        loop {
            let object = self.parse_object()?;
            self.sink.emit_triple(subject, predicate, object);

            if matches!(self.current().kind, TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Parse an object term.
    fn parse_object(&mut self) -> Result<TermId> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(iri)?;
                self.advance();
                Ok(self.sink.term_iri(&resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(self.sink.term_blank(Some(label.as_ref())))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(self.sink.term_blank(None))
            }
            TokenKind::LBracket => self.parse_blank_node_property_list(),
            TokenKind::LParen => self.parse_collection(),
            TokenKind::Nil => {
                self.advance();
                Ok(self.sink.term_iri(rdf::NIL))
            }
            TokenKind::String(_)
            | TokenKind::Integer(_)
            | TokenKind::Decimal(_)
            | TokenKind::KwTrue
            | TokenKind::KwFalse => self.parse_literal(),
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected object, found {}", self.current().kind),
            )),
        }
    }

    /// Parse a literal (string with optional language tag or datatype).
    fn parse_literal(&mut self) -> Result<TermId> {
        match &self.current().kind.clone() {
            TokenKind::String(value) => {
                let value = value.clone();
                self.advance();

                match &self.current().kind.clone() {
                    TokenKind::LangTag(lang) => {
                        let lang = lang.clone();
                        self.advance();
                        Ok(self.sink.term_literal(
                            &value,
                            Datatype::rdf_lang_string(),
                            Some(lang.as_ref()),
                        ))
                    }
                    TokenKind::DoubleCaret => {
                        self.advance();
                        let datatype_iri = self.parse_datatype_iri()?;
                        let datatype = Datatype::from_iri(&datatype_iri);
                        Ok(self.sink.term_literal(&value, datatype, None))
                    }
                    _ => Ok(self.sink.term_literal(&value, Datatype::xsd_string(), None)),
                }
            }
            TokenKind::Integer(n) => {
                let lexical = n.to_string();
                self.advance();
                Ok(self
                    .sink
                    .term_literal(&lexical, Datatype::xsd_integer(), None))
            }
            TokenKind::Decimal(s) => {
                let s = s.clone();
                self.advance();
                let datatype = Datatype::from_iri(termbase_vocab::xsd::DECIMAL);
                Ok(self.sink.term_literal(&s, datatype, None))
            }
            TokenKind::KwTrue => {
                self.advance();
                Ok(self.sink.term_literal("true", Datatype::xsd_boolean(), None))
            }
            TokenKind::KwFalse => {
                self.advance();
                Ok(self
                    .sink
                    .term_literal("false", Datatype::xsd_boolean(), None))
            }
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected literal, found {}", self.current().kind),
            )),
        }
    }

    /// Parse a datatype IRI after `^^`.
    fn parse_datatype_iri(&mut self) -> Result<String> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(iri)?;
                self.advance();
                Ok(resolved)
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(iri)
            }
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected datatype IRI, found {}", self.current().kind),
            )),
        }
    }

    /// Parse a blank node property list: `[ predicate object ; ... ]`
    fn parse_blank_node_property_list(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::LBracket)?;

        let bnode = self.sink.term_blank(None);

        if !matches!(self.current().kind, TokenKind::RBracket) {
            self.parse_predicate_object_list(bnode)?;
        }

        self.expect(&TokenKind::RBracket)?;

        Ok(bnode)
    }

    /// Parse a collection: `( item1 item2 ... )`, expanded into an
    /// rdf:first / rdf:rest chain.
    fn parse_collection(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::LParen)?;

        if matches!(self.current().kind, TokenKind::RParen) {
            self.advance();
            return Ok(self.sink.term_iri(rdf::NIL));
        }

        let rdf_first = self.sink.term_iri(rdf::FIRST);
        let rdf_rest = self.sink.term_iri(rdf::REST);
        let rdf_nil = self.sink.term_iri(rdf::NIL);

        let first_node = self.sink.term_blank(None);
        let mut current_node = first_node;

        loop {
            let item = self.parse_object()?;
            self.sink.emit_triple(current_node, rdf_first, item);

            if matches!(self.current().kind, TokenKind::RParen) {
                self.sink.emit_triple(current_node, rdf_rest, rdf_nil);
                break;
            }
            let next_node = self.sink.term_blank(None);
            self.sink.emit_triple(current_node, rdf_rest, next_node);
            current_node = next_node;
        }

        self.expect(&TokenKind::RParen)?;

        Ok(first_node)
    }

    /// Expand a prefixed name against the declared prefixes.
    fn expand_prefixed_name(&self, prefix: &str, local: &str) -> Result<String> {
        match self.prefixes.get(prefix) {
            Some(namespace) => Ok(format!("{namespace}{local}")),
            None => Err(TurtleError::UndefinedPrefix(prefix.to_string())),
        }
    }

    /// Resolve a potentially relative IRI against the base.
    ///
    /// An IRI with a scheme is absolute and passes through. Relative
    /// references require a declared base: fragment and path references are
    /// joined against it textually (full RFC 3986 dot-segment handling is
    /// not needed for the payloads this parser serves).
    fn resolve_iri(&self, reference: &str) -> Result<String> {
        if let Some(colon_pos) = reference.find(':') {
            let scheme = &reference[..colon_pos];
            if !scheme.is_empty()
                && scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
            {
                return Ok(reference.to_string());
            }
        }

        let base = self.base.as_deref().ok_or_else(|| {
            TurtleError::IriResolution(format!("relative IRI '{reference}' without base"))
        })?;

        if reference.is_empty() {
            return Ok(base.to_string());
        }

        if reference.starts_with('#') {
            let stem = base.split('#').next().unwrap_or(base);
            return Ok(format!("{stem}{reference}"));
        }

        if reference.starts_with('/') {
            // Absolute path: keep scheme + authority of the base
            if let Some(scheme_end) = base.find("://") {
                if let Some(path_start) = base[scheme_end + 3..].find('/') {
                    return Ok(format!("{}{}", &base[..scheme_end + 3 + path_start], reference));
                }
                return Ok(format!("{base}{reference}"));
            }
            return Ok(format!("{base}{reference}"));
        }

        // Relative path: replace the last segment of the base path
        let dir = match base.rfind('/') {
            Some(pos) => &base[..=pos],
            None => base,
        };
        Ok(format!("{dir}{reference}"))
    }
}
