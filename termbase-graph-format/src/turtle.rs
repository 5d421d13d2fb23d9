//! Turtle and N-Triples writers.
//!
//! Writers take the accumulated graph, deduplicate and sort it, and render a
//! deterministic document: same graph in, same bytes out. An empty graph
//! renders as an empty (still valid) document.

use std::fmt::Write as FmtWrite;

use termbase_graph_ir::{Graph, Term};
use termbase_vocab::{rdf, tb};

/// Well-known prefixes offered to the compactor in addition to whatever the
/// source graph declared.
const DEFAULT_PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("tb", tb::NS),
];

/// Serialize a graph as Turtle.
///
/// Statements are deduplicated and sorted by SPO, grouped into one subject
/// block per subject, with `a` for rdf:type and prefix-compacted IRIs where a
/// known namespace matches. Only prefixes that are actually used appear in
/// the header.
pub fn format_turtle(graph: &Graph) -> String {
    if graph.is_empty() {
        return String::new();
    }

    let mut g = graph.clone();
    g.dedupe();

    let prefixes = used_prefixes(&g);

    let mut out = String::with_capacity(g.len() * 64);
    for (prefix, ns) in &prefixes {
        writeln!(out, "@prefix {prefix}: <{ns}> .").unwrap();
    }
    if !prefixes.is_empty() {
        out.push('\n');
    }

    let mut current_subject: Option<&Term> = None;
    for triple in g.iter() {
        if current_subject == Some(&triple.s) {
            // Continue the open subject block
            out.truncate(out.trim_end_matches(" .\n").len());
            out.push_str(" ;\n");
        } else {
            if current_subject.is_some() {
                out.push('\n');
            }
            writeln!(out, "{}", render_term(&triple.s, &prefixes)).unwrap();
            current_subject = Some(&triple.s);
        }
        write!(
            out,
            "    {} {} .\n",
            render_predicate(&triple.p, &prefixes),
            render_term(&triple.o, &prefixes)
        )
        .unwrap();
    }

    out
}

/// Serialize a graph as N-Triples.
///
/// Blank nodes and prefixes are rendered expanded; one statement per line.
pub fn format_ntriples(graph: &Graph) -> String {
    let mut g = graph.clone();
    g.dedupe();

    let mut out = String::with_capacity(g.len() * 80);
    for triple in g.iter() {
        writeln!(
            out,
            "{} {} {} .",
            render_term_expanded(&triple.s),
            render_term_expanded(&triple.p),
            render_term_expanded(&triple.o)
        )
        .unwrap();
    }
    out
}

/// Escape special characters for Turtle/N-Triples string literals.
pub fn escape_turtle_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Collect the (prefix, namespace) pairs actually used by the graph.
///
/// Graph-declared prefixes win over the built-in table on namespace clashes.
fn used_prefixes(graph: &Graph) -> Vec<(String, String)> {
    let mut candidates: Vec<(String, String)> = DEFAULT_PREFIXES
        .iter()
        .map(|(p, ns)| (p.to_string(), ns.to_string()))
        .collect();
    for (p, ns) in &graph.prefixes {
        if !candidates.iter().any(|(_, n)| n == ns) {
            candidates.push((p.clone(), ns.clone()));
        }
    }

    let mut used: Vec<(String, String)> = candidates
        .into_iter()
        .filter(|(_, ns)| {
            graph.iter().any(|t| {
                // rdf:type renders as `a` and needs no prefix of its own
                let predicate_uses = t.p.as_iri() != Some(rdf::TYPE) && compactable(&t.p, ns);
                compactable(&t.s, ns) || predicate_uses || compactable(&t.o, ns)
            })
        })
        .collect();
    used.sort();
    used
}

fn compactable(term: &Term, namespace: &str) -> bool {
    match term {
        Term::Iri(iri) => compact_local(iri, namespace).is_some(),
        Term::Literal { datatype, language, .. } => {
            language.is_none()
                && !datatype.is_xsd_string()
                && compact_local(datatype.as_iri(), namespace).is_some()
        }
        Term::BlankNode(_) => false,
    }
}

/// The local part of `iri` under `namespace`, if it forms a clean PN_LOCAL.
fn compact_local<'a>(iri: &'a str, namespace: &str) -> Option<&'a str> {
    let local = iri.strip_prefix(namespace)?;
    if local.is_empty() || !local.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    Some(local)
}

fn compact_iri(iri: &str, prefixes: &[(String, String)]) -> Option<String> {
    for (prefix, ns) in prefixes {
        if let Some(local) = compact_local(iri, ns) {
            return Some(format!("{prefix}:{local}"));
        }
    }
    None
}

fn render_predicate(p: &Term, prefixes: &[(String, String)]) -> String {
    if p.as_iri() == Some(rdf::TYPE) {
        return "a".to_string();
    }
    render_term(p, prefixes)
}

fn render_term(term: &Term, prefixes: &[(String, String)]) -> String {
    match term {
        Term::Iri(iri) => {
            compact_iri(iri, prefixes).unwrap_or_else(|| format!("<{iri}>"))
        }
        Term::BlankNode(id) => id.to_string(),
        Term::Literal {
            value,
            datatype,
            language,
        } => {
            let quoted = format!("\"{}\"", escape_turtle_string(&value.lexical()));
            if let Some(lang) = language {
                format!("{quoted}@{lang}")
            } else if datatype.is_xsd_string() {
                quoted
            } else {
                let dt = compact_iri(datatype.as_iri(), prefixes)
                    .unwrap_or_else(|| format!("<{}>", datatype.as_iri()));
                format!("{quoted}^^{dt}")
            }
        }
    }
}

fn render_term_expanded(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{iri}>"),
        Term::BlankNode(id) => id.to_string(),
        Term::Literal {
            value,
            datatype,
            language,
        } => {
            let quoted = format!("\"{}\"", escape_turtle_string(&value.lexical()));
            if let Some(lang) = language {
                format!("{quoted}@{lang}")
            } else if datatype.is_xsd_string() {
                quoted
            } else {
                format!("{quoted}^^<{}>", datatype.as_iri())
            }
        }
    }
}
