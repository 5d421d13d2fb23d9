//! Turtle lexer implementation using winnow.
//!
//! Tokenizes Turtle input into a stream of tokens with source spans.
//! Fails fast on the first lexical error with line/column context.

use std::sync::Arc;

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, peek, preceded};
use winnow::error::ContextError;
use winnow::stream::{AsChar, Location, Stream};
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::chars::*;
use super::token::{Token, TokenKind};
use crate::error::{Result, TurtleError};

/// Input type for the lexer - tracks position for spans.
pub type Input<'a> = LocatingSlice<&'a str>;

fn backtrack() -> winnow::error::ErrMode<ContextError> {
    winnow::error::ErrMode::Backtrack(ContextError::new())
}

/// Lexer for Turtle documents.
pub struct Lexer<'a> {
    input: &'a str,
}

/// Tokenize a Turtle document.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Tokenize the entire input.
    ///
    /// Returns an error immediately on the first invalid token.
    pub fn tokenize(self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut input = LocatingSlice::new(self.input);

        loop {
            skip_ws_and_comments(&mut input);

            if input.is_empty() {
                let pos = input.current_token_start();
                tokens.push(Token::new(TokenKind::Eof, pos, pos));
                break;
            }

            let start = input.current_token_start();

            match next_token(&mut input) {
                Ok(kind) => {
                    let end = input.current_token_start();
                    tokens.push(Token::new(kind, start, end));
                }
                Err(_) => return Err(self.make_error(start, &input)),
            }
        }

        Ok(tokens)
    }

    /// Build a lexer error with line/column context.
    fn make_error(&self, position: usize, input: &Input<'_>) -> TurtleError {
        let bad_char = input.as_ref().chars().next().unwrap_or('?');
        let (line, col) = self.line_col(position);
        let message = match bad_char {
            '"' | '\'' => format!("unterminated string literal at line {line}, column {col}"),
            '<' => format!("invalid or unterminated IRI at line {line}, column {col}"),
            c => format!("unexpected character '{c}' at line {line}, column {col}"),
        };
        TurtleError::lexer(position, message)
    }

    /// Convert a byte position to (line, column), 1-indexed.
    fn line_col(&self, position: usize) -> (usize, usize) {
        let mut line = 1;
        let mut col = 1;
        for (i, c) in self.input.char_indices() {
            if i >= position {
                break;
            }
            if c == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

/// Skip whitespace and `#` comments.
fn skip_ws_and_comments(input: &mut Input<'_>) {
    loop {
        let _: ModalResult<&str, ContextError> = take_while(0.., is_ws).parse_next(input);

        if input.starts_with('#') {
            let _: ModalResult<&str, ContextError> =
                take_till(0.., |c| c == '\n' || c == '\r').parse_next(input);
            let _: ModalResult<Option<char>, ContextError> =
                opt(one_of(['\n', '\r'])).parse_next(input);
        } else {
            break;
        }
    }
}

/// Parse the next token.
fn next_token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        parse_double_caret,
        parse_iri_ref,
        parse_blank_node_label,
        parse_anon,
        parse_nil,
        parse_at_directive,
        parse_default_prefix,
        parse_prefixed_name_or_keyword,
        parse_string_literal,
        parse_number,
        parse_punctuation,
    ))
    .parse_next(input)
}

/// Parse `^^` (must come before single-char punctuation).
fn parse_double_caret(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "^^".map(|_| TokenKind::DoubleCaret).parse_next(input)
}

/// Parse an IRI reference: `<...>`
fn parse_iri_ref(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited('<', take_while(0.., is_iri_char), '>')
        .map(|s: &str| TokenKind::Iri(Arc::from(s)))
        .parse_next(input)
}

/// Parse `@prefix` / `@base` directives and language tags.
fn parse_at_directive(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '@'.parse_next(input)?;

    let word: &str =
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-').parse_next(input)?;

    match word.to_lowercase().as_str() {
        "prefix" => Ok(TokenKind::KwPrefix),
        "base" => Ok(TokenKind::KwBase),
        _ => Ok(TokenKind::LangTag(Arc::from(word))),
    }
}

/// Parse a default-prefix name (`:local`) or default prefix namespace (`:`).
fn parse_default_prefix(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ':'.parse_next(input)?;

    match opt(parse_pn_local).parse_next(input)? {
        Some(local) => Ok(TokenKind::PrefixedName {
            prefix: Arc::from(""),
            local: Arc::from(local.as_str()),
        }),
        None => Ok(TokenKind::PrefixedNameNs(Arc::from(""))),
    }
}

/// Parse a prefixed name or a bare keyword (a, true, false, PREFIX, BASE).
fn parse_prefixed_name_or_keyword(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let start = input.checkpoint();

    let first_char = input.chars().next().ok_or_else(backtrack)?;
    if !is_pn_chars_base(first_char) {
        return Err(backtrack());
    }

    let c: char = any.parse_next(input)?;
    let mut word = String::new();
    word.push(c);
    let chunk: &str = take_while(0.., is_pn_chars).parse_next(input)?;
    word.push_str(chunk);

    if peek(opt(':')).parse_next(input)?.is_some() {
        ':'.parse_next(input)?;
        match opt(parse_pn_local).parse_next(input)? {
            Some(local) => Ok(TokenKind::PrefixedName {
                prefix: Arc::from(word.as_str()),
                local: Arc::from(local.as_str()),
            }),
            None => Ok(TokenKind::PrefixedNameNs(Arc::from(word.as_str()))),
        }
    } else {
        match word.as_str() {
            "a" => Ok(TokenKind::KwA),
            "true" => Ok(TokenKind::KwTrue),
            "false" => Ok(TokenKind::KwFalse),
            "PREFIX" => Ok(TokenKind::KwSparqlPrefix),
            "BASE" => Ok(TokenKind::KwSparqlBase),
            _ => {
                input.reset(&start);
                Err(backtrack())
            }
        }
    }
}

/// Parse a local name (after the colon in a prefixed name).
///
/// Dots are allowed inside a local name but not as its final character, so a
/// trailing statement dot is never swallowed.
fn parse_pn_local(input: &mut Input<'_>) -> ModalResult<String> {
    let first_char = input.chars().next().ok_or_else(backtrack)?;
    if !is_pn_local_start(first_char) {
        return Err(backtrack());
    }

    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., is_pn_chars).parse_next(input)?;
        result.push_str(chunk);

        if input.starts_with('.') {
            let rest = &input.as_ref()[1..];
            if rest.chars().next().is_some_and(is_pn_chars) {
                '.'.parse_next(input)?;
                result.push('.');
                continue;
            }
        }
        break;
    }

    if result.is_empty() {
        return Err(backtrack());
    }

    Ok(result)
}

/// Parse a blank node label: `_:name`
fn parse_blank_node_label(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    preceded("_:", parse_blank_node_name)
        .map(|name: &str| TokenKind::BlankNodeLabel(Arc::from(name)))
        .parse_next(input)
}

/// Parse a blank node name (after `_:`).
fn parse_blank_node_name<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    let result: &str = (
        take_while(1, |c: char| is_pn_chars_u(c) || c.is_ascii_digit()),
        take_while(0.., is_pn_chars),
    )
        .take()
        .parse_next(input)?;

    Ok(result)
}

/// Parse anonymous blank node: `[]`
fn parse_anon(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('[', take_while(0.., is_ws), ']')
        .map(|_| TokenKind::Anon)
        .parse_next(input)
}

/// Parse an empty collection: `()`
fn parse_nil(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('(', take_while(0.., is_ws), ')')
        .map(|_| TokenKind::Nil)
        .parse_next(input)
}

/// Parse a string literal: `"..."` or `"""..."""`.
fn parse_string_literal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((parse_string_long, parse_string_short)).parse_next(input)
}

fn parse_string_short(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited('"', parse_short_content, '"')
        .map(|s| TokenKind::String(Arc::from(s)))
        .parse_next(input)
}

fn parse_string_long(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited("\"\"\"", parse_long_content, "\"\"\"")
        .map(|s| TokenKind::String(Arc::from(s)))
        .parse_next(input)
}

fn parse_short_content(input: &mut Input<'_>) -> ModalResult<String> {
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., |c| c != '"' && c != '\\' && c != '\n' && c != '\r')
            .parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() || input.starts_with('"') {
            break;
        }

        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            result.push(parse_escape_char(input)?);
        } else {
            break;
        }
    }

    Ok(result)
}

fn parse_long_content(input: &mut Input<'_>) -> ModalResult<String> {
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., |c| c != '"' && c != '\\').parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() || input.starts_with("\"\"\"") {
            break;
        }

        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            result.push(parse_escape_char(input)?);
        } else if input.starts_with('"') {
            let c: char = any.parse_next(input)?;
            result.push(c);
        } else {
            break;
        }
    }

    Ok(result)
}

fn parse_escape_char(input: &mut Input<'_>) -> ModalResult<char> {
    let c: char = any.parse_next(input)?;
    match c {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        'u' => {
            let hex: &str = take_while(4..=4, AsChar::is_hex_digit).parse_next(input)?;
            let code = u32::from_str_radix(hex, 16).map_err(|_| backtrack())?;
            char::from_u32(code).ok_or_else(backtrack)
        }
        'U' => {
            let hex: &str = take_while(8..=8, AsChar::is_hex_digit).parse_next(input)?;
            let code = u32::from_str_radix(hex, 16).map_err(|_| backtrack())?;
            char::from_u32(code).ok_or_else(backtrack)
        }
        _ => Err(backtrack()),
    }
}

/// Parse a numeric literal (decimal before integer so `1.5` is not split).
fn parse_number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((parse_decimal, parse_integer)).parse_next(input)
}

fn parse_decimal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let text: &str = (
        opt(one_of(['+', '-'])),
        take_while(0.., AsChar::is_dec_digit),
        '.',
        digit1,
    )
        .take()
        .parse_next(input)?;

    Ok(TokenKind::Decimal(Arc::from(text)))
}

fn parse_integer(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let text: &str = (opt(one_of(['+', '-'])), digit1).take().parse_next(input)?;
    let value = text.parse::<i64>().map_err(|_| backtrack())?;
    Ok(TokenKind::Integer(value))
}

/// Parse single-character punctuation.
fn parse_punctuation(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let c: char = any.parse_next(input)?;
    match c {
        '.' => Ok(TokenKind::Dot),
        ',' => Ok(TokenKind::Comma),
        ';' => Ok(TokenKind::Semicolon),
        '[' => Ok(TokenKind::LBracket),
        ']' => Ok(TokenKind::RBracket),
        '(' => Ok(TokenKind::LParen),
        ')' => Ok(TokenKind::RParen),
        _ => Err(backtrack()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn tokenize_iri_and_dot() {
        let toks = kinds("<http://example.org/a> .");
        assert_eq!(toks.len(), 3);
        assert!(matches!(&toks[0], TokenKind::Iri(s) if s.as_ref() == "http://example.org/a"));
        assert_eq!(toks[1], TokenKind::Dot);
        assert_eq!(toks[2], TokenKind::Eof);
    }

    #[test]
    fn tokenize_prefixed_name() {
        let toks = kinds("skos:prefLabel");
        assert!(matches!(
            &toks[0],
            TokenKind::PrefixedName { prefix, local }
                if prefix.as_ref() == "skos" && local.as_ref() == "prefLabel"
        ));
    }

    #[test]
    fn tokenize_directives() {
        let toks = kinds("@prefix skos: <http://www.w3.org/2004/02/skos/core#> .");
        assert_eq!(toks[0], TokenKind::KwPrefix);
        assert!(matches!(&toks[1], TokenKind::PrefixedNameNs(p) if p.as_ref() == "skos"));
    }

    #[test]
    fn tokenize_lang_string() {
        let toks = kinds("\"budget\"@en");
        assert!(matches!(&toks[0], TokenKind::String(s) if s.as_ref() == "budget"));
        assert!(matches!(&toks[1], TokenKind::LangTag(l) if l.as_ref() == "en"));
    }

    #[test]
    fn tokenize_typed_literal() {
        let toks = kinds("\"42\"^^xsd:integer");
        assert!(matches!(&toks[0], TokenKind::String(_)));
        assert_eq!(toks[1], TokenKind::DoubleCaret);
        assert!(matches!(&toks[2], TokenKind::PrefixedName { .. }));
    }

    #[test]
    fn tokenize_string_escapes() {
        let toks = kinds(r#""a\"b\nc""#);
        assert!(matches!(&toks[0], TokenKind::String(s) if s.as_ref() == "a\"b\nc"));
    }

    #[test]
    fn tokenize_long_string_spans_lines() {
        let toks = kinds("\"\"\"line one\nline two\"\"\"");
        assert!(matches!(&toks[0], TokenKind::String(s) if s.as_ref() == "line one\nline two"));
    }

    #[test]
    fn tokenize_numbers() {
        let toks = kinds("42 -7 3.14");
        assert_eq!(toks[0], TokenKind::Integer(42));
        assert_eq!(toks[1], TokenKind::Integer(-7));
        assert!(matches!(&toks[2], TokenKind::Decimal(s) if s.as_ref() == "3.14"));
    }

    #[test]
    fn tokenize_blank_and_anon() {
        let toks = kinds("_:b0 [] ()");
        assert!(matches!(&toks[0], TokenKind::BlankNodeLabel(l) if l.as_ref() == "b0"));
        assert_eq!(toks[1], TokenKind::Anon);
        assert_eq!(toks[2], TokenKind::Nil);
    }

    #[test]
    fn comments_are_skipped() {
        let toks = kinds("# a comment\n<http://example.org/a>");
        assert!(matches!(&toks[0], TokenKind::Iri(_)));
    }

    #[test]
    fn keyword_a_vs_prefix() {
        let toks = kinds("a a:b");
        assert_eq!(toks[0], TokenKind::KwA);
        assert!(matches!(&toks[1], TokenKind::PrefixedName { prefix, .. } if prefix.as_ref() == "a"));
    }

    #[test]
    fn local_name_does_not_swallow_statement_dot() {
        let toks = kinds("ex:budget .");
        assert!(matches!(
            &toks[0],
            TokenKind::PrefixedName { local, .. } if local.as_ref() == "budget"
        ));
        assert_eq!(toks[1], TokenKind::Dot);
    }

    #[test]
    fn lexer_error_reports_position() {
        let err = tokenize("<http://example.org/a> }").unwrap_err();
        assert!(matches!(err, TurtleError::Lexer { .. }));
    }
}
