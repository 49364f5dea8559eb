//! Turtle reader
//!
//! Tokenizer plus recursive-descent parser emitting triples straight into a
//! [`MemoryGraph`]. Covers the Turtle subset ontologies use in practice:
//! `@prefix`/`@base` (and the SPARQL-style spellings), prefixed names, `a`,
//! `;`/`,` continuations, language-tagged and datatyped literals, long
//! strings, numeric and boolean shorthand, `[ ... ]` blank node property
//! lists and `( ... )` collections expanded to `rdf:first`/`rdf:rest` chains.

use crate::graph::GraphError;
use crate::memory::MemoryGraph;
use mimizuku_core::{vocab, Iri, Literal, Node, PrefixTable, Term, Triple};
use std::collections::HashMap;

const FORMAT: &str = "turtle";

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Iri(String),
    Prefixed(String, String),
    Blank(String),
    Literal { value: String, lang: Option<String> },
    Number(String),
    Boolean(bool),
    A,
    PrefixDecl,
    BaseDecl,
    SparqlPrefix,
    SparqlBase,
    CaretCaret,
    Dot,
    Semicolon,
    Comma,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Eof,
}

fn err<M: Into<String>>(message: M) -> GraphError {
    GraphError::syntax(FORMAT, message)
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += 1;
            } else if c == '#' {
                while let Some(c) = self.peek() {
                    self.pos += 1;
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, GraphError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia();
            let c = match self.peek() {
                Some(c) => c,
                None => {
                    tokens.push(Token::Eof);
                    return Ok(tokens);
                }
            };
            match c {
                '<' => {
                    self.bump();
                    tokens.push(Token::Iri(self.read_iri()?));
                }
                '"' => {
                    tokens.push(self.read_string()?);
                }
                '^' => {
                    self.bump();
                    if self.bump() != Some('^') {
                        return Err(err("expected '^^'"));
                    }
                    tokens.push(Token::CaretCaret);
                }
                '@' => {
                    self.bump();
                    let word = self.read_bare_word();
                    match word.as_str() {
                        "prefix" => tokens.push(Token::PrefixDecl),
                        "base" => tokens.push(Token::BaseDecl),
                        other => return Err(err(format!("unexpected directive '@{}'", other))),
                    }
                }
                ';' => {
                    self.bump();
                    tokens.push(Token::Semicolon);
                }
                ',' => {
                    self.bump();
                    tokens.push(Token::Comma);
                }
                '[' => {
                    self.bump();
                    tokens.push(Token::LBracket);
                }
                ']' => {
                    self.bump();
                    tokens.push(Token::RBracket);
                }
                '(' => {
                    self.bump();
                    tokens.push(Token::LParen);
                }
                ')' => {
                    self.bump();
                    tokens.push(Token::RParen);
                }
                '.' => {
                    if self.peek_at(1).map_or(false, |n| n.is_ascii_digit()) {
                        let (token, dot) = self.read_word_token()?;
                        tokens.push(token);
                        if dot {
                            tokens.push(Token::Dot);
                        }
                    } else {
                        self.bump();
                        tokens.push(Token::Dot);
                    }
                }
                _ => {
                    let (token, dot) = self.read_word_token()?;
                    tokens.push(token);
                    if dot {
                        tokens.push(Token::Dot);
                    }
                }
            }
        }
    }

    fn read_iri(&mut self) -> Result<String, GraphError> {
        let mut iri = String::new();
        loop {
            match self.bump() {
                Some('>') => return Ok(iri),
                Some('\\') => match self.bump() {
                    Some('u') => iri.push(self.read_unicode_escape(4)?),
                    Some('U') => iri.push(self.read_unicode_escape(8)?),
                    Some(c) => iri.push(c),
                    None => return Err(err("unterminated IRI")),
                },
                Some(c) => iri.push(c),
                None => return Err(err("unterminated IRI")),
            }
        }
    }

    fn read_unicode_escape(&mut self, len: usize) -> Result<char, GraphError> {
        let mut code = 0u32;
        for _ in 0..len {
            let c = self.bump().ok_or_else(|| err("unterminated escape"))?;
            let digit = c
                .to_digit(16)
                .ok_or_else(|| err(format!("invalid hex digit '{}'", c)))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| err(format!("invalid code point U+{:X}", code)))
    }

    fn read_string(&mut self) -> Result<Token, GraphError> {
        self.bump(); // opening quote
        let long = self.peek() == Some('"') && self.peek_at(1) == Some('"');
        if long {
            self.bump();
            self.bump();
        }
        let mut value = String::new();
        loop {
            let c = self.bump().ok_or_else(|| err("unterminated string literal"))?;
            match c {
                '"' if long => {
                    if self.peek() == Some('"') && self.peek_at(1) == Some('"') {
                        self.bump();
                        self.bump();
                        break;
                    }
                    value.push('"');
                }
                '"' => break,
                '\\' => {
                    let esc = self.bump().ok_or_else(|| err("unterminated escape"))?;
                    match esc {
                        't' => value.push('\t'),
                        'n' => value.push('\n'),
                        'r' => value.push('\r'),
                        'b' => value.push('\u{0008}'),
                        'f' => value.push('\u{000C}'),
                        '"' => value.push('"'),
                        '\'' => value.push('\''),
                        '\\' => value.push('\\'),
                        'u' => value.push(self.read_unicode_escape(4)?),
                        'U' => value.push(self.read_unicode_escape(8)?),
                        other => return Err(err(format!("invalid escape '\\{}'", other))),
                    }
                }
                _ => value.push(c),
            }
        }

        let lang = if self.peek() == Some('@') {
            self.bump();
            let tag = self.read_bare_word();
            if tag.is_empty() {
                return Err(err("empty language tag"));
            }
            Some(tag)
        } else {
            None
        };
        Ok(Token::Literal { value, lang })
    }

    /// Letters, digits and hyphens only; used for directives and lang tags.
    fn read_bare_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '-' {
                word.push(c);
                self.pos += 1;
            } else {
                break;
            }
        }
        word
    }

    /// Read a whitespace/delimiter-terminated word and classify it. A single
    /// trailing '.' is split off as the statement terminator.
    fn read_word_token(&mut self) -> Result<(Token, bool), GraphError> {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, ';' | ',' | '(' | ')' | '[' | ']' | '<' | '"' | '#' | '^')
            {
                break;
            }
            word.push(c);
            self.pos += 1;
        }
        let mut dot = false;
        if word.len() > 1 && word.ends_with('.') {
            word.pop();
            dot = true;
        }

        let token = if word == "a" {
            Token::A
        } else if word == "true" {
            Token::Boolean(true)
        } else if word == "false" {
            Token::Boolean(false)
        } else if word.eq_ignore_ascii_case("prefix") {
            Token::SparqlPrefix
        } else if word.eq_ignore_ascii_case("base") {
            Token::SparqlBase
        } else if let Some(rest) = word.strip_prefix("_:") {
            Token::Blank(rest.to_string())
        } else if looks_numeric(&word) {
            Token::Number(word)
        } else if let Some((prefix, local)) = word.split_once(':') {
            Token::Prefixed(prefix.to_string(), local.to_string())
        } else if word.is_empty() {
            return Err(err("unexpected character"));
        } else {
            return Err(err(format!("unexpected token '{}'", word)));
        };
        Ok((token, dot))
    }
}

fn looks_numeric(word: &str) -> bool {
    let body = word.strip_prefix(['+', '-']).unwrap_or(word);
    !body.is_empty()
        && body.chars().next().map_or(false, |c| c.is_ascii_digit() || c == '.')
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}

struct Parser<'g> {
    graph: &'g mut MemoryGraph,
    tokens: Vec<Token>,
    pos: usize,
    prefixes: HashMap<String, String>,
    base: Option<String>,
    blanks: HashMap<String, Node>,
}

pub fn read(graph: &mut MemoryGraph, data: &str, base: Option<&str>) -> Result<(), GraphError> {
    let tokens = Lexer::new(data).tokenize()?;
    Parser {
        graph,
        tokens,
        pos: 0,
        prefixes: HashMap::new(),
        base: base.map(str::to_string),
        blanks: HashMap::new(),
    }
    .run()
}

impl<'g> Parser<'g> {
    fn run(mut self) -> Result<(), GraphError> {
        while self.current() != &Token::Eof {
            self.statement()?;
        }
        Ok(())
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token != Token::Eof {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: &Token) -> Result<(), GraphError> {
        if self.current() == expected {
            self.advance();
            Ok(())
        } else {
            Err(err(format!(
                "expected {:?}, found {:?}",
                expected,
                self.current()
            )))
        }
    }

    fn statement(&mut self) -> Result<(), GraphError> {
        match self.current() {
            Token::PrefixDecl => {
                self.advance();
                self.prefix_directive(true)
            }
            Token::SparqlPrefix => {
                self.advance();
                self.prefix_directive(false)
            }
            Token::BaseDecl => {
                self.advance();
                self.base_directive(true)
            }
            Token::SparqlBase => {
                self.advance();
                self.base_directive(false)
            }
            _ => self.triples(),
        }
    }

    fn prefix_directive(&mut self, dotted: bool) -> Result<(), GraphError> {
        let prefix = match self.advance() {
            Token::Prefixed(prefix, local) if local.is_empty() => prefix,
            other => return Err(err(format!("expected prefix name, found {:?}", other))),
        };
        let namespace = match self.advance() {
            Token::Iri(iri) => self.resolve(&iri),
            other => return Err(err(format!("expected namespace IRI, found {:?}", other))),
        };
        self.prefixes.insert(prefix.clone(), namespace.clone());
        self.graph.register_prefix(prefix, namespace);
        if dotted {
            self.expect(&Token::Dot)?;
        }
        Ok(())
    }

    fn base_directive(&mut self, dotted: bool) -> Result<(), GraphError> {
        let iri = match self.advance() {
            Token::Iri(iri) => self.resolve(&iri),
            other => return Err(err(format!("expected base IRI, found {:?}", other))),
        };
        self.base = Some(iri);
        if dotted {
            self.expect(&Token::Dot)?;
        }
        Ok(())
    }

    fn triples(&mut self) -> Result<(), GraphError> {
        let subject = self.node()?;
        // "[ ... ] ." is a complete statement on its own
        if self.current() != &Token::Dot {
            self.predicate_object_list(&subject)?;
        }
        self.expect(&Token::Dot)
    }

    fn predicate_object_list(&mut self, subject: &Node) -> Result<(), GraphError> {
        loop {
            let predicate = self.predicate()?;
            loop {
                let object = self.object()?;
                self.graph
                    .insert(Triple::new(subject.clone(), predicate.clone(), object));
                if self.current() == &Token::Comma {
                    self.advance();
                } else {
                    break;
                }
            }
            if self.current() == &Token::Semicolon {
                while self.current() == &Token::Semicolon {
                    self.advance();
                }
                // trailing semicolon before the closing delimiter is legal
                if matches!(self.current(), Token::Dot | Token::RBracket) {
                    return Ok(());
                }
            } else {
                return Ok(());
            }
        }
    }

    fn predicate(&mut self) -> Result<Iri, GraphError> {
        match self.advance() {
            Token::A => Ok(Iri::new(vocab::rdf::TYPE)),
            Token::Iri(iri) => Ok(Iri::new(self.resolve(&iri))),
            Token::Prefixed(prefix, local) => self.expand(&prefix, &local),
            other => Err(err(format!("expected predicate, found {:?}", other))),
        }
    }

    fn node(&mut self) -> Result<Node, GraphError> {
        match self.advance() {
            Token::Iri(iri) => {
                let node = Node::named(self.resolve(&iri));
                self.graph.register_node(node.clone());
                Ok(node)
            }
            Token::Prefixed(prefix, local) => {
                let node = Node::Named(self.expand(&prefix, &local)?);
                self.graph.register_node(node.clone());
                Ok(node)
            }
            Token::Blank(label) => Ok(self.blank(&label)),
            Token::LBracket => {
                let node = self.graph.fresh_blank();
                if self.current() != &Token::RBracket {
                    self.predicate_object_list(&node)?;
                }
                self.expect(&Token::RBracket)?;
                Ok(node)
            }
            Token::LParen => self.collection(),
            other => Err(err(format!("expected subject, found {:?}", other))),
        }
    }

    fn object(&mut self) -> Result<Term, GraphError> {
        match self.current().clone() {
            Token::Literal { .. } => {
                let (value, lang) = match self.advance() {
                    Token::Literal { value, lang } => (value, lang),
                    _ => unreachable!(),
                };
                if self.current() == &Token::CaretCaret {
                    self.advance();
                    let datatype = match self.advance() {
                        Token::Iri(iri) => Iri::new(self.resolve(&iri)),
                        Token::Prefixed(prefix, local) => self.expand(&prefix, &local)?,
                        other => {
                            return Err(err(format!("expected datatype IRI, found {:?}", other)))
                        }
                    };
                    Ok(Term::Literal(Literal::typed(value, datatype)))
                } else if let Some(lang) = lang {
                    Ok(Term::Literal(Literal::tagged(value, lang)))
                } else {
                    Ok(Term::Literal(Literal::plain(value)))
                }
            }
            Token::Number(text) => {
                self.advance();
                let datatype = if text.contains(['e', 'E']) {
                    vocab::xsd::DOUBLE
                } else if text.contains('.') {
                    vocab::xsd::DECIMAL
                } else {
                    vocab::xsd::INTEGER
                };
                Ok(Term::Literal(Literal::typed(text, Iri::new(datatype))))
            }
            Token::Boolean(value) => {
                self.advance();
                Ok(Term::Literal(Literal::typed(
                    value.to_string(),
                    Iri::new(vocab::xsd::BOOLEAN),
                )))
            }
            _ => Ok(Term::Node(self.node()?)),
        }
    }

    /// Expand `( m1 m2 ... )` into an rdf:first/rdf:rest chain, returning the
    /// head cell (or rdf:nil for the empty collection).
    fn collection(&mut self) -> Result<Node, GraphError> {
        let mut members = Vec::new();
        while self.current() != &Token::RParen {
            if self.current() == &Token::Eof {
                return Err(err("unterminated collection"));
            }
            members.push(self.object()?);
        }
        self.advance(); // ')'

        if members.is_empty() {
            let nil = Node::named(vocab::rdf::NIL);
            self.graph.register_node(nil.clone());
            return Ok(nil);
        }

        let cells: Vec<Node> = members.iter().map(|_| self.graph.fresh_blank()).collect();
        for (i, member) in members.into_iter().enumerate() {
            self.graph.insert(Triple::new(
                cells[i].clone(),
                Iri::new(vocab::rdf::FIRST),
                member,
            ));
            let rest = if i + 1 < cells.len() {
                Term::Node(cells[i + 1].clone())
            } else {
                Term::named(vocab::rdf::NIL)
            };
            self.graph
                .insert(Triple::new(cells[i].clone(), Iri::new(vocab::rdf::REST), rest));
        }
        Ok(cells[0].clone())
    }

    fn blank(&mut self, label: &str) -> Node {
        if let Some(node) = self.blanks.get(label) {
            return node.clone();
        }
        let node = self.graph.fresh_blank();
        self.blanks.insert(label.to_string(), node.clone());
        node
    }

    fn expand(&mut self, prefix: &str, local: &str) -> Result<Iri, GraphError> {
        if let Some(namespace) = self.prefixes.get(prefix) {
            return Ok(Iri::new(format!("{}{}", namespace, local)));
        }
        if let Some(namespace) = PrefixTable::well_known().get(prefix) {
            return Ok(Iri::new(format!("{}{}", namespace, local)));
        }
        Err(err(format!("undefined prefix '{}:'", prefix)))
    }

    fn resolve(&self, iri: &str) -> String {
        resolve_against(self.base.as_deref(), iri)
    }
}

/// True when the IRI carries a scheme of its own.
fn is_absolute(iri: &str) -> bool {
    let Some(colon) = iri.find(':') else {
        return false;
    };
    let scheme = &iri[..colon];
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Resolve a (possibly relative) IRI reference against a base.
pub(crate) fn resolve_against(base: Option<&str>, iri: &str) -> String {
    if is_absolute(iri) {
        return iri.to_string();
    }
    let Some(base) = base else {
        return iri.to_string();
    };

    if iri.is_empty() {
        return base.to_string();
    }
    if let Some(fragment) = iri.strip_prefix('#') {
        let stem = base.split('#').next().unwrap_or(base);
        return format!("{}#{}", stem, fragment);
    }

    let authority_end = base
        .find("://")
        .map(|scheme_end| {
            let after = scheme_end + 3;
            base[after..]
                .find('/')
                .map(|p| after + p)
                .unwrap_or(base.len())
        })
        .unwrap_or(0);

    if iri.starts_with('/') {
        return format!("{}{}", &base[..authority_end], iri);
    }

    match base[authority_end..].rfind('/') {
        Some(p) => format!("{}{}", &base[..authority_end + p + 1], iri),
        None => format!("{}/{}", base, iri),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RdfGraph;

    fn parse(data: &str) -> MemoryGraph {
        let mut graph = MemoryGraph::new();
        read(&mut graph, data, None).expect("turtle should parse");
        graph
    }

    #[test]
    fn parses_prefixed_statement() {
        let graph = parse(
            "@prefix ex: <http://example.org/> .\n\
             ex:Person a <http://www.w3.org/2002/07/owl#Class> .",
        );
        let person = Node::named("http://example.org/Person");
        assert!(graph.has_type(&person, vocab::owl::CLASS));
        assert_eq!(graph.namespace_map().get("ex"), Some("http://example.org/"));
    }

    #[test]
    fn parses_language_tagged_literals() {
        let graph = parse(
            "@prefix ex: <http://example.org/> .\n\
             @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
             ex:Person rdfs:label \"Person\"@en , \"Persoon\"@nl ;\n\
                 rdfs:comment \"A person\" .",
        );
        let person = Node::named("http://example.org/Person");
        let labels = graph.objects(&person, vocab::rdfs::LABEL);
        assert_eq!(labels.len(), 2);
        assert_eq!(
            labels[0],
            Term::Literal(Literal::tagged("Person", "en"))
        );
        let comments = graph.objects(&person, vocab::rdfs::COMMENT);
        assert_eq!(comments, vec![Term::Literal(Literal::plain("A person"))]);
    }

    #[test]
    fn parses_datatyped_and_numeric_literals() {
        let graph = parse(
            "@prefix ex: <http://example.org/> .\n\
             @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n\
             ex:x ex:age \"42\"^^xsd:integer ; ex:height 1.75 ; ex:alive true .",
        );
        let x = Node::named("http://example.org/x");
        assert_eq!(
            graph.objects(&x, "http://example.org/age"),
            vec![Term::Literal(Literal::typed("42", Iri::new(vocab::xsd::INTEGER)))]
        );
        assert_eq!(
            graph.objects(&x, "http://example.org/height"),
            vec![Term::Literal(Literal::typed("1.75", Iri::new(vocab::xsd::DECIMAL)))]
        );
        assert_eq!(
            graph.objects(&x, "http://example.org/alive"),
            vec![Term::Literal(Literal::typed("true", Iri::new(vocab::xsd::BOOLEAN)))]
        );
    }

    #[test]
    fn parses_blank_node_property_list() {
        let graph = parse(
            "@prefix ex: <http://example.org/> .\n\
             @prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
             @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
             ex:Person rdfs:subClassOf [ a owl:Restriction ; owl:onProperty ex:hasName ] .",
        );
        let person = Node::named("http://example.org/Person");
        let supers = graph.objects(&person, vocab::rdfs::SUB_CLASS_OF);
        assert_eq!(supers.len(), 1);
        let restriction = supers[0].as_node().expect("blank node object");
        assert!(restriction.is_blank());
        assert!(graph.has_type(restriction, vocab::owl::RESTRICTION));
        assert_eq!(
            graph.objects(restriction, vocab::owl::ON_PROPERTY),
            vec![Term::named("http://example.org/hasName")]
        );
    }

    #[test]
    fn expands_collections_to_rdf_lists() {
        let graph = parse(
            "@prefix ex: <http://example.org/> .\n\
             @prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
             ex:PersonOrAnimal owl:unionOf ( ex:Person ex:Animal ) .",
        );
        let union = Node::named("http://example.org/PersonOrAnimal");
        let head = graph.objects(&union, vocab::owl::UNION_OF);
        assert_eq!(head.len(), 1);
        let mut cell = head[0].as_node().unwrap().clone();

        let first = graph.objects(&cell, vocab::rdf::FIRST);
        assert_eq!(first, vec![Term::named("http://example.org/Person")]);
        cell = graph.objects(&cell, vocab::rdf::REST)[0]
            .as_node()
            .unwrap()
            .clone();
        assert_eq!(
            graph.objects(&cell, vocab::rdf::FIRST),
            vec![Term::named("http://example.org/Animal")]
        );
        assert_eq!(
            graph.objects(&cell, vocab::rdf::REST),
            vec![Term::named(vocab::rdf::NIL)]
        );
    }

    #[test]
    fn resolves_relative_iris_against_base() {
        let mut graph = MemoryGraph::new();
        read(
            &mut graph,
            "<#Person> a <http://www.w3.org/2002/07/owl#Class> .",
            Some("http://example.org/onto"),
        )
        .unwrap();
        assert!(graph.has_type(
            &Node::named("http://example.org/onto#Person"),
            vocab::owl::CLASS
        ));
    }

    #[test]
    fn base_directive_applies_to_following_iris() {
        let graph = parse(
            "@base <http://example.org/vocab/> .\n\
             <Person> a <http://www.w3.org/2002/07/owl#Class> .",
        );
        assert!(graph.has_type(
            &Node::named("http://example.org/vocab/Person"),
            vocab::owl::CLASS
        ));
    }

    #[test]
    fn undefined_prefix_is_an_error() {
        let mut graph = MemoryGraph::new();
        let result = read(&mut graph, "nope:Person a nope:Thing .", None);
        assert!(matches!(result, Err(GraphError::Syntax { .. })));
    }

    #[test]
    fn unterminated_statement_is_an_error() {
        let mut graph = MemoryGraph::new();
        let result = read(
            &mut graph,
            "@prefix ex: <http://example.org/> .\nex:a ex:b ex:c",
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn shared_blank_labels_map_to_one_node() {
        let graph = parse(
            "@prefix ex: <http://example.org/> .\n\
             _:x ex:p ex:a .\n\
             _:x ex:p ex:b .",
        );
        let blanks: Vec<Node> = graph
            .resources()
            .into_iter()
            .filter(|n| n.is_blank())
            .collect();
        assert_eq!(blanks.len(), 1);
        assert_eq!(graph.objects(&blanks[0], "http://example.org/p").len(), 2);
    }
}
