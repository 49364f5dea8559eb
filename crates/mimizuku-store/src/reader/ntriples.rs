//! N-Triples reader
//!
//! Strict line-oriented reader: one triple per line, absolute IRIs only,
//! blank node labels and literals with optional language tag or datatype.

use crate::graph::GraphError;
use crate::memory::MemoryGraph;
use mimizuku_core::{Iri, Literal, Node, Term, Triple};
use std::collections::HashMap;

const FORMAT: &str = "n-triples";

fn err(line_no: usize, message: impl Into<String>) -> GraphError {
    GraphError::syntax(FORMAT, format!("line {}: {}", line_no + 1, message.into()))
}

pub fn read(graph: &mut MemoryGraph, data: &str) -> Result<(), GraphError> {
    let mut blanks: HashMap<String, Node> = HashMap::new();
    for (line_no, raw_line) in data.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut scanner = Scanner {
            chars: line.chars().collect(),
            pos: 0,
            line_no,
        };

        let subject = scanner.subject(graph, &mut blanks)?;
        scanner.skip_ws();
        let predicate = scanner.iri()?;
        scanner.skip_ws();
        let object = scanner.object(graph, &mut blanks)?;
        scanner.skip_ws();
        if scanner.bump() != Some('.') {
            return Err(err(line_no, "expected terminating '.'"));
        }

        graph.insert(Triple::new(subject, Iri::new(predicate), object));
    }
    Ok(())
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line_no: usize,
}

impl Scanner {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while self.peek().map_or(false, |c| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn fail(&self, message: impl Into<String>) -> GraphError {
        err(self.line_no, message)
    }

    fn iri(&mut self) -> Result<String, GraphError> {
        if self.bump() != Some('<') {
            return Err(self.fail("expected '<'"));
        }
        let mut iri = String::new();
        loop {
            match self.bump() {
                Some('>') => return Ok(iri),
                Some(c) => iri.push(c),
                None => return Err(self.fail("unterminated IRI")),
            }
        }
    }

    fn blank_label(&mut self) -> Result<String, GraphError> {
        // caller saw '_'
        self.bump();
        if self.bump() != Some(':') {
            return Err(self.fail("expected '_:'"));
        }
        let mut label = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                break;
            }
            label.push(c);
            self.pos += 1;
        }
        if label.is_empty() {
            return Err(self.fail("empty blank node label"));
        }
        Ok(label)
    }

    fn subject(
        &mut self,
        graph: &mut MemoryGraph,
        blanks: &mut HashMap<String, Node>,
    ) -> Result<Node, GraphError> {
        self.skip_ws();
        match self.peek() {
            Some('<') => {
                let node = Node::named(self.iri()?);
                graph.register_node(node.clone());
                Ok(node)
            }
            Some('_') => {
                let label = self.blank_label()?;
                Ok(blank_for(graph, blanks, &label))
            }
            _ => Err(self.fail("expected IRI or blank node subject")),
        }
    }

    fn object(
        &mut self,
        graph: &mut MemoryGraph,
        blanks: &mut HashMap<String, Node>,
    ) -> Result<Term, GraphError> {
        match self.peek() {
            Some('<') => Ok(Term::named(self.iri()?)),
            Some('_') => {
                let label = self.blank_label()?;
                Ok(Term::Node(blank_for(graph, blanks, &label)))
            }
            Some('"') => self.literal(),
            _ => Err(self.fail("expected IRI, blank node or literal object")),
        }
    }

    fn literal(&mut self) -> Result<Term, GraphError> {
        self.bump(); // opening quote
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => break,
                Some('\\') => match self.bump() {
                    Some('t') => value.push('\t'),
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('"') => value.push('"'),
                    Some('\\') => value.push('\\'),
                    Some('u') => value.push(self.unicode_escape(4)?),
                    Some('U') => value.push(self.unicode_escape(8)?),
                    Some(c) => return Err(self.fail(format!("invalid escape '\\{}'", c))),
                    None => return Err(self.fail("unterminated escape")),
                },
                Some(c) => value.push(c),
                None => return Err(self.fail("unterminated literal")),
            }
        }

        match self.peek() {
            Some('@') => {
                self.bump();
                let mut tag = String::new();
                while let Some(c) = self.peek() {
                    if c.is_ascii_alphanumeric() || c == '-' {
                        tag.push(c);
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                if tag.is_empty() {
                    return Err(self.fail("empty language tag"));
                }
                Ok(Term::Literal(Literal::tagged(value, tag)))
            }
            Some('^') => {
                self.bump();
                if self.bump() != Some('^') {
                    return Err(self.fail("expected '^^'"));
                }
                let datatype = self.iri()?;
                Ok(Term::Literal(Literal::typed(value, Iri::new(datatype))))
            }
            _ => Ok(Term::Literal(Literal::plain(value))),
        }
    }

    fn unicode_escape(&mut self, len: usize) -> Result<char, GraphError> {
        let mut code = 0u32;
        for _ in 0..len {
            let c = self.bump().ok_or_else(|| self.fail("unterminated escape"))?;
            let digit = c
                .to_digit(16)
                .ok_or_else(|| self.fail(format!("invalid hex digit '{}'", c)))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| self.fail(format!("invalid code point U+{:X}", code)))
    }
}

fn blank_for(graph: &mut MemoryGraph, blanks: &mut HashMap<String, Node>, label: &str) -> Node {
    if let Some(node) = blanks.get(label) {
        return node.clone();
    }
    let node = graph.fresh_blank();
    blanks.insert(label.to_string(), node.clone());
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RdfGraph;
    use mimizuku_core::vocab;

    #[test]
    fn parses_simple_document() {
        let mut graph = MemoryGraph::new();
        read(
            &mut graph,
            "<http://example.org/Person> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> .\n\
             <http://example.org/Person> <http://www.w3.org/2000/01/rdf-schema#label> \"Person\"@en .\n\
             # a comment line\n\
             _:b <http://example.org/p> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> .",
        )
        .unwrap();

        let person = Node::named("http://example.org/Person");
        assert!(graph.has_type(&person, vocab::owl::CLASS));
        assert_eq!(
            graph.objects(&person, vocab::rdfs::LABEL),
            vec![Term::Literal(Literal::tagged("Person", "en"))]
        );
        assert_eq!(graph.triple_count(), 3);
    }

    #[test]
    fn rejects_unterminated_line() {
        let mut graph = MemoryGraph::new();
        let result = read(&mut graph, "<http://a> <http://b> <http://c>");
        assert!(matches!(result, Err(GraphError::Syntax { .. })));
    }

    #[test]
    fn rejects_prefixed_names() {
        let mut graph = MemoryGraph::new();
        assert!(read(&mut graph, "ex:a ex:b ex:c .").is_err());
    }
}
