//! Format handler port
//!
//! One handler per serialization format: cheap sniffing plus delegation to
//! the store's readers. Sniffing is heuristic and never fails; a false
//! positive simply means `parse` reports a clean error.

use crate::error::ParserError;
use crate::model::ParsedRdf;
use mimizuku_store::{MemoryGraph, RdfGraph};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A handler for exactly one RDF serialization format.
pub trait RdfFormatHandler {
    /// Cheap heuristic check. Must never fail; false positives are tolerated
    /// as long as `parse` then fails cleanly.
    fn can_handle(&self, content: &str) -> bool;

    /// Parse the content into a [`ParsedRdf`].
    fn parse(&self, content: &str) -> Result<ParsedRdf, ParserError>;

    /// Stable lowercase format identifier.
    fn format_name(&self) -> &'static str;
}

fn parse_into_graph(format: &'static str, content: &str) -> Result<ParsedRdf, ParserError> {
    let mut graph = MemoryGraph::new();
    let added = graph
        .parse(content, format, None)
        .map_err(|e| ParserError::from_graph(format, e))?;
    tracing::debug!(format, triples = added, "format handler parsed content");

    let mut metadata = BTreeMap::new();
    metadata.insert("triple_count".to_string(), json!(added));
    Ok(ParsedRdf::new(Arc::new(graph), format, content, metadata))
}

/// JSON-LD: a JSON document carrying JSON-LD keywords.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLdHandler;

impl RdfFormatHandler for JsonLdHandler {
    fn can_handle(&self, content: &str) -> bool {
        let trimmed = content.trim_start();
        (trimmed.starts_with('{') || trimmed.starts_with('['))
            && ["\"@context\"", "\"@id\"", "\"@graph\"", "\"@type\""]
                .iter()
                .any(|keyword| content.contains(keyword))
    }

    fn parse(&self, content: &str) -> Result<ParsedRdf, ParserError> {
        parse_into_graph(self.format_name(), content)
    }

    fn format_name(&self) -> &'static str {
        "json-ld"
    }
}

/// RDF/XML: an XML document in the RDF namespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct RdfXmlHandler;

impl RdfFormatHandler for RdfXmlHandler {
    fn can_handle(&self, content: &str) -> bool {
        let trimmed = content.trim_start();
        trimmed.starts_with('<')
            && (content.contains("<rdf:RDF")
                || content.contains("http://www.w3.org/1999/02/22-rdf-syntax-ns#"))
    }

    fn parse(&self, content: &str) -> Result<ParsedRdf, ParserError> {
        parse_into_graph(self.format_name(), content)
    }

    fn format_name(&self) -> &'static str {
        "rdf/xml"
    }
}

/// Turtle: prefix/base directives or the `a` type shorthand.
#[derive(Debug, Default, Clone, Copy)]
pub struct TurtleHandler;

impl RdfFormatHandler for TurtleHandler {
    fn can_handle(&self, content: &str) -> bool {
        if content.contains("@prefix") || content.contains("@base") {
            return true;
        }
        content.lines().any(|line| {
            let line = line.trim_start();
            line.starts_with("PREFIX ") || line.starts_with("BASE ")
        }) || content.contains(" a ")
    }

    fn parse(&self, content: &str) -> Result<ParsedRdf, ParserError> {
        parse_into_graph(self.format_name(), content)
    }

    fn format_name(&self) -> &'static str {
        "turtle"
    }
}

/// N-Triples: one absolute-IRI statement per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NTriplesHandler;

impl RdfFormatHandler for NTriplesHandler {
    fn can_handle(&self, content: &str) -> bool {
        let mut statements = 0;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if !(line.starts_with('<') || line.starts_with("_:")) || !line.ends_with('.') {
                return false;
            }
            statements += 1;
        }
        statements > 0
    }

    fn parse(&self, content: &str) -> Result<ParsedRdf, ParserError> {
        parse_into_graph(self.format_name(), content)
    }

    fn format_name(&self) -> &'static str {
        "n-triples"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsonld_sniffing() {
        let handler = JsonLdHandler;
        assert!(handler.can_handle(r#"{"@context": {}, "@id": "ex:a"}"#));
        assert!(handler.can_handle("  [{\"@id\": \"ex:a\"}]"));
        assert!(!handler.can_handle(r#"{"name": "not json-ld"}"#));
        assert!(!handler.can_handle("@prefix ex: <http://example.org/> ."));
    }

    #[test]
    fn rdfxml_sniffing() {
        let handler = RdfXmlHandler;
        assert!(handler.can_handle(
            "<?xml version=\"1.0\"?>\n<rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\"/>"
        ));
        assert!(!handler.can_handle("<html><body/></html>"));
        assert!(!handler.can_handle("@prefix ex: <http://example.org/> ."));
    }

    #[test]
    fn turtle_sniffing() {
        let handler = TurtleHandler;
        assert!(handler.can_handle("@prefix ex: <http://example.org/> ."));
        assert!(handler.can_handle("PREFIX ex: <http://example.org/>"));
        assert!(handler.can_handle("<http://example.org/a> a <http://example.org/B> ."));
        assert!(!handler.can_handle(r#"{"@context": {}}"#));
    }

    #[test]
    fn ntriples_sniffing_requires_every_line_to_be_a_statement() {
        let handler = NTriplesHandler;
        assert!(handler.can_handle(
            "<http://example.org/a> <http://example.org/p> \"x\" .\n\
             _:b <http://example.org/p> <http://example.org/o> ."
        ));
        assert!(!handler.can_handle("@prefix ex: <http://example.org/> ."));
        assert!(!handler.can_handle(""));
    }

    #[test]
    fn sniffers_never_panic_on_junk() {
        let junk = "\u{0}\u{1}<<<>>>@@@ not rdf at all }{";
        for handler in [
            &JsonLdHandler as &dyn RdfFormatHandler,
            &RdfXmlHandler,
            &TurtleHandler,
            &NTriplesHandler,
        ] {
            let _ = handler.can_handle(junk);
        }
    }

    #[test]
    fn parse_records_triple_count_metadata() {
        let rdf = TurtleHandler
            .parse("@prefix ex: <http://example.org/> . ex:a ex:p ex:b .")
            .unwrap();
        assert_eq!(rdf.format, "turtle");
        assert_eq!(rdf.metadata.get("triple_count"), Some(&serde_json::json!(1)));
        assert_eq!(rdf.resource_count(), 2);
    }

    #[test]
    fn parse_failure_is_a_parse_error() {
        let result = TurtleHandler.parse("@prefix broken");
        assert!(matches!(result, Err(ParserError::Parse { .. })));
    }
}
