//! Ontology parser orchestrator
//!
//! Selects a format handler, delegates parsing, then drives the extractors
//! to assemble a [`ParsedOntology`].

use crate::error::ParserError;
use crate::extract;
use crate::handler::{
    JsonLdHandler, NTriplesHandler, RdfFormatHandler, RdfXmlHandler, TurtleHandler,
};
use crate::model::ParsedOntology;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// String-keyed scalar options for [`OntologyParser::parse`].
///
/// Recognized keys: `format` forces handler selection by name, `language`
/// sets the preferred label/comment language. Unknown keys are ignored,
/// never rejected.
#[derive(Debug, Default, Clone)]
pub struct ParseOptions {
    entries: BTreeMap<String, Value>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    fn str_value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn format(&self) -> Option<&str> {
        self.str_value("format")
    }

    pub fn language(&self) -> Option<&str> {
        self.str_value("language")
    }
}

impl From<BTreeMap<String, Value>> for ParseOptions {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self { entries }
    }
}

/// Format detection and extraction front door.
///
/// Handler registration order is a stable contract: json-ld, rdf/xml,
/// turtle, n-triples, with the most specific sniffers first. Selection
/// is a linear scan returning the first match.
pub struct OntologyParser {
    handlers: Vec<Box<dyn RdfFormatHandler>>,
}

impl Default for OntologyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologyParser {
    /// Parser with the default handler set in the documented order.
    pub fn new() -> Self {
        Self {
            handlers: vec![
                Box::new(JsonLdHandler),
                Box::new(RdfXmlHandler),
                Box::new(TurtleHandler),
                Box::new(NTriplesHandler),
            ],
        }
    }

    /// Parser with a caller-supplied handler list (tests, custom formats).
    pub fn with_handlers(handlers: Vec<Box<dyn RdfFormatHandler>>) -> Self {
        Self { handlers }
    }

    /// True iff any registered handler recognizes the content. Never fails.
    pub fn can_parse(&self, content: &str) -> bool {
        self.handlers.iter().any(|h| h.can_handle(content))
    }

    /// Format names in registration order.
    pub fn supported_formats(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.format_name()).collect()
    }

    fn select_handler(
        &self,
        content: &str,
        options: &ParseOptions,
    ) -> Result<&dyn RdfFormatHandler, ParserError> {
        if let Some(forced) = options.format() {
            return self
                .handlers
                .iter()
                .find(|h| h.format_name() == forced)
                .map(|handler| &**handler)
                .ok_or_else(|| {
                    ParserError::FormatDetection(format!(
                        "requested format '{}' has no registered handler",
                        forced
                    ))
                });
        }
        self.handlers
            .iter()
            .find(|h| h.can_handle(content))
            .map(|handler| &**handler)
            .ok_or_else(|| {
                ParserError::FormatDetection(
                    "no registered handler recognized the content".to_string(),
                )
            })
    }

    /// Parse ontology content into a [`ParsedOntology`].
    pub fn parse(
        &self,
        content: &str,
        options: &ParseOptions,
    ) -> Result<ParsedOntology, ParserError> {
        let handler = self.select_handler(content, options)?;
        tracing::debug!(format = handler.format_name(), "selected format handler");

        let rdf = handler.parse(content)?;
        let graph = rdf.graph.as_ref();
        let language = options.language();

        let classes = extract::extract_classes(graph, language);
        let properties = extract::extract_properties(graph, language);
        let shapes = extract::extract_shapes(graph, language)?;
        let restrictions = extract::extract_restrictions(graph);
        let prefixes = extract::extract_prefixes(graph);
        let mut metadata = extract::extract_metadata(graph, language);
        metadata.insert("format".to_string(), json!(rdf.format));

        tracing::info!(
            format = %rdf.format,
            classes = classes.len(),
            properties = properties.len(),
            shapes = shapes.len(),
            restrictions = restrictions.len(),
            "assembled parsed ontology"
        );

        Ok(ParsedOntology {
            classes,
            properties,
            shapes,
            restrictions,
            prefixes,
            metadata,
            raw_content: rdf.raw_content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_order_is_stable() {
        let parser = OntologyParser::new();
        assert_eq!(
            parser.supported_formats(),
            vec!["json-ld", "rdf/xml", "turtle", "n-triples"]
        );
    }

    #[test]
    fn can_parse_never_fails_and_detects_turtle() {
        let parser = OntologyParser::new();
        assert!(parser.can_parse("@prefix ex: <http://example.org/> ."));
        assert!(!parser.can_parse("plain prose, nothing like rdf"));
    }

    #[test]
    fn undetectable_content_is_a_format_detection_error() {
        let parser = OntologyParser::new();
        let result = parser.parse("plain prose, nothing like rdf", &ParseOptions::new());
        assert!(matches!(result, Err(ParserError::FormatDetection(_))));
    }

    #[test]
    fn format_option_forces_handler_selection() {
        let parser = OntologyParser::new();
        // content would sniff as n-triples, but the caller insists on turtle
        let options = ParseOptions::new().set("format", "turtle");
        let ontology = parser
            .parse(
                "<http://example.org/a> <http://example.org/p> <http://example.org/b> .",
                &options,
            )
            .unwrap();
        assert_eq!(ontology.metadata["format"], serde_json::json!("turtle"));

        let unknown = ParseOptions::new().set("format", "trig");
        assert!(matches!(
            parser.parse("anything", &unknown),
            Err(ParserError::FormatDetection(_))
        ));
    }

    #[test]
    fn unknown_options_are_ignored() {
        let parser = OntologyParser::new();
        let options = ParseOptions::new()
            .set("verbosity", 3)
            .set("strict", false);
        let ontology = parser
            .parse("@prefix ex: <http://example.org/> . ex:a a ex:B .", &options)
            .unwrap();
        assert_eq!(ontology.metadata["format"], serde_json::json!("turtle"));
    }
}
