//! Parser error taxonomy
//!
//! One closed enum so callers can match a single error type; the variants
//! separate "no handler recognized the content" from "a handler recognized
//! it but parsing failed" from "parsed fine but the ontology structure is
//! wrong".

use mimizuku_store::GraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    /// No registered format handler recognized the content.
    #[error("unable to detect RDF format: {0}")]
    FormatDetection(String),

    /// A handler matched but structural parsing failed.
    #[error("failed to parse {format} content: {message}")]
    Parse {
        format: String,
        message: String,
        #[source]
        source: Option<GraphError>,
    },

    /// Content parsed as RDF but failed ontology-level expectations.
    #[error("ontology validation failed: {0}")]
    Validation(String),

    /// Unclassified upstream failure.
    #[error("{0}")]
    Other(String),
}

impl ParserError {
    /// Wrap an engine-level graph error for the given format.
    pub fn from_graph(format: &str, error: GraphError) -> Self {
        ParserError::Parse {
            format: format.to_string(),
            message: error.to_string(),
            source: Some(error),
        }
    }

    pub fn parse<F: Into<String>, M: Into<String>>(format: F, message: M) -> Self {
        ParserError::Parse {
            format: format.into(),
            message: message.into(),
            source: None,
        }
    }
}
