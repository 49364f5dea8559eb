//! # Mimizuku Parser
//!
//! オントロジーパーサ: フォーマット検出・リソース内省・抽出
//!
//! The orchestration layer of the Mimizuku stack: format handlers sniff and
//! parse RDF serializations into a graph, the introspection toolkit walks
//! resources, and the extractors assemble a typed [`ParsedOntology`].
//!
//! ```
//! use mimizuku_parser::{OntologyParser, ParseOptions};
//!
//! let parser = OntologyParser::new();
//! let ontology = parser.parse(
//!     "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
//!      @prefix ex: <http://example.org/> .\n\
//!      ex:Person a owl:Class .",
//!     &ParseOptions::new(),
//! ).unwrap();
//! assert!(ontology.classes.contains_key("http://example.org/Person"));
//! ```

pub mod error;
pub mod extract;
pub mod handler;
pub mod inspect;
pub mod model;
pub mod orchestrator;

pub use error::ParserError;
pub use handler::{
    JsonLdHandler, NTriplesHandler, RdfFormatHandler, RdfXmlHandler, TurtleHandler,
};
pub use model::{ParsedOntology, ParsedRdf, RdfSummary};
pub use orchestrator::{OntologyParser, ParseOptions};
