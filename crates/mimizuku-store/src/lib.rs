//! # Mimizuku Store
//!
//! インメモリ RDF トリプルストアとシリアライゼーションリーダ
//!
//! An indexed in-memory triple store behind the [`RdfGraph`] trait,
//! together with readers for the four supported serializations:
//! Turtle, RDF/XML, JSON-LD and N-Triples.

pub mod graph;
pub mod memory;
pub mod reader;

pub use graph::{GraphError, RdfGraph};
pub use memory::MemoryGraph;
