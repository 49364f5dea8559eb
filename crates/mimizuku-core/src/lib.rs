//! # Mimizuku Core
//!
//! RDF データモデルと語彙定義 (Mimizuku オントロジーパーサの基盤)
//!
//! Typed RDF terms (IRI / blank node / literal), well-known vocabulary
//! constants, prefix tables and IRI decomposition helpers shared by the
//! store and parser crates.

pub mod iri;
pub mod prefix;
pub mod term;
pub mod vocab;

pub use iri::{humanize_local_name, local_name, namespace};
pub use prefix::PrefixTable;
pub use term::{Iri, Literal, Node, Term, Triple};
