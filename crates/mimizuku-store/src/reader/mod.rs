//! Concrete RDF serialization readers feeding a [`MemoryGraph`](crate::MemoryGraph).

pub mod jsonld;
pub mod ntriples;
pub mod rdfxml;
pub mod turtle;
