//! Namespace prefix table
//!
//! Explicit, snapshot-style prefix handling: a graph carries its own
//! `PrefixTable`, seeded from the frozen well-known defaults and extended by
//! the declarations found during parsing. Toolkit functions receive the table
//! as an argument; there is no mutable global registry.

use crate::term::Iri;
use crate::vocab;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

lazy_static! {
    /// Frozen default table of well-known prefixes, built once per process.
    static ref WELL_KNOWN: PrefixTable = {
        let mut table = PrefixTable::new();
        table.insert("rdf", vocab::rdf::NS);
        table.insert("rdfs", vocab::rdfs::NS);
        table.insert("owl", vocab::owl::NS);
        table.insert("xsd", vocab::xsd::NS);
        table.insert("skos", vocab::skos::NS);
        table.insert("sh", vocab::sh::NS);
        table.insert("dcterms", vocab::dcterms::NS);
        table.insert("foaf", "http://xmlns.com/foaf/0.1/");
        table
    };
}

/// Prefix-to-namespace mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTable {
    entries: BTreeMap<String, String>,
}

impl PrefixTable {
    /// Empty table.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The frozen well-known defaults (rdf, rdfs, owl, xsd, skos, sh, ...).
    pub fn well_known() -> &'static PrefixTable {
        &WELL_KNOWN
    }

    /// Fresh table pre-seeded with the well-known defaults.
    pub fn with_well_known() -> Self {
        WELL_KNOWN.clone()
    }

    /// Register a prefix. Later registrations win for the same prefix.
    pub fn insert<P: Into<String>, N: Into<String>>(&mut self, prefix: P, namespace: N) {
        self.entries.insert(prefix.into(), namespace.into());
    }

    /// Namespace registered under `prefix`, if any.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, n)| (p.as_str(), n.as_str()))
    }

    /// Snapshot as an ordinary map (prefix -> namespace IRI).
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Shorten an IRI to `prefix:localPart` using the longest registered
    /// namespace that is a prefix of it; returns the IRI unchanged when no
    /// namespace matches.
    pub fn shorten(&self, iri: &str) -> String {
        let mut best: Option<(&str, &str)> = None;
        for (prefix, namespace) in &self.entries {
            if !namespace.is_empty() && iri.starts_with(namespace.as_str()) {
                match best {
                    Some((_, ns)) if ns.len() >= namespace.len() => {}
                    _ => best = Some((prefix, namespace)),
                }
            }
        }
        match best {
            Some((prefix, namespace)) => format!("{}:{}", prefix, &iri[namespace.len()..]),
            None => iri.to_string(),
        }
    }

    /// Expand a `prefix:localPart` name against this table.
    pub fn expand(&self, qname: &str) -> Option<Iri> {
        let (prefix, local) = qname.split_once(':')?;
        let namespace = self.get(prefix)?;
        Some(Iri::new(format!("{}{}", namespace, local)))
    }
}

impl FromIterator<(String, String)> for PrefixTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
