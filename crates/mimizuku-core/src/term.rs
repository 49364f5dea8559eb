//! RDF term and triple data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// RDF IRI wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Iri(pub String);

impl Iri {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Iri::new(s)
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Iri::new(s)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// RDF literal: a lexical value with an optional language tag or datatype.
///
/// A literal is never both language-tagged and datatyped in this model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    pub language: Option<String>,
    pub datatype: Option<Iri>,
}

impl Literal {
    /// Plain literal without language tag or datatype.
    pub fn plain<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// Language-tagged literal.
    pub fn tagged<S: Into<String>, L: Into<String>>(value: S, language: L) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    /// Datatyped literal.
    pub fn typed<S: Into<String>>(value: S, datatype: Iri) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: Some(datatype),
        }
    }

    /// Language tag key used in multilingual maps; untagged literals key to "none".
    pub fn language_key(&self) -> &str {
        self.language.as_deref().unwrap_or("none")
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A triple subject: either a named resource or a blank node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    Named(Iri),
    Blank(String),
}

impl Node {
    pub fn named<S: Into<String>>(iri: S) -> Self {
        Node::Named(Iri::new(iri))
    }

    pub fn blank<S: Into<String>>(label: S) -> Self {
        Node::Blank(label.into())
    }

    /// True iff the node has no IRI.
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// The node's IRI, if it is named.
    pub fn iri(&self) -> Option<&Iri> {
        match self {
            Node::Named(iri) => Some(iri),
            Node::Blank(_) => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Named(iri) => write!(f, "{}", iri),
            Node::Blank(label) => write!(f, "_:{}", label),
        }
    }
}

/// A triple object: a resource, a blank node, or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Node(Node),
    Literal(Literal),
}

impl Term {
    pub fn named<S: Into<String>>(iri: S) -> Self {
        Term::Node(Node::named(iri))
    }

    pub fn blank<S: Into<String>>(label: S) -> Self {
        Term::Node(Node::blank(label))
    }

    pub fn literal(lit: Literal) -> Self {
        Term::Literal(lit)
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Term::Node(node) => Some(node),
            Term::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            Term::Node(_) => None,
        }
    }

    /// The IRI when this term is a named resource.
    pub fn iri(&self) -> Option<&Iri> {
        self.as_node().and_then(Node::iri)
    }

    /// Scalar rendering: IRI string for named resources, blank label for
    /// blank nodes, lexical value for literals.
    pub fn lexical(&self) -> String {
        match self {
            Term::Node(node) => node.to_string(),
            Term::Literal(lit) => lit.value.clone(),
        }
    }
}

impl From<Node> for Term {
    fn from(node: Node) -> Self {
        Term::Node(node)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

/// RDF Triple representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Node,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Node, predicate: Iri, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}
