//! RDF/XML reader
//!
//! Event-driven reader over `quick-xml` following the striped RDF/XML
//! syntax: node elements and property elements alternate down the tree.
//! Handles `rdf:RDF`, `rdf:Description` and typed node elements,
//! `rdf:about`/`rdf:ID`/`rdf:nodeID`, property elements with
//! `rdf:resource`/`rdf:datatype`/`rdf:parseType="Resource"`, `xml:lang`
//! scoping and xmlns prefix declarations.

use crate::graph::GraphError;
use crate::memory::MemoryGraph;
use crate::reader::turtle::resolve_against;
use mimizuku_core::{vocab, Iri, Literal, Node, Term, Triple};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;

const FORMAT: &str = "rdf/xml";

const RDF_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#RDF";
const RDF_DESCRIPTION: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Description";
const RDF_ABOUT: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#about";
const RDF_ID: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#ID";
const RDF_NODE_ID: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nodeID";
const RDF_RESOURCE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#resource";
const RDF_DATATYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#datatype";
const RDF_PARSE_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#parseType";

fn err(message: impl Into<String>) -> GraphError {
    GraphError::syntax(FORMAT, message)
}

/// One XML element's namespace and language scope.
#[derive(Debug, Default, Clone)]
struct Scope {
    namespaces: HashMap<String, String>,
    lang: Option<String>,
}

#[derive(Debug)]
enum Frame {
    /// Inside `<rdf:RDF>`
    Root,
    /// Inside a node element; children are property elements of `subject`
    Node { subject: Node },
    /// Inside a property element; buffers text until the element closes
    Property {
        subject: Node,
        predicate: Iri,
        datatype: Option<Iri>,
        lang: Option<String>,
        text: String,
        has_object: bool,
    },
}

struct RdfXmlReader<'g> {
    graph: &'g mut MemoryGraph,
    base: Option<String>,
    scopes: Vec<Scope>,
    frames: Vec<Frame>,
    node_ids: HashMap<String, Node>,
}

pub fn read(graph: &mut MemoryGraph, data: &str, base: Option<&str>) -> Result<(), GraphError> {
    let mut reader = Reader::from_str(data);
    reader.config_mut().trim_text(true);

    let mut state = RdfXmlReader {
        graph,
        base: base.map(str::to_string),
        scopes: Vec::new(),
        frames: Vec::new(),
        node_ids: HashMap::new(),
    };

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => state.on_start(&e, false)?,
            Ok(Event::Empty(e)) => state.on_start(&e, true)?,
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(|e| err(e.to_string()))?;
                state.on_text(&text);
            }
            Ok(Event::End(_)) => state.on_end()?,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(err(e.to_string())),
        }
    }
    if !state.frames.is_empty() {
        return Err(err("unexpected end of document"));
    }
    Ok(())
}

/// Attributes of one element, split into scope declarations and the rest.
#[derive(Debug, Default)]
struct ElementAttrs {
    /// (resolved IRI, raw value) pairs for non-xmlns, non-xml attributes
    plain: Vec<(String, String)>,
}

impl<'g> RdfXmlReader<'g> {
    fn on_start(&mut self, element: &BytesStart<'_>, empty: bool) -> Result<(), GraphError> {
        let mut scope = Scope {
            namespaces: HashMap::new(),
            lang: self.current_lang(),
        };

        // First pass: namespace declarations and xml:lang
        let mut raw_attrs: Vec<(String, String)> = Vec::new();
        for attr in element.attributes() {
            let attr = attr.map_err(|e| err(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| err(e.to_string()))?
                .to_string();
            if key == "xmlns" {
                scope.namespaces.insert(String::new(), value);
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                self.graph.register_prefix(prefix, value.as_str());
                scope.namespaces.insert(prefix.to_string(), value);
            } else if key == "xml:lang" {
                scope.lang = if value.is_empty() { None } else { Some(value) };
            } else if key == "xml:base" {
                self.base = Some(value);
            } else {
                raw_attrs.push((key, value));
            }
        }
        self.scopes.push(scope);

        // Second pass: resolve remaining attribute names in scope
        let mut attrs = ElementAttrs::default();
        for (key, value) in raw_attrs {
            if !key.contains(':') {
                continue; // unprefixed attributes carry no namespace
            }
            attrs.plain.push((self.resolve_qname(&key)?, value));
        }

        let name = String::from_utf8_lossy(element.name().as_ref()).to_string();
        let resolved = self.resolve_element_name(&name)?;

        let expecting_node = matches!(
            self.frames.last(),
            None | Some(Frame::Root) | Some(Frame::Property { .. })
        );

        let result = if resolved == RDF_RDF && self.frames.is_empty() {
            if !empty {
                self.frames.push(Frame::Root);
            }
            Ok(())
        } else if expecting_node {
            self.node_element(&resolved, &attrs, empty)
        } else {
            self.property_element(&resolved, &attrs, empty)
        };

        if empty {
            self.scopes.pop();
        }
        result
    }

    fn node_element(
        &mut self,
        type_iri: &str,
        attrs: &ElementAttrs,
        empty: bool,
    ) -> Result<(), GraphError> {
        let mut subject = None;
        for (key, value) in &attrs.plain {
            match key.as_str() {
                RDF_ABOUT => {
                    subject = Some(Node::named(resolve_against(self.base.as_deref(), value)));
                }
                RDF_ID => {
                    let reference = format!("#{}", value);
                    subject = Some(Node::named(resolve_against(
                        self.base.as_deref(),
                        &reference,
                    )));
                }
                RDF_NODE_ID => subject = Some(self.blank_for(value)),
                _ => {}
            }
        }
        let subject = match subject {
            Some(node) => {
                self.graph.register_node(node.clone());
                node
            }
            None => self.graph.fresh_blank(),
        };

        if type_iri != RDF_DESCRIPTION {
            self.graph.insert(Triple::new(
                subject.clone(),
                Iri::new(vocab::rdf::TYPE),
                Term::named(type_iri),
            ));
        }

        // Property attributes shorthand
        let lang = self.current_lang();
        for (key, value) in &attrs.plain {
            if matches!(key.as_str(), RDF_ABOUT | RDF_ID | RDF_NODE_ID) {
                continue;
            }
            let literal = match &lang {
                Some(lang) => Literal::tagged(value.clone(), lang.clone()),
                None => Literal::plain(value.clone()),
            };
            self.graph.insert(Triple::new(
                subject.clone(),
                Iri::new(key.clone()),
                Term::Literal(literal),
            ));
        }

        // Link to the enclosing property element, if any
        if let Some(Frame::Property {
            subject: parent,
            predicate,
            has_object,
            ..
        }) = self.frames.last_mut()
        {
            let triple = Triple::new(
                parent.clone(),
                predicate.clone(),
                Term::Node(subject.clone()),
            );
            *has_object = true;
            self.graph.insert(triple);
        }

        if !empty {
            self.frames.push(Frame::Node { subject });
        }
        Ok(())
    }

    fn property_element(
        &mut self,
        predicate: &str,
        attrs: &ElementAttrs,
        empty: bool,
    ) -> Result<(), GraphError> {
        let subject = match self.frames.last() {
            Some(Frame::Node { subject }) => subject.clone(),
            _ => return Err(err("property element outside a node element")),
        };

        let mut object: Option<Term> = None;
        let mut datatype: Option<Iri> = None;
        let mut parse_type_resource = false;
        for (key, value) in &attrs.plain {
            match key.as_str() {
                RDF_RESOURCE => {
                    object = Some(Term::named(resolve_against(self.base.as_deref(), value)));
                }
                RDF_NODE_ID => object = Some(Term::Node(self.blank_for(value))),
                RDF_DATATYPE => datatype = Some(Iri::new(value.clone())),
                RDF_PARSE_TYPE => match value.as_str() {
                    "Resource" => parse_type_resource = true,
                    other => return Err(err(format!("unsupported rdf:parseType '{}'", other))),
                },
                _ => {}
            }
        }

        if parse_type_resource {
            let inner = self.graph.fresh_blank();
            self.graph.insert(Triple::new(
                subject,
                Iri::new(predicate),
                Term::Node(inner.clone()),
            ));
            if !empty {
                self.frames.push(Frame::Node { subject: inner });
            }
            return Ok(());
        }

        if let Some(object) = object {
            if let Term::Node(node) = &object {
                self.graph.register_node(node.clone());
            }
            self.graph
                .insert(Triple::new(subject.clone(), Iri::new(predicate), object));
            if !empty {
                self.frames.push(Frame::Property {
                    subject,
                    predicate: Iri::new(predicate),
                    datatype: None,
                    lang: None,
                    text: String::new(),
                    has_object: true,
                });
            }
            return Ok(());
        }

        if empty {
            // an empty property element is an empty literal
            let literal = self.make_literal(String::new(), datatype);
            self.graph
                .insert(Triple::new(subject, Iri::new(predicate), literal));
            return Ok(());
        }

        let lang = self.current_lang();
        self.frames.push(Frame::Property {
            subject,
            predicate: Iri::new(predicate),
            datatype,
            lang,
            text: String::new(),
            has_object: false,
        });
        Ok(())
    }

    fn on_text(&mut self, text: &str) {
        if let Some(Frame::Property {
            text: buffer,
            has_object: false,
            ..
        }) = self.frames.last_mut()
        {
            buffer.push_str(text);
        }
    }

    fn on_end(&mut self) -> Result<(), GraphError> {
        self.scopes.pop();
        match self.frames.pop() {
            Some(Frame::Property {
                subject,
                predicate,
                datatype,
                lang,
                text,
                has_object,
            }) => {
                if !has_object {
                    let literal = match (datatype, lang) {
                        (Some(datatype), _) => Term::Literal(Literal::typed(text, datatype)),
                        (None, Some(lang)) => Term::Literal(Literal::tagged(text, lang)),
                        (None, None) => Term::Literal(Literal::plain(text)),
                    };
                    self.graph.insert(Triple::new(subject, predicate, literal));
                }
                Ok(())
            }
            Some(Frame::Node { .. }) | Some(Frame::Root) => Ok(()),
            None => Err(err("unbalanced end tag")),
        }
    }

    fn make_literal(&self, text: String, datatype: Option<Iri>) -> Term {
        match (datatype, self.current_lang()) {
            (Some(datatype), _) => Term::Literal(Literal::typed(text, datatype)),
            (None, Some(lang)) => Term::Literal(Literal::tagged(text, lang)),
            (None, None) => Term::Literal(Literal::plain(text)),
        }
    }

    fn current_lang(&self) -> Option<String> {
        self.scopes.last().and_then(|s| s.lang.clone())
    }

    fn blank_for(&mut self, label: &str) -> Node {
        if let Some(node) = self.node_ids.get(label) {
            return node.clone();
        }
        let node = self.graph.fresh_blank();
        self.node_ids.insert(label.to_string(), node.clone());
        node
    }

    fn lookup_namespace(&self, prefix: &str) -> Option<&str> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.namespaces.get(prefix))
            .map(String::as_str)
    }

    /// Resolve `prefix:local` (attributes; the prefix is required).
    fn resolve_qname(&self, name: &str) -> Result<String, GraphError> {
        let (prefix, local) = name
            .split_once(':')
            .ok_or_else(|| err(format!("expected prefixed name, found '{}'", name)))?;
        let namespace = self
            .lookup_namespace(prefix)
            .ok_or_else(|| err(format!("undeclared namespace prefix '{}'", prefix)))?;
        Ok(format!("{}{}", namespace, local))
    }

    /// Resolve an element name; unprefixed names use the default namespace.
    fn resolve_element_name(&self, name: &str) -> Result<String, GraphError> {
        match name.split_once(':') {
            Some((prefix, local)) => {
                let namespace = self
                    .lookup_namespace(prefix)
                    .ok_or_else(|| err(format!("undeclared namespace prefix '{}'", prefix)))?;
                Ok(format!("{}{}", namespace, local))
            }
            None => {
                let namespace = self
                    .lookup_namespace("")
                    .ok_or_else(|| err(format!("no default namespace for '{}'", name)))?;
                Ok(format!("{}{}", namespace, name))
            }
        }
    }
}
