//! JSON-LD reader
//!
//! Walks the common JSON-LD profile with `serde_json`: an object-form
//! `@context` mapping prefixes and terms, `@graph` arrays, node objects with
//! `@id`/`@type`, `@value`/`@language`/`@type` literal objects, `@list`
//! arrays and nested node objects. Anonymous nodes get fresh blank labels.

use crate::graph::GraphError;
use crate::memory::MemoryGraph;
use mimizuku_core::{vocab, Iri, Literal, Node, Term, Triple};
use serde_json::Value;
use std::collections::HashMap;

const FORMAT: &str = "json-ld";

fn err(message: impl Into<String>) -> GraphError {
    GraphError::syntax(FORMAT, message)
}

pub fn read(graph: &mut MemoryGraph, data: &str) -> Result<(), GraphError> {
    let document: Value =
        serde_json::from_str(data).map_err(|e| err(format!("invalid JSON: {}", e)))?;

    let mut context = Context::default();
    if let Some(ctx) = document.get("@context") {
        context.load(ctx, graph)?;
    }

    match &document {
        Value::Object(obj) => {
            if let Some(nodes) = obj.get("@graph") {
                for node in as_array(nodes) {
                    walk_node(graph, &context, node)?;
                }
            } else {
                walk_node(graph, &context, &document)?;
            }
        }
        Value::Array(nodes) => {
            for node in nodes {
                walk_node(graph, &context, node)?;
            }
        }
        _ => return Err(err("top-level value must be an object or array")),
    }
    Ok(())
}

/// Active context: prefix and term mappings.
#[derive(Debug, Default)]
struct Context {
    terms: HashMap<String, String>,
}

impl Context {
    fn load(&mut self, ctx: &Value, graph: &mut MemoryGraph) -> Result<(), GraphError> {
        let Value::Object(entries) = ctx else {
            // remote and array contexts are out of scope; ignore quietly
            return Ok(());
        };
        for (key, value) in entries {
            if key.starts_with('@') {
                continue;
            }
            let iri = match value {
                Value::String(s) => s.clone(),
                Value::Object(def) => match def.get("@id") {
                    Some(Value::String(s)) => s.clone(),
                    _ => continue,
                },
                _ => continue,
            };
            // a mapping ending in '#' or '/' is a namespace prefix declaration
            if iri.ends_with('#') || iri.ends_with('/') {
                graph.register_prefix(key.clone(), iri.clone());
            }
            self.terms.insert(key.clone(), iri);
        }
        Ok(())
    }

    /// Expand a term, prefixed name or absolute IRI; None for keys that do
    /// not map to an IRI.
    fn expand(&self, name: &str) -> Option<String> {
        if let Some(iri) = self.terms.get(name) {
            return Some(iri.clone());
        }
        if let Some((prefix, local)) = name.split_once(':') {
            if let Some(namespace) = self.terms.get(prefix) {
                return Some(format!("{}{}", namespace, local));
            }
            // "http://..." and friends pass through as-is
            return Some(name.to_string());
        }
        None
    }
}

fn as_array(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

fn walk_node(graph: &mut MemoryGraph, context: &Context, value: &Value) -> Result<Node, GraphError> {
    let Value::Object(obj) = value else {
        return Err(err("node must be a JSON object"));
    };

    let subject = match obj.get("@id") {
        Some(Value::String(id)) => {
            if let Some(label) = id.strip_prefix("_:") {
                // document-scoped blank labels keep their identity
                Node::blank(format!("doc-{}", label))
            } else {
                Node::named(context.expand(id).unwrap_or_else(|| id.clone()))
            }
        }
        _ => graph.fresh_blank(),
    };
    graph.register_node(subject.clone());

    if let Some(types) = obj.get("@type") {
        for t in as_array(types) {
            if let Value::String(type_name) = t {
                let iri = context
                    .expand(type_name)
                    .unwrap_or_else(|| type_name.clone());
                graph.insert(Triple::new(
                    subject.clone(),
                    Iri::new(vocab::rdf::TYPE),
                    Term::named(iri),
                ));
            }
        }
    }

    for (key, value) in obj {
        if key.starts_with('@') {
            continue;
        }
        let Some(predicate) = context.expand(key) else {
            continue; // unmapped term with no prefix: not an IRI, skip
        };
        for item in as_array(value) {
            let object = object_term(graph, context, item)?;
            graph.insert(Triple::new(
                subject.clone(),
                Iri::new(predicate.clone()),
                object,
            ));
        }
    }

    Ok(subject)
}

fn object_term(
    graph: &mut MemoryGraph,
    context: &Context,
    value: &Value,
) -> Result<Term, GraphError> {
    match value {
        Value::String(s) => Ok(Term::Literal(Literal::plain(s.clone()))),
        Value::Bool(b) => Ok(Term::Literal(Literal::typed(
            b.to_string(),
            Iri::new(vocab::xsd::BOOLEAN),
        ))),
        Value::Number(n) => {
            let datatype = if n.is_i64() || n.is_u64() {
                vocab::xsd::INTEGER
            } else {
                vocab::xsd::DOUBLE
            };
            Ok(Term::Literal(Literal::typed(n.to_string(), Iri::new(datatype))))
        }
        Value::Object(obj) => {
            if let Some(v) = obj.get("@value") {
                let text = match v {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => return Err(err("@value must be a scalar")),
                };
                if let Some(Value::String(lang)) = obj.get("@language") {
                    return Ok(Term::Literal(Literal::tagged(text, lang.clone())));
                }
                if let Some(Value::String(dt)) = obj.get("@type") {
                    let iri = context.expand(dt).unwrap_or_else(|| dt.clone());
                    return Ok(Term::Literal(Literal::typed(text, Iri::new(iri))));
                }
                return Ok(Term::Literal(Literal::plain(text)));
            }
            if let Some(items) = obj.get("@list") {
                return Ok(Term::Node(build_list(graph, context, items)?));
            }
            if obj.len() == 1 {
                if let Some(Value::String(id)) = obj.get("@id") {
                    let node = if let Some(label) = id.strip_prefix("_:") {
                        Node::blank(format!("doc-{}", label))
                    } else {
                        Node::named(context.expand(id).unwrap_or_else(|| id.clone()))
                    };
                    graph.register_node(node.clone());
                    return Ok(Term::Node(node));
                }
            }
            // embedded node object
            Ok(Term::Node(walk_node(graph, context, value)?))
        }
        _ => Err(err("unsupported object value")),
    }
}

fn build_list(
    graph: &mut MemoryGraph,
    context: &Context,
    items: &Value,
) -> Result<Node, GraphError> {
    let members: Vec<Term> = as_array(items)
        .into_iter()
        .map(|item| object_term(graph, context, item))
        .collect::<Result<_, _>>()?;

    if members.is_empty() {
        let nil = Node::named(vocab::rdf::NIL);
        graph.register_node(nil.clone());
        return Ok(nil);
    }

    let cells: Vec<Node> = members.iter().map(|_| graph.fresh_blank()).collect();
    for (i, member) in members.into_iter().enumerate() {
        graph.insert(Triple::new(
            cells[i].clone(),
            Iri::new(vocab::rdf::FIRST),
            member,
        ));
        let rest = if i + 1 < cells.len() {
            Term::Node(cells[i + 1].clone())
        } else {
            Term::named(vocab::rdf::NIL)
        };
        graph.insert(Triple::new(cells[i].clone(), Iri::new(vocab::rdf::REST), rest));
    }
    Ok(cells[0].clone())
}
