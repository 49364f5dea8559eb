//! Format-agnostic extractors
//!
//! グラフからクラス・プロパティ・シェイプ・制約・メタデータを抽出する
//!
//! Each extractor walks the graph once and renders one map of per-resource
//! records, using the introspection toolkit for label resolution and
//! expression description.

use crate::error::ParserError;
use crate::inspect;
use crate::model::ResourceRecord;
use mimizuku_core::{iri::local_name, vocab, Node, Term};
use mimizuku_store::RdfGraph;
use serde_json::{json, Value};
use std::collections::BTreeMap;

fn json_annotations(graph: &dyn RdfGraph, node: &Node) -> Value {
    let annotations = inspect::extract_custom_annotations(graph, node);
    serde_json::to_value(annotations).unwrap_or(Value::Array(Vec::new()))
}

fn named_of_types(graph: &dyn RdfGraph, types: &[&str]) -> Vec<(Node, String)> {
    let mut seen = Vec::new();
    for rdf_type in types {
        for node in graph.all_of_type(rdf_type) {
            if let Some(iri) = node.iri() {
                let iri = iri.to_string();
                if !seen.iter().any(|(_, existing)| existing == &iri) {
                    seen.push((node, iri));
                }
            }
        }
    }
    seen
}

/// Extract every named `owl:Class` / `rdfs:Class`.
pub fn extract_classes(
    graph: &dyn RdfGraph,
    preferred_lang: Option<&str>,
) -> BTreeMap<String, ResourceRecord> {
    let mut classes = BTreeMap::new();
    for (node, iri) in named_of_types(graph, &[vocab::owl::CLASS, vocab::rdfs::CLASS]) {
        let mut super_classes = Vec::new();
        for object in graph.objects(&node, vocab::rdfs::SUB_CLASS_OF) {
            if let Term::Node(parent) = object {
                if let Some(description) = inspect::describe_class_expression(graph, &parent) {
                    super_classes.push(description);
                }
            }
        }

        let mut record = ResourceRecord::new();
        record.insert("iri".into(), json!(iri));
        record.insert("local_name".into(), json!(local_name(&iri)));
        record.insert(
            "label".into(),
            json!(inspect::resource_label(graph, &node, preferred_lang)),
        );
        record.insert(
            "comment".into(),
            json!(inspect::resource_comment(graph, &node, preferred_lang)),
        );
        record.insert(
            "labels".into(),
            json!(inspect::all_resource_labels(graph, &node)),
        );
        record.insert("super_classes".into(), json!(super_classes));
        record.insert("annotations".into(), json_annotations(graph, &node));
        classes.insert(iri, record);
    }
    classes
}

const PROPERTY_KINDS: &[(&str, &str)] = &[
    (vocab::owl::OBJECT_PROPERTY, "object"),
    (vocab::owl::DATATYPE_PROPERTY, "datatype"),
    (vocab::owl::ANNOTATION_PROPERTY, "annotation"),
    (vocab::rdf::PROPERTY, "rdf"),
];

/// Extract every named property declaration, tagged with its kind.
pub fn extract_properties(
    graph: &dyn RdfGraph,
    preferred_lang: Option<&str>,
) -> BTreeMap<String, ResourceRecord> {
    let mut properties = BTreeMap::new();
    for &(rdf_type, kind) in PROPERTY_KINDS {
        for (node, iri) in named_of_types(graph, &[rdf_type]) {
            if properties.contains_key(&iri) {
                continue;
            }
            let mut record = ResourceRecord::new();
            record.insert("iri".into(), json!(iri));
            record.insert("local_name".into(), json!(local_name(&iri)));
            record.insert("kind".into(), json!(kind));
            record.insert(
                "label".into(),
                json!(inspect::resource_label(graph, &node, preferred_lang)),
            );
            record.insert(
                "comment".into(),
                json!(inspect::resource_comment(graph, &node, preferred_lang)),
            );
            record.insert(
                "domain".into(),
                json!(inspect::named_resource_values(graph, &node, vocab::rdfs::DOMAIN)),
            );
            record.insert(
                "range".into(),
                json!(inspect::named_resource_values(graph, &node, vocab::rdfs::RANGE)),
            );
            record.insert(
                "super_properties".into(),
                json!(inspect::named_resource_values(
                    graph,
                    &node,
                    vocab::rdfs::SUB_PROPERTY_OF
                )),
            );
            record.insert("annotations".into(), json_annotations(graph, &node));
            properties.insert(iri, record);
        }
    }
    properties
}

/// The graph's prefix table as a plain map.
pub fn extract_prefixes(graph: &dyn RdfGraph) -> BTreeMap<String, String> {
    graph.namespace_map().as_map().clone()
}

fn count_value(graph: &dyn RdfGraph, node: &Node, predicate: &str) -> Option<Value> {
    let text = inspect::resource_value(graph, node, predicate)?;
    match text.parse::<i64>() {
        Ok(n) => Some(json!(n)),
        Err(_) => Some(json!(text)),
    }
}

/// Extract `sh:NodeShape` declarations with their property constraints.
///
/// Every `sh:property` blank node must carry `sh:path`; a missing path is an
/// ontology-level validation failure, not a silently skipped constraint.
pub fn extract_shapes(
    graph: &dyn RdfGraph,
    preferred_lang: Option<&str>,
) -> Result<BTreeMap<String, ResourceRecord>, ParserError> {
    let mut shapes = BTreeMap::new();
    for shape in graph.all_of_type(vocab::sh::NODE_SHAPE) {
        let key = shape.to_string();

        let mut constraints = Vec::new();
        for object in graph.objects(&shape, vocab::sh::PROPERTY) {
            let Term::Node(constraint) = object else {
                continue;
            };
            let path = inspect::named_resource_values(graph, &constraint, vocab::sh::PATH)
                .into_iter()
                .next()
                .ok_or_else(|| {
                    ParserError::Validation(format!(
                        "property shape on {} is missing sh:path",
                        key
                    ))
                })?;

            let mut entry = BTreeMap::new();
            entry.insert("path".to_string(), json!(path));
            if let Some(datatype) =
                inspect::named_resource_values(graph, &constraint, vocab::sh::DATATYPE)
                    .into_iter()
                    .next()
            {
                entry.insert("datatype".to_string(), json!(datatype));
            }
            if let Some(class) =
                inspect::named_resource_values(graph, &constraint, vocab::sh::CLASS)
                    .into_iter()
                    .next()
            {
                entry.insert("class".to_string(), json!(class));
            }
            if let Some(min) = count_value(graph, &constraint, vocab::sh::MIN_COUNT) {
                entry.insert("min_count".to_string(), min);
            }
            if let Some(max) = count_value(graph, &constraint, vocab::sh::MAX_COUNT) {
                entry.insert("max_count".to_string(), max);
            }
            constraints.push(Value::Object(entry.into_iter().collect()));
        }

        let mut record = ResourceRecord::new();
        record.insert(
            "target_class".into(),
            json!(inspect::named_resource_values(graph, &shape, vocab::sh::TARGET_CLASS)
                .into_iter()
                .next()),
        );
        record.insert(
            "label".into(),
            json!(inspect::resource_label(graph, &shape, preferred_lang)),
        );
        record.insert("properties".into(), json!(constraints));
        shapes.insert(key, record);
    }
    Ok(shapes)
}

/// Extract anonymous `owl:Restriction` nodes, keyed by their description.
///
/// Only blank restrictions that describe to something are kept; duplicate
/// descriptions get a ` #n` suffix so no restriction silently overwrites
/// another.
pub fn extract_restrictions(graph: &dyn RdfGraph) -> BTreeMap<String, ResourceRecord> {
    let mut restrictions = BTreeMap::new();
    for node in graph.all_of_type(vocab::owl::RESTRICTION) {
        if !node.is_blank() {
            continue;
        }
        let Some(description) = inspect::describe_class_expression(graph, &node) else {
            continue;
        };

        let mut record = ResourceRecord::new();
        record.insert(
            "on_property".into(),
            json!(inspect::named_resource_values(graph, &node, vocab::owl::ON_PROPERTY)
                .into_iter()
                .next()),
        );
        for (key, predicate) in [
            ("some_values_from", vocab::owl::SOME_VALUES_FROM),
            ("all_values_from", vocab::owl::ALL_VALUES_FROM),
            ("has_value", vocab::owl::HAS_VALUE),
        ] {
            if let Some(value) = inspect::resource_value(graph, &node, predicate) {
                record.insert(key.into(), json!(value));
            }
        }
        for (key, predicate) in [
            ("cardinality", vocab::owl::CARDINALITY),
            ("min_cardinality", vocab::owl::MIN_CARDINALITY),
            ("max_cardinality", vocab::owl::MAX_CARDINALITY),
        ] {
            if let Some(value) = count_value(graph, &node, predicate) {
                record.insert(key.into(), value);
            }
        }

        let mut key = description.clone();
        let mut suffix = 2;
        while restrictions.contains_key(&key) {
            key = format!("{} #{}", description, suffix);
            suffix += 1;
        }
        restrictions.insert(key, record);
    }
    restrictions
}

/// Ontology-level metadata: the `owl:Ontology` header plus graph statistics.
pub fn extract_metadata(
    graph: &dyn RdfGraph,
    preferred_lang: Option<&str>,
) -> BTreeMap<String, Value> {
    let mut metadata = BTreeMap::new();
    if let Some(ontology) = graph.all_of_type(vocab::owl::ONTOLOGY).into_iter().next() {
        if let Some(iri) = ontology.iri() {
            metadata.insert("ontology_iri".to_string(), json!(iri.as_str()));
        }
        if let Some(label) = inspect::resource_label(graph, &ontology, preferred_lang) {
            metadata.insert("label".to_string(), json!(label));
        }
        if let Some(comment) = inspect::resource_comment(graph, &ontology, preferred_lang) {
            metadata.insert("comment".to_string(), json!(comment));
        }
        if let Some(version) = inspect::resource_value(graph, &ontology, vocab::owl::VERSION_INFO)
        {
            metadata.insert("version_info".to_string(), json!(version));
        }
        let imports = inspect::named_resource_values(graph, &ontology, vocab::owl::IMPORTS);
        if !imports.is_empty() {
            metadata.insert("imports".to_string(), json!(imports));
        }
    }
    metadata.insert("triple_count".to_string(), json!(graph.triple_count()));
    metadata.insert("resource_count".to_string(), json!(graph.resources().len()));
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimizuku_store::MemoryGraph;

    const ONTOLOGY: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix sh: <http://www.w3.org/ns/shacl#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix ex: <http://example.org/> .

ex:onto a owl:Ontology ;
    rdfs:label "Example ontology"@en ;
    owl:versionInfo "1.2.0" .

ex:Person a owl:Class ;
    rdfs:label "Person"@en ;
    rdfs:subClassOf ex:Agent ;
    rdfs:subClassOf [ a owl:Restriction ;
                      owl:onProperty ex:hasName ;
                      owl:minCardinality 1 ] .

ex:Agent a owl:Class .

ex:hasName a owl:DatatypeProperty ;
    rdfs:label "has name"@en ;
    rdfs:domain ex:Person ;
    rdfs:range xsd:string .

ex:PersonShape a sh:NodeShape ;
    sh:targetClass ex:Person ;
    sh:property [ sh:path ex:hasName ; sh:datatype xsd:string ; sh:minCount 1 ] .
"#;

    fn graph() -> MemoryGraph {
        let mut graph = MemoryGraph::new();
        graph.parse(ONTOLOGY, "turtle", None).unwrap();
        graph
    }

    #[test]
    fn classes_include_described_super_expressions() {
        let classes = extract_classes(&graph(), None);
        assert_eq!(classes.len(), 2);

        let person = &classes["http://example.org/Person"];
        assert_eq!(person["label"], json!("Person"));
        assert_eq!(person["local_name"], json!("Person"));
        let supers = person["super_classes"].as_array().unwrap();
        assert_eq!(supers.len(), 2);
        assert!(supers.contains(&json!("http://example.org/Agent")));
        assert!(supers
            .iter()
            .any(|s| s.as_str().unwrap().contains("Restriction on http://example.org/hasName")));
    }

    #[test]
    fn properties_carry_kind_domain_and_range() {
        let properties = extract_properties(&graph(), None);
        let has_name = &properties["http://example.org/hasName"];
        assert_eq!(has_name["kind"], json!("datatype"));
        assert_eq!(has_name["domain"], json!(["http://example.org/Person"]));
        assert_eq!(
            has_name["range"],
            json!(["http://www.w3.org/2001/XMLSchema#string"])
        );
    }

    #[test]
    fn shapes_require_sh_path() {
        let shapes = extract_shapes(&graph(), None).unwrap();
        let shape = &shapes["http://example.org/PersonShape"];
        assert_eq!(shape["target_class"], json!("http://example.org/Person"));
        let constraints = shape["properties"].as_array().unwrap();
        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0]["path"], json!("http://example.org/hasName"));
        assert_eq!(constraints[0]["min_count"], json!(1));

        let mut broken = MemoryGraph::new();
        broken
            .parse(
                "@prefix sh: <http://www.w3.org/ns/shacl#> .\n\
                 @prefix ex: <http://example.org/> .\n\
                 ex:Shape a sh:NodeShape ; sh:property [ sh:minCount 1 ] .",
                "turtle",
                None,
            )
            .unwrap();
        assert!(matches!(
            extract_shapes(&broken, None),
            Err(ParserError::Validation(_))
        ));
    }

    #[test]
    fn restrictions_are_keyed_by_description() {
        let restrictions = extract_restrictions(&graph());
        assert_eq!(restrictions.len(), 1);
        let (key, record) = restrictions.iter().next().unwrap();
        assert!(key.contains("Restriction on http://example.org/hasName"));
        assert_eq!(record["on_property"], json!("http://example.org/hasName"));
        assert_eq!(record["min_cardinality"], json!(1));
    }

    #[test]
    fn metadata_reads_the_ontology_header() {
        let metadata = extract_metadata(&graph(), None);
        assert_eq!(metadata["ontology_iri"], json!("http://example.org/onto"));
        assert_eq!(metadata["label"], json!("Example ontology"));
        assert_eq!(metadata["version_info"], json!("1.2.0"));
        assert!(metadata["triple_count"].as_u64().unwrap() > 0);
    }

    #[test]
    fn prefixes_come_from_the_parsed_document() {
        let prefixes = extract_prefixes(&graph());
        assert_eq!(prefixes.get("ex"), Some(&"http://example.org/".to_string()));
        assert_eq!(
            prefixes.get("sh"),
            Some(&"http://www.w3.org/ns/shacl#".to_string())
        );
    }
}
