use mimizuku_core::{vocab, Literal, Node, Term};
use mimizuku_store::{GraphError, MemoryGraph, RdfGraph};

#[cfg(test)]
mod tests {
    use super::*;

    const TURTLE: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex: <http://example.org/> .

ex:Person a owl:Class ;
    rdfs:label "Person"@en, "Persoon"@nl ;
    rdfs:comment "A human being" ;
    rdfs:subClassOf ex:Agent .

ex:Agent a owl:Class .
"#;

    #[test]
    fn test_parse_turtle_end_to_end() {
        let mut graph = MemoryGraph::new();
        let added = graph.parse(TURTLE, "turtle", None).unwrap();
        assert_eq!(added, graph.triple_count());

        let person = Node::named("http://example.org/Person");
        assert!(graph.has_type(&person, vocab::owl::CLASS));

        let labels = graph.objects(&person, vocab::rdfs::LABEL);
        assert_eq!(labels.len(), 2);
        assert!(labels.contains(&Term::Literal(Literal::tagged("Person", "en"))));

        let classes = graph.all_of_type(vocab::owl::CLASS);
        assert_eq!(classes.len(), 2);
    }

    #[test]
    fn test_format_aliases_dispatch_to_same_reader() {
        for format in ["turtle", "ttl"] {
            let mut graph = MemoryGraph::new();
            graph.parse(TURTLE, format, None).unwrap();
            assert!(graph.triple_count() > 0);
        }
    }

    #[test]
    fn test_parse_ntriples_end_to_end() {
        let data = "<http://example.org/a> <http://example.org/p> \"hello\"@en .\n\
                    <http://example.org/a> <http://example.org/q> _:b0 .\n";
        let mut graph = MemoryGraph::new();
        assert_eq!(graph.parse(data, "n-triples", None).unwrap(), 2);
        assert_eq!(
            graph.objects(&Node::named("http://example.org/a"), "http://example.org/p"),
            vec![Term::Literal(Literal::tagged("hello", "en"))]
        );
    }

    #[test]
    fn test_parse_jsonld_end_to_end() {
        let data = r#"{
            "@context": {"ex": "http://example.org/", "label": "http://www.w3.org/2000/01/rdf-schema#label"},
            "@id": "ex:Person",
            "@type": "http://www.w3.org/2002/07/owl#Class",
            "label": {"@value": "Person", "@language": "en"}
        }"#;
        let mut graph = MemoryGraph::new();
        graph.parse(data, "json-ld", None).unwrap();
        assert!(graph.has_type(&Node::named("http://example.org/Person"), vocab::owl::CLASS));
    }

    #[test]
    fn test_parse_rdfxml_end_to_end() {
        let data = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                               xmlns:owl="http://www.w3.org/2002/07/owl#">
            <owl:Class rdf:about="http://example.org/Person"/>
        </rdf:RDF>"#;
        let mut graph = MemoryGraph::new();
        graph.parse(data, "rdf/xml", None).unwrap();
        assert!(graph.has_type(&Node::named("http://example.org/Person"), vocab::owl::CLASS));
    }

    #[test]
    fn test_unsupported_format_is_rejected() {
        let mut graph = MemoryGraph::new();
        let result = graph.parse("anything", "trig", None);
        assert!(matches!(result, Err(GraphError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_namespace_map_includes_document_prefixes() {
        let mut graph = MemoryGraph::new();
        graph.parse(TURTLE, "turtle", None).unwrap();
        let namespaces = graph.namespace_map();
        assert_eq!(namespaces.get("ex"), Some("http://example.org/"));
        assert_eq!(namespaces.get("owl"), Some("http://www.w3.org/2002/07/owl#"));
    }

    #[test]
    fn test_resource_registers_node_and_optional_type() {
        let mut graph = MemoryGraph::new();
        let node = graph.resource("http://example.org/x", Some(vocab::owl::CLASS));
        assert!(graph.has_type(&node, vocab::owl::CLASS));
        assert!(graph.resources().contains(&node));

        // without a type no triple is added
        let plain = graph.resource("http://example.org/y", None);
        assert!(graph.predicates(&plain).is_empty());
    }

    #[test]
    fn test_parse_reports_added_triple_count() {
        let mut graph = MemoryGraph::new();
        let first = graph.parse(TURTLE, "turtle", None).unwrap();
        // parsing the same document again adds nothing new
        let second = graph.parse(TURTLE, "turtle", None).unwrap();
        assert!(first > 0);
        assert_eq!(second, 0);
    }
}
