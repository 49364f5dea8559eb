use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mimizuku_core::{Iri, Node, Term, Triple};
use mimizuku_store::{MemoryGraph, RdfGraph};

/// Generate a large set of test triples
fn generate_test_triples(count: usize) -> Vec<Triple> {
    let mut triples = Vec::with_capacity(count * 3);

    for i in 0..count {
        let subject = Node::named(format!("http://example.org/subject_{}", i));

        triples.push(Triple::new(
            subject.clone(),
            Iri::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            Term::named(format!("http://example.org/Class{}", i % 100)),
        ));

        triples.push(Triple::new(
            subject.clone(),
            Iri::new("http://example.org/property1"),
            Term::named(format!("http://example.org/value{}", i % 1000)),
        ));

        if i > 0 {
            triples.push(Triple::new(
                subject,
                Iri::new("http://example.org/refersTo"),
                Term::named(format!("http://example.org/subject_{}", i - 1)),
            ));
        }
    }

    triples
}

/// Generate a Turtle document with `count` class declarations
fn generate_turtle(count: usize) -> String {
    let mut doc = String::from(
        "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
         @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
         @prefix ex: <http://example.org/> .\n\n",
    );
    for i in 0..count {
        doc.push_str(&format!(
            "ex:Class{i} a owl:Class ; rdfs:label \"Class {i}\"@en .\n"
        ));
    }
    doc
}

/// Benchmark triple insertion performance
fn benchmark_graph_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_insertion");

    for size in [100, 1000, 10000].iter() {
        let triples = generate_test_triples(*size);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_subjects", size)),
            &triples,
            |b, triples| {
                b.iter(|| {
                    let mut graph = MemoryGraph::new();
                    for triple in triples.iter() {
                        graph.insert(triple.clone());
                    }
                    black_box(&graph);
                });
            },
        );
    }
    group.finish();
}

/// Benchmark indexed pattern queries
fn benchmark_graph_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_queries");

    // Setup: a graph with 10k subjects
    let mut graph = MemoryGraph::new();
    for triple in generate_test_triples(10000) {
        graph.insert(triple);
    }

    let subject = Node::named("http://example.org/subject_5000");

    group.bench_function("find_by_subject", |b| {
        b.iter(|| {
            let results = graph.find(Some(black_box(&subject)), None, None);
            black_box(results);
        });
    });

    group.bench_function("find_by_predicate", |b| {
        b.iter(|| {
            let results = graph.find(
                None,
                Some(black_box("http://www.w3.org/1999/02/22-rdf-syntax-ns#type")),
                None,
            );
            black_box(results);
        });
    });

    group.bench_function("objects_of_subject", |b| {
        b.iter(|| {
            let results = graph.objects(black_box(&subject), "http://example.org/property1");
            black_box(results);
        });
    });

    group.bench_function("all_of_type", |b| {
        b.iter(|| {
            let results = graph.all_of_type(black_box("http://example.org/Class50"));
            black_box(results);
        });
    });

    group.finish();
}

/// Benchmark Turtle parsing throughput
fn benchmark_turtle_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("turtle_parsing");

    for size in [100, 1000].iter() {
        let doc = generate_turtle(*size);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_classes", size)),
            &doc,
            |b, doc| {
                b.iter(|| {
                    let mut graph = MemoryGraph::new();
                    graph.parse(black_box(doc), "turtle", None).unwrap();
                    black_box(&graph);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_graph_insertion,
    benchmark_graph_queries,
    benchmark_turtle_parsing
);
criterion_main!(benches);
