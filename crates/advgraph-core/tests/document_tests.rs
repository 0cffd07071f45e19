//! Tests for the document write path as the HTTP layer uses it.

use advgraph_core::{
    AdvGraphError, AdvancementNode, DEFAULT_DOCUMENT, Edge, GRAPH_KEY, Graph, IntegrityReport,
    default_document, parse_document, to_canonical,
};

const STONE_AGE: &str = r#"{"nodes":[{"id":"n1","name":"Stone Age","description":"","item":"game:stone","x":10,"y":20}],"edges":[]}"#;

#[test]
fn stone_age_document_is_stored_byte_for_byte() {
    let document = parse_document(STONE_AGE.as_bytes()).expect("parse");
    let stored = to_canonical(&document).expect("canonical");

    assert_eq!(String::from_utf8(stored).expect("utf8"), STONE_AGE);
}

#[test]
fn stone_age_document_decodes_strictly() {
    let graph = Graph::from_slice(STONE_AGE.as_bytes()).expect("decode");

    assert_eq!(
        graph.nodes,
        vec![AdvancementNode::new("n1", "Stone Age", "game:stone", 10.0, 20.0)]
    );
    assert!(graph.edges.is_empty());
}

#[test]
fn partial_node_is_accepted_unchanged() {
    let input = br#"{"nodes":[{"id":"a"}],"edges":[]}"#;
    let document = parse_document(input).expect("parse");

    assert_eq!(to_canonical(&document).expect("canonical"), input);
}

#[test]
fn wrong_field_types_are_accepted() {
    let input = br#"{"nodes":"none","edges":[{"id":1,"from":"x"}]}"#;
    let document = parse_document(input).expect("parse");
    let report = IntegrityReport::analyze(&document);

    assert_eq!(to_canonical(&document).expect("canonical"), input);
    assert_eq!(report.malformed_fields, vec!["nodes".to_string()]);
    assert_eq!(report.unidentified_edges, vec![0]);
}

#[test]
fn whitespace_is_normalized() {
    let input = b"{\n  \"nodes\": [],\n  \"edges\": []\n}\n";
    let document = parse_document(input).expect("parse");

    assert_eq!(to_canonical(&document).expect("canonical"), DEFAULT_DOCUMENT.as_bytes());
}

#[test]
fn default_document_is_a_valid_empty_graph() {
    let graph = Graph::from_slice(&default_document()).expect("decode");
    assert_eq!(graph, Graph::new());
}

#[test]
fn typed_graph_with_edges_round_trips_in_order() {
    let graph = Graph {
        nodes: vec![
            AdvancementNode::new("wood", "Getting Wood", "game:log", 0.0, 0.0),
            AdvancementNode::new("stone", "Stone Age", "game:stone", 120.5, 0.0)
                .with_description("Mine stone"),
        ],
        edges: vec![
            Edge::new("e2", "stone", "wood", vec![120.5, 0.0], vec![0.0, 0.0]),
            Edge::new("e1", "wood", "stone", vec![0.0, 0.0], vec![120.5, 0.0]),
        ],
    };

    let stored = to_canonical(&parse_document(&graph.to_vec().expect("encode")).expect("parse"))
        .expect("canonical");
    let restored = Graph::from_slice(&stored).expect("decode");

    assert_eq!(restored, graph);
    assert_eq!(restored.edges[0].id, "e2");
    assert!(IntegrityReport::analyze(&parse_document(&stored).expect("parse")).is_clean());
}

#[test]
fn invalid_json_reports_malformed_document() {
    let err = parse_document(b"nodes=1").expect_err("must fail");
    assert!(matches!(err, AdvGraphError::MalformedDocument(_)));
    assert_eq!(err.kind(), "malformed_document");
}

#[test]
fn storage_key_is_fixed() {
    assert_eq!(GRAPH_KEY, "graph:advancements");
}
