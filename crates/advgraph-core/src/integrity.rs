//! # Integrity Report
//!
//! Read-only analysis of a stored document.
//!
//! The store accepts documents with duplicate ids, dangling edge references
//! and incomplete entries. This module finds them so they can be logged or
//! shown to an operator; it never changes or rejects a document.

use crate::primitives::{EDGES_FIELD, FROM_NODE_FIELD, ID_FIELD, NODES_FIELD, TO_NODE_FIELD};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// An edge endpoint that does not resolve to a node in the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingEdge {
    /// Position of the edge in the `edges` sequence.
    pub index: usize,
    /// The edge's `id`, if it has a string one.
    pub edge_id: Option<String>,
    /// `fromNode` or `toNode`.
    pub endpoint: String,
    /// The referenced id; `None` when the field is missing or not a string.
    pub node_id: Option<String>,
}

/// Summary of structural problems in a graph document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub node_count: usize,
    pub edge_count: usize,
    /// Node ids that occur more than once, sorted.
    pub duplicate_node_ids: Vec<String>,
    /// Edge ids that occur more than once, sorted.
    pub duplicate_edge_ids: Vec<String>,
    pub dangling_edges: Vec<DanglingEdge>,
    /// Indices of nodes without a string `id`.
    pub unidentified_nodes: Vec<usize>,
    /// Indices of edges without a string `id`.
    pub unidentified_edges: Vec<usize>,
    /// Top-level fields that are missing or not arrays.
    pub malformed_fields: Vec<String>,
}

impl IntegrityReport {
    /// Analyze a parsed document.
    ///
    /// Works on the generic value so that documents the typed model would
    /// refuse can still be inspected.
    #[must_use]
    pub fn analyze(document: &Value) -> Self {
        let mut report = Self::default();

        let nodes = sequence(document, NODES_FIELD, &mut report.malformed_fields);
        let edges = sequence(document, EDGES_FIELD, &mut report.malformed_fields);
        report.node_count = nodes.len();
        report.edge_count = edges.len();

        let mut node_ids = BTreeSet::new();
        let mut duplicate_nodes = BTreeSet::new();
        for (index, node) in nodes.iter().enumerate() {
            match string_field(node, ID_FIELD) {
                Some(id) => {
                    if !node_ids.insert(id) {
                        duplicate_nodes.insert(id.to_string());
                    }
                }
                None => report.unidentified_nodes.push(index),
            }
        }

        let mut edge_ids = BTreeSet::new();
        let mut duplicate_edges = BTreeSet::new();
        for (index, edge) in edges.iter().enumerate() {
            let edge_id = string_field(edge, ID_FIELD);
            match edge_id {
                Some(id) => {
                    if !edge_ids.insert(id) {
                        duplicate_edges.insert(id.to_string());
                    }
                }
                None => report.unidentified_edges.push(index),
            }

            for endpoint in [FROM_NODE_FIELD, TO_NODE_FIELD] {
                let target = string_field(edge, endpoint);
                if !target.is_some_and(|id| node_ids.contains(id)) {
                    report.dangling_edges.push(DanglingEdge {
                        index,
                        edge_id: edge_id.map(str::to_string),
                        endpoint: endpoint.to_string(),
                        node_id: target.map(str::to_string),
                    });
                }
            }
        }

        report.duplicate_node_ids = duplicate_nodes.into_iter().collect();
        report.duplicate_edge_ids = duplicate_edges.into_iter().collect();
        report
    }

    /// True when no problem of any kind was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicate_node_ids.is_empty()
            && self.duplicate_edge_ids.is_empty()
            && self.dangling_edges.is_empty()
            && self.unidentified_nodes.is_empty()
            && self.unidentified_edges.is_empty()
            && self.malformed_fields.is_empty()
    }

    /// Total number of individual findings.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.duplicate_node_ids.len()
            + self.duplicate_edge_ids.len()
            + self.dangling_edges.len()
            + self.unidentified_nodes.len()
            + self.unidentified_edges.len()
            + self.malformed_fields.len()
    }
}

/// Borrow a top-level array, recording the field name if it is unusable.
fn sequence<'a>(document: &'a Value, field: &str, malformed: &mut Vec<String>) -> &'a [Value] {
    match document.get(field).and_then(Value::as_array) {
        Some(items) => items.as_slice(),
        None => {
            malformed.push(field.to_string());
            &[]
        }
    }
}

fn string_field<'a>(entry: &'a Value, field: &str) -> Option<&'a str> {
    entry.get(field).and_then(Value::as_str)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_graph_is_clean() {
        let report = IntegrityReport::analyze(&json!({"nodes": [], "edges": []}));
        assert!(report.is_clean());
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn connected_graph_is_clean() {
        let doc = json!({
            "nodes": [{"id": "a"}, {"id": "b"}],
            "edges": [{"id": "e1", "fromNode": "a", "toNode": "b", "from": [0, 0], "to": [1, 1]}]
        });
        let report = IntegrityReport::analyze(&doc);

        assert!(report.is_clean(), "{report:?}");
        assert_eq!(report.node_count, 2);
        assert_eq!(report.edge_count, 1);
    }

    #[test]
    fn duplicate_ids_are_reported_once() {
        let doc = json!({
            "nodes": [{"id": "a"}, {"id": "a"}, {"id": "a"}, {"id": "b"}],
            "edges": [
                {"id": "e", "fromNode": "a", "toNode": "b"},
                {"id": "e", "fromNode": "b", "toNode": "a"}
            ]
        });
        let report = IntegrityReport::analyze(&doc);

        assert_eq!(report.duplicate_node_ids, vec!["a".to_string()]);
        assert_eq!(report.duplicate_edge_ids, vec!["e".to_string()]);
        assert!(report.dangling_edges.is_empty());
    }

    #[test]
    fn dangling_endpoints_are_listed_per_side() {
        let doc = json!({
            "nodes": [{"id": "a"}],
            "edges": [{"id": "e1", "fromNode": "a", "toNode": "ghost"}, {"fromNode": 3}]
        });
        let report = IntegrityReport::analyze(&doc);

        assert_eq!(
            report.dangling_edges,
            vec![
                DanglingEdge {
                    index: 0,
                    edge_id: Some("e1".into()),
                    endpoint: "toNode".into(),
                    node_id: Some("ghost".into()),
                },
                DanglingEdge {
                    index: 1,
                    edge_id: None,
                    endpoint: "fromNode".into(),
                    node_id: None,
                },
                DanglingEdge {
                    index: 1,
                    edge_id: None,
                    endpoint: "toNode".into(),
                    node_id: None,
                },
            ]
        );
        assert_eq!(report.unidentified_edges, vec![1]);
    }

    #[test]
    fn missing_sequences_are_malformed_fields() {
        let report = IntegrityReport::analyze(&json!({"nodes": {"a": 1}}));

        assert_eq!(report.malformed_fields, vec!["nodes", "edges"]);
        assert_eq!(report.node_count, 0);
        assert!(!report.is_clean());
    }

    #[test]
    fn field_names_match_typed_model() {
        use crate::types::{AdvancementNode, Edge, Graph};

        let graph = Graph {
            nodes: vec![
                AdvancementNode::new("wood", "Getting Wood", "game:log", 0.0, 0.0),
                AdvancementNode::new("stone", "Stone Age", "game:stone", 120.0, 0.0),
            ],
            edges: vec![Edge::new("e1", "wood", "stone", vec![0.0, 0.0], vec![120.0, 0.0])],
        };
        let value = serde_json::to_value(&graph).expect("serialize");
        let report = IntegrityReport::analyze(&value);

        assert!(report.is_clean(), "{report:?}");
        assert_eq!(value[EDGES_FIELD][0][FROM_NODE_FIELD], "wood");
        assert_eq!(value[EDGES_FIELD][0][TO_NODE_FIELD], "stone");
        assert_eq!(value[NODES_FIELD][1][ID_FIELD], "stone");
    }

    #[test]
    fn node_without_id_is_unidentified() {
        let report = IntegrityReport::analyze(&json!({"nodes": [{"name": "x"}, {"id": 5}], "edges": []}));
        assert_eq!(report.unidentified_nodes, vec![0, 1]);
        assert_eq!(report.issue_count(), 2);
    }
}
