//! # Fixed Primitives
//!
//! Constants shared by the store, the HTTP API and the CLI.

/// The one key under which the graph document is stored.
///
/// Exactly one graph exists; there is no per-tenant or per-user prefix.
pub const GRAPH_KEY: &str = "graph:advancements";

/// Document served when nothing has been written yet.
pub const DEFAULT_DOCUMENT: &str = r#"{"nodes":[],"edges":[]}"#;

/// Maximum accepted request body for a graph write (8 MiB).
///
/// Enforced by the HTTP layer before the body is parsed.
pub const MAX_DOCUMENT_SIZE: usize = 8 * 1024 * 1024;

/// Top-level field holding the node sequence.
pub const NODES_FIELD: &str = "nodes";

/// Top-level field holding the edge sequence.
pub const EDGES_FIELD: &str = "edges";

/// Identifier field on nodes and edges.
pub const ID_FIELD: &str = "id";

/// Edge field naming the source node.
pub const FROM_NODE_FIELD: &str = "fromNode";

/// Edge field naming the target node.
pub const TO_NODE_FIELD: &str = "toNode";
