//! # Core Type Definitions
//!
//! This module contains the typed view of the graph document:
//! - Vertices and connections (`AdvancementNode`, `Edge`)
//! - The top-level aggregate (`Graph`)
//! - Error types (`AdvGraphError`)
//!
//! ## Wire Names
//!
//! Field names match what the editor sends, including the camel-case
//! `fromNode`/`toNode` on edges. The write path of the HTTP API does not go
//! through these structs, so a document that fails to deserialize here is
//! still storable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// NODE
// =============================================================================

/// A positioned vertex in the advancement graph.
///
/// `id` is expected to be unique within a document. Nothing enforces this;
/// see [`crate::IntegrityReport`] for detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancementNode {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Opaque item identifier, e.g. `minecraft:stone`.
    pub item: String,
    pub x: f64,
    pub y: f64,
}

impl AdvancementNode {
    /// Create a node with an empty description.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        item: impl Into<String>,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            item: item.into(),
            x,
            y,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// A directed connection between two nodes.
///
/// `from`/`to` are the connector anchor coordinates the editor renders with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    #[serde(rename = "fromNode")]
    pub from_node: String,
    #[serde(rename = "toNode")]
    pub to_node: String,
    pub from: Vec<f64>,
    pub to: Vec<f64>,
}

impl Edge {
    /// Create an edge between two node ids with the given anchors.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        from_node: impl Into<String>,
        to_node: impl Into<String>,
        from: Vec<f64>,
        to: Vec<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            from_node: from_node.into(),
            to_node: to_node.into(),
            from,
            to,
        }
    }
}

// =============================================================================
// GRAPH
// =============================================================================

/// The single top-level graph document.
///
/// Sequence order is significant and preserved end-to-end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<AdvancementNode>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Strictly deserialize a graph document.
    ///
    /// Unlike [`crate::parse_document`], every node and edge must carry all
    /// of its fields with the right types.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AdvGraphError> {
        serde_json::from_slice(bytes).map_err(|e| AdvGraphError::MalformedDocument(e.to_string()))
    }

    /// Encode to compact JSON in declaration order.
    pub fn to_vec(&self) -> Result<Vec<u8>, AdvGraphError> {
        serde_json::to_vec(self).map_err(|e| AdvGraphError::Serialization(e.to_string()))
    }

    /// Find a node by id. Returns the first match if ids are duplicated.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&AdvancementNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while reading, writing or storing the graph.
///
/// Each variant is one failure class with its own HTTP mapping in the app
/// layer. A missing document is not an error.
#[derive(Debug, Error)]
pub enum AdvGraphError {
    /// The bytes are not valid JSON.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// The bytes are valid JSON but the top-level value is not an object.
    #[error("Document must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// The key-value store could not be reached.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The key-value store was reached but the operation failed.
    #[error("Store I/O error: {0}")]
    StoreIo(String),

    /// Re-encoding a parsed document failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration, such as an unknown store scheme.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A local I/O error occurred (files, sockets).
    #[error("I/O error: {0}")]
    Io(String),
}

impl AdvGraphError {
    /// Stable machine-readable name of the failure class.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedDocument(_) => "malformed_document",
            Self::NotAnObject(_) => "not_an_object",
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::StoreIo(_) => "store_io",
            Self::Serialization(_) => "serialization",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }

    /// Whether the error was caused by the client's input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MalformedDocument(_) | Self::NotAnObject(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================
