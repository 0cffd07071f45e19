//! # advgraph-core
//!
//! The advancement graph document - THE DOCUMENT.
//!
//! This crate owns the shape of the single graph document that the visual
//! editor loads and overwrites, and the rules for turning request bytes into
//! stored bytes:
//!
//! - `types` → data model (`AdvancementNode`, `Edge`, `Graph`) and `AdvGraphError`
//! - `document` → lenient parsing and canonical re-encoding
//! - `integrity` → read-only report of duplicate ids and dangling edges
//! - `primitives` → fixed storage key, default document, size limits
//!
//! ## Architectural Constraints
//!
//! - Has NO async, NO network dependencies (pure Rust)
//! - Never rejects a JSON object because of its contents; schema and
//!   referential integrity are reported, not enforced

// =============================================================================
// MODULES
// =============================================================================

pub mod document;
pub mod integrity;
pub mod primitives;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use document::{default_document, parse_document, to_canonical};
pub use integrity::{DanglingEdge, IntegrityReport};
pub use primitives::{DEFAULT_DOCUMENT, GRAPH_KEY, MAX_DOCUMENT_SIZE};
pub use types::{AdvGraphError, AdvancementNode, Edge, Graph};
