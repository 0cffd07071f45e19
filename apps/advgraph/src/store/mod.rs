//! # Graph Store
//!
//! A thin accessor over one logical key in a key-value store.
//!
//! The HTTP API only ever needs two operations: read the raw bytes stored at
//! a key, and overwrite them. There are no transactions and no versions. A
//! successful `set` is visible to every later `get`; two concurrent `set`
//! calls resolve in whatever order the backend completes them.
//!
//! ## Backends
//!
//! - `redis://`, `rediss://`, `redis+unix://`, `unix://` → [`RedisStore`]
//! - `memory://` → [`MemoryStore`] (process-local, for tests and development)

mod memory;
mod redis_store;

pub use self::memory::MemoryStore;
pub use self::redis_store::RedisStore;

use advgraph_core::{
    AdvGraphError, GRAPH_KEY, IntegrityReport, default_document, parse_document, to_canonical,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Raw byte access to a key-value store.
///
/// Implementations are shared across all requests behind an `Arc` and must
/// be safe to call concurrently.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Read the value at `key`. `Ok(None)` means the key was never written.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AdvGraphError>;

    /// Unconditionally overwrite the value at `key`.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), AdvGraphError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), AdvGraphError>;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}

/// Shared store handle as held by the server state.
pub type SharedStore = Arc<dyn GraphStore>;

/// Open a store from a connection string and verify it is reachable.
///
/// Fails fast: an unreachable backend is an error here rather than on the
/// first request.
pub async fn open_store(uri: &str) -> Result<SharedStore, AdvGraphError> {
    let store: SharedStore = match scheme(uri) {
        Some("memory") => Arc::new(MemoryStore::new()),
        Some("redis" | "rediss" | "redis+unix" | "unix") => Arc::new(RedisStore::connect(uri).await?),
        Some(other) => {
            return Err(AdvGraphError::Config(format!(
                "Unsupported store scheme '{}'. Use: redis, rediss, redis+unix, unix, memory",
                other
            )));
        }
        None => {
            return Err(AdvGraphError::Config(format!(
                "Store URI '{}' has no scheme",
                redact(uri)
            )));
        }
    };

    store.ping().await?;
    tracing::info!(
        backend = store.backend_name(),
        uri = %redact(uri),
        "Connected to graph store"
    );
    Ok(store)
}

// =============================================================================
// GRAPH DOCUMENT ACCESS
// =============================================================================

/// Stored graph document, or the empty default when nothing was written.
///
/// Stored bytes are returned as-is, without parsing.
pub async fn read_graph(store: &dyn GraphStore) -> Result<Vec<u8>, AdvGraphError> {
    let stored = store.get(GRAPH_KEY).await?;
    Ok(stored.unwrap_or_else(default_document))
}

/// Replace the stored graph document with `body`.
///
/// The body must be a JSON object; nothing else about it is checked. It is
/// re-encoded in canonical form and written over any previous value. The
/// returned report is informational only.
pub async fn replace_graph(
    store: &dyn GraphStore,
    body: &[u8],
) -> Result<IntegrityReport, AdvGraphError> {
    let document = parse_document(body)?;

    let report = IntegrityReport::analyze(&document);
    if !report.is_clean() {
        tracing::warn!(
            issues = report.issue_count(),
            duplicate_node_ids = report.duplicate_node_ids.len(),
            dangling_edges = report.dangling_edges.len(),
            "Storing graph with integrity issues"
        );
    }

    let canonical = to_canonical(&document)?;
    let size = canonical.len();
    store.set(GRAPH_KEY, canonical).await?;

    tracing::info!(
        nodes = report.node_count,
        edges = report.edge_count,
        bytes = size,
        "Graph replaced"
    );
    Ok(report)
}

/// Integrity report for the stored graph document.
///
/// A stored value that is not a JSON object is reported as `StoreIo`: it
/// was not written through `replace_graph`.
pub async fn check_graph(store: &dyn GraphStore) -> Result<IntegrityReport, AdvGraphError> {
    let body = read_graph(store).await?;
    let document = parse_document(&body)
        .map_err(|e| AdvGraphError::StoreIo(format!("Stored document is unreadable: {}", e)))?;
    Ok(IntegrityReport::analyze(&document))
}

/// Extract the URI scheme, if any.
fn scheme(uri: &str) -> Option<&str> {
    uri.split_once("://")
        .map(|(scheme, _)| scheme)
        .filter(|s| !s.is_empty())
}

/// Hide the password component of a connection string for logging.
pub fn redact(uri: &str) -> String {
    let Some((scheme, rest)) = uri.split_once("://") else {
        return uri.to_string();
    };
    match rest.split_once('@') {
        Some((userinfo, host)) => match userinfo.split_once(':') {
            Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
            None => format!("{}://***@{}", scheme, host),
        },
        None => uri.to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
