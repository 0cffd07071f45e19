//! In-memory `GraphStore` backend.

use super::GraphStore;
use advgraph_core::AdvGraphError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local key-value map.
///
/// Same visibility rules as the networked store: a completed `set` is seen
/// by every later `get`, and the last completed `set` wins.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether nothing has been written yet.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AdvGraphError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), AdvGraphError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AdvGraphError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
