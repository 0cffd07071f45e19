//! Tests for the file-based CLI commands against an in-memory store.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use advgraph::cli::{cmd_check, cmd_dump, cmd_load};
use advgraph::store::{GraphStore, MemoryStore, open_store};
use advgraph_core::{AdvGraphError, GRAPH_KEY};

const GRAPH: &str = r#"{"nodes":[{"id":"wood","name":"Getting Wood","description":"","item":"game:log","x":0,"y":0},{"id":"stone","name":"Stone Age","description":"","item":"game:stone","x":120,"y":0}],"edges":[{"id":"e1","fromNode":"wood","toNode":"stone","from":[0,0],"to":[120,0]}]}"#;

#[tokio::test]
async fn test_load_stores_canonical_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("graph.json");
    let pretty = serde_json::to_string_pretty(&serde_json::from_str::<serde_json::Value>(GRAPH).unwrap())
        .unwrap();
    std::fs::write(&input, pretty).unwrap();

    let store = MemoryStore::new();
    cmd_load(&store, &input, true).await.unwrap();

    assert_eq!(
        store.get(GRAPH_KEY).await.unwrap(),
        Some(GRAPH.as_bytes().to_vec())
    );
}

#[tokio::test]
async fn test_load_rejects_non_object_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("graph.json");
    std::fs::write(&input, "[]").unwrap();

    let store = MemoryStore::new();
    let result = cmd_load(&store, &input, false).await;

    assert!(matches!(result, Err(AdvGraphError::NotAnObject(_))));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new();

    let result = cmd_load(&store, &dir.path().join("absent.json"), false).await;

    assert!(matches!(result, Err(AdvGraphError::Io(_))));
}

#[tokio::test]
async fn test_load_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new();

    let result = cmd_load(&store, dir.path(), false).await;

    assert!(matches!(result, Err(AdvGraphError::Io(_))));
}

#[tokio::test]
async fn test_dump_writes_default_when_empty() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");
    let store = MemoryStore::new();

    cmd_dump(&store, &output, false).await.unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), r#"{"nodes":[],"edges":[]}"#);
}

#[tokio::test]
async fn test_load_then_dump_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    std::fs::write(&input, GRAPH).unwrap();

    let store = open_store("memory://").await.unwrap();
    cmd_load(store.as_ref(), &input, false).await.unwrap();
    cmd_dump(store.as_ref(), &output, true).await.unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), GRAPH);
}

#[tokio::test]
async fn test_dump_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new();

    let result = cmd_dump(&store, &dir.path().join("nope").join("out.json"), false).await;

    assert!(matches!(result, Err(AdvGraphError::Io(_))));
}

#[tokio::test]
async fn test_check_succeeds_on_unclean_graph() {
    let store = MemoryStore::new();
    store
        .set(
            GRAPH_KEY,
            br#"{"nodes":[{"id":"a"},{"id":"a"}],"edges":[{"id":"e","fromNode":"x","toNode":"a"}]}"#
                .to_vec(),
        )
        .await
        .unwrap();

    cmd_check(&store, true).await.unwrap();
    cmd_check(&store, false).await.unwrap();
}
