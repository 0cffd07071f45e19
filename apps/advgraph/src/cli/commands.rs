//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api;
use crate::store::{GraphStore, SharedStore, check_graph, read_graph, redact, replace_graph};
use advgraph_core::{AdvGraphError, IntegrityReport, MAX_DOCUMENT_SIZE};
use std::io::Write;
use std::path::Path;

// =============================================================================
// FILE VALIDATION
// =============================================================================

/// Validate an input file before reading it.
///
/// Canonicalizes the path, requires a regular file, and applies the same
/// size cap as the HTTP body limit.
fn validate_input_file(path: &Path) -> Result<std::path::PathBuf, AdvGraphError> {
    let canonical = path.canonicalize().map_err(|e| {
        AdvGraphError::Io(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    let metadata = std::fs::metadata(&canonical)
        .map_err(|e| AdvGraphError::Io(format!("Cannot read file metadata: {}", e)))?;

    if !metadata.is_file() {
        return Err(AdvGraphError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    if metadata.len() > MAX_DOCUMENT_SIZE as u64 {
        return Err(AdvGraphError::Io(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_DOCUMENT_SIZE
        )));
    }

    Ok(canonical)
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    store: SharedStore,
    store_uri: &str,
    host: &str,
    port: u16,
) -> Result<(), AdvGraphError> {
    println!("Advancement Graph Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", host);
    println!("  Port:     {}", port);
    println!("  Store:    {} ({})", redact(store_uri), store.backend_name());
    println!();
    println!("Endpoints:");
    println!("  GET  {}           - Read the graph", api::GRAPH_PATH);
    println!("  PUT  {}           - Replace the graph", api::GRAPH_PATH);
    println!("  GET  {}/integrity - Integrity report", api::GRAPH_PATH);
    println!("  GET  /health                      - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, store).await
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Print the stored document to stdout exactly as stored.
pub async fn cmd_show(store: &dyn GraphStore) -> Result<(), AdvGraphError> {
    let body = read_graph(store).await?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&body)
        .and_then(|()| stdout.write_all(b"\n"))
        .map_err(|e| AdvGraphError::Io(format!("Write stdout: {}", e)))
}

// =============================================================================
// LOAD COMMAND
// =============================================================================

/// Replace the stored document with a file's contents.
pub async fn cmd_load(
    store: &dyn GraphStore,
    input: &Path,
    json_mode: bool,
) -> Result<(), AdvGraphError> {
    let path = validate_input_file(input)?;
    let data =
        std::fs::read(&path).map_err(|e| AdvGraphError::Io(format!("Read file: {}", e)))?;

    let report = replace_graph(store, &data).await?;

    if json_mode {
        let output = serde_json::json!({
            "loaded": path.to_string_lossy(),
            "node_count": report.node_count,
            "edge_count": report.edge_count,
            "clean": report.is_clean(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!(
        "Loaded {} nodes and {} edges from {:?}",
        report.node_count, report.edge_count, path
    );
    if !report.is_clean() {
        println!(
            "Warning: {} integrity issue(s); run `advgraph check` for details",
            report.issue_count()
        );
    }
    Ok(())
}

// =============================================================================
// DUMP COMMAND
// =============================================================================

/// Write the stored document (or the default) to a file.
pub async fn cmd_dump(
    store: &dyn GraphStore,
    output: &Path,
    json_mode: bool,
) -> Result<(), AdvGraphError> {
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(AdvGraphError::Io(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let body = read_graph(store).await?;
    std::fs::write(output, &body)
        .map_err(|e| AdvGraphError::Io(format!("Write file: {}", e)))?;

    if json_mode {
        let output = serde_json::json!({
            "output": output.to_string_lossy(),
            "bytes": body.len(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
    } else {
        println!("Dumped {} bytes to {:?}", body.len(), output);
    }
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Print the integrity report for the stored document.
///
/// Succeeds even when issues are found; nothing is ever rejected on this basis.
pub async fn cmd_check(store: &dyn GraphStore, json_mode: bool) -> Result<(), AdvGraphError> {
    let report = check_graph(store).await?;

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
        return Ok(());
    }

    print!("{}", render_report(&report));
    Ok(())
}

/// Human-readable rendering of an integrity report.
pub fn render_report(report: &IntegrityReport) -> String {
    let mut out = String::new();
    out.push_str("Advancement Graph Integrity\n");
    out.push_str("===========================\n");
    out.push_str(&format!("Nodes: {}\n", report.node_count));
    out.push_str(&format!("Edges: {}\n", report.edge_count));
    out.push('\n');

    if report.is_clean() {
        out.push_str("No issues found.\n");
        return out;
    }

    for field in &report.malformed_fields {
        out.push_str(&format!("Field '{}' is missing or not an array\n", field));
    }
    for id in &report.duplicate_node_ids {
        out.push_str(&format!("Duplicate node id: {}\n", id));
    }
    for id in &report.duplicate_edge_ids {
        out.push_str(&format!("Duplicate edge id: {}\n", id));
    }
    for index in &report.unidentified_nodes {
        out.push_str(&format!("Node #{} has no string id\n", index));
    }
    for index in &report.unidentified_edges {
        out.push_str(&format!("Edge #{} has no string id\n", index));
    }
    for dangling in &report.dangling_edges {
        let edge = dangling
            .edge_id
            .clone()
            .unwrap_or_else(|| format!("#{}", dangling.index));
        match &dangling.node_id {
            Some(node) => out.push_str(&format!(
                "Edge {} {} references unknown node '{}'\n",
                edge, dangling.endpoint, node
            )),
            None => out.push_str(&format!(
                "Edge {} has no {} reference\n",
                edge, dangling.endpoint
            )),
        }
    }

    out.push('\n');
    out.push_str(&format!("{} issue(s) found.\n", report.issue_count()));
    out
}
