//! # advgraph
//!
//! HTTP server and CLI for the advancement editor's dependency graph.
//!
//! - `store` → `GraphStore` trait, Redis and in-memory backends, document access
//! - `api` → axum router for `GET`/`PUT /api/advancements`
//! - `cli` → clap commands (`server`, `show`, `load`, `dump`, `check`)

pub mod api;
pub mod cli;
pub mod store;
