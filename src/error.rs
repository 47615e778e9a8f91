//! Error type shared by the tree store, ingestion and the wasm boundary.
//!
//! Layout computation itself is total and never produces one of these.

#[derive(Debug, thiserror::Error)]
pub enum MindmapError {
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("node label must not be empty")]
    EmptyLabel,
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid layout config: {0}")]
    InvalidConfig(String),
}
