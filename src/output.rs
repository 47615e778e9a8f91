//! Output types for front-end consumption.
//!
//! Successful calls serialize their payload directly (a layout, a tree, a
//! store); failures serialize an [`ErrorOutput`] so the caller can always
//! parse the reply.

use serde::Serialize;

use crate::error::MindmapError;

/// Error information shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    /// Machine-readable category: "unknown_node", "empty_label", "invalid_json", "invalid_config"
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
    pub error: ErrorInfo,
}

impl From<&MindmapError> for ErrorOutput {
    fn from(err: &MindmapError) -> Self {
        let kind = match err {
            MindmapError::UnknownNode(_) => "unknown_node",
            MindmapError::EmptyLabel => "empty_label",
            MindmapError::InvalidJson(_) => "invalid_json",
            MindmapError::InvalidConfig(_) => "invalid_config",
        };
        ErrorOutput { error: ErrorInfo { message: err.to_string(), kind } }
    }
}

/// Serialize a result for the JS side. Errors become an `{"error": ...}` object.
pub fn to_json<T: Serialize>(result: Result<T, MindmapError>) -> String {
    let body = match result {
        Ok(value) => serde_json::to_string(&value),
        Err(err) => serde_json::to_string(&ErrorOutput::from(&err)),
    };
    body.unwrap_or_else(|e| format!("{{\"error\":{{\"message\":\"{e}\",\"kind\":\"internal\"}}}}"))
}
