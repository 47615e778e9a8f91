//! WASM bindings for the mindmap-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Every function takes JSON strings and returns a JSON string; failures
//! come back as `{"error": {...}}` and are logged to the console.

use log::{error, Level};
use wasm_bindgen::prelude::*;

use crate::error::MindmapError;
use crate::layout::{self, LayoutConfig, LayoutResult};
use crate::output::to_json;
use crate::tree::{self, Action, MindmapState, MindmapTree};

/// Route `log` output to the browser console and install the panic hook.
/// `level` is a log level name ("debug", "info", ...); unknown names mean info.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::Info);
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
}

/// Lay out a store. `config_json` may be empty to use the defaults.
#[wasm_bindgen]
pub fn compute_layout(state_json: &str, config_json: &str) -> String {
    to_json(logged("compute_layout", layout_from_json(state_json, config_json)))
}

/// Turn a nested `{label, summary?, description, children?}` document into
/// nodes and links.
#[wasm_bindgen]
pub fn resolve_json(raw_json: &str) -> String {
    to_json(logged("resolve_json", tree::resolve_json(raw_json)))
}

/// Store JSON for a freshly ingested tree, for hosts that start from a document.
#[wasm_bindgen]
pub fn state_from_tree(tree_json: &str) -> String {
    let tree = serde_json::from_str::<MindmapTree>(tree_json).map_err(MindmapError::from);
    to_json(logged("state_from_tree", tree.map(MindmapState::new)))
}

/// Apply one store action and return the updated store.
#[wasm_bindgen]
pub fn apply_action(state_json: &str, action_json: &str) -> String {
    to_json(logged("apply_action", apply_from_json(state_json, action_json)))
}

/// Markdown outline of the store's tree.
#[wasm_bindgen]
pub fn generate_documentation(state_json: &str) -> String {
    let state = serde_json::from_str::<MindmapState>(state_json).map_err(MindmapError::from);
    match logged("generate_documentation", state) {
        Ok(state) => tree::generate_documentation(&state),
        Err(e) => to_json::<()>(Err(e)),
    }
}

fn layout_from_json(state_json: &str, config_json: &str) -> Result<LayoutResult, MindmapError> {
    let state: MindmapState = serde_json::from_str(state_json)?;
    let cfg = if config_json.trim().is_empty() {
        LayoutConfig::default()
    } else {
        serde_json::from_str(config_json)?
    };
    cfg.validate()?;
    Ok(layout::compute_layout(&state, &cfg))
}

fn apply_from_json(state_json: &str, action_json: &str) -> Result<MindmapState, MindmapError> {
    let mut state: MindmapState = serde_json::from_str(state_json)?;
    let action: Action = serde_json::from_str(action_json)?;
    state.apply(action)?;
    Ok(state)
}

fn logged<T>(op: &str, result: Result<T, MindmapError>) -> Result<T, MindmapError> {
    if let Err(e) = &result {
        error!("{op}: {e}");
    }
    result
}
