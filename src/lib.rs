//! Radial mindmap layout core.
//!
//! A tree store (nodes, links, expansion state, selection) plus a pure,
//! deterministic layouter that turns it into positions for an outward
//! branching radial diagram. Browser front ends use the JSON entry points in
//! [`wasm`]; Rust hosts can call [`layout::compute_layout`] directly.

pub mod camera;
pub mod error;
pub mod layout;
pub mod output;
pub mod tree;
pub mod wasm;

pub use camera::Camera;
pub use error::MindmapError;
pub use layout::{compute_layout, LayoutConfig, LayoutResult, PointF, ViewBox};
pub use tree::{Action, Link, MindmapState, MindmapTree, Node, NodeDraft, RawNode};
