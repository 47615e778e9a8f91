mod actions;
mod docs;
mod edit;
mod expansion;
mod ingest;
pub mod model;

pub use actions::Action;
pub use docs::generate_documentation;
pub use edit::{NodeDraft, DEFAULT_DESCRIPTION, DEFAULT_SUMMARY};
pub use ingest::{level_color, resolve_json, resolve_raw, slugify, RawNode, LEVEL_COLORS};
pub use model::{Link, MindmapState, MindmapTree, Node, NodeIdx, TreeIndex, Visit};
