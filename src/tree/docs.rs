//! Emit the tree as a markdown outline.
//!
//! Formatting rules:
//! - 2 spaces of indentation per depth
//! - bold label, then Summary and Description lines
//! - trailer with the root id and total node count

use super::model::MindmapState;

const INDENT: &str = "  ";

/// Deepest level the outline descends to.
const MAX_OUTLINE_DEPTH: usize = 15;

pub fn generate_documentation(state: &MindmapState) -> String {
    let index = state.index();
    let mut out = String::from("# Mindmap Documentation\n\n");

    for visit in index.walk(MAX_OUTLINE_DEPTH, |_| true) {
        let node = index.node(visit.node);
        let ind = INDENT.repeat(visit.depth);
        out.push_str(&format!("{ind}**{}**\n", node.label));
        out.push_str(&format!("{ind}  Summary: {}\n", node.summary));
        out.push_str(&format!("{ind}  Description: {}\n\n", node.description));
    }

    let root = index.root().map(|r| index.id(r)).unwrap_or("none");
    out.push_str(&format!("\n*Root: {root}*\n*Total Nodes: {}*", state.nodes.len()));
    out
}
