//
// Ingest step: nested RawNode records -> flat MindmapTree.
//
// What this does:
// - Flattens the nested input in pre-order
// - Assigns every node a unique, deterministic id (label slug + counter)
// - Colors nodes by the level they sit at
// - Emits one link per parent/child edge, in child order

use serde::{Deserialize, Serialize};

use super::model::{Link, MindmapTree, Node};
use crate::error::MindmapError;

/// Level colors: indigo, blue, emerald, amber, violet, pink.
/// Levels past the end reuse the last entry.
pub const LEVEL_COLORS: &[&str] = &[
    "#4F46E5",
    "#3B82F6",
    "#10B981",
    "#F59E0B",
    "#8B5CF6",
    "#EC4899",
];

/// Nested input record, as authored by users or returned by a generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
}

pub fn level_color(level: usize) -> &'static str {
    LEVEL_COLORS[level.min(LEVEL_COLORS.len() - 1)]
}

/// Lowercase, whitespace runs to '-', everything outside [a-z0-9-] dropped.
pub fn slugify(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_space = false;
    for ch in label.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            out.push(ch);
        }
    }
    out
}

pub fn resolve_json(input: &str) -> Result<MindmapTree, MindmapError> {
    let raw: RawNode = serde_json::from_str(input)?;
    Ok(resolve_raw(&raw))
}

pub fn resolve_raw(raw: &RawNode) -> MindmapTree {
    let mut ctx = IngestCtx::default();
    let mut stack: Vec<(&RawNode, usize, Option<usize>)> = vec![(raw, 0, None)];

    while let Some((raw, level, parent)) = stack.pop() {
        let idx = ctx.push_node(raw, level);
        if let Some(parent) = parent {
            ctx.attach(parent, idx);
        }
        for child in raw.children.iter().rev() {
            stack.push((child, level + 1, Some(idx)));
        }
    }

    ctx.finish()
}

#[derive(Default)]
struct IngestCtx {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl IngestCtx {
    fn push_node(&mut self, raw: &RawNode, level: usize) -> usize {
        let idx = self.nodes.len();
        let summary = match raw.summary.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => format!("{} node", raw.label).trim().to_string(),
        };
        self.nodes.push(Node {
            id: format!("{}-{}", slugify(&raw.label), idx),
            label: raw.label.clone(),
            summary,
            description: raw.description.as_deref().unwrap_or_default().trim().to_string(),
            color: level_color(level).to_string(),
            children: Vec::new(),
        });
        idx
    }

    fn attach(&mut self, parent: usize, child: usize) {
        let child_id = self.nodes[child].id.clone();
        self.links.push(Link {
            id: format!("l{}", self.links.len() + 1),
            source: self.nodes[parent].id.clone(),
            target: child_id.clone(),
        });
        self.nodes[parent].children.push(child_id);
    }

    fn finish(self) -> MindmapTree {
        MindmapTree { nodes: self.nodes, links: self.links }
    }
}
