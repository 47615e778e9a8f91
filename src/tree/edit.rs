//! In-place edits to the tree store.
//!
//! Adding a child keeps node child lists and links in sync, and reveals the
//! new node by expanding its parent. Nodes are never deleted.

use serde::{Deserialize, Serialize};

use super::model::{Link, MindmapState, Node};
use crate::error::MindmapError;

pub const DEFAULT_SUMMARY: &str = "New node summary";
pub const DEFAULT_DESCRIPTION: &str = "New node description";

/// Text fields for a node being created or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDraft {
    pub label: String,
    pub summary: String,
    pub description: String,
}

impl MindmapState {
    /// Append a new child under `parent_id`. Returns the new node's id.
    pub fn add_child(&mut self, parent_id: &str, draft: &NodeDraft) -> Result<String, MindmapError> {
        let label = draft.label.trim();
        if label.is_empty() {
            return Err(MindmapError::EmptyLabel);
        }
        let parent_pos = self
            .nodes
            .iter()
            .position(|n| n.id == parent_id)
            .ok_or_else(|| MindmapError::UnknownNode(parent_id.to_string()))?;

        let id = self.fresh_id(parent_id);
        let node = Node {
            id: id.clone(),
            label: label.to_string(),
            summary: non_empty_or(&draft.summary, DEFAULT_SUMMARY),
            description: non_empty_or(&draft.description, DEFAULT_DESCRIPTION),
            color: self.nodes[parent_pos].color.clone(),
            children: Vec::new(),
        };

        self.nodes[parent_pos].children.push(id.clone());
        self.nodes.push(node);
        self.links.push(Link {
            id: format!("link-{id}"),
            source: parent_id.to_string(),
            target: id.clone(),
        });
        self.expanded.insert(parent_id.to_string());

        Ok(id)
    }

    /// Replace a node's text fields (trimmed).
    pub fn update_node(&mut self, id: &str, draft: &NodeDraft) -> Result<(), MindmapError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| MindmapError::UnknownNode(id.to_string()))?;
        node.label = draft.label.trim().to_string();
        node.summary = draft.summary.trim().to_string();
        node.description = draft.description.trim().to_string();
        Ok(())
    }

    /// `{parent}-{n}`, counting up from the child count until unused.
    fn fresh_id(&self, parent_id: &str) -> String {
        let mut n = self.node(parent_id).map(|p| p.children.len()).unwrap_or(0) + 1;
        loop {
            let candidate = format!("{parent_id}-{n}");
            if self.node(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    match value.trim() {
        "" => fallback.to_string(),
        v => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::model::fixtures::chain;

    fn draft(label: &str) -> NodeDraft {
        NodeDraft { label: label.to_string(), ..Default::default() }
    }

    #[test]
    fn test_add_child_keeps_links_in_sync() {
        let mut state = MindmapState::new(chain());
        let id = state.add_child("a", &draft("  Fresh  ")).unwrap();

        let parent = state.node("a").unwrap();
        assert_eq!(parent.children.last(), Some(&id));
        let link = state.links.last().unwrap();
        assert_eq!((link.source.as_str(), link.target.as_str()), ("a", id.as_str()));

        let child = state.node(&id).unwrap();
        assert_eq!(child.label, "Fresh");
        assert_eq!(child.summary, DEFAULT_SUMMARY);
        assert_eq!(child.description, DEFAULT_DESCRIPTION);
        assert_eq!(child.color, parent.color);
    }

    #[test]
    fn test_add_child_expands_parent() {
        let mut state = MindmapState::new(chain());
        state.add_child("root", &draft("x")).unwrap();
        assert!(state.expanded.contains("root"));
    }

    #[test]
    fn test_add_child_ids_are_unique() {
        let mut state = MindmapState::new(chain());
        let first = state.add_child("b", &draft("x")).unwrap();
        let second = state.add_child("b", &draft("y")).unwrap();
        assert_ne!(first, second);
        assert_eq!(state.index().children(state.index().lookup("b").unwrap()).len(), 2);
    }

    #[test]
    fn test_add_child_rejects_blank_label() {
        let mut state = MindmapState::new(chain());
        assert!(matches!(state.add_child("a", &draft("   ")), Err(MindmapError::EmptyLabel)));
        assert_eq!(state.nodes.len(), 3);
    }

    #[test]
    fn test_add_child_unknown_parent() {
        let mut state = MindmapState::new(chain());
        let err = state.add_child("nope", &draft("x")).unwrap_err();
        assert!(matches!(err, MindmapError::UnknownNode(id) if id == "nope"));
    }

    #[test]
    fn test_update_node_trims_fields() {
        let mut state = MindmapState::new(chain());
        let edit = NodeDraft {
            label: " Renamed ".into(),
            summary: " s ".into(),
            description: " d ".into(),
        };
        state.update_node("b", &edit).unwrap();
        let node = state.node("b").unwrap();
        assert_eq!((node.label.as_str(), node.summary.as_str(), node.description.as_str()), ("Renamed", "s", "d"));
        assert!(state.update_node("zzz", &edit).is_err());
    }
}
