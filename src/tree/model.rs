//
// Tree store data model.
//
// Node/Link mirror what the front end holds. MindmapState is the single
// source of truth the layout engine reads; it is never mutated by layout.
//
// TreeIndex is a transient, borrowed view that resolves string ids to dense
// indices once, so traversals don't repeat linear lookups:
// - children are taken from each node's ordered child-id list
// - an edge is only followed when the child exists AND a link backs it
// - the root is the first node that no link targets
//
// Traversal is an explicit stack walk (no recursion) with a depth ceiling
// and a visited guard, so malformed input (cycles, shared children) always
// terminates.

use std::collections::{BTreeSet, HashMap, HashSet};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A labeled mindmap node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Opaque, unique, stable identifier.
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    /// Categorical color, derived from the level the node was created at.
    #[serde(default)]
    pub color: String,
    /// Ordered child ids. Order drives the angular layout.
    #[serde(default)]
    pub children: Vec<String>,
}

/// A parent -> child edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Nodes plus links, as produced by ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MindmapTree {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl MindmapTree {
    /// Build a tree from nodes alone, deriving one link per child-id entry.
    /// Link ids are `l1`, `l2`, ... in pre-order of the child lists.
    pub fn with_derived_links(nodes: Vec<Node>) -> Self {
        let mut links = Vec::new();
        for node in &nodes {
            for child in &node.children {
                links.push(Link {
                    id: format!("l{}", links.len() + 1),
                    source: node.id.clone(),
                    target: child.clone(),
                });
            }
        }
        Self { nodes, links }
    }
}

/// The tree store: everything layout and the expansion state machine read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MindmapState {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub selected_node_id: Option<String>,
    /// Nodes whose children are revealed.
    pub expanded: BTreeSet<String>,
    /// Drill level: number of rings fully revealed.
    pub current_level: usize,
}

impl MindmapState {
    /// A fresh store over `tree`, nothing expanded, first node selected.
    pub fn new(tree: MindmapTree) -> Self {
        let mut state = Self::default();
        state.set_data(Some(tree));
        state
    }

    /// Replace the tree contents. Expansion and drill level reset; the
    /// first node becomes the selection. `None` empties the store.
    pub fn set_data(&mut self, tree: Option<MindmapTree>) {
        self.expanded.clear();
        self.current_level = 0;
        match tree {
            Some(tree) => {
                self.selected_node_id = tree.nodes.first().map(|n| n.id.clone());
                self.nodes = tree.nodes;
                self.links = tree.links;
            }
            None => {
                self.nodes.clear();
                self.links.clear();
                self.selected_node_id = None;
            }
        }
    }

    pub fn select_node(&mut self, id: &str) {
        self.selected_node_id = Some(id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected_node_id = None;
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn index(&self) -> TreeIndex<'_> {
        TreeIndex::new(&self.nodes, &self.links)
    }
}

/// Dense node index into a [`TreeIndex`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(pub usize);

/// One step of a traversal: the node reached, its hop depth, and the
/// (parent, link index) it was reached through. The root has `via: None`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Visit {
    pub node: NodeIdx,
    pub depth: usize,
    pub via: Option<(NodeIdx, usize)>,
}

/// Borrowed id -> index view over a node/link set.
#[derive(Debug, Clone)]
pub struct TreeIndex<'a> {
    nodes: &'a [Node],
    links: &'a [Link],
    by_id: HashMap<&'a str, NodeIdx>,
    /// Per node: (child, backing link index), in the node's child order.
    children: Vec<Vec<(NodeIdx, usize)>>,
    root: Option<NodeIdx>,
}

impl<'a> TreeIndex<'a> {
    pub fn new(nodes: &'a [Node], links: &'a [Link]) -> Self {
        let mut by_id: HashMap<&str, NodeIdx> = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            // First occurrence wins on duplicate ids
            by_id.entry(node.id.as_str()).or_insert(NodeIdx(i));
        }

        let mut link_by_edge: HashMap<(&str, &str), usize> = HashMap::with_capacity(links.len());
        for (i, link) in links.iter().enumerate() {
            link_by_edge
                .entry((link.source.as_str(), link.target.as_str()))
                .or_insert(i);
        }

        let children = nodes
            .iter()
            .map(|node| {
                node.children
                    .iter()
                    .filter_map(|child_id| {
                        let Some(&child) = by_id.get(child_id.as_str()) else {
                            debug!("skipping dangling child '{}' of '{}'", child_id, node.id);
                            return None;
                        };
                        let Some(&link) = link_by_edge.get(&(node.id.as_str(), child_id.as_str())) else {
                            debug!("skipping unlinked child '{}' of '{}'", child_id, node.id);
                            return None;
                        };
                        Some((child, link))
                    })
                    .collect()
            })
            .collect();

        let root = find_root(nodes, links);

        Self { nodes, links, by_id, children, root }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<NodeIdx> {
        self.root
    }

    pub fn lookup(&self, id: &str) -> Option<NodeIdx> {
        self.by_id.get(id).copied()
    }

    pub fn node(&self, idx: NodeIdx) -> &'a Node {
        &self.nodes[idx.0]
    }

    pub fn id(&self, idx: NodeIdx) -> &'a str {
        self.nodes[idx.0].id.as_str()
    }

    pub fn link(&self, i: usize) -> &'a Link {
        &self.links[i]
    }

    pub fn children(&self, idx: NodeIdx) -> &[(NodeIdx, usize)] {
        &self.children[idx.0]
    }

    /// Depth-first pre-order walk from the root.
    ///
    /// `descend` decides whether a reached node's children are followed.
    /// Nodes deeper than `max_depth` are dropped together with their
    /// subtrees, and a node already reached is never emitted twice.
    pub fn walk<F>(&self, max_depth: usize, mut descend: F) -> Vec<Visit>
    where
        F: FnMut(NodeIdx) -> bool,
    {
        let Some(root) = self.root else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(self.nodes.len());
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![Visit { node: root, depth: 0, via: None }];

        while let Some(visit) = stack.pop() {
            if visit.depth > max_depth {
                debug!("depth ceiling {} reached at '{}'", max_depth, self.id(visit.node));
                continue;
            }
            if std::mem::replace(&mut seen[visit.node.0], true) {
                debug!("'{}' reached twice, ignoring repeat", self.id(visit.node));
                continue;
            }
            out.push(visit);

            if !descend(visit.node) {
                continue;
            }
            // Reverse push keeps child order on pop
            for &(child, link) in self.children[visit.node.0].iter().rev() {
                stack.push(Visit {
                    node: child,
                    depth: visit.depth + 1,
                    via: Some((visit.node, link)),
                });
            }
        }

        out
    }
}

/// The root is the node no link targets. Missing or ambiguous roots fall
/// back to the first candidate (or the first node) and are logged.
fn find_root(nodes: &[Node], links: &[Link]) -> Option<NodeIdx> {
    let first = nodes.first()?;
    let targets: HashSet<&str> = links.iter().map(|l| l.target.as_str()).collect();

    let mut candidates = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| !targets.contains(n.id.as_str()));

    match (candidates.next(), candidates.next()) {
        (Some((i, _)), None) => Some(NodeIdx(i)),
        (Some((i, node)), Some(_)) => {
            warn!("multiple root candidates, using '{}'", node.id);
            Some(NodeIdx(i))
        }
        (None, _) => {
            warn!("no root candidate, falling back to '{}'", first.id);
            Some(NodeIdx(0))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{branching, chain, node};
    use super::*;

    #[test]
    fn test_derived_links_follow_child_order() {
        let tree = branching();
        let edges: Vec<(&str, &str)> = tree
            .links
            .iter()
            .map(|l| (l.source.as_str(), l.target.as_str()))
            .collect();
        assert_eq!(edges[..3], [("root", "a"), ("root", "b"), ("root", "c")]);
        assert_eq!(tree.links[0].id, "l1");
        assert_eq!(tree.links.len(), 6);
    }

    #[test]
    fn test_root_is_discovered_not_stored() {
        let mut tree = chain();
        tree.nodes.reverse();
        let index = TreeIndex::new(&tree.nodes, &tree.links);
        assert_eq!(index.id(index.root().unwrap()), "root");
    }

    #[test]
    fn test_root_fallback_when_every_node_is_a_target() {
        let mut tree = chain();
        tree.links.push(Link { id: "x".into(), source: "b".into(), target: "root".into() });
        let index = TreeIndex::new(&tree.nodes, &tree.links);
        assert_eq!(index.root(), Some(NodeIdx(0)));
    }

    #[test]
    fn test_multiple_roots_pick_first_candidate() {
        let mut tree = chain();
        tree.nodes.insert(0, node("orphan", &[]));
        let index = TreeIndex::new(&tree.nodes, &tree.links);
        assert_eq!(index.id(index.root().unwrap()), "orphan");
    }

    #[test]
    fn test_empty_index_has_no_root() {
        let index = TreeIndex::new(&[], &[]);
        assert!(index.root().is_none());
        assert!(index.walk(15, |_| true).is_empty());
    }

    #[test]
    fn test_dangling_child_is_skipped() {
        let mut tree = chain();
        tree.nodes[0].children.push("ghost".to_string());
        tree.links.push(Link { id: "g".into(), source: "root".into(), target: "ghost".into() });
        let index = TreeIndex::new(&tree.nodes, &tree.links);
        let root = index.root().unwrap();
        assert_eq!(index.children(root).len(), 1);
    }

    #[test]
    fn test_walk_is_preorder_in_child_order() {
        let tree = branching();
        let index = TreeIndex::new(&tree.nodes, &tree.links);
        let ids: Vec<&str> = index.walk(15, |_| true).iter().map(|v| index.id(v.node)).collect();
        assert_eq!(ids, ["root", "a", "a1", "a1x", "a2", "b", "c"]);
    }

    #[test]
    fn test_walk_terminates_on_cycle() {
        let mut tree = chain();
        tree.nodes[2].children.push("a".to_string());
        tree.links.push(Link { id: "back".into(), source: "b".into(), target: "a".into() });
        let index = TreeIndex::new(&tree.nodes, &tree.links);
        let visits = index.walk(15, |_| true);
        assert_eq!(visits.len(), 3);
    }

    #[test]
    fn test_walk_depth_ceiling_truncates_subtree() {
        let tree = chain();
        let index = TreeIndex::new(&tree.nodes, &tree.links);
        let visits = index.walk(1, |_| true);
        assert_eq!(visits.len(), 2);
        assert_eq!(visits[1].depth, 1);
        assert_eq!(visits[1].via.map(|(p, _)| p), index.root());
    }

    #[test]
    fn test_set_data_resets_expansion_and_selects_first() {
        let mut state = MindmapState::new(chain());
        state.expanded.insert("root".into());
        state.current_level = 2;
        state.set_data(Some(branching()));
        assert!(state.expanded.is_empty());
        assert_eq!(state.current_level, 0);
        assert_eq!(state.selected_node_id.as_deref(), Some("root"));

        state.set_data(None);
        assert!(state.nodes.is_empty());
        assert!(state.selected_node_id.is_none());
    }

    #[test]
    fn test_state_json_uses_camel_case() {
        let state = MindmapState::new(chain());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["selectedNodeId"], "root");
        assert_eq!(json["currentLevel"], 0);
        assert!(json["expanded"].as_array().unwrap().is_empty());
    }
}
