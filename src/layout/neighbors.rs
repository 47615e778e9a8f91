// Neighbor set for highlight styling.
//
// The selection's parent (through the first link that targets it) plus every
// direct child, with the corresponding link ids. Read straight off the full
// link list, so it does not depend on what is currently visible, and it
// never feeds back into positions.

use crate::tree::Link;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighborhood {
    pub node_ids: Vec<String>,
    pub link_ids: Vec<String>,
}

pub fn resolve_neighbors(links: &[Link], selected: Option<&str>) -> Neighborhood {
    let mut out = Neighborhood::default();
    let Some(selected) = selected else {
        return out;
    };

    if let Some(parent) = links.iter().find(|l| l.target == selected) {
        out.node_ids.push(parent.source.clone());
        out.link_ids.push(parent.id.clone());
    }
    for child in links.iter().filter(|l| l.source == selected) {
        out.node_ids.push(child.target.clone());
        out.link_ids.push(child.id.clone());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::model::fixtures::branching;

    #[test]
    fn test_parent_and_children() {
        let tree = branching();
        let n = resolve_neighbors(&tree.links, Some("a"));
        assert_eq!(n.node_ids, ["root", "a1", "a2"]);
        assert_eq!(n.link_ids, ["l1", "l4", "l5"]);
    }

    #[test]
    fn test_root_has_no_parent() {
        let tree = branching();
        let n = resolve_neighbors(&tree.links, Some("root"));
        assert_eq!(n.node_ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_leaf_has_only_parent() {
        let tree = branching();
        let n = resolve_neighbors(&tree.links, Some("a1x"));
        assert_eq!(n.node_ids, ["a1"]);
        assert_eq!(n.link_ids, ["l6"]);
    }

    #[test]
    fn test_no_selection() {
        let tree = branching();
        assert_eq!(resolve_neighbors(&tree.links, None), Neighborhood::default());
    }
}
