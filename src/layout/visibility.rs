// Visibility resolution.
//
// A node is visible iff every ancestor on its path from the root is in the
// expanded set. Visible nodes get dense "slots" in depth-first pre-order;
// every per-node working buffer in the layouter is indexed by slot, and
// slot 0 is always the root.

use std::collections::BTreeSet;

use crate::tree::{NodeIdx, TreeIndex};

/// A visible parent -> child edge, by slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VisibleLink {
    /// Index into the store's link list.
    pub link: usize,
    pub parent: usize,
    pub child: usize,
}

/// The visible subtree, slot-indexed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Visibility {
    pub nodes: Vec<NodeIdx>,
    pub depth: Vec<usize>,
    pub parent: Vec<Option<usize>>,
    /// Visible children per slot, in the node's child order.
    pub children: Vec<Vec<usize>>,
    pub links: Vec<VisibleLink>,
}

impl Visibility {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

pub fn resolve_visibility(index: &TreeIndex<'_>, expanded: &BTreeSet<String>, max_depth: usize) -> Visibility {
    let visits = index.walk(max_depth, |n| expanded.contains(index.id(n)));

    let mut slot_of: Vec<Option<usize>> = vec![None; index.len()];
    let mut vis = Visibility::default();

    for visit in visits {
        let slot = vis.nodes.len();
        slot_of[visit.node.0] = Some(slot);
        vis.nodes.push(visit.node);
        vis.depth.push(visit.depth);
        vis.children.push(Vec::new());

        // Parents are always emitted before their children in pre-order
        let parent = visit.via.and_then(|(p, link)| slot_of[p.0].map(|ps| (ps, link)));
        vis.parent.push(parent.map(|(ps, _)| ps));
        if let Some((ps, link)) = parent {
            vis.children[ps].push(slot);
            vis.links.push(VisibleLink { link, parent: ps, child: slot });
        }
    }

    vis
}
