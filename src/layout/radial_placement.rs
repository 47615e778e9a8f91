// Initial radial placement ("seed" layout).
//
// - The root sits at the canvas center.
// - Its visible children are spread evenly on a ring of `root_radius`,
//   with the angle step floored at 2π/3 so one or two children don't
//   collapse onto each other.
// - Every deeper parent fans its children across a sector centered on the
//   bearing from the canvas center through that parent, so branches point
//   away from the middle from the first guess. Sector width and edge length
//   both grow with the parent's depth.
//
// Slots are in pre-order, so a parent is always placed before its children.

use std::f64::consts::TAU;

use super::visibility::Visibility;
use super::{LayoutConfig, PointF};

pub fn seed_positions(vis: &Visibility, cfg: &LayoutConfig) -> Vec<PointF> {
    let center = cfg.center();
    let mut positions = vec![center; vis.len()];
    if vis.is_empty() {
        return positions;
    }

    let ring = &vis.children[0];
    let step = TAU / ring.len().max(3) as f64;
    for (i, &child) in ring.iter().enumerate() {
        positions[child] = center.offset(i as f64 * step, cfg.root_radius);
    }

    for slot in 1..vis.len() {
        let children = &vis.children[slot];
        if children.is_empty() {
            continue;
        }

        let parent = positions[slot];
        let depth = vis.depth[slot] as f64;
        let bearing = center.bearing_to(parent);
        let half_width = (cfg.seed_sector_base + depth * cfg.seed_sector_per_depth).min(cfg.seed_sector_max);
        let link_len = cfg.seed_link_base + depth * cfg.seed_link_per_depth;

        let n = children.len();
        let step = if n > 1 { 2.0 * half_width / (n - 1) as f64 } else { 0.0 };
        let start = if n > 1 { -half_width } else { 0.0 };

        for (i, &child) in children.iter().enumerate() {
            let angle = bearing + start + i as f64 * step;
            positions[child] = parent.offset(angle, link_len);
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::f64::consts::PI;

    use super::*;
    use crate::layout::resolve_visibility;
    use crate::tree::model::fixtures::{branching, node};
    use crate::tree::{MindmapTree, TreeIndex};

    const EPS: f64 = 1e-9;

    fn seed(tree: &MindmapTree, expanded: &[&str]) -> (Visibility, Vec<PointF>) {
        let index = TreeIndex::new(&tree.nodes, &tree.links);
        let expanded: BTreeSet<String> = expanded.iter().map(|s| s.to_string()).collect();
        let vis = resolve_visibility(&index, &expanded, 15);
        let positions = seed_positions(&vis, &LayoutConfig::default());
        (vis, positions)
    }

    #[test]
    fn test_root_at_center() {
        let (_, positions) = seed(&branching(), &[]);
        assert_eq!(positions, [PointF::new(3500.0, 3500.0)]);
    }

    #[test]
    fn test_root_ring_floors_angle_step() {
        let tree = MindmapTree::with_derived_links(vec![
            node("root", &["a", "b"]),
            node("a", &[]),
            node("b", &[]),
        ]);
        let (_, positions) = seed(&tree, &["root"]);
        let center = PointF::new(3500.0, 3500.0);

        assert!((positions[1].x - 3900.0).abs() < EPS);
        assert!((positions[1].y - 3500.0).abs() < EPS);
        // two children still use a 120 degree step
        assert!((center.bearing_to(positions[2]) - 2.0 * PI / 3.0).abs() < EPS);
        assert!((center.distance(positions[2]) - 400.0).abs() < EPS);
    }

    #[test]
    fn test_children_fan_outward_from_parent() {
        let (vis, positions) = seed(&branching(), &["root", "a", "a1"]);
        let center = PointF::new(3500.0, 3500.0);
        let a = positions[1];

        // a sits at bearing 0; its two children straddle that bearing
        let (a1, a2) = (positions[vis.children[1][0]], positions[vis.children[1][1]]);
        assert!((a.distance(a1) - 420.0).abs() < EPS);
        assert!((a.bearing_to(a1) + 0.45).abs() < EPS);
        assert!((a.bearing_to(a2) - 0.45).abs() < EPS);

        // a single child continues straight along the parent's bearing
        let a1x = positions[vis.children[2][0]];
        assert!((a1.bearing_to(a1x) - center.bearing_to(a1)).abs() < EPS);
        assert!((a1.distance(a1x) - 460.0).abs() < EPS);
    }

    #[test]
    fn test_empty_visibility() {
        assert!(seed_positions(&Visibility::default(), &LayoutConfig::default()).is_empty());
    }
}
