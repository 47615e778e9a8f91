// Iterative outward-flow relaxation.
//
// Each round applies three corrections, in order, updating positions in
// place (later nodes in a pass see earlier nodes' moves):
// 1. Radial push: non-root nodes too close to the center for their depth
//    are pushed straight away from it.
// 2. Collisions: every pair closer than `collision_factor * node_size` is
//    pushed apart along the line joining them. Each node of a pair gets its
//    own correction when it is visited. O(n²), no spatial index, so the
//    order in which nodes yield to each other stays the slot order.
// 3. Edge stretch: visible edges shorter than their target length push the
//    child further out along the parent -> child bearing. Parents stay put.
//
// The root (slot 0) is pinned and never moves. Rounds stop early once the
// summed displacement of a round drops below `convergence_threshold`.

use log::debug;

use super::visibility::Visibility;
use super::{LayoutConfig, PointF};

/// Below this, two points are treated as coincident.
const MIN_DIST: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RelaxationStats {
    /// Rounds executed, including the one that converged.
    pub rounds: usize,
    pub converged: bool,
    /// Summed displacement of the last round.
    pub last_movement: f64,
}

pub fn relax(positions: &mut [PointF], vis: &Visibility, cfg: &LayoutConfig) -> RelaxationStats {
    let mut stats = RelaxationStats::default();
    if vis.len() < 2 {
        stats.converged = true;
        return stats;
    }

    for _ in 0..cfg.max_rounds {
        let movement = push_outward(positions, vis, cfg)
            + resolve_collisions(positions, cfg)
            + stretch_edges(positions, vis, cfg);

        stats.rounds += 1;
        stats.last_movement = movement;
        if movement < cfg.convergence_threshold {
            stats.converged = true;
            break;
        }
    }

    if !stats.converged {
        debug!(
            "relaxation stopped at round cap {} with movement {:.2}",
            cfg.max_rounds, stats.last_movement
        );
    }
    stats
}

/// Hard backstop: keep every non-root node inside the canvas margins.
pub fn clamp_to_canvas(positions: &mut [PointF], cfg: &LayoutConfig) {
    let (lo_x, hi_x) = (cfg.clamp_margin, cfg.canvas_width - cfg.clamp_margin);
    let (lo_y, hi_y) = (cfg.clamp_margin, cfg.canvas_height - cfg.clamp_margin);
    for p in positions.iter_mut().skip(1) {
        p.x = p.x.max(lo_x).min(hi_x);
        p.y = p.y.max(lo_y).min(hi_y);
    }
}

/// Unit vector from `from` to `to`, or `None` if they coincide.
fn direction(from: PointF, to: PointF) -> Option<(f64, f64)> {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let dist = dx.hypot(dy);
    (dist > MIN_DIST).then(|| (dx / dist, dy / dist))
}

fn push_outward(positions: &mut [PointF], vis: &Visibility, cfg: &LayoutConfig) -> f64 {
    let center = cfg.center();
    let mut movement = 0.0;

    for slot in 1..positions.len() {
        let pos = positions[slot];
        let dist = center.distance(pos);
        let target = cfg.radial_base + vis.depth[slot] as f64 * cfg.radial_per_depth;
        if dist >= target * cfg.radial_trigger {
            continue;
        }

        let push = (target - dist) * cfg.radial_strength;
        let (ux, uy) = direction(center, pos).unwrap_or((1.0, 0.0));
        positions[slot] = PointF::new(pos.x + ux * push, pos.y + uy * push);
        movement += push;
    }

    movement
}

fn resolve_collisions(positions: &mut [PointF], cfg: &LayoutConfig) -> f64 {
    let min_sep = cfg.min_separation();
    let mut movement = 0.0;

    for i in 1..positions.len() {
        for j in 0..positions.len() {
            if i == j {
                continue;
            }
            let (me, other) = (positions[i], positions[j]);
            let dist = me.distance(other);
            if dist >= min_sep {
                continue;
            }

            let push = (min_sep - dist) * cfg.collision_strength;
            // Coincident nodes split along x by slot order
            let (ux, uy) = direction(other, me).unwrap_or(if i < j { (-1.0, 0.0) } else { (1.0, 0.0) });
            positions[i] = PointF::new(me.x + ux * push, me.y + uy * push);
            movement += push;
        }
    }

    movement
}

fn stretch_edges(positions: &mut [PointF], vis: &Visibility, cfg: &LayoutConfig) -> f64 {
    let center = cfg.center();
    let mut movement = 0.0;

    for link in &vis.links {
        let (parent, child) = (positions[link.parent], positions[link.child]);
        let dist = parent.distance(child);
        let target = cfg.edge_base + vis.depth[link.child] as f64 * cfg.edge_per_depth;
        if dist >= target * cfg.edge_trigger {
            continue;
        }

        let extend = (target - dist) * cfg.edge_strength;
        let (ux, uy) = direction(parent, child)
            .or_else(|| direction(center, parent))
            .unwrap_or((1.0, 0.0));
        positions[link.child] = PointF::new(child.x + ux * extend, child.y + uy * extend);
        movement += extend;
    }

    movement
}
