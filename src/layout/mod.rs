// Radial mindmap layouter.
//
// Goals:
// - Deterministic: no randomness, no time budgets
// - Pure: a function of (tree store, config), nothing survives between calls
// - Outward-branching: depth correlates with distance from the canvas center
// - No overlap between visible nodes, roughly uniform edge lengths
//
// Submodules:
// - visibility: which nodes/links the expanded set reveals, plus depths
// - radial_placement: seed positions fanning away from the root
// - relaxation: bounded rounds of radial push / collision / edge stretch
// - bounds: padded viewport around the result
// - neighbors: highlight set around the selection
//
// Output:
// - LayoutResult with positions, visible subset, neighbor ids and view box.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::MindmapError;
use crate::tree::{Link, MindmapState};

mod bounds;
mod neighbors;
mod radial_placement;
mod relaxation;
mod visibility;

pub use bounds::compute_view_box;
pub use neighbors::{resolve_neighbors, Neighborhood};
pub use radial_placement::seed_positions;
pub use relaxation::{clamp_to_canvas, relax, RelaxationStats};
pub use visibility::{resolve_visibility, Visibility, VisibleLink};

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: PointF) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Angle of the vector self -> other.
    pub fn bearing_to(&self, other: PointF) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Point `len` away along `angle`.
    pub fn offset(&self, angle: f64, len: f64) -> PointF {
        PointF { x: self.x + angle.cos() * len, y: self.y + angle.sin() * len }
    }
}

/// Axis-aligned rendering viewport.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }

    pub fn contains(&self, p: PointF) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Canvas extent. The root sits at its center.
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Node footprint; collision spacing is a multiple of it.
    pub node_size: f64,
    /// Padding added around the visible nodes for the view box.
    pub padding: f64,
    /// Final positions are clamped to [margin, extent - margin].
    pub clamp_margin: f64,
    /// Visibility traversal drops anything deeper than this.
    pub max_visible_depth: usize,

    /// Radius of the first ring around the root.
    pub root_radius: f64,
    /// Seed edge length: base + parent_depth * per_depth.
    pub seed_link_base: f64,
    pub seed_link_per_depth: f64,
    /// Half-width of a child fan: min(max, base + parent_depth * per_depth).
    pub seed_sector_base: f64,
    pub seed_sector_per_depth: f64,
    pub seed_sector_max: f64,

    /// Relaxation round cap and early-exit movement threshold.
    pub max_rounds: usize,
    pub convergence_threshold: f64,

    /// Radial push: target distance from center = base + depth * per_depth.
    pub radial_base: f64,
    pub radial_per_depth: f64,
    pub radial_trigger: f64,
    pub radial_strength: f64,

    /// Collision: minimum separation = factor * node_size.
    pub collision_factor: f64,
    pub collision_strength: f64,

    /// Edge stretch: target length = base + child_depth * per_depth.
    pub edge_base: f64,
    pub edge_per_depth: f64,
    pub edge_trigger: f64,
    pub edge_strength: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 7000.0,
            canvas_height: 7000.0,
            node_size: 80.0,
            padding: 400.0,
            clamp_margin: 250.0,
            max_visible_depth: 15,

            root_radius: 400.0,
            seed_link_base: 380.0,
            seed_link_per_depth: 40.0,
            seed_sector_base: 0.4,
            seed_sector_per_depth: 0.05,
            seed_sector_max: 0.9 * PI,

            max_rounds: 15,
            convergence_threshold: 8.0,

            radial_base: 450.0,
            radial_per_depth: 80.0,
            radial_trigger: 0.85,
            radial_strength: 0.4,

            collision_factor: 2.5,
            collision_strength: 0.7,

            edge_base: 380.0,
            edge_per_depth: 30.0,
            edge_trigger: 0.9,
            edge_strength: 0.5,
        }
    }
}

impl LayoutConfig {
    pub fn center(&self) -> PointF {
        PointF::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Full canvas, used when nothing is visible.
    pub fn canvas_box(&self) -> ViewBox {
        ViewBox { x: 0.0, y: 0.0, width: self.canvas_width, height: self.canvas_height }
    }

    pub fn min_separation(&self) -> f64 {
        self.collision_factor * self.node_size
    }

    pub fn validate(&self) -> Result<(), MindmapError> {
        let positive = [
            ("canvasWidth", self.canvas_width),
            ("canvasHeight", self.canvas_height),
            ("nodeSize", self.node_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(MindmapError::InvalidConfig(format!("{name} must be positive, got {value}")));
            }
        }
        let finite = [
            ("padding", self.padding),
            ("clampMargin", self.clamp_margin),
            ("convergenceThreshold", self.convergence_threshold),
            ("rootRadius", self.root_radius),
        ];
        for (name, value) in finite {
            if !value.is_finite() || value < 0.0 {
                return Err(MindmapError::InvalidConfig(format!("{name} must be non-negative, got {value}")));
            }
        }
        if self.max_rounds == 0 {
            return Err(MindmapError::InvalidConfig("maxRounds must be at least 1".into()));
        }
        if 2.0 * self.clamp_margin > self.canvas_width.min(self.canvas_height) {
            return Err(MindmapError::InvalidConfig("clampMargin leaves no room on the canvas".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub root: Option<String>,
    /// Final position of every visible node.
    pub positions: BTreeMap<String, PointF>,
    /// Visible nodes in depth-first pre-order.
    pub visible_node_ids: Vec<String>,
    pub visible_links: Vec<Link>,
    /// Hop distance from the root along the visible traversal.
    pub depths: BTreeMap<String, usize>,
    pub neighbor_node_ids: Vec<String>,
    pub neighbor_link_ids: Vec<String>,
    pub view_box: ViewBox,
    pub rounds: usize,
    pub converged: bool,
}

/// Compute the full layout for the current store contents.
pub fn compute_layout(state: &MindmapState, cfg: &LayoutConfig) -> LayoutResult {
    let index = state.index();
    let vis = resolve_visibility(&index, &state.expanded, cfg.max_visible_depth);

    let mut positions = seed_positions(&vis, cfg);
    let stats = relax(&mut positions, &vis, cfg);
    clamp_to_canvas(&mut positions, cfg);

    debug!(
        "layout: {} visible, {} rounds, converged={}",
        vis.len(),
        stats.rounds,
        stats.converged
    );

    let view_box = compute_view_box(&positions, cfg);
    let neighborhood = resolve_neighbors(&state.links, state.selected_node_id.as_deref());

    let ids: Vec<String> = vis.nodes.iter().map(|&n| index.id(n).to_string()).collect();

    LayoutResult {
        root: ids.first().cloned(),
        positions: ids.iter().cloned().zip(positions.iter().copied()).collect(),
        depths: ids.iter().cloned().zip(vis.depth.iter().copied()).collect(),
        visible_links: vis.links.iter().map(|l| index.link(l.link).clone()).collect(),
        visible_node_ids: ids,
        neighbor_node_ids: neighborhood.node_ids,
        neighbor_link_ids: neighborhood.link_ids,
        view_box,
        rounds: stats.rounds,
        converged: stats.converged,
    }
}
