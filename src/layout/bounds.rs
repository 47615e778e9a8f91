// Viewport bounds.
//
// Minimal axis-aligned box around every visible node, grown by `padding` on
// all sides. Nothing visible falls back to the full canvas so callers never
// see an empty or NaN box.

use super::{LayoutConfig, PointF, ViewBox};

pub fn compute_view_box(positions: &[PointF], cfg: &LayoutConfig) -> ViewBox {
    let Some(first) = positions.first() else {
        return cfg.canvas_box();
    };

    let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
    for p in &positions[1..] {
        x0 = x0.min(p.x);
        y0 = y0.min(p.y);
        x1 = x1.max(p.x);
        y1 = y1.max(p.y);
    }

    ViewBox {
        x: x0 - cfg.padding,
        y: y0 - cfg.padding,
        width: x1 - x0 + 2.0 * cfg.padding,
        height: y1 - y0 + 2.0 * cfg.padding,
    }
}
