//! Pan/zoom camera with drag momentum.
//!
//! Independent of layout: the renderer reads the camera to frame the layout's
//! view box, and a per-frame [`Camera::tick`] lets a released drag coast to
//! a stop. Nothing here is shared with the layouter.

use serde::{Deserialize, Serialize};

use crate::layout::ViewBox;

const PAN_SENSITIVITY: f64 = 0.8;
const MOMENTUM_GAIN: f64 = 0.3;
const FRICTION: f64 = 0.92;
const REST_SPEED: f64 = 0.1;
const GRAB_DAMPING: f64 = 0.5;
const ZOOM_STEP: f64 = 1.2;
const MIN_ZOOM: f64 = 0.3;
const MAX_ZOOM: f64 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Camera {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub dragging: bool,
    pub auto_fit: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
            dragging: false,
            auto_fit: true,
        }
    }
}

impl Camera {
    /// Grabbing halves any momentum left over from the previous drag.
    pub fn start_drag(&mut self) {
        self.dragging = true;
        self.velocity_x *= GRAB_DAMPING;
        self.velocity_y *= GRAB_DAMPING;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Pointer moved by (dx, dy) while dragging.
    pub fn drag_by(&mut self, dx: f64, dy: f64) {
        if !self.dragging {
            return;
        }
        self.pan_x -= dx * PAN_SENSITIVITY;
        self.pan_y -= dy * PAN_SENSITIVITY;
        self.velocity_x = dx * MOMENTUM_GAIN;
        self.velocity_y = dy * MOMENTUM_GAIN;
    }

    /// Advance one display frame of coasting.
    pub fn tick(&mut self) {
        if self.dragging {
            return;
        }
        self.velocity_x *= FRICTION;
        self.velocity_y *= FRICTION;
        self.pan_x += self.velocity_x;
        self.pan_y += self.velocity_y;
        if self.velocity_x.abs() < REST_SPEED {
            self.velocity_x = 0.0;
        }
        if self.velocity_y.abs() < REST_SPEED {
            self.velocity_y = 0.0;
        }
    }

    pub fn is_moving(&self) -> bool {
        self.velocity_x != 0.0 || self.velocity_y != 0.0
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
        self.auto_fit = false;
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
        self.auto_fit = false;
    }

    pub fn reset(&mut self) {
        *self = Self { dragging: self.dragging, ..Self::default() };
    }

    /// The view box actually shown: layout box shifted by pan, scaled by zoom.
    pub fn frame(&self, view_box: ViewBox) -> ViewBox {
        ViewBox {
            x: view_box.x + self.pan_x,
            y: view_box.y + self.pan_y,
            width: view_box.width / self.zoom,
            height: view_box.height / self.zoom,
        }
    }
}
