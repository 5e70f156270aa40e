//! Screen/world transform with pan and pointer-anchored zoom.
//!
//! `screen = (world - view_box) * zoom` and `world = screen / zoom + view_box`.
//! Zooming keeps the world point under the anchor fixed on screen.

use crate::geometry::limits::{ZOOM_MAX, ZOOM_MIN};
use crate::geometry::tolerance::{approx_eq, clamp, safe_div, EPS_ZOOM};
use crate::model::Position;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub(crate) view_box_x: f64,
    pub(crate) view_box_y: f64,
    pub(crate) zoom_level: f64,
    pub(crate) host_width: f64,
    pub(crate) host_height: f64,
    #[serde(skip, default = "default_zoom_bounds")]
    zoom_bounds: (f64, f64),
}

fn default_zoom_bounds() -> (f64, f64) {
    (ZOOM_MIN, ZOOM_MAX)
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(0.0, 0.0)
    }
}

impl Viewport {
    pub fn new(host_width: f64, host_height: f64) -> Self {
        Viewport {
            view_box_x: 0.0,
            view_box_y: 0.0,
            zoom_level: 1.0,
            host_width: host_width.max(0.0),
            host_height: host_height.max(0.0),
            zoom_bounds: default_zoom_bounds(),
        }
    }

    /// Narrow the zoom clamp. Bounds are ordered and never leave
    /// `ZOOM_MIN..=ZOOM_MAX`.
    pub fn with_zoom_bounds(mut self, min: f64, max: f64) -> Self {
        let lo = if min.is_finite() { clamp(min, ZOOM_MIN, ZOOM_MAX) } else { ZOOM_MIN };
        let hi = if max.is_finite() { clamp(max, ZOOM_MIN, ZOOM_MAX) } else { ZOOM_MAX };
        self.zoom_bounds = (lo.min(hi), lo.max(hi));
        self.zoom_level = self.clamp_zoom(self.zoom_level);
        self
    }

    pub fn zoom_bounds(&self) -> (f64, f64) {
        self.zoom_bounds
    }

    pub fn view_box_x(&self) -> f64 {
        self.view_box_x
    }
    pub fn view_box_y(&self) -> f64 {
        self.view_box_y
    }
    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }
    pub fn host_width(&self) -> f64 {
        self.host_width
    }
    pub fn host_height(&self) -> f64 {
        self.host_height
    }

    fn clamp_zoom(&self, z: f64) -> f64 {
        clamp(z, self.zoom_bounds.0, self.zoom_bounds.1)
    }

    pub fn to_world(&self, screen_x: f64, screen_y: f64) -> Position {
        Position {
            x: screen_x / self.zoom_level + self.view_box_x,
            y: screen_y / self.zoom_level + self.view_box_y,
        }
    }

    pub fn to_screen(&self, world_x: f64, world_y: f64) -> Position {
        Position {
            x: (world_x - self.view_box_x) * self.zoom_level,
            y: (world_y - self.view_box_y) * self.zoom_level,
        }
    }

    /// Screen-space deltas; dragging right reveals world to the left.
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        if !dx.is_finite() || !dy.is_finite() {
            return false;
        }
        self.view_box_x -= dx / self.zoom_level;
        self.view_box_y -= dy / self.zoom_level;
        true
    }

    /// Multiply the zoom by `factor` about the pointer (or the host centre).
    /// Returns false when the clamped level is unchanged or input is invalid.
    pub fn zoom(&mut self, factor: f64, pointer: Option<(f64, f64)>) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let next = self.clamp_zoom(self.zoom_level * factor);
        if approx_eq(next, self.zoom_level, EPS_ZOOM) {
            return false;
        }
        let (sx, sy) = match pointer {
            Some((x, y)) if x.is_finite() && y.is_finite() => (x, y),
            _ => (self.host_width * 0.5, self.host_height * 0.5),
        };
        let anchor = self.to_world(sx, sy);
        self.zoom_level = next;
        self.view_box_x = anchor.x - sx / next;
        self.view_box_y = anchor.y - sy / next;
        true
    }

    /// Set origin and zoom directly; the zoom is clamped.
    pub fn set_view(&mut self, x: f64, y: f64, zoom_level: f64) -> bool {
        if !x.is_finite() || !y.is_finite() || !zoom_level.is_finite() || zoom_level <= 0.0 {
            return false;
        }
        self.view_box_x = x;
        self.view_box_y = y;
        self.zoom_level = self.clamp_zoom(zoom_level);
        true
    }

    pub fn resize(&mut self, host_width: f64, host_height: f64) -> bool {
        if !host_width.is_finite() || !host_height.is_finite() || host_width < 0.0 || host_height < 0.0 {
            return false;
        }
        self.host_width = host_width;
        self.host_height = host_height;
        true
    }

    /// Zoom to fit the world rectangle and centre it in the host.
    pub fn fit(&mut self, min: Position, max: Position) -> bool {
        let w = max.x - min.x;
        let h = max.y - min.y;
        if !(w > 0.0 && h > 0.0) || self.host_width <= 0.0 || self.host_height <= 0.0 {
            return false;
        }
        let z = safe_div(self.host_width, w, 1.0).min(safe_div(self.host_height, h, 1.0));
        self.zoom_level = self.clamp_zoom(z);
        let cx = (min.x + max.x) * 0.5;
        let cy = (min.y + max.y) * 0.5;
        self.view_box_x = cx - self.host_width * 0.5 / self.zoom_level;
        self.view_box_y = cy - self.host_height * 0.5 / self.zoom_level;
        true
    }

    /// World rectangle currently visible in the host.
    pub fn visible_world(&self) -> (Position, Position) {
        (self.to_world(0.0, 0.0), self.to_world(self.host_width, self.host_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_clamps_and_reports_unchanged() {
        let mut v = Viewport::new(800.0, 600.0);
        assert!(v.zoom(100.0, None));
        assert_eq!(v.zoom_level, ZOOM_MAX);
        assert!(!v.zoom(2.0, None));
        assert!(!v.zoom(0.0, None));
        assert!(!v.zoom(f64::NAN, None));
    }

    #[test]
    fn fit_centres_rectangle() {
        let mut v = Viewport::new(800.0, 400.0);
        assert!(v.fit(Position::new(0.0, 0.0), Position::new(400.0, 400.0)));
        assert_eq!(v.zoom_level, 1.0);
        let c = v.to_screen(200.0, 200.0);
        assert!((c.x - 400.0).abs() < 1e-9 && (c.y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn custom_bounds_apply() {
        let mut v = Viewport::new(100.0, 100.0).with_zoom_bounds(4.0, 0.5);
        assert_eq!(v.zoom_bounds(), (0.5, 4.0));
        assert!(v.set_view(0.0, 0.0, 9.0));
        assert_eq!(v.zoom_level, 4.0);
    }

    #[test]
    fn bounds_cannot_widen_past_fixed_limits() {
        let mut v = Viewport::new(100.0, 100.0).with_zoom_bounds(0.001, 1000.0);
        assert_eq!(v.zoom_bounds(), (ZOOM_MIN, ZOOM_MAX));
        assert!(v.zoom(500.0, None));
        assert_eq!(v.zoom_level, ZOOM_MAX);
        let v = Viewport::new(100.0, 100.0).with_zoom_bounds(-3.0, f64::NAN);
        assert_eq!(v.zoom_bounds(), (ZOOM_MIN, ZOOM_MAX));
    }
}
