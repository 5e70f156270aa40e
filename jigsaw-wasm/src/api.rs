use crate::error;
use crate::interop::{placement_arrays, to_js};
use crate::Table;
use jigsaw::{Command, ImageInfo, Position, PuzzleConfig};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl Table {
    #[wasm_bindgen(constructor)]
    pub fn new(url: String, width: f64, height: f64, piece_count: u32, seed: u32) -> Result<Table, JsValue> {
        let config = PuzzleConfig::default().with_piece_count(piece_count);
        Table::rs_new(ImageInfo::new(url, width, height), config, seed).map_err(|e| error::throw(&e))
    }
    /// `config` is a plain object; missing fields take the defaults.
    pub fn with_config(url: String, width: f64, height: f64, config: JsValue, seed: u32) -> Result<Table, JsValue> {
        let config: PuzzleConfig = if config.is_undefined() || config.is_null() {
            PuzzleConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| error::throw(&jigsaw::PuzzleError::Json(e.to_string())))?
        };
        Table::rs_new(ImageInfo::new(url, width, height), config, seed).map_err(|e| error::throw(&e))
    }
    pub fn state_version(&self) -> u64 {
        self.rs_state_version()
    }

    // Puzzle facts
    pub fn rows(&self) -> u32 {
        self.inner.puzzle().rows()
    }
    pub fn cols(&self) -> u32 {
        self.inner.puzzle().cols()
    }
    pub fn piece_count(&self) -> u32 {
        self.inner.puzzle().piece_count()
    }
    pub fn grid_label(&self) -> String {
        self.inner.puzzle().grid().label()
    }
    pub fn snap_threshold(&self) -> f64 {
        self.inner.puzzle().snap_threshold()
    }
    pub fn snapped_count(&self) -> u32 {
        self.inner.snapped_count()
    }
    pub fn is_solved(&self) -> bool {
        self.inner.is_solved()
    }
    pub fn selected(&self) -> Option<u32> {
        self.inner.selected()
    }

    // Selection and drag
    pub fn select(&mut self, id: u32) -> bool {
        self.inner.select(Some(id), None)
    }
    pub fn select_res(&mut self, id: u32) -> JsValue {
        if self.inner.piece(id).is_none() {
            return error::invalid_id("piece", id);
        }
        error::ok(JsValue::from_bool(self.inner.select(Some(id), None)))
    }
    /// Select `id` and start dragging it from the pointer at screen (x, y).
    pub fn grab(&mut self, id: u32, screen_x: f64, screen_y: f64) -> bool {
        let world = self.inner.viewport().to_world(screen_x, screen_y);
        self.inner.select(Some(id), Some(world))
    }
    pub fn grab_res(&mut self, id: u32, screen_x: f64, screen_y: f64) -> JsValue {
        if !screen_x.is_finite() {
            return error::non_finite("screen_x");
        }
        if !screen_y.is_finite() {
            return error::non_finite("screen_y");
        }
        if self.inner.piece(id).is_none() {
            return error::invalid_id("piece", id);
        }
        error::ok(JsValue::from_bool(self.grab(id, screen_x, screen_y)))
    }
    pub fn deselect(&mut self) {
        self.inner.select(None, None);
    }
    pub fn move_piece(&mut self, id: u32, screen_x: f64, screen_y: f64) -> bool {
        self.inner.move_piece(id, screen_x, screen_y)
    }
    pub fn move_piece_res(&mut self, id: u32, screen_x: f64, screen_y: f64) -> JsValue {
        if !screen_x.is_finite() {
            return error::non_finite("screen_x");
        }
        if !screen_y.is_finite() {
            return error::non_finite("screen_y");
        }
        if let Err(e) = self.check_selected(id) {
            return e;
        }
        if self.inner.drag_session().map(|d| d.piece) != Some(id) {
            return error::no_drag(id);
        }
        error::ok(JsValue::from_bool(self.inner.move_piece(id, screen_x, screen_y)))
    }
    /// Returns whether the piece snapped into its slot.
    pub fn release_and_snap(&mut self, id: u32, threshold: f64) -> bool {
        self.inner.release_and_snap(id, threshold) == jigsaw::CommandOutcome::Snapped
    }
    /// Release with the puzzle's default snap distance.
    pub fn release(&mut self, id: u32) -> bool {
        self.inner.release(id) == jigsaw::CommandOutcome::Snapped
    }
    pub fn release_and_snap_res(&mut self, id: u32, threshold: f64) -> JsValue {
        if !threshold.is_finite() {
            return error::non_finite("threshold");
        }
        if let Err(e) = self.check_selected(id) {
            return e;
        }
        error::ok(to_js(&self.inner.release_and_snap(id, threshold)))
    }
    pub fn rotate(&mut self, id: u32, turns: i32) -> bool {
        self.inner.rotate(id, turns as i64)
    }
    pub fn rotate_res(&mut self, id: u32, turns: i32) -> JsValue {
        if let Err(e) = self.check_selected(id) {
            return e;
        }
        self.inner.rotate(id, turns as i64);
        let rotation = self.inner.piece(id).map(|p| p.rotation()).unwrap_or(0);
        error::ok(JsValue::from_f64(rotation as f64))
    }

    // Viewport
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        self.inner.pan(dx, dy)
    }
    pub fn zoom(&mut self, factor: f64, screen_x: Option<f64>, screen_y: Option<f64>) -> bool {
        self.inner.zoom(factor, screen_x.zip(screen_y))
    }
    pub fn zoom_res(&mut self, factor: f64, screen_x: Option<f64>, screen_y: Option<f64>) -> JsValue {
        if !factor.is_finite() {
            return error::non_finite("factor");
        }
        if factor <= 0.0 {
            return error::err("out_of_range", "zoom factor must be positive", None);
        }
        let changed = self.inner.zoom(factor, screen_x.zip(screen_y));
        error::ok(JsValue::from_bool(changed))
    }
    pub fn set_view(&mut self, x: f64, y: f64, zoom: f64) -> bool {
        self.inner.set_view(x, y, zoom)
    }
    pub fn set_view_res(&mut self, x: f64, y: f64, zoom: f64) -> JsValue {
        for (name, v) in [("x", x), ("y", y), ("zoom", zoom)] {
            if !v.is_finite() {
                return error::non_finite(name);
            }
        }
        if zoom <= 0.0 {
            return error::err("out_of_range", "zoom must be positive", None);
        }
        error::ok(JsValue::from_bool(self.inner.set_view(x, y, zoom)))
    }
    pub fn resize(&mut self, host_width: f64, host_height: f64) -> bool {
        self.inner.resize(host_width, host_height)
    }
    pub fn fit_board(&mut self) -> bool {
        self.inner.fit_board()
    }
    pub fn to_world(&self, screen_x: f64, screen_y: f64) -> Vec<f64> {
        let w = self.inner.viewport().to_world(screen_x, screen_y);
        vec![w.x, w.y]
    }
    pub fn get_viewport(&self) -> JsValue {
        to_js(self.inner.viewport())
    }

    // Picking
    pub fn pick(&self, screen_x: f64, screen_y: f64, tol_px: f64) -> Option<u32> {
        self.inner.pick_screen(screen_x, screen_y, tol_px)
    }
    pub fn pick_res(&self, screen_x: f64, screen_y: f64, tol_px: f64) -> JsValue {
        if !screen_x.is_finite() {
            return error::non_finite("screen_x");
        }
        if !screen_y.is_finite() {
            return error::non_finite("screen_y");
        }
        if !tol_px.is_finite() {
            return error::non_finite("tol_px");
        }
        if tol_px < 0.0 {
            return error::err("out_of_range", "tol_px must be non-negative", None);
        }
        match self.pick(screen_x, screen_y, tol_px) {
            Some(id) => error::ok(JsValue::from_f64(id as f64)),
            None => error::ok(JsValue::NULL),
        }
    }

    // Render data
    pub fn get_pieces(&self) -> JsValue {
        to_js(&self.inner.puzzle().piece_views())
    }
    pub fn get_piece(&self, id: u32) -> JsValue {
        match self.inner.piece(id) {
            Some(p) => to_js(&p.view()),
            None => JsValue::NULL,
        }
    }
    pub fn get_piece_res(&self, id: u32) -> JsValue {
        match self.inner.piece(id) {
            Some(p) => error::ok(to_js(&p.view())),
            None => error::invalid_id("piece", id),
        }
    }
    pub fn get_puzzle_info(&self) -> JsValue {
        to_js(&self.inner.puzzle().info())
    }
    /// Typed arrays in z-order (bottom to top): ids, x/y placements, rotations.
    pub fn get_placements(&self) -> JsValue {
        let ids: Vec<u32> = self.inner.z_order().to_vec();
        let mut positions = Vec::with_capacity(ids.len() * 2);
        let mut rotations = Vec::with_capacity(ids.len());
        for &id in &ids {
            let (p, r) = self
                .inner
                .piece(id)
                .map(|p| (p.placement(), p.rotation()))
                .unwrap_or((Position::ORIGIN, 0));
            positions.push(p.x);
            positions.push(p.y);
            rotations.push(r);
        }
        placement_arrays(&ids, &positions, &rotations).into()
    }
    pub fn take_render_diff(&mut self) -> JsValue {
        to_js(&self.inner.take_render_diff())
    }

    /// Apply a JSON command such as `{"type":"pan","dx":4,"dy":0}`.
    pub fn apply_command(&mut self, json: &str) -> JsValue {
        match serde_json::from_str::<Command>(json) {
            Ok(cmd) => error::ok(to_js(&self.inner.apply(cmd))),
            Err(e) => error::from_puzzle(&jigsaw::PuzzleError::from(e)),
        }
    }

    pub fn to_json(&self) -> JsValue {
        to_js(&self.inner.to_json())
    }
    pub fn to_json_string(&self) -> String {
        self.inner.to_json().to_string()
    }
}

impl Table {
    fn check_selected(&self, id: u32) -> Result<(), JsValue> {
        if self.inner.piece(id).is_none() {
            return Err(error::invalid_id("piece", id));
        }
        if self.inner.selected() != Some(id) {
            return Err(error::not_selected(id));
        }
        Ok(())
    }
}
