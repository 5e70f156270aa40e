pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod piece;
pub mod puzzle;
pub mod viewport;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod path;
    pub mod tolerance;
    pub mod wave;
}
pub mod algorithms {
    pub mod grid;
    pub mod picking;
    pub mod scatter;
}
mod json;

pub use command::{Command, CommandOutcome};
pub use config::PuzzleConfig;
pub use error::PuzzleError;
pub use model::{EdgeSide, ImageInfo, Joint, PieceJoints, PieceView, Position, PuzzleInfo};
pub use piece::Piece;
pub use puzzle::Puzzle;
pub use viewport::Viewport;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeSet;

/// Live grab: offset from the piece's top-left to the pointer, in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DragSession {
    pub piece: u32,
    pub grab_offset: Position,
}

#[derive(Clone, Debug, Default)]
pub struct DirtyState {
    pub since_ver: u64,
    pub pieces: BTreeSet<u32>,
    pub viewport: bool,
    pub selection: bool,
    pub order: bool,
}

/// Changes since the previous [`Table::take_render_diff`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDiff {
    pub since_version: u64,
    pub version: u64,
    pub pieces: Vec<PieceView>,
    pub viewport: Option<Viewport>,
    pub selection_changed: bool,
    pub selected: Option<u32>,
    pub z_order: Option<Vec<u32>>,
}

impl RenderDiff {
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty() && self.viewport.is_none() && !self.selection_changed && self.z_order.is_none()
    }
}

/// Interactive puzzle table: the puzzle plus viewport, exclusive selection,
/// drag session and stacking order. Every command runs to completion.
pub struct Table {
    pub(crate) puzzle: Puzzle,
    pub(crate) viewport: Viewport,
    pub(crate) selected: Option<u32>,
    pub(crate) drag: Option<DragSession>,
    pub(crate) z_order: Vec<u32>, // bottom to top
    pub(crate) state_ver: u64,
    pub(crate) dirty: DirtyState,
}

impl Table {
    /// Generate, scatter and wrap a puzzle using a seeded generator.
    pub fn new(image: ImageInfo, config: PuzzleConfig, seed: u64) -> error::Result<Table> {
        let mut rng = StdRng::seed_from_u64(seed);
        Table::with_rng(image, config, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(image: ImageInfo, config: PuzzleConfig, rng: &mut R) -> error::Result<Table> {
        let mut puzzle = Puzzle::generate(image, config, rng)?;
        puzzle.scatter(rng);
        Ok(Table::from_puzzle(puzzle))
    }

    pub fn from_puzzle(puzzle: Puzzle) -> Table {
        let (zoom_min, zoom_max) = puzzle.config().zoom_range();
        let viewport = Viewport::default().with_zoom_bounds(zoom_min, zoom_max);
        let z_order = (0..puzzle.piece_count()).collect();
        let mut t = Table {
            puzzle,
            viewport,
            selected: None,
            drag: None,
            z_order,
            state_ver: 1,
            dirty: DirtyState { since_ver: 1, ..Default::default() },
        };
        t.mark_full_dirty();
        t
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }
    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }
    pub fn z_order(&self) -> &[u32] {
        &self.z_order
    }
    pub fn state_version(&self) -> u64 {
        self.state_ver
    }
    pub fn piece(&self, id: u32) -> Option<&Piece> {
        self.puzzle.piece(id)
    }
    pub fn is_solved(&self) -> bool {
        self.puzzle.is_solved()
    }
    pub fn snapped_count(&self) -> u32 {
        self.puzzle.snapped_count()
    }

    fn bump(&mut self) {
        self.state_ver = self.state_ver.wrapping_add(1);
    }

    fn mark_full_dirty(&mut self) {
        self.dirty.pieces.extend(0..self.puzzle.piece_count());
        self.dirty.viewport = true;
        self.dirty.selection = true;
        self.dirty.order = true;
    }

    fn raise(&mut self, id: u32) {
        if self.z_order.last() == Some(&id) {
            return;
        }
        self.z_order.retain(|&p| p != id);
        self.z_order.push(id);
        self.dirty.order = true;
    }

    // True when `id` exists and holds the selection; logs the rejection otherwise.
    fn require_selected(&self, id: u32, command: &'static str) -> bool {
        if self.puzzle.piece(id).is_none() {
            tracing::debug!(command, piece = id, "unknown piece id");
            return false;
        }
        if self.selected != Some(id) {
            tracing::debug!(command, piece = id, selected = ?self.selected, "piece is not selected");
            return false;
        }
        true
    }

    /// Exclusive selection. `pointer_world` starts a drag session anchored at
    /// that world point. `None` clears the selection and any drag.
    pub fn select(&mut self, piece: Option<u32>, pointer_world: Option<Position>) -> bool {
        let Some(id) = piece else {
            self.clear_selection();
            return true;
        };
        if self.puzzle.piece(id).is_none() {
            tracing::debug!(command = "select", piece = id, "unknown piece id");
            return false;
        }
        self.clear_selection();
        if let Some(p) = self.puzzle.piece_mut(id) {
            p.set_selected(true);
            let placement = p.placement();
            self.drag = pointer_world
                .filter(|w| w.is_finite())
                .map(|w| DragSession { piece: id, grab_offset: w - placement });
        }
        self.selected = Some(id);
        self.dirty.pieces.insert(id);
        self.dirty.selection = true;
        self.raise(id);
        self.bump();
        true
    }

    fn clear_selection(&mut self) {
        if let Some(prev) = self.selected.take() {
            if let Some(p) = self.puzzle.piece_mut(prev) {
                p.set_selected(false);
            }
            self.dirty.pieces.insert(prev);
            self.dirty.selection = true;
            self.bump();
        }
        self.drag = None;
    }

    /// Drag the selected piece so the grab point follows the pointer.
    pub fn move_piece(&mut self, id: u32, screen_x: f64, screen_y: f64) -> bool {
        if !self.require_selected(id, "move") {
            return false;
        }
        let Some(session) = self.drag.filter(|d| d.piece == id) else {
            tracing::debug!(command = "move", piece = id, "no drag session");
            return false;
        };
        if !screen_x.is_finite() || !screen_y.is_finite() {
            tracing::debug!(command = "move", piece = id, "non-finite pointer");
            return false;
        }
        let world = self.viewport.to_world(screen_x, screen_y);
        if let Some(p) = self.puzzle.piece_mut(id) {
            p.place(world - session.grab_offset);
        }
        self.dirty.pieces.insert(id);
        self.bump();
        true
    }

    /// End the drag and test the snap. The selection is kept.
    pub fn release_and_snap(&mut self, id: u32, threshold: f64) -> CommandOutcome {
        if !self.require_selected(id, "releaseAndSnap") {
            return CommandOutcome::Ignored;
        }
        if self.drag.map(|d| d.piece) == Some(id) {
            self.drag = None;
        }
        let threshold = if threshold.is_finite() { threshold.max(0.0) } else { 0.0 };
        let snapped = match self.puzzle.piece_mut(id) {
            Some(p) => p.snap(threshold),
            None => return CommandOutcome::Ignored,
        };
        self.dirty.pieces.insert(id);
        self.bump();
        if snapped {
            tracing::debug!(piece = id, snapped = self.puzzle.snapped_count(), "piece snapped");
            if self.puzzle.is_solved() {
                tracing::info!(pieces = self.puzzle.piece_count(), "puzzle solved");
            }
            CommandOutcome::Snapped
        } else {
            CommandOutcome::NotSnapped
        }
    }

    /// Release using the puzzle's default snap distance.
    pub fn release(&mut self, id: u32) -> CommandOutcome {
        let threshold = self.puzzle.snap_threshold();
        self.release_and_snap(id, threshold)
    }

    pub fn rotate(&mut self, id: u32, turns: i64) -> bool {
        if !self.require_selected(id, "rotate") {
            return false;
        }
        if let Some(p) = self.puzzle.piece_mut(id) {
            p.rotate(turns);
        }
        self.dirty.pieces.insert(id);
        self.bump();
        true
    }

    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        if !self.viewport.pan(dx, dy) {
            tracing::debug!(command = "pan", "non-finite delta");
            return false;
        }
        self.dirty.viewport = true;
        self.bump();
        true
    }

    pub fn zoom(&mut self, factor: f64, pointer: Option<(f64, f64)>) -> bool {
        if !self.viewport.zoom(factor, pointer) {
            tracing::debug!(command = "zoom", factor, zoom = self.viewport.zoom_level, "zoom unchanged");
            return false;
        }
        self.dirty.viewport = true;
        self.bump();
        true
    }

    pub fn set_view(&mut self, x: f64, y: f64, zoom_level: f64) -> bool {
        if !self.viewport.set_view(x, y, zoom_level) {
            tracing::debug!(command = "setView", "invalid view");
            return false;
        }
        self.dirty.viewport = true;
        self.bump();
        true
    }

    pub fn resize(&mut self, host_width: f64, host_height: f64) -> bool {
        if !self.viewport.resize(host_width, host_height) {
            return false;
        }
        self.dirty.viewport = true;
        self.bump();
        true
    }

    /// Fit the scatter area into the host.
    pub fn fit_board(&mut self) -> bool {
        let (min, max) = (self.puzzle.board_minimum(), self.puzzle.board_maximum());
        if !self.viewport.fit(min, max) {
            return false;
        }
        self.dirty.viewport = true;
        self.bump();
        true
    }

    pub fn pick(&self, world: Position, tol: f64) -> Option<u32> {
        algorithms::picking::pick_impl(&self.puzzle, &self.z_order, world, tol)
    }

    pub fn pick_screen(&self, screen_x: f64, screen_y: f64, tol_px: f64) -> Option<u32> {
        let world = self.viewport.to_world(screen_x, screen_y);
        self.pick(world, tol_px / self.viewport.zoom_level)
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        let name = command.name();
        let outcome = match command {
            Command::Select { piece, pointer } => flag(self.select(piece, pointer)),
            Command::Move { piece, screen_x, screen_y } => flag(self.move_piece(piece, screen_x, screen_y)),
            Command::ReleaseAndSnap { piece, threshold } => self.release_and_snap(piece, threshold),
            Command::Rotate { piece, turns } => flag(self.rotate(piece, turns)),
            Command::Pan { dx, dy } => flag(self.pan(dx, dy)),
            Command::Zoom { factor, screen_x, screen_y } => {
                let pointer = screen_x.zip(screen_y);
                if self.zoom(factor, pointer) { CommandOutcome::Applied } else { CommandOutcome::Unchanged }
            }
            Command::SetView { x, y, zoom } => flag(self.set_view(x, y, zoom)),
        };
        tracing::trace!(command = name, outcome = ?outcome, "command applied");
        outcome
    }

    pub fn take_render_diff(&mut self) -> RenderDiff {
        let dirty = std::mem::take(&mut self.dirty);
        let pieces = dirty
            .pieces
            .iter()
            .filter_map(|&id| self.puzzle.piece(id).map(|p| p.view()))
            .collect();
        self.dirty.since_ver = self.state_ver;
        RenderDiff {
            since_version: dirty.since_ver,
            version: self.state_ver,
            pieces,
            viewport: dirty.viewport.then_some(self.viewport),
            selection_changed: dirty.selection,
            selected: self.selected,
            z_order: dirty.order.then(|| self.z_order.clone()),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        json::table_to_json(self)
    }
}

fn flag(applied: bool) -> CommandOutcome {
    if applied { CommandOutcome::Applied } else { CommandOutcome::Ignored }
}
