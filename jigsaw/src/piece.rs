use crate::geometry::math::normalize_turns;
use crate::geometry::path::PathData;
use crate::model::{PieceJoints, PieceView, Position};
use serde::Serialize;

/// One puzzle piece. Topology (`origination`, size, joints, outline) is fixed
/// at construction; placement, rotation and the two flags are interaction state.
#[derive(Clone, Debug, Serialize)]
pub struct Piece {
    id: u32,
    origination: Position,
    width: f64,
    height: f64,
    joints: PieceJoints,
    path: PathData,
    #[serde(skip)]
    path_svg: String,
    pub(crate) placement: Position,
    pub(crate) rotation: u8,
    pub(crate) is_snapped: bool,
    pub(crate) is_selected: bool,
}

impl Piece {
    pub fn new(id: u32, origination: Position, width: f64, height: f64, joints: PieceJoints, path: PathData) -> Self {
        let path_svg = path.to_svg();
        Piece {
            id,
            origination,
            width,
            height,
            joints,
            path,
            path_svg,
            placement: origination,
            rotation: 0,
            is_snapped: false,
            is_selected: false,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn origination(&self) -> Position {
        self.origination
    }
    pub fn width(&self) -> f64 {
        self.width
    }
    pub fn height(&self) -> f64 {
        self.height
    }
    pub fn size(&self) -> Position {
        Position { x: self.width, y: self.height }
    }
    pub fn joints(&self) -> &PieceJoints {
        &self.joints
    }
    pub fn path(&self) -> &PathData {
        &self.path
    }
    pub fn path_data(&self) -> &str {
        &self.path_svg
    }
    pub fn placement(&self) -> Position {
        self.placement
    }
    pub fn rotation(&self) -> u8 {
        self.rotation
    }
    pub fn is_snapped(&self) -> bool {
        self.is_snapped
    }
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn center(&self) -> Position {
        self.placement + self.size().scale(0.5)
    }
    pub fn correct_center(&self) -> Position {
        self.origination + self.size().scale(0.5)
    }

    /// Sets the placement without evaluating snapping. Moving off the slot
    /// clears `is_snapped`.
    pub fn place(&mut self, position: Position) {
        if position != self.placement {
            self.is_snapped = false;
        }
        self.placement = position;
    }

    /// Positive turns rotate clockwise.
    pub fn rotate(&mut self, turns: i64) {
        let next = normalize_turns(self.rotation as i64 + turns.rem_euclid(4));
        if next != self.rotation {
            self.is_snapped = false;
        }
        self.rotation = next;
    }

    pub fn can_snap(&self, threshold: f64) -> bool {
        self.rotation == 0 && self.center().distance(self.correct_center()) <= threshold
    }

    pub fn snap(&mut self, threshold: f64) -> bool {
        if self.can_snap(threshold) {
            self.placement = self.origination;
            self.rotation = 0;
            self.is_snapped = true;
            true
        } else {
            self.is_snapped = false;
            false
        }
    }

    /// Exact-slot check, independent of any snap threshold.
    pub fn test(&self) -> bool {
        self.placement == self.origination && self.rotation == 0
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    pub fn view(&self) -> PieceView {
        PieceView {
            id: self.id,
            width: self.width,
            height: self.height,
            placement: self.placement,
            rotation: self.rotation,
            path_data: self.path_svg.clone(),
            image_origin: self.origination,
            is_selected: self.is_selected,
            is_snapped: self.is_snapped,
        }
    }
}
