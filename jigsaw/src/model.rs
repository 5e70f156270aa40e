use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in world units (same scale as source-image pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
    pub fn scale(self, k: f64) -> Self {
        Position { x: self.x * k, y: self.y * k }
    }
    pub fn distance(self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Position {
    type Output = Position;
    fn add(self, o: Position) -> Position {
        Position { x: self.x + o.x, y: self.y + o.y }
    }
}

impl Sub for Position {
    type Output = Position;
    fn sub(self, o: Position) -> Position {
        Position { x: self.x - o.x, y: self.y - o.y }
    }
}

/// Source image as reported by the image loader.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub url: String,
    pub width: f64,
    pub height: f64,
}

impl ImageInfo {
    pub fn new(url: impl Into<String>, width: f64, height: f64) -> Self {
        ImageInfo { url: url.into(), width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl EdgeSide {
    // Path walk order
    pub const ALL: [EdgeSide; 4] = [EdgeSide::Top, EdgeSide::Right, EdgeSide::Bottom, EdgeSide::Left];

    pub fn index(self) -> usize {
        self as usize
    }
    pub fn opposite(self) -> EdgeSide {
        match self {
            EdgeSide::Top => EdgeSide::Bottom,
            EdgeSide::Right => EdgeSide::Left,
            EdgeSide::Bottom => EdgeSide::Top,
            EdgeSide::Left => EdgeSide::Right,
        }
    }
}

/// One piece's view of a shared edge. `cut` indexes the puzzle's cut arena.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub owner: u32,
    pub neighbor: u32,
    pub owner_edge: EdgeSide,
    pub neighbor_edge: EdgeSide,
    pub outward: bool,
    pub nib_size_ratio: f64,
    pub cut: u32,
}

/// Joint ids keyed by edge; `None` marks a straight boundary edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceJoints {
    pub top: Option<u32>,
    pub right: Option<u32>,
    pub bottom: Option<u32>,
    pub left: Option<u32>,
}

impl PieceJoints {
    pub fn get(&self, side: EdgeSide) -> Option<u32> {
        match side {
            EdgeSide::Top => self.top,
            EdgeSide::Right => self.right,
            EdgeSide::Bottom => self.bottom,
            EdgeSide::Left => self.left,
        }
    }
    pub fn set(&mut self, side: EdgeSide, joint: Option<u32>) {
        match side {
            EdgeSide::Top => self.top = joint,
            EdgeSide::Right => self.right = joint,
            EdgeSide::Bottom => self.bottom = joint,
            EdgeSide::Left => self.left = joint,
        }
    }
    pub fn count(&self) -> usize {
        EdgeSide::ALL.iter().filter(|s| self.get(**s).is_some()).count()
    }
}

/// Per-piece data handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceView {
    pub id: u32,
    pub width: f64,
    pub height: f64,
    pub placement: Position,
    pub rotation: u8,
    pub path_data: String,
    pub image_origin: Position,
    pub is_selected: bool,
    pub is_snapped: bool,
}

/// Per-puzzle data for grid/background rendering and initial centring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleInfo {
    pub image: ImageInfo,
    pub rows: u32,
    pub cols: u32,
    pub piece_width: f64,
    pub piece_height: f64,
    pub requested_piece_count: u32,
    pub actual_piece_count: u32,
    pub board_minimum: Position,
    pub board_maximum: Position,
}
