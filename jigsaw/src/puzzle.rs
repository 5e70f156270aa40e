//! The puzzle aggregate: arenas of pieces, joints and cuts.
//!
//! Joints and pieces refer to each other by `u32` index, never by
//! reference, so the whole topology is plain owned data.

use crate::algorithms::grid::{build_topology, choose_grid, GridChoice};
use crate::algorithms::scatter::{board_bounds, random_placement};
use crate::config::PuzzleConfig;
use crate::error::{PuzzleError, Result};
use crate::geometry::limits;
use crate::geometry::path::{generate_path, EdgeShape};
use crate::geometry::wave::Cut;
use crate::model::{EdgeSide, ImageInfo, Joint, PieceJoints, PieceView, Position, PuzzleInfo};
use crate::piece::Piece;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Puzzle {
    pub(crate) image: ImageInfo,
    pub(crate) grid: GridChoice,
    pub(crate) piece_width: f64,
    pub(crate) piece_height: f64,
    pub(crate) pieces: Vec<Piece>,
    pub(crate) joints: Vec<Joint>,
    pub(crate) cuts: Vec<Cut>,
    pub(crate) board_min: Position,
    pub(crate) board_max: Position,
    pub(crate) config: PuzzleConfig,
}

impl Puzzle {
    /// Generate the full topology. Every piece starts in its slot; call
    /// [`Puzzle::scatter`] for a shuffled start.
    pub fn generate<R: Rng + ?Sized>(image: ImageInfo, config: PuzzleConfig, rng: &mut R) -> Result<Puzzle> {
        if !limits::in_image_bounds(image.width) || !limits::in_image_bounds(image.height) {
            return Err(PuzzleError::InvalidImage { width: image.width, height: image.height });
        }
        config.validate()?;
        let _span = tracing::debug_span!("generate_puzzle", width = image.width, height = image.height).entered();
        let grid = choose_grid(image.width, image.height, config.effective_piece_count());
        let piece_width = image.width / grid.cols as f64;
        let piece_height = image.height / grid.rows as f64;
        let topo = build_topology(grid.rows, grid.cols, &config, rng);
        let samples = config.effective_samples();
        let mut pieces = Vec::with_capacity(grid.actual as usize);
        for id in 0..grid.actual {
            let row = id / grid.cols;
            let col = id % grid.cols;
            let origination = Position::new(col as f64 * piece_width, row as f64 * piece_height);
            let joints = topo.piece_joints[id as usize];
            let shapes = edge_shapes(&joints, &topo.joints, &topo.cuts);
            let path = generate_path(piece_width, piece_height, &shapes, samples);
            pieces.push(Piece::new(id, origination, piece_width, piece_height, joints, path));
        }
        let (board_min, board_max) = board_bounds(image.width, image.height, config.scatter_margin_ratio);
        tracing::info!(
            requested = grid.requested,
            actual = grid.actual,
            rows = grid.rows,
            cols = grid.cols,
            cuts = topo.cuts.len(),
            "puzzle generated"
        );
        if !grid.is_exact() {
            tracing::debug!(requested = grid.requested, actual = grid.actual, "piece count adjusted to grid");
        }
        Ok(Puzzle {
            image,
            grid,
            piece_width,
            piece_height,
            pieces,
            joints: topo.joints,
            cuts: topo.cuts,
            board_min,
            board_max,
            config,
        })
    }

    /// Generate with an explicit piece count and default settings otherwise.
    pub fn create<R: Rng + ?Sized>(image: ImageInfo, piece_count: u32, rng: &mut R) -> Result<Puzzle> {
        Puzzle::generate(image, PuzzleConfig::default().with_piece_count(piece_count), rng)
    }

    /// Random placement inside the board bounds for every piece.
    pub fn scatter<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (min, max) = (self.board_min, self.board_max);
        let rotate = self.config.scramble_rotations;
        for piece in self.pieces.iter_mut() {
            let p = random_placement(rng, min, max, piece.size());
            piece.place(p);
            if rotate {
                piece.rotate(rng.random_range(0..4));
            }
            piece.is_snapped = false;
        }
    }

    pub fn image(&self) -> &ImageInfo {
        &self.image
    }
    pub fn grid(&self) -> GridChoice {
        self.grid
    }
    pub fn rows(&self) -> u32 {
        self.grid.rows
    }
    pub fn cols(&self) -> u32 {
        self.grid.cols
    }
    pub fn piece_width(&self) -> f64 {
        self.piece_width
    }
    pub fn piece_height(&self) -> f64 {
        self.piece_height
    }
    pub fn actual_piece_count(&self) -> u32 {
        self.grid.actual
    }
    pub fn board_minimum(&self) -> Position {
        self.board_min
    }
    pub fn board_maximum(&self) -> Position {
        self.board_max
    }
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn piece(&self, id: u32) -> Option<&Piece> {
        self.pieces.get(id as usize)
    }
    pub fn piece_mut(&mut self, id: u32) -> Option<&mut Piece> {
        self.pieces.get_mut(id as usize)
    }
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    pub fn piece_count(&self) -> u32 {
        self.pieces.len() as u32
    }
    pub fn joint(&self, id: u32) -> Option<&Joint> {
        self.joints.get(id as usize)
    }
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }
    pub fn cut(&self, id: u32) -> Option<&Cut> {
        self.cuts.get(id as usize)
    }
    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    /// Joint owned by `piece` on `side`, if that edge is interior.
    pub fn joint_at(&self, piece: u32, side: EdgeSide) -> Option<&Joint> {
        let jid = self.piece(piece)?.joints().get(side)?;
        self.joint(jid)
    }

    /// Default snap distance derived from the piece size.
    pub fn snap_threshold(&self) -> f64 {
        self.piece_width.min(self.piece_height) * self.config.snap_threshold_ratio
    }

    pub fn snapped_count(&self) -> u32 {
        self.pieces.iter().filter(|p| p.is_snapped()).count() as u32
    }

    /// Solved when every piece has been snapped into its slot.
    pub fn is_solved(&self) -> bool {
        !self.pieces.is_empty() && self.pieces.iter().all(|p| p.is_snapped())
    }

    /// Strict variant: every piece sits exactly at its origination, unrotated.
    pub fn is_exactly_solved(&self) -> bool {
        !self.pieces.is_empty() && self.pieces.iter().all(|p| p.test())
    }

    pub fn info(&self) -> PuzzleInfo {
        PuzzleInfo {
            image: self.image.clone(),
            rows: self.grid.rows,
            cols: self.grid.cols,
            piece_width: self.piece_width,
            piece_height: self.piece_height,
            requested_piece_count: self.grid.requested,
            actual_piece_count: self.grid.actual,
            board_minimum: self.board_min,
            board_maximum: self.board_max,
        }
    }

    pub fn piece_views(&self) -> Vec<PieceView> {
        self.pieces.iter().map(|p| p.view()).collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        crate::json::puzzle_to_json(self)
    }
}

/// Resolve a piece's joint ids into edge shapes. A dangling joint or cut
/// index degrades that side to a straight edge.
pub(crate) fn edge_shapes<'a>(joints: &PieceJoints, arena: &'a [Joint], cuts: &'a [Cut]) -> [Option<EdgeShape<'a>>; 4] {
    let mut out = [None; 4];
    for side in EdgeSide::ALL {
        let Some(jid) = joints.get(side) else { continue };
        let shape = arena.get(jid as usize).and_then(|j| {
            cuts.get(j.cut as usize).map(|cut| EdgeShape {
                cut,
                outward: j.outward,
                nib_size_ratio: j.nib_size_ratio,
            })
        });
        if shape.is_none() {
            tracing::debug!(joint = jid, side = ?side, "dangling joint, using straight edge");
        }
        out[side.index()] = shape;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn dangling_joint_falls_back_to_straight() {
        let joints = PieceJoints { top: Some(99), ..Default::default() };
        let shapes = edge_shapes(&joints, &[], &[]);
        assert!(shapes.iter().all(|s| s.is_none()));
        let path = generate_path(10.0, 10.0, &shapes, 16);
        assert_eq!(path.points.len(), 5);
    }

    #[test]
    fn generate_rejects_bad_image() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = Puzzle::create(ImageInfo::new("x.png", 0.0, 100.0), 12, &mut rng).unwrap_err();
        assert_eq!(err.code(), "invalid_image");
        let err = Puzzle::create(ImageInfo::new("x.png", 100.0, f64::NAN), 12, &mut rng).unwrap_err();
        assert_eq!(err.code(), "invalid_image");
    }
}
