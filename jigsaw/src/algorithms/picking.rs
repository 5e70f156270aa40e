use crate::geometry::math::{rect_contains, world_to_piece_local};
use crate::model::Position;
use crate::puzzle::Puzzle;

/// Top-most piece whose outline bounds (in its own rotated frame) contain
/// `p`. `z_order` lists piece ids bottom to top.
pub fn pick_impl(puzzle: &Puzzle, z_order: &[u32], p: Position, tol: f64) -> Option<u32> {
    if !p.is_finite() {
        return None;
    }
    let tol = if tol.is_finite() { tol.max(0.0) } else { 0.0 };
    for &id in z_order.iter().rev() {
        let Some(piece) = puzzle.piece(id) else { continue };
        let local = world_to_piece_local(p, piece.placement(), piece.width(), piece.height(), piece.rotation());
        let (min, max) = piece
            .path()
            .bbox()
            .unwrap_or((Position::ORIGIN, piece.size()));
        if rect_contains(local, min, max, tol) {
            return Some(id);
        }
    }
    None
}
