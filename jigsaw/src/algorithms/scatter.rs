use crate::model::Position;
use rand::Rng;

/// Scatter area: the image rectangle grown by `margin_ratio` of its size on
/// every side.
pub fn board_bounds(image_width: f64, image_height: f64, margin_ratio: f64) -> (Position, Position) {
    let mx = image_width * margin_ratio;
    let my = image_height * margin_ratio;
    (Position::new(-mx, -my), Position::new(image_width + mx, image_height + my))
}

/// Uniform top-left placement that keeps a `size` piece inside the bounds.
/// Degenerate ranges collapse to the minimum corner.
pub fn random_placement<R: Rng + ?Sized>(rng: &mut R, min: Position, max: Position, size: Position) -> Position {
    let hi_x = max.x - size.x;
    let hi_y = max.y - size.y;
    let x = if hi_x > min.x { rng.random_range(min.x..=hi_x) } else { min.x };
    let y = if hi_y > min.y { rng.random_range(min.y..=hi_y) } else { min.y };
    Position { x, y }
}
