use crate::model::Position;

pub fn normalize_turns(turns: i64) -> u8 {
    turns.rem_euclid(4) as u8
}

// Rotate `v` clockwise (screen axes, y down) by `turns` quarter turns.
pub fn rotate_quarter(v: Position, turns: u8) -> Position {
    match turns % 4 {
        0 => v,
        1 => Position { x: -v.y, y: v.x },
        2 => Position { x: -v.x, y: -v.y },
        _ => Position { x: v.y, y: -v.x },
    }
}

/// Map a world point into the unrotated local frame of a piece whose
/// top-left sits at `placement` and which is rotated about its centre.
pub fn world_to_piece_local(p: Position, placement: Position, width: f64, height: f64, turns: u8) -> Position {
    let half = Position { x: width * 0.5, y: height * 0.5 };
    let center = placement + half;
    rotate_quarter(p - center, (4 - turns % 4) % 4) + half
}

pub fn rect_contains(p: Position, min: Position, max: Position, pad: f64) -> bool {
    p.x >= min.x - pad && p.x <= max.x + pad && p.y >= min.y - pad && p.y <= max.y + pad
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_is_clockwise_on_screen() {
        // +x rotates to +y (down) for one clockwise turn
        let r = rotate_quarter(Position::new(1.0, 0.0), 1);
        assert_eq!(r, Position::new(0.0, 1.0));
        let back = rotate_quarter(r, 3);
        assert_eq!(back, Position::new(1.0, 0.0));
    }

    #[test]
    fn normalize_handles_negatives() {
        assert_eq!(normalize_turns(-1), 3);
        assert_eq!(normalize_turns(-8), 0);
        assert_eq!(normalize_turns(9), 1);
    }

    #[test]
    fn local_frame_roundtrip() {
        let placement = Position::new(100.0, 50.0);
        // a point right of centre on an unrotated piece stays put
        let p = Position::new(100.0 + 30.0, 50.0 + 10.0);
        assert_eq!(world_to_piece_local(p, placement, 40.0, 20.0, 0), Position::new(30.0, 10.0));
        // half turn mirrors through the centre
        let q = world_to_piece_local(p, placement, 40.0, 20.0, 2);
        assert!((q.x - 10.0).abs() < 1e-12 && (q.y - 10.0).abs() < 1e-12);
    }
}
