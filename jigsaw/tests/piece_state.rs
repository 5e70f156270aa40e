use jigsaw::{ImageInfo, Position, Puzzle};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn puzzle() -> Puzzle {
    let mut rng = StdRng::seed_from_u64(17);
    Puzzle::create(ImageInfo::new("img.png", 1200.0, 800.0), 12, &mut rng).unwrap()
}

#[test]
fn snap_gate_scenario() {
    let mut p = puzzle();
    let piece = p.piece_mut(1).unwrap();
    assert_eq!(piece.origination(), Position::new(300.0, 0.0));
    piece.place(Position::new(300.0, 0.0));
    assert_eq!(piece.rotation(), 0);
    assert!(piece.can_snap(5.0));
    piece.rotate(1);
    assert!(!piece.can_snap(5.0));
}

#[test]
fn snap_is_idempotent() {
    let mut p = puzzle();
    let piece = p.piece_mut(3).unwrap();
    let o = piece.origination();
    piece.place(o + Position::new(3.0, 4.0)); // distance 5
    assert!(piece.snap(5.0));
    assert!(piece.snap(5.0));
    assert_eq!(piece.placement(), o);

    piece.place(o + Position::new(30.0, 40.0));
    let before = piece.placement();
    assert!(!piece.snap(5.0));
    assert!(!piece.snap(5.0));
    assert_eq!(piece.placement(), before, "failed snap must not move the piece");
    assert!(!piece.is_snapped());
}

#[test]
fn threshold_is_inclusive() {
    let mut p = puzzle();
    let piece = p.piece_mut(0).unwrap();
    piece.place(Position::new(6.0, 8.0));
    assert!(piece.can_snap(10.0));
    assert!(!piece.can_snap(9.999));
}

#[test]
fn test_is_strict() {
    let mut p = puzzle();
    let piece = p.piece_mut(2).unwrap();
    let o = piece.origination();
    assert!(piece.test());
    piece.place(o + Position::new(1e-6, 0.0));
    assert!(!piece.test());
    assert!(piece.can_snap(1.0));
    piece.place(o);
    piece.rotate(2);
    assert!(!piece.test());
    piece.rotate(2);
    assert!(piece.test());
}

#[test]
fn rotation_normalizes_for_any_integer() {
    let mut p = puzzle();
    for k in [-9i64, -4, -1, 0, 1, 3, 4, 5, 101, i64::MAX, i64::MIN] {
        let piece = p.piece_mut(0).unwrap();
        piece.place(piece.origination());
        // reset to zero
        let r = piece.rotation() as i64;
        piece.rotate(-r);
        assert_eq!(piece.rotation(), 0);
        piece.rotate(k);
        assert_eq!(piece.rotation() as i64, ((k % 4) + 4) % 4, "k={}", k);
        let before = piece.rotation();
        piece.rotate(4);
        assert_eq!(piece.rotation(), before);
    }
}

#[test]
fn solved_tracks_snaps() {
    let mut p = puzzle();
    assert!(!p.is_solved(), "nothing snapped yet");
    assert!(p.is_exactly_solved());
    let ids: Vec<u32> = p.pieces().iter().map(|x| x.id()).collect();
    for id in &ids {
        assert!(p.piece_mut(*id).unwrap().snap(1.0));
    }
    assert_eq!(p.snapped_count(), 12);
    assert!(p.is_solved());
    let piece = p.piece_mut(0).unwrap();
    piece.place(Position::new(-50.0, -50.0));
    assert!(!p.is_solved());
}
