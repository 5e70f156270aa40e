use jigsaw::{EdgeSide, ImageInfo, Puzzle, PuzzleConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn puzzle(w: f64, h: f64, n: u32, seed: u64) -> Puzzle {
    let mut rng = StdRng::seed_from_u64(seed);
    Puzzle::create(ImageInfo::new("img.png", w, h), n, &mut rng).expect("puzzle")
}

#[test]
fn landscape_twelve_piece_grid() {
    let p = puzzle(1200.0, 800.0, 12, 1);
    assert_eq!(p.rows(), 3);
    assert_eq!(p.cols(), 4);
    assert_eq!(p.actual_piece_count(), 12);
    assert_eq!(p.piece_width(), 300.0);
    assert!((p.piece_height() - 266.666_666).abs() < 1e-3);
    assert_eq!(p.pieces().len(), 12);
    // row-major origination
    let piece = p.piece(1).unwrap();
    assert_eq!((piece.origination().x, piece.origination().y), (300.0, 0.0));
    let piece = p.piece(4).unwrap();
    assert_eq!(piece.origination().x, 0.0);
    assert!((piece.origination().y - p.piece_height()).abs() < 1e-9);
}

#[test]
fn every_shared_edge_has_complementary_joints() {
    let p = puzzle(1200.0, 800.0, 12, 99);
    assert_eq!(p.cuts().len(), 2 * 4 + 3 * 3);
    for joint in p.joints() {
        let other = p
            .joint_at(joint.neighbor, joint.neighbor_edge)
            .expect("neighbor joint");
        assert_eq!(other.neighbor, joint.owner);
        assert_eq!(other.owner_edge, joint.owner_edge.opposite());
        assert_eq!(other.cut, joint.cut, "joints must share one cut");
        assert_ne!(other.outward, joint.outward);
        assert_eq!(other.nib_size_ratio, joint.nib_size_ratio);
        assert!(joint.nib_size_ratio >= 0.15 && joint.nib_size_ratio <= 0.33);
    }
}

#[test]
fn boundary_edges_have_no_joint() {
    let p = puzzle(1200.0, 800.0, 12, 5);
    let (rows, cols) = (p.rows(), p.cols());
    for piece in p.pieces() {
        let row = piece.id() / cols;
        let col = piece.id() % cols;
        let j = piece.joints();
        assert_eq!(j.get(EdgeSide::Top).is_none(), row == 0);
        assert_eq!(j.get(EdgeSide::Bottom).is_none(), row == rows - 1);
        assert_eq!(j.get(EdgeSide::Left).is_none(), col == 0);
        assert_eq!(j.get(EdgeSide::Right).is_none(), col == cols - 1);
    }
}

#[test]
fn same_seed_same_puzzle() {
    let a = puzzle(640.0, 480.0, 48, 1234);
    let b = puzzle(640.0, 480.0, 48, 1234);
    let c = puzzle(640.0, 480.0, 48, 4321);
    assert_eq!(a.cuts(), b.cuts());
    assert_eq!(a.joints(), b.joints());
    let paths_a: Vec<_> = a.pieces().iter().map(|p| p.path_data().to_string()).collect();
    let paths_b: Vec<_> = b.pieces().iter().map(|p| p.path_data().to_string()).collect();
    assert_eq!(paths_a, paths_b);
    assert_ne!(a.cuts(), c.cuts());
}

#[test]
fn inexact_request_is_reported_not_rejected() {
    let p = puzzle(1000.0, 1000.0, 10, 0);
    let grid = p.grid();
    assert_eq!(grid.requested, 10);
    assert_eq!(grid.actual, 9);
    assert_eq!(p.info().actual_piece_count, 9);
    assert_eq!(p.info().requested_piece_count, 10);
}

#[test]
fn zero_piece_count_uses_default() {
    let mut rng = StdRng::seed_from_u64(0);
    let cfg = PuzzleConfig::default().with_piece_count(0);
    let p = Puzzle::generate(ImageInfo::new("img.png", 1000.0, 1000.0), cfg, &mut rng).unwrap();
    assert_eq!(p.grid().requested, 100);
    assert_eq!(p.actual_piece_count(), 100);
}

#[test]
fn invalid_dimensions_are_construction_errors() {
    let mut rng = StdRng::seed_from_u64(0);
    for (w, h) in [(0.0, 10.0), (10.0, -1.0), (f64::INFINITY, 10.0)] {
        let err = Puzzle::create(ImageInfo::new("img.png", w, h), 12, &mut rng).unwrap_err();
        assert_eq!(err.code(), "invalid_image");
    }
}

#[test]
fn board_bounds_surround_image() {
    let p = puzzle(1200.0, 800.0, 12, 1);
    let (min, max) = (p.board_minimum(), p.board_maximum());
    assert!(min.x < 0.0 && min.y < 0.0);
    assert!(max.x > 1200.0 && max.y > 800.0);
}

// Larger generation run; enable with: cargo test --features long-bench
#[cfg_attr(not(feature = "long-bench"), ignore)]
#[test]
fn large_puzzle_generates() {
    let p = puzzle(4000.0, 3000.0, 5000, 11);
    assert!(p.actual_piece_count() >= 4900);
    for piece in p.pieces() {
        assert_eq!(piece.path().first(), piece.path().last());
    }
}
