//! Grid partitioning and joint topology.
//!
//! Chooses `rows x cols` for a requested piece count and builds one [`Cut`]
//! per shared edge with the two complementary [`Joint`]s that reference it.

use crate::config::PuzzleConfig;
use crate::geometry::tolerance::clamp;
use crate::geometry::wave::{sample_range, Cut};
use crate::model::{EdgeSide, Joint, PieceJoints};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Grid picked for a requested count. `rows` is capped at the request on
/// purpose, so extreme portrait images cannot exceed it (see [`choose_grid`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridChoice {
    pub requested: u32,
    pub rows: u32,
    pub cols: u32,
    pub actual: u32,
}

impl GridChoice {
    pub fn is_exact(&self) -> bool {
        self.requested == self.actual
    }

    pub fn label(&self) -> String {
        if self.is_exact() {
            format!("{} pieces ({}x{})", self.requested, self.cols, self.rows)
        } else {
            format!("{} pieces ({}x{}, actual {})", self.requested, self.cols, self.rows, self.actual)
        }
    }
}

/// `rows = round(sqrt(n / aspect))`, `cols = round(n / rows)`, both at least 1.
/// Rows never exceed `n` so very tall images cannot inflate the count.
/// Callers validate the dimensions; a zero request is treated as one piece.
pub fn choose_grid(width: f64, height: f64, requested: u32) -> GridChoice {
    let n = requested.max(1) as f64;
    let aspect = width / height;
    let rows = (n / aspect).sqrt().round().max(1.0).min(n);
    let cols = (n / rows).round().max(1.0);
    let rows = rows as u32;
    let cols = cols as u32;
    GridChoice { requested, rows, cols, actual: rows * cols }
}

#[derive(Clone, Debug, Default)]
pub struct Topology {
    pub cuts: Vec<Cut>,
    pub joints: Vec<Joint>,
    pub piece_joints: Vec<PieceJoints>,
}

impl Topology {
    pub fn interior_edge_count(rows: u32, cols: u32) -> usize {
        let (r, c) = (rows as usize, cols as usize);
        r.saturating_sub(1) * c + c.saturating_sub(1) * r
    }
}

/// Build cuts and joints for a `rows x cols` grid. Piece ids are row-major.
pub fn build_topology<R: Rng + ?Sized>(rows: u32, cols: u32, cfg: &PuzzleConfig, rng: &mut R) -> Topology {
    let total = (rows * cols) as usize;
    let edges = Topology::interior_edge_count(rows, cols);
    let mut topo = Topology {
        cuts: Vec::with_capacity(edges),
        joints: Vec::with_capacity(edges * 2),
        piece_joints: vec![PieceJoints::default(); total],
    };
    let waves = cfg.effective_waves();
    let period = cfg.period_range();
    let amplitude = cfg.amplitude_range();
    let nib = cfg.nib_range();
    for row in 0..rows {
        for col in 0..cols {
            let id = row * cols + col;
            if col + 1 < cols {
                link(&mut topo, id, id + 1, EdgeSide::Right, waves, period, amplitude, nib, rng);
            }
            if row + 1 < rows {
                link(&mut topo, id, id + cols, EdgeSide::Bottom, waves, period, amplitude, nib, rng);
            }
        }
    }
    topo
}

#[allow(clippy::too_many_arguments)]
fn link<R: Rng + ?Sized>(
    topo: &mut Topology,
    a: u32,
    b: u32,
    a_edge: EdgeSide,
    waves: usize,
    period: (f64, f64),
    amplitude: (f64, f64),
    nib: (f64, f64),
    rng: &mut R,
) {
    let cut_id = topo.cuts.len() as u32;
    topo.cuts.push(Cut::random(rng, waves, period, amplitude));
    let outward = rng.random_bool(0.5);
    let nib_size_ratio = clamp(sample_range(rng, nib), nib.0, nib.1);
    let b_edge = a_edge.opposite();
    let ja = topo.joints.len() as u32;
    topo.joints.push(Joint {
        owner: a,
        neighbor: b,
        owner_edge: a_edge,
        neighbor_edge: b_edge,
        outward,
        nib_size_ratio,
        cut: cut_id,
    });
    let jb = ja + 1;
    topo.joints.push(Joint {
        owner: b,
        neighbor: a,
        owner_edge: b_edge,
        neighbor_edge: a_edge,
        outward: !outward,
        nib_size_ratio,
        cut: cut_id,
    });
    topo.piece_joints[a as usize].set(a_edge, Some(ja));
    topo.piece_joints[b as usize].set(b_edge, Some(jb));
}
