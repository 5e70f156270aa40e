// Fixed generation ranges and interaction caps

// Wave ranges (amplitude in board units, period in cycles per unit length)
pub const AMPLITUDE_MIN: f64 = 0.01;
pub const AMPLITUDE_MAX: f64 = 0.05;
pub const PERIOD_MIN: f64 = 1.0;
pub const PERIOD_MAX: f64 = 20.0;

// Nib size as a ratio of the piece's shorter side
pub const NIB_RATIO_MIN: f64 = 0.15;
pub const NIB_RATIO_MAX: f64 = 0.33;

pub const WAVES_PER_CUT: usize = 3;

// Path sampling per joint edge
pub const SAMPLES_PER_EDGE: usize = 16;
pub const SAMPLES_PER_EDGE_MIN: usize = 4;
pub const SAMPLES_PER_EDGE_MAX: usize = 64;

pub const DEFAULT_PIECE_COUNT: u32 = 100;
pub const MAX_PIECE_COUNT: u32 = 10_000;

pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 10.0;

pub const SCATTER_MARGIN_RATIO: f64 = 0.5;
pub const SNAP_THRESHOLD_RATIO: f64 = 0.1;

// Image dimension caps (pixels)
pub const IMAGE_DIM_MAX: f64 = 100_000.0;

#[inline]
pub fn in_image_bounds(v: f64) -> bool { v.is_finite() && v > 0.0 && v <= IMAGE_DIM_MAX }

#[inline]
pub fn clamp_samples(n: usize) -> usize { n.max(SAMPLES_PER_EDGE_MIN).min(SAMPLES_PER_EDGE_MAX) }
