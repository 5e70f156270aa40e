use crate::error::{PuzzleError, Result};
use crate::geometry::limits;
use crate::geometry::tolerance::clamp;
use serde::{Deserialize, Serialize};

/// Generation and interaction settings. Missing JSON fields take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub piece_count: u32,
    pub waves_per_cut: usize,
    pub samples_per_edge: usize,
    pub nib_ratio_min: f64,
    pub nib_ratio_max: f64,
    pub amplitude_min: f64,
    pub amplitude_max: f64,
    pub period_min: f64,
    pub period_max: f64,
    pub scatter_margin_ratio: f64,
    pub scramble_rotations: bool,
    pub snap_threshold_ratio: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            piece_count: limits::DEFAULT_PIECE_COUNT,
            waves_per_cut: limits::WAVES_PER_CUT,
            samples_per_edge: limits::SAMPLES_PER_EDGE,
            nib_ratio_min: limits::NIB_RATIO_MIN,
            nib_ratio_max: limits::NIB_RATIO_MAX,
            amplitude_min: limits::AMPLITUDE_MIN,
            amplitude_max: limits::AMPLITUDE_MAX,
            period_min: limits::PERIOD_MIN,
            period_max: limits::PERIOD_MAX,
            scatter_margin_ratio: limits::SCATTER_MARGIN_RATIO,
            scramble_rotations: false,
            snap_threshold_ratio: limits::SNAP_THRESHOLD_RATIO,
            zoom_min: limits::ZOOM_MIN,
            zoom_max: limits::ZOOM_MAX,
        }
    }
}

impl PuzzleConfig {
    pub fn with_piece_count(mut self, n: u32) -> Self {
        self.piece_count = n;
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: PuzzleConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let ranges = [
            ("nib_ratio", self.nib_ratio_min, self.nib_ratio_max),
            ("amplitude", self.amplitude_min, self.amplitude_max),
            ("period", self.period_min, self.period_max),
            ("zoom", self.zoom_min, self.zoom_max),
        ];
        for (field, lo, hi) in ranges {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(PuzzleError::NonFinite { param: field });
            }
            if lo > hi {
                return Err(PuzzleError::InvalidConfig {
                    field,
                    reason: format!("min {} exceeds max {}", lo, hi),
                });
            }
        }
        if self.zoom_min <= 0.0 {
            return Err(PuzzleError::InvalidConfig { field: "zoom", reason: "min must be positive".into() });
        }
        for (field, v) in [
            ("scatter_margin_ratio", self.scatter_margin_ratio),
            ("snap_threshold_ratio", self.snap_threshold_ratio),
        ] {
            if !v.is_finite() {
                return Err(PuzzleError::NonFinite { param: field });
            }
            if v < 0.0 {
                return Err(PuzzleError::InvalidConfig { field, reason: "must not be negative".into() });
            }
        }
        Ok(())
    }

    /// Piece count with the zero fallback and the upper cap applied.
    pub fn effective_piece_count(&self) -> u32 {
        if self.piece_count == 0 {
            limits::DEFAULT_PIECE_COUNT
        } else {
            self.piece_count.min(limits::MAX_PIECE_COUNT)
        }
    }

    pub fn effective_samples(&self) -> usize {
        limits::clamp_samples(self.samples_per_edge)
    }

    pub fn effective_waves(&self) -> usize {
        self.waves_per_cut.max(1)
    }

    pub fn amplitude_range(&self) -> (f64, f64) {
        clamp_range(self.amplitude_min, self.amplitude_max, limits::AMPLITUDE_MIN, limits::AMPLITUDE_MAX)
    }

    pub fn period_range(&self) -> (f64, f64) {
        clamp_range(self.period_min, self.period_max, limits::PERIOD_MIN, limits::PERIOD_MAX)
    }

    pub fn nib_range(&self) -> (f64, f64) {
        clamp_range(self.nib_ratio_min, self.nib_ratio_max, limits::NIB_RATIO_MIN, limits::NIB_RATIO_MAX)
    }

    pub fn zoom_range(&self) -> (f64, f64) {
        clamp_range(self.zoom_min, self.zoom_max, limits::ZOOM_MIN, limits::ZOOM_MAX)
    }
}

fn clamp_range(lo: f64, hi: f64, min: f64, max: f64) -> (f64, f64) {
    let a = clamp(lo, min, max);
    let b = clamp(hi, min, max);
    (a.min(b), a.max(b))
}
