//! Waviness of grid lines.
//!
//! A [`Cut`] is the sum of a few sine [`Wave`]s and describes one interior
//! grid edge. Both pieces that share the edge sample the same cut; the
//! owner's `outward` sign decides which side the displacement lands on.

use super::limits::{AMPLITUDE_MAX, AMPLITUDE_MIN, PERIOD_MAX, PERIOD_MIN};
use super::tolerance::{clamp, clamp01};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    period: f64,
    amplitude: f64,
}

impl Wave {
    /// Out-of-range parameters are clamped; non-finite ones fall to the minimum.
    pub fn new(period: f64, amplitude: f64) -> Self {
        let period = if period.is_finite() { clamp(period, PERIOD_MIN, PERIOD_MAX) } else { PERIOD_MIN };
        let amplitude = if amplitude.is_finite() { clamp(amplitude, AMPLITUDE_MIN, AMPLITUDE_MAX) } else { AMPLITUDE_MIN };
        Wave { period, amplitude }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, period: (f64, f64), amplitude: (f64, f64)) -> Self {
        Wave::new(sample_range(rng, period), sample_range(rng, amplitude))
    }

    pub fn period(&self) -> f64 {
        self.period
    }
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn sample(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.period * t).sin()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    pub waves: Vec<Wave>,
}

impl Cut {
    pub fn new(waves: Vec<Wave>) -> Self {
        Cut { waves }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, count: usize, period: (f64, f64), amplitude: (f64, f64)) -> Self {
        Cut { waves: (0..count).map(|_| Wave::random(rng, period, amplitude)).collect() }
    }

    pub fn sample(&self, t: f64) -> f64 {
        self.waves.iter().map(|w| w.sample(t)).sum()
    }

    /// Unsigned edge profile at canonical parameter `t`, in units of the
    /// piece's shorter side: tapered waviness plus a nib bump centred at 0.5.
    /// Both ends evaluate to zero so corners of neighbouring pieces meet.
    pub fn profile(&self, t: f64, nib_size_ratio: f64) -> f64 {
        let t = clamp01(t);
        self.sample(t) * (PI * t).sin() + nib(t, nib_size_ratio)
    }
}

// Raised-cosine bump of height `ratio` and half-width `ratio`.
fn nib(t: f64, ratio: f64) -> f64 {
    if ratio <= 0.0 {
        return 0.0;
    }
    let u = (t - 0.5) / ratio;
    if u.abs() >= 1.0 {
        0.0
    } else {
        ratio * 0.5 * (1.0 + (PI * u).cos())
    }
}

pub(crate) fn sample_range<R: Rng + ?Sized>(rng: &mut R, range: (f64, f64)) -> f64 {
    let (lo, hi) = range;
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}
