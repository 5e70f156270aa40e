// Centralized tolerances and helpers for board geometry

pub const EPS_LEN: f64 = 1e-12;       // zero-length vector threshold
pub const EPS_ZOOM: f64 = 1e-12;      // zoom levels closer than this are "unchanged"

#[inline] pub fn clamp01(x: f64) -> f64 { x.max(0.0).min(1.0) }
#[inline] pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 { x.max(lo).min(hi) }
#[inline] pub fn near_zero(x: f64, eps: f64) -> bool { x.abs() <= eps }
#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

#[inline]
pub fn safe_div(num: f64, den: f64, fallback: f64) -> f64 {
    if near_zero(den, EPS_LEN) { fallback } else { num / den }
}
