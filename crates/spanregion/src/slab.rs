//! Parametric slab clipping of `p + t·d` against an axis-aligned box.

use nalgebra::SVector;

/// Intersect `[t0, t1]` with the parameter range keeping `p + t·d` inside
/// `[lo, hi]` on every axis.
///
/// Axes with `|d_i| < eps` only constrain when `p_i` already lies outside the
/// slab, in which case the result is empty. Returns `None` when the interval
/// is empty.
pub fn slab_interval<const D: usize>(
    p: SVector<f64, D>,
    d: SVector<f64, D>,
    lo: SVector<f64, D>,
    hi: SVector<f64, D>,
    t0: f64,
    t1: f64,
    eps: f64,
) -> Option<(f64, f64)> {
    let mut tmin = t0;
    let mut tmax = t1;
    for i in 0..D {
        if d[i].abs() < eps {
            if p[i] < lo[i] - eps || p[i] > hi[i] + eps {
                return None;
            }
            continue;
        }
        let ta = (lo[i] - p[i]) / d[i];
        let tb = (hi[i] - p[i]) / d[i];
        tmin = tmin.max(ta.min(tb));
        tmax = tmax.min(ta.max(tb));
    }
    (tmin <= tmax).then_some((tmin, tmax))
}
