//! Shape of a planar cone before it meets the domain.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use super::cross;
use crate::cfg::GeomCfg;

/// Conic hull of 2D generators, unclipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConeShape2 {
    /// No nonzero generator.
    Empty,
    /// All generators point the same way.
    Ray(Vector2<f64>),
    /// Collinear generators with at least one opposing pair.
    Line(Vector2<f64>),
    /// Angular sector from `start` counterclockwise by `span <= π`.
    Wedge { start: f64, span: f64 },
    /// Minimal angular span exceeds π: the whole plane.
    Full,
}

/// Classify the cone spanned by `gens`.
///
/// The wedge is the complement of the largest angular gap between
/// consecutive sorted generator angles.
pub fn cone_shape_2d(gens: &[Vector2<f64>], cfg: GeomCfg) -> ConeShape2 {
    let rays: Vec<Vector2<f64>> = gens.iter().copied().filter(|g| g.norm() >= cfg.eps).collect();
    let Some(&base) = rays.first() else {
        return ConeShape2::Empty;
    };
    if rays.iter().all(|p| cross(base, *p).abs() < cfg.eps) {
        return if rays.iter().all(|p| base.dot(p) >= -cfg.eps) {
            ConeShape2::Ray(base)
        } else {
            ConeShape2::Line(base)
        };
    }

    let mut angles: Vec<f64> = rays.iter().map(|p| p.y.atan2(p.x)).collect();
    angles.sort_by(|a, b| a.total_cmp(b));
    angles.dedup_by(|a, b| (*a - *b).abs() < cfg.eps);

    let (idx, max_gap) = largest_gap(&angles);
    let start = angles[(idx + 1) % angles.len()];
    let span = TAU - max_gap;
    if span > PI + cfg.eps {
        return ConeShape2::Full;
    }
    ConeShape2::Wedge { start, span }
}

/// Index `i` and size of the largest gap `angles[i] → angles[i+1]` (cyclic).
///
/// `angles` must be sorted ascending and non-empty.
pub(crate) fn largest_gap(angles: &[f64]) -> (usize, f64) {
    let n = angles.len();
    let mut best = (0usize, f64::NEG_INFINITY);
    for i in 0..n {
        let next = if i + 1 < n { angles[i + 1] } else { angles[0] + TAU };
        let gap = next - angles[i];
        if gap > best.1 {
            best = (i, gap);
        }
    }
    best
}
