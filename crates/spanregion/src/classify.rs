//! Rank and affine dimension of small vector sets (2D and 3D).
//!
//! Conventions
//! - A vector with norm `< eps` counts as zero and never contributes to rank.
//! - Parallelism is `|a × b| < eps`, coplanarity `|a · (b × c)| < eps`
//!   (absolute thresholds, inputs are not normalized).
//! - 2D results are capped at 2 ("fills the plane").

use nalgebra::{Vector2, Vector3};

use crate::cfg::GeomCfg;
use crate::geom2::cross;

/// Rank of the linear span of 2D vectors: 0, 1 or 2.
pub fn rank_linear_2d(vs: &[Vector2<f64>], cfg: GeomCfg) -> usize {
    let Some(u) = first_nonzero(vs, cfg) else {
        return 0;
    };
    let independent = vs
        .iter()
        .filter(|w| w.norm() >= cfg.eps)
        .any(|w| cross(u, *w).abs() >= cfg.eps);
    if independent {
        2
    } else {
        1
    }
}

/// Rank of the linear span of 3D vectors: 0 to 3.
pub fn rank_linear_3d(vs: &[Vector3<f64>], cfg: GeomCfg) -> usize {
    let nz: Vec<Vector3<f64>> = vs.iter().copied().filter(|w| w.norm() >= cfg.eps).collect();
    let Some(&u) = nz.first() else {
        return 0;
    };
    if nz.iter().all(|w| u.cross(w).norm() < cfg.eps) {
        return 1;
    }
    for i in 0..nz.len() {
        for j in i + 1..nz.len() {
            let n = nz[j].cross(&nz[i]);
            if nz[j + 1..].iter().any(|w| n.dot(w).abs() > cfg.eps) {
                return 3;
            }
        }
    }
    2
}

/// Dimension of the affine hull of 2D points: 0, 1 or 2.
pub fn affine_dimension_2d(points: &[Vector2<f64>], cfg: GeomCfg) -> usize {
    let Some((a, b)) = first_distinct_pair(points, cfg) else {
        return 0;
    };
    let dir = b - a;
    if points.iter().all(|p| cross(p - a, dir).abs() < cfg.eps) {
        1
    } else {
        2
    }
}

/// Dimension of the affine hull of 3D points: 0 to 3.
pub fn affine_dimension_3d(points: &[Vector3<f64>], cfg: GeomCfg) -> usize {
    let Some((a, b)) = first_distinct_pair(points, cfg) else {
        return 0;
    };
    let dir = b - a;
    let Some(c) = points
        .iter()
        .find(|p| (*p - a).cross(&dir).norm() >= cfg.eps)
    else {
        return 1;
    };
    let n = dir.cross(&(c - a));
    if points.iter().all(|p| (p - a).dot(&n).abs() < cfg.eps) {
        2
    } else {
        3
    }
}

/// First vector with norm `>= eps`.
pub(crate) fn first_nonzero<const D: usize>(
    vs: &[nalgebra::SVector<f64, D>],
    cfg: GeomCfg,
) -> Option<nalgebra::SVector<f64, D>> {
    vs.iter().copied().find(|w| w.norm() >= cfg.eps)
}

/// First point and the first later point that differs from it by `>= eps`.
pub(crate) fn first_distinct_pair<const D: usize>(
    points: &[nalgebra::SVector<f64, D>],
    cfg: GeomCfg,
) -> Option<(nalgebra::SVector<f64, D>, nalgebra::SVector<f64, D>)> {
    let a = *points.first()?;
    let b = points.iter().copied().find(|p| (p - a).norm() >= cfg.eps)?;
    Some((a, b))
}

/// First nonzero generator `u` and the first generator not parallel to it.
pub(crate) fn independent_pair_3d(
    vs: &[Vector3<f64>],
    cfg: GeomCfg,
) -> Option<(Vector3<f64>, Vector3<f64>)> {
    let u = first_nonzero(vs, cfg)?;
    let v = vs
        .iter()
        .copied()
        .find(|w| w.norm() >= cfg.eps && u.cross(w).norm() >= cfg.eps)?;
    Some((u, v))
}
