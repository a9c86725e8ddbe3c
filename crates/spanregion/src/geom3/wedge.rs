//! Planar wedges in 3D: two-generator bases and coefficient clipping.
//!
//! A plane polygon through the origin is restricted to
//! `{ a·r1 + b·r2 : a, b >= 0 }` by clipping first on the scalar field `a`,
//! then on `b`, where `(a, b)` solve the 2×2 normal equations of the basis.

use std::f64::consts::{PI, TAU};

use nalgebra::{Matrix2, Vector2, Vector3};

use crate::cfg::GeomCfg;
use crate::geom2::largest_gap;
use crate::ring::clip_by_field;

/// Orthonormal basis `(e1, e2)` of the plane spanned by `u` and `v`, with
/// `e1 ∥ u`.
pub fn plane_basis(u: Vector3<f64>, v: Vector3<f64>, cfg: GeomCfg) -> (Vector3<f64>, Vector3<f64>) {
    let e1 = u / u.norm().max(cfg.eps);
    let w = v - e1 * v.dot(&e1);
    let e2 = w / w.norm().max(cfg.eps);
    (e1, e2)
}

/// Coefficients `(a, b)` with `p ≈ a·r1 + b·r2` (least squares).
///
/// A near-singular Gram determinant is floored to `cfg.gram_floor`.
pub fn coeff_in_basis(r1: Vector3<f64>, r2: Vector3<f64>, p: Vector3<f64>, cfg: GeomCfg) -> (f64, f64) {
    let g11 = r1.dot(&r1);
    let g12 = r1.dot(&r2);
    let g22 = r2.dot(&r2);
    let gram = Matrix2::new(g11, g12, g12, g22);
    let mut det = gram.determinant();
    if det.abs() < cfg.gram_floor {
        det = cfg.gram_floor;
    }
    let d = Vector2::new(r1.dot(&p), r2.dot(&p));
    let a = (g22 * d.x - g12 * d.y) / det;
    let b = (-g12 * d.x + g11 * d.y) / det;
    (a, b)
}

/// Clip a polygon lying in `span(r1, r2)` to the wedge `a >= 0, b >= 0`.
///
/// Returns an empty ring when either cut leaves fewer than 3 vertices.
pub fn clip_wedge(poly: &[Vector3<f64>], r1: Vector3<f64>, r2: Vector3<f64>, cfg: GeomCfg) -> Vec<Vector3<f64>> {
    if poly.len() < 3 {
        return Vec::new();
    }
    let p = clip_by_field(poly, |q| coeff_in_basis(r1, r2, *q, cfg).0, cfg.eps);
    if p.len() < 3 {
        return Vec::new();
    }
    let p = clip_by_field(&p, |q| coeff_in_basis(r1, r2, *q, cfg).1, cfg.eps);
    if p.len() < 3 {
        return Vec::new();
    }
    p
}

/// Cone of coplanar 3D generators, described in the plane basis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlanarCone {
    /// Sector from `r1` counterclockwise (w.r.t. `e1 × e2`) to `r2`, span `< π`.
    Wedge { r1: Vector3<f64>, r2: Vector3<f64> },
    /// Span exactly π: half-plane on the side `dot(x, inward) >= 0`.
    HalfPlane { inward: Vector3<f64> },
    /// Span above π: the whole plane.
    Plane,
}

/// Extreme rays of coplanar generators via the largest angular gap in the
/// basis `(e1, e2)`.
pub fn planar_cone(gens: &[Vector3<f64>], e1: Vector3<f64>, e2: Vector3<f64>, cfg: GeomCfg) -> PlanarCone {
    let mut angles: Vec<f64> = gens
        .iter()
        .filter(|g| g.norm() >= cfg.eps)
        .map(|g| g.dot(&e2).atan2(g.dot(&e1)))
        .collect();
    angles.sort_by(|a, b| a.total_cmp(b));
    angles.dedup_by(|a, b| (*a - *b).abs() < cfg.eps);
    if angles.is_empty() {
        return PlanarCone::Plane;
    }
    let (idx, max_gap) = largest_gap(&angles);
    let span = TAU - max_gap;
    let dir = |th: f64| e1 * th.cos() + e2 * th.sin();
    let start = angles[(idx + 1) % angles.len()];
    if span > PI + cfg.eps {
        PlanarCone::Plane
    } else if span > PI - cfg.eps {
        // Inward normal: start direction rotated +90° in the plane.
        PlanarCone::HalfPlane {
            inward: dir(start + PI / 2.0),
        }
    } else {
        PlanarCone::Wedge {
            r1: dir(start),
            r2: dir(start + span),
        }
    }
}
