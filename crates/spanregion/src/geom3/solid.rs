//! Convex point sets cut down to the viewing cube.
//!
//! A coplanar hull ring is clipped face by face. A solid hull has no ring of
//! its own, so the vertices of `conv(points) ∩ cube` are collected instead:
//! hull chords clipped to the cube, plus cube edges clipped to the hull's
//! supporting half-spaces. Every vertex of the intersection is an endpoint of
//! one of those segments.

use nalgebra::Vector3;

use super::intersect::segment_clip;
use crate::cfg::GeomCfg;
use crate::ring::{clip_by_field, tidy_ring};
use crate::types::Cube;

/// Closed half-space `n · x <= c` with unit `n`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Hs3 {
    pub n: Vector3<f64>,
    pub c: f64,
}

impl Hs3 {
    #[inline]
    fn slack(&self, p: Vector3<f64>) -> f64 {
        self.c - self.n.dot(&p)
    }
}

/// Coplanar convex ring clipped to the six cube faces.
pub fn clip_ring_to_cube(ring: &[Vector3<f64>], cube: &Cube, eps: f64) -> Vec<Vector3<f64>> {
    let mut out = ring.to_vec();
    for axis in 0..3 {
        out = clip_by_field(&out, |p| cube.half - p[axis], eps);
        out = clip_by_field(&out, |p| cube.half + p[axis], eps);
    }
    tidy_ring(out, eps)
}

/// Supporting half-spaces of the hull of a full-dimensional point set.
///
/// Brute force over point triples; every plane with all points on one side
/// (within `eps`) is kept, duplicates included.
pub(crate) fn hull_halfspaces(points: &[Vector3<f64>], cfg: GeomCfg) -> Vec<Hs3> {
    let mut out = Vec::new();
    let n = points.len();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let normal = (points[j] - points[i]).cross(&(points[k] - points[i]));
                let len = normal.norm();
                if len < cfg.eps {
                    continue;
                }
                let unit = normal / len;
                let c = unit.dot(&points[i]);
                let side: Vec<f64> = points.iter().map(|p| unit.dot(p) - c).collect();
                if side.iter().all(|s| *s <= cfg.eps) {
                    out.push(Hs3 { n: unit, c });
                } else if side.iter().all(|s| *s >= -cfg.eps) {
                    out.push(Hs3 { n: -unit, c: -c });
                }
            }
        }
    }
    out
}

/// Part of the segment `a..b` satisfying every half-space (Cyrus–Beck).
pub(crate) fn clip_segment_to_halfspaces(
    a: Vector3<f64>,
    b: Vector3<f64>,
    halfspaces: &[Hs3],
    eps: f64,
) -> Option<(Vector3<f64>, Vector3<f64>)> {
    let d = b - a;
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for hs in halfspaces {
        let rate = hs.n.dot(&d);
        let room = hs.slack(a);
        if rate.abs() < eps {
            if room < -eps {
                return None;
            }
            continue;
        }
        let t = room / rate;
        if rate > 0.0 {
            t1 = t1.min(t);
        } else {
            t0 = t0.max(t);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((a + d * t0, a + d * t1))
}

/// Points spanning `conv(points) ∩ cube`; a superset of its vertices.
///
/// `points` must be affinely independent in 3D (at least one hull facet).
pub fn hull_cube_points(points: &[Vector3<f64>], cube: &Cube, cfg: GeomCfg) -> Vec<Vector3<f64>> {
    let mut out = Vec::new();
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if let Some((p, q)) = segment_clip(cube, *a, *b, cfg) {
                out.push(p);
                out.push(q);
            }
        }
    }
    let halfspaces = hull_halfspaces(points, cfg);
    if halfspaces.is_empty() {
        return out;
    }
    for (a, b) in cube.edges() {
        if let Some((p, q)) = clip_segment_to_halfspaces(a, b, &halfspaces, cfg.eps) {
            out.push(p);
            out.push(q);
        }
    }
    out
}
