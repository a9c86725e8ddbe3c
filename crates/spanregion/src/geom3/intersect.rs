//! Lines, rays and planes against the viewing cube.

use std::collections::HashSet;

use nalgebra::Vector3;

use crate::cfg::GeomCfg;
use crate::ring::{centroid, tidy_ring};
use crate::slab::slab_interval;
use crate::types::Cube;

type Chord = (Vector3<f64>, Vector3<f64>);

/// Chord of the infinite line `point + t·dir` inside the cube (slab clipping).
pub fn line_clip(cube: &Cube, point: Vector3<f64>, dir: Vector3<f64>, cfg: GeomCfg) -> Option<Chord> {
    clip_param(cube, point, dir, f64::NEG_INFINITY, cfg)
}

/// Part of the ray `origin + t·dir`, `t >= 0`, inside the cube.
pub fn ray_clip(cube: &Cube, origin: Vector3<f64>, dir: Vector3<f64>, cfg: GeomCfg) -> Option<Chord> {
    clip_param(cube, origin, dir, 0.0, cfg)
}

/// Part of the segment `a..b` inside the cube; unchanged if already inside.
pub fn segment_clip(cube: &Cube, a: Vector3<f64>, b: Vector3<f64>, cfg: GeomCfg) -> Option<Chord> {
    let hi = Vector3::repeat(cube.half);
    let d = b - a;
    let (t0, t1) = slab_interval(a, d, -hi, hi, 0.0, 1.0, cfg.eps)?;
    let p = if t0 <= 0.0 { a } else { a + d * t0 };
    let q = if t1 >= 1.0 { b } else { a + d * t1 };
    Some((p, q))
}

fn clip_param(
    cube: &Cube,
    p: Vector3<f64>,
    d: Vector3<f64>,
    t0: f64,
    cfg: GeomCfg,
) -> Option<Chord> {
    if d.norm() < cfg.eps {
        return None;
    }
    let hi = Vector3::repeat(cube.half);
    let (tlo, thi) = slab_interval(p, d, -hi, hi, t0, f64::INFINITY, cfg.eps)?;
    if (thi - tlo) * d.norm() < cfg.eps {
        return None;
    }
    Some((p + d * tlo, p + d * thi))
}

/// Polygon cut from the cube by the plane through `point` with normal `normal`.
///
/// Each of the 12 cube edges is tested for a crossing; an edge lying in the
/// plane contributes both endpoints. Points are merged by rounded-coordinate
/// key and ordered by angle around their centroid in an orthonormal basis of
/// the plane, so the ring is simple whatever the camera.
/// Returns `None` for a zero normal or when fewer than 3 points remain.
pub fn plane_clip(
    cube: &Cube,
    point: Vector3<f64>,
    normal: Vector3<f64>,
    cfg: GeomCfg,
) -> Option<Vec<Vector3<f64>>> {
    let len = normal.norm();
    if len < cfg.eps {
        return None;
    }
    let n = normal / len;
    let mut hits: Vec<Vector3<f64>> = Vec::with_capacity(12);
    for (a, b) in cube.edges() {
        let ab = b - a;
        let denom = n.dot(&ab);
        if denom.abs() < cfg.eps {
            if n.dot(&(a - point)).abs() < cfg.eps && n.dot(&(b - point)).abs() < cfg.eps {
                hits.push(a);
                hits.push(b);
            }
            continue;
        }
        let t = n.dot(&(point - a)) / denom;
        if t > -cfg.eps && t < 1.0 + cfg.eps {
            hits.push(a + ab * t);
        }
    }

    let mut seen: HashSet<(i64, i64, i64)> = HashSet::with_capacity(hits.len());
    hits.retain(|p| seen.insert((cfg.quantize(p.x), cfg.quantize(p.y), cfg.quantize(p.z))));
    if hits.len() < 3 {
        return None;
    }
    let ring = tidy_ring(order_in_plane(hits, n), cfg.eps);
    (ring.len() >= 3).then_some(ring)
}

/// Orthonormal pair spanning the plane with unit normal `n`.
pub(crate) fn plane_frame(n: Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let helper = if n.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let e1 = n.cross(&helper).normalize();
    let e2 = n.cross(&e1);
    (e1, e2)
}

/// Sort coplanar points by angle around their centroid, measured in the plane
/// with unit normal `n`.
pub(crate) fn order_in_plane(points: Vec<Vector3<f64>>, n: Vector3<f64>) -> Vec<Vector3<f64>> {
    let (e1, e2) = plane_frame(n);
    let c = centroid(&points);
    let mut keyed: Vec<(f64, Vector3<f64>)> = points
        .into_iter()
        .map(|p| {
            let d = p - c;
            (d.dot(&e2).atan2(d.dot(&e1)), p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, p)| p).collect()
}
