//! Lines, rays and segments against the viewing rectangle.
//!
//! Lines and rays use direct edge intersection: every rectangle edge hit by the
//! carrier line contributes a parameter and the two extreme valid hits form the
//! chord. Segments use slab clipping on `[0, 1]`.

use nalgebra::Vector2;

use super::cross;
use crate::cfg::GeomCfg;
use crate::slab::slab_interval;
use crate::types::Rect;

type Chord = (Vector2<f64>, Vector2<f64>);

/// Chord of the infinite line `point + t·dir` inside `rect`.
///
/// `None` if `dir` is (near) zero or the line misses or only grazes the rectangle.
pub fn line_clip(rect: &Rect, point: Vector2<f64>, dir: Vector2<f64>, cfg: GeomCfg) -> Option<Chord> {
    clip_param(rect, point, dir, false, cfg)
}

/// Part of the ray `origin + t·dir`, `t >= 0`, inside `rect`.
pub fn ray_clip(rect: &Rect, origin: Vector2<f64>, dir: Vector2<f64>, cfg: GeomCfg) -> Option<Chord> {
    clip_param(rect, origin, dir, true, cfg)
}

/// Part of the segment `a..b` inside `rect`. A segment already inside comes
/// back unchanged; a degenerate segment (`a ≈ b`) returns `(a, a)` if inside.
pub fn segment_clip(rect: &Rect, a: Vector2<f64>, b: Vector2<f64>, cfg: GeomCfg) -> Option<Chord> {
    let lo = Vector2::new(rect.xmin, rect.ymin);
    let hi = Vector2::new(rect.xmax, rect.ymax);
    let (t0, t1) = slab_interval(a, b - a, lo, hi, 0.0, 1.0, cfg.eps)?;
    let d = b - a;
    let p = if t0 <= 0.0 { a } else { a + d * t0 };
    let q = if t1 >= 1.0 { b } else { a + d * t1 };
    Some((p, q))
}

fn clip_param(
    rect: &Rect,
    p: Vector2<f64>,
    dir: Vector2<f64>,
    ray: bool,
    cfg: GeomCfg,
) -> Option<Chord> {
    let len = dir.norm();
    if len < cfg.eps {
        return None;
    }
    let d = dir / len;
    let c = rect.corners();
    let mut ts: Vec<f64> = Vec::with_capacity(5);
    if ray && rect.contains(p, cfg.eps) {
        ts.push(0.0);
    }
    for k in 0..4 {
        let a = c[k];
        let s = c[(k + 1) % 4] - a;
        let den = cross(d, s);
        if den.abs() < cfg.eps {
            continue;
        }
        let ao = a - p;
        let t = cross(ao, s) / den;
        let u = cross(ao, d) / den;
        if !(-cfg.eps..=1.0 + cfg.eps).contains(&u) {
            continue;
        }
        if ray && t < -cfg.eps {
            continue;
        }
        ts.push(if ray { t.max(0.0) } else { t });
    }
    let tlo = ts.iter().copied().fold(f64::INFINITY, f64::min);
    let thi = ts.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if ts.is_empty() || thi - tlo < cfg.eps {
        return None;
    }
    Some((p + d * tlo, p + d * thi))
}
