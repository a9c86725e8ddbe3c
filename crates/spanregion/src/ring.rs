//! Dimension-generic ring helpers shared by the 2D and 3D clippers.
//!
//! - `clip_by_field`: Sutherland–Hodgman boundary walk keeping `f(p) >= -eps`.
//!   A half-plane clip is the field `c - n·p`; the 3D wedge clips use the
//!   basis coefficients `a(p)` and `b(p)`.
//! - `tidy_ring`: drop consecutive (and wrap-around) coincident vertices.

use nalgebra::SVector;

/// Clip a closed ring to `{ p : field(p) >= -eps }`.
///
/// Vertices are emitted in input order, so a ring that lies entirely inside
/// comes back unchanged. Near-zero denominators at a sign change emit the far
/// endpoint unmodified.
pub fn clip_by_field<const D: usize, F>(
    ring: &[SVector<f64, D>],
    field: F,
    eps: f64,
) -> Vec<SVector<f64, D>>
where
    F: Fn(&SVector<f64, D>) -> f64,
{
    let n = ring.len();
    if n == 0 {
        return Vec::new();
    }
    let vals: Vec<f64> = ring.iter().map(&field).collect();
    let mut out = Vec::with_capacity(n + 2);
    for i in 0..n {
        let j = (i + n - 1) % n;
        let (p, q) = (ring[j], ring[i]);
        let (vp, vq) = (vals[j], vals[i]);
        match (vp >= -eps, vq >= -eps) {
            (true, true) => out.push(q),
            (true, false) => out.push(crossing(p, q, vp, vq, eps)),
            (false, true) => {
                out.push(crossing(p, q, vp, vq, eps));
                out.push(q);
            }
            (false, false) => {}
        }
    }
    out
}

#[inline]
fn crossing<const D: usize>(
    p: SVector<f64, D>,
    q: SVector<f64, D>,
    vp: f64,
    vq: f64,
    eps: f64,
) -> SVector<f64, D> {
    let den = vp - vq;
    if den.abs() < eps {
        return q;
    }
    let t = vp / den;
    p + (q - p) * t
}

/// Remove coincident neighbours (within `eps`), including last→first.
pub fn tidy_ring<const D: usize>(ring: Vec<SVector<f64, D>>, eps: f64) -> Vec<SVector<f64, D>> {
    let mut out: Vec<SVector<f64, D>> = Vec::with_capacity(ring.len());
    for p in ring {
        if out.last().map_or(true, |q| (p - q).norm() > eps) {
            out.push(p);
        }
    }
    while out.len() > 1 && (out[0] - out[out.len() - 1]).norm() <= eps {
        out.pop();
    }
    out
}

/// Arithmetic mean of the points (zero for an empty slice).
pub fn centroid<const D: usize>(points: &[SVector<f64, D>]) -> SVector<f64, D> {
    if points.is_empty() {
        return SVector::zeros();
    }
    let sum = points.iter().fold(SVector::zeros(), |acc, p| acc + p);
    sum / points.len() as f64
}
