//! 2D dispatch: vectors in the plane, clipped to a rectangle.

use nalgebra::Vector2;

use super::{ring_or_lower, Region};
use crate::cfg::GeomCfg;
use crate::classify::{affine_dimension_2d, first_distinct_pair, first_nonzero, rank_linear_2d};
use crate::geom2::{
    clip_half_plane, clip_to_rect, cone_shape_2d, hull_2d, line_clip, polar, ray_clip,
    segment_clip, ConeShape2, Side,
};
use crate::ring::tidy_ring;
use crate::types::{Mode, Rect};

type P2 = Vector2<f64>;

/// Region of the 2D vectors `pts` under `mode`, clipped to `rect`.
///
/// | mode       | 0     | 1                     | 2                   |
/// |------------|-------|-----------------------|---------------------|
/// | linear     | empty | line through origin   | full                |
/// | affine     | point | line through 2 points | full                |
/// | convex     | point | segment               | hull                |
/// | cone       | empty | ray / line            | wedge / full        |
/// | hyperplane | empty | line ⟂ first vector   | line ⟂ first vector |
pub fn region_2d(mode: Mode, pts: &[P2], rect: &Rect, cfg: GeomCfg) -> Region<P2> {
    let rank = match mode {
        Mode::Linear | Mode::Cone | Mode::Hyperplane => rank_linear_2d(pts, cfg),
        Mode::Affine | Mode::Convex => affine_dimension_2d(pts, cfg),
    };
    let origin = P2::zeros();
    let out = match (mode, rank) {
        (Mode::Linear, 0) => Region::Empty,
        (Mode::Linear, 1) => match first_nonzero(pts, cfg) {
            Some(d) => line(rect, origin, d, cfg),
            None => Region::Empty,
        },
        (Mode::Linear, _) => full(rect),

        (Mode::Affine, 0) | (Mode::Convex, 0) => match pts.first() {
            Some(p) if rect.contains(*p, cfg.eps) => Region::Point(*p),
            _ => Region::Empty,
        },
        (Mode::Affine, 1) => match first_distinct_pair(pts, cfg) {
            Some((a, b)) => line(rect, a, b - a, cfg),
            None => Region::Empty,
        },
        (Mode::Affine, _) => full(rect),

        (Mode::Convex, 1) => match extremes(pts, cfg) {
            Some((a, b)) => match segment_clip(rect, a, b, cfg) {
                Some((p, q)) => ring_or_lower(tidy_ring(vec![p, q], cfg.eps)),
                None => Region::Empty,
            },
            None => Region::Empty,
        },
        (Mode::Convex, _) => {
            let uniq = dedup_points(pts, cfg);
            ring_or_lower(clip_to_rect(&hull_2d(&uniq), rect, cfg))
        }

        (Mode::Cone, 0) => Region::Empty,
        (Mode::Cone, _) => cone(pts, rect, cfg),

        (Mode::Hyperplane, 0) => Region::Empty,
        (Mode::Hyperplane, _) => match first_nonzero(pts, cfg) {
            Some(v) => line(rect, origin, P2::new(-v.y, v.x), cfg),
            None => Region::Empty,
        },
    };
    tracing::debug!(%mode, rank, kind = out.kind(), "region_2d");
    out
}

fn cone(pts: &[P2], rect: &Rect, cfg: GeomCfg) -> Region<P2> {
    let origin = P2::zeros();
    match cone_shape_2d(pts, cfg) {
        ConeShape2::Empty => Region::Empty,
        ConeShape2::Ray(d) => ray(rect, d, cfg),
        ConeShape2::Line(d) => line(rect, origin, d, cfg),
        ConeShape2::Full => full(rect),
        ConeShape2::Wedge { start, span } => {
            let d1 = polar(start);
            let d2 = polar(start + span);
            let ring = rect.corners().to_vec();
            let ring = clip_half_plane(&ring, d1, Side::Left, cfg);
            let ring = clip_half_plane(&ring, d2, Side::Right, cfg);
            let ring = tidy_ring(ring, cfg.eps);
            if ring.len() >= 3 {
                Region::Polygon(ring)
            } else {
                tracing::trace!(start, span, "wedge clip degenerate, drawing bisector");
                ray(rect, polar(start + span / 2.0), cfg)
            }
        }
    }
}

fn line(rect: &Rect, through: P2, dir: P2, cfg: GeomCfg) -> Region<P2> {
    match line_clip(rect, through, dir, cfg) {
        Some((a, b)) => Region::Line { through, dir, a, b },
        None => Region::Empty,
    }
}

fn ray(rect: &Rect, dir: P2, cfg: GeomCfg) -> Region<P2> {
    let origin = P2::zeros();
    match ray_clip(rect, origin, dir, cfg) {
        Some((a, b)) => Region::Ray { origin, dir, a, b },
        None => Region::Empty,
    }
}

fn full(rect: &Rect) -> Region<P2> {
    Region::FullDomain(vec![rect.corners().to_vec()])
}

/// Points with no earlier point within `eps`, in input order.
pub(crate) fn dedup_points<const D: usize>(
    pts: &[nalgebra::SVector<f64, D>],
    cfg: GeomCfg,
) -> Vec<nalgebra::SVector<f64, D>> {
    let mut out: Vec<nalgebra::SVector<f64, D>> = Vec::with_capacity(pts.len());
    for p in pts {
        if out.iter().all(|q| (p - q).norm() >= cfg.eps) {
            out.push(*p);
        }
    }
    out
}

/// The two extreme points of a collinear set along its direction.
pub(crate) fn extremes<const D: usize>(
    pts: &[nalgebra::SVector<f64, D>],
    cfg: GeomCfg,
) -> Option<(nalgebra::SVector<f64, D>, nalgebra::SVector<f64, D>)> {
    let (a, b) = first_distinct_pair(pts, cfg)?;
    let dir = b - a;
    let key = |p: &nalgebra::SVector<f64, D>| (p - a).dot(&dir);
    let lo = pts.iter().min_by(|p, q| key(*p).total_cmp(&key(*q)))?;
    let hi = pts.iter().max_by(|p, q| key(*p).total_cmp(&key(*q)))?;
    Some((*lo, *hi))
}
