//! Polygon clipping against half-planes (boundary walk).

use nalgebra::Vector2;

use super::types::Hs2;
use crate::cfg::GeomCfg;
use crate::ring::{clip_by_field, tidy_ring};
use crate::types::Rect;

/// Which side of a directed line through the origin to keep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// `cross(d, p) >= 0`
    Left,
    /// `cross(d, p) <= 0`
    Right,
}

/// Clip `poly` to one side of the line through the origin along `dir`.
pub fn clip_half_plane(
    poly: &[Vector2<f64>],
    dir: Vector2<f64>,
    keep: Side,
    cfg: GeomCfg,
) -> Vec<Vector2<f64>> {
    clip_to_hs(poly, Hs2::through_origin(dir, keep == Side::Left), cfg)
}

/// Clip `poly` to the half-plane `hs`.
pub fn clip_to_hs(poly: &[Vector2<f64>], hs: Hs2, cfg: GeomCfg) -> Vec<Vector2<f64>> {
    clip_by_field(poly, |p| hs.slack(*p), cfg.eps)
}

/// Clip a convex or simple polygon to the rectangle; coincident neighbours
/// created by the cuts are merged.
pub fn clip_to_rect(poly: &[Vector2<f64>], rect: &Rect, cfg: GeomCfg) -> Vec<Vector2<f64>> {
    let mut out = poly.to_vec();
    for hs in Hs2::rect_sides(rect) {
        if out.is_empty() {
            break;
        }
        out = clip_to_hs(&out, hs, cfg);
    }
    tidy_ring(out, cfg.eps)
}
