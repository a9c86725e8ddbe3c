//! Planar geometry: half-planes, rectangle intersection, hulls and wedges.
//!
//! Purpose
//! - Everything the 2D region assembler needs, in world coordinates.
//! - Also hosts the monotone-chain hull reused by the 3D silhouettes (after
//!   projection).
//!
//! Code cross-refs: `crate::ring::clip_by_field`, `crate::slab::slab_interval`

mod clip;
mod hull;
mod intersect;
mod types;
mod wedge;

pub use clip::{clip_half_plane, clip_to_hs, clip_to_rect, Side};
pub use hull::{hull_2d, hull_2d_indices};
pub use intersect::{line_clip, ray_clip, segment_clip};
pub use types::Hs2;
pub use wedge::{cone_shape_2d, ConeShape2};
pub(crate) use wedge::largest_gap;

use nalgebra::Vector2;

/// z-component of `a × b` (signed parallelogram area).
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Unit vector at angle `theta`.
#[inline]
pub fn polar(theta: f64) -> Vector2<f64> {
    Vector2::new(theta.cos(), theta.sin())
}
