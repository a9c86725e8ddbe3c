//! Curated internal API (UNSTABLE).
//!
//! Important
//! - Not a public API. A convenience surface for the CLI and experiments;
//!   breaking changes are allowed.
//! - Prefer these re-exports over reaching into submodules.

// Entry point and data model
pub use crate::region::{compute_region, region_2d, region_3d, AnyRegion, Region};
pub use crate::types::{Coords, Cube, Domain, Mode, Rect, SpanVector, VectorId};
pub use crate::{GeomCfg, RegionError};
// Classification
pub use crate::classify::{
    affine_dimension_2d, affine_dimension_3d, rank_linear_2d, rank_linear_3d,
};
// 2D primitives
pub use crate::geom2::{
    clip_half_plane, clip_to_rect, cone_shape_2d, hull_2d, line_clip as line_clip_2d,
    ray_clip as ray_clip_2d, ConeShape2, Side,
};
// 3D primitives
pub use crate::geom3::{
    clip_ring_to_cube, coeff_in_basis, cone_silhouette, hull_cube_points,
    line_clip as line_clip_3d, plane_clip, ray_clip as ray_clip_3d, OrbitView, Projector,
};
