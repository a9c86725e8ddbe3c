//! Span regions of small vector sets in 2D and 3D.
//!
//! Given vectors, a combination mode (linear, affine, convex, cone,
//! hyperplane) and a finite viewing domain, compute the region those vectors
//! span, clipped to the domain and ready to draw.
//!
//! Layout
//! - `classify`: rank and affine dimension.
//! - `geom2` / `geom3`: clipping, hulls and wedges against the rectangle/cube.
//! - `region`: the mode × rank dispatch behind `compute_region`.
//!
//! API Policy
//! - Project-internal crate; `api` and `prelude` are convenience surfaces,
//!   not a stability promise.

pub mod api;
pub mod cfg;
pub mod classify;
pub mod error;
pub mod geom2;
pub mod geom3;
pub mod region;
pub mod ring;
pub mod slab;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use error::RegionError;
pub use geom3::{OrbitView, Projector};
pub use region::{compute_region, AnyRegion, Region};
pub use types::{Coords, Cube, Domain, Mode, Rect, SpanVector, VectorId};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{
        affine_dimension_2d, affine_dimension_3d, rank_linear_2d, rank_linear_3d,
    };
    pub use crate::region::{compute_region, region_2d, region_3d, AnyRegion, Region};
    pub use crate::types::{Coords, Cube, Domain, Mode, Rect, SpanVector, VectorId};
    pub use crate::{GeomCfg, OrbitView, Projector, RegionError};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
