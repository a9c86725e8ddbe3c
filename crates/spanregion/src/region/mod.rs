//! Region assembly: mode × rank dispatch into one renderable primitive.
//!
//! Purpose
//! - Turn a vector snapshot, a combination mode and a viewing domain into a
//!   `Region`, already clipped to the domain and in world coordinates.
//! - Stateless: every call recomputes from scratch.
//!
//! Dispatch tables live in `plane` (2D) and `space` (3D); each is a single
//! `match (mode, rank)` so every combination stays auditable.

mod plane;
mod space;

pub use plane::region_2d;
pub use space::region_3d;

use nalgebra::{Vector2, Vector3};

use crate::cfg::GeomCfg;
use crate::error::RegionError;
use crate::geom3::Projector;
use crate::types::{Coords, Domain, Mode, SpanVector};

/// Renderable result of a span computation.
///
/// Rings have at least 3 vertices, no coincident neighbours, and unspecified
/// winding. `Line` and `Ray` keep the infinite primitive next to the chord
/// `a..b` that was clipped to the domain.
#[derive(Clone, Debug, PartialEq)]
pub enum Region<P> {
    Empty,
    Point(P),
    Segment(P, P),
    Ray { origin: P, dir: P, a: P, b: P },
    Line { through: P, dir: P, a: P, b: P },
    Polygon(Vec<P>),
    /// World points whose projection is the convex outline of a solid
    /// (3D cones and point clouds). Not planar in world space.
    Silhouette(Vec<P>),
    /// The whole domain, given by its boundary polygons (one rectangle in 2D,
    /// six faces in 3D).
    FullDomain(Vec<Vec<P>>),
}

impl<P: Clone> Region<P> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Region::Empty)
    }

    /// Lowercase tag of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Region::Empty => "empty",
            Region::Point(_) => "point",
            Region::Segment(..) => "segment",
            Region::Ray { .. } => "ray",
            Region::Line { .. } => "line",
            Region::Polygon(_) => "polygon",
            Region::Silhouette(_) => "silhouette",
            Region::FullDomain(_) => "full",
        }
    }

    /// Drawable points: chord ends for lines/rays, ring vertices, or all
    /// boundary vertices of `FullDomain`.
    pub fn points(&self) -> Vec<P> {
        match self {
            Region::Empty => Vec::new(),
            Region::Point(p) => vec![p.clone()],
            Region::Segment(a, b) | Region::Ray { a, b, .. } | Region::Line { a, b, .. } => {
                vec![a.clone(), b.clone()]
            }
            Region::Polygon(ring) | Region::Silhouette(ring) => ring.clone(),
            Region::FullDomain(faces) => faces.iter().flatten().cloned().collect(),
        }
    }
}

/// Region in the dimensionality of the domain.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyRegion {
    Plane(Region<Vector2<f64>>),
    Space(Region<Vector3<f64>>),
}

impl AnyRegion {
    pub fn kind(&self) -> &'static str {
        match self {
            AnyRegion::Plane(r) => r.kind(),
            AnyRegion::Space(r) => r.kind(),
        }
    }
    pub fn is_empty(&self) -> bool {
        match self {
            AnyRegion::Plane(r) => r.is_empty(),
            AnyRegion::Space(r) => r.is_empty(),
        }
    }
}

/// Compute the region spanned by `vectors` under `mode`, clipped to `domain`.
///
/// Contract violations (bad domain, non-finite or wrong-dimension vectors)
/// fail fast with `RegionError`; geometric degeneracy never errors.
/// `view` is only consulted for 3D domains.
pub fn compute_region<V: Projector + ?Sized>(
    mode: Mode,
    vectors: &[SpanVector],
    domain: &Domain,
    view: &V,
    cfg: GeomCfg,
) -> Result<AnyRegion, RegionError> {
    domain.validate()?;
    for v in vectors {
        if v.coords.dim() != domain.dim() {
            return Err(RegionError::DimensionMismatch {
                id: v.id.clone(),
                expected: domain.dim(),
                found: v.coords.dim(),
            });
        }
        if !v.coords.is_finite() {
            return Err(RegionError::NonFiniteCoordinate { id: v.id.clone() });
        }
    }
    let out = match domain {
        Domain::Plane(rect) => {
            let pts: Vec<Vector2<f64>> = vectors
                .iter()
                .filter_map(|v| match v.coords {
                    Coords::Plane(p) => Some(p),
                    Coords::Space(_) => None,
                })
                .collect();
            AnyRegion::Plane(region_2d(mode, &pts, rect, cfg))
        }
        Domain::Space(cube) => {
            let pts: Vec<Vector3<f64>> = vectors
                .iter()
                .filter_map(|v| match v.coords {
                    Coords::Space(p) => Some(p),
                    Coords::Plane(_) => None,
                })
                .collect();
            AnyRegion::Space(region_3d(mode, &pts, cube, view, cfg))
        }
    };
    tracing::debug!(
        %mode,
        dim = domain.dim(),
        vectors = vectors.len(),
        kind = out.kind(),
        "region computed"
    );
    Ok(out)
}

/// Ring → `Polygon`, or the best lower-dimensional stand-in when clipping
/// collapsed it.
pub(crate) fn ring_or_lower<const D: usize>(
    ring: Vec<nalgebra::SVector<f64, D>>,
) -> Region<nalgebra::SVector<f64, D>> {
    match ring.len() {
        0 => Region::Empty,
        1 => Region::Point(ring[0]),
        2 => Region::Segment(ring[0], ring[1]),
        _ => Region::Polygon(ring),
    }
}

#[cfg(test)]
mod tests;
