//! 3D dispatch: vectors in space, clipped to the origin-centred cube.

use nalgebra::{Vector2, Vector3};

use super::plane::{dedup_points, extremes};
use super::{ring_or_lower, Region};
use crate::cfg::GeomCfg;
use crate::classify::{
    affine_dimension_3d, first_distinct_pair, first_nonzero, independent_pair_3d, rank_linear_3d,
};
use crate::geom2::hull_2d_indices;
use crate::geom3::{
    clip_ring_to_cube, clip_wedge, cone_silhouette, hull_cube_points, line_clip, planar_cone,
    plane_basis, plane_clip, projected_hull, ray_clip, segment_clip, PlanarCone, Projector,
};
use crate::ring::{clip_by_field, tidy_ring};
use crate::types::{Cube, Mode};

type P3 = Vector3<f64>;

/// Region of the 3D vectors `pts` under `mode`, clipped to `cube`.
///
/// `view` only shapes silhouettes; coordinates in the result stay in world
/// space.
pub fn region_3d<V: Projector + ?Sized>(
    mode: Mode,
    pts: &[P3],
    cube: &Cube,
    view: &V,
    cfg: GeomCfg,
) -> Region<P3> {
    let rank = match mode {
        Mode::Linear | Mode::Cone | Mode::Hyperplane => rank_linear_3d(pts, cfg),
        Mode::Affine | Mode::Convex => affine_dimension_3d(pts, cfg),
    };
    let origin = P3::zeros();
    let out = match (mode, rank) {
        (Mode::Linear, 0) => Region::Empty,
        (Mode::Linear, 1) => match first_nonzero(pts, cfg) {
            Some(d) => line(cube, origin, d, cfg),
            None => Region::Empty,
        },
        (Mode::Linear, 2) => match independent_pair_3d(pts, cfg) {
            Some((u, v)) => plane(cube, origin, u.cross(&v), cfg),
            None => Region::Empty,
        },
        (Mode::Linear, _) => full(cube),

        (Mode::Affine, 0) | (Mode::Convex, 0) => match pts.first() {
            Some(p) if cube.contains(*p, cfg.eps) => Region::Point(*p),
            _ => Region::Empty,
        },
        (Mode::Affine, 1) => match first_distinct_pair(pts, cfg) {
            Some((a, b)) => line(cube, a, b - a, cfg),
            None => Region::Empty,
        },
        (Mode::Affine, 2) => match affine_frame(pts, cfg) {
            Some((a, u, v)) => plane(cube, a, u.cross(&v), cfg),
            None => Region::Empty,
        },
        (Mode::Affine, _) => full(cube),

        (Mode::Convex, 1) => match extremes(pts, cfg) {
            Some((a, b)) => match segment_clip(cube, a, b, cfg) {
                Some((p, q)) => ring_or_lower(tidy_ring(vec![p, q], cfg.eps)),
                None => Region::Empty,
            },
            None => Region::Empty,
        },
        (Mode::Convex, 2) => {
            let hull = planar_hull(&dedup_points(pts, cfg), cfg);
            ring_or_lower(clip_ring_to_cube(&hull, cube, cfg.eps))
        }
        (Mode::Convex, _) => {
            let inside = dedup_points(&hull_cube_points(&dedup_points(pts, cfg), cube, cfg), cfg);
            let ring = projected_hull(&inside, view);
            if ring.len() >= 3 {
                Region::Silhouette(ring)
            } else {
                Region::Empty
            }
        }

        (Mode::Cone, 0) => Region::Empty,
        (Mode::Cone, 1) => match first_nonzero(pts, cfg) {
            Some(d) if pts.iter().any(|g| g.dot(&d) < -cfg.eps) => line(cube, origin, d, cfg),
            Some(d) => ray(cube, d, cfg),
            None => Region::Empty,
        },
        (Mode::Cone, 2) => planar_cone_region(pts, cube, cfg),
        (Mode::Cone, _) => {
            let ring = cone_silhouette(pts, cube, view, cfg);
            if ring.len() >= 3 {
                Region::Silhouette(ring)
            } else {
                tracing::trace!("no cone facet survived the cube");
                Region::Empty
            }
        }

        (Mode::Hyperplane, 0) => Region::Empty,
        (Mode::Hyperplane, _) => match first_nonzero(pts, cfg) {
            Some(n) => plane(cube, origin, n, cfg),
            None => Region::Empty,
        },
    };
    tracing::debug!(%mode, rank, kind = out.kind(), "region_3d");
    out
}

fn planar_cone_region(gens: &[P3], cube: &Cube, cfg: GeomCfg) -> Region<P3> {
    let Some((u, v)) = independent_pair_3d(gens, cfg) else {
        return Region::Empty;
    };
    let (e1, e2) = plane_basis(u, v, cfg);
    let Some(poly) = plane_clip(cube, P3::zeros(), e1.cross(&e2), cfg) else {
        return Region::Empty;
    };
    match planar_cone(gens, e1, e2, cfg) {
        PlanarCone::Plane => Region::Polygon(poly),
        PlanarCone::HalfPlane { inward } => {
            let ring = tidy_ring(clip_by_field(&poly, |p| p.dot(&inward), cfg.eps), cfg.eps);
            ring_or_lower(ring)
        }
        PlanarCone::Wedge { r1, r2 } => {
            let ring = tidy_ring(clip_wedge(&poly, r1, r2, cfg), cfg.eps);
            if ring.len() >= 3 {
                Region::Polygon(ring)
            } else {
                tracing::trace!("planar wedge clip degenerate, drawing bisector");
                ray(cube, r1.normalize() + r2.normalize(), cfg)
            }
        }
    }
}

/// Convex hull of coplanar points, computed in an in-plane basis so the
/// result does not depend on the view.
fn planar_hull(pts: &[P3], cfg: GeomCfg) -> Vec<P3> {
    let Some((a, u, v)) = affine_frame(pts, cfg) else {
        return Vec::new();
    };
    let (e1, e2) = plane_basis(u, v, cfg);
    let local: Vec<Vector2<f64>> = pts
        .iter()
        .map(|p| Vector2::new((p - a).dot(&e1), (p - a).dot(&e2)))
        .collect();
    hull_2d_indices(&local).into_iter().map(|i| pts[i]).collect()
}

/// Base point and two independent edge vectors of a non-collinear point set.
fn affine_frame(pts: &[P3], cfg: GeomCfg) -> Option<(P3, P3, P3)> {
    let (a, b) = first_distinct_pair(pts, cfg)?;
    let u = b - a;
    let c = pts.iter().find(|p| (*p - a).cross(&u).norm() >= cfg.eps)?;
    Some((a, u, c - a))
}

fn line(cube: &Cube, through: P3, dir: P3, cfg: GeomCfg) -> Region<P3> {
    match line_clip(cube, through, dir, cfg) {
        Some((a, b)) => Region::Line { through, dir, a, b },
        None => Region::Empty,
    }
}

fn ray(cube: &Cube, dir: P3, cfg: GeomCfg) -> Region<P3> {
    let origin = P3::zeros();
    match ray_clip(cube, origin, dir, cfg) {
        Some((a, b)) => Region::Ray { origin, dir, a, b },
        None => Region::Empty,
    }
}

fn plane(cube: &Cube, point: P3, normal: P3, cfg: GeomCfg) -> Region<P3> {
    match plane_clip(cube, point, normal, cfg) {
        Some(ring) => Region::Polygon(ring),
        None => Region::Empty,
    }
}

fn full(cube: &Cube) -> Region<P3> {
    Region::FullDomain(cube.faces())
}
