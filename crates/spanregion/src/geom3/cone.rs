//! Polyhedral cones (rank 3) as projected silhouettes.
//!
//! Generators are sorted by angle in a basis of the plane through the first
//! two independent generators. Each consecutive pair `(r_i, r_{i+1})` bounds a
//! facet plane with normal `r_i × r_{i+1}`; the facet is that plane∩cube
//! clipped to the pair's wedge. The silhouette is the 2D hull of all facet
//! points in the render plane, reported through the world-space points it
//! selects. This is a hull-of-facets approximation, not an exact polyhedron.

use nalgebra::{Vector2, Vector3};

use super::intersect::plane_clip;
use super::view::Projector;
use super::wedge::{clip_wedge, plane_basis};
use crate::cfg::GeomCfg;
use crate::classify::independent_pair_3d;
use crate::geom2::hull_2d_indices;
use crate::types::Cube;

/// Facet polygons of the cone spanned by `gens` (one per angular neighbour pair).
pub fn cone_facets(gens: &[Vector3<f64>], cube: &Cube, cfg: GeomCfg) -> Vec<Vec<Vector3<f64>>> {
    let Some((u, v)) = independent_pair_3d(gens, cfg) else {
        return Vec::new();
    };
    let (e1, e2) = plane_basis(u, v, cfg);
    let mut dirs: Vec<(f64, Vector3<f64>)> = gens
        .iter()
        .filter(|g| g.norm() >= cfg.eps)
        .map(|g| (g.dot(&e2).atan2(g.dot(&e1)), *g))
        .collect();
    dirs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let origin = Vector3::zeros();
    let mut facets = Vec::with_capacity(dirs.len());
    for i in 0..dirs.len() {
        let r1 = dirs[i].1;
        let r2 = dirs[(i + 1) % dirs.len()].1;
        let n = r1.cross(&r2);
        if n.norm() < cfg.eps {
            continue;
        }
        let Some(poly) = plane_clip(cube, origin, n, cfg) else {
            continue;
        };
        let facet = clip_wedge(&poly, r1, r2, cfg);
        if facet.len() >= 3 {
            facets.push(facet);
        }
    }
    facets
}

/// Silhouette ring of the polyhedral cone; empty if no facet survives.
pub fn cone_silhouette<V: Projector + ?Sized>(
    gens: &[Vector3<f64>],
    cube: &Cube,
    view: &V,
    cfg: GeomCfg,
) -> Vec<Vector3<f64>> {
    let points: Vec<Vector3<f64>> = cone_facets(gens, cube, cfg)
        .into_iter()
        .flatten()
        .collect();
    projected_hull(&points, view)
}

/// World points whose projections form the convex hull of the projected set.
pub fn projected_hull<V: Projector + ?Sized>(points: &[Vector3<f64>], view: &V) -> Vec<Vector3<f64>> {
    if points.len() < 3 {
        return Vec::new();
    }
    let projected: Vec<Vector2<f64>> = points.iter().map(|p| view.project(*p)).collect();
    let idx = hull_2d_indices(&projected);
    if idx.len() < 3 {
        return Vec::new();
    }
    idx.into_iter().map(|i| points[i]).collect()
}
