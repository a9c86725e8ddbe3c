use super::*;
use crate::cfg::GeomCfg;
use crate::geom2::cross;
use crate::geom3::OrbitView;
use crate::types::{Cube, Rect};
use nalgebra::{vector, Vector2, Vector3};

fn cfg() -> GeomCfg {
    GeomCfg::default()
}

fn rect() -> Rect {
    Rect::default()
}

fn cube() -> Cube {
    Cube::default()
}

fn view() -> OrbitView {
    OrbitView::default()
}

fn r2(mode: Mode, pts: &[Vector2<f64>]) -> Region<Vector2<f64>> {
    region_2d(mode, pts, &rect(), cfg())
}

fn r3(mode: Mode, pts: &[Vector3<f64>]) -> Region<Vector3<f64>> {
    region_3d(mode, pts, &cube(), &view(), cfg())
}

fn area(ring: &[Vector2<f64>]) -> f64 {
    let n = ring.len();
    (0..n).map(|i| cross(ring[i], ring[(i + 1) % n])).sum::<f64>().abs() / 2.0
}

fn sorted_ends<const D: usize>(
    a: nalgebra::SVector<f64, D>,
    b: nalgebra::SVector<f64, D>,
) -> [nalgebra::SVector<f64, D>; 2] {
    let mut ends = [a, b];
    ends.sort_by(|p, q| p.iter().partial_cmp(q.iter()).unwrap());
    ends
}

// ---- 2D ---------------------------------------------------------------

#[test]
fn linear_2d_by_rank() {
    assert_eq!(r2(Mode::Linear, &[]), Region::Empty);
    assert_eq!(r2(Mode::Linear, &[Vector2::zeros()]), Region::Empty);

    match r2(Mode::Linear, &[vector![1.0, 0.0], vector![-3.0, 0.0]]) {
        Region::Line { through, a, b, .. } => {
            assert_eq!(through, Vector2::zeros());
            let [lo, hi] = sorted_ends(a, b);
            assert!((lo - vector![-10.0, 0.0]).norm() < 1e-9);
            assert!((hi - vector![10.0, 0.0]).norm() < 1e-9);
        }
        other => panic!("expected line, got {other:?}"),
    }

    match r2(Mode::Linear, &[vector![1.0, 0.0], vector![0.0, 1.0]]) {
        Region::FullDomain(rings) => {
            assert_eq!(rings.len(), 1);
            assert_eq!(rings[0], rect().corners().to_vec());
        }
        other => panic!("expected full domain, got {other:?}"),
    }
}

#[test]
fn affine_2d_by_dimension() {
    assert_eq!(r2(Mode::Affine, &[]), Region::Empty);
    assert_eq!(
        r2(Mode::Affine, &[vector![3.0, 3.0], vector![3.0, 3.0]]),
        Region::Point(vector![3.0, 3.0])
    );
    // A lone point outside the rectangle is not drawable.
    assert_eq!(r2(Mode::Affine, &[vector![30.0, 0.0]]), Region::Empty);

    match r2(Mode::Affine, &[vector![0.0, 1.0], vector![1.0, 2.0]]) {
        Region::Line { through, a, b, .. } => {
            assert_eq!(through, vector![0.0, 1.0]);
            let [lo, hi] = sorted_ends(a, b);
            assert!((lo - vector![-8.0, -7.0]).norm() < 1e-9);
            assert!((hi - vector![6.0, 7.0]).norm() < 1e-9);
        }
        other => panic!("expected line, got {other:?}"),
    }

    let tri = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
    assert_eq!(r2(Mode::Affine, &tri).kind(), "full");
}

#[test]
fn convex_2d_triangle_keeps_vertices() {
    let tri = [vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]];
    match r2(Mode::Convex, &tri) {
        Region::Polygon(ring) => {
            assert_eq!(ring.len(), 3);
            for v in tri {
                assert!(ring.iter().any(|p| (p - v).norm() < 1e-9));
            }
            assert!((area(&ring) - 6.0).abs() < 1e-9);
        }
        other => panic!("expected polygon, got {other:?}"),
    }
}

#[test]
fn convex_2d_interior_and_duplicate_points_vanish() {
    let pts = [
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![1.0, 1.0],
    ];
    match r2(Mode::Convex, &pts) {
        Region::Polygon(ring) => {
            assert_eq!(ring.len(), 4);
            assert!((area(&ring) - 4.0).abs() < 1e-9);
        }
        other => panic!("expected polygon, got {other:?}"),
    }
}

#[test]
fn convex_2d_collinear_degrades_to_extreme_segment() {
    let pts = [vector![1.0, 1.0], vector![0.0, 0.0], vector![3.0, 3.0]];
    match r2(Mode::Convex, &pts) {
        Region::Segment(a, b) => {
            let [lo, hi] = sorted_ends(a, b);
            assert!((lo - vector![0.0, 0.0]).norm() < 1e-9);
            assert!((hi - vector![3.0, 3.0]).norm() < 1e-9);
        }
        other => panic!("expected segment, got {other:?}"),
    }
}

#[test]
fn convex_2d_is_clipped_to_rectangle() {
    let pts = [vector![0.0, 0.0], vector![40.0, 0.0], vector![0.0, 3.0]];
    let Region::Polygon(ring) = r2(Mode::Convex, &pts) else {
        panic!("expected polygon");
    };
    assert!(ring.iter().all(|p| rect().contains(*p, 1e-9)));
    assert!(ring.iter().any(|p| (p.x - 10.0).abs() < 1e-9));
}

#[test]
fn cone_2d_parallel_generators() {
    match r2(Mode::Cone, &[vector![1.0, 0.0], vector![2.0, 0.0]]) {
        Region::Ray { origin, a, b, .. } => {
            assert_eq!(origin, Vector2::zeros());
            assert!(a.norm() < 1e-9);
            assert!((b - vector![10.0, 0.0]).norm() < 1e-9);
        }
        other => panic!("expected ray, got {other:?}"),
    }
    assert_eq!(r2(Mode::Cone, &[vector![1.0, 0.0], vector![-1.0, 0.0]]).kind(), "line");
}

#[test]
fn cone_2d_wedge_contains_origin_and_both_rays() {
    let Region::Polygon(ring) = r2(Mode::Cone, &[vector![2.0, 1.0], vector![1.0, 2.0]]) else {
        panic!("expected polygon");
    };
    assert!(ring.iter().any(|p| p.norm() < 1e-9), "apex missing: {ring:?}");
    // Every vertex lies between the two generators.
    for p in &ring {
        assert!(cross(vector![2.0, 1.0], *p) >= -1e-9);
        assert!(cross(*p, vector![1.0, 2.0]) >= -1e-9);
    }
    // Ray endpoints on the rectangle boundary are vertices.
    assert!(ring.iter().any(|p| (p - vector![10.0, 5.0]).norm() < 1e-9));
    assert!(ring.iter().any(|p| (p - vector![3.5, 7.0]).norm() < 1e-9));
}

#[test]
fn cone_2d_half_plane_and_full() {
    let half = [vector![1.0, 0.0], vector![0.0, 1.0], vector![-1.0, 0.0]];
    let Region::Polygon(ring) = r2(Mode::Cone, &half) else {
        panic!("expected polygon");
    };
    assert!(ring.iter().all(|p| p.y >= -1e-9));
    assert!((area(&ring) - 140.0).abs() < 1e-6);

    let wide = [vector![1.0, 0.0], vector![0.0, 1.0], vector![-1.0, -1.0]];
    assert_eq!(r2(Mode::Cone, &wide).kind(), "full");
}

#[test]
fn hyperplane_2d_uses_first_vector_only() {
    let pts = [Vector2::zeros(), vector![1.0, 0.0], vector![0.0, 5.0]];
    match r2(Mode::Hyperplane, &pts) {
        Region::Line { dir, a, b, .. } => {
            assert!(dir.dot(&vector![1.0, 0.0]).abs() < 1e-12);
            let [lo, hi] = sorted_ends(a, b);
            assert!((lo - vector![0.0, -7.0]).norm() < 1e-9);
            assert!((hi - vector![0.0, 7.0]).norm() < 1e-9);
        }
        other => panic!("expected line, got {other:?}"),
    }
    assert_eq!(r2(Mode::Hyperplane, &[Vector2::zeros()]), Region::Empty);
}

// ---- 3D ---------------------------------------------------------------

#[test]
fn linear_3d_by_rank() {
    assert_eq!(r3(Mode::Linear, &[Vector3::zeros()]), Region::Empty);

    match r3(Mode::Linear, &[vector![1.0, 0.0, 0.0]]) {
        Region::Line { a, b, .. } => {
            let [lo, hi] = sorted_ends(a, b);
            assert!((lo - vector![-6.0, 0.0, 0.0]).norm() < 1e-9);
            assert!((hi - vector![6.0, 0.0, 0.0]).norm() < 1e-9);
        }
        other => panic!("expected line, got {other:?}"),
    }

    let Region::Polygon(ring) = r3(Mode::Linear, &[vector![1.0, 0.0, 0.0], vector![0.0, 1.0, 0.0]]) else {
        panic!("expected polygon");
    };
    assert_eq!(ring.len(), 4);
    assert!(ring.iter().all(|p| p.z.abs() < 1e-9));

    let basis = [
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![0.0, 0.0, 1.0],
    ];
    match r3(Mode::Linear, &basis) {
        Region::FullDomain(faces) => assert_eq!(faces, cube().faces()),
        other => panic!("expected full domain, got {other:?}"),
    }
}

#[test]
fn affine_3d_plane_through_three_points() {
    let pts = [
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![0.0, 0.0, 1.0],
    ];
    let Region::Polygon(ring) = r3(Mode::Affine, &pts) else {
        panic!("expected polygon");
    };
    assert_eq!(ring.len(), 6);
    assert!(ring.iter().all(|p| (p.x + p.y + p.z - 1.0).abs() < 1e-9));

    let mut solid = pts.to_vec();
    solid.push(Vector3::zeros());
    assert_eq!(r3(Mode::Affine, &solid).kind(), "full");
}

#[test]
fn convex_3d_coplanar_and_solid() {
    let tri = [
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![0.0, 0.0, 1.0],
    ];
    match r3(Mode::Convex, &tri) {
        Region::Polygon(ring) => assert_eq!(ring.len(), 3),
        other => panic!("expected polygon, got {other:?}"),
    }

    let tet = [
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![0.0, 0.0, 1.0],
        vector![0.0, 0.0, 0.0],
    ];
    let Region::Silhouette(ring) = r3(Mode::Convex, &tet) else {
        panic!("expected silhouette");
    };
    assert!(ring.len() >= 3);
    assert!(ring.iter().all(|p| tet.contains(p)));
}

#[test]
fn convex_3d_coplanar_points_beyond_cube_are_cut() {
    let across = [
        vector![20.0, 0.0, 0.0],
        vector![0.0, 20.0, 0.0],
        vector![-20.0, -20.0, 0.0],
    ];
    let Region::Polygon(ring) = r3(Mode::Convex, &across) else {
        panic!("expected polygon");
    };
    assert!(ring.iter().all(|p| cube().contains(*p, 1e-9) && p.z.abs() < 1e-12));
    let flat: Vec<Vector2<f64>> = ring.iter().map(|p| p.xy()).collect();
    assert!((area(&flat) - 144.0).abs() < 1e-9);

    // The plane x + y + z = 20 passes beyond the corner (6, 6, 6).
    let beyond = [
        vector![20.0, 0.0, 0.0],
        vector![0.0, 20.0, 0.0],
        vector![0.0, 0.0, 20.0],
    ];
    assert_eq!(r3(Mode::Convex, &beyond), Region::Empty);
}

#[test]
fn convex_3d_solid_is_cut_to_cube() {
    let spike = [
        vector![0.0, 0.0, 0.0],
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![0.0, 0.0, 30.0],
    ];
    let Region::Silhouette(ring) = r3(Mode::Convex, &spike) else {
        panic!("expected silhouette");
    };
    assert!(ring.iter().all(|p| cube().contains(*p, 1e-9)));
    assert!(ring.iter().any(|p| (p.z - 6.0).abs() < 1e-9));

    let enclosing = [
        vector![-40.0, -40.0, -40.0],
        vector![200.0, -40.0, -40.0],
        vector![-40.0, 200.0, -40.0],
        vector![-40.0, -40.0, 200.0],
    ];
    let Region::Silhouette(ring) = r3(Mode::Convex, &enclosing) else {
        panic!("expected silhouette");
    };
    let corners = cube().vertices();
    assert!(ring.len() >= 4);
    assert!(ring.iter().all(|p| corners.iter().any(|c| (p - c).norm() < 1e-9)));

    let away = [
        vector![10.0, 10.0, 10.0],
        vector![11.0, 10.0, 10.0],
        vector![10.0, 11.0, 10.0],
        vector![10.0, 10.0, 11.0],
    ];
    assert_eq!(r3(Mode::Convex, &away), Region::Empty);
}

#[test]
fn vertical_planes_ignore_an_edge_on_camera() {
    let edge_on = OrbitView::new(0.0, 0.0);
    let gens = [vector![1.0, 0.0, 0.0], vector![0.0, 0.0, 1.0]];
    let polygon_area = |mode| match region_3d(mode, &gens, &cube(), &edge_on, cfg()) {
        Region::Polygon(ring) => {
            assert!(ring.iter().all(|p| p.y.abs() < 1e-12));
            let flat: Vec<Vector2<f64>> = ring.iter().map(|p| vector![p.x, p.z]).collect();
            area(&flat)
        }
        other => panic!("expected polygon, got {other:?}"),
    };
    assert!((polygon_area(Mode::Linear) - 144.0).abs() < 1e-9);
    assert!((polygon_area(Mode::Cone) - 36.0).abs() < 1e-9);
}

#[test]
fn cone_3d_rank_one() {
    assert_eq!(
        r3(Mode::Cone, &[vector![0.0, 0.0, 1.0], vector![0.0, 0.0, 3.0]]).kind(),
        "ray"
    );
    assert_eq!(
        r3(Mode::Cone, &[vector![0.0, 0.0, 1.0], vector![0.0, 0.0, -3.0]]).kind(),
        "line"
    );
}

#[test]
fn cone_3d_quadrant_wedge() {
    let gens = [vector![1.0, 0.0, 0.0], vector![0.0, 1.0, 0.0]];
    let Region::Polygon(ring) = r3(Mode::Cone, &gens) else {
        panic!("expected polygon");
    };
    assert!(ring.iter().all(|p| p.x >= -1e-9 && p.y >= -1e-9 && p.z.abs() < 1e-9));
    assert!(ring.iter().any(|p| p.norm() < 1e-9));
    assert!(ring.iter().any(|p| (p - vector![6.0, 6.0, 0.0]).norm() < 1e-9));
}

#[test]
fn cone_3d_planar_half_and_whole_plane() {
    let half = [
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![-1.0, 0.0, 0.0],
    ];
    let Region::Polygon(ring) = r3(Mode::Cone, &half) else {
        panic!("expected polygon");
    };
    assert!(ring.iter().all(|p| p.y >= -1e-9 && p.z.abs() < 1e-9));
    assert!(ring.iter().any(|p| (p - vector![-6.0, 6.0, 0.0]).norm() < 1e-9));

    let wide = [
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![-1.0, -1.0, 0.0],
    ];
    let Region::Polygon(ring) = r3(Mode::Cone, &wide) else {
        panic!("expected polygon");
    };
    assert_eq!(ring.len(), 4);
}

#[test]
fn cone_3d_octant_silhouette() {
    let gens = [
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![0.0, 0.0, 1.0],
    ];
    let Region::Silhouette(ring) = r3(Mode::Cone, &gens) else {
        panic!("expected silhouette");
    };
    assert!(ring.len() >= 3);
    assert!(ring.iter().all(|p| p.iter().all(|c| *c >= -1e-9)));
}

#[test]
fn hyperplane_3d_normal_is_first_vector() {
    let Region::Polygon(ring) = r3(Mode::Hyperplane, &[vector![0.0, 0.0, 2.0], vector![1.0, 0.0, 0.0]]) else {
        panic!("expected polygon");
    };
    assert!(ring.iter().all(|p| p.z.abs() < 1e-9));
}

// ---- entry point --------------------------------------------------------

#[test]
fn compute_region_validates_inputs() {
    let plane = Domain::Plane(rect());
    let err = compute_region(
        Mode::Linear,
        &[SpanVector::space("w", 1.0, 0.0, 0.0)],
        &plane,
        &view(),
        cfg(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        RegionError::DimensionMismatch { expected: 2, found: 3, .. }
    ));

    let err = compute_region(
        Mode::Cone,
        &[SpanVector::plane("v", f64::NAN, 0.0)],
        &plane,
        &view(),
        cfg(),
    )
    .unwrap_err();
    assert_eq!(err, RegionError::NonFiniteCoordinate { id: "v".into() });

    let bad = Domain::Space(Cube { half: -1.0 });
    let err = compute_region(Mode::Linear, &[], &bad, &view(), cfg()).unwrap_err();
    assert!(matches!(err, RegionError::InvalidDomain { .. }));
}

#[test]
fn compute_region_accepts_closure_projector() {
    let top_down = |p: Vector3<f64>| Vector2::new(p.x, p.y);
    let vs = [
        SpanVector::space("u", 1.0, 0.0, 0.0),
        SpanVector::space("v", 0.0, 1.0, 0.0),
    ];
    let out = compute_region(Mode::Linear, &vs, &Domain::Space(cube()), &top_down, cfg()).unwrap();
    let AnyRegion::Space(Region::Polygon(ring)) = out else {
        panic!("expected 3D polygon");
    };
    assert_eq!(ring.len(), 4);
}

#[test]
fn region_points_and_kinds() {
    let seg = Region::Segment(vector![0.0, 0.0], vector![1.0, 1.0]);
    assert_eq!(seg.kind(), "segment");
    assert_eq!(seg.points().len(), 2);
    let full: Region<Vector3<f64>> = Region::FullDomain(cube().faces());
    assert_eq!(full.points().len(), 24);
    assert!(Region::<Vector2<f64>>::Empty.is_empty());
}
