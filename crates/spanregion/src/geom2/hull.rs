use std::cmp::Ordering;

use nalgebra::Vector2;

/// Andrew's monotone chain convex hull (counterclockwise).
///
/// Fewer than 3 points are returned unchanged. Non-strict turns are popped, so
/// collinear boundary points and duplicates never survive; a fully collinear
/// input yields its two extreme points and a single repeated point yields one.
pub fn hull_2d(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    if points.len() < 3 {
        return points.to_vec();
    }
    hull_2d_indices(points)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Same as `hull_2d` but returns indices into `points`.
///
/// Lets 3D callers hull the projected points and keep the world-space sources.
pub fn hull_2d_indices(points: &[Vector2<f64>]) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }
    let mut idx: Vec<usize> = (0..n).collect();
    idx.sort_by(|&a, &b| {
        let (pa, pb) = (points[a], points[b]);
        match pa.x.partial_cmp(&pb.x).unwrap_or(Ordering::Equal) {
            Ordering::Equal => pa.y.partial_cmp(&pb.y).unwrap_or(Ordering::Equal),
            o => o,
        }
    });
    let turn = |o: usize, a: usize, b: usize| orient(points[o], points[a], points[b]);

    let mut lower: Vec<usize> = Vec::with_capacity(n);
    for &i in &idx {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], i) <= 0.0 {
            lower.pop();
        }
        lower.push(i);
    }
    let mut upper: Vec<usize> = Vec::with_capacity(n);
    for &i in idx.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], i) <= 0.0 {
            upper.pop();
        }
        upper.push(i);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    // All points coincide: both chains collapse onto the same location.
    if hull.len() == 2 && points[hull[0]] == points[hull[1]] {
        hull.truncate(1);
    }
    hull
}

/// Orientation of `(o, a, b)`: positive for a left turn.
#[inline]
fn orient(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}
