//! Closed half-plane `n · x <= c`.

use nalgebra::Vector2;

use crate::types::Rect;

/// Closed half-plane `n · x <= c` (no normalization required here).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hs2 {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Hs2 {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }
    /// Half-plane on the `keep_left` side of the line through the origin along `d`:
    /// `cross(d, x) >= 0` if `keep_left`, `cross(d, x) <= 0` otherwise.
    #[inline]
    pub fn through_origin(d: Vector2<f64>, keep_left: bool) -> Self {
        // cross(d, x) = (-d.y, d.x) · x
        let n = Vector2::new(d.y, -d.x);
        if keep_left {
            Self::new(n, 0.0)
        } else {
            Self::new(-n, 0.0)
        }
    }
    /// Slack `c - n·p`; non-negative inside.
    #[inline]
    pub fn slack(&self, p: Vector2<f64>) -> f64 {
        self.c - self.n.dot(&p)
    }
    /// The four half-planes whose intersection is `rect`.
    pub fn rect_sides(rect: &Rect) -> [Hs2; 4] {
        [
            Hs2::new(Vector2::new(-1.0, 0.0), -rect.xmin),
            Hs2::new(Vector2::new(1.0, 0.0), rect.xmax),
            Hs2::new(Vector2::new(0.0, -1.0), -rect.ymin),
            Hs2::new(Vector2::new(0.0, 1.0), rect.ymax),
        ]
    }
}
