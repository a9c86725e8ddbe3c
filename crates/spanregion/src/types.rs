//! Input snapshot types: vectors, combination modes and viewing domains.
//!
//! - `SpanVector`: id + coordinates; read-only for the engine. The same tuple is
//!   a direction (linear/cone/hyperplane) or a position (affine/convex).
//! - `Mode`: closed set of combination rules.
//! - `Domain`: rectangle (2D) or origin-centred cube (3D), validated on
//!   construction.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Vector2, Vector3};

use crate::cfg::{DEFAULT_CUBE_HALF, DEFAULT_RECT};
use crate::error::RegionError;

/// Opaque, stable identifier of a vector in the caller's list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VectorId(pub String);

impl fmt::Display for VectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VectorId {
    fn from(s: &str) -> Self {
        VectorId(s.to_string())
    }
}

/// Coordinate tuple of a vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coords {
    Plane(Vector2<f64>),
    Space(Vector3<f64>),
}

impl Coords {
    #[inline]
    pub fn dim(&self) -> usize {
        match self {
            Coords::Plane(_) => 2,
            Coords::Space(_) => 3,
        }
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            Coords::Plane(v) => v.iter().all(|x| x.is_finite()),
            Coords::Space(v) => v.iter().all(|x| x.is_finite()),
        }
    }
}

/// One entry of the caller's vector list.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanVector {
    pub id: VectorId,
    pub coords: Coords,
}

impl SpanVector {
    pub fn plane(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: VectorId(id.into()),
            coords: Coords::Plane(Vector2::new(x, y)),
        }
    }
    pub fn space(id: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            id: VectorId(id.into()),
            coords: Coords::Space(Vector3::new(x, y, z)),
        }
    }
}

/// Combination rule applied to the vector set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Linear,
    Affine,
    Convex,
    Cone,
    Hyperplane,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Linear,
        Mode::Affine,
        Mode::Convex,
        Mode::Cone,
        Mode::Hyperplane,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Linear => "linear",
            Mode::Affine => "affine",
            Mode::Convex => "convex",
            Mode::Cone => "cone",
            Mode::Hyperplane => "hyperplane",
        }
    }

    /// Coefficient rule of the combination, as shown next to the canvas.
    pub fn rule(&self) -> &'static str {
        match self {
            Mode::Linear => "x = Σ αᵢ vᵢ, αᵢ ∈ ℝ",
            Mode::Affine => "x = Σ αᵢ vᵢ, Σ αᵢ = 1",
            Mode::Convex => "x = Σ αᵢ vᵢ, αᵢ ≥ 0, Σ αᵢ = 1",
            Mode::Cone => "x = Σ αᵢ vᵢ, αᵢ ≥ 0",
            Mode::Hyperplane => "⟨x, v₁⟩ = 0",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| RegionError::UnknownMode(s.to_string()))
    }
}

/// Axis-aligned viewing rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Rect {
    /// Validated constructor: finite bounds and positive extent on both axes.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, RegionError> {
        let r = Self {
            xmin,
            xmax,
            ymin,
            ymax,
        };
        r.validate()?;
        Ok(r)
    }

    pub fn validate(&self) -> Result<(), RegionError> {
        let finite = [self.xmin, self.xmax, self.ymin, self.ymax]
            .iter()
            .all(|x| x.is_finite());
        if !finite {
            return Err(RegionError::InvalidDomain {
                reason: "rectangle bounds must be finite".into(),
            });
        }
        if !(self.xmax > self.xmin && self.ymax > self.ymin) {
            return Err(RegionError::InvalidDomain {
                reason: format!(
                    "rectangle needs xmax>xmin and ymax>ymin, got x∈[{}, {}], y∈[{}, {}]",
                    self.xmin, self.xmax, self.ymin, self.ymax
                ),
            });
        }
        Ok(())
    }

    /// Corners in counterclockwise order starting at `(xmin, ymin)`.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            Vector2::new(self.xmin, self.ymin),
            Vector2::new(self.xmax, self.ymin),
            Vector2::new(self.xmax, self.ymax),
            Vector2::new(self.xmin, self.ymax),
        ]
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>, eps: f64) -> bool {
        p.x >= self.xmin - eps
            && p.x <= self.xmax + eps
            && p.y >= self.ymin - eps
            && p.y <= self.ymax + eps
    }
}

impl Default for Rect {
    fn default() -> Self {
        let (xmin, xmax, ymin, ymax) = DEFAULT_RECT;
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }
}

/// Cube `[-half, half]^3` centred at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    pub half: f64,
}

/// Edges of the cube as vertex index pairs (bottom ring, top ring, pillars).
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

impl Cube {
    pub fn new(half: f64) -> Result<Self, RegionError> {
        let c = Self { half };
        c.validate()?;
        Ok(c)
    }

    pub fn validate(&self) -> Result<(), RegionError> {
        if !(self.half.is_finite() && self.half > 0.0) {
            return Err(RegionError::InvalidDomain {
                reason: format!("cube half-extent must be finite and > 0, got {}", self.half),
            });
        }
        Ok(())
    }

    /// Vertices: bottom face (z = -C) counterclockwise, then the top face.
    pub fn vertices(&self) -> [Vector3<f64>; 8] {
        let c = self.half;
        [
            Vector3::new(-c, -c, -c),
            Vector3::new(c, -c, -c),
            Vector3::new(c, c, -c),
            Vector3::new(-c, c, -c),
            Vector3::new(-c, -c, c),
            Vector3::new(c, -c, c),
            Vector3::new(c, c, c),
            Vector3::new(-c, c, c),
        ]
    }

    pub fn edges(&self) -> [(Vector3<f64>, Vector3<f64>); 12] {
        let v = self.vertices();
        CUBE_EDGES.map(|(i, j)| (v[i], v[j]))
    }

    /// The six facets as quads.
    pub fn faces(&self) -> Vec<Vec<Vector3<f64>>> {
        let v = self.vertices();
        CUBE_FACES
            .iter()
            .map(|f| f.iter().map(|&i| v[i]).collect())
            .collect()
    }

    #[inline]
    pub fn contains(&self, p: Vector3<f64>, eps: f64) -> bool {
        p.iter().all(|x| x.abs() <= self.half + eps)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self {
            half: DEFAULT_CUBE_HALF,
        }
    }
}

/// Viewing domain the region is clipped to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Domain {
    Plane(Rect),
    Space(Cube),
}

impl Domain {
    #[inline]
    pub fn dim(&self) -> usize {
        match self {
            Domain::Plane(_) => 2,
            Domain::Space(_) => 3,
        }
    }

    pub fn validate(&self) -> Result<(), RegionError> {
        match self {
            Domain::Plane(r) => r.validate(),
            Domain::Space(c) => c.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_names() {
        for m in Mode::ALL {
            assert_eq!(m.name().parse::<Mode>().unwrap(), m);
            assert_eq!(m.to_string(), m.name());
        }
        assert!(matches!(
            "simplex".parse::<Mode>(),
            Err(RegionError::UnknownMode(_))
        ));
    }

    #[test]
    fn rect_rejects_non_positive_extent() {
        assert!(Rect::new(-1.0, 1.0, -1.0, 1.0).is_ok());
        assert!(Rect::new(1.0, 1.0, -1.0, 1.0).is_err());
        assert!(Rect::new(-1.0, 1.0, 2.0, 1.0).is_err());
        assert!(Rect::new(f64::NAN, 1.0, -1.0, 1.0).is_err());
    }

    #[test]
    fn cube_rejects_non_positive_half() {
        assert!(Cube::new(6.0).is_ok());
        assert!(Cube::new(0.0).is_err());
        assert!(Cube::new(-2.0).is_err());
        assert!(Cube::new(f64::INFINITY).is_err());
    }

    #[test]
    fn cube_edges_have_full_length() {
        let cube = Cube::new(2.0).unwrap();
        for (a, b) in cube.edges() {
            assert!(((b - a).norm() - 4.0).abs() < 1e-12);
        }
        assert_eq!(cube.faces().len(), 6);
    }
}
