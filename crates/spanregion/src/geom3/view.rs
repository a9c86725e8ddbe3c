//! World→screen projection seam.
//!
//! The engine never returns projected coordinates; it only uses the projector
//! to order plane∩cube rings and to pick silhouette vertices.

use nalgebra::{Vector2, Vector3};

use crate::cfg::DEFAULT_VIEW;

/// Maps a world point to the 2D render plane (`worldToScreen`).
pub trait Projector {
    fn project(&self, p: Vector3<f64>) -> Vector2<f64>;
}

impl<F> Projector for F
where
    F: Fn(Vector3<f64>) -> Vector2<f64>,
{
    #[inline]
    fn project(&self, p: Vector3<f64>) -> Vector2<f64> {
        self(p)
    }
}

/// Orthographic orbit camera: rotate by `yaw` about z, tilt by `pitch` about x,
/// drop depth, scale and offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitView {
    pub yaw: f64,
    pub pitch: f64,
    pub scale: f64,
    pub center: Vector2<f64>,
}

impl OrbitView {
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self {
            yaw,
            pitch,
            ..Self::default()
        }
    }
}

impl Default for OrbitView {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_VIEW.0,
            pitch: DEFAULT_VIEW.1,
            scale: 1.0,
            center: Vector2::zeros(),
        }
    }
}

impl Projector for OrbitView {
    fn project(&self, p: Vector3<f64>) -> Vector2<f64> {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let xr = cy * p.x - sy * p.y;
        let yr = sy * p.x + cy * p.y;
        self.center + Vector2::new(xr, cp * yr - sp * p.z) * self.scale
    }
}
