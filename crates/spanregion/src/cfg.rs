//! Tolerances and default scene constants.
//!
//! Policy
//! - Every classifier, intersector and clipper takes the same `GeomCfg` so that
//!   2D and 3D paths agree on what counts as degenerate.
//! - Defaults are fixed constants; callers override a field only for tests or
//!   very large/small coordinate ranges.

/// Degeneracy threshold for norms, cross/triple products and slab tests.
pub const EPS: f64 = 1e-9;
/// Floor for the 2×2 Gram determinant in `coeff_in_basis`.
pub const GRAM_FLOOR: f64 = 1e-12;
/// Decimal places of the key used to merge plane∩cube crossing points.
pub const DEDUP_DECIMALS: i32 = 3;

/// Default 2D viewing rectangle `(xmin, xmax, ymin, ymax)`.
pub const DEFAULT_RECT: (f64, f64, f64, f64) = (-10.0, 10.0, -7.0, 7.0);
/// Default 3D cube half-extent.
pub const DEFAULT_CUBE_HALF: f64 = 6.0;
/// Default orbit angles `(yaw, pitch)` of the 3D view.
pub const DEFAULT_VIEW: (f64, f64) = (std::f64::consts::FRAC_PI_4, std::f64::consts::FRAC_PI_6);

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
    pub gram_floor: f64,
    pub dedup_decimals: i32,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: EPS,
            gram_floor: GRAM_FLOOR,
            dedup_decimals: DEDUP_DECIMALS,
        }
    }
}

impl GeomCfg {
    /// Integer key of a coordinate rounded to `dedup_decimals` places.
    #[inline]
    pub fn quantize(&self, x: f64) -> i64 {
        let s = 10f64.powi(self.dedup_decimals);
        (x * s).round() as i64
    }
}
