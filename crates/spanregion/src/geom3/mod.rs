//! Spatial geometry against the origin-centred viewing cube.
//!
//! - `intersect`: slab clipping of lines/rays, plane∩cube polygons.
//! - `wedge`: two-generator bases (`coeff_in_basis`) and wedge clipping.
//! - `cone`: rank-3 cones as hull-of-facets silhouettes.
//! - `solid`: convex point sets clipped to the cube.
//! - `view`: the `Projector` seam used for silhouettes.

mod cone;
mod intersect;
mod solid;
mod view;
mod wedge;

pub use cone::{cone_facets, cone_silhouette, projected_hull};
pub use intersect::{line_clip, plane_clip, ray_clip, segment_clip};
pub use solid::{clip_ring_to_cube, hull_cube_points};
pub use view::{OrbitView, Projector};
pub use wedge::{clip_wedge, coeff_in_basis, planar_cone, plane_basis, PlanarCone};
