//! Planar polygon geometry kernel for map compilation and lightmap baking.
//!
//! Everything here is a pure function over its inputs: polygons come in as
//! ordered point slices (`&[Vector3<f64>]`), results go out as fresh values.
//! Nothing is cached between calls, so any function may run concurrently on
//! independent polygons.
//!
//! Conventions
//! - Polygons ("windings") are planar, simple, consistently wound and
//!   implicitly closed. Callers guarantee this; the kernel does not check.
//! - Planes are `n·x = d` with unit `n`; "above" means `n·x - d > 0`.
//! - Tolerances live in [`GeomCfg`] and are passed by value.
//! - Numerical degeneracy is reported as [`Degenerate`]; broken preconditions
//!   (e.g. fewer than 3 points where a face is required) panic.

pub mod algebra;
pub mod bary;
pub mod cfg;
pub mod clip;
pub mod edges;
pub mod filter;
pub mod orient;
pub mod poly;
pub mod sample;
pub mod types;
pub mod winding;


pub use cfg::GeomCfg;
pub use types::{Degenerate, Plane3, Tri3};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for callers that touch most of the kernel.
pub mod prelude {
    pub use crate::algebra::{
        closest_point_on_line, closest_point_on_segment, dist_to_line, dist_to_segment,
        triangle_area, triangle_centroid, Aabb3,
    };
    pub use crate::bary::{bary_from_point, bary_to_point, interpolate, interpolate_normal};
    pub use crate::clip::{clip_poly, shrink_poly};
    pub use crate::edges::{face_normal, inward_edge_planes, poly_plane, EdgePlanes};
    pub use crate::orient::{mangle_from_vec, rotate_from_up_to_surface_normal, vec_from_mangle};
    pub use crate::poly::{
        closest_point_on_boundary, fan_triangles, point_inside_polygon, poly_area, poly_centroid,
    };
    pub use crate::sample::{
        cosine_weighted_hemisphere_sample, make_cdf, poly_random_point, sample_cdf,
        uniform_point_on_sphere, FanSampler,
    };
    pub use crate::{Degenerate, GeomCfg, Plane3, Tri3};
    pub use nalgebra::{Matrix3, Vector3, Vector4};
}
