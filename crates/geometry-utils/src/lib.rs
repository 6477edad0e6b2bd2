//! Stateless geometric computation routines.
//!
//! Topics
//! - `plane`: exact, least-squares and RANSAC plane fitting.
//! - `rotation`: axis-angle, quaternion, matrix and Euler-angle conversions.
//! - `coords`: spherical/Euclidean, homogeneous/non-homogeneous, plane-ray.
//! - `bbox`: N-D axis-aligned boxes and their algebra.
//! - `transform`: homogeneous transform construction and 2D affine estimation.
//! - `sample`: unit-sphere sampling and voxel rasterization of a plane.
//!
//! Conventions
//! - Every routine is a pure function over `nalgebra` values; nothing mutates
//!   caller data.
//! - Degenerate planes are returned as the `Plane::UNDEFINED` sentinel, not as
//!   errors. Callers test with `Plane::is_undefined`.
//! - Unchecked numeric edge cases (ray parallel to plane, zero-length vector
//!   normalization) propagate inf/NaN; guarding them is the caller's job.

mod cfg;

pub mod bbox;
pub mod coords;
pub mod error;
pub mod plane;
pub mod rotation;
pub mod sample;
pub mod transform;

pub use error::{GeometryError, GeometryResult};
pub use plane::{Plane, RansacCfg};
pub use rotation::{AxisOrder, EulerCfg};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bbox::{compute_bounding_box, intersection, union, AxisAlignedBox, Box2D};
    pub use crate::coords::{
        euclidean_to_spherical, homogeneous, intersect_plane_ray,
        intersect_plane_ray_homogeneous, nonhomogeneous, nonhomogeneous_2d, nonhomogeneous_3d,
        spherical_to_euclidean, unitize,
    };
    pub use crate::error::{GeometryError, GeometryResult};
    pub use crate::plane::{
        fit_plane_3_points, fit_plane_3d, fit_plane_3d_ransac, fit_plane_3d_ransac_seeded, Plane,
        RansacCfg,
    };
    pub use crate::rotation::{
        axis_angle_to_matrix, axis_angle_to_quaternion, euler_angles_to_matrix,
        matrix_to_euler_angles, quaternion_to_matrix, rotate_vector, AxisOrder, EulerCfg,
    };
    pub use crate::sample::{rasterize_plane, sample_unit_sphere, RasterizePlane};
    pub use crate::transform::{
        compute_2d_affine_xform, compute_transform_3d_plane_to_2d, patch_corners_3d,
        similarity_transform, stack_rt, volume_corners,
    };
    pub use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};
}
