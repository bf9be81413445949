//! Rotations and yaw/pitch ("mangle") conversions.
//!
//! Mangles are `(yaw, pitch, roll)` in degrees: yaw turns about +z starting
//! from +x, positive pitch tilts towards +z. Roll is carried but unused.

use nalgebra::{Matrix3, Vector3};

/// Right-handed rotation by `t` radians about +x.
pub fn rotate_about_x(t: f64) -> Matrix3<f64> {
    let (s, c) = t.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, -s, //
        0.0, s, c,
    )
}

/// Right-handed rotation by `t` radians about +y.
pub fn rotate_about_y(t: f64) -> Matrix3<f64> {
    let (s, c) = t.sin_cos();
    Matrix3::new(
        c, 0.0, s, //
        0.0, 1.0, 0.0, //
        -s, 0.0, c,
    )
}

/// Right-handed rotation by `t` radians about +z.
pub fn rotate_about_z(t: f64) -> Matrix3<f64> {
    let (s, c) = t.sin_cos();
    Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Unit direction for a mangle in degrees.
pub fn vec_from_mangle(m: Vector3<f64>) -> Vector3<f64> {
    let r = m.map(f64::to_radians);
    rotate_about_z(r.x) * rotate_about_y(-r.y) * Vector3::x()
}

/// Mangle in degrees for direction `v` (expected unit length); roll is 0.
pub fn mangle_from_vec(v: Vector3<f64>) -> Vector3<f64> {
    let (yaw, from_up) = spherical_angles(v);
    Vector3::new(yaw, std::f64::consts::FRAC_PI_2 - from_up, 0.0).map(f64::to_degrees)
}

/// Rotation taking `(0, 0, 1)` onto the unit `surface_normal`.
///
/// Used to orient hemisphere samples drawn around +z to a surface.
pub fn rotate_from_up_to_surface_normal(surface_normal: Vector3<f64>) -> Matrix3<f64> {
    let (theta, from_up) = spherical_angles(surface_normal);
    rotate_about_z(theta) * rotate_about_y(from_up)
}

/// Azimuth about +z and angle away from +z, in radians.
fn spherical_angles(v: Vector3<f64>) -> (f64, f64) {
    let theta = v.y.atan2(v.x);
    let from_up = v.z.clamp(-1.0, 1.0).acos();
    (theta, from_up)
}
