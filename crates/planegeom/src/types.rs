//! Value types shared across the kernel: planes, triangles, degeneracy kinds.

use std::fmt;

use nalgebra::{Vector3, Vector4};

/// Ordered triple of points; the order fixes the winding.
pub type Tri3 = [Vector3<f64>; 3];

/// Plane `n · x = d`.
///
/// Invariants:
/// - `n` is unit length wherever a metric distance is wanted; constructors in
///   this crate only hand out unit normals.
/// - The positive side (`dist_above > 0`) is the side `n` points to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane3 {
    pub n: Vector3<f64>,
    pub d: f64,
}

impl Plane3 {
    #[inline]
    pub fn new(n: Vector3<f64>, d: f64) -> Self {
        Self { n, d }
    }

    /// Plane through `p` with normal `n`.
    #[inline]
    pub fn through(n: Vector3<f64>, p: Vector3<f64>) -> Self {
        Self { n, d: n.dot(&p) }
    }

    /// Signed distance of `p` above the plane.
    #[inline]
    pub fn dist_above(&self, p: Vector3<f64>) -> f64 {
        self.n.dot(&p) - self.d
    }

    /// Orthogonal projection of `p` onto the plane.
    #[inline]
    pub fn project(&self, p: Vector3<f64>) -> Vector3<f64> {
        p - self.n * self.dist_above(p)
    }

    /// Same normal, distance pushed along the normal by `amount`.
    ///
    /// For an inward edge plane this shrinks the kept half-space by `amount`.
    #[inline]
    pub fn offset(&self, amount: f64) -> Self {
        Self {
            n: self.n,
            d: self.d + amount,
        }
    }

    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            n: -self.n,
            d: -self.d,
        }
    }
}

impl From<Plane3> for Vector4<f64> {
    fn from(p: Plane3) -> Self {
        Vector4::new(p.n.x, p.n.y, p.n.z, p.d)
    }
}

impl From<Vector4<f64>> for Plane3 {
    fn from(v: Vector4<f64>) -> Self {
        Plane3::new(v.xyz(), v.w)
    }
}

/// Numerical degeneracy reported instead of a sentinel value.
///
/// These are expected outcomes on real level geometry (slivers, collapsed
/// edges); callers typically skip the item or fall back to a default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Degenerate {
    /// Fewer than three points, so no face exists.
    TooFewPoints,
    /// Largest fan triangle is below the zero-area tolerance.
    ZeroArea,
    /// Edge shorter than the point-equality tolerance.
    ZeroLengthEdge,
    /// Every edge was skipped; nothing bounds the face.
    NoEdgePlanes,
    /// Weights sum to zero (or to a non-finite value).
    ZeroSumPdf,
    /// Barycentric solve hit a zero determinant.
    NonFiniteBarycentric,
}

impl fmt::Display for Degenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degenerate::TooFewPoints => write!(f, "polygon has fewer than 3 points"),
            Degenerate::ZeroArea => write!(f, "polygon has no triangle above the zero-area tolerance"),
            Degenerate::ZeroLengthEdge => write!(f, "edge is shorter than the point-equality tolerance"),
            Degenerate::NoEdgePlanes => write!(f, "polygon produced no edge planes"),
            Degenerate::ZeroSumPdf => write!(f, "pdf weights do not have a positive finite sum"),
            Degenerate::NonFiniteBarycentric => {
                write!(f, "barycentric coordinates are not finite (zero-area triangle)")
            }
        }
    }
}

impl std::error::Error for Degenerate {}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn plane_distance_and_projection() {
        let p = Plane3::new(vector![0.0, 0.0, 1.0], 2.0);
        let q = vector![3.0, -1.0, 5.0];
        assert!((p.dist_above(q) - 3.0).abs() < 1e-12);
        let proj = p.project(q);
        assert!((proj - vector![3.0, -1.0, 2.0]).norm() < 1e-12);
        assert!(p.dist_above(proj).abs() < 1e-12);
    }

    #[test]
    fn offset_moves_plane_along_normal() {
        let p = Plane3::new(vector![1.0, 0.0, 0.0], 0.0).offset(0.25);
        assert!((p.dist_above(vector![0.25, 7.0, 7.0])).abs() < 1e-12);
        let f = p.flipped();
        assert!((f.dist_above(vector![0.0, 0.0, 0.0]) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn vector4_conversion() {
        let p = Plane3::new(vector![0.0, 1.0, 0.0], -4.0);
        let v: Vector4<f64> = p.into();
        assert_eq!(Plane3::from(v), p);
    }
}
