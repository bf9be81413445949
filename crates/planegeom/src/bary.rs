//! Barycentric coordinates and attribute interpolation across a polygon.

use nalgebra::{SVector, Vector3};

use crate::cfg::GeomCfg;
use crate::edges::inward_edge_planes;
use crate::types::{Degenerate, Tri3};

/// Barycentric coordinates `(w0, w1, w2)` of `p` with respect to `tri`.
///
/// `p` is projected into the triangle's plane by the least-squares solve, so
/// off-plane points are accepted. Components sum to 1 by construction and go
/// negative outside the triangle. A zero-area triangle yields
/// `NonFiniteBarycentric`.
pub fn bary_from_point(p: Vector3<f64>, tri: &Tri3) -> Result<Vector3<f64>, Degenerate> {
    let v0 = tri[1] - tri[0];
    let v1 = tri[2] - tri[0];
    let v2 = p - tri[0];
    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);
    let inv_denom = 1.0 / (d00 * d11 - d01 * d01);
    let w1 = (d11 * d20 - d01 * d21) * inv_denom;
    let w2 = (d00 * d21 - d01 * d20) * inv_denom;
    let bary = Vector3::new(1.0 - w1 - w2, w1, w2);
    if bary.iter().all(|c| c.is_finite()) {
        Ok(bary)
    } else {
        Err(Degenerate::NonFiniteBarycentric)
    }
}

/// `w0 * t0 + w1 * t1 + w2 * t2` for any fixed-size vector "triangle".
///
/// Also serves to blend per-vertex attributes; extrapolates for weights
/// outside `[0, 1]`.
#[inline]
pub fn bary_to_point<const D: usize>(bary: Vector3<f64>, tri: &[SVector<f64, D>; 3]) -> SVector<f64, D> {
    tri[0] * bary.x + tri[1] * bary.y + tri[2] * bary.z
}

/// Interpolates a per-vertex attribute at `point` over the polygon's fan.
///
/// The first fan triangle whose inward edge planes contain `point` supplies
/// the barycentric weights. Degenerate fan triangles are skipped. `None` means
/// no triangle contained the point (possible right at the boundary); callers
/// fall back to a face-wide value.
///
/// Panics if `attrs.len() != points.len()`.
pub fn interpolate<const D: usize>(
    points: &[Vector3<f64>],
    attrs: &[SVector<f64, D>],
    point: Vector3<f64>,
    cfg: GeomCfg,
) -> Option<SVector<f64, D>> {
    assert_eq!(points.len(), attrs.len(), "one attribute per polygon vertex");
    for i in 2..points.len() {
        let tri: Tri3 = [points[0], points[i - 1], points[i]];
        let Ok(edge_planes) = inward_edge_planes(&tri, cfg) else {
            continue;
        };
        if !edge_planes.point_inside(point, cfg) {
            continue;
        }
        let Ok(bary) = bary_from_point(point, &tri) else {
            continue;
        };
        return Some(bary_to_point(bary, &[attrs[0], attrs[i - 1], attrs[i]]));
    }
    tracing::trace!(n = points.len(), "interpolate: point not inside any fan triangle");
    None
}

/// [`interpolate`] for per-vertex normals. The result is not renormalized.
pub fn interpolate_normal(
    points: &[Vector3<f64>],
    normals: &[Vector3<f64>],
    point: Vector3<f64>,
    cfg: GeomCfg,
) -> Option<Vector3<f64>> {
    interpolate(points, normals, point, cfg)
}
