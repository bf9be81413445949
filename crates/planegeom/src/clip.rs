//! Polygon clipping against a plane, and uniform inward erosion.

use nalgebra::Vector3;

use crate::cfg::GeomCfg;
use crate::edges::inward_edge_planes;
use crate::types::Plane3;
use crate::winding::{EpsilonSplitter, WindingSplit, WindingSplitter};

/// Splits `points` against `plane` as `(front, back)`.
///
/// Either part may be empty. An empty polygon never reaches the splitter.
pub fn clip_poly(
    points: &[Vector3<f64>],
    plane: &Plane3,
    cfg: GeomCfg,
) -> (Vec<Vector3<f64>>, Vec<Vector3<f64>>) {
    clip_poly_with(&EpsilonSplitter { on_eps: cfg.on_eps }, points, plane)
}

/// [`clip_poly`] with a caller-chosen splitter.
pub fn clip_poly_with<S: WindingSplitter + ?Sized>(
    splitter: &S,
    points: &[Vector3<f64>],
    plane: &Plane3,
) -> (Vec<Vector3<f64>>, Vec<Vector3<f64>>) {
    if points.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let WindingSplit { front, back } = splitter.split(points, plane);
    (front, back)
}

/// Erodes the polygon inward by `amount` on every edge.
///
/// Each inward edge plane is pushed inward by `amount` and the polygon keeps
/// only its front part. Collapses to an empty list when the erosion eats the
/// whole face. A degenerate polygon (no edge planes) is returned unchanged.
pub fn shrink_poly(points: &[Vector3<f64>], amount: f64, cfg: GeomCfg) -> Vec<Vector3<f64>> {
    let edge_planes = match inward_edge_planes(points, cfg) {
        Ok(ep) => ep,
        Err(err) => {
            tracing::debug!(%err, n = points.len(), "shrink_poly: no edge planes, returning input");
            return points.to_vec();
        }
    };
    let splitter = EpsilonSplitter { on_eps: cfg.on_eps };
    let mut clipped = points.to_vec();
    for plane in &edge_planes.planes {
        clipped = clip_poly_with(&splitter, &clipped, &plane.offset(amount)).0;
        if clipped.is_empty() {
            tracing::trace!(amount, "shrink_poly: polygon eroded away");
            break;
        }
    }
    clipped
}
