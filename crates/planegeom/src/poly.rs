//! Polygon predicates over the fan decomposition.
//!
//! The fan is `(p0, p[i-1], p[i])` for `i = 2..n`; area, centroid, sampling and
//! interpolation all walk it in the same order.

use nalgebra::Vector3;

use crate::algebra::{closest_point_on_segment, triangle_area, triangle_centroid};
use crate::cfg::GeomCfg;
use crate::edges::inward_edge_planes;
use crate::types::Tri3;

/// Fan triangles of `points`; empty for fewer than 3 points.
pub fn fan_triangles(points: &[Vector3<f64>]) -> impl Iterator<Item = Tri3> + '_ {
    (2..points.len()).map(move |i| [points[0], points[i - 1], points[i]])
}

/// Unsigned polygon area (sum of fan triangle areas).
///
/// Panics if `points.len() < 3`.
pub fn poly_area(points: &[Vector3<f64>]) -> f64 {
    assert!(points.len() >= 3, "polygon needs at least 3 points");
    fan_triangles(points)
        .map(|[a, b, c]| triangle_area(a, b, c))
        .sum()
}

/// Polygon area signed against `reference`: positive when the polygon winds
/// counter-clockwise seen from the tip of `reference`.
///
/// Reversing the winding negates the result. Panics if `points.len() < 3`.
pub fn poly_signed_area(points: &[Vector3<f64>], reference: Vector3<f64>) -> f64 {
    assert!(points.len() >= 3, "polygon needs at least 3 points");
    let dir = reference.normalize();
    fan_triangles(points)
        .map(|[a, b, c]| 0.5 * (b - a).cross(&(c - a)).dot(&dir))
        .sum()
}

/// Area-weighted centroid of the fan triangles.
///
/// Panics if `points.len() < 3`. A zero-area polygon yields NaN components.
pub fn poly_centroid(points: &[Vector3<f64>]) -> Vector3<f64> {
    assert!(points.len() >= 3, "polygon needs at least 3 points");
    let mut area = 0.0;
    let mut weighted = Vector3::zeros();
    for [a, b, c] in fan_triangles(points) {
        let tri_area = triangle_area(a, b, c);
        area += tri_area;
        weighted += triangle_centroid(a, b, c) * tri_area;
    }
    weighted / area
}

/// Inside test against the polygon's own inward edge planes.
///
/// Degenerate polygons contain nothing.
pub fn point_inside_polygon(points: &[Vector3<f64>], p: Vector3<f64>, cfg: GeomCfg) -> bool {
    match inward_edge_planes(points, cfg) {
        Ok(ep) => ep.point_inside(p, cfg),
        Err(_) => false,
    }
}

/// Closest point on the polygon boundary as `(edge index, point)`.
///
/// Edge `i` runs from `points[i]` to `points[(i + 1) % n]`; ties keep the
/// lowest index. Panics on an empty polygon.
pub fn closest_point_on_boundary(points: &[Vector3<f64>], p: Vector3<f64>) -> (usize, Vector3<f64>) {
    assert!(!points.is_empty(), "polygon has no edges");
    let n = points.len();
    let mut best = (0usize, points[0], f64::MAX);
    for i in 0..n {
        let c = closest_point_on_segment(points[i], points[(i + 1) % n], p);
        let d = (c - p).norm();
        if d < best.2 {
            best = (i, c, d);
        }
    }
    (best.0, best.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Vec<Vector3<f64>> {
        vec![
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![1.0, 1.0, 0.0],
            vector![0.0, 1.0, 0.0],
        ]
    }

    #[test]
    fn square_area_and_centroid() {
        assert!((poly_area(&square()) - 1.0).abs() < 1e-12);
        let c = poly_centroid(&square());
        assert!((c - vector![0.5, 0.5, 0.0]).norm() < 1e-12);
        assert_eq!(fan_triangles(&square()).count(), 2);
    }

    #[test]
    fn centroid_is_area_weighted() {
        // L-shape: unit square plus a 1x1 square to its right, as one hexagon.
        let pts = vec![
            vector![0.0, 0.0, 0.0],
            vector![2.0, 0.0, 0.0],
            vector![2.0, 1.0, 0.0],
            vector![1.0, 1.0, 0.0],
            vector![1.0, 2.0, 0.0],
            vector![0.0, 2.0, 0.0],
        ];
        assert!((poly_area(&pts) - 3.0).abs() < 1e-12);
        let c = poly_centroid(&pts);
        assert!((c - vector![5.0 / 6.0, 5.0 / 6.0, 0.0]).norm() < 1e-12);
    }

    #[test]
    fn signed_area_flips_with_winding() {
        let up = vector![0.0, 0.0, 1.0];
        let mut pts = square();
        assert!((poly_signed_area(&pts, up) - 1.0).abs() < 1e-12);
        pts.reverse();
        assert!((poly_signed_area(&pts, up) + 1.0).abs() < 1e-12);
        assert!((poly_area(&pts) - 1.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn area_needs_three_points() {
        poly_area(&square()[..2]);
    }

    #[test]
    fn inside_centroid_outside_far() {
        let cfg = GeomCfg::default();
        assert!(point_inside_polygon(&square(), poly_centroid(&square()), cfg));
        assert!(!point_inside_polygon(&square(), vector![5.0, 0.5, 0.0], cfg));
        assert!(!point_inside_polygon(&square()[..2], vector![0.5, 0.0, 0.0], cfg));
    }

    #[test]
    fn boundary_picks_nearest_edge() {
        let (i, c) = closest_point_on_boundary(&square(), vector![0.9, 0.5, 0.0]);
        assert_eq!(i, 1);
        assert!((c - vector![1.0, 0.5, 0.0]).norm() < 1e-12);
        let (i, c) = closest_point_on_boundary(&square(), vector![0.5, -3.0, 0.0]);
        assert_eq!(i, 0);
        assert!((c - vector![0.5, 0.0, 0.0]).norm() < 1e-12);
    }

    #[test]
    fn boundary_ties_keep_first_edge() {
        // Equidistant from edge 0 (bottom) and edge 3 (left): corner region.
        let (i, c) = closest_point_on_boundary(&square(), vector![-1.0, -1.0, 0.0]);
        assert_eq!(i, 0);
        assert_eq!(c, vector![0.0, 0.0, 0.0]);
    }
}
