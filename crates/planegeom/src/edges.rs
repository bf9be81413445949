//! Face normals and inward-facing edge planes.
//!
//! Purpose
//! - Turn an ordered polygon into one half-space per edge whose positive side
//!   holds the interior; point-inside tests and shrinking build on this.
//!
//! Orientation
//! - The face normal is `(p2 - p0) × (p1 - p0)` of the chosen fan triangle, so a
//!   polygon wound counter-clockwise seen from +z gets the normal -z.
//! - Edge normals are `edge_dir × face_normal`. Flipping the winding flips both
//!   factors, so edge planes always face inward.

use nalgebra::Vector3;

use crate::algebra::triangle_area;
use crate::cfg::GeomCfg;
use crate::types::{Degenerate, Plane3};

/// Unit face normal taken from the largest fan triangle `(p0, p[i-1], p[i])`.
///
/// Picking the largest triangle avoids slivers next to nearly collinear
/// vertices, whose cross products are mostly rounding noise.
pub fn face_normal(points: &[Vector3<f64>], cfg: GeomCfg) -> Result<Vector3<f64>, Degenerate> {
    if points.len() < 3 {
        return Err(Degenerate::TooFewPoints);
    }
    let p0 = points[0];
    let mut best: Option<(usize, f64)> = None;
    for i in 2..points.len() {
        let area = triangle_area(p0, points[i - 1], points[i]);
        if best.map_or(true, |(_, a)| area > a) {
            best = Some((i, area));
        }
    }
    match best {
        Some((i, area)) if area >= cfg.zero_tri_area_eps => {
            let p1 = points[i - 1];
            let p2 = points[i];
            Ok((p2 - p0).cross(&(p1 - p0)).normalize())
        }
        _ => Err(Degenerate::ZeroArea),
    }
}

/// Supporting plane of the polygon (face normal through the first point).
pub fn poly_plane(points: &[Vector3<f64>], cfg: GeomCfg) -> Result<Plane3, Degenerate> {
    let n = face_normal(points, cfg)?;
    Ok(Plane3::through(n, points[0]))
}

/// Inward edge plane for the edge `v0 → v1` of a face with `face_normal`.
pub fn inward_edge_plane(
    v0: Vector3<f64>,
    v1: Vector3<f64>,
    face_normal: Vector3<f64>,
    cfg: GeomCfg,
) -> Result<Plane3, Degenerate> {
    let edge = v1 - v0;
    let len = edge.norm();
    if len < cfg.point_equal_eps {
        return Err(Degenerate::ZeroLengthEdge);
    }
    let n = (edge / len).cross(&face_normal);
    Ok(Plane3::through(n, v0))
}

/// Inward edge planes of `points`, one per non-degenerate edge.
///
/// Short edges are skipped. Fails when the face normal is degenerate or every
/// edge was skipped.
pub fn inward_edge_planes(points: &[Vector3<f64>], cfg: GeomCfg) -> Result<EdgePlanes, Degenerate> {
    let normal = face_normal(points, cfg)?;
    let n = points.len();
    let planes: Vec<Plane3> = (0..n)
        .filter_map(|i| inward_edge_plane(points[i], points[(i + 1) % n], normal, cfg).ok())
        .collect();
    if planes.is_empty() {
        return Err(Degenerate::NoEdgePlanes);
    }
    Ok(EdgePlanes { planes })
}

/// Set of inward edge planes; the polygon interior is where all are positive.
#[derive(Clone, Debug, Default)]
pub struct EdgePlanes {
    pub planes: Vec<Plane3>,
}

impl EdgePlanes {
    /// Smallest signed distance over all planes: positive inside, negative
    /// outside, `f64::MAX` for an empty set.
    pub fn point_inside_dist(&self, p: Vector3<f64>) -> f64 {
        self.planes
            .iter()
            .map(|pl| pl.dist_above(p))
            .fold(f64::MAX, f64::min)
    }

    /// Inside test with `point_equal_eps` slack; boundary points count as inside.
    ///
    /// An empty set contains nothing.
    pub fn point_inside(&self, p: Vector3<f64>, cfg: GeomCfg) -> bool {
        if self.planes.is_empty() {
            return false;
        }
        self.point_inside_dist(p) >= -cfg.point_equal_eps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
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
    fn ccw_square_faces_down() {
        let n = face_normal(&square(), GeomCfg::default()).unwrap();
        assert!((n - vector![0.0, 0.0, -1.0]).norm() < 1e-12);
        let plane = poly_plane(&square(), GeomCfg::default()).unwrap();
        assert!(plane.d.abs() < 1e-12);
    }

    #[test]
    fn normal_prefers_largest_fan_triangle() {
        // p0,p1,p2 nearly collinear; the second fan triangle carries the area.
        let pts = vec![
            vector![0.0, 0.0, 0.0],
            vector![10.0, 0.0, 0.0],
            vector![20.0, 1e-9, 0.0],
            vector![0.0, 10.0, 0.0],
        ];
        let n = face_normal(&pts, GeomCfg::default()).unwrap();
        assert!((n.z.abs() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_faces_are_reported() {
        let line = vec![
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![2.0, 0.0, 0.0],
        ];
        assert_eq!(face_normal(&line, GeomCfg::default()), Err(Degenerate::ZeroArea));
        assert_eq!(
            face_normal(&line[..2], GeomCfg::default()),
            Err(Degenerate::TooFewPoints)
        );
        assert!(inward_edge_planes(&line, GeomCfg::default()).is_err());
    }

    #[test]
    fn edge_planes_face_inward_for_both_windings() {
        let cfg = GeomCfg::default();
        let mut pts = square();
        let centre = vector![0.5, 0.5, 0.0];
        for _ in 0..2 {
            let ep = inward_edge_planes(&pts, cfg).unwrap();
            assert_eq!(ep.len(), 4);
            for pl in &ep.planes {
                assert!((pl.dist_above(centre) - 0.5).abs() < 1e-12);
            }
            pts.reverse();
        }
    }

    #[test]
    fn short_edges_are_skipped() {
        let cfg = GeomCfg::default();
        let mut pts = square();
        pts.insert(2, vector![1.0, 0.01, 0.0]);
        let ep = inward_edge_planes(&pts, cfg).unwrap();
        assert_eq!(ep.len(), 4);
        assert_eq!(
            inward_edge_plane(pts[1], pts[2], vector![0.0, 0.0, -1.0], cfg),
            Err(Degenerate::ZeroLengthEdge)
        );
    }

    #[test]
    fn inside_uses_slack() {
        let cfg = GeomCfg::default();
        let ep = inward_edge_planes(&square(), cfg).unwrap();
        assert!(ep.point_inside(vector![0.5, 0.5, 0.0], cfg));
        assert!(ep.point_inside(vector![1.04, 0.5, 0.0], cfg));
        assert!(!ep.point_inside(vector![1.06, 0.5, 0.0], cfg));
        assert!((ep.point_inside_dist(vector![0.25, 0.5, 0.0]) - 0.25).abs() < 1e-12);
        assert!((ep.point_inside_dist(vector![3.0, 0.5, 0.0]) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_set_contains_nothing() {
        let ep = EdgePlanes::default();
        assert_eq!(ep.point_inside_dist(vector![0.0, 0.0, 0.0]), f64::MAX);
        assert!(!ep.point_inside(vector![0.0, 0.0, 0.0], GeomCfg::default()));
    }
}
