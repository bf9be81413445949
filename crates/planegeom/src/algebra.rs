//! Vector and plane algebra: distances, projections, closest points, boxes.
//!
//! Line queries take two points `v`, `w` on the line. For the unbounded line
//! forms `v != w` is a precondition (not checked, these sit in inner loops).

use nalgebra::Vector3;

use crate::types::Plane3;

/// Signed distance of `p` above `plane`.
#[inline]
pub fn dist_above_plane(plane: &Plane3, p: Vector3<f64>) -> f64 {
    plane.dist_above(p)
}

/// Moves `p` along the plane normal onto the plane.
#[inline]
pub fn project_point_onto_plane(plane: &Plane3, p: Vector3<f64>) -> Vector3<f64> {
    plane.project(p)
}

/// Component-wise comparison with slack `eps`.
#[inline]
pub fn vectors_equal(a: Vector3<f64>, b: Vector3<f64>, eps: f64) -> bool {
    (a - b).iter().all(|c| c.abs() <= eps)
}

/// Parameter `t` of the projection of `p` onto `v + t (w - v)`.
///
/// Returns 0 for a zero-length segment.
pub fn fraction_of_line(v: Vector3<f64>, w: Vector3<f64>, p: Vector3<f64>) -> f64 {
    let vw = w - v;
    let l2 = vw.dot(&vw);
    if l2 == 0.0 {
        return 0.0;
    }
    (p - v).dot(&vw) / l2
}

/// Closest point to `p` on the infinite line through `v` and `w`.
pub fn closest_point_on_line(v: Vector3<f64>, w: Vector3<f64>, p: Vector3<f64>) -> Vector3<f64> {
    let dir = (w - v).normalize();
    v + dir * (p - v).dot(&dir)
}

/// Closest point to `p` on the segment `[v, w]`.
///
/// A zero-length segment yields `v`.
pub fn closest_point_on_segment(v: Vector3<f64>, w: Vector3<f64>, p: Vector3<f64>) -> Vector3<f64> {
    let t = fraction_of_line(v, w, p);
    if t >= 1.0 {
        return w;
    }
    if t <= 0.0 {
        return v;
    }
    v + (w - v) * t
}

#[inline]
pub fn dist_to_line(v: Vector3<f64>, w: Vector3<f64>, p: Vector3<f64>) -> f64 {
    (p - closest_point_on_line(v, w, p)).norm()
}

#[inline]
pub fn dist_to_segment(v: Vector3<f64>, w: Vector3<f64>, p: Vector3<f64>) -> f64 {
    (p - closest_point_on_segment(v, w, p)).norm()
}

/// Unsigned area of triangle `(v0, v1, v2)`.
#[inline]
pub fn triangle_area(v0: Vector3<f64>, v1: Vector3<f64>, v2: Vector3<f64>) -> f64 {
    0.5 * (v2 - v0).cross(&(v1 - v0)).norm()
}

#[inline]
pub fn triangle_centroid(v0: Vector3<f64>, v1: Vector3<f64>, v2: Vector3<f64>) -> Vector3<f64> {
    (v0 + v1 + v2) / 3.0
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
    pub mins: Vector3<f64>,
    pub maxs: Vector3<f64>,
}

impl Aabb3 {
    /// Degenerate box holding a single point.
    #[inline]
    pub fn from_point(p: Vector3<f64>) -> Self {
        Self { mins: p, maxs: p }
    }

    /// Smallest box around `points`; `None` when empty.
    pub fn from_points(points: &[Vector3<f64>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Self::from_point(*first);
        for p in rest {
            b.expand(*p);
        }
        Some(b)
    }

    pub fn expand(&mut self, p: Vector3<f64>) {
        self.mins = self.mins.inf(&p);
        self.maxs = self.maxs.sup(&p);
    }

    #[inline]
    pub fn size(&self) -> Vector3<f64> {
        self.maxs - self.mins
    }

    /// Pushes every face outwards by the matching component of `amount`.
    pub fn grow(&mut self, amount: Vector3<f64>) {
        self.mins -= amount;
        self.maxs += amount;
    }

    /// True when the boxes are separated by more than `eps` on some axis.
    pub fn disjoint(&self, other: &Aabb3, eps: f64) -> bool {
        (0..3).any(|i| {
            self.maxs[i] < other.mins[i] - eps || self.mins[i] > other.maxs[i] + eps
        })
    }
}
