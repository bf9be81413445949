//! Raw winding splitter: one vertex list, one plane, two vertex lists out.
//!
//! Model
//! - Vertices within `on_eps` of the plane are "on" and go to both sides.
//! - Edges with endpoints strictly on opposite sides emit their crossing point
//!   to both sides.
//! - A winding with no front vertices goes wholly to the back (this includes a
//!   winding lying in the plane); with no back vertices, wholly to the front.

use nalgebra::Vector3;

use crate::types::Plane3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Front,
    Back,
    On,
}

/// Result of splitting a winding; either side may be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindingSplit {
    pub front: Vec<Vector3<f64>>,
    pub back: Vec<Vector3<f64>>,
}

/// Splits a vertex list against a plane.
pub trait WindingSplitter {
    fn split(&self, points: &[Vector3<f64>], plane: &Plane3) -> WindingSplit;
}

/// Default splitter with a symmetric on-plane band.
#[derive(Clone, Copy, Debug)]
pub struct EpsilonSplitter {
    pub on_eps: f64,
}

impl WindingSplitter for EpsilonSplitter {
    fn split(&self, points: &[Vector3<f64>], plane: &Plane3) -> WindingSplit {
        split_winding(points, plane, self.on_eps)
    }
}

/// Splits `points` into the parts above and below `plane`.
pub fn split_winding(points: &[Vector3<f64>], plane: &Plane3, on_eps: f64) -> WindingSplit {
    let n = points.len();
    let dists: Vec<f64> = points.iter().map(|p| plane.dist_above(*p)).collect();
    let sides: Vec<Side> = dists
        .iter()
        .map(|&d| {
            if d > on_eps {
                Side::Front
            } else if d < -on_eps {
                Side::Back
            } else {
                Side::On
            }
        })
        .collect();

    if !sides.contains(&Side::Front) {
        return WindingSplit {
            front: Vec::new(),
            back: points.to_vec(),
        };
    }
    if !sides.contains(&Side::Back) {
        return WindingSplit {
            front: points.to_vec(),
            back: Vec::new(),
        };
    }

    // A convex winding crosses the plane at most twice: n + 2 points per side.
    let mut front = Vec::with_capacity(n + 2);
    let mut back = Vec::with_capacity(n + 2);
    for i in 0..n {
        let j = (i + 1) % n;
        let p1 = points[i];
        match sides[i] {
            Side::On => {
                front.push(p1);
                back.push(p1);
                continue;
            }
            Side::Front => front.push(p1),
            Side::Back => back.push(p1),
        }
        if sides[j] == Side::On || sides[j] == sides[i] {
            continue;
        }
        let mid = crossing(p1, points[j], dists[i], dists[j], plane);
        front.push(mid);
        back.push(mid);
    }
    WindingSplit { front, back }
}

/// Point where segment `p1 → p2` meets the plane.
///
/// Components along an exactly axial normal snap to the plane distance.
fn crossing(p1: Vector3<f64>, p2: Vector3<f64>, d1: f64, d2: f64, plane: &Plane3) -> Vector3<f64> {
    let t = d1 / (d1 - d2);
    Vector3::from_fn(|k, _| {
        if plane.n[k] == 1.0 {
            plane.d
        } else if plane.n[k] == -1.0 {
            -plane.d
        } else {
            p1[k] + t * (p2[k] - p1[k])
        }
    })
}
