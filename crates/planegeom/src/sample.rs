//! Discrete and continuous sampling: CDFs, polygon points, sphere directions.
//!
//! Uniform inputs come from the caller, either as explicit `u ∈ [0, 1]`
//! values or as a `rand::Rng`. Nothing here seeds or stores a generator.

use nalgebra::Vector3;
use rand::Rng;

use crate::algebra::triangle_area;
use crate::bary::bary_to_point;
use crate::poly::fan_triangles;
use crate::types::{Degenerate, Tri3};

/// Scales weights to sum to 1.
pub fn normalize_pdf(pdf: &[f64]) -> Result<Vec<f64>, Degenerate> {
    let sum: f64 = pdf.iter().sum();
    if !(sum.is_finite() && sum > 0.0) {
        return Err(Degenerate::ZeroSumPdf);
    }
    Ok(pdf.iter().map(|w| w / sum).collect())
}

/// Normalized prefix sums of `pdf`.
///
/// Prefix sums that round above 1 are clamped to 1, and entries from the last
/// positive weight onwards are pinned to exactly 1. The result is
/// non-decreasing, no draw in `[0, 1]` can fall past the final bucket, and
/// trailing zero-weight buckets are never picked.
pub fn make_cdf(pdf: &[f64]) -> Result<Vec<f64>, Degenerate> {
    let mut acc = 0.0;
    let mut cdf: Vec<f64> = normalize_pdf(pdf)?
        .into_iter()
        .map(|w| {
            acc += w;
            acc.min(1.0)
        })
        .collect();
    if let Some(last) = pdf.iter().rposition(|&w| w > 0.0) {
        cdf[last..].fill(1.0);
    }
    Ok(cdf)
}

/// Index of the first bucket whose cumulative value is `>= sample`.
///
/// Panics if the sample lies beyond the last bucket; with a CDF from
/// [`make_cdf`] and `sample <= 1` that cannot happen.
pub fn sample_cdf(cdf: &[f64], sample: f64) -> usize {
    match cdf.iter().position(|&c| sample <= c) {
        Some(i) => i,
        None => unreachable!("cdf sample {sample} exceeds last bucket"),
    }
}

/// Uniform barycentric coordinates over a triangle from two uniforms.
#[inline]
pub fn bary_random(r1: f64, r2: f64) -> Vector3<f64> {
    let s = r1.sqrt();
    let x = 1.0 - s;
    let y = r2 * s;
    Vector3::new(x, y, 1.0 - x - y)
}

/// Area-weighted point sampler over one polygon.
///
/// Builds the fan and its area CDF once; each draw picks a triangle in
/// proportion to its area, then a uniform point inside it.
#[derive(Clone, Debug)]
pub struct FanSampler {
    tris: Vec<Tri3>,
    cdf: Vec<f64>,
    area: f64,
}

impl FanSampler {
    /// Panics if `points.len() < 3`; a zero-area polygon is `ZeroSumPdf`.
    pub fn new(points: &[Vector3<f64>]) -> Result<Self, Degenerate> {
        assert!(points.len() >= 3, "polygon needs at least 3 points");
        let tris: Vec<Tri3> = fan_triangles(points).collect();
        let areas: Vec<f64> = tris.iter().map(|[a, b, c]| triangle_area(*a, *b, *c)).collect();
        let cdf = make_cdf(&areas)?;
        Ok(Self {
            tris,
            cdf,
            area: areas.iter().sum(),
        })
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Fan triangles in sampling order.
    #[inline]
    pub fn triangles(&self) -> &[Tri3] {
        &self.tris
    }

    /// Point from three explicit uniforms: triangle pick, then two barycentric.
    pub fn sample_with(&self, u_tri: f64, r1: f64, r2: f64) -> (usize, Vector3<f64>) {
        let which = sample_cdf(&self.cdf, u_tri);
        let p = bary_to_point(bary_random(r1, r2), &self.tris[which]);
        (which, p)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f64> {
        self.sample_with(rng.gen(), rng.gen(), rng.gen()).1
    }
}

/// One area-weighted random point on the polygon.
///
/// Callers drawing many points from one face should keep a [`FanSampler`].
pub fn poly_random_point<R: Rng + ?Sized>(
    points: &[Vector3<f64>],
    rng: &mut R,
) -> Result<Vector3<f64>, Degenerate> {
    Ok(FanSampler::new(points)?.sample(rng))
}

/// Uniform point on the unit sphere from `u1, u2 ∈ [0, 1]`.
pub fn uniform_point_on_sphere(u1: f64, u2: f64) -> Vector3<f64> {
    assert!((0.0..=1.0).contains(&u1) && (0.0..=1.0).contains(&u2), "uniforms must lie in [0, 1]");
    let theta = u1 * std::f64::consts::TAU;
    let z = 2.0 * u2 - 1.0;
    let s = (1.0 - z * z).sqrt();
    Vector3::new(s * theta.cos(), s * theta.sin(), z)
}

/// Uniform random direction.
pub fn random_dir<R: Rng + ?Sized>(rng: &mut R) -> Vector3<f64> {
    uniform_point_on_sphere(rng.gen(), rng.gen())
}

/// Cosine-weighted direction on the `+z` hemisphere from `u1, u2 ∈ [0, 1]`.
///
/// Samples the unit disk, then lifts onto the sphere.
pub fn cosine_weighted_hemisphere_sample(u1: f64, u2: f64) -> Vector3<f64> {
    assert!((0.0..=1.0).contains(&u1) && (0.0..=1.0).contains(&u2), "uniforms must lie in [0, 1]");
    let r = u1.sqrt();
    let theta = std::f64::consts::TAU * u2;
    let x = r * theta.cos();
    let y = r * theta.sin();
    let z = (1.0 - x * x - y * y).max(0.0).sqrt();
    Vector3::new(x, y, z)
}
