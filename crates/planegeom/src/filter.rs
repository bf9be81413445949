//! Reconstruction filter kernels used when resampling baked lightmaps.

use std::f64::consts::PI;

fn gaussian_1d(width: f64, x: f64, alpha: f64) -> f64 {
    if x.abs() > width {
        return 0.0;
    }
    (-alpha * x * x).exp() - (-alpha * width * width).exp()
}

/// Separable Gaussian over a `width` × `height` support, zero at the edge.
pub fn filter_gaussian(width: f64, height: f64, x: f64, y: f64) -> f64 {
    const ALPHA: f64 = 0.5;
    gaussian_1d(width, x, ALPHA) * gaussian_1d(height, y, ALPHA)
}

fn lanczos_1d(x: f64, a: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    if x < -a || x >= a {
        return 0.0;
    }
    a * (PI * x).sin() * (PI * x / a).sin() / (PI * PI * x * x)
}

/// Radial Lanczos kernel of order `a` evaluated at distance `|(x, y)|`.
pub fn lanczos_2d(x: f64, y: f64, a: f64) -> f64 {
    lanczos_1d(x.hypot(y), a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_peak_and_support() {
        let peak = filter_gaussian(2.0, 2.0, 0.0, 0.0);
        let edge = (1.0 - (-2.0f64).exp()).powi(2);
        assert!((peak - edge).abs() < 1e-12);
        assert_eq!(filter_gaussian(2.0, 2.0, 2.5, 0.0), 0.0);
        assert!(filter_gaussian(2.0, 2.0, 2.0, 0.0).abs() < 1e-12);
        assert!(filter_gaussian(2.0, 2.0, 1.0, 0.5) < peak);
    }

    #[test]
    fn lanczos_zeros() {
        assert_eq!(lanczos_2d(0.0, 0.0, 2.0), 1.0);
        assert!(lanczos_2d(1.0, 0.0, 2.0).abs() < 1e-12);
        assert_eq!(lanczos_2d(3.0, 4.0, 2.0), 0.0);
        assert!(lanczos_2d(0.5, 0.0, 2.0) > 0.0);
        assert!(lanczos_2d(1.5, 0.0, 2.0) < 0.0);
    }
}
