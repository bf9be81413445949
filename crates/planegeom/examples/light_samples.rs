//! Draw a handful of cosine-weighted light sample rays from random points on a
//! tilted face, the way a lightmap baker seeds its gather rays.
//!
//! Usage:
//!   cargo run -p planegeom --example light_samples -- [count]

use nalgebra::vector;
use planegeom::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    let count: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    let face = vec![
        vector![0.0, 0.0, 0.0],
        vector![128.0, 0.0, 64.0],
        vector![128.0, 96.0, 64.0],
        vector![0.0, 96.0, 0.0],
    ];
    let cfg = GeomCfg::default();
    let plane = match poly_plane(&face, cfg) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("degenerate face: {err}");
            return;
        }
    };
    // Face normal faces away from the viewer of a CCW winding; light leaves the front.
    let frame = rotate_from_up_to_surface_normal(-plane.n);
    let sampler = match FanSampler::new(&face) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("cannot sample face: {err}");
            return;
        }
    };
    let mut rng = StdRng::seed_from_u64(2025);
    println!("face area {:.2}, normal {:?}", sampler.area(), -plane.n);
    for i in 0..count {
        let origin = sampler.sample(&mut rng);
        let dir = frame * cosine_weighted_hemisphere_sample(rng.gen(), rng.gen());
        println!("ray {i}: origin {origin:.2?} dir {dir:.3?}");
    }
}
