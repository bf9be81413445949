//! Reading polygons, tolerance overrides and vector arguments.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::Vector3;
use planegeom::{GeomCfg, Plane3};
use serde::Deserialize;

/// Polygon file: `{"points": [[x, y, z], ...], "normals": [[...], ...]}`.
#[derive(Debug, Deserialize)]
pub struct PolygonFile {
    pub points: Vec<[f64; 3]>,
    #[serde(default)]
    pub normals: Option<Vec<[f64; 3]>>,
}

impl PolygonFile {
    pub fn points(&self) -> Vec<Vector3<f64>> {
        self.points.iter().map(|p| Vector3::from(*p)).collect()
    }

    /// Per-vertex normals; errors if absent or misaligned with the points.
    pub fn normals(&self) -> Result<Vec<Vector3<f64>>> {
        let Some(normals) = &self.normals else {
            bail!("polygon file has no \"normals\" array");
        };
        if normals.len() != self.points.len() {
            bail!(
                "{} normals for {} points; need one per vertex",
                normals.len(),
                self.points.len()
            );
        }
        Ok(normals.iter().map(|n| Vector3::from(*n)).collect())
    }
}

/// Loads a polygon and checks it has a face (at least 3 points).
pub fn load_polygon(path: &Path) -> Result<PolygonFile> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let poly: PolygonFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygon {}", path.display()))?;
    if poly.points.len() < 3 {
        bail!(
            "polygon {} has {} points; need at least 3",
            path.display(),
            poly.points.len()
        );
    }
    Ok(poly)
}

/// Default tolerances, overridden field by field from an optional JSON file.
pub fn load_cfg(path: Option<&Path>) -> Result<GeomCfg> {
    let Some(path) = path else {
        return Ok(GeomCfg::default());
    };
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: GeomCfg = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing tolerances {}", path.display()))?;
    Ok(cfg)
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got {}", parts.len()));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("bad number {part:?}: {e}"))?;
    }
    Ok(out)
}

/// `x,y,z`
pub fn parse_vec3(s: &str) -> Result<Vector3<f64>, String> {
    parse_floats::<3>(s).map(Vector3::from)
}

/// `nx,ny,nz,d`; the normal is normalized.
pub fn parse_plane(s: &str) -> Result<Plane3, String> {
    let [x, y, z, d] = parse_floats::<4>(s)?;
    let n = Vector3::new(x, y, z);
    let len = n.norm();
    if !(len.is_finite() && len > 0.0) {
        return Err("plane normal must be non-zero".to_string());
    }
    Ok(Plane3::new(n / len, d / len))
}
