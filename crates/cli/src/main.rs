use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nalgebra::Vector3;
use planegeom::algebra::Aabb3;
use planegeom::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::{load_cfg, load_polygon, parse_plane, parse_vec3};

#[derive(Parser)]
#[command(name = "planegeom")]
#[command(about = "Inspect, clip and sample planar polygons", version)]
struct Cmd {
    /// JSON file overriding tolerance fields (missing fields keep defaults)
    #[arg(long, global = true)]
    cfg: Option<PathBuf>,

    /// Debug-level logs on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Area, centroid, face normal, plane, bounds
    Measure { poly: PathBuf },
    /// Split by a plane into front and back pieces
    Clip {
        poly: PathBuf,
        /// nx,ny,nz,d
        #[arg(long, value_parser = parse_plane, allow_hyphen_values = true)]
        plane: Plane3,
    },
    /// Pull every edge inward
    Shrink {
        poly: PathBuf,
        #[arg(long)]
        amount: f64,
    },
    /// Point-in-polygon test and nearest boundary point
    Inside {
        poly: PathBuf,
        /// x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        point: Vector3<f64>,
    },
    /// Interpolated vertex normal at a point (file must carry normals)
    Interpolate {
        poly: PathBuf,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        point: Vector3<f64>,
    },
    /// Area-weighted random points on the face
    Sample {
        poly: PathBuf,
        #[arg(long, default_value_t = 16)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Write points here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Version, code revision and effective tolerances
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cfg = load_cfg(cmd.cfg.as_deref())?;
    tracing::debug!(?cfg, "tolerances");
    let out = match cmd.action {
        Action::Measure { poly } => measure(&poly, cfg)?,
        Action::Clip { poly, plane } => clip(&poly, plane, cfg)?,
        Action::Shrink { poly, amount } => shrink(&poly, amount, cfg)?,
        Action::Inside { poly, point } => inside(&poly, point, cfg)?,
        Action::Interpolate { poly, point } => interpolate_at(&poly, point, cfg)?,
        Action::Sample {
            poly,
            count,
            seed,
            out,
        } => sample(&poly, count, seed, out.as_deref(), cfg)?,
        Action::Report => report(cfg),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn arr(v: &Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}

fn arrs(points: &[Vector3<f64>]) -> Vec<[f64; 3]> {
    points.iter().map(arr).collect()
}

fn measure(path: &Path, cfg: GeomCfg) -> Result<Value> {
    let points = load_polygon(path)?.points();
    let plane = poly_plane(&points, cfg).context("polygon has no usable face")?;
    let edge_planes = inward_edge_planes(&points, cfg)?;
    let bounds = Aabb3::from_points(&points).context("empty polygon")?;
    Ok(json!({
        "vertices": points.len(),
        "area": poly_area(&points),
        "centroid": arr(&poly_centroid(&points)),
        "normal": arr(&plane.n),
        "plane_d": plane.d,
        "edge_planes": edge_planes.len(),
        "bounds": { "mins": arr(&bounds.mins), "maxs": arr(&bounds.maxs) },
    }))
}

fn clip(path: &Path, plane: Plane3, cfg: GeomCfg) -> Result<Value> {
    let points = load_polygon(path)?.points();
    let (front, back) = clip_poly(&points, &plane, cfg);
    tracing::info!(front = front.len(), back = back.len(), "clipped");
    Ok(json!({ "front": arrs(&front), "back": arrs(&back) }))
}

fn shrink(path: &Path, amount: f64, cfg: GeomCfg) -> Result<Value> {
    let points = load_polygon(path)?.points();
    let shrunk = shrink_poly(&points, amount, cfg);
    let area = if shrunk.len() >= 3 { poly_area(&shrunk) } else { 0.0 };
    Ok(json!({ "points": arrs(&shrunk), "area": area }))
}

fn inside(path: &Path, point: Vector3<f64>, cfg: GeomCfg) -> Result<Value> {
    let points = load_polygon(path)?.points();
    // A degenerate face has no edge planes and contains nothing.
    let edge_planes = inward_edge_planes(&points, cfg).unwrap_or_default();
    if edge_planes.is_empty() {
        tracing::debug!("degenerate face: no edge planes");
    }
    let inside_dist = (!edge_planes.is_empty()).then(|| edge_planes.point_inside_dist(point));
    let (edge, closest) = closest_point_on_boundary(&points, point);
    Ok(json!({
        "inside": point_inside_polygon(&points, point, cfg),
        "inside_dist": inside_dist,
        "closest_edge": edge,
        "closest_point": arr(&closest),
    }))
}

fn interpolate_at(path: &Path, point: Vector3<f64>, cfg: GeomCfg) -> Result<Value> {
    let file = load_polygon(path)?;
    let points = file.points();
    let normals = file.normals()?;
    let normal = interpolate_normal(&points, &normals, point, cfg);
    if normal.is_none() {
        tracing::warn!("point is outside every fan triangle");
    }
    Ok(json!({ "normal": normal.as_ref().map(arr) }))
}

fn sample(path: &Path, count: usize, seed: u64, out: Option<&Path>, cfg: GeomCfg) -> Result<Value> {
    let points = load_polygon(path)?.points();
    let sampler = FanSampler::new(&points)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let samples: Vec<Vector3<f64>> = (0..count).map(|_| sampler.sample(&mut rng)).collect();
    tracing::debug!(count, seed, area = sampler.area(), "sampled");

    let body = json!({ "area": sampler.area(), "points": arrs(&samples) });
    let Some(out) = out else {
        return Ok(body);
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(out, serde_json::to_vec_pretty(&body)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = json!({ "poly": path.display().to_string(), "count": count, "seed": seed });
    let sidecar = provenance::write_sidecar(out, cfg, params)?;
    Ok(json!({
        "out": out.display().to_string(),
        "provenance": sidecar.display().to_string(),
    }))
}

fn report(cfg: GeomCfg) -> Value {
    json!({
        "planegeom": planegeom::VERSION,
        "code_rev": provenance::current_git_rev(),
        "cfg": cfg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SQUARE: &str = r#"{
        "points": [[0,0,0],[10,0,0],[10,10,0],[0,10,0]],
        "normals": [[0,0,1],[0,0,1],[0,0,1],[0,0,1]]
    }"#;

    fn square_file(dir: &Path) -> PathBuf {
        let path = dir.join("square.json");
        fs::write(&path, SQUARE).unwrap();
        path
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cmd = Cmd::try_parse_from([
            "planegeom", "clip", "p.json", "--plane", "-1,0,0,-5", "--verbose",
        ])
        .unwrap();
        assert!(cmd.verbose);
        let Action::Clip { plane, .. } = cmd.action else {
            panic!("expected clip");
        };
        assert_eq!(plane.d, -5.0);
    }

    #[test]
    fn measure_reports_area_and_normal() {
        let dir = tempdir().unwrap();
        let v = measure(&square_file(dir.path()), GeomCfg::default()).unwrap();
        assert_eq!(v["area"], 100.0);
        assert_eq!(v["vertices"], 4);
        assert_eq!(v["edge_planes"], 4);
        assert_eq!(v["normal"][2], -1.0);
    }

    #[test]
    fn clip_and_inside_agree() {
        let dir = tempdir().unwrap();
        let path = square_file(dir.path());
        let cfg = GeomCfg::default();
        let v = clip(&path, Plane3::new(Vector3::x(), 5.0), cfg).unwrap();
        assert_eq!(v["front"].as_array().unwrap().len(), 4);
        assert_eq!(v["back"].as_array().unwrap().len(), 4);
        let v = inside(&path, Vector3::new(5.0, 5.0, 0.0), cfg).unwrap();
        assert_eq!(v["inside"], true);
        let v = inside(&path, Vector3::new(15.0, 5.0, 0.0), cfg).unwrap();
        assert_eq!(v["inside"], false);
    }

    #[test]
    fn inside_on_degenerate_face_is_outside() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("line.json");
        fs::write(&path, r#"{"points": [[0,0,0],[5,0,0],[10,0,0]]}"#).unwrap();
        let v = inside(&path, Vector3::new(5.0, 0.0, 0.0), GeomCfg::default()).unwrap();
        assert_eq!(v["inside"], false);
        assert!(v["inside_dist"].is_null());
        assert_eq!(v["closest_point"][0], 5.0);
    }

    #[test]
    fn interpolate_returns_vertex_normal() {
        let dir = tempdir().unwrap();
        let path = square_file(dir.path());
        let v = interpolate_at(&path, Vector3::new(3.0, 4.0, 0.0), GeomCfg::default()).unwrap();
        let nz = v["normal"][2].as_f64().unwrap();
        assert!((nz - 1.0).abs() < 1e-12, "nz = {nz}");
    }

    #[test]
    fn sample_is_seeded_and_writes_sidecar() {
        let dir = tempdir().unwrap();
        let path = square_file(dir.path());
        let cfg = GeomCfg::default();
        let a = sample(&path, 5, 7, None, cfg).unwrap();
        let b = sample(&path, 5, 7, None, cfg).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["points"].as_array().unwrap().len(), 5);

        let out = dir.path().join("runs").join("pts.json");
        let v = sample(&path, 5, 7, Some(&out), cfg).unwrap();
        assert!(out.exists());
        assert!(Path::new(v["provenance"].as_str().unwrap()).exists());
        let written: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(written["points"].as_array().unwrap().len(), 5);
    }
}
