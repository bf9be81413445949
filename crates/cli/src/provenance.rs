//! Sidecar files recording how a sample set was produced.

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use planegeom::GeomCfg;
use serde::Serialize;
use serde_json::Value;

/// Everything needed to regenerate an artifact bit-for-bit.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub tool: &'static str,
    pub kernel_version: &'static str,
    pub code_rev: String,
    pub callsite: String,
    pub cfg: GeomCfg,
    pub params: Value,
    pub outputs: Vec<String>,
}

/// Writes `<stem>.provenance.json` next to `artifact` and returns its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, cfg: GeomCfg, params: Value) -> Result<PathBuf> {
    let callsite = Location::caller();
    let record = Provenance {
        tool: env!("CARGO_PKG_NAME"),
        kernel_version: planegeom::VERSION,
        code_rev: current_git_rev(),
        callsite: format!("{}:{}", callsite.file(), callsite.line()),
        cfg,
        params,
        outputs: vec![artifact.display().to_string()],
    };
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote provenance sidecar");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy().into_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
