use anyhow::{Context, Result};
use serde_json::{json, Value};
use spanregion::{AnyRegion, Domain, Mode, OrbitView};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to a region artifact.
pub struct Payload {
    pub params: Value,
    /// What was written: region kind, dimension, drawable point count.
    pub summary: Value,
}

impl Payload {
    /// Inputs and outcome of one `region` run.
    pub fn for_region(
        mode: Mode,
        vector_count: usize,
        domain: &Domain,
        view: &OrbitView,
        tag: Option<&str>,
        result: &AnyRegion,
    ) -> Self {
        let domain_json = match domain {
            Domain::Plane(r) => json!({
                "kind": "rect",
                "x": [r.xmin, r.xmax],
                "y": [r.ymin, r.ymax],
            }),
            Domain::Space(c) => json!({ "kind": "cube", "half": c.half }),
        };
        let points = match result {
            AnyRegion::Plane(r) => r.points().len(),
            AnyRegion::Space(r) => r.points().len(),
        };
        Self {
            params: json!({
                "mode": mode.name(),
                "tag": tag,
                "vectors": vector_count,
                "domain": domain_json,
                "view": { "yaw": view.yaw, "pitch": view.pitch },
            }),
            summary: json!({
                "kind": result.kind(),
                "dim": domain.dim(),
                "points": points,
            }),
        }
    }
}

/// Write `<stem>.provenance.json` beside `artifact`; returns its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let at = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "engine_version": spanregion::VERSION,
        "callsite": { "file": at.file(), "line": at.line() },
        "params": payload.params,
        "summary": payload.summary,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance sidecar");
    Ok(path)
}

/// `dir/cone.json` → `dir/cone.provenance.json`.
pub fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "region".into(), |s| s.to_string_lossy().into_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit of the running build: `GIT_COMMIT` at compile time, then at run
/// time, then `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .find(|rev| !rev.is_empty())
        .or_else(head_rev)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn head_rev() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned()).filter(|r| !r.is_empty())
}
