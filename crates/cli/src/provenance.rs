use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contents of a `<artifact>.provenance.json` sidecar.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub crate_version: &'static str,
    pub command: String,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Sidecar {
    pub fn new(command: impl Into<String>, params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            crate_version: hedra::VERSION,
            command: command.into(),
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact>.provenance.json` next to `artifact`, recording it as the output.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, mut sidecar: Sidecar) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    ensure_parent(&path)?;
    sidecar.outputs = vec![artifact.to_string_lossy().into_owned()];
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()));
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/cube.txt");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/cube.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_output_and_params() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested").join("verts.txt");
        ensure_parent(&artifact).unwrap();
        fs::write(&artifact, "1 1 1\n").unwrap();
        let sidecar = Sidecar::new("vertices", json!({"shape": "cube"}));
        let prov_path = write_sidecar(&artifact, sidecar).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "vertices");
        assert_eq!(parsed["params"]["shape"], "cube");
        assert_eq!(parsed["crate_version"], hedra::VERSION);
    }
}
