use anyhow::{Context, Result};
use pathtrace::api::{Grid, Trace, TraceError};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Shape of the maze a result was traced from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridShape {
    pub rows: usize,
    pub first_row_width: usize,
    pub max_row_width: usize,
    pub ragged: bool,
    /// Non-space cells.
    pub maze_cells: usize,
}

impl GridShape {
    pub fn of(grid: &Grid) -> Self {
        let first = grid.first_row_width();
        let max_row_width = grid.rows().iter().map(Vec::len).max().unwrap_or(0);
        Self {
            rows: grid.row_count(),
            first_row_width: first,
            max_row_width,
            ragged: grid.rows().iter().any(|r| r.len() != first),
            maze_cells: grid
                .rows()
                .iter()
                .flatten()
                .filter(|&&c| c != ' ')
                .count(),
        }
    }
}

/// Stable snake_case name of a trace outcome, for sidecars and logs.
pub fn outcome_kind(outcome: &Result<Trace, TraceError>) -> &'static str {
    match outcome {
        Ok(_) => "ok",
        Err(TraceError::MalformedGrid { .. }) => "malformed_grid",
        Err(TraceError::InvalidMarkerCount { .. }) => "invalid_marker_count",
        Err(TraceError::NoPathFound) => "no_path_found",
        Err(TraceError::RaggedGrid { .. }) => "ragged_grid",
    }
}

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
    pub input_shape: Option<GridShape>,
    pub outcome: Option<&'static str>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
            input_shape: None,
            outcome: None,
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }

    pub fn with_grid(mut self, grid: &Grid) -> Self {
        self.input_shape = Some(GridShape::of(grid));
        self
    }

    pub fn with_outcome(mut self, outcome: &Result<Trace, TraceError>) -> Self {
        self.outcome = Some(outcome_kind(outcome));
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    params: &'a Value,
    inputs: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    input_shape: Option<&'a GridShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'static str>,
    outputs: Vec<String>,
}

/// Provenance block printed by `pathtrace report`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub code_rev: String,
    pub version: &'static str,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Report {
    pub fn current() -> Self {
        Self {
            code_rev: current_git_rev(),
            version: pathtrace::VERSION,
            params: Value::Object(Default::default()),
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact>.provenance.json` with the git commit, callsite, params,
/// inputs (and their grid shape), the outcome kind, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: pathtrace::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        params: &payload.params,
        inputs: &payload.inputs,
        input_shape: payload.input_shape.as_ref(),
        outcome: payload.outcome,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), outcome = ?payload.outcome, "provenance_written");
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit from the build-time or runtime `GIT_COMMIT`, else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            let output = Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathtrace::api::trace_path;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/maze.txt");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/maze.provenance.json"));
    }

    #[test]
    fn grid_shape_counts_cells_and_raggedness() {
        let shape = GridShape::of(&Grid::parse("@-+\n  |\n  +-x\n"));
        assert_eq!(
            shape,
            GridShape {
                rows: 3,
                first_row_width: 3,
                max_row_width: 5,
                ragged: true,
                maze_cells: 7,
            }
        );
        assert!(!GridShape::of(&Grid::parse("@x")).ragged);
    }

    #[test]
    fn outcome_kind_names_every_failure() {
        assert_eq!(outcome_kind(&trace_path(&Grid::parse("@-x"))), "ok");
        assert_eq!(outcome_kind(&trace_path(&Grid::parse("@-#x"))), "malformed_grid");
        assert_eq!(outcome_kind(&trace_path(&Grid::parse("@--"))), "invalid_marker_count");
        assert_eq!(outcome_kind(&trace_path(&Grid::parse("@ x"))), "no_path_found");
        let ragged = Err(TraceError::RaggedGrid {
            row: 1,
            len: 2,
            expected: 1,
        });
        assert_eq!(outcome_kind(&ragged), "ragged_grid");
    }

    #[test]
    fn write_sidecar_records_inputs_shape_and_outcome() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("result.txt");
        fs::write(&artifact, "A\n@-A-x").unwrap();
        let grid = Grid::parse("@-A-x");
        let payload = Payload::new(json!({"command": "trace"}))
            .with_input("maze.txt")
            .with_grid(&grid)
            .with_outcome(&trace_path(&grid));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["inputs"][0], "maze.txt");
        assert_eq!(parsed["params"]["command"], "trace");
        assert_eq!(parsed["input_shape"]["maze_cells"], 5);
        assert_eq!(parsed["outcome"], "ok");
        assert_eq!(parsed["version"], pathtrace::VERSION);
    }

    #[test]
    fn sidecar_without_grid_omits_shape_and_outcome() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("maze.txt");
        let prov_path = write_sidecar(&artifact, Payload::new(json!({"command": "gen"}))).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert!(parsed.get("input_shape").is_none());
        assert!(parsed.get("outcome").is_none());
    }

    #[test]
    fn report_serializes_rev_and_version() {
        let v = serde_json::to_value(Report::current()).unwrap();
        assert_eq!(v["version"], pathtrace::VERSION);
        assert!(v["code_rev"].as_str().is_some_and(|s| !s.is_empty()));
        assert_eq!(v["outputs"], json!([]));
    }
}
