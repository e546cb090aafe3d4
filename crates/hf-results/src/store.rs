//! Run storage API.

use crate::types::RunManifest;
use crate::{ResultsError, ResultsResult};
use hf_grid::TemperatureField;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store rooted next to the case file, under `.heatfield/runs`.
    pub fn for_case(case_path: &Path) -> ResultsResult<Self> {
        let case_dir = case_path.parent().ok_or_else(|| ResultsError::InvalidPath {
            message: "case path has no parent directory".to_string(),
        })?;
        let runs_dir = case_dir.join(".heatfield").join("runs");
        Self::new(runs_dir)
    }

    fn run_dir(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id)
    }

    /// Path of a run's flat-text grid file; what gets handed to gnuplot.
    pub fn grid_path(&self, run_id: &str) -> PathBuf {
        self.run_dir(run_id).join("temperature.txt")
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.run_dir(run_id).join("manifest.json").exists()
    }

    /// Persist a converged run: `manifest.json` plus `temperature.txt`.
    ///
    /// The grid file is row-major over the full field: one line per grid
    /// row (fixed i), ny space-separated values per line, each row
    /// terminated by a newline.
    pub fn save_run(&self, manifest: &RunManifest, field: &TemperatureField) -> ResultsResult<()> {
        let run_dir = self.run_dir(&manifest.run_id);
        fs::create_dir_all(&run_dir)?;

        let manifest_path = run_dir.join("manifest.json");
        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(manifest_path, manifest_json)?;

        let mut grid_text = String::new();
        for i in 0..field.nx() {
            let row: Vec<String> = field
                .row(i)
                .iter()
                .map(|value| format!("{value:.6}"))
                .collect();
            grid_text.push_str(&row.join(" "));
            grid_text.push('\n');
        }
        fs::write(self.grid_path(&manifest.run_id), grid_text)?;

        Ok(())
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        let manifest_path = self.run_dir(run_id).join("manifest.json");

        if !manifest_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Read a run's grid back as rows of values (fixed i per row).
    pub fn load_grid(&self, run_id: &str) -> ResultsResult<Vec<Vec<f64>>> {
        let grid_path = self.grid_path(run_id);

        if !grid_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(grid_path)?;
        let mut rows = Vec::new();
        for (line_idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let value: f64 =
                    token
                        .parse()
                        .map_err(|_| ResultsError::MalformedGrid {
                            line: line_idx + 1,
                            message: format!("not a number: {token}"),
                        })?;
                row.push(value);
            }
            rows.push(row);
        }

        Ok(rows)
    }

    pub fn list_runs(&self, case_name: &str) -> ResultsResult<Vec<RunManifest>> {
        let mut runs = Vec::new();

        if !self.root_dir.exists() {
            return Ok(runs);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let run_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&run_id)
                    && manifest.case_name == case_name
                {
                    runs.push(manifest);
                }
            }
        }

        Ok(runs)
    }

    pub fn delete_run(&self, run_id: &str) -> ResultsResult<()> {
        let run_dir = self.run_dir(run_id);
        if run_dir.exists() {
            fs::remove_dir_all(run_dir)?;
        }
        Ok(())
    }
}
