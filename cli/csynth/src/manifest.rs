//! `csynth.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Manifest file name searched for from the current directory upward.
pub const MANIFEST_FILE: &str = "csynth.toml";

/// The top-level manifest structure for an HLS project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsynthManifest {
    /// Project settings (required).
    pub project: ProjectConfig,
}

/// Project section: where the synthesis tool writes its output and what it
/// was asked to build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectConfig {
    /// HLS project directory name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Top-level synthesis function (required).
    pub top_function: String,
    /// Target part identifier.
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Target clock period in ns.
    #[serde(default = "default_clock")]
    pub clock: f64,
    /// Solution directory name.
    #[serde(default = "default_solution")]
    pub solution: String,
    /// Directory holding the HLS project, relative to the manifest.
    #[serde(default = "default_working_dir")]
    pub working_dir: PathBuf,
}

fn default_name() -> String {
    "vitis_hls_autogen_proj".to_string()
}

fn default_platform() -> String {
    "xcvu5p-flva2104-1-e".to_string()
}

fn default_clock() -> f64 {
    10.0
}

fn default_solution() -> String {
    "solution1".to_string()
}

fn default_working_dir() -> PathBuf {
    PathBuf::from(".")
}

impl CsynthManifest {
    /// Search upward from `start_dir` for a `csynth.toml` file, parse and
    /// validate it, and return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest = Self::parse(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                log::debug!("loaded manifest {}", candidate.display());
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse and validate a manifest from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        let manifest: CsynthManifest = toml::from_str(s)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<()> {
        let project = &self.project;
        if project.top_function.trim().is_empty() {
            bail!("top-function must not be empty");
        }
        if !(project.clock.is_finite() && project.clock > 0.0) {
            bail!("clock must be a positive period in ns, got {}", project.clock);
        }
        Ok(())
    }

    /// Directory the synthesis tool writes its reports into.
    pub fn report_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir
            .join(&self.project.working_dir)
            .join(&self.project.name)
            .join(&self.project.solution)
            .join("syn")
            .join("report")
    }

    /// Generate a starter manifest.
    #[cfg(test)]
    pub fn template(top_function: &str) -> String {
        format!(
            r#"[project]
name = "vitis_hls_autogen_proj"
top-function = "{top_function}"
platform = "xcvu5p-flva2104-1-e"
clock = 10
"#
        )
    }
}
