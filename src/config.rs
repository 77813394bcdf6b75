use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::MigrationOptions;
use crate::error::{MigError, Result};

/// Name of the project-local config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "skillmig.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub migration: MigrationConfig,
}

impl Config {
    /// Load defaults, then the config file(s), then `SKILLMIG_*` overrides.
    ///
    /// An explicit path (argument or `SKILLMIG_CONFIG`) replaces the
    /// global + project lookup and must exist.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SKILLMIG_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                MigError::Config(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("skillmig/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| MigError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| MigError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.paths {
            self.paths.merge(patch);
        }
        if let Some(patch) = patch.migration {
            self.migration.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_path("SKILLMIG_INPUT") {
            self.paths.input = value;
        }
        if let Some(value) = env_path("SKILLMIG_JOBS_OUTPUT") {
            self.paths.jobs_output = value;
        }
        if let Some(value) = env_path("SKILLMIG_SOFT_OUTPUT") {
            self.paths.soft_output = value;
        }
        if let Some(value) = env_path("SKILLMIG_HARD_OUTPUT") {
            self.paths.hard_output = value;
        }
        if let Some(value) = env_bool("SKILLMIG_REJECT_BLANK_NAMES") {
            self.migration.reject_blank_names = value;
        }
    }

    /// Output locations, optionally redirected into `dir` (file names kept).
    #[must_use]
    pub fn outputs(&self, dir: Option<&Path>) -> OutputPaths {
        let place = |path: &Path| match dir {
            Some(dir) => dir.join(path.file_name().unwrap_or(path.as_os_str())),
            None => path.to_path_buf(),
        };
        OutputPaths {
            jobs: place(&self.paths.jobs_output),
            soft_skills: place(&self.paths.soft_output),
            hard_skills: place(&self.paths.hard_output),
        }
    }

    #[must_use]
    pub const fn migration_options(&self) -> MigrationOptions {
        MigrationOptions {
            reject_blank_names: self.migration.reject_blank_names,
        }
    }
}

/// Resolved locations of the three v6 documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub jobs: PathBuf,
    pub soft_skills: PathBuf,
    pub hard_skills: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_jobs_output")]
    pub jobs_output: PathBuf,
    #[serde(default = "default_soft_output")]
    pub soft_output: PathBuf,
    #[serde(default = "default_hard_output")]
    pub hard_output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            jobs_output: default_jobs_output(),
            soft_output: default_soft_output(),
            hard_output: default_hard_output(),
        }
    }
}

impl PathsConfig {
    fn merge(&mut self, patch: PathsPatch) {
        if let Some(value) = patch.input {
            self.input = value;
        }
        if let Some(value) = patch.jobs_output {
            self.jobs_output = value;
        }
        if let Some(value) = patch.soft_output {
            self.soft_output = value;
        }
        if let Some(value) = patch.hard_output {
            self.hard_output = value;
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("dataV5.json")
}

fn default_jobs_output() -> PathBuf {
    PathBuf::from("dataV6.json")
}

fn default_soft_output() -> PathBuf {
    PathBuf::from("softSkills.json")
}

fn default_hard_output() -> PathBuf {
    PathBuf::from("hardSkills.json")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Fail on blank raw skill names instead of warning.
    #[serde(default)]
    pub reject_blank_names: bool,
}

impl MigrationConfig {
    fn merge(&mut self, patch: MigrationPatch) {
        if let Some(value) = patch.reject_blank_names {
            self.reject_blank_names = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub paths: Option<PathsPatch>,
    pub migration: Option<MigrationPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PathsPatch {
    pub input: Option<PathBuf>,
    pub jobs_output: Option<PathBuf>,
    pub soft_output: Option<PathBuf>,
    pub hard_output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MigrationPatch {
    pub reject_blank_names: Option<bool>,
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
