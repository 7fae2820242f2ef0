//! Configuration types and parsing for querycost.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "querycost.yml";
const CONFIG_FILE_ALT: &str = "querycost.yaml";

/// Main configuration from querycost.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// dbt project directory. A leading `~/` is expanded against $HOME.
    pub dbt_dir: String,

    /// Output directory for compiled SQL, relative to `dbt_dir`
    #[serde(default = "default_target_path")]
    pub target_path: String,

    /// Directories containing model SQL sources, relative to `dbt_dir`
    #[serde(default = "default_model_paths")]
    pub model_paths: Vec<String>,

    /// GCP project used when building BigQuery console URLs
    #[serde(default)]
    pub project_id: Option<String>,

    /// Base URL for the BigQuery console
    #[serde(default = "default_console_base_url")]
    pub console_base_url: String,

    /// State directory passed to dbt's `--defer --state <dir>` flags
    #[serde(default = "default_defer_state")]
    pub defer_state: String,
}

fn default_target_path() -> String {
    "target".to_string()
}

fn default_model_paths() -> Vec<String> {
    vec!["models".to_string()]
}

fn default_console_base_url() -> String {
    "https://console.cloud.google.com/bigquery".to_string()
}

fn default_defer_state() -> String {
    "target_prod".to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for querycost.yml or querycost.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join(CONFIG_FILE);
        let yaml_path = dir.join(CONFIG_FILE_ALT);

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Discover and load configuration.
    ///
    /// Priority: explicit override path > ./querycost.yml(.yaml) >
    /// $HOME/.config/querycost/querycost.yml
    pub fn discover(override_path: Option<&Path>) -> CoreResult<Self> {
        if let Some(path) = override_path {
            return Self::load(path);
        }

        match Self::load_from_dir(Path::new(".")) {
            Err(CoreError::ConfigNotFound { .. }) => {}
            other => return other,
        }

        let home = home_dir().ok_or_else(|| CoreError::ConfigNotFound {
            path: CONFIG_FILE.to_string(),
        })?;
        Self::load(&home.join(".config").join("querycost").join(CONFIG_FILE))
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.dbt_dir.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "dbt_dir cannot be empty".to_string(),
            });
        }

        if self.model_paths.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "At least one model_paths entry must be specified".to_string(),
            });
        }

        Ok(())
    }

    /// Resolve `dbt_dir`, expanding a leading `~/` against $HOME
    pub fn dbt_dir_resolved(&self) -> CoreResult<PathBuf> {
        expand_home(&self.dbt_dir)
    }

    /// Absolute path to the compiled SQL directory
    pub fn target_dir(&self) -> CoreResult<PathBuf> {
        Ok(self.dbt_dir_resolved()?.join(&self.target_path))
    }

    /// Absolute paths to the model source directories
    pub fn model_dirs(&self) -> CoreResult<Vec<PathBuf>> {
        let root = self.dbt_dir_resolved()?;
        Ok(self.model_paths.iter().map(|p| root.join(p)).collect())
    }

    /// GCP project for console URLs, or a config error if unset
    pub fn require_project_id(&self) -> CoreResult<&str> {
        self.project_id
            .as_deref()
            .ok_or_else(|| CoreError::ConfigInvalid {
                message: "project_id must be set to build console URLs".to_string(),
            })
    }
}

/// Expand a leading `~/` (or bare `~`) against the HOME environment variable.
pub fn expand_home(path: &str) -> CoreResult<PathBuf> {
    if path == "~" || path.starts_with("~/") {
        let home = home_dir().ok_or_else(|| CoreError::HomeDirNotFound {
            path: path.to_string(),
        })?;
        if path == "~" {
            return Ok(home);
        }
        return Ok(home.join(&path[2..]));
    }
    Ok(PathBuf::from(path))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
