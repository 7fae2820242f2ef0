//! In-memory model records.
//!
//! A [`Model`] is built fresh on every invocation: the name, the resolved
//! path of the generated `.sql` file, and the SQL text read from it.
//! Nothing is persisted between runs.

use crate::error::{CoreError, CoreResult};
use crate::model_name::ModelName;
use std::path::{Path, PathBuf};

/// A named dbt model resolved to a `.sql` file on disk.
#[derive(Debug, Clone)]
pub struct Model {
    /// Model name
    pub name: ModelName,
    /// Resolved path of the `.sql` file
    pub path: PathBuf,
    /// SQL text loaded from `path`
    pub sql: String,
}

impl Model {
    /// Read the SQL file at `path` and build the record.
    pub fn load(name: ModelName, path: &Path) -> CoreResult<Self> {
        let sql = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self {
            name,
            path: path.to_path_buf(),
            sql,
        })
    }
}
