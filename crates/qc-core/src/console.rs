//! BigQuery console URL construction.
//!
//! A model's table is derived from where its source file sits under the
//! models directory: the last path component (minus `.sql`) is the table
//! name and the directories between the models root and the file, joined
//! with `_`, form the dataset name.

use crate::error::{CoreError, CoreResult};
use std::path::Path;

/// A (dataset, table) pair derived from a model path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub dataset: String,
    pub table: String,
}

impl TableRef {
    /// Derive the table reference from a model file path and the models
    /// directory it was found under.
    ///
    /// Requires at least three path components below the models root
    /// (e.g. `marts/finance/orders.sql`) so both a dataset and a table can
    /// be recovered.
    pub fn from_model_path(model_path: &Path, models_dir: &Path) -> CoreResult<Self> {
        let relative = model_path.strip_prefix(models_dir).map_err(|_| {
            CoreError::InvalidModelPath {
                path: model_path.display().to_string(),
                reason: format!("not under models directory {}", models_dir.display()),
            }
        })?;

        let components: Vec<String> = relative
            .with_extension("")
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        if components.len() < 3 {
            return Err(CoreError::InvalidModelPath {
                path: model_path.display().to_string(),
                reason: "expected at least <area>/<dataset>/<table>.sql below the models directory"
                    .to_string(),
            });
        }

        let table = components[components.len() - 1].clone();
        let dataset = components[..components.len() - 1].join("_");

        Ok(Self { dataset, table })
    }
}

/// Builder for a console deep link to a table.
#[derive(Debug, Clone)]
pub struct ConsoleUrl<'a> {
    pub base_url: &'a str,
    pub project_id: &'a str,
    pub table: &'a TableRef,
}

impl ConsoleUrl<'_> {
    /// Render the console URL.
    pub fn build(&self) -> String {
        format!(
            "{}?p={}&d={}&t={}&page=table",
            self.base_url, self.project_id, self.table.dataset, self.table.table
        )
    }
}

#[cfg(test)]
#[path = "console_test.rs"]
mod tests;
