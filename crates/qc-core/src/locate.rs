//! Recursive discovery of a model's `.sql` file under a directory tree.

use crate::error::{CoreError, CoreResult};
use crate::model_name::ModelName;
use std::path::{Path, PathBuf};

/// Find the `.sql` file for `name` anywhere under `search_dir`.
///
/// Matches are sorted so the result is deterministic; the first match wins
/// and any additional matches are reported with a warning.
pub fn find_model_file(name: &ModelName, search_dir: &Path) -> CoreResult<PathBuf> {
    let pattern = search_dir
        .join("**")
        .join(name.sql_file_name())
        .display()
        .to_string();

    let mut matches: Vec<PathBuf> = glob::glob(&pattern)
        .map_err(|e| CoreError::ModelNotFound {
            name: name.to_string(),
            search_dir: format!("{} (bad pattern: {})", search_dir.display(), e),
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    matches.sort();

    let mut iter = matches.into_iter();
    let first = iter.next().ok_or_else(|| CoreError::ModelNotFound {
        name: name.to_string(),
        search_dir: search_dir.display().to_string(),
    })?;

    for extra in iter {
        log::warn!(
            "Multiple files named {} under {}; using {} and ignoring {}",
            name.sql_file_name(),
            search_dir.display(),
            first.display(),
            extra.display()
        );
    }

    Ok(first)
}

/// Find the `.sql` file for `name`, trying each directory in order.
///
/// Returns the file path together with the search directory it was found
/// under, so callers can derive paths relative to that root.
pub fn find_model_file_in_dirs(
    name: &ModelName,
    search_dirs: &[PathBuf],
) -> CoreResult<(PathBuf, PathBuf)> {
    let mut last_err = None;
    for dir in search_dirs {
        match find_model_file(name, dir) {
            Ok(path) => return Ok((path, dir.clone())),
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err.unwrap_or_else(|| CoreError::ModelNotFound {
        name: name.to_string(),
        search_dir: "<no search directories configured>".to_string(),
    }))
}

#[cfg(test)]
#[path = "locate_test.rs"]
mod tests;
