//! `bq query --dry_run` response parsing and per-model result records.

use crate::error::{CoreError, CoreResult};
use crate::model_name::ModelName;
use serde::{Deserialize, Serialize};

/// Status for a per-model dry-run attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Success => write!(f, "success"),
            RunStatus::Error => write!(f, "error"),
        }
    }
}

/// Outcome of dry-running one model's SQL.
#[derive(Debug, Clone, Serialize)]
pub struct DryRunResult {
    /// Model name
    pub model: ModelName,
    /// Success or error
    pub status: RunStatus,
    /// Bytes the query would scan (present on success)
    pub bytes_processed: Option<i64>,
    /// Error detail from bq or the parse layer
    pub error: Option<String>,
    /// Wall-clock duration of the bq invocation
    pub duration_secs: f64,
}

impl DryRunResult {
    pub fn success(model: ModelName, bytes_processed: i64, duration_secs: f64) -> Self {
        Self {
            model,
            status: RunStatus::Success,
            bytes_processed: Some(bytes_processed),
            error: None,
            duration_secs,
        }
    }

    pub fn error(model: ModelName, error: String, duration_secs: f64) -> Self {
        Self {
            model,
            status: RunStatus::Error,
            bytes_processed: None,
            error: Some(error),
            duration_secs,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }
}

// bq reports the byte counter as a JSON string, not a number.
#[derive(Deserialize)]
struct RawResponse {
    statistics: RawStatistics,
}

#[derive(Deserialize)]
struct RawStatistics {
    query: RawQueryStats,
}

#[derive(Deserialize)]
struct RawQueryStats {
    #[serde(rename = "totalBytesProcessed")]
    total_bytes_processed: String,
}

/// Extract `statistics.query.totalBytesProcessed` from a `bq query
/// --dry_run --format=json` response.
pub fn parse_dry_run_response(json: &str) -> CoreResult<i64> {
    let raw: RawResponse =
        serde_json::from_str(json).map_err(|e| CoreError::DryRunResponse {
            message: e.to_string(),
        })?;

    raw.statistics
        .query
        .total_bytes_processed
        .parse::<i64>()
        .map_err(|e| CoreError::DryRunResponse {
            message: format!(
                "totalBytesProcessed {:?} is not an integer: {}",
                raw.statistics.query.total_bytes_processed, e
            ),
        })
}

#[cfg(test)]
#[path = "dryrun_test.rs"]
mod tests;
