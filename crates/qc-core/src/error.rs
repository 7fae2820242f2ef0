//! Error types for qc-core

use thiserror::Error;

/// Core error type for querycost
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: Home directory could not be resolved for `~` expansion
    #[error("[E004] Cannot expand '~' in '{path}': HOME is not set")]
    HomeDirNotFound { path: String },

    /// E005: Model file not found
    #[error("[E005] Model '{name}' not found under {search_dir}")]
    ModelNotFound { name: String, search_dir: String },

    /// E006: Model path does not encode a dataset and table
    #[error("[E006] Cannot derive dataset and table from model path '{path}': {reason}")]
    InvalidModelPath { path: String, reason: String },

    /// E007: Malformed `bq` dry-run response
    #[error("[E007] Failed to parse bq dry-run response: {message}")]
    DryRunResponse { message: String },

    /// E008: Malformed `dbt ls` output line
    #[error("[E008] Failed to parse dbt ls output: {message}")]
    DbtLsOutput { message: String },

    /// E009: IO error with file path context
    #[error("[E009] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E011: Required external command not found on PATH
    #[error("[E011] '{tool}' not found on PATH — is it installed?")]
    ToolNotFound { tool: String },

    /// YAML parse error
    #[error("YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
