//! qc-core - Core library for querycost
//!
//! This crate provides configuration parsing, model resolution on disk,
//! dbt argument construction, and `bq` dry-run response parsing shared by
//! the querycost CLI.

pub mod config;
pub mod console;
pub mod dbt;
pub mod dryrun;
pub mod error;
pub mod format;
pub mod locate;
pub mod model;
pub mod model_name;

pub use config::Config;
pub use console::{ConsoleUrl, TableRef};
pub use dbt::DbtArgs;
pub use dryrun::{parse_dry_run_response, DryRunResult, RunStatus};
pub use error::{CoreError, CoreResult};
pub use format::format_bytes;
pub use locate::{find_model_file, find_model_file_in_dirs};
pub use model::Model;
pub use model_name::ModelName;
