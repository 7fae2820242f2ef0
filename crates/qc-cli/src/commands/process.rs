//! Subprocess wrappers for `poetry run dbt` and `bq`.
//!
//! dbt runs inside the project's poetry environment, in the dbt project
//! directory. The bq query is passed via stdin so SQL beginning with a `--`
//! comment line is not interpreted as an extra flag.

use anyhow::{Context, Result};
use qc_core::CoreError;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;

use super::common::log_verbose;

/// Captured output from a subprocess invocation.
pub(crate) struct CommandOutput {
    pub(crate) success: bool,
    pub(crate) exit_code: i32,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl CommandOutput {
    fn from_output(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Error detail: stderr when present, stdout otherwise.
    pub(crate) fn error_detail(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Check that `poetry` is available on the system PATH.
pub(crate) fn check_poetry_available() -> Result<(), CoreError> {
    check_tool_available("poetry")
}

/// Check that `bq` is available on the system PATH.
pub(crate) fn check_bq_available() -> Result<(), CoreError> {
    check_tool_available("bq")
}

fn check_tool_available(tool: &str) -> Result<(), CoreError> {
    match std::process::Command::new(tool)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) if status.success() => Ok(()),
        _ => Err(CoreError::ToolNotFound {
            tool: tool.to_string(),
        }),
    }
}

/// Run `poetry run dbt <args>` in `dbt_dir` and capture its output.
pub(crate) async fn run_dbt(
    dbt_dir: &Path,
    args: &[String],
    verbose: bool,
) -> Result<CommandOutput> {
    log_verbose(
        verbose,
        format!("Running: poetry run dbt {}", args.join(" ")),
    );

    let output = tokio::process::Command::new("poetry")
        .arg("run")
        .arg("dbt")
        .args(args)
        .current_dir(dbt_dir)
        .output()
        .await
        .context("Failed to execute 'poetry run dbt' — is poetry installed?")?;

    Ok(CommandOutput::from_output(output))
}

/// Run `bq query --dry_run` with `sql` piped in on stdin.
pub(crate) async fn run_bq_dry_run(sql: &str, verbose: bool) -> Result<CommandOutput> {
    let args = [
        "query",
        "--nouse_legacy_sql",
        "--dry_run",
        "--nouse_cache",
        "--format=json",
    ];

    log_verbose(
        verbose,
        format!("Running: bq {} (query on stdin)", args.join(" ")),
    );

    let mut child = tokio::process::Command::new("bq")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("Failed to execute 'bq' — is the Cloud SDK installed?")?;

    let mut stdin = child
        .stdin
        .take()
        .context("Failed to open stdin for 'bq'")?;
    stdin
        .write_all(sql.as_bytes())
        .await
        .context("Failed to write query to 'bq' stdin")?;
    drop(stdin);

    let output = child
        .wait_with_output()
        .await
        .context("Failed to wait for 'bq'")?;

    Ok(CommandOutput::from_output(output))
}
