//! dbt invocation arguments and `dbt ls` output parsing.
//!
//! dbt itself runs out of process (via `poetry run dbt` in the project's
//! virtualenv); this module only builds argument vectors and parses the
//! JSON-lines output of `dbt ls`.

use crate::error::{CoreError, CoreResult};
use serde::Deserialize;

/// Arguments for a dbt subcommand invocation.
#[derive(Debug, Clone, Default)]
pub struct DbtArgs {
    /// The dbt subcommand to run (e.g. "ls", "compile")
    pub command: String,
    /// Models passed to `--select`
    pub select: Vec<String>,
    /// Build models with no rows (`--empty`)
    pub empty: bool,
    /// Defer unselected references to the production state
    pub defer: bool,
    /// State directory used when `defer` is set
    pub defer_state: String,
}

impl DbtArgs {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            defer_state: "target_prod".to_string(),
            ..Default::default()
        }
    }

    pub fn select(mut self, models: &[String]) -> Self {
        self.select = models.to_vec();
        self
    }

    pub fn defer(mut self, defer: bool, state: &str) -> Self {
        self.defer = defer;
        self.defer_state = state.to_string();
        self
    }

    pub fn empty(mut self, empty: bool) -> Self {
        self.empty = empty;
        self
    }

    /// Build the argument vector passed to the dbt executable.
    pub fn build(&self) -> Vec<String> {
        let mut args = vec![self.command.clone()];

        if !self.select.is_empty() {
            args.push("--select".to_string());
            args.extend(self.select.iter().cloned());
        }

        if self.defer {
            args.extend(
                [
                    "--defer",
                    "--state",
                    self.defer_state.as_str(),
                    "--favor-state",
                ]
                .map(String::from),
            );
        }

        if self.empty {
            args.push("--empty".to_string());
        }

        args
    }

    /// Arguments for `dbt ls` restricted to model names in JSON-lines form.
    pub fn build_ls(&self) -> Vec<String> {
        let mut args = self.build();
        args.extend(
            [
                "--resource-type",
                "model",
                "--output",
                "json",
                "--output-keys",
                "name",
                "--quiet",
            ]
            .map(String::from),
        );
        args
    }
}

#[derive(Deserialize)]
struct LsLine {
    name: String,
}

/// Parse `dbt ls --output json --output-keys name` output: one JSON object
/// per line, blank lines skipped.
pub fn parse_ls_names(output: &str) -> CoreResult<Vec<String>> {
    let mut names = Vec::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let item: LsLine =
            serde_json::from_str(line).map_err(|e| CoreError::DbtLsOutput {
                message: format!("invalid line {:?}: {}", line, e),
            })?;
        names.push(item.name);
    }

    Ok(names)
}

#[cfg(test)]
#[path = "dbt_test.rs"]
mod tests;
