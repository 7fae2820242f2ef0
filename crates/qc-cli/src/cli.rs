//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// querycost - estimate BigQuery cost of dbt models before running them
#[derive(Parser, Debug)]
#[command(name = "qc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override the dbt project directory from config
    #[arg(short, long, global = true)]
    pub dbt_dir: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dry run selected models and report bytes scanned
    DryRun(DryRunArgs),

    /// Compile selected models via dbt
    Compile(CompileArgs),

    /// List models matching a dbt selector
    Ls(LsArgs),

    /// Open a model's table in the BigQuery console
    Open(OpenArgs),
}

/// Arguments for the dry-run command
#[derive(Args, Debug)]
pub struct DryRunArgs {
    /// Models to dry run (comma-separated, dbt selector syntax allowed)
    #[arg(short, long, required = true, value_delimiter = ',', value_name = "MODELS")]
    pub select: Vec<String>,

    /// Additional model names
    #[arg(value_name = "MODEL")]
    pub models: Vec<String>,

    /// Compile the selected models before dry running
    #[arg(short, long)]
    pub compile: bool,

    /// Defer unselected references to the production state
    #[arg(long)]
    pub defer: bool,

    /// Pass --empty to dbt so compiled models reference no rows
    #[arg(long)]
    pub empty: bool,
}

impl DryRunArgs {
    /// Selected models plus any trailing positional names.
    pub fn selection(&self) -> Vec<String> {
        let mut models = self.select.clone();
        models.extend(self.models.iter().cloned());
        models
    }
}

/// Arguments for the compile command
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Models to compile (comma-separated, dbt selector syntax allowed)
    #[arg(short, long, required = true, value_delimiter = ',', value_name = "MODELS")]
    pub select: Vec<String>,

    /// Defer unselected references to the production state
    #[arg(long)]
    pub defer: bool,

    /// Pass --empty to dbt so compiled models reference no rows
    #[arg(long)]
    pub empty: bool,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// dbt selector to filter models (default: all models)
    #[arg(short, long, value_delimiter = ',', value_name = "MODELS")]
    pub select: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "names")]
    pub output: LsOutput,
}

/// List output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsOutput {
    /// One model name per line
    Names,
    /// JSON array of names
    Json,
}

/// Arguments for the open command
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Model to open in the BigQuery console
    #[arg(short, long, value_name = "MODEL")]
    pub select: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
