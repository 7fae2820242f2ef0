//! Compile command implementation

use anyhow::{bail, Result};
use qc_core::DbtArgs;

use crate::cli::{CompileArgs, GlobalArgs};
use crate::commands::common::{load_config, log_verbose};
use crate::commands::process::{check_poetry_available, run_dbt};

/// Execute the compile command
pub async fn execute(args: &CompileArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let dbt_dir = config.dbt_dir_resolved()?;
    log_verbose(global.verbose, format!("Using dbt folder: {}", dbt_dir.display()));

    check_poetry_available()?;

    let dbt_args = DbtArgs::new("compile")
        .select(&args.select)
        .defer(args.defer, &config.defer_state)
        .empty(args.empty)
        .build();

    let out = run_dbt(&dbt_dir, &dbt_args, global.verbose).await?;
    if !out.success {
        bail!(
            "dbt compile failed (exit {}):\n{}",
            out.exit_code,
            out.error_detail()
        );
    }

    if global.verbose {
        eprintln!("{}", out.stdout);
    }
    println!("Compiled selection: {}", args.select.join(", "));

    Ok(())
}
