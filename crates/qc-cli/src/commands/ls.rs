//! List command implementation

use anyhow::{bail, Context, Result};
use qc_core::dbt::parse_ls_names;
use qc_core::DbtArgs;

use crate::cli::{GlobalArgs, LsArgs, LsOutput};
use crate::commands::common::{load_config, log_verbose};
use crate::commands::process::{check_poetry_available, run_dbt};

/// Execute the ls command
pub async fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let dbt_dir = config.dbt_dir_resolved()?;
    log_verbose(global.verbose, format!("Using dbt folder: {}", dbt_dir.display()));

    check_poetry_available()?;

    let dbt_args = DbtArgs::new("ls").select(&args.select).build_ls();
    let out = run_dbt(&dbt_dir, &dbt_args, global.verbose).await?;
    if !out.success {
        bail!(
            "dbt ls failed (exit {}):\n{}",
            out.exit_code,
            out.error_detail()
        );
    }

    let names = parse_ls_names(&out.stdout)?;

    match args.output {
        LsOutput::Names => {
            for name in &names {
                println!("{}", name);
            }
            println!("\n{} models found", names.len());
        }
        LsOutput::Json => {
            let json =
                serde_json::to_string_pretty(&names).context("Failed to serialize to JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}
