//! Dry-run command implementation

use anyhow::{bail, Context, Result};
use qc_core::{
    find_model_file, format_bytes, parse_dry_run_response, DbtArgs, DryRunResult, Model, ModelName,
};
use std::time::Instant;

use crate::cli::{DryRunArgs, GlobalArgs};
use crate::commands::common::{load_config, log_verbose, ExitCode};
use crate::commands::process::{check_bq_available, check_poetry_available, run_bq_dry_run, run_dbt};

/// Execute the dry-run command
pub async fn execute(args: &DryRunArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let dbt_dir = config.dbt_dir_resolved()?;
    log_verbose(global.verbose, format!("Using dbt folder: {}", dbt_dir.display()));

    check_poetry_available()?;
    check_bq_available()?;

    let selection = args.selection();
    log_verbose(global.verbose, format!("Selected models: {:?}", selection));

    // Expand dbt selector syntax into concrete model names
    let ls_args = DbtArgs::new("ls").select(&selection).build_ls();
    let ls_out = run_dbt(&dbt_dir, &ls_args, global.verbose).await?;
    if !ls_out.success {
        bail!(
            "dbt ls failed (exit {}):\n{}",
            ls_out.exit_code,
            ls_out.error_detail()
        );
    }
    let model_names = qc_core::dbt::parse_ls_names(&ls_out.stdout)?;
    if model_names.is_empty() {
        bail!("No models matched the selection {:?}", selection);
    }
    log_verbose(global.verbose, format!("Resolved models: {:?}", model_names));

    if args.compile {
        let compile_args = DbtArgs::new("compile")
            .select(&selection)
            .defer(args.defer, &config.defer_state)
            .empty(args.empty)
            .build();
        let out = run_dbt(&dbt_dir, &compile_args, global.verbose).await?;
        if !out.success {
            bail!(
                "dbt compile failed (exit {}):\n{}",
                out.exit_code,
                out.error_detail()
            );
        }
        log_verbose(global.verbose, "Compile finished");
    }

    let target_dir = config.target_dir()?;
    println!("Dry running {} models...\n", model_names.len());

    let mut results: Vec<DryRunResult> = Vec::with_capacity(model_names.len());
    for name in model_names {
        // dbt ls output is untrusted; a blank name means malformed output
        let name = ModelName::try_new(name).context("dbt ls returned an empty model name")?;
        let path = find_model_file(&name, &target_dir)?;
        let model = Model::load(name.clone(), &path)?;
        log_verbose(
            global.verbose,
            format!("Loaded {} from {}", name, path.display()),
        );

        let start = Instant::now();
        let out = run_bq_dry_run(&model.sql, global.verbose).await?;
        let duration = start.elapsed().as_secs_f64();

        let result = if out.success {
            let bytes = parse_dry_run_response(&out.stdout)
                .with_context(|| format!("Unexpected bq response for model: {}", name))?;
            println!("  \u{2713} {} ({})", name, format_bytes(bytes));
            DryRunResult::success(name, bytes, duration)
        } else {
            println!("  \u{2717} {}", name);
            DryRunResult::error(name, out.error_detail().trim().to_string(), duration)
        };
        results.push(result);
    }

    println!("\n{}", render_summary(&results));

    if results.iter().any(|r| !r.is_success()) {
        return Err(ExitCode(1).into());
    }
    Ok(())
}

/// Render the summary table and totals line.
fn render_summary(results: &[DryRunResult]) -> String {
    let name_width = results
        .iter()
        .map(|r| r.model.len())
        .max()
        .unwrap_or(5)
        .max(5);
    let status_width = 7;
    let bytes_width = 12;

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:<status_width$}  {:>bytes_width$}  NOTE\n",
        "MODEL",
        "STATUS",
        "BYTES",
        name_width = name_width,
        status_width = status_width,
        bytes_width = bytes_width
    ));
    out.push_str(&format!(
        "{:-<name_width$}  {:-<status_width$}  {:-<bytes_width$}  {}\n",
        "",
        "",
        "",
        "-".repeat(20),
        name_width = name_width,
        status_width = status_width,
        bytes_width = bytes_width
    ));

    for result in results {
        let bytes_str = result
            .bytes_processed
            .map(format_bytes)
            .unwrap_or_else(|| "-".to_string());
        let note = result
            .error
            .as_deref()
            .and_then(|e| e.lines().next())
            .unwrap_or("-");
        out.push_str(&format!(
            "{:<name_width$}  {:<status_width$}  {:>bytes_width$}  {}\n",
            result.model.as_str(),
            result.status.to_string(),
            bytes_str,
            note,
            name_width = name_width,
            status_width = status_width,
            bytes_width = bytes_width
        ));
    }

    let total_bytes: i64 = results.iter().filter_map(|r| r.bytes_processed).sum();
    let failed = results.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        out.push_str(&format!(
            "\n{} models, {} to be scanned, {} failed",
            results.len(),
            format_bytes(total_bytes),
            failed
        ));
    } else {
        out.push_str(&format!(
            "\n{} models, {} to be scanned",
            results.len(),
            format_bytes(total_bytes)
        ));
    }
    out
}

#[cfg(test)]
#[path = "dry_run_test.rs"]
mod tests;
