//! Open command implementation

use anyhow::{Context, Result};
use qc_core::{find_model_file_in_dirs, ConsoleUrl, ModelName, TableRef};

use crate::cli::{GlobalArgs, OpenArgs};
use crate::commands::common::{load_config, log_verbose};

/// Execute the open command
pub async fn execute(args: &OpenArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let name = ModelName::new(args.select.clone());

    // The matching models directory is needed to derive the table reference
    let (model_path, models_dir) = find_model_file_in_dirs(&name, &config.model_dirs()?)?;
    log_verbose(
        global.verbose,
        format!("Found model {} at {}", name, model_path.display()),
    );

    let table = TableRef::from_model_path(&model_path, &models_dir)?;
    let url = ConsoleUrl {
        base_url: &config.console_base_url,
        project_id: config.require_project_id()?,
        table: &table,
    }
    .build();
    log_verbose(global.verbose, format!("Console URL: {}", url));

    println!("Opening {} in browser", table.table);
    ::open::that(&url).with_context(|| format!("Failed to open browser for {}", url))?;

    Ok(())
}
