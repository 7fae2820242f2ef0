//! Integration tests for querycost
//!
//! Exercises the resolution pipeline against an on-disk fixture project:
//! config loading, compiled-SQL discovery, model loading, and console URL
//! derivation. Subprocess invocation of dbt/bq is not covered here.

use qc_core::{
    find_model_file, parse_dry_run_response, Config, ConsoleUrl, CoreError, Model, ModelName,
    TableRef,
};
use std::fs;
use std::path::Path;

/// Build a dbt-project-shaped fixture under `root`.
fn write_fixture_project(root: &Path) {
    let target = root.join("dbt/target/compiled/analytics/models");
    let models = root.join("dbt/models");

    fs::create_dir_all(target.join("staging/finance")).unwrap();
    fs::create_dir_all(target.join("marts/finance")).unwrap();
    fs::write(
        target.join("staging/finance/stg_orders.sql"),
        "select * from raw.orders",
    )
    .unwrap();
    fs::write(
        target.join("marts/finance/fct_orders.sql"),
        "-- daily grain\nselect * from stg_orders",
    )
    .unwrap();

    let model_src = models.join("marts/finance/fct_orders.sql");
    fs::create_dir_all(model_src.parent().unwrap()).unwrap();
    fs::write(&model_src, "select * from {{ ref('stg_orders') }}").unwrap();

    fs::write(
        root.join("querycost.yml"),
        format!(
            "dbt_dir: {}\nproject_id: data-warehouse-p\n",
            root.join("dbt").display()
        ),
    )
    .unwrap();
}

#[test]
fn test_load_fixture_config() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture_project(tmp.path());

    let config = Config::load_from_dir(tmp.path()).unwrap();
    assert_eq!(config.target_path, "target");
    assert_eq!(config.require_project_id().unwrap(), "data-warehouse-p");
    assert_eq!(config.target_dir().unwrap(), tmp.path().join("dbt/target"));
}

#[test]
fn test_resolve_and_load_compiled_model() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture_project(tmp.path());
    let config = Config::load_from_dir(tmp.path()).unwrap();

    let name = ModelName::new("fct_orders");
    let path = find_model_file(&name, &config.target_dir().unwrap()).unwrap();
    assert!(path.ends_with("marts/finance/fct_orders.sql"));

    let model = Model::load(name, &path).unwrap();
    // Leading comment lines survive intact; they are why the SQL is piped
    // to bq on stdin rather than as an argument
    assert!(model.sql.starts_with("-- daily grain"));
}

#[test]
fn test_missing_model_reports_search_dir() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture_project(tmp.path());
    let config = Config::load_from_dir(tmp.path()).unwrap();

    let name = ModelName::new("dim_customers");
    let err = find_model_file(&name, &config.target_dir().unwrap()).unwrap_err();
    match err {
        CoreError::ModelNotFound { name, search_dir } => {
            assert_eq!(name, "dim_customers");
            assert!(search_dir.contains("target"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_source_model_maps_to_console_url() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture_project(tmp.path());
    let config = Config::load_from_dir(tmp.path()).unwrap();

    let models_dir = config.model_dirs().unwrap().remove(0);
    let name = ModelName::new("fct_orders");
    let path = find_model_file(&name, &models_dir).unwrap();

    let table = TableRef::from_model_path(&path, &models_dir).unwrap();
    let url = ConsoleUrl {
        base_url: &config.console_base_url,
        project_id: config.require_project_id().unwrap(),
        table: &table,
    }
    .build();
    assert_eq!(
        url,
        "https://console.cloud.google.com/bigquery?p=data-warehouse-p&d=marts_finance&t=fct_orders&page=table"
    );
}

#[test]
fn test_dry_run_response_end_to_end_shape() {
    // A representative bq --dry_run --format=json payload
    let json = r#"{
        "configuration": {"query": {"useLegacySql": false}, "dryRun": true},
        "statistics": {
            "query": {
                "totalBytesProcessed": "1261154",
                "statementType": "SELECT"
            }
        },
        "status": {"state": "DONE"}
    }"#;
    assert_eq!(parse_dry_run_response(json).unwrap(), 1_261_154);
}
