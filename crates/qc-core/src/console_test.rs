use super::*;
use std::path::PathBuf;

#[test]
fn test_table_ref_from_nested_path() {
    let models = PathBuf::from("/srv/dbt/models");
    let model = models.join("marts/finance/orders.sql");
    let table = TableRef::from_model_path(&model, &models).unwrap();
    assert_eq!(table.dataset, "marts_finance");
    assert_eq!(table.table, "orders");
}

#[test]
fn test_table_ref_deeper_nesting_joins_all_dirs() {
    let models = PathBuf::from("/srv/dbt/models");
    let model = models.join("marts/finance/daily/orders.sql");
    let table = TableRef::from_model_path(&model, &models).unwrap();
    assert_eq!(table.dataset, "marts_finance_daily");
    assert_eq!(table.table, "orders");
}

#[test]
fn test_table_ref_too_shallow() {
    let models = PathBuf::from("/srv/dbt/models");
    let model = models.join("marts/orders.sql");
    let err = TableRef::from_model_path(&model, &models).unwrap_err();
    assert!(matches!(err, CoreError::InvalidModelPath { .. }));
}

#[test]
fn test_table_ref_outside_models_dir() {
    let models = PathBuf::from("/srv/dbt/models");
    let model = PathBuf::from("/srv/dbt/target/marts/finance/orders.sql");
    let err = TableRef::from_model_path(&model, &models).unwrap_err();
    assert!(matches!(err, CoreError::InvalidModelPath { .. }));
}

#[test]
fn test_console_url() {
    let table = TableRef {
        dataset: "marts_finance".to_string(),
        table: "orders".to_string(),
    };
    let url = ConsoleUrl {
        base_url: "https://console.cloud.google.com/bigquery",
        project_id: "data-warehouse-p",
        table: &table,
    }
    .build();
    assert_eq!(
        url,
        "https://console.cloud.google.com/bigquery?p=data-warehouse-p&d=marts_finance&t=orders&page=table"
    );
}
