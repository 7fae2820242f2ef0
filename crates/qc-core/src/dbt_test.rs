use super::*;

#[test]
fn test_build_bare_command() {
    let args = DbtArgs::new("compile").build();
    assert_eq!(args, vec!["compile"]);
}

#[test]
fn test_build_with_select() {
    let args = DbtArgs::new("compile")
        .select(&["stg_orders".to_string(), "fct_orders".to_string()])
        .build();
    assert_eq!(args, vec!["compile", "--select", "stg_orders", "fct_orders"]);
}

#[test]
fn test_build_with_defer() {
    let args = DbtArgs::new("compile")
        .select(&["stg_orders".to_string()])
        .defer(true, "target_prod")
        .build();
    assert_eq!(
        args,
        vec![
            "compile",
            "--select",
            "stg_orders",
            "--defer",
            "--state",
            "target_prod",
            "--favor-state",
        ]
    );
}

#[test]
fn test_build_with_empty_flag() {
    let args = DbtArgs::new("run").empty(true).build();
    assert_eq!(args, vec!["run", "--empty"]);
}

#[test]
fn test_build_ls_appends_output_flags() {
    let args = DbtArgs::new("ls")
        .select(&["stg_orders".to_string()])
        .build_ls();
    assert_eq!(
        args,
        vec![
            "ls",
            "--select",
            "stg_orders",
            "--resource-type",
            "model",
            "--output",
            "json",
            "--output-keys",
            "name",
            "--quiet",
        ]
    );
}

#[test]
fn test_parse_ls_names() {
    let out = "{\"name\": \"stg_orders\"}\n\n{\"name\": \"fct_orders\"}\n";
    let names = parse_ls_names(out).unwrap();
    assert_eq!(names, vec!["stg_orders", "fct_orders"]);
}

#[test]
fn test_parse_ls_names_empty_output() {
    assert!(parse_ls_names("").unwrap().is_empty());
    assert!(parse_ls_names("\n  \n").unwrap().is_empty());
}

#[test]
fn test_parse_ls_names_malformed_line() {
    let err = parse_ls_names("{\"name\": \"ok\"}\nnot json\n").unwrap_err();
    assert!(matches!(err, CoreError::DbtLsOutput { .. }));
}
