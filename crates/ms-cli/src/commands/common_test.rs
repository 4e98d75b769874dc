use super::*;
use crate::cli::OrderingArg;
use ms_core::SortMode;
use std::fs;
use tempfile::tempdir;

fn global(config: Option<std::path::PathBuf>) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        config,
    }
}

#[test]
fn test_load_config_defaults() {
    let config = load_config(&global(None), &ScaffoldArgs::default()).unwrap();
    assert_eq!(config, ScaffoldConfig::default());
}

#[test]
fn test_flags_override_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("migseq.yml");
    fs::write(&path, "width: 5\nordering: numeric\n").unwrap();

    let args = ScaffoldArgs {
        width: Some(4),
        ordering: Some(OrderingArg::Lexical),
        legacy_report_order: true,
        ..ScaffoldArgs::default()
    };
    let config = load_config(&global(Some(path)), &args).unwrap();

    assert_eq!(config.width, 4);
    assert_eq!(config.ordering, SortMode::Lexical);
    assert_eq!(config.report, ReportTiming::BeforeCreate);
}

#[test]
fn test_file_values_used_without_flags() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("migseq.yml");
    fs::write(&path, "ordering: numeric\nreport: before_create\n").unwrap();

    let config = load_config(&global(Some(path)), &ScaffoldArgs::default()).unwrap();

    assert_eq!(config.width, 3);
    assert_eq!(config.ordering, SortMode::Numeric);
    assert_eq!(config.report, ReportTiming::BeforeCreate);
}

#[test]
fn test_zero_width_flag_rejected() {
    let args = ScaffoldArgs {
        width: Some(0),
        ..ScaffoldArgs::default()
    };
    let err = load_config(&global(None), &args).unwrap_err();
    assert_eq!(exit_code_for(&err), 2);
}

#[test]
fn test_exit_code_for_control_flow() {
    let err: anyhow::Error = ExitCode(1).into();
    assert_eq!(exit_code_for(&err), 1);
    assert_eq!(err.to_string(), "");
}

#[test]
fn test_exit_code_for_scaffold_errors() {
    let err: anyhow::Error = ScaffoldError::MigrationAlreadyExists {
        name: "004".to_string(),
    }
    .into();
    assert_eq!(exit_code_for(&err), 5);

    let err: anyhow::Error = ScaffoldError::InvalidMigrationFormat {
        entry: "abc-foo".to_string(),
        reason: "no digits".to_string(),
    }
    .into();
    assert_eq!(exit_code_for(&err), 4);
}

#[test]
fn test_exit_code_for_other_errors() {
    let err = anyhow::anyhow!("something else");
    assert_eq!(exit_code_for(&err), 1);
}
