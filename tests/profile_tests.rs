// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for loading sweep plans from disk

use pgd_sweep::attack::SweepPlan;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_json_plan() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.json");
    fs::write(
        &path,
        r#"{
  "program": "python3",
  "config_dir": "./configs/",
  "entries": ["standard_PGD_attack_n25.json", "standard_PGD_attack_n300.json"]
}"#,
    )
    .unwrap();

    let plan = SweepPlan::load(&path).expect("json plan should load");
    assert_eq!(plan.program, "python3");
    assert_eq!(plan.args, vec!["bpda_eot_attack.py"], "args keep their default");
    assert_eq!(plan.config_flag, "--config_file");
    assert_eq!(plan.entries.len(), 2);
    assert_eq!(
        plan.invocations()[1].config_path(),
        Some("./configs/standard_PGD_attack_n300.json")
    );
}

#[test]
fn test_load_yaml_plan() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.yaml");
    fs::write(
        &path,
        "args: [attack.py, --device, cpu]\nentries:\n  - a_n10.json\n",
    )
    .unwrap();

    let plan = SweepPlan::load(&path).expect("yaml plan should load");
    assert_eq!(plan.program, "python");
    assert_eq!(
        plan.invocations()[0].command_line(),
        "python attack.py --device cpu --config_file ./config_attack/a_n10.json"
    );
}

#[test]
fn test_empty_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.json");
    fs::write(&path, "{}").unwrap();

    let plan = SweepPlan::load(&path).expect("empty object uses defaults");
    assert_eq!(plan, SweepPlan::default());
}

#[test]
fn test_plan_without_entries_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.yml");
    fs::write(&path, "entries: []\n").unwrap();

    assert!(SweepPlan::load(&path).is_err());
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.toml");
    fs::write(&path, "program = \"python\"\n").unwrap();

    let err = SweepPlan::load(&path).expect_err("toml is not a plan format");
    assert!(err.to_string().contains("unsupported sweep plan extension"));
}

#[test]
fn test_missing_plan_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(SweepPlan::load(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_config_files_are_not_checked_for_existence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.json");
    fs::write(
        &path,
        r#"{"config_dir": "/definitely/not/here/", "entries": ["x_n1.json"]}"#,
    )
    .unwrap();

    assert!(SweepPlan::load(&path).is_ok());
}
