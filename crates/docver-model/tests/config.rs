//! File-backed tests for `SwitcherConfig`.

use std::fs;
use std::path::PathBuf;

use docver_model::{BranchList, ModelError, SwitcherConfig};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "docver-model-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir
}

#[test]
fn save_then_load_preserves_fields() {
    let dir = unique_temp_dir("save");
    let path = dir.join("nested").join("docver.toml");
    let config = SwitcherConfig {
        base_url: "https://docs.example.test/project/".to_string(),
        default_branch: "main".to_string(),
        sidebar_class: "sidebar".to_string(),
        branches: BranchList::new(["main", "release/1.x"]),
    };

    config.save_to(&path).unwrap();
    let loaded = SwitcherConfig::load_from(&path).unwrap();

    assert_eq!(loaded, config);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn load_normalizes_base_url() {
    let dir = unique_temp_dir("normalize");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("docver.toml");
    fs::write(
        &path,
        "base_url = \"https://docs.example.test/x\"\nbranches = [\"main\"]\n",
    )
    .unwrap();

    let loaded = SwitcherConfig::load_from(&path).unwrap();

    assert_eq!(loaded.base_url, "https://docs.example.test/x/");
    assert_eq!(loaded.branches, BranchList::new(["main"]));
    assert_eq!(loaded.branch_url("main"), "https://docs.example.test/x/main");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = unique_temp_dir("missing");
    let loaded = SwitcherConfig::load_or_default(&dir.join("docver.toml")).unwrap();
    assert_eq!(loaded, SwitcherConfig::default());
}

#[test]
fn malformed_file_reports_path() {
    let dir = unique_temp_dir("malformed");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("docver.toml");
    fs::write(&path, "branches = 3\n").unwrap();

    let err = SwitcherConfig::load_from(&path).unwrap_err();

    assert!(matches!(err, ModelError::ParseConfig { .. }));
    assert!(err.to_string().contains("docver.toml"));
    fs::remove_dir_all(&dir).unwrap();
}
