//! Integration tests for scaffolder
//!
//! These tests verify end-to-end behavior of the loader, emitter, and CLI.

use std::fs;

use assert_cmd::Command as CliCommand;
use predicates::prelude::*;
use tempfile::TempDir;

use scaffolder::config::Config;
use scaffolder::emitter::{self, EmitOptions};
use scaffolder::error::ScaffoldError;
use scaffolder::templates::{self, TemplateLoader};

// =============================================================================
// Emitter Tests
// =============================================================================

#[test]
fn test_emit_round_trip_identity() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let dest = temp.path().join("output.txt");

    let emitted = emitter::emit("hello", &dest, &EmitOptions::default()).expect("Failed to emit");

    assert_eq!(emitted.bytes, 5);
    assert_eq!(fs::read_to_string(&dest).expect("Failed to read back"), "hello");
}

#[test]
fn test_emit_into_missing_directory_leaves_nothing() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let dest = temp.path().join("missing_dir").join("output.txt");

    let result = emitter::emit("hello", &dest, &EmitOptions::default());

    assert!(result.is_err(), "Write into a missing directory should fail");
    assert!(!dest.exists(), "No file should be created on failure");
    assert!(!temp.path().join("missing_dir").exists(), "No directory should be created either");
}

#[test]
fn test_emit_twice_keeps_last_content() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let dest = temp.path().join("output.txt");

    emitter::emit("first write, longer content", &dest, &EmitOptions::default()).expect("First write failed");
    emitter::emit("second", &dest, &EmitOptions::default()).expect("Second write failed");

    assert_eq!(fs::read_to_string(&dest).expect("Failed to read back"), "second");
}

// =============================================================================
// Scaffold Tests
// =============================================================================

#[test]
fn test_scaffold_full_catalog() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let loader = TemplateLoader::embedded_only();

    let written = emitter::scaffold(&loader, temp.path()).expect("Scaffold failed");
    assert_eq!(written.len(), templates::catalog().len());

    for template in templates::catalog() {
        let path = temp.path().join(template.relative_path);
        let on_disk = fs::read_to_string(&path).expect("Scaffolded file missing");
        let resolved = loader.load(template.name).expect("Template should resolve");
        assert_eq!(on_disk, resolved, "Content mismatch for {}", template.name);
    }
}

#[test]
fn test_scaffold_respects_overrides() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let override_dir = temp.path().join("overrides");
    fs::create_dir_all(&override_dir).expect("Failed to create override dir");
    fs::write(override_dir.join("folder-types.tpl"), "export {}\n").expect("Failed to write override");

    let loader = TemplateLoader::with_override_dir(Some(override_dir));
    let root = temp.path().join("out");
    emitter::scaffold(&loader, &root).expect("Scaffold failed");

    let types = fs::read_to_string(root.join("types/folders.ts")).expect("Missing types file");
    assert_eq!(types, "export {}\n");

    // Unshadowed templates still come from the embedded catalog
    let menu = fs::read_to_string(root.join("components/folders/folder-context-menu.tsx")).expect("Missing menu file");
    assert!(menu.contains("FolderContextMenu"));
}

// =============================================================================
// Loader Tests
// =============================================================================

#[test]
fn test_loader_unknown_name() {
    let loader = TemplateLoader::embedded_only();

    let result = loader.load("sidebar");
    assert!(matches!(result, Err(ScaffoldError::UnknownTemplate { .. })));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_drives_scaffold_root() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp.path().join("config.yml");
    let out_root = temp.path().join("frontend");
    fs::write(
        &config_path,
        format!("output_root: {}\n", out_root.display()),
    )
    .expect("Failed to write config");

    let config = Config::load(Some(&config_path)).expect("Failed to load config");
    assert_eq!(config.output_root, out_root);

    let loader = TemplateLoader::with_override_dir(config.template_dir.clone());
    emitter::scaffold(&loader, &config.output_root).expect("Scaffold failed");
    assert!(out_root.join("lib/utils.ts").exists());
}

// =============================================================================
// CLI Tests
// =============================================================================

#[test]
fn test_cli_list_names_catalog() {
    let mut cmd = CliCommand::cargo_bin("sc").expect("Binary should build");
    cmd.arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("folder-context-menu"))
        .stdout(predicate::str::contains("cn-util"));
}

#[test]
fn test_cli_emit_writes_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let dest = temp.path().join("menu.tsx");

    let mut cmd = CliCommand::cargo_bin("sc").expect("Binary should build");
    cmd.args(["emit", "folder-context-menu"]).arg(&dest);
    cmd.assert().success();

    let content = fs::read_to_string(&dest).expect("Emitted file missing");
    assert!(content.contains("FolderContextMenu"));
}

#[test]
fn test_cli_emit_unknown_template_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let dest = temp.path().join("out.tsx");

    let mut cmd = CliCommand::cargo_bin("sc").expect("Binary should build");
    cmd.args(["emit", "sidebar"]).arg(&dest);

    cmd.assert().failure();
    assert!(!dest.exists());
}
