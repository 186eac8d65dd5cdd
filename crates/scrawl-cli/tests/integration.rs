//! Integration tests for scrawl CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn scrawl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scrawl"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// A scratch file path unique to this test.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scrawl-test-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir.join(name)
}

/// Write the example scene to a scratch file and return its path.
fn example_scene(name: &str) -> PathBuf {
    let output = scrawl(&["example"]);
    assert!(output.status.success());
    let path = scratch(name);
    fs::write(&path, &output.stdout).expect("Failed to write scene");
    path
}

#[test]
fn styles_command_lists_all_styles() {
    let output = scrawl(&["styles"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    for name in [
        "hachure",
        "solid",
        "zigzag",
        "cross-hatch",
        "dots",
        "dashed",
        "dot-dash",
        "zigzag-line",
    ] {
        assert!(stdout.contains(name), "Should list '{}'", name);
    }
}

#[test]
fn render_command_produces_svg() {
    let scene = example_scene("render.yaml");
    let output = scrawl(&["render", scene.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<svg"), "Should have SVG element");
    assert!(stdout.contains("<path d=\"M"), "Should have path elements");
    assert!(stdout.contains("id=\"box\""), "Should carry shape ids");
    assert!(stdout.trim_end().ends_with("</svg>"), "Should close SVG element");
}

#[test]
fn render_command_produces_json() {
    let scene = example_scene("json.yaml");
    let output = scrawl(&["render", scene.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success());

    let drawables: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    let drawables = drawables.as_array().expect("Should be an array");
    assert_eq!(drawables.len(), 6);
    assert_eq!(drawables[0]["shape"], "rectangle");
    assert_eq!(drawables[0]["sets"][0]["kind"], "fillSketch");
}

#[test]
fn render_is_reproducible_and_seedable() {
    let scene = example_scene("seed.yaml");
    let path = scene.to_str().unwrap();
    let first = scrawl(&["render", path]);
    let second = scrawl(&["render", path]);
    let reseeded = scrawl(&["render", path, "--seed", "3"]);

    assert_eq!(first.stdout, second.stdout, "Same seed should give same SVG");
    assert_ne!(first.stdout, reseeded.stdout, "New seed should change the SVG");
}

#[test]
fn render_writes_output_file() {
    let scene = example_scene("file.yaml");
    let out = scratch("file.svg");
    let output = scrawl(&["render", scene.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    assert!(output.status.success());

    let svg = fs::read_to_string(&out).expect("Output file should exist");
    assert!(svg.contains("</svg>"));
}

#[test]
fn render_reports_missing_scene() {
    let output = scrawl(&["render", "does-not-exist.yaml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.yaml"), "Should name the file: {}", stderr);
}

#[test]
fn render_rejects_unknown_extension() {
    let path = scratch("scene.toml");
    fs::write(&path, "canvas = 1").unwrap();
    let output = scrawl(&["render", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unsupported scene format"));
}

#[test]
fn swatches_command_covers_every_style() {
    let output = scrawl(&["swatches", "--gap", "6", "--angle", "-30"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(">dot-dash</text>"));
    assert!(stdout.contains(">zigzag-line</text>"));
}

#[test]
fn help_command_shows_usage() {
    let output = scrawl(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("render"), "Should mention render command");
    assert!(stdout.contains("styles"), "Should mention styles command");
    assert!(stdout.contains("swatches"), "Should mention swatches command");
}
