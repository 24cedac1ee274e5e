//! End-to-end tests for the freshkit binary.
//!
//! Every scaffold invocation passes `--name` so no interactive prompt
//! fires, and `--workspace` so nothing touches the real working
//! directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn freshkit() -> Command {
    Command::cargo_bin("freshkit").unwrap()
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    freshkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn version_matches_cargo() {
    freshkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── detect ────────────────────────────────────────────────────────────────────

#[test]
fn detect_reports_fresh_project() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("fresh.gen.ts"), "// generated").unwrap();

    freshkit()
        .args(["detect", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh project detected"));
}

#[test]
fn detect_reports_non_fresh_directory() {
    let temp = TempDir::new().unwrap();

    freshkit()
        .args(["detect", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Not a Fresh project"));
}

#[test]
fn detect_json_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("fresh.gen.ts"), "").unwrap();

    freshkit()
        .args(["detect", "--output-format", "json", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fresh_project\":true"));
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn generate_section_writes_substituted_template() {
    let temp = TempDir::new().unwrap();

    freshkit()
        .args(["generate", "section", "--name", "product-shelf", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File created"));

    let content = fs::read_to_string(temp.path().join("sections/product-shelf.tsx")).unwrap();
    assert!(content.contains("export default function ProductShelf()"));
    assert!(!content.contains("__FILENAME__"));
}

#[test]
fn generate_loader_uses_ts_extension() {
    let temp = TempDir::new().unwrap();

    freshkit()
        .args(["generate", "loader", "--name", "products", "--workspace"])
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("loaders/products.ts").exists());
}

#[test]
fn generate_into_explicit_folder() {
    let temp = TempDir::new().unwrap();

    freshkit()
        .args([
            "generate",
            "island",
            "ui/widgets",
            "--name",
            "counter",
            "--workspace",
        ])
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("ui/widgets/counter.tsx").exists());
}

#[test]
fn generate_refuses_existing_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("components")).unwrap();
    fs::write(temp.path().join("components/hero.tsx"), "original").unwrap();

    freshkit()
        .args(["generate", "component", "--name", "hero", "--workspace"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    // Untouched.
    assert_eq!(
        fs::read_to_string(temp.path().join("components/hero.tsx")).unwrap(),
        "original"
    );
}

#[test]
fn generate_rejects_missing_workspace() {
    freshkit()
        .args([
            "generate",
            "component",
            "--name",
            "hero",
            "--workspace",
            "/definitely/not/here",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no workspace"));
}

// ── export / route ────────────────────────────────────────────────────────────

#[test]
fn export_section_wraps_module() {
    let temp = TempDir::new().unwrap();

    freshkit()
        .args(["export", "section", "--name", "Gallery", "--workspace"])
        .arg(temp.path())
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("sections/Gallery.tsx")).unwrap();
    assert!(content.contains(r#"export { default } from "./Gallery""#));
}

#[test]
fn route_list_names_templates() {
    freshkit()
        .args(["route", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dynamic route"))
        .stdout(predicate::str::contains("Handler route"));
}

#[test]
fn route_new_scaffolds_into_routes() {
    let temp = TempDir::new().unwrap();

    freshkit()
        .args(["route", "new", "Dynamic", "--name", "greet", "--workspace"])
        .arg(temp.path())
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("routes/greet.tsx")).unwrap();
    assert!(content.contains("export default function Greet(props: PageProps)"));
}

#[test]
fn route_new_unknown_template_exits_not_found() {
    let temp = TempDir::new().unwrap();

    freshkit()
        .args(["route", "new", "graphql", "--name", "x", "--workspace"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("no route template"));
}

// ── complete ──────────────────────────────────────────────────────────────────

#[test]
fn complete_inside_comment_offers_annotations() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("section.tsx");
    fs::write(&file, "/**\n * @\n */\nexport interface Props {}\n").unwrap();

    freshkit()
        .args(["complete"])
        .arg(&file)
        .args(["--line", "1", "--character", "4", "--provider", "annotation", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("title"))
        .stdout(predicate::str::contains("deprecated"));
}

#[test]
fn complete_outside_comment_is_empty() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.tsx");
    fs::write(&file, "const a = 1;\n").unwrap();

    freshkit()
        .args(["complete"])
        .arg(&file)
        .args(["--line", "0", "--character", "5", "--provider", "annotation", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No completions"));
}

#[test]
fn complete_options_reads_manifest() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("manifest.gen.ts"),
        r#"export default { "loaders": {"a/b.ts": a, "c/d.ts": b} };"#,
    )
    .unwrap();
    let file = temp.path().join("section.tsx");
    fs::write(&file, "/** @options */\n").unwrap();

    freshkit()
        .args(["complete"])
        .arg(&file)
        .args(["--line", "0", "--character", "12", "--provider", "options", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a/b.ts"))
        .stdout(predicate::str::contains("c/d.ts"));
}

#[test]
fn complete_options_without_manifest_degrades_to_empty() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("section.tsx");
    fs::write(&file, "/** @options */\n").unwrap();

    freshkit()
        .args(["complete"])
        .arg(&file)
        .args(["--line", "0", "--character", "12", "--provider", "options", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No completions"));
}

#[test]
fn complete_json_output_is_parseable() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("section.tsx");
    fs::write(&file, "/** @format */\n").unwrap();

    let assert = freshkit()
        .args(["complete"])
        .arg(&file)
        .args([
            "--line",
            "0",
            "--character",
            "11",
            "--provider",
            "format",
            "--output-format",
            "json",
            "--workspace",
        ])
        .arg(temp.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let items: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let labels: Vec<_> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["label"].as_str().unwrap().to_string())
        .collect();
    assert!(labels.contains(&"color".to_string()));
    assert!(labels.contains(&"button-group".to_string()));
}

#[test]
fn complete_missing_file_exits_not_found() {
    freshkit()
        .args(["complete", "/no/such/file.tsx"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Cannot read"));
}
