// anchorpatch/tests/cli_integration_tests.rs
//! Command-line integration tests for the `anchorpatch` binary.
//!
//! Each test builds a throwaway project directory with `tempfile`, runs the
//! binary through `assert_cmd`, and checks stdout, stderr and the file left
//! on disk. Output is passed through `strip_ansi_escapes` before comparison.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

use anchorpatch_core::{PatchRecipe, builtin_recipe};

const SEPARATOR: &str = "\n\n// ----\n\n";

fn anchorpatch() -> Command {
    let mut cmd = Command::cargo_bin("anchorpatch").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn strip_ansi(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes::strip(bytes)).to_string()
}

fn images(recipe: &PatchRecipe) -> (String, String) {
    let pre: Vec<&str> = recipe.rules.iter().map(|r| r.anchor.as_str()).collect();
    let post: Vec<&str> = recipe.rules.iter().map(|r| r.replacement.as_str()).collect();
    (pre.join(SEPARATOR), post.join(SEPARATOR))
}

/// Creates a project root holding the recipe's target pre-image.
fn project_for(recipe_name: &str) -> Result<(TempDir, PathBuf, String, String)> {
    let recipe = builtin_recipe(recipe_name).unwrap();
    let dir = tempdir()?;
    let target = recipe.resolve_target(dir.path());
    fs::create_dir_all(target.parent().unwrap())?;
    let (pre, post) = images(&recipe);
    fs::write(&target, &pre)?;
    Ok((dir, target, pre, post))
}

fn root_arg(dir: &Path) -> String {
    dir.to_string_lossy().to_string()
}

#[test]
fn apply_collections_rewrites_target_and_prints_done() -> Result<()> {
    let (dir, target, _, post) = project_for("collections")?;

    let assert = anchorpatch()
        .args(["apply", "collections", "--root", &root_arg(dir.path())])
        .assert()
        .success();

    assert_eq!(strip_ansi(&assert.get_output().stdout), "Done\n");
    assert_eq!(fs::read_to_string(&target)?, post);
    Ok(())
}

#[test]
fn apply_backend_rewrites_target() -> Result<()> {
    let (dir, target, _, post) = project_for("backend")?;

    anchorpatch()
        .args(["apply", "backend", "-r", &root_arg(dir.path())])
        .assert()
        .success()
        .stdout("Done\n");

    let patched = fs::read_to_string(&target)?;
    assert_eq!(patched, post);
    assert!(patched.contains("async fn increment_demo_request_count"));
    Ok(())
}

#[test]
fn apply_reports_done_even_when_nothing_matches() -> Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("unrelated.tsx");
    fs::write(&file, "export const x = 1;\n")?;

    anchorpatch()
        .args(["apply", "collections", "--target"])
        .arg(&file)
        .assert()
        .success()
        .stdout("Done\n");

    assert_eq!(fs::read_to_string(&file)?, "export const x = 1;\n");
    Ok(())
}

#[test]
fn unmatched_rules_are_logged_at_info_level_only() -> Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("unrelated.rs");
    fs::write(&file, "fn main() {}\n")?;

    let quiet = anchorpatch()
        .args(["apply", "backend", "--target"])
        .arg(&file)
        .assert()
        .success()
        .stdout("Done\n");
    assert_eq!(strip_ansi(&quiet.get_output().stderr), "");

    let verbose = anchorpatch()
        .env("RUST_LOG", "info")
        .args(["apply", "backend", "--target"])
        .arg(&file)
        .assert()
        .success()
        .stdout("Done\n");
    let stderr = strip_ansi(&verbose.get_output().stderr);
    assert!(stderr.contains("Rule 'insert-demo-counter-commands' matched nothing"), "stderr: {}", stderr);
    assert!(stderr.contains("Rule 'register-demo-counter-commands' matched nothing"), "stderr: {}", stderr);
    assert!(stderr.contains("content is identical"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn disable_debug_never_raises_verbosity() -> Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("unrelated.rs");
    fs::write(&file, "fn main() {}\n")?;

    let assert = anchorpatch()
        .env("RUST_LOG", "debug")
        .args(["--disable-debug", "apply", "backend", "--target"])
        .arg(&file)
        .assert()
        .success()
        .stdout("Done\n");

    let stderr = strip_ansi(&assert.get_output().stderr);
    assert!(!stderr.contains("[DEBUG"), "stderr: {}", stderr);
    assert!(!stderr.contains("[INFO"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn apply_missing_target_fails_without_done() -> Result<()> {
    let dir = tempdir()?;

    let assert = anchorpatch()
        .args(["apply", "backend", "--root", &root_arg(dir.path())])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Done").not());

    let stderr = strip_ansi(&assert.get_output().stderr);
    assert!(stderr.contains("Failed to apply recipe 'backend'"), "stderr: {}", stderr);
    assert!(stderr.contains("Failed to read"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn strict_apply_fails_and_keeps_file() -> Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("lib.rs");
    fs::write(&file, "/// Entry point for the Tauri application.\n")?;

    let assert = anchorpatch()
        .args(["apply", "backend", "--strict", "--target"])
        .arg(&file)
        .assert()
        .failure();

    let stderr = strip_ansi(&assert.get_output().stderr);
    assert!(stderr.contains("register-demo-counter-commands"), "stderr: {}", stderr);
    assert_eq!(
        fs::read_to_string(&file)?,
        "/// Entry point for the Tauri application.\n"
    );
    Ok(())
}

#[test]
fn dry_run_with_diff_prints_changes_only() -> Result<()> {
    let (dir, target, pre, _) = project_for("collections")?;

    let assert = anchorpatch()
        .args(["apply", "collections", "--dry-run", "--diff", "--root", &root_arg(dir.path())])
        .assert()
        .success();

    let stdout = strip_ansi(&assert.get_output().stdout);
    assert!(stdout.contains("--- Diff View ---"));
    assert!(stdout.contains("-const { user } = useAuth();"));
    assert!(stdout.contains("+const { user, isDemo } = useAuth();"));
    assert!(stdout.ends_with("Done\n"));
    assert_eq!(fs::read_to_string(&target)?, pre);
    Ok(())
}

#[test]
fn summary_lists_each_rule_on_stderr() -> Result<()> {
    let (dir, _, _, _) = project_for("backend")?;

    let assert = anchorpatch()
        .args(["apply", "backend", "--summary", "--skip", "register-demo-counter-commands"])
        .args(["--root", &root_arg(dir.path())])
        .assert()
        .success();

    let stderr = strip_ansi(&assert.get_output().stderr);
    assert!(stderr.contains("--- Patch Summary ---"));
    assert!(stderr.contains("insert-demo-counter-commands (1 occurrences)"));
    assert!(!stderr.contains("register-demo-counter-commands"));
    assert!(stderr.contains("1 of 1 rules applied."));
    Ok(())
}

#[test]
fn recipe_file_and_report() -> Result<()> {
    let dir = tempdir()?;
    let recipe_path = dir.path().join("recipe.yaml");
    fs::write(
        &recipe_path,
        r#"name: custom
target: notes.txt
rules:
  - name: first
    anchor: "TODO"
    replacement: "DONE"
  - name: second
    anchor: "DONE DONE"
    replacement: "ALL DONE"
  - name: absent
    anchor: "nowhere"
    replacement: "x"
"#,
    )?;
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "TODO TODO\n")?;
    let report = dir.path().join("report.json");

    anchorpatch()
        .args(["apply", "--recipe-file"])
        .arg(&recipe_path)
        .args(["--root", &root_arg(dir.path()), "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout("Done\n");

    assert_eq!(fs::read_to_string(&notes)?, "ALL DONE\n");

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report)?)?;
    assert_eq!(json["recipe"], "custom");
    assert_eq!(json["written"], true);
    assert_eq!(json["rules"][0]["occurrences"], 2);
    assert_eq!(json["rules"][1]["occurrences"], 1);
    assert_eq!(json["rules"][2]["occurrences"], 0);
    Ok(())
}

#[test]
fn list_prints_builtin_recipes() {
    anchorpatch()
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("collections")
                .and(predicate::str::contains("backend"))
                .and(predicate::str::contains("src-tauri/src/lib.rs")),
        );
}

#[test]
fn show_unknown_recipe_fails() {
    anchorpatch()
        .args(["show", "no-such-recipe-anywhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown recipe 'no-such-recipe-anywhere'"));
}
