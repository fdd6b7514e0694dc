#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn blog_cmd(root: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("scriptorium"));
    cmd.env("SCRIPTORIUM_ROOT", root.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn meta_json(root: &TempDir) -> serde_json::Value {
    let raw = fs::read(root.path().join("articles").join("meta.json")).unwrap();
    serde_json::from_slice(&raw).unwrap()
}

fn only_id(root: &TempDir) -> String {
    meta_json(root)[0]["id"].as_str().unwrap().to_string()
}

#[test]
fn test_new_then_list_and_view() {
    let root = TempDir::new().unwrap();

    blog_cmd(&root)
        .args(["new", "Hello", "# Hi there"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Article created"));

    let id = only_id(&root);

    blog_cmd(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello").and(predicate::str::contains(id.as_str())));

    blog_cmd(&root)
        .args(["view", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Hi there"));
}

#[test]
fn test_list_empty_store() {
    let root = TempDir::new().unwrap();
    blog_cmd(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("No articles found."));
    assert!(root.path().join("articles").join("meta.json").exists());
}

#[test]
fn test_view_unknown_id_fails() {
    let root = TempDir::new().unwrap();
    blog_cmd(&root)
        .args(["view", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Article not found: missing"));
}

#[test]
fn test_edit_keeps_creation_date_unless_given() {
    let root = TempDir::new().unwrap();
    blog_cmd(&root)
        .args(["new", "Draft", "first"])
        .assert()
        .success();
    let id = only_id(&root);
    let created = meta_json(&root)[0]["creation-date"].clone();

    blog_cmd(&root)
        .args(["edit", id.as_str(), "--title", "Final", "--content", "second"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Article updated"));

    let meta = meta_json(&root);
    assert_eq!(meta.as_array().unwrap().len(), 1);
    assert_eq!(meta[0]["title"], "Final");
    assert_eq!(meta[0]["creation-date"], created);
    let body = fs::read_to_string(root.path().join("articles").join(format!("{}.md", id))).unwrap();
    assert_eq!(body, "second");

    blog_cmd(&root)
        .args(["edit", id.as_str(), "--date", "24.12.2023"])
        .assert()
        .success();
    assert_eq!(meta_json(&root)[0]["creation-date"], "24.12.2023");
}

#[test]
fn test_edit_rejects_bad_date() {
    let root = TempDir::new().unwrap();
    blog_cmd(&root).args(["new", "T", "x"]).assert().success();
    let id = only_id(&root);

    blog_cmd(&root)
        .args(["edit", id.as_str(), "--date", "2023-12-24"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DD.MM.YYYY"));
}

#[test]
fn test_import_uses_heading() {
    let root = TempDir::new().unwrap();
    let file = root.path().join("post.md");
    fs::write(&file, "# Imported Post\n\nSome words.\n").unwrap();

    blog_cmd(&root)
        .args(["import", file.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(meta_json(&root)[0]["title"], "Imported Post");
}

#[test]
fn test_list_limit_and_config() {
    let root = TempDir::new().unwrap();
    for title in ["One", "Two", "Three"] {
        blog_cmd(&root).args(["new", title, "body"]).assert().success();
    }

    blog_cmd(&root)
        .args(["config", "home-limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("home-limit set to 1"));

    let output = blog_cmd(&root).arg("list").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);

    let output = blog_cmd(&root).args(["list", "--all"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_startup_survives_missing_content() {
    let root = TempDir::new().unwrap();
    blog_cmd(&root).args(["new", "Kept", "a"]).assert().success();
    blog_cmd(&root).args(["new", "Lost", "b"]).assert().success();

    let meta = meta_json(&root);
    let lost = meta
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["title"] == "Lost")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();
    fs::remove_file(root.path().join("articles").join(format!("{}.md", lost))).unwrap();

    blog_cmd(&root)
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept").and(predicate::str::contains("Lost").not()))
        .stderr(predicate::str::contains("skipped article"));

    blog_cmd(&root)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("without a content file"));
}
