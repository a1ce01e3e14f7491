use std::fs;

use folder_toc_core::{ExitCode, TOC_MARKER};
use folder_toc_test_support::DocTree;
use predicates::prelude::*;

fn cargo_bin() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("update-folder-toc").unwrap();
    cmd.env_remove("ROOT_DIR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn updates_readme_from_root_dir_env() {
    let tree = DocTree::with_readme("# Project\n");
    tree.child("b", "# Beta\n").child("a", "# Alpha\n");

    cargo_bin()
        .env("ROOT_DIR", tree.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated TOC in"));

    assert_eq!(
        tree.readme(),
        format!(
            "# Project\n\n{TOC_MARKER}\n\n- [Alpha](a/README.md)\n- [Beta](b/README.md)\n\n{TOC_MARKER}\n"
        )
    );
}

#[test]
fn root_flag_overrides_environment() {
    let tree = DocTree::with_readme("# Project\n");
    tree.child("guide", "# Guide\n");
    let elsewhere = DocTree::empty();

    cargo_bin()
        .env("ROOT_DIR", elsewhere.root())
        .arg("--root")
        .arg(tree.root())
        .assert()
        .success();

    assert!(tree.readme().contains("- [Guide](guide/README.md)"));
}

#[test]
fn missing_root_dir_is_a_config_error() {
    cargo_bin()
        .assert()
        .failure()
        .code(ExitCode::Config as i32)
        .stderr(predicate::str::contains("ROOT_DIR environment variable not set"));
}

#[test]
fn missing_readme_skips_successfully() {
    let tree = DocTree::empty();
    tree.child("a", "# Alpha\n");

    cargo_bin()
        .env("ROOT_DIR", tree.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("missing; skipping."));

    assert!(!tree.readme_path().exists());
}

#[test]
fn no_entries_skips_successfully() {
    let tree = DocTree::with_readme("# Project\n");
    tree.bare_child("assets");

    cargo_bin()
        .env("ROOT_DIR", tree.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to update"));

    assert_eq!(tree.readme(), "# Project\n");
}

#[test]
fn check_flags_stale_toc() {
    let tree = DocTree::with_readme("# Project\n");
    tree.child("a", "# Alpha\n");

    cargo_bin()
        .env("ROOT_DIR", tree.root())
        .arg("--check")
        .assert()
        .failure()
        .code(ExitCode::OutOfDate as i32)
        .stdout(predicate::str::contains("is out of date"));

    assert_eq!(tree.readme(), "# Project\n");

    cargo_bin().env("ROOT_DIR", tree.root()).assert().success();

    cargo_bin()
        .env("ROOT_DIR", tree.root())
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}

#[test]
fn diff_prints_pending_change() {
    let tree = DocTree::with_readme("# Project\n");
    tree.child("a", "# Alpha\n");

    cargo_bin()
        .env("ROOT_DIR", tree.root())
        .arg("--diff")
        .assert()
        .code(ExitCode::OutOfDate as i32)
        .stdout(predicate::str::contains("+- [Alpha](a/README.md)"));

    assert_eq!(tree.readme(), "# Project\n");
}

#[test]
fn json_report_lists_entries() {
    let tree = DocTree::with_readme("# Project\n");
    tree.child("a", "\n## Alpha docs\n");

    cargo_bin()
        .env("ROOT_DIR", tree.root())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"updated\""))
        .stdout(predicate::str::contains("\"title\": \"Alpha docs\""));
}

#[test]
fn quiet_suppresses_report() {
    let tree = DocTree::with_readme("# Project\n");
    tree.child("a", "# Alpha\n");

    cargo_bin()
        .env("ROOT_DIR", tree.root())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn unreadable_child_readme_is_an_io_error() {
    let tree = DocTree::with_readme("# Project\n");
    tree.bare_child("broken");
    fs::write(tree.root().join("broken/README.md"), [0xffu8, 0xfe, b'\n']).unwrap();

    cargo_bin()
        .env("ROOT_DIR", tree.root())
        .assert()
        .failure()
        .code(ExitCode::Io as i32)
        .stderr(predicate::str::contains("failed to read"));
}
