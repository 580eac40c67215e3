use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn detect_reports_typescript_project() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join("tsconfig.json"), "{}").expect("tsconfig");
    fs::write(tmp.path().join("vite.config.ts"), "export default {}\n").expect("vite config");

    Command::cargo_bin("tailvite-cli")
        .expect("binary")
        .current_dir(tmp.path())
        .arg("detect")
        .assert()
        .success()
        .stdout(predicate::str::contains("language: TypeScript"))
        .stdout(predicate::str::contains("vite config: vite.config.ts"))
        .stdout(predicate::str::contains("stylesheet: src/index.css"));
}

#[test]
fn detect_reports_javascript_defaults_for_bare_directory() {
    let tmp = tempdir().expect("tempdir");

    Command::cargo_bin("tailvite-cli")
        .expect("binary")
        .current_dir(tmp.path())
        .arg("detect")
        .assert()
        .success()
        .stdout(predicate::str::contains("language: JavaScript"))
        .stdout(predicate::str::contains(
            "vite config: vite.config.js (missing, would be created)",
        ));
}

#[test]
fn detect_classifies_typed_from_manifest_alone() {
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join("package.json"),
        r#"{ "devDependencies": { "typescript": "~5.6.2" } }"#,
    )
    .expect("package.json");

    Command::cargo_bin("tailvite-cli")
        .expect("binary")
        .current_dir(tmp.path())
        .arg("detect")
        .assert()
        .success()
        .stdout(predicate::str::contains("language: TypeScript"));
}

#[test]
fn detect_makes_no_changes() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join("vite.config.js"), "export default {}\n").expect("vite config");

    Command::cargo_bin("tailvite-cli")
        .expect("binary")
        .current_dir(tmp.path())
        .arg("detect")
        .assert()
        .success();

    let config = fs::read_to_string(tmp.path().join("vite.config.js")).expect("config");
    assert_eq!(config, "export default {}\n");
    assert!(!tmp.path().join("tailwind.config.js").exists());
    assert!(!tmp.path().join("src").exists());
}
