//! End-to-end tests for the `mkcpp` binary.
//!
//! All runs use `--skip-deps` so no test ever talks to a real package
//! manager.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mkcpp(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mkcpp").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

/// Strip header lines that embed the run date, for byte-comparisons across
/// runs.
fn without_dates(content: &str) -> String {
    content
        .lines()
        .filter(|l| !l.contains("Date:") && !l.contains("Generated"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn help_names_the_generator() {
    let dir = TempDir::new().unwrap();
    mkcpp(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mkcpp"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn version_matches_cargo() {
    let dir = TempDir::new().unwrap();
    mkcpp(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn interactive_run_generates_the_full_project() {
    let dir = TempDir::new().unwrap();
    mkcpp(&dir)
        .args(["new", "--skip-deps"])
        .write_stdin("Foo\n17\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1/5"))
        .stdout(predicate::str::contains("Step 5/5"));

    let root = dir.path().join("Foo");
    for sub in ["assets", "src", "3rdParty", "mac", "mac/bin", "mac/build"] {
        assert!(root.join(sub).is_dir(), "missing directory: {sub}");
    }

    let descriptor = std::fs::read_to_string(root.join("mac/CMakeLists.txt")).unwrap();
    assert!(descriptor.contains("project(Foo)"));
    assert!(descriptor.contains("-std=c++17"));
    assert!(descriptor.contains("-fno-exceptions"));
    assert!(descriptor.contains("add_executable(Foo"));

    let script = std::fs::read_to_string(root.join("mac/build.sh")).unwrap();
    assert!(script.starts_with("#!/bin/bash\n"));
    assert!(script.contains("exit 4"));
    assert!(script.contains("exit 5"));
    assert!(script.contains("exit 6"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(root.join("mac/build.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_ne!(mode & 0o111, 0, "build.sh must be executable");
    }
}

#[test]
fn invalid_answers_reprompt_until_valid() {
    let dir = TempDir::new().unwrap();
    // Empty name, unsupported standard, garbage yes/no — each retried once.
    mkcpp(&dir)
        .args(["new", "--skip-deps"])
        .write_stdin("\nFoo\n98\n20\nmaybe\ny\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("not supported"));

    let descriptor =
        std::fs::read_to_string(dir.path().join("Foo/mac/CMakeLists.txt")).unwrap();
    assert!(descriptor.contains("-std=c++2a"));
    assert!(!descriptor.contains("c++20"));
    assert!(descriptor.contains("-fexceptions"));
}

#[test]
fn flags_skip_all_prompts() {
    let dir = TempDir::new().unwrap();
    // No stdin provided at all: flags answer every field.
    mkcpp(&dir)
        .args([
            "new",
            "--skip-deps",
            "--name",
            "Engine",
            "--std",
            "14",
            "--exceptions",
            "y",
        ])
        .write_stdin("")
        .assert()
        .success();

    let descriptor =
        std::fs::read_to_string(dir.path().join("Engine/mac/CMakeLists.txt")).unwrap();
    assert!(descriptor.contains("project(Engine)"));
    assert!(descriptor.contains("-std=c++14"));
    assert!(descriptor.contains("-fexceptions"));
}

#[test]
fn invalid_flag_value_is_a_usage_error_not_a_prompt() {
    let dir = TempDir::new().unwrap();
    mkcpp(&dir)
        .args(["new", "--skip-deps", "--name", "Foo", "--std", "11", "--exceptions", "n"])
        .write_stdin("")
        .assert()
        .failure()
        .code(64)
        .stderr(predicate::str::contains("not supported"));

    assert!(!dir.path().join("Foo").exists());
}

#[test]
fn rerun_is_idempotent_and_overwrites_artifacts() {
    let dir = TempDir::new().unwrap();
    let args = [
        "new",
        "--skip-deps",
        "--name",
        "Foo",
        "--std",
        "17",
        "--exceptions",
        "n",
    ];

    mkcpp(&dir).args(args).write_stdin("").assert().success();
    let first =
        std::fs::read_to_string(dir.path().join("Foo/mac/CMakeLists.txt")).unwrap();

    // Second run against the existing tree: no directory errors, artifacts
    // rewritten whole. Identical modulo the embedded dates.
    mkcpp(&dir).args(args).write_stdin("").assert().success();
    let second =
        std::fs::read_to_string(dir.path().join("Foo/mac/CMakeLists.txt")).unwrap();
    assert_eq!(without_dates(&first), without_dates(&second));
}

#[test]
fn every_framed_line_is_eighty_columns() {
    let dir = TempDir::new().unwrap();
    mkcpp(&dir)
        .args(["new", "--skip-deps", "--name", "Foo", "--std", "20", "--exceptions", "n"])
        .write_stdin("")
        .assert()
        .success();

    for artifact in ["Foo/mac/build.sh", "Foo/mac/CMakeLists.txt"] {
        let content = std::fs::read_to_string(dir.path().join(artifact)).unwrap();
        for line in content
            .lines()
            .filter(|l| l.starts_with('#') && *l != "#!/bin/bash")
        {
            assert_eq!(line.chars().count(), 80, "{artifact}: {line:?}");
        }
    }
}

#[test]
fn completions_subcommand_emits_a_script() {
    let dir = TempDir::new().unwrap();
    mkcpp(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mkcpp"));
}

#[test]
fn bare_invocation_shows_help_and_fails() {
    let dir = TempDir::new().unwrap();
    mkcpp(&dir).assert().failure().code(64);
}
