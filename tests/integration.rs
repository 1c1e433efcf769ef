use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_protodoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn templates_path() -> String {
    format!("{}/templates", env!("CARGO_MANIFEST_DIR"))
}

/// Run generation for `input` with the bundled templates, inside `cwd`.
fn generate_in(cwd: &TempDir, input: &str) -> assert_cmd::assert::Assert {
    cmd()
        .current_dir(cwd.path())
        .args(["--templates", &templates_path()])
        .arg(input)
        .assert()
}

// -- help --

#[test]
fn help_spellings_exit_zero() {
    for flag in ["help", "-h", "-help", "--help"] {
        cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }
}

// -- generate mode --

#[test]
fn generates_into_default_directory() {
    let dir = TempDir::new().unwrap();

    generate_in(&dir, &fixture_path("mini.xml")).success();

    let page = std::fs::read_to_string(dir.path().join("doc/mini.html")).unwrap();
    assert!(page.contains("<h1>mini</h1>"));
    assert!(page.contains("wl_display"));
    assert!(page.contains("get_registry"));
    assert!(page.contains("no_memory"));
    assert!(dir.path().join("doc/style.css").exists());
}

#[test]
fn generated_page_keeps_source_order() {
    let dir = TempDir::new().unwrap();
    generate_in(&dir, &fixture_path("mini.xml")).success();
    let page = std::fs::read_to_string(dir.path().join("doc/mini.html")).unwrap();

    let order = [
        "id=\"wl_display\"",
        "id=\"wl_display-sync\"",
        "id=\"wl_display-get_registry\"",
        "id=\"wl_display-error\"",
        "<code>object_id</code>",
        "<code>code</code>",
        "<code>message</code>",
        "id=\"wl_display-enum-error\"",
        "<code>invalid_object</code>",
        "<code>no_memory</code>",
        "id=\"wl_callback\"",
        "id=\"wl_seat\"",
        "id=\"wl_seat-get_pointer\"",
        "id=\"wl_seat-release\"",
        "id=\"wl_seat-capabilities\"",
        "id=\"wl_seat-name\"",
        "id=\"wl_seat-enum-capability\"",
        "id=\"wl_seat-enum-error\"",
    ];
    let positions: Vec<_> = order
        .iter()
        .map(|needle| page.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
}

#[test]
fn generation_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    generate_in(&first, &fixture_path("mini.xml")).success();
    generate_in(&second, &fixture_path("mini.xml")).success();

    let a = std::fs::read(first.path().join("doc/mini.html")).unwrap();
    let b = std::fs::read(second.path().join("doc/mini.html")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("reference.html");

    cmd()
        .args(["--templates", &templates_path()])
        .arg(fixture_path("mini.xml"))
        .arg(out.to_str().unwrap())
        .assert()
        .success();

    let page = std::fs::read_to_string(&out).unwrap();
    assert!(page.contains("wl_callback"));
}

#[test]
fn custom_output_directory() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("site/pages");

    cmd()
        .args(["--templates", &templates_path()])
        .args(["--out-dir", out_dir.to_str().unwrap()])
        .arg(fixture_path("mini.xml"))
        .assert()
        .success();

    assert!(out_dir.join("mini.html").exists());
}

// -- failures --

#[test]
fn malformed_input_fails() {
    let dir = TempDir::new().unwrap();

    generate_in(&dir, &fixture_path("broken.xml"))
        .failure()
        .code(1)
        .stderr(predicate::str::contains("malformed input"));

    assert!(!dir.path().join("doc/broken.html").exists());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();

    generate_in(&dir, "does-not-exist.xml")
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist.xml"));
}

#[test]
fn extra_arguments_fail_with_status_one() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["--templates", &templates_path()])
        .arg(fixture_path("mini.xml"))
        .arg("a.html")
        .arg("extra")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("extra"));

    assert!(!dir.path().join("a.html").exists());
}

#[test]
fn unknown_flag_fails_with_status_one() {
    cmd()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn missing_templates_fail() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["--templates", "no-templates-here"])
        .arg(fixture_path("mini.xml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("protocol.html"));
}
