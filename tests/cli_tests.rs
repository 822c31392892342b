//! End-to-end tests of the `cgpa` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EXAMPLE: &str = "samples/transcripts/example.csv";

/// `cgpa` with its config directory isolated in `home`
fn cgpa(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cgpa").expect("binary builds");
    cmd.env("CGPA_CONFIG_DIR", home.path())
        .args(["--log-level", "error"]);
    cmd
}

#[test]
fn grades_prints_requested_scale() {
    let home = TempDir::new().unwrap();
    cgpa(&home)
        .args(["grades", "10.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A+  10.00"))
        .stdout(predicate::str::contains("D+").not());
}

#[test]
fn calc_prints_cgpa() {
    let home = TempDir::new().unwrap();
    cgpa(&home)
        .args(["calc", EXAMPLE])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPA 3.43 / 4.00"))
        .stdout(predicate::str::contains("CGPA: 2.40 / 4.00 over 10 credits"));
}

#[test]
fn calc_json_output() {
    let home = TempDir::new().unwrap();
    cgpa(&home)
        .args(["calc", "--json", EXAMPLE])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cgpa\": 2.4"))
        .stdout(predicate::str::contains("\"title\": \"Example Student\""));
}

#[test]
fn calc_missing_file_fails() {
    let home = TempDir::new().unwrap();
    cgpa(&home)
        .args(["calc", "samples/transcripts/missing.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("✗ Failed to load"));
}

#[test]
fn report_to_explicit_path() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("out").join("report.md");

    cgpa(&home)
        .args(["report", EXAMPLE, "-f", "md", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Report generated"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("# Example Student"));
    assert!(content.contains("2.40 out of 4.00"));
}

#[test]
fn report_default_path_uses_reports_dir() {
    let home = TempDir::new().unwrap();
    let reports = home.path().join("reports");

    cgpa(&home)
        .arg("--reports-dir")
        .arg(&reports)
        .args(["report", EXAMPLE, "-f", "json"])
        .assert()
        .success();

    assert!(reports.join("example_report.json").exists());
}

#[test]
fn report_rejects_unknown_format() {
    let home = TempDir::new().unwrap();
    cgpa(&home)
        .args(["report", EXAMPLE, "-f", "docx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown report format"));
}

#[test]
fn theme_toggle_is_persisted() {
    let home = TempDir::new().unwrap();

    cgpa(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));

    cgpa(&home)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Theme: dark"));

    cgpa(&home)
        .args(["config", "get", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn config_set_validates_values() {
    let home = TempDir::new().unwrap();
    cgpa(&home)
        .args(["config", "set", "scale", "7.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown grade scale"));

    cgpa(&home)
        .args(["config", "set", "scale", "10.0"])
        .assert()
        .success();

    cgpa(&home)
        .args(["config", "get", "scale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.0"));
}

#[test]
fn config_set_does_not_store_run_overrides() {
    let home = TempDir::new().unwrap();
    let reports = home.path().join("elsewhere");

    cgpa(&home)
        .args(["--scale", "10"])
        .arg("--reports-dir")
        .arg(&reports)
        .args(["config", "set", "theme", "dark"])
        .assert()
        .success();

    cgpa(&home)
        .args(["config", "get", "scale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.0"));

    cgpa(&home)
        .args(["config", "get", "reports_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("elsewhere").not());

    cgpa(&home)
        .args(["config", "get", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn shell_runs_scripted_session() {
    let home = TempDir::new().unwrap();
    let script = "semester add\nsubject add 1 Algebra 4 A-\ntheme toggle\nquit\n";

    cgpa(&home)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("CGPA: 3.70 / 4.00 over 4 credits"))
        .stdout(predicate::str::contains("Theme: dark"));

    cgpa(&home)
        .args(["config", "get", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn shell_reports_bad_commands_and_continues() {
    let home = TempDir::new().unwrap();
    cgpa(&home)
        .args(["shell", EXAMPLE])
        .write_stdin("subject rm 9 1\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ No semester at position 9"))
        .stdout(predicate::str::contains("Example Student"));
}
