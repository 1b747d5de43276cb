use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn penumbra() -> Command {
    let mut cmd = Command::cargo_bin("penumbra").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn classifies_default_catalog_as_table() {
    penumbra()
        .arg("classify")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mercuria"))
        .stdout(predicate::str::contains("None (Multiple Shadows)"))
        .stdout(predicate::str::contains("Blocked by 2 larger bodies: Venusia, Earthia"));
}

#[test]
fn scientific_flag_adds_table_columns() {
    let plain = penumbra().arg("classify").output().unwrap();
    let scientific = penumbra().args(["classify", "--scientific"]).output().unwrap();
    assert!(scientific.status.success());
    assert_ne!(plain.stdout, scientific.stdout);

    let table = String::from_utf8(scientific.stdout).unwrap();
    assert!(table.contains("Fraction"));
    assert!(table.contains("Angle (rad)"));
    assert!(table.contains("70%"));
}

#[test]
fn full_catalog_as_scientific_json() {
    let output = penumbra()
        .args(["classify", "--catalog", "full", "--format", "json", "--scientific"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let bodies = value["bodies"].as_array().unwrap();
    assert_eq!(bodies.len(), 8);
    assert_eq!(bodies[0]["name"], "Mercuria");
    assert!(bodies.iter().all(|b| b.get("light_fraction").is_some()));
}

#[test]
fn writes_artifacts_into_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    penumbra()
        .args(["classify", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("sol_minor_shadows.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    let report = fs::read_to_string(dir.path().join("sol_minor_report.txt")).unwrap();
    assert!(report.contains("Shadowed by:    Venusia, Earthia"));
}

#[test]
fn unwritable_artifact_does_not_fail_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope").join("out.svg");
    penumbra()
        .args(["classify", "--svg"])
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("Marsia"))
        .stderr(predicate::str::contains("could not write artifact"));
}

#[test]
fn invalid_input_file_reports_every_violation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"[{"name": "Flat", "distance": 0, "size": 10}, {"name": "", "distance": 1, "size": -4}]"#,
    )
    .unwrap();

    penumbra()
        .args(["classify", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("3 invalid field(s)"))
        .stderr(predicate::str::contains("distance"));
}

#[test]
fn malformed_input_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "null").unwrap();

    penumbra()
        .args(["classify", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn interactive_entry_reads_stdin() {
    penumbra()
        .args(["classify", "--interactive"])
        .write_stdin("Big\n1\n9000\nSmall\n2\n100\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocked by Big"));
}

#[test]
fn random_systems_repeat_for_a_seed() {
    let run = || {
        penumbra()
            .args(["classify", "--random", "11", "--format", "json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn drift_subcommand() {
    penumbra()
        .args(["drift", "12:00", "12:03:15"])
        .assert()
        .success()
        .stdout("3m 15s fast\n");

    penumbra()
        .args(["drift", "12:00", "noon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid clock reading"));
}
