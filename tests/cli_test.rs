use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("splitsettle"));
    cmd.arg("tests/fixtures/trip.csv");

    cmd.assert().success().stdout(
        "from,to,amount\n\
         Bob,Alice,18.65\n\
         Dan,Alice,18.65\n\
         Carla,Alice,6.15\n",
    );

    Ok(())
}

#[test]
fn test_cli_summary_format() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("splitsettle"));
    cmd.args(["tests/fixtures/trip.csv", "--format", "summary", "--currency", "€"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Settlement summary"))
        .stdout(predicate::str::contains("Total spent: 74.60 €"))
        .stdout(predicate::str::contains("Average per person: 18.65 €"))
        .stdout(predicate::str::contains("Carla paid: 12.50 €"))
        .stdout(predicate::str::contains("Carla pays Alice: 6.15 €"));

    Ok(())
}

#[test]
fn test_cli_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(cargo_bin!("splitsettle"))
        .args(["tests/fixtures/trip.csv", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["total"], 7460);
    assert_eq!(value["payments"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["payments"][2]["from"], "Carla");
    assert_eq!(value["payments"][2]["amount"], 615);

    Ok(())
}

#[test]
fn test_cli_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::new(cargo_bin!("splitsettle"));
    cmd.write_stdin("name,paid\nAnn,1.00\nBen,0\nCid,0\n");

    // 100 over 3: the extra cent lands on the first share (Ann)
    cmd.assert()
        .success()
        .stdout("from,to,amount\nBen,Ann,0.33\nCid,Ann,0.33\n");

    Ok(())
}

#[test]
fn test_cli_writes_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let report_path = dir.path().join("report.txt");

    Command::new(cargo_bin!("splitsettle"))
        .arg("tests/fixtures/trip.csv")
        .arg("--output")
        .arg(&report_path)
        .args(["--format", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report = std::fs::read_to_string(&report_path)?;
    assert!(report.contains("Bob pays Alice: 18.65"));

    Ok(())
}

#[test]
fn test_cli_missing_input_file_fails() {
    Command::new(cargo_bin!("splitsettle"))
        .arg("tests/fixtures/does_not_exist.csv")
        .assert()
        .failure();
}

#[test]
fn test_cli_balanced_group() {
    let mut cmd = assert_cmd::Command::new(cargo_bin!("splitsettle"));
    cmd.args(["--format", "summary"])
        .write_stdin("name,paid\nA,10\nB,10\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All balanced"));
}
