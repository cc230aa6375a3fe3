use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_boundary_numerical_values() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("boundary_test.csv");
    let mut wtr = csv::Writer::from_path(&input_path).unwrap();
    wtr.write_record(["name", "paid"]).unwrap();

    // i64::MAX cents
    wtr.write_record(["Rich", "92233720368547758.07"]).unwrap();
    wtr.write_record(["Broke", "0"]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    let mut cmd = Command::new(cargo_bin!("splitsettle"));
    cmd.arg(&input_path);

    // shares are MAX/2 + 1 and MAX/2; Broke owes MAX/2
    cmd.assert()
        .success()
        .stdout("from,to,amount\nBroke,Rich,46116860184273879.03\n");
}

#[test]
fn test_single_cent_remainders() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("cents_test.csv");
    let mut wtr = csv::Writer::from_path(&input_path).unwrap();
    wtr.write_record(["name", "paid"]).unwrap();

    wtr.write_record(["A", "0"]).unwrap();
    wtr.write_record(["B", "0"]).unwrap();
    wtr.write_record(["C", "0.02"]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    let mut cmd = Command::new(cargo_bin!("splitsettle"));
    cmd.arg(&input_path);

    // 2 cents over 3 people: A and B each take a 1 cent share, C's share is 0
    cmd.assert()
        .success()
        .stdout("from,to,amount\nA,C,0.01\nB,C,0.01\n");
}

#[test]
fn test_amount_beyond_range_is_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("overflow_test.csv");
    let mut wtr = csv::Writer::from_path(&input_path).unwrap();
    wtr.write_record(["name", "paid"]).unwrap();

    wtr.write_record(["Huge", "92233720368547758.08"]).unwrap();
    wtr.write_record(["Small", "1"]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    let mut cmd = Command::new(cargo_bin!("splitsettle"));
    cmd.arg(&input_path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Unparsable amount"))
        .stdout("from,to,amount\nHuge,Small,0.50\n");
}
