use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

fn paynow() -> Command {
    let mut cmd = Command::new(cargo_bin!("paynow-qr"));
    for var in [
        "PAYNOW_UEN",
        "PAYNOW_PHONE",
        "PAYNOW_MERCHANT_NAME",
        "PAYNOW_MERCHANT_CITY",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_batch_generates_one_payload_per_row() {
    let file = NamedTempFile::new().unwrap();
    common::generate_csv(file.path(), 5).expect("Failed to generate CSV");

    let output = paynow().arg("--batch").arg(file.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("reference_number,payload"));

    let rows: Vec<_> = lines.collect();
    assert_eq!(rows.len(), 5);
    for (i, row) in rows.iter().enumerate() {
        let (reference, payload) = row.split_once(',').unwrap();
        assert_eq!(reference, format!("INV-{}", i + 1));
        common::assert_well_formed(payload);
        assert!(payload.contains(&format!("54{:02}{}.5", format!("{}.5", i + 1).len(), i + 1)));
    }
}

#[test]
fn test_batch_skips_bad_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "reference_number, uen, phone, amount, merchant_city").unwrap();
    writeln!(file, "A-1, 123456789A, , 10.00, ").unwrap();
    writeln!(file, "A-2, , , 5, ").unwrap(); // No payee
    writeln!(file, "A-3, 123456789A, , ten, ").unwrap(); // Not a number
    writeln!(file, "A-4, , +6591234567, , Jurong").unwrap();

    paynow()
        .arg("--batch")
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Error generating payload"))
        .stderr(predicate::str::contains("Error reading payment request"))
        .stdout(predicate::str::contains("A-1,"))
        .stdout(predicate::str::contains("A-2,").not())
        .stdout(predicate::str::contains("A-3,").not())
        .stdout(predicate::str::contains("A-4,"))
        .stdout(predicate::str::contains("6006Jurong"));
}

#[test]
fn test_batch_uses_flags_as_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "reference_number, merchant_name").unwrap();
    writeln!(file, "B-1, ").unwrap();
    writeln!(file, "B-2, Override").unwrap();

    paynow()
        .args(["--uen", "123456789A", "--merchant-name", "Shared"])
        .arg("--batch")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("5906Shared"))
        .stdout(predicate::str::contains("5908Override"));
}

#[test]
fn test_batch_row_phone_replaces_flag_uen() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "reference_number, phone").unwrap();
    writeln!(file, "C-1, +6591234567").unwrap();
    writeln!(file, "C-2, ").unwrap();

    let output = paynow()
        .args(["--uen", "123456789A", "--batch"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let row = |reference: &str| {
        stdout
            .lines()
            .find(|line| line.starts_with(reference))
            .unwrap()
            .to_string()
    };
    assert!(row("C-1,").contains("010100211+6591234567"));
    assert!(!row("C-1,").contains("123456789A"));
    assert!(row("C-2,").contains("010120210123456789A"));
}

#[test]
fn test_batch_ignores_shared_reference_number() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "uen, amount").unwrap();
    writeln!(file, "123456789A, 1").unwrap();
    writeln!(file, "123456789A, 2").unwrap();

    let output = paynow()
        .args(["--reference-number", "SHARED", "--batch"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ignored in batch mode"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let references: Vec<&str> = stdout
        .lines()
        .skip(1)
        .map(|line| line.split_once(',').unwrap().0)
        .collect();
    assert_eq!(references.len(), 2);
    assert!(!references.contains(&"SHARED"));
    assert_ne!(references[0], references[1]);
}

#[test]
fn test_batch_missing_file() {
    paynow()
        .args(["--batch", "does-not-exist.csv"])
        .assert()
        .failure();
}
