use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn payroll_tools() -> Command {
    Command::new(env!("CARGO_BIN_EXE_payroll-tools"))
}

#[test]
fn missing_file_exits_with_status_one() {
    let dir = tempdir().expect("temporary directory");
    let missing = dir.path().join("absent.csv");

    let output = payroll_tools()
        .arg(&missing)
        .args(["--report", "payout"])
        .output()
        .expect("binary runs");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: input file not found"));
}

#[test]
fn payout_report_is_printed_on_success() {
    let dir = tempdir().expect("temporary directory");
    let data = dir.path().join("data.csv");
    fs::write(&data, "name,department,hours_worked,rate\nIvan,IT,10,50\n").expect("fixture written");

    let output = payroll_tools()
        .arg(&data)
        .args(["--report", "payout"])
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert!(stdout.contains("| IT         | Ivan | 10    | $50  | $500   |"));
}

#[test]
fn unknown_report_exits_before_reading_files() {
    let dir = tempdir().expect("temporary directory");
    let missing = dir.path().join("absent.csv");

    let output = payroll_tools()
        .arg(&missing)
        .args(["--report", "average"])
        .output()
        .expect("binary runs");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown report type 'average'"));
}
