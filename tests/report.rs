//! E2E tests for the report and brackets commands

use std::process::Command;

/// Test the report command against the JSON sample declaration
#[test]
fn report_json_declaration() {
    let output = Command::new("cargo")
        .args(["run", "--", "report", "-d", "tests/data/declaration.json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    // Totals: 4300.00 income, 1204.18 deductions, basis 3095.82 in the 15% tier
    assert!(stdout.contains("Total income: R$ 4300.00"));
    assert!(stdout.contains("Dependents: R$ 379.18"));
    assert!(stdout.contains("Total deductions: R$ 1204.18"));
    assert!(stdout.contains("Calculation basis: R$ 3095.82"));
    assert!(stdout.contains("IRRF due: R$ 109.57"));
    assert!(stdout.contains("Effective rate: 2.55%"));
}

/// The CSV form of the same declaration must produce the same figures
#[test]
fn report_csv_matches_json() {
    let output = Command::new("cargo")
        .args(["run", "--", "report", "-d", "tests/data/declaration.csv"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Total income: R$ 4300.00"));
    assert!(stdout.contains("Total deductions: R$ 1204.18"));
    assert!(stdout.contains("IRRF due: R$ 109.57"));
    assert!(stdout.contains("Effective rate: 2.55%"));
}

/// Test JSON output fields
#[test]
fn report_json_output() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "report",
            "-d",
            "tests/data/declaration.json",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("\"total_income\": \"4300.00\""));
    assert!(stdout.contains("\"tax_due\": \"109.57\""));
    assert!(stdout.contains("\"effective_rate_pct\": \"2.55\""));
    assert!(stdout.contains("\"calculation_basis\": \"3095.82\""));
}

/// A declaration without income reports an undefined effective rate
#[test]
fn report_without_income_has_no_rate() {
    let output = Command::new("cargo")
        .args(["run", "--", "report", "-d", "tests/data/no_income.json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("IRRF due: R$ 0.00"));
    assert!(stdout.contains("Effective rate: n/a"));
}

/// Test the brackets table for the reference year
#[test]
fn brackets_reference_year() {
    let output = Command::new("cargo")
        .args(["run", "--", "brackets", "-y", "2022"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("IRRF BRACKET TABLE (2022)"));
    assert!(stdout.contains("R$ 1903.99"));
    assert!(stdout.contains("27.50%"));
}

/// An unregistered year fails with a lookup error
#[test]
fn brackets_unknown_year_fails() {
    let output = Command::new("cargo")
        .args(["run", "--", "brackets", "-y", "1999"])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("no bracket table registered for year 1999"));
}
