//! End-to-end tests: the compiled binary against the harness contract.
//!
//! Everything, results and errors alike, is read from stdout; exit code 0
//! means success and 1 means any failure.

use assert_cmd::Command;
use predicates::prelude::*;

use rscalc::exitcode;

fn rscalc() -> Command {
    Command::cargo_bin("rscalc").unwrap()
}

#[test]
fn test_cli_add() {
    rscalc()
        .args(["add", "5", "3"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_cli_subtract() {
    rscalc()
        .args(["subtract", "5", "3"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_cli_subtract_missing_operand() {
    rscalc()
        .args(["subtract", "5"])
        .assert()
        .code(exitcode::FAILURE)
        .stdout(predicate::str::starts_with("Unexpected error:"));
}

#[test]
fn test_cli_multiply() {
    rscalc()
        .args(["multiply", "5", "3"])
        .assert()
        .success()
        .stdout("15\n");
}

#[test]
fn test_cli_divide() {
    rscalc()
        .args(["divide", "5", "3"])
        .assert()
        .success()
        .stdout("1.67\n");
}

#[test]
fn test_cli_divide_two_decimals() {
    rscalc()
        .args(["divide", "5", "2"])
        .assert()
        .success()
        .stdout("2.50\n");
}

#[test]
fn test_cli_sqrt() {
    rscalc()
        .args(["sqrt", "16"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_cli_power() {
    rscalc()
        .args(["power", "2", "3"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_cli_negative_operands() {
    rscalc()
        .args(["add", "-5", "3"])
        .assert()
        .success()
        .stdout("-2\n");
}

#[test]
fn test_cli_divide_by_zero() {
    rscalc()
        .args(["divide", "10", "0"])
        .assert()
        .code(exitcode::FAILURE)
        .stdout(predicate::str::contains("Cannot divide by zero"));
}

#[test]
fn test_cli_negative_square_root() {
    rscalc()
        .args(["sqrt", "-4"])
        .assert()
        .code(exitcode::FAILURE)
        .stdout(predicate::str::contains(
            "Cannot calculate square root of a negative number",
        ));
}

#[test]
fn test_cli_unknown_operation() {
    rscalc()
        .args(["invalid", "1", "2"])
        .assert()
        .code(exitcode::FAILURE)
        .stdout(predicate::str::contains("Unknown operation"));
}

#[test]
fn test_cli_non_numeric_operand() {
    rscalc()
        .args(["add", "five", "3"])
        .assert()
        .code(exitcode::FAILURE)
        .stdout(predicate::str::starts_with("Unexpected error:"));
}

#[test]
fn test_cli_error_output_is_a_single_stdout_line() {
    let assert = rscalc().args(["divide", "1", "0"]).assert();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_cli_info_flag() {
    rscalc()
        .arg("--info")
        .assert()
        .success()
        .stdout(predicate::str::contains("VERSION:"));
}

#[test]
fn test_cli_generates_completions() {
    rscalc()
        .args(["--generate", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rscalc"));
}
