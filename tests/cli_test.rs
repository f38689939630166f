//! End-to-end tests for the `ledger` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("EXPENSE_LEDGER_DIR", base)
        .env_remove("EXPENSE_LEDGER_FILE");
    cmd
}

#[test]
fn test_add_and_list() {
    let temp = TempDir::new().unwrap();

    ledger(temp.path())
        .args(["add", "card", "25.5", "groceries", "--card", "Visa", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense recorded successfully."));

    assert_eq!(
        fs::read_to_string(temp.path().join("expenses.txt")).unwrap(),
        "2024-03-01 - 25.5 - groceries - card: Visa\n"
    );

    ledger(temp.path())
        .args(["list", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout("1. 2024-03-01 - 25.5 - groceries - card: Visa\n");

    ledger(temp.path())
        .args(["list", "--date", "2024-03-02"])
        .assert()
        .success()
        .stdout("No expenses found.\n");
}

#[test]
fn test_add_rejections_exit_nonzero() {
    let temp = TempDir::new().unwrap();

    ledger(temp.path())
        .args(["add", "cash", "abc", "lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a number."));

    ledger(temp.path())
        .args(["add", "cash", "10", "lunch", "--date", "2024-13-40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format. Use YYYY-MM-DD."));

    ledger(temp.path())
        .args(["add", "bank", "10", "lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid expense type."));

    assert_eq!(
        fs::read_to_string(temp.path().join("expenses.txt")).unwrap(),
        ""
    );
}

#[test]
fn test_negative_amount_is_accepted() {
    let temp = TempDir::new().unwrap();

    ledger(temp.path())
        .args(["add", "cash", "-3", "refund", "--date", "2024-03-01"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("expenses.txt")).unwrap(),
        "2024-03-01 - -3.0 - refund - cash\n"
    );
}

#[test]
fn test_totals_and_summary() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("expenses.txt"),
        "2024-03-01 - 10.0 - a - cash\n\
         2024-03-01 - 20.0 - b - card: Visa\n\
         2024-03-01 - 7.0 - c - card: VisaGold\n\
         not a record\n",
    )
    .unwrap();

    ledger(temp.path())
        .args(["total", "type", "card"])
        .assert()
        .success()
        .stdout("Total expenses for 'card': 27.0\n");

    ledger(temp.path())
        .args(["total", "card", "VISA"])
        .assert()
        .success()
        .stdout("Total expenses for card 'visa': 20.0\n");

    ledger(temp.path())
        .args(["total", "type", "bank"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter 'cash' or 'card'"));

    ledger(temp.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("37.0"))
        .stdout(predicate::str::contains("1 unreadable line(s) skipped"));
}

#[test]
fn test_delete_by_text_and_number() {
    let temp = TempDir::new().unwrap();
    let ledger_file = temp.path().join("expenses.txt");
    fs::write(
        &ledger_file,
        "2024-03-01 - 4.0 - tea - cash\n\
         2024-03-01 - 9.0 - cake - cash\n\
         2024-03-02 - 1.0 - gum - cash\n",
    )
    .unwrap();

    ledger(temp.path())
        .args(["delete", "2024-03-01 - 4.0 - tea - cash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 line(s)"));

    ledger(temp.path())
        .args(["delete", "2024-03-01 - 4.0 - tea - cash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching expense found."));

    ledger(temp.path())
        .args(["delete", "--number", "2"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&ledger_file).unwrap(),
        "2024-03-01 - 9.0 - cake - cash\n"
    );

    ledger(temp.path())
        .args(["delete", "--number", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line not found: #9"));
}

#[test]
fn test_delete_number_from_filtered_list() {
    let temp = TempDir::new().unwrap();
    let ledger_file = temp.path().join("expenses.txt");
    fs::write(
        &ledger_file,
        "2024-02-01 - 4.0 - old - cash\n\
         2024-03-01 - 9.0 - cake - cash\n",
    )
    .unwrap();

    ledger(temp.path())
        .args(["list", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout("2. 2024-03-01 - 9.0 - cake - cash\n");

    ledger(temp.path())
        .args(["delete", "--number", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: 2024-03-01 - 9.0 - cake - cash"));

    assert_eq!(
        fs::read_to_string(&ledger_file).unwrap(),
        "2024-02-01 - 4.0 - old - cash\n"
    );
}

#[test]
fn test_file_flag_and_history() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("custom.txt");

    ledger(temp.path())
        .arg("--file")
        .arg(&custom)
        .args(["add", "cash", "2", "bread", "--date", "2024-03-01"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&custom).unwrap(),
        "2024-03-01 - 2.0 - bread - cash\n"
    );
    assert!(!temp.path().join("expenses.txt").exists());

    ledger(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE 2024-03-01 - 2.0 - bread - cash"));
}

#[test]
fn test_export_csv() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("expenses.txt"),
        "2024-03-01 - 25.5 - groceries - card: Visa\n",
    )
    .unwrap();
    let output = temp.path().join("out.csv");

    ledger(temp.path())
        .arg("export")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expense(s)"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "date,amount,explanation,payment,card\n2024-03-01,25.5,groceries,card,Visa\n"
    );
}

#[test]
fn test_config_command() {
    let temp = TempDir::new().unwrap();

    ledger(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Europe/Istanbul"));
}
