use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("PROJECT_BUDGET_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn add_expense(data_dir: &TempDir, name: &str, amount: &str, category: &str, date: &str) {
    budget(data_dir)
        .args(["expense", "add", name, amount, "-c", category, "-d", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense"));
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "Camera rental", "250.50", "Equipment Rental", "2024-03-01");

    budget(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Camera rental"))
        .stdout(predicate::str::contains("1 expense"));

    assert!(dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn test_empty_name_is_rejected() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["expense", "add", "  ", "10", "-c", "Other"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense not added: expense name is required"));

    budget(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn test_negative_budget_is_stored_as_zero() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["budget", "set", "--", "-50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set to ₪0.00"));

    let stored = std::fs::read_to_string(dir.path().join("data").join("budget.txt")).unwrap();
    assert_eq!(stored.trim(), "0.00");
}

#[test]
fn test_report_summary() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["budget", "set", "1000"])
        .assert()
        .success();
    add_expense(&dir, "Logo design", "500", "Creative Services", "2024-03-02");
    add_expense(&dir, "Camera rental", "250.50", "Equipment Rental", "2024-04-10");

    budget(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₪750.50"))
        .stdout(predicate::str::contains("₪249.50"));

    budget(&dir)
        .args(["report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mar 2024"))
        .stdout(predicate::str::contains("Apr 2024"));
}

#[test]
fn test_categories() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["expense", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Video Production"))
        .stdout(predicate::str::contains("Client Entertainment"));
}

#[test]
fn test_export_json() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "Drone footage", "90", "Video Production", "2024-05-05");

    let output = dir.path().join("snapshot.json");
    budget(&dir)
        .args(["export"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported to"));

    let text = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["expenses"].as_array().unwrap().len(), 1);
    assert_eq!(value["expenses"][0]["name"], "Drone footage");
}

#[test]
fn test_history_records_changes() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["budget", "set", "300"])
        .assert()
        .success();

    budget(&dir)
        .args(["history", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BUDGET"))
        .stdout(predicate::str::contains("₪0.00 -> ₪300.00"));
}
