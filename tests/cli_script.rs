use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense_core_cli").unwrap();
    cmd.env("EXPENSE_CORE_CLI_SCRIPT", "1")
        .env("EXPENSE_CORE_CONFIG", temp.path().join("config.json"))
        .current_dir(temp.path());
    cmd
}

#[test]
fn script_mode_adds_saves_and_exits() {
    let temp = TempDir::new().unwrap();

    script_cmd(&temp)
        .write_stdin("1\n12.50\nFood\nlunch at cafe\n4\n")
        .assert()
        .success()
        .stdout(contains("Expense added successfully!"))
        .stdout(contains("Expenses saved. Goodbye!"));

    let csv = std::fs::read_to_string(temp.path().join("expenses.csv")).unwrap();
    assert!(csv.starts_with("12.50,Food,lunch at cafe,"));
}

#[test]
fn script_mode_reports_invalid_choice_and_keeps_running() {
    let temp = TempDir::new().unwrap();

    script_cmd(&temp)
        .write_stdin("7\n4\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice!"))
        .stdout(contains("Expenses saved. Goodbye!"));
}

#[test]
fn script_mode_prints_summary_totals() {
    let temp = TempDir::new().unwrap();

    script_cmd(&temp)
        .write_stdin("1\n10.00\nFood\ngroceries\n1\n5.00\nFood\nsnacks\n1\n20.00\nRent\nroom\n3\n4\n")
        .assert()
        .success()
        .stdout(contains("Total spent: $35.00"))
        .stdout(contains("$15.00"))
        .stdout(contains("$20.00"));
}

#[test]
fn script_mode_reloads_previous_session_data() {
    let temp = TempDir::new().unwrap();

    script_cmd(&temp)
        .write_stdin("1\n9.99\nTravel\nbus ticket\n4\n")
        .assert()
        .success();

    script_cmd(&temp)
        .write_stdin("2\n4\n")
        .assert()
        .success()
        .stdout(contains("bus ticket"))
        .stdout(contains("$9.99"));
}

#[test]
fn script_mode_aborts_on_corrupt_data_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("expenses.csv"), "not,a,valid\n").unwrap();

    script_cmd(&temp)
        .write_stdin("4\n")
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn script_mode_exits_without_saving_on_end_of_input() {
    let temp = TempDir::new().unwrap();

    script_cmd(&temp)
        .write_stdin("1\n3.00\nFood\ncoffee\n")
        .assert()
        .success()
        .stdout(contains("Exiting without saving."));

    assert!(!temp.path().join("expenses.csv").exists());
}
