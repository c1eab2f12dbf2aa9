mod support;

use predicates::str::contains;
use serde_json::Value;

use support::TodoDir;
use todotxt::task::{today, DATE_FORMAT};

fn today_str() -> String {
    today().format(DATE_FORMAT).to_string()
}

#[test]
fn add_appends_tagged_task() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("(A) 2024-01-01 first\nsecond\nthird\n")?;

    todo.cmd()
        .args([
            "add",
            "Buy",
            "milk",
            "+shopping",
            "@errands",
            "--priority",
            "b",
            "--due",
            "2024-01-20",
        ])
        .assert()
        .success()
        .stdout(contains("todotxt add: task 4"));

    let expected = format!(
        "(A) 2024-01-01 first\nsecond\nthird\n#4 (B) {} Buy milk +shopping @errands due:2024-01-20\n",
        today_str()
    );
    assert_eq!(todo.read_todo()?, expected);
    Ok(())
}

#[test]
fn add_keeps_plus_and_at_inside_words() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("")?;

    todo.cmd()
        .args(["add", "Learn", "C++", "with", "bob@example.com", "+study"])
        .assert()
        .success();

    let expected = format!(
        "#1 {} Learn C++ with bob@example.com +study\n",
        today_str()
    );
    assert_eq!(todo.read_todo()?, expected);
    Ok(())
}

#[test]
fn add_rejects_bad_priority_and_due() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("")?;

    todo.cmd()
        .args(["add", "thing", "--priority", "AA"])
        .assert()
        .code(2)
        .stderr(contains("invalid priority"));

    todo.cmd()
        .args(["add", "thing", "--due", "2024-02-30"])
        .assert()
        .code(2)
        .stderr(contains("invalid date"));

    assert_eq!(todo.read_todo()?, "");
    Ok(())
}

#[test]
fn add_without_file_fails_and_creates_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::empty()?;

    todo.cmd()
        .args(["add", "thing"])
        .assert()
        .code(2)
        .stderr(contains("todo.txt not found"))
        .stderr(contains("hint:"));

    assert!(!todo.todo_path().exists());
    Ok(())
}

#[test]
fn list_prints_positional_ids() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("#5 (A) 2024-01-01 Pay rent +home\n\nx 2024-01-03 Call mom @phone\n")?;

    todo.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("#1 (A) 2024-01-01 Pay rent +home\n#2 x 2024-01-03 Call mom @phone\n");
    Ok(())
}

#[test]
fn list_does_not_inject_dates() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("undated chore\n")?;

    todo.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("#1 undated chore\n");
    Ok(())
}

#[test]
fn list_single_task_by_id() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("a\nb\nc\n")?;

    todo.cmd()
        .args(["list", "--id", "2"])
        .assert()
        .success()
        .stdout("#2 b\n");

    todo.cmd()
        .args(["list", "--id", "9"])
        .assert()
        .code(2)
        .stderr(contains("No task with id 9"));

    todo.cmd()
        .args(["list", "--id", "two"])
        .assert()
        .code(2)
        .stderr(contains("Invalid task id"));
    Ok(())
}

#[test]
fn list_empty_file_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("")?;
    todo.cmd().arg("list").assert().success().stdout("");
    Ok(())
}

#[test]
fn list_json_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("(C) 2024-02-02 Write report +work @office due:2024-03-01\n")?;

    let output = todo.cmd().args(["--json", "list"]).output()?;
    assert!(output.status.success());

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["schema_version"], "todotxt.v1");
    assert_eq!(payload["command"], "list");
    assert_eq!(payload["status"], "success");

    let task = &payload["data"][0];
    assert_eq!(task["id"], 1);
    assert_eq!(task["completed"], false);
    assert_eq!(task["priority"], "C");
    assert_eq!(task["creation_date"], "2024-02-02");
    assert_eq!(task["description"], "Write report");
    assert_eq!(task["projects"][0], "work");
    assert_eq!(task["contexts"][0], "office");
    assert_eq!(task["due_date"], "2024-03-01");
    Ok(())
}

#[test]
fn json_error_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("a\n")?;

    let output = todo.cmd().args(["--json", "rm", "3"]).output()?;
    assert_eq!(output.status.code(), Some(2));

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["command"], "rm");
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error"]["kind"], "user_error");
    assert_eq!(payload["error"]["code"], 2);
    assert_eq!(payload["error"]["details"]["id"], 3);
    Ok(())
}

#[test]
fn rm_removes_line_and_renumbers() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("#1 one\n#2 two\n#3 three\n")?;

    todo.cmd()
        .args(["rm", "2"])
        .assert()
        .success()
        .stdout(contains("deleted task 2"));

    assert_eq!(todo.read_todo()?, "#1 one\n#3 three\n");

    todo.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("#1 one\n#2 three\n");
    Ok(())
}

#[test]
fn delete_alias_works() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("one\ntwo\n")?;

    todo.cmd().args(["delete", "1"]).assert().success();
    assert_eq!(todo.read_todo()?, "two\n");
    Ok(())
}

#[test]
fn rm_rejects_non_numeric_id() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("one\n")?;

    todo.cmd()
        .args(["rm", "abc"])
        .assert()
        .code(2)
        .stderr(contains("Invalid task id"));
    assert_eq!(todo.read_todo()?, "one\n");
    Ok(())
}

#[test]
fn complete_marks_task_done() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("(A) 2024-01-01 Clean garage +chores\nother\n")?;

    todo.cmd().args(["complete", "1"]).assert().success();

    let expected = format!("#1 x (A) {} Clean garage +chores\nother\n", today_str());
    assert_eq!(todo.read_todo()?, expected);
    Ok(())
}

#[test]
fn path_flag_selects_directory() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::empty()?;
    let nested = todo.path().join("lists");
    todo.write_file("lists/todo.txt", "nested task\n")?;

    support::todotxt_cmd()
        .arg("--path")
        .arg(&nested)
        .arg("list")
        .assert()
        .success()
        .stdout("#1 nested task\n");

    support::todotxt_cmd()
        .env("TODOTXT_PATH", nested.join("todo.txt"))
        .arg("list")
        .assert()
        .success()
        .stdout("#1 nested task\n");
    Ok(())
}

#[test]
fn quiet_suppresses_output() -> Result<(), Box<dyn std::error::Error>> {
    let todo = TodoDir::with_todo("one\n")?;
    todo.cmd().args(["-q", "list"]).assert().success().stdout("");
    Ok(())
}
