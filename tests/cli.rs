#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn webnote_cmd(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("webnote").unwrap();
    cmd.env("WEBNOTE_DATA", data.as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("WEBNOTE_LOG");
    cmd
}

#[test]
fn test_fresh_data_lists_default_page() {
    let temp = TempDir::new().unwrap();

    webnote_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1"))
        .stdout(predicate::str::contains("(empty)"));

    // Reading alone never writes
    assert!(!temp.path().join("notes.json").exists());
}

#[test]
fn test_write_persists_across_runs() {
    let temp = TempDir::new().unwrap();

    webnote_cmd(temp.path())
        .args(["write", "1", "hello from the first run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page saved: Page 1"));

    assert!(temp.path().join("notes.json").exists());

    webnote_cmd(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from the first run"));
}

#[test]
fn test_new_page_gets_next_number() {
    let temp = TempDir::new().unwrap();

    webnote_cmd(temp.path())
        .arg("new")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page created: Page 2"));

    webnote_cmd(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2"));
}

#[test]
fn test_last_page_cannot_be_deleted() {
    let temp = TempDir::new().unwrap();

    webnote_cmd(temp.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The last page cannot be deleted"));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let temp = TempDir::new().unwrap();
    webnote_cmd(temp.path()).arg("new").assert().success();

    webnote_cmd(temp.path())
        .args(["delete", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled"));

    webnote_cmd(temp.path())
        .args(["delete", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page deleted: Page 2"));

    webnote_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2").not());
}

#[test]
fn test_out_of_range_page_is_reported() {
    let temp = TempDir::new().unwrap();

    webnote_cmd(temp.path())
        .args(["show", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page 3 does not exist"));
}

#[test]
fn test_blank_rename_keeps_name() {
    let temp = TempDir::new().unwrap();

    webnote_cmd(temp.path())
        .args(["rename", "1", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page renamed: Page 1 -> Groceries"));

    webnote_cmd(temp.path())
        .args(["rename", "1", "  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name unchanged: Groceries"));
}

#[test]
fn test_export_writes_named_text_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("exports");

    webnote_cmd(temp.path())
        .args(["rename", "1", "Todo"])
        .assert()
        .success();
    webnote_cmd(temp.path())
        .args(["write", "1", "ship it"])
        .assert()
        .success();

    webnote_cmd(temp.path())
        .args(["export", "1", "--dir", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported Todo.txt"));

    assert_eq!(fs::read_to_string(out.join("Todo.txt")).unwrap(), "ship it");
}

#[test]
fn test_corrupt_storage_starts_fresh() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.json"), "{ definitely not pages").unwrap();

    webnote_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1"));
}

#[test]
fn test_configured_storage_key() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{ "storage_key": "scratch" }"#,
    )
    .unwrap();

    webnote_cmd(temp.path())
        .args(["write", "1", "in the scratch slot"])
        .assert()
        .success();

    assert!(temp.path().join("scratch.json").exists());
    assert!(!temp.path().join("notes.json").exists());
}

#[test]
fn test_session_clear_and_undo_key() {
    let temp = TempDir::new().unwrap();

    webnote_cmd(temp.path())
        .write_stdin("hello\n:clear\nctrl+z\n:show\nctrl+z\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Text cleared"))
        .stdout(predicate::str::contains("Cleared text restored"))
        .stdout(predicate::str::contains("hello"))
        .stdout(predicate::str::contains("Nothing to undo"));

    webnote_cmd(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"));
}

#[test]
fn test_session_rename_and_delete_modals() {
    let temp = TempDir::new().unwrap();

    webnote_cmd(temp.path())
        .arg("session")
        .write_stdin(":new\n:rename\nIdeas\n:delete\ny\n:delete\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page renamed: Page 2 -> Ideas"))
        .stdout(predicate::str::contains("Page deleted: Ideas"))
        .stdout(predicate::str::contains("The last page cannot be deleted"));
}

#[test]
fn test_session_unbound_chord_is_warned() {
    let temp = TempDir::new().unwrap();

    webnote_cmd(temp.path())
        .write_stdin("alt+q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("alt+q is not bound (undo is ctrl+z)"));
}

#[test]
fn test_undo_key_inside_rename_prompt_restores_text() {
    let temp = TempDir::new().unwrap();

    webnote_cmd(temp.path())
        .write_stdin("hello\n:clear\n:rename\nctrl+z\nKept\n:show\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared text restored"))
        .stdout(predicate::str::contains("Page renamed: Page 1 -> Kept"))
        .stdout(predicate::str::contains("ctrl+z").not());

    webnote_cmd(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"));
}

#[test]
fn test_undo_key_inside_delete_prompt_keeps_prompt_open() {
    let temp = TempDir::new().unwrap();

    webnote_cmd(temp.path())
        .write_stdin(":new\nhello\n:clear\n:delete\nctrl+z\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared text restored"))
        .stdout(predicate::str::contains("Delete cancelled"))
        .stdout(predicate::str::contains("Page deleted").not());

    webnote_cmd(temp.path())
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"));
}
