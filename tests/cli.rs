use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roster(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("ROSTER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_fresh_install_lists_default_seed() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Student"))
        .stdout(predicate::str::contains("John Student"))
        .stdout(predicate::str::contains("Mr. Smith"))
        .stdout(predicate::str::contains("3 Members"));
}

#[test]
fn test_add_persists_between_runs() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["add", "Ada", "Lovelace", "--role", "chaperone", "-e", "ada@x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added chaperone"));

    assert!(home.path().join("sm_members.json").exists());

    roster(&home)
        .args(["list", "--role", "chaperone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("2 Members"));
}

#[test]
fn test_add_rejects_blank_name() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["add", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a name."));

    assert!(!home.path().join("sm_members.json").exists());
}

#[test]
fn test_search_finds_only_the_chaperone() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["ls", "--search", "SMITH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mr. Smith"))
        .stdout(predicate::str::contains("Jane").not())
        .stdout(predicate::str::contains("1 Member"));
}

#[test]
fn test_empty_view_says_so() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["ls", "-s", "nobody-by-this-name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No people found."));
}

#[test]
fn test_copy_students_prints_list() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["copy", "students", "--print"])
        .assert()
        .success()
        .stdout("jane.s@school.org,john.s@school.org\n");
}

#[test]
fn test_copy_selected_with_guardians() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["copy", "selected", "s1", "--guardians", "--print"])
        .assert()
        .success()
        .stdout("jane.s@school.org,parent.jane@example.com\n");
}

#[test]
fn test_copy_selected_visible_snapshot() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["copy", "selected", "--visible", "--passport", "no", "--print"])
        .assert()
        .success()
        .stdout("jane.s@school.org,smith@example.com\n");
}

#[test]
fn test_copy_selected_without_selection_warns() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["copy", "selected", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No people selected."));
}

#[test]
fn test_copy_selected_unknown_id_fails() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["copy", "selected", "ghost", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Person not found: ghost"));
}

#[test]
fn test_remove_with_yes() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["remove", "c1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed (c1): Mr. Smith"));

    roster(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mr. Smith").not())
        .stdout(predicate::str::contains("2 Members"));
}

#[test]
fn test_remove_declined_keeps_person() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["rm", "s2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remove this person?"))
        .stdout(predicate::str::contains("Kept John Student"));

    roster(&home)
        .args(["show", "s2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Student"));
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["rm", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No person with id ghost"));
}

#[test]
fn test_edit_to_chaperone_drops_guardian() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["edit", "s1", "--role", "chaperone"])
        .assert()
        .success();

    roster(&home)
        .args(["copy", "selected", "s1", "--guardians", "--print"])
        .assert()
        .success()
        .stdout("jane.s@school.org\n");

    let saved = std::fs::read_to_string(home.path().join("sm_members.json")).unwrap();
    assert!(!saved.contains("parent.jane@example.com"));
}

#[test]
fn test_corrupt_save_falls_back_to_seed() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("sm_members.json"), "{ definitely not a list").unwrap();
    roster(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 Members"));
}

#[test]
fn test_config_disables_clipboard() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["config", "use-clipboard", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("use-clipboard = false"));

    roster(&home)
        .args(["copy", "chaperones"])
        .assert()
        .success()
        .stdout("smith@example.com\n");
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}
