//! Integration tests for writing, editing and querying entries

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;

mod common;
use common::{daybook_cmd, entries_file, init_diary, write};

#[test]
fn test_write_prints_id_and_persists_entry() {
    let temp = init_diary();

    let id = write(
        temp.path(),
        &[
            "--title",
            "Morning walk",
            "--content",
            "Around the lake",
            "--date",
            "2025-01-10",
            "--mood",
            "happy",
            "--tag",
            "outdoors",
            "--select",
            "weather=sunny",
        ],
    );
    assert_eq!(id.len(), 36);

    let raw = fs::read_to_string(entries_file(temp.path())).unwrap();
    assert!(raw.contains(&format!("\"id\":\"{}\"", id)));
    assert!(raw.contains("\"date\":\"2025-01-10\""));
    assert!(raw.contains("\"selectedWeather\":[\"sunny\"]"));
    assert!(raw.contains("\"createdAt\""));

    daybook_cmd()
        .current_dir(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning walk"))
        .stdout(predicate::str::contains("Mood:    happy"))
        .stdout(predicate::str::contains("#outdoors"))
        .stdout(predicate::str::contains("weather: sunny"))
        .stdout(predicate::str::contains("Around the lake"));
}

#[test]
fn test_write_rejects_invalid_input() {
    let temp = init_diary();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["write", "--title", "x", "--mood", "ecstatic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mood"));

    daybook_cmd()
        .current_dir(temp.path())
        .args(["write", "--title", "x", "--select", "music=jazz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category"));

    daybook_cmd()
        .current_dir(temp.path())
        .args(["write", "--title", "x", "--date", "someday"])
        .assert()
        .failure()
        .code(3);

    daybook_cmd()
        .current_dir(temp.path())
        .args(["write", "--title", "x", "--date", "in 200000000 days"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid date reference"));

    assert!(!entries_file(temp.path()).exists());
}

#[test]
fn test_list_is_sorted_and_filtered() {
    let temp = init_diary();
    write(temp.path(), &["--title", "Older", "--date", "2025-01-05"]);
    write(temp.path(), &["--title", "Newest", "--date", "2025-01-20"]);
    write(temp.path(), &["--title", "Middle", "--date", "2025-01-10"]);

    let output = daybook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let newest = stdout.find("Newest").unwrap();
    let middle = stdout.find("Middle").unwrap();
    let older = stdout.find("Older").unwrap();
    assert!(newest < middle && middle < older);

    daybook_cmd()
        .current_dir(temp.path())
        .args(["list", "--from", "2025-01-06", "--to", "2025-01-19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Middle"))
        .stdout(predicate::str::contains("Newest").not())
        .stdout(predicate::str::contains("Older").not());

    daybook_cmd()
        .current_dir(temp.path())
        .args(["list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Newest"))
        .stdout(predicate::str::contains("Middle").not());
}

#[test]
fn test_edit_records_outcome_and_keeps_creation_time() {
    let temp = init_diary();
    let id = write(
        temp.path(),
        &["--title", "Concert", "--date", "2099-06-01", "--tag", "music"],
    );

    let before = fs::read_to_string(entries_file(temp.path())).unwrap();
    let created = before
        .split("\"createdAt\":\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap()
        .to_string();

    daybook_cmd()
        .current_dir(temp.path())
        .args([
            "edit",
            &id,
            "--result",
            "Best show of the year",
            "--status",
            "realized",
            "--tag",
            "live",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outcome: realized"))
        .stdout(predicate::str::contains("Best show of the year"))
        .stdout(predicate::str::contains("#music"))
        .stdout(predicate::str::contains("#live"));

    let after = fs::read_to_string(entries_file(temp.path())).unwrap();
    assert!(after.contains(&format!("\"createdAt\":\"{}\"", created)));
    assert!(after.contains("\"resultStatus\":\"realized\""));
}

#[test]
fn test_edit_and_show_missing_entry() {
    let temp = init_diary();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["edit", "missing", "--title", "x"])
        .assert()
        .failure()
        .code(4);

    daybook_cmd()
        .current_dir(temp.path())
        .args(["show", "missing"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("daybook list"));
}

#[test]
fn test_delete_entry() {
    let temp = init_diary();
    let keep = write(temp.path(), &["--title", "Keep", "--date", "2025-01-01"]);
    let drop = write(temp.path(), &["--title", "Drop", "--date", "2025-01-02"]);

    daybook_cmd()
        .current_dir(temp.path())
        .args(["delete", &drop])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"));

    let before = fs::read(entries_file(temp.path())).unwrap();
    daybook_cmd()
        .current_dir(temp.path())
        .args(["delete", &drop])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));
    assert_eq!(fs::read(entries_file(temp.path())).unwrap(), before);

    daybook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(keep.as_str()))
        .stdout(predicate::str::contains("Drop").not());
}

#[test]
fn test_search_by_text_mood_and_tag() {
    let temp = init_diary();
    write(
        temp.path(),
        &["--title", "Picnic", "--content", "Sandwiches in the park", "--mood", "excited", "--tag", "family"],
    );
    write(
        temp.path(),
        &["--title", "Dentist", "--content", "Root canal", "--mood", "anxious", "--tag", "health"],
    );

    daybook_cmd()
        .current_dir(temp.path())
        .args(["search", "PARK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Picnic"))
        .stdout(predicate::str::contains("Dentist").not());

    daybook_cmd()
        .current_dir(temp.path())
        .args(["search", "--mood", "bad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dentist"))
        .stdout(predicate::str::contains("Picnic").not());

    daybook_cmd()
        .current_dir(temp.path())
        .args(["search", "--tag", "#Family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Picnic"));

    daybook_cmd()
        .current_dir(temp.path())
        .args(["search", "nothing-matches-this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}
