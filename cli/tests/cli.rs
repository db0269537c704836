use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const EXAMPLE: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";

fn database(text: &str) -> NamedTempFile {
  let mut file = NamedTempFile::new().unwrap();
  file.write_all(text.as_bytes()).unwrap();
  file
}

fn fresh_ranges() -> Command {
  Command::cargo_bin("fresh-ranges").unwrap()
}

#[test]
fn prints_both_parts() {
  let file = database(EXAMPLE);
  fresh_ranges()
    .arg(file.path())
    .assert()
    .success()
    .stdout("Part 1: 3\nPart 2: 14\n");
}

#[test]
fn prints_selected_part() {
  let file = database(EXAMPLE);
  fresh_ranges()
    .arg(file.path())
    .args(["--part", "2"])
    .assert()
    .success()
    .stdout("Part 2: 14\n");
}

#[test]
fn lists_fresh_ids() {
  let file = database(EXAMPLE);
  fresh_ranges()
    .arg(file.path())
    .args(["--part", "1", "--list"])
    .assert()
    .success()
    .stdout("Part 1: 3\n  5\n  11\n  17\n");
}

#[test]
fn reads_stdin() {
  fresh_ranges()
    .arg("-")
    .write_stdin(EXAMPLE)
    .assert()
    .success()
    .stdout(predicate::str::contains("Part 2: 14"));
}

#[test]
fn json_output() {
  let file = database(EXAMPLE);
  let output = fresh_ranges().arg(file.path()).args(["--format", "json"]).output().unwrap();
  assert!(output.status.success());
  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["countCovered"], 3);
  assert_eq!(report["totalCoveredSize"], "14");
  assert_eq!(
    report["mergedIntervals"],
    serde_json::json!([{"start": 3, "end": 5}, {"start": 10, "end": 20}])
  );
}

#[test]
fn rejects_reversed_range() {
  let file = database("3-5\n9-4\n\n4\n");
  fresh_ranges()
    .arg(file.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("start 9 is greater than end 4"));
}

#[test]
fn reports_parse_error_line() {
  let file = database("3-5\nabc\n\n4\n");
  fresh_ranges()
    .arg(file.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("line 2"));
}

#[test]
fn missing_file() {
  fresh_ranges()
    .arg("does/not/exist.txt")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load database"));
}
