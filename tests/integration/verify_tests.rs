use serde_json::json;
use skillmig::test_utils::fixtures::overlapping_jobs;

use crate::fixture::TestFixture;
use crate::{assert_command_success, assert_exit_code};

fn migrated(test_name: &str) -> TestFixture {
    let fixture = TestFixture::with_input(test_name, &overlapping_jobs());
    assert_command_success!(fixture.run(&["migrate", "--out-dir", "v6"]));
    fixture
}

#[test]
fn verify_accepts_fresh_migration() {
    let fixture = migrated("verify_accepts_fresh_migration");

    let output = fixture.run(&["--robot", "verify", "--dir", "v6"]);
    assert_command_success!(output);

    let data = &output.json()["data"];
    assert_eq!(data["jobs"], 2);
    assert_eq!(data["references"], 12);
    assert_eq!(data["issues"], json!([]));
}

#[test]
fn verify_reports_dangling_hard_skill() {
    let fixture = migrated("verify_reports_dangling_hard_skill");

    let mut hard = fixture.read_json("v6/hardSkills.json");
    hard.as_array_mut().unwrap().retain(|entry| entry["id"] != "office");
    fixture.write_file("v6/hardSkills.json", &hard.to_string());

    let output = fixture.run(&["verify", "--dir", "v6"]);
    assert_exit_code!(output, 1);
    assert!(output.stdout.contains("office"), "{}", output.stdout);
    assert!(output.stderr.contains("Integrity check failed"), "{}", output.stderr);
}

#[test]
fn verify_robot_error_lists_every_issue() {
    let fixture = migrated("verify_robot_error_lists_every_issue");

    let mut jobs = fixture.read_json("v6/dataV6.json");
    jobs[0]["version"] = json!(5);
    jobs[1]["requirements"]["softSkills"][0]["id"] = json!("charisma");
    fixture.write_file("v6/dataV6.json", &jobs.to_string());

    let output = fixture.run(&["--robot", "verify", "--dir", "v6"]);
    assert_exit_code!(output, 1);
    assert_eq!(output.error_code(), "INTEGRITY_VIOLATION");

    let message = output.json()["status"]["error"]["message"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.contains("2 issue(s)"), "{message}");
    assert!(message.contains("version 5"), "{message}");
    assert!(message.contains("charisma"), "{message}");
}

#[test]
fn verify_flags_incomplete_soft_registry() {
    let fixture = migrated("verify_flags_incomplete_soft_registry");

    let mut soft = fixture.read_json("v6/softSkills.json");
    soft.as_array_mut().unwrap().pop();
    fixture.write_file("v6/softSkills.json", &soft.to_string());

    let output = fixture.run(&["verify", "--dir", "v6"]);
    assert_exit_code!(output, 1);
    assert!(output.stdout.contains("endurance"), "{}", output.stdout);
}

#[test]
fn verify_missing_documents_is_not_found() {
    let fixture = TestFixture::new("verify_missing_documents_is_not_found");

    let output = fixture.run(&["--robot", "verify"]);
    assert_exit_code!(output, 1);
    assert_eq!(output.error_code(), "INPUT_NOT_FOUND");
}
