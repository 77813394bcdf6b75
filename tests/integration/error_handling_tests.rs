//! Error handling integration tests
//!
//! Robot mode puts a structured error on stdout: code, numeric code,
//! suggestion, and context where the error has one.

use serde_json::json;
use skillmig::test_utils::fixtures::{job_v5, job_with_software};

use crate::fixture::TestFixture;
use crate::{assert_exit_code, assert_file_missing};

#[test]
fn missing_input_file() {
    let fixture = TestFixture::new("missing_input_file");

    let output = fixture.run(&["--robot", "migrate"]);
    assert_exit_code!(output, 1);

    let json = output.json();
    let error = &json["status"]["error"];
    assert_eq!(error["code"], "INPUT_NOT_FOUND");
    assert_eq!(error["numeric_code"], 101);
    assert_eq!(error["category"], "input");
    assert!(error["context"]["path"].as_str().unwrap().ends_with("dataV5.json"));
    assert!(!error["suggestion"].as_str().unwrap().is_empty());
    assert_eq!(json["data"], json!(null));
}

#[test]
fn root_must_be_a_list() {
    let fixture = TestFixture::new("root_must_be_a_list");
    fixture.write_file("dataV5.json", r#"{ "jobs": [] }"#);

    let output = fixture.run(&["--robot", "migrate"]);
    assert_exit_code!(output, 1);
    assert_eq!(output.error_code(), "INPUT_NOT_LIST");
    assert_file_missing!(&fixture.path("dataV6.json"));
}

#[test]
fn missing_required_field_has_context() {
    let mut broken = job_with_software("b", &[]);
    broken.as_object_mut().unwrap().remove("summary");
    let fixture = TestFixture::with_input(
        "missing_required_field_has_context",
        &[job_with_software("a", &[]), broken],
    );

    let output = fixture.run(&["--robot", "migrate"]);
    assert_exit_code!(output, 1);

    let error = &output.json()["status"]["error"];
    assert_eq!(error["code"], "RECORD_MISSING_FIELD");
    assert_eq!(error["context"], json!({ "index": 1, "field": "summary" }));
}

#[test]
fn non_numeric_soft_level_is_fatal() {
    let job = job_v5(
        "a",
        json!({ "softSkills": { "physicalStrength": "strong" } }),
    );
    let fixture = TestFixture::with_input("non_numeric_soft_level_is_fatal", &[job]);

    let output = fixture.run(&["--robot", "migrate"]);
    assert_exit_code!(output, 1);
    assert_eq!(output.error_code(), "LEVEL_INVALID");
    assert_file_missing!(&fixture.path("dataV6.json"));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let fixture = TestFixture::new("malformed_json_is_a_serialization_error");
    fixture.write_file("dataV5.json", "[ { \"id\": ");

    let output = fixture.run(&["--robot", "migrate"]);
    assert_exit_code!(output, 1);
    assert_eq!(output.error_code(), "SERIALIZATION_ERROR");
}

#[test]
fn human_mode_errors_go_to_stderr() {
    let fixture = TestFixture::new("human_mode_errors_go_to_stderr");

    let output = fixture.run(&["migrate"]);
    assert_exit_code!(output, 1);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("Error: Not found"), "{}", output.stderr);
}
