use serde_json::{Value, json};
use skillmig::test_utils::fixtures::{job_with_software, overlapping_jobs};

use crate::fixture::TestFixture;
use crate::{assert_command_success, assert_file_exists};

#[test]
fn downgrade_writes_v5_document() {
    let fixture = TestFixture::with_input("downgrade_writes_v5_document", &overlapping_jobs());
    assert_command_success!(fixture.run(&["migrate"]));

    let output = fixture.run(&["downgrade", "--output", "legacy/dataV5.json"]);
    assert_command_success!(output);
    assert_file_exists!(&fixture.path("legacy/dataV5.json"));

    let jobs = fixture.read_json("legacy/dataV5.json");
    let trucker = &jobs[0];
    assert_eq!(trucker["version"], 5);
    assert_eq!(
        trucker["requirements"]["hardSkills"],
        json!({
            "certifications": [],
            "licenses": ["CE", "B"],
            "software": [],
            "portfolio": []
        })
    );

    let soft = trucker["requirements"]["softSkills"].as_object().unwrap();
    assert_eq!(soft.len(), 12);
    assert_eq!(soft["perseveranceAndGrit"], 4);
    assert_eq!(soft["spacialNavigation"], 5);
    assert_eq!(soft["physicalStrength"], 0);

    let nurse = &jobs[1];
    assert_eq!(
        nurse["requirements"]["hardSkills"]["licenses"],
        json!(["RN", "B", "CE"])
    );
    assert_eq!(nurse["requirements"]["education"]["acceptedProfiles"], json!(["health"]));
}

#[test]
fn downgrade_then_migrate_restores_v6_jobs() {
    let fixture =
        TestFixture::with_input("downgrade_then_migrate_restores_v6_jobs", &overlapping_jobs());
    assert_command_success!(fixture.run(&["migrate"]));
    let original = fixture.read_json("dataV6.json");

    assert_command_success!(fixture.run(&["downgrade", "--output", "roundtrip/dataV5.json"]));
    assert_command_success!(fixture.run(&[
        "migrate",
        "--input",
        "roundtrip/dataV5.json",
        "--out-dir",
        "roundtrip",
    ]));

    // Zero-filled soft skills come back as explicit level-0 refs.
    let restored = fixture.read_json("roundtrip/dataV6.json");
    let strip_zero = |jobs: &Value| -> Value {
        let mut jobs = jobs.clone();
        for job in jobs.as_array_mut().unwrap() {
            job["requirements"]["softSkills"]
                .as_array_mut()
                .unwrap()
                .retain(|skill_ref| skill_ref["level"] != 0);
        }
        jobs
    };
    assert_eq!(strip_zero(&restored), original);
}

#[test]
fn downgrade_uses_registry_name_for_custom_skills() {
    let fixture = TestFixture::with_input(
        "downgrade_uses_registry_name_for_custom_skills",
        &[job_with_software("a", &["Custom Tool", "Office"])],
    );
    assert_command_success!(fixture.run(&["migrate"]));

    let output = fixture.run(&["--robot", "downgrade"]);
    assert_command_success!(output);

    let data = &output.json()["data"];
    assert_eq!(
        data["jobs"][0]["requirements"]["hardSkills"]["software"],
        json!(["Custom Tool", "Office"])
    );
    assert_eq!(data["dropped"], json!([]));
}

#[test]
fn downgrade_reports_dropped_refs() {
    let fixture = TestFixture::with_input(
        "downgrade_reports_dropped_refs",
        &[job_with_software("a", &["Office"])],
    );
    assert_command_success!(fixture.run(&["migrate"]));

    let mut jobs = fixture.read_json("dataV6.json");
    jobs[0]["requirements"]["hardSkills"]
        .as_array_mut()
        .unwrap()
        .push(json!({ "id": "ghost", "level": 1 }));
    fixture.write_file("dataV6.json", &jobs.to_string());

    let output = fixture.run(&["--robot", "downgrade", "--output", "legacy.json"]);
    assert_command_success!(output);

    let data = &output.json()["data"];
    assert_eq!(data["jobs"], 1);
    assert_eq!(data["dropped"], json!([{ "job": "a", "id": "ghost" }]));
}

#[test]
fn downgrade_prints_document_without_output_flag() {
    let fixture = TestFixture::with_input(
        "downgrade_prints_document_without_output_flag",
        &[job_with_software("a", &["Office"])],
    );
    assert_command_success!(fixture.run(&["migrate"]));

    let output = fixture.run(&["downgrade"]);
    assert_command_success!(output);

    let jobs: Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(jobs[0]["requirements"]["hardSkills"]["software"], json!(["Office"]));
}
