use skillmig::test_utils::fixtures::job_with_software;

use crate::fixture::TestFixture;
use crate::{assert_command_success, assert_exit_code, assert_file_exists, assert_file_missing};

#[test]
fn project_config_sets_paths() {
    let fixture = TestFixture::new("project_config_sets_paths");
    fixture.write_input("in/jobs.json", &[job_with_software("a", &["Office"])]);
    fixture.write_file(
        "skillmig.toml",
        r#"
[paths]
input = "in/jobs.json"
jobs_output = "out/jobs.json"
hard_output = "out/hard.json"
"#,
    );

    assert_command_success!(fixture.run(&["migrate"]));
    assert_file_exists!(&fixture.path("out/jobs.json"));
    assert_file_exists!(&fixture.path("out/hard.json"));
    assert_file_exists!(&fixture.path("softSkills.json"));
}

#[cfg(target_os = "linux")]
#[test]
fn global_config_is_read_from_config_home() {
    let fixture = TestFixture::new("global_config_is_read_from_config_home");
    fixture.write_input("global.json", &[job_with_software("a", &["Office"])]);
    fixture.write_file(
        ".config/skillmig/config.toml",
        r#"
[paths]
input = "global.json"
"#,
    );

    assert_command_success!(fixture.run(&["migrate"]));
    assert_file_exists!(&fixture.path("dataV6.json"));
}

#[test]
fn explicit_config_flag_wins_over_project_file() {
    let fixture = TestFixture::new("explicit_config_flag_wins_over_project_file");
    fixture.write_input("explicit.json", &[job_with_software("a", &["Office"])]);
    fixture.write_file("skillmig.toml", "[paths]\ninput = \"missing.json\"\n");
    fixture.write_file("custom.toml", "[paths]\ninput = \"explicit.json\"\n");

    assert_command_success!(fixture.run(&["--config", "custom.toml", "migrate"]));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let fixture = TestFixture::new("missing_explicit_config_is_an_error");

    let output = fixture.run(&["--robot", "--config", "nope.toml", "migrate"]);
    assert_exit_code!(output, 1);
    assert_eq!(output.error_code(), "CONFIG_INVALID");
}

#[test]
fn env_overrides_config_file() {
    let fixture = TestFixture::new("env_overrides_config_file");
    fixture.write_input("env.json", &[job_with_software("a", &["Office"])]);
    fixture.write_file("skillmig.toml", "[paths]\ninput = \"missing.json\"\n");

    let output = fixture.run_with_env(
        &["migrate"],
        &[("SKILLMIG_INPUT", "env.json"), ("SKILLMIG_JOBS_OUTPUT", "env-v6.json")],
    );
    assert_command_success!(output);
    assert_file_exists!(&fixture.path("env-v6.json"));
    assert_file_missing!(&fixture.path("dataV6.json"));
}

#[test]
fn cli_input_flag_wins_over_env() {
    let fixture = TestFixture::new("cli_input_flag_wins_over_env");
    fixture.write_input("flag.json", &[job_with_software("a", &["Office"])]);

    let output = fixture.run_with_env(
        &["migrate", "--input", "flag.json"],
        &[("SKILLMIG_INPUT", "missing.json")],
    );
    assert_command_success!(output);
}

#[test]
fn reject_blank_names_from_env() {
    let fixture = TestFixture::with_input(
        "reject_blank_names_from_env",
        &[job_with_software("a", &["Office", ""])],
    );

    let output = fixture.run_with_env(
        &["--robot", "migrate"],
        &[("SKILLMIG_REJECT_BLANK_NAMES", "true")],
    );
    assert_exit_code!(output, 1);
    assert_eq!(output.error_code(), "BLANK_SKILL_NAME");
    assert_file_missing!(&fixture.path("dataV6.json"));
}

#[test]
fn reject_blank_names_from_config_file() {
    let fixture = TestFixture::with_input(
        "reject_blank_names_from_config_file",
        &[job_with_software("a", &["   "])],
    );
    fixture.write_file("skillmig.toml", "[migration]\nreject_blank_names = true\n");

    let output = fixture.run(&["migrate"]);
    assert_exit_code!(output, 1);
    assert!(output.stderr.contains("blank software name"), "{}", output.stderr);
}
