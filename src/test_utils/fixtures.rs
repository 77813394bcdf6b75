use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl UnitTestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {:?}", data_path);

        Self { temp_dir, data_path }
    }

    /// Create a test file with content.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Write a v5 input document holding the given records.
    pub fn create_input(&self, relative_path: &str, records: &[Value]) -> PathBuf {
        let body = serde_json::to_string_pretty(records).expect("Failed to encode records");
        self.create_file(relative_path, &body)
    }
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}

/// A v5 job record with every required field and the given requirements.
pub fn job_v5(id: &str, requirements: Value) -> Value {
    json!({
        "id": id,
        "category": "technology",
        "income": 72000,
        "summary": format!("{id} summary"),
        "icon": "💻",
        "requirements": requirements,
        "version": 5
    })
}

/// A v5 job record whose hard skills are only the given software names.
pub fn job_with_software(id: &str, software: &[&str]) -> Value {
    job_v5(
        id,
        json!({
            "education": { "minEQF": 4, "acceptedProfiles": ["stem"] },
            "softSkills": { "analyticalReasoningAndProblemSolving": 3 },
            "hardSkills": { "software": software }
        }),
    )
}

/// Two records that share skills under different raw spellings.
pub fn overlapping_jobs() -> Vec<Value> {
    vec![
        job_v5(
            "trucker",
            json!({
                "education": { "minEQF": 3 },
                "softSkills": {
                    "perseveranceAndGrit": 4,
                    "spacialNavigation": 5
                },
                "hardSkills": {
                    "certifications": [],
                    "licenses": ["CE", "B"],
                    "software": [],
                    "portfolio": []
                }
            }),
        ),
        job_v5(
            "nurse",
            json!({
                "education": { "minEQF": 6, "acceptedProfiles": ["health"] },
                "softSkills": {
                    "communicationAndNetworking": 5,
                    "resilienceAndEndurance": 4
                },
                "hardSkills": {
                    "certifications": ["Security"],
                    "licenses": ["Nurse License", "Driver's License", "CDL"],
                    "software": ["Office"],
                    "portfolio": ["Presentation"]
                }
            }),
        ),
    ]
}
