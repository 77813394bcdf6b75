use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::{Map, Value, json};

use skillmig::core::{
    HardSkillMeta, MigrationOptions, SOFT_SKILLS, SkillKind, canonicalize, migrate_document,
    resolve,
};
use skillmig::test_utils::fixtures::job_v5;

fn arb_kind() -> impl Strategy<Value = SkillKind> {
    prop_oneof![
        Just(SkillKind::Certification),
        Just(SkillKind::License),
        Just(SkillKind::Software),
        Just(SkillKind::Portfolio),
    ]
}

fn arb_raw_name() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(vec![
            "B", "Driver's License", "CE", "CDL", "RN", "Nurse", "Office", " Office ",
            "Programming", "Game Engine", "Security", "App", "Presentation",
        ])
        .prop_map(String::from),
        2 => "[A-Za-z&]{1,6}( [A-Za-z&]{1,6})?",
        1 => " {0,2}",
    ]
}

fn arb_hard_skills() -> impl Strategy<Value = Value> {
    let list = || prop::collection::vec(arb_raw_name(), 0..4);
    (list(), list(), list(), list()).prop_map(|(certifications, licenses, software, portfolio)| {
        json!({
            "certifications": certifications,
            "licenses": licenses,
            "software": software,
            "portfolio": portfolio,
        })
    })
}

fn arb_soft_skills() -> impl Strategy<Value = Value> {
    prop::collection::vec((0..SOFT_SKILLS.len(), 0i64..10), 0..6).prop_map(|levels| {
        let mut map = Map::new();
        for (slot, level) in levels {
            map.insert(SOFT_SKILLS[slot].legacy_key.to_string(), json!(level));
        }
        Value::Object(map)
    })
}

fn arb_jobs() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec((arb_soft_skills(), arb_hard_skills()), 0..8).prop_map(|parts| {
        parts
            .into_iter()
            .enumerate()
            .map(|(i, (soft, hard))| {
                job_v5(
                    &format!("job{i}"),
                    json!({ "softSkills": soft, "hardSkills": hard }),
                )
            })
            .collect()
    })
}

/// Every `(raw, kind)` pair in scan order: records, then kinds, then list order.
fn scan(jobs: &[Value]) -> Vec<(String, SkillKind)> {
    let mut out = Vec::new();
    for job in jobs {
        for kind in SkillKind::SCAN_ORDER {
            let names = job["requirements"]["hardSkills"][kind.list_key()]
                .as_array()
                .unwrap();
            for name in names {
                out.push((name.as_str().unwrap().to_string(), kind));
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn canonicalize_is_deterministic(name in ".{0,24}", kind in arb_kind()) {
        let first = canonicalize(&name, kind);
        prop_assert_eq!(&first, &canonicalize(&name, kind));
        prop_assert!(!first.chars().any(char::is_whitespace));
    }

    #[test]
    fn registry_keeps_first_seen_entry_per_id(jobs in arb_jobs()) {
        let migration = migrate_document(Value::Array(jobs.clone()), MigrationOptions::default()).unwrap();

        let mut seen = HashSet::new();
        let expected: Vec<HardSkillMeta> = scan(&jobs)
            .into_iter()
            .filter(|(raw, kind)| seen.insert(canonicalize(raw, *kind)))
            .map(|(raw, kind)| resolve(&raw, kind))
            .collect();

        prop_assert_eq!(migration.hard_skills, expected);
    }

    #[test]
    fn every_reference_resolves(jobs in arb_jobs()) {
        let migration = migrate_document(Value::Array(jobs), MigrationOptions::default()).unwrap();

        let report = migration.integrity();
        prop_assert!(report.is_clean(), "{:?}", report.issues);
        prop_assert_eq!(migration.soft_skills.len(), 12);
        for job in &migration.jobs {
            prop_assert_eq!(job.version, 6);
            prop_assert!(job.requirements.hard_skills.iter().all(|r| r.level == 1));
        }
    }

    #[test]
    fn soft_levels_match_input(jobs in arb_jobs()) {
        let migration = migrate_document(Value::Array(jobs.clone()), MigrationOptions::default()).unwrap();

        for (input, output) in jobs.iter().zip(&migration.jobs) {
            let levels = input["requirements"]["softSkills"].as_object().unwrap();
            prop_assert_eq!(output.requirements.soft_skills.len(), levels.len());
            for skill_ref in &output.requirements.soft_skills {
                let spec = SOFT_SKILLS.iter().find(|s| s.id == skill_ref.id).unwrap();
                prop_assert_eq!(levels[spec.legacy_key].as_i64(), Some(skill_ref.level));
            }
        }
    }

    #[test]
    fn rendering_is_byte_identical_across_runs(jobs in arb_jobs()) {
        let render = || {
            migrate_document(Value::Array(jobs.clone()), MigrationOptions::default())
                .unwrap()
                .render()
                .unwrap()
        };
        prop_assert_eq!(render(), render());
    }
}
