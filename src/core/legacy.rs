//! Rebuild v5-shaped job records from v6 jobs and the hard-skill registry.
//!
//! Consumers that still read v5 get the full twelve-key soft-skill block and
//! per-kind raw-name lists back.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

use super::job::{Education, HardSkillsV5, JobV6, LEGACY_SCHEMA_VERSION, job_label};
use super::metadata::{SOFT_SKILLS, soft_skill_by_id};
use super::registry::HardSkillRegistry;
use super::skill::SkillKind;

/// Canonical id → (kind, spelling used by v5 data).
const LEGACY_SPELLINGS: &[(&str, SkillKind, &str)] = &[
    ("drivers", SkillKind::License, "B"),
    ("cdl", SkillKind::License, "CE"),
    ("rn", SkillKind::License, "RN"),
    ("electrician", SkillKind::License, "EL"),
    ("plumber", SkillKind::License, "PL"),
    ("office", SkillKind::Software, "Office"),
    ("programming", SkillKind::Software, "Programming"),
    ("mediaEditing", SkillKind::Software, "Photo/Video Editing"),
    ("gameEngine", SkillKind::Software, "Game Engine"),
    ("security", SkillKind::Certification, "Security"),
    ("appPortfolio", SkillKind::Portfolio, "App"),
    ("gamePortfolio", SkillKind::Portfolio, "Game"),
    ("websitePortfolio", SkillKind::Portfolio, "Website"),
    ("libraryPortfolio", SkillKind::Portfolio, "Library"),
    ("paperPortfolio", SkillKind::Portfolio, "Paper"),
    ("presentationPortfolio", SkillKind::Portfolio, "Presentation"),
];

/// v5 soft-skill block: every legacy key in table order, absent ones at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacySoftSkills(pub Vec<(&'static str, i64)>);

impl Serialize for LegacySoftSkills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, level) in &self.0 {
            map.serialize_entry(key, level)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRequirements {
    pub education: Education,
    pub soft_skills: LegacySoftSkills,
    pub hard_skills: HardSkillsV5,
}

/// A downgraded job record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyJob {
    pub id: Value,
    pub category: Value,
    pub income: Value,
    pub summary: Value,
    pub icon: Value,
    pub requirements: LegacyRequirements,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_tier: Option<Value>,
    pub version: u32,
}

/// A hard-skill reference that could not be placed in any v5 list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedRef {
    pub job: String,
    pub id: String,
}

#[derive(Debug, Clone, Default)]
pub struct DowngradeOutcome {
    pub jobs: Vec<LegacyJob>,
    pub dropped: Vec<DroppedRef>,
}

/// Where a canonical id goes in a v5 record.
#[must_use]
pub fn legacy_placement(id: &str, hard: &HardSkillRegistry) -> Option<(SkillKind, String)> {
    if let Some((_, kind, spelling)) = LEGACY_SPELLINGS.iter().find(|(key, _, _)| *key == id) {
        return Some((*kind, (*spelling).to_string()));
    }
    hard.get(id).map(|entry| (entry.kind, entry.name.clone()))
}

/// Downgrade every job. Unplaceable hard-skill refs are dropped and reported.
#[must_use]
pub fn downgrade(jobs: &[JobV6], hard: &HardSkillRegistry) -> DowngradeOutcome {
    let mut outcome = DowngradeOutcome::default();

    for job in jobs {
        let levels = SOFT_SKILLS
            .iter()
            .map(|spec| {
                let level = job
                    .requirements
                    .soft_skills
                    .iter()
                    .find(|r| r.id == spec.id)
                    .map_or(0, |r| r.level);
                (spec.legacy_key, level)
            })
            .collect();

        for skill_ref in &job.requirements.soft_skills {
            if soft_skill_by_id(&skill_ref.id).is_none() {
                warn!(job = %job_label(&job.id), id = %skill_ref.id, "unknown soft skill dropped");
            }
        }

        let mut hard_skills = HardSkillsV5::default();
        for skill_ref in &job.requirements.hard_skills {
            match legacy_placement(&skill_ref.id, hard) {
                Some((kind, raw)) => hard_skills.names_mut(kind).push(raw),
                None => {
                    let label = job_label(&job.id);
                    warn!(job = %label, id = %skill_ref.id, "hard skill has no v5 spelling");
                    outcome.dropped.push(DroppedRef {
                        job: label,
                        id: skill_ref.id.clone(),
                    });
                }
            }
        }

        outcome.jobs.push(LegacyJob {
            id: job.id.clone(),
            category: job.category.clone(),
            income: job.income.clone(),
            summary: job.summary.clone(),
            icon: job.icon.clone(),
            requirements: LegacyRequirements {
                education: job.requirements.education.clone(),
                soft_skills: LegacySoftSkills(levels),
                hard_skills,
            },
            company_tier: job.company_tier.clone(),
            version: LEGACY_SCHEMA_VERSION,
        });
    }

    outcome
}
