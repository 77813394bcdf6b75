//! Whole-document migration: v5 job list → v6 jobs + two skill registries.
//!
//! The run is a single ordered pass. Hard-skill registry order, and which
//! spelling a registry entry keeps, both come from that order, so records are
//! never reordered or processed out of sequence.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::canonical::is_blank;
use super::job::{JobV6, SCHEMA_VERSION, job_label};
use super::metadata::{SOFT_SKILLS, soft_registry};
use super::registry::HardSkillAccumulator;
use super::skill::{HardSkillMeta, SkillKind, SoftSkillMeta};
use super::transform::{decode_record, transform, value_kind};
use crate::error::{MigError, Result};

/// Knobs that change migration behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct MigrationOptions {
    /// Fail on blank hard-skill names instead of warning.
    pub reject_blank_names: bool,
}

/// A hard-skill entry whose raw name was empty or whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlankName {
    pub index: usize,
    pub job_id: String,
    pub kind: SkillKind,
}

/// Counts describing a finished migration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub jobs: usize,
    pub soft_refs: usize,
    pub hard_refs: usize,
    pub soft_registry: usize,
    pub hard_registry: usize,
    pub duplicates_merged: usize,
    pub blank_names: Vec<BlankName>,
}

/// Everything a successful run produces, still in memory.
#[derive(Debug, Clone)]
pub struct Migration {
    pub jobs: Vec<JobV6>,
    pub soft_skills: Vec<SoftSkillMeta>,
    pub hard_skills: Vec<HardSkillMeta>,
    pub report: MigrationReport,
}

/// The three serialized output documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocuments {
    pub jobs: String,
    pub soft_skills: String,
    pub hard_skills: String,
}

/// Migrate a JSON document given as text.
pub fn migrate_str(input: &str, options: MigrationOptions) -> Result<Migration> {
    let root: Value = serde_json::from_str(input)?;
    migrate_document(root, options)
}

/// Migrate an already-parsed input document.
///
/// Fails on the first structural problem; nothing partial is returned.
pub fn migrate_document(root: Value, options: MigrationOptions) -> Result<Migration> {
    let Value::Array(records) = root else {
        return Err(MigError::InvalidRoot(format!(
            "expected a list of job records, found {}",
            value_kind(&root)
        )));
    };

    let mut accumulator = HardSkillAccumulator::new();
    let mut jobs = Vec::with_capacity(records.len());
    let mut report = MigrationReport::default();

    for (index, record) in records.into_iter().enumerate() {
        let job = decode_record(index, record)?;

        for (name, kind) in job.requirements.hard_skills.iter() {
            if is_blank(name) {
                if options.reject_blank_names {
                    return Err(MigError::BlankSkillName {
                        index,
                        kind: kind.to_string(),
                    });
                }
                let job_id = job_label(&job.id);
                warn!(index, job = %job_id, kind = %kind, "blank hard-skill name");
                report.blank_names.push(BlankName { index, job_id, kind });
            }
            accumulator.observe(name, kind);
        }

        let migrated = transform(&job, index)?;
        debug!(
            index,
            job = %job_label(&migrated.id),
            soft = migrated.requirements.soft_skills.len(),
            hard = migrated.requirements.hard_skills.len(),
            "migrated job"
        );
        report.soft_refs += migrated.requirements.soft_skills.len();
        report.hard_refs += migrated.requirements.hard_skills.len();
        jobs.push(migrated);
    }

    report.duplicates_merged = accumulator.duplicates();
    let hard_skills = accumulator.finish().into_entries();
    let soft_skills = soft_registry();

    report.jobs = jobs.len();
    report.soft_registry = soft_skills.len();
    report.hard_registry = hard_skills.len();

    info!(
        jobs = report.jobs,
        hard_registry = report.hard_registry,
        duplicates = report.duplicates_merged,
        "migration complete"
    );

    Ok(Migration {
        jobs,
        soft_skills,
        hard_skills,
        report,
    })
}

impl Migration {
    /// Serialize all three documents. Nothing touches disk here.
    pub fn render(&self) -> Result<RenderedDocuments> {
        Ok(RenderedDocuments {
            jobs: render_document(&self.jobs)?,
            soft_skills: render_document(&self.soft_skills)?,
            hard_skills: render_document(&self.hard_skills)?,
        })
    }

    /// Cross-check the produced documents against each other.
    #[must_use]
    pub fn integrity(&self) -> IntegrityReport {
        check_integrity(&self.jobs, &self.soft_skills, &self.hard_skills)
    }
}

/// Pretty-printed JSON with a trailing newline.
pub fn render_document<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    Ok(body)
}

/// Which registry a reference or id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryName {
    SoftSkills,
    HardSkills,
}

/// One problem found while cross-checking v6 documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum IntegrityIssue {
    DuplicateId { registry: RegistryName, id: String },
    DanglingReference {
        job: String,
        registry: RegistryName,
        id: String,
    },
    WrongVersion { job: String, version: u32 },
    MissingSoftSkill { id: String },
    UnexpectedSoftSkill { id: String },
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { registry, id } => write!(f, "duplicate id '{id}' in {registry:?}"),
            Self::DanglingReference { job, registry, id } => {
                write!(f, "job '{job}' references unknown {registry:?} id '{id}'")
            }
            Self::WrongVersion { job, version } => {
                write!(f, "job '{job}' has version {version}, expected {SCHEMA_VERSION}")
            }
            Self::MissingSoftSkill { id } => write!(f, "soft registry is missing '{id}'"),
            Self::UnexpectedSoftSkill { id } => write!(f, "soft registry has unexpected '{id}'"),
        }
    }
}

/// Result of [`check_integrity`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrityReport {
    pub jobs: usize,
    pub references: usize,
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Turn a report with issues into an [`MigError::Integrity`] error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_clean() {
            return Ok(self);
        }
        let summary = self
            .issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(MigError::Integrity(format!(
            "{} issue(s): {summary}",
            self.issues.len()
        )))
    }
}

/// Check that v6 jobs and registries agree with each other.
#[must_use]
pub fn check_integrity(
    jobs: &[JobV6],
    soft: &[SoftSkillMeta],
    hard: &[HardSkillMeta],
) -> IntegrityReport {
    let mut report = IntegrityReport {
        jobs: jobs.len(),
        ..IntegrityReport::default()
    };

    let soft_ids = unique_ids(
        soft.iter().map(|e| e.id.as_str()),
        RegistryName::SoftSkills,
        &mut report.issues,
    );
    let hard_ids = unique_ids(
        hard.iter().map(|e| e.id.as_str()),
        RegistryName::HardSkills,
        &mut report.issues,
    );

    for spec in &SOFT_SKILLS {
        if !soft_ids.contains(spec.id) {
            report.issues.push(IntegrityIssue::MissingSoftSkill {
                id: spec.id.to_string(),
            });
        }
    }
    let mut reported = HashSet::new();
    for entry in soft {
        let id = entry.id.as_str();
        if !SOFT_SKILLS.iter().any(|spec| spec.id == id) && reported.insert(id) {
            report.issues.push(IntegrityIssue::UnexpectedSoftSkill { id: id.to_string() });
        }
    }

    for job in jobs {
        let label = job_label(&job.id);
        if job.version != SCHEMA_VERSION {
            report.issues.push(IntegrityIssue::WrongVersion {
                job: label.clone(),
                version: job.version,
            });
        }
        let refs = [
            (RegistryName::SoftSkills, &job.requirements.soft_skills, &soft_ids),
            (RegistryName::HardSkills, &job.requirements.hard_skills, &hard_ids),
        ];
        for (registry, skill_refs, known) in refs {
            for skill_ref in skill_refs {
                report.references += 1;
                if !known.contains(skill_ref.id.as_str()) {
                    report.issues.push(IntegrityIssue::DanglingReference {
                        job: label.clone(),
                        registry,
                        id: skill_ref.id.clone(),
                    });
                }
            }
        }
    }

    report
}

fn unique_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    registry: RegistryName,
    issues: &mut Vec<IntegrityIssue>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(IntegrityIssue::DuplicateId {
                registry,
                id: id.to_string(),
            });
        }
    }
    seen
}
