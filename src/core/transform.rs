//! v5 job record → v6 job record.

use serde_json::Value;

use super::canonical::canonicalize;
use super::job::{JobV5, JobV6, REQUIRED_FIELDS, RequirementsV6, SCHEMA_VERSION};
use super::metadata::SOFT_SKILLS;
use super::skill::SkillRef;
use crate::error::{MigError, Result};

/// Level given to every migrated hard-skill reference. v5 had no hard-skill levels.
pub const HARD_SKILL_LEVEL: i64 = 1;

/// Decode one element of the input list, enforcing the required fields.
pub fn decode_record(index: usize, record: Value) -> Result<JobV5> {
    let Value::Object(fields) = &record else {
        return Err(MigError::InvalidRecord {
            index,
            reason: format!("expected an object, found {}", value_kind(&record)),
        });
    };

    if let Some(field) = REQUIRED_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
        return Err(MigError::MissingField {
            index,
            field: (*field).to_string(),
        });
    }

    serde_json::from_value(record).map_err(|err| MigError::InvalidRecord {
        index,
        reason: err.to_string(),
    })
}

/// Rewrite a decoded v5 job into its v6 shape.
///
/// `index` is the record's position in the input list and only feeds error
/// messages.
pub fn transform(job: &JobV5, index: usize) -> Result<JobV6> {
    let req = &job.requirements;

    let mut soft_skills = Vec::new();
    for spec in &SOFT_SKILLS {
        let Some(raw) = req.soft_skills.get(spec.legacy_key) else {
            continue;
        };
        let level = coerce_level(raw).ok_or_else(|| MigError::InvalidLevel {
            index,
            key: spec.legacy_key.to_string(),
            value: raw.to_string(),
        })?;
        soft_skills.push(SkillRef::new(spec.id, level));
    }

    let hard_skills = req
        .hard_skills
        .iter()
        .map(|(name, kind)| SkillRef::new(canonicalize(name, kind), HARD_SKILL_LEVEL))
        .collect();

    Ok(JobV6 {
        id: job.id.clone(),
        category: job.category.clone(),
        income: job.income.clone(),
        summary: job.summary.clone(),
        icon: job.icon.clone(),
        requirements: RequirementsV6 {
            education: req.education.clone(),
            soft_skills,
            hard_skills,
        },
        company_tier: job.company_tier.clone(),
        version: SCHEMA_VERSION,
    })
}

/// Integer coercion for soft-skill levels.
///
/// Accepts integers, finite floats (truncated toward zero), booleans, and
/// strings holding an integer. Everything else is rejected, including
/// integers or floats outside the `i64` range (`u64::MAX`, `1e19`).
#[must_use]
pub fn coerce_level(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(f64::trunc)
                .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Short description of a JSON value's type, for error messages.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
