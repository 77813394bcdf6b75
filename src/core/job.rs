//! Job record shapes for schema v5 (input) and v6 (output).
//!
//! Identity fields are carried as raw JSON values so they round-trip
//! verbatim; only the `requirements` block is reshaped.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::skill::{SkillKind, SkillRef};

/// Schema version written on every migrated job.
pub const SCHEMA_VERSION: u32 = 6;

/// Schema version of the input records (and of downgraded output).
pub const LEGACY_SCHEMA_VERSION: u32 = 5;

/// Top-level fields every input record must carry.
pub const REQUIRED_FIELDS: [&str; 5] = ["id", "category", "income", "summary", "icon"];

/// Treat an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn default_min_eqf() -> Value {
    Value::from(0)
}

/// Education requirements. Same shape in v5 and v6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "minEQF", default = "default_min_eqf")]
    pub min_eqf: Value,
    #[serde(rename = "acceptedProfiles", default)]
    pub accepted_profiles: Value,
}

impl Default for Education {
    fn default() -> Self {
        Self {
            min_eqf: default_min_eqf(),
            accepted_profiles: Value::Null,
        }
    }
}

/// v5 hard skills: raw names grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardSkillsV5 {
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub licenses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub software: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub portfolio: Vec<String>,
}

impl HardSkillsV5 {
    #[must_use]
    pub fn names(&self, kind: SkillKind) -> &[String] {
        match kind {
            SkillKind::Certification => &self.certifications,
            SkillKind::License => &self.licenses,
            SkillKind::Software => &self.software,
            SkillKind::Portfolio => &self.portfolio,
        }
    }

    pub fn names_mut(&mut self, kind: SkillKind) -> &mut Vec<String> {
        match kind {
            SkillKind::Certification => &mut self.certifications,
            SkillKind::License => &mut self.licenses,
            SkillKind::Software => &mut self.software,
            SkillKind::Portfolio => &mut self.portfolio,
        }
    }

    /// Every `(raw name, kind)` pair in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SkillKind)> {
        SkillKind::SCAN_ORDER
            .into_iter()
            .flat_map(move |kind| self.names(kind).iter().map(move |name| (name.as_str(), kind)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsV5 {
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Education,
    /// Legacy soft-skill key → level. Levels are coerced during transform.
    #[serde(default, deserialize_with = "null_as_default")]
    pub soft_skills: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hard_skills: HardSkillsV5,
}

/// Input job record (schema v5).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobV5 {
    pub id: Value,
    pub category: Value,
    pub income: Value,
    pub summary: Value,
    pub icon: Value,
    #[serde(default)]
    pub company_tier: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: RequirementsV5,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsV6 {
    pub education: Education,
    pub soft_skills: Vec<SkillRef>,
    pub hard_skills: Vec<SkillRef>,
}

/// Output job record (schema v6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobV6 {
    pub id: Value,
    pub category: Value,
    pub income: Value,
    pub summary: Value,
    pub icon: Value,
    pub requirements: RequirementsV6,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_tier: Option<Value>,
    pub version: u32,
}

/// Human-readable label for a job id value.
#[must_use]
pub fn job_label(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
