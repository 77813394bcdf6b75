//! Skill kinds, references, and registry entry types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hard-skill category. Selects which special-case canonicalization rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Certification,
    License,
    Software,
    Portfolio,
}

impl SkillKind {
    /// Scan order used for both registry accumulation and job references.
    pub const SCAN_ORDER: [Self; 4] = [
        Self::Certification,
        Self::License,
        Self::Software,
        Self::Portfolio,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Certification => "certification",
            Self::License => "license",
            Self::Software => "software",
            Self::Portfolio => "portfolio",
        }
    }

    /// Key of this kind's list inside a v5 `hardSkills` object.
    #[must_use]
    pub const fn list_key(self) -> &'static str {
        match self {
            Self::Certification => "certifications",
            Self::License => "licenses",
            Self::Software => "software",
            Self::Portfolio => "portfolio",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{id, level}` pair stored on a v6 job in place of embedded skill data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillRef {
    pub id: String,
    pub level: i64,
}

impl SkillRef {
    #[must_use]
    pub fn new(id: impl Into<String>, level: i64) -> Self {
        Self {
            id: id.into(),
            level,
        }
    }
}

/// Soft-skill registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftSkillMeta {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub asset: Option<String>,
}

/// Hard-skill registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardSkillMeta {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SkillKind,
    pub description: Option<String>,
    pub asset: Option<String>,
}

/// Anything stored in an [`OrderedRegistry`](super::OrderedRegistry).
pub trait RegistryEntry {
    fn registry_id(&self) -> &str;
}

impl RegistryEntry for SoftSkillMeta {
    fn registry_id(&self) -> &str {
        &self.id
    }
}

impl RegistryEntry for HardSkillMeta {
    fn registry_id(&self) -> &str {
        &self.id
    }
}
