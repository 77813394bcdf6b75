//! Display metadata for skill identifiers.
//!
//! Holds the fixed soft-skill table (legacy v5 key → v6 id → display name) and
//! the friendly-name table for hard skills with a curated label.

use super::canonical::canonicalize;
use super::skill::{HardSkillMeta, SkillKind, SoftSkillMeta};

/// One row of the legacy soft-skill table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftSkillSpec {
    /// Key used in v5 `softSkills` maps.
    pub legacy_key: &'static str,
    /// Identifier used in v6 references and the soft registry.
    pub id: &'static str,
    pub display: &'static str,
}

const fn soft(legacy_key: &'static str, id: &'static str, display: &'static str) -> SoftSkillSpec {
    SoftSkillSpec {
        legacy_key,
        id,
        display,
    }
}

/// The twelve soft skills, in registry and reference order.
pub const SOFT_SKILLS: [SoftSkillSpec; 12] = [
    soft("analyticalReasoningAndProblemSolving", "analyticalReasoning", "Problem Solving"),
    soft("creativityAndInsightfulThinking", "creativity", "Creativity"),
    soft("communicationAndNetworking", "communication", "Communication"),
    soft("leadershipAndInfluence", "leadership", "Leadership"),
    soft("courageAndRiskTolerance", "riskTolerance", "Risk Tolerance"),
    soft("spacialNavigation", "spatialNavigation", "Navigation"),
    soft("carefulnessAndAttentionToDetail", "attentionToDetail", "Attention To Detail"),
    soft("perseveranceAndGrit", "perseverance", "Perseverance"),
    soft("tinkeringAndFingerPrecision", "tinkering", "Tinkering"),
    soft("physicalStrength", "strength", "Strength"),
    soft("coordinationAndBalance", "coordination", "Coordination"),
    soft("resilienceAndEndurance", "endurance", "Endurance"),
];

const FRIENDLY_NAMES: &[(&str, &str)] = &[
    ("office", "Office Suite"),
    ("programming", "Programming"),
    ("mediaEditing", "Photo & Video Editing"),
    ("gameEngine", "Game Engine"),
    ("rn", "Registered Nurse License"),
    ("drivers", "Driver\u{2019}s License"),
    ("cdl", "Commercial Driver\u{2019}s License"),
    ("electrician", "Electrician License"),
    ("plumber", "Plumber License"),
    ("security", "Security Awareness"),
    ("appPortfolio", "App"),
    ("gamePortfolio", "Game"),
    ("websitePortfolio", "Website"),
    ("libraryPortfolio", "Library"),
    ("paperPortfolio", "Paper"),
    ("presentationPortfolio", "Presentation"),
];

/// Curated display name for a canonical hard-skill id, if one exists.
#[must_use]
pub fn friendly_name(id: &str) -> Option<&'static str> {
    FRIENDLY_NAMES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, name)| *name)
}

/// Build the registry entry for a raw hard-skill name.
///
/// Without a curated label the raw name is used as given, untrimmed.
#[must_use]
pub fn resolve(raw: &str, kind: SkillKind) -> HardSkillMeta {
    let id = canonicalize(raw, kind);
    let name = friendly_name(&id).map_or_else(|| raw.to_string(), str::to_string);
    HardSkillMeta {
        id,
        name,
        kind,
        description: None,
        asset: None,
    }
}

/// Look up a soft skill by its v6 identifier.
#[must_use]
pub fn soft_skill_by_id(id: &str) -> Option<&'static SoftSkillSpec> {
    SOFT_SKILLS.iter().find(|spec| spec.id == id)
}

/// The soft-skill registry. Independent of any input.
#[must_use]
pub fn soft_registry() -> Vec<SoftSkillMeta> {
    SOFT_SKILLS
        .iter()
        .map(|spec| SoftSkillMeta {
            id: spec.id.to_string(),
            name: spec.display.to_string(),
            description: None,
            asset: None,
        })
        .collect()
}
