//! Shared test utilities for skillmig.

pub mod fixtures;

use crate::core::SkillKind;

/// An expected `(raw name, kind) -> canonical id` mapping.
pub type IdCase = (&'static str, SkillKind, &'static str);

/// Special-case spellings and their fixed ids.
pub const KNOWN_IDS: &[IdCase] = &[
    ("B", SkillKind::License, "drivers"),
    ("Driver's License", SkillKind::License, "drivers"),
    ("CE", SkillKind::License, "cdl"),
    ("CDL", SkillKind::License, "cdl"),
    ("RN", SkillKind::License, "rn"),
    ("Nurse", SkillKind::License, "rn"),
    ("Nurse License", SkillKind::License, "rn"),
    ("EL", SkillKind::License, "electrician"),
    ("Plumber License", SkillKind::License, "plumber"),
    ("Office", SkillKind::Software, "office"),
    ("Photo/Video Editing", SkillKind::Software, "mediaEditing"),
    ("Game Engine", SkillKind::Software, "gameEngine"),
    ("Security", SkillKind::Certification, "security"),
    ("App", SkillKind::Portfolio, "appPortfolio"),
    ("Paper", SkillKind::Portfolio, "paperPortfolio"),
    ("  CDL  ", SkillKind::License, "cdl"),
];

/// Names with no special case, resolved by the generic rule.
pub const GENERIC_IDS: &[IdCase] = &[
    ("Custom Tool", SkillKind::Software, "customtool"),
    ("Series 65", SkillKind::Certification, "series65"),
    ("Health & Safety", SkillKind::License, "healthandsafety"),
    ("R&D Suite", SkillKind::Software, "randdsuite"),
    ("Short Film", SkillKind::Portfolio, "shortfilmPortfolio"),
    ("Custom\tTool", SkillKind::Software, "customtool"),
    ("   ", SkillKind::Software, ""),
    ("", SkillKind::License, ""),
    (" ", SkillKind::Portfolio, "Portfolio"),
];

/// Assert every row maps to its id, reporting the failing row.
pub fn assert_ids(cases: &[IdCase], to_id: impl Fn(&str, SkillKind) -> String) {
    for &(raw, kind, expected) in cases {
        assert_eq!(to_id(raw, kind), expected, "{kind:?} {raw:?}");
    }
}
