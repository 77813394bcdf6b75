//! Raw skill name → canonical identifier.
//!
//! Each kind has a table of exact-match spellings checked against the trimmed
//! name. Anything else goes through [`generic_id`]. The mapping is pure, so
//! the same `(name, kind)` always lands on the same registry entry no matter
//! which job it came from.

use super::skill::SkillKind;

const LICENSE_SPECIAL: &[(&str, &str)] = &[
    ("B", "drivers"),
    ("Driver's License", "drivers"),
    ("CE", "cdl"),
    ("CDL", "cdl"),
    ("RN", "rn"),
    ("Nurse", "rn"),
    ("Nurse License", "rn"),
    ("EL", "electrician"),
    ("Electrician License", "electrician"),
    ("PL", "plumber"),
    ("Plumber License", "plumber"),
];

const SOFTWARE_SPECIAL: &[(&str, &str)] = &[
    ("Office", "office"),
    ("Programming", "programming"),
    ("Photo/Video Editing", "mediaEditing"),
    ("Game Engine", "gameEngine"),
];

const CERTIFICATION_SPECIAL: &[(&str, &str)] = &[("Security", "security")];

const PORTFOLIO_SPECIAL: &[(&str, &str)] = &[
    ("App", "appPortfolio"),
    ("Game", "gamePortfolio"),
    ("Website", "websitePortfolio"),
    ("Library", "libraryPortfolio"),
    ("Paper", "paperPortfolio"),
    ("Presentation", "presentationPortfolio"),
];

/// Suffix appended to generic portfolio identifiers.
pub const PORTFOLIO_SUFFIX: &str = "Portfolio";

const fn special_cases(kind: SkillKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        SkillKind::License => LICENSE_SPECIAL,
        SkillKind::Software => SOFTWARE_SPECIAL,
        SkillKind::Certification => CERTIFICATION_SPECIAL,
        SkillKind::Portfolio => PORTFOLIO_SPECIAL,
    }
}

/// Map a raw skill name of the given kind to its canonical identifier.
///
/// Blank names are not rejected here: they fall through to the generic rule
/// and yield `""` (or the bare `Portfolio` suffix for portfolio items).
#[must_use]
pub fn canonicalize(raw: &str, kind: SkillKind) -> String {
    let name = raw.trim();

    if let Some((_, id)) = special_cases(kind).iter().find(|(spelling, _)| *spelling == name) {
        return (*id).to_string();
    }

    let id = generic_id(name);
    match kind {
        SkillKind::Portfolio => id + PORTFOLIO_SUFFIX,
        _ => id,
    }
}

/// Lowercase, drop every whitespace character, spell `&` as `and`.
///
/// The `&` rewrite applies to every kind, so "R&D Suite" is `randdsuite`
/// whether it is listed as software, a license, or a certification.
#[must_use]
pub fn generic_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace('&', "and")
}

/// True when a raw name would canonicalize through the degenerate blank path.
#[must_use]
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Iterate every special-case spelling with its kind and identifier.
pub fn special_spellings() -> impl Iterator<Item = (SkillKind, &'static str, &'static str)> {
    SkillKind::SCAN_ORDER.into_iter().flat_map(|kind| {
        special_cases(kind)
            .iter()
            .map(move |(spelling, id)| (kind, *spelling, *id))
    })
}
