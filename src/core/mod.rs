//! Core migration domain: canonical skill ids, registries, and record reshaping.

pub mod canonical;
pub mod job;
pub mod legacy;
pub mod metadata;
pub mod migration;
pub mod registry;
pub mod skill;
pub mod transform;

pub use canonical::canonicalize;
pub use job::{JobV5, JobV6, SCHEMA_VERSION};
pub use legacy::{DowngradeOutcome, downgrade};
pub use metadata::{SOFT_SKILLS, resolve, soft_registry};
pub use migration::{
    IntegrityReport, Migration, MigrationOptions, MigrationReport, RenderedDocuments,
    check_integrity, migrate_document, migrate_str, render_document,
};
pub use registry::{HardSkillAccumulator, HardSkillRegistry, OrderedRegistry};
pub use skill::{HardSkillMeta, SkillKind, SkillRef, SoftSkillMeta};
pub use transform::{decode_record, transform};
