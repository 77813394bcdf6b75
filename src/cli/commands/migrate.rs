//! skillmig migrate - Convert a v5 job document into the three v6 documents.

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::core::migrate_str;
use crate::error::Result;
use crate::utils::fs::{read_required, write_documents};

#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// v5 input document (defaults to paths.input)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Write the v6 documents into this directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Run the full migration without writing anything
    #[arg(long)]
    pub check: bool,
}

pub fn run(ctx: &AppContext, args: &MigrateArgs) -> Result<()> {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| ctx.config.paths.input.clone());
    let outputs = ctx.config.outputs(args.out_dir.as_deref());

    let raw = read_required(&input)?;
    let migration = migrate_str(&raw, ctx.config.migration_options())?;
    migration.integrity().into_result()?;
    let rendered = migration.render()?;

    if !args.check {
        write_documents(&[
            (outputs.jobs.clone(), rendered.jobs.as_str()),
            (outputs.soft_skills.clone(), rendered.soft_skills.as_str()),
            (outputs.hard_skills.clone(), rendered.hard_skills.as_str()),
        ])?;
    }

    let report = &migration.report;

    if ctx.robot_mode {
        let payload = serde_json::json!({
            "input": input.display().to_string(),
            "written": !args.check,
            "outputs": {
                "jobs": outputs.jobs.display().to_string(),
                "soft_skills": outputs.soft_skills.display().to_string(),
                "hard_skills": outputs.hard_skills.display().to_string(),
            },
            "report": report,
        });
        return emit_json(&robot_ok(payload));
    }

    let mut layout = HumanLayout::new();
    layout.title(if args.check {
        "Migration Check (nothing written)"
    } else {
        "Migration Complete"
    });
    layout
        .kv("Input", &input.display().to_string())
        .kv("Jobs", &report.jobs.to_string())
        .kv("Soft refs", &report.soft_refs.to_string())
        .kv("Hard refs", &report.hard_refs.to_string())
        .kv("Hard skills", &report.hard_registry.to_string())
        .kv("Merged spellings", &report.duplicates_merged.to_string())
        .kv("Blank names", &report.blank_names.len().to_string());

    if !args.check {
        layout.blank().section("Written");
        for path in [&outputs.jobs, &outputs.soft_skills, &outputs.hard_skills] {
            layout.bullet(&path.display().to_string());
        }
    }

    if !report.blank_names.is_empty() {
        layout.blank().section("Blank skill names");
        for blank in &report.blank_names {
            layout.bullet(&format!(
                "record {} ({}): blank {} name",
                blank.index, blank.job_id, blank.kind
            ));
        }
    }

    emit_human(layout);
    Ok(())
}
