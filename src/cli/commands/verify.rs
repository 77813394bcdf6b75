//! skillmig verify - Cross-check v6 jobs against both skill registries.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::core::{HardSkillMeta, JobV6, SoftSkillMeta, check_integrity};
use crate::error::Result;
use crate::utils::fs::read_json;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Directory holding the v6 documents (defaults to the configured output paths)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &VerifyArgs) -> Result<()> {
    let outputs = ctx.config.outputs(args.dir.as_deref());

    let jobs: Vec<JobV6> = read_json(&outputs.jobs)?;
    let soft: Vec<SoftSkillMeta> = read_json(&outputs.soft_skills)?;
    let hard: Vec<HardSkillMeta> = read_json(&outputs.hard_skills)?;

    let report = check_integrity(&jobs, &soft, &hard);
    info!(
        jobs = report.jobs,
        references = report.references,
        issues = report.issues.len(),
        "integrity check finished"
    );

    if !ctx.robot_mode {
        let mut layout = HumanLayout::new();
        layout
            .title("Integrity Check")
            .kv("Jobs", &report.jobs.to_string())
            .kv("References", &report.references.to_string())
            .kv("Soft skills", &soft.len().to_string())
            .kv("Hard skills", &hard.len().to_string())
            .kv("Issues", &report.issues.len().to_string());
        if !report.is_clean() {
            layout.blank().section("Issues");
            for issue in &report.issues {
                layout.bullet(&issue.to_string());
            }
        }
        emit_human(layout);
    }

    let report = report.into_result()?;

    if ctx.robot_mode {
        return emit_json(&robot_ok(&report));
    }
    Ok(())
}
