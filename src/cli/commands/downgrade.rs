//! skillmig downgrade - Rebuild v5-shaped records from v6 documents.

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::core::{HardSkillMeta, HardSkillRegistry, JobV6, downgrade, render_document};
use crate::error::Result;
use crate::utils::fs::{read_json, write_documents};

#[derive(Args, Debug)]
pub struct DowngradeArgs {
    /// Directory holding the v6 documents (defaults to the configured output paths)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Write the v5 document here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &DowngradeArgs) -> Result<()> {
    let outputs = ctx.config.outputs(args.dir.as_deref());

    let jobs: Vec<JobV6> = read_json(&outputs.jobs)?;
    let hard: Vec<HardSkillMeta> = read_json(&outputs.hard_skills)?;
    let registry: HardSkillRegistry = hard.into_iter().collect();

    let outcome = downgrade(&jobs, &registry);

    let Some(target) = &args.output else {
        if ctx.robot_mode {
            let payload = serde_json::json!({
                "jobs": outcome.jobs,
                "dropped": outcome.dropped,
            });
            return emit_json(&robot_ok(payload));
        }
        print!("{}", render_document(&outcome.jobs)?);
        return Ok(());
    };

    let body = render_document(&outcome.jobs)?;
    write_documents(&[(target.clone(), body.as_str())])?;

    if ctx.robot_mode {
        let payload = serde_json::json!({
            "output": target.display().to_string(),
            "jobs": outcome.jobs.len(),
            "dropped": outcome.dropped,
        });
        return emit_json(&robot_ok(payload));
    }

    let mut layout = HumanLayout::new();
    layout
        .title("Downgrade Complete")
        .kv("Output", &target.display().to_string())
        .kv("Jobs", &outcome.jobs.len().to_string())
        .kv("Dropped refs", &outcome.dropped.len().to_string());
    if !outcome.dropped.is_empty() {
        layout.blank().section("Dropped");
        for dropped in &outcome.dropped {
            layout.bullet(&format!("{}: {}", dropped.job, dropped.id));
        }
    }
    emit_human(layout);
    Ok(())
}
