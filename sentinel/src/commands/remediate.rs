// sentinel/src/commands/remediate.rs
//
// USE CASE: Detect quarantined files that need an operator.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::Table;
use sentinel_core::application::{ReportKind, run_remediation_check, save_report};
use sentinel_core::infrastructure::adapters::{FsQuarantineLister, notifier_for};

use super::{JobArgs, load_job};

pub async fn execute(project_dir: PathBuf, args: JobArgs) -> anyhow::Result<()> {
    let mut config = load_job(&project_dir, args)?;

    // Relative local paths are relative to the job directory, like target/
    if !config.quarantine_path.is_empty() && !config.quarantine_path.contains("://") {
        config.quarantine_path = project_dir
            .join(&config.quarantine_path)
            .to_string_lossy()
            .into_owned();
    }
    println!("🔒 Checking quarantine: {}", config.quarantine_path);

    let target_dir = project_dir.join(&config.target_path);
    let notifier = notifier_for(&config, &target_dir);

    let report = run_remediation_check(&config, &FsQuarantineLister, notifier.as_ref()).await;

    let mut table = Table::new();
    table.set_header(vec!["Status", "Files", "Message"]);
    table.add_row(vec![
        report.outcome.status.to_string(),
        report.outcome.file_count.to_string(),
        report.outcome.message.clone(),
    ]);
    println!("\n{table}");

    let path = save_report(&project_dir, &config, ReportKind::Remediation, &report)
        .context("Failed to write remediation report")?;
    println!("📝 Report written to {}", path.display());

    Ok(())
}
