// sentinel/src/commands/quality.rs
//
// USE CASE: Score one sensor batch and publish the outcome.

use std::path::PathBuf;

use anyhow::{Context, bail};
use comfy_table::Table;
use sentinel_core::application::{QualityRunReport, ReportKind, run_quality_check, save_report};
use sentinel_core::domain::job::Engine;
use sentinel_core::infrastructure::adapters::{batch_source_for, metrics_emitter_for, notifier_for};

use super::{JobArgs, load_job};

pub async fn execute(project_dir: PathBuf, args: JobArgs) -> anyhow::Result<()> {
    println!("⚙️  Loading job configuration...");
    let config = load_job(&project_dir, args)?;
    if config.source_path.is_empty() {
        bail!("❌ No source path configured.\n👉 Pass --source-path or set 'source-path' in sentinel.yaml");
    }
    println!("   Job: {}", config.job_name);

    // A. Adapters
    let source_path = project_dir.join(&config.source_path);
    match config.engine {
        Engine::DuckDB => println!("   Engine: DuckDB 🦆"),
        Engine::DataFusion => println!("   Engine: Apache DataFusion 🏹"),
    }
    let source = batch_source_for(config.engine, &source_path).with_context(|| {
        format!("Failed to initialize {:?} on {:?}", config.engine, source_path)
    })?;

    let target_dir = project_dir.join(&config.target_path);
    let metrics = metrics_emitter_for(&config, &target_dir);
    let notifier = notifier_for(&config, &target_dir);

    // B. Run (never fails: faults end up in the report)
    let report = run_quality_check(
        &config,
        source.as_ref(),
        metrics.as_ref(),
        notifier.as_ref(),
    )
    .await;

    print_summary(&report);

    // C. Persist
    let path = save_report(&project_dir, &config, ReportKind::Quality, &report)
        .context("Failed to write quality report")?;
    println!("📝 Report written to {}", path.display());

    Ok(())
}

fn print_summary(report: &QualityRunReport) {
    let a = &report.assessment;
    let mut table = Table::new();
    table.set_header(vec!["Status", "Score", "Rows", "Nulls", "Outliers"]);
    table.add_row(vec![
        report.outcome.status.to_string(),
        format!("{:.1}", a.quality_score),
        a.row_count.to_string(),
        a.null_count.to_string(),
        a.outlier_count.to_string(),
    ]);
    println!("\n{table}");
    println!("   {}", report.outcome.message);

    for failure in &report.delivery.failures {
        eprintln!("⚠️  Delivery failed: {}", failure);
    }
}
