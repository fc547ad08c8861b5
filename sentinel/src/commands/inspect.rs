// sentinel/src/commands/inspect.rs
//
// USE CASE: Profile a batch source (watched columns only).

use std::path::PathBuf;

use comfy_table::Table;
use sentinel_core::application::{profile_batch, score_batch};
use sentinel_core::domain::job::Engine;
use sentinel_core::infrastructure::adapters::batch_source_for;

pub async fn execute(source_path: PathBuf, engine: String) -> anyhow::Result<()> {
    if !source_path.exists() {
        anyhow::bail!("❌ Source not found at: {}", source_path.display());
    }

    let engine: Engine = engine.parse()?;
    let source = batch_source_for(engine, &source_path)?;

    println!("\n🔍 Inspecting Source: '{}'", source.describe());

    let profile = profile_batch(source.as_ref()).await?;
    println!("   Rows: {}", profile.row_count);

    let mut table = Table::new();
    table.set_header(vec!["Column", "Present", "Nulls", "Outliers"]);
    for column in &profile.columns {
        table.add_row(vec![
            column.name.clone(),
            if column.present { "yes" } else { "no" }.to_string(),
            column.null_count.to_string(),
            column.outlier_count.to_string(),
        ]);
    }
    println!("{table}");

    let assessment = score_batch(source.as_ref()).await;
    println!("   ➜ Quality score: {:.1}", assessment.quality_score);

    Ok(())
}
