// sentinel/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug sentinel quality ... pour voir les détails
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Quality {
            project_dir,
            job_name,
            source_path,
            quarantine_path,
            topic,
            engine,
        } => {
            commands::quality::execute(
                project_dir,
                commands::JobArgs {
                    job_name,
                    source_path,
                    quarantine_path,
                    topic,
                    engine,
                },
            )
            .await
        }
        Commands::Remediate {
            project_dir,
            job_name,
            quarantine_path,
            topic,
        } => {
            commands::remediate::execute(
                project_dir,
                commands::JobArgs {
                    job_name,
                    quarantine_path,
                    topic,
                    ..Default::default()
                },
            )
            .await
        }
        Commands::Inspect {
            source_path,
            engine,
        } => commands::inspect::execute(source_path, engine).await,
    }
}
