// sentinel/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sentinel")]
#[command(about = "Data-quality scoring and remediation checks for sensor telemetry", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📊 Scores a sensor batch, classifies it, emits metrics and notifies
    Quality {
        /// Job directory (where sentinel.yaml and target/ live)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        #[arg(long)]
        job_name: Option<String>,

        /// CSV file or directory holding the batch
        #[arg(long)]
        source_path: Option<String>,

        #[arg(long)]
        quarantine_path: Option<String>,

        /// Notification topic
        #[arg(long, env = "SENTINEL_NOTIFICATION_TOPIC")]
        topic: Option<String>,

        /// duckdb | datafusion
        #[arg(long)]
        engine: Option<String>,
    },

    /// 🔒 Checks the quarantine area for files requiring attention
    Remediate {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        #[arg(long)]
        job_name: Option<String>,

        /// Local directory or object-store URI (s3://bucket/prefix)
        #[arg(long)]
        quarantine_path: Option<String>,

        #[arg(long, env = "SENTINEL_NOTIFICATION_TOPIC")]
        topic: Option<String>,
    },

    /// 🔍 Profiles a batch source (watched columns, nulls, outliers)
    Inspect {
        #[arg(long)]
        source_path: PathBuf,

        #[arg(long, default_value = "duckdb")]
        engine: String,
    },
}
