use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A throwaway job directory with its own target/.
struct SentinelTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl SentinelTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        Ok(Self { _tmp: tmp, root })
    }

    fn write_readings(&self, relative: &str, rows: usize) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut csv = String::from("sensor_id,temperature,humidity,location\n");
        for i in 0..rows {
            csv.push_str(&format!(
                "sensor_{:03},{:.1},{:.1},building_a\n",
                i % 20 + 1,
                18.0 + (i % 10) as f64,
                40.0 + (i % 15) as f64
            ));
        }
        fs::write(&path, csv)?;
        Ok(path)
    }

    fn sentinel(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sentinel"));
        cmd.current_dir(&self.root)
            .env_remove("SENTINEL_JOB_NAME")
            .env_remove("SENTINEL_TARGET_PATH")
            .env_remove("SENTINEL_METRICS_NAMESPACE")
            .env_remove("SENTINEL_NOTIFICATION_TOPIC");
        cmd
    }

    fn report(&self, name: &str) -> Result<serde_json::Value> {
        let content = fs::read_to_string(self.root.join("target").join(name))?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn count_lines(path: &Path) -> Result<usize> {
    Ok(fs::read_to_string(path)?.lines().count())
}

#[test]
fn test_quality_clean_batch_succeeds() -> Result<()> {
    let env = SentinelTestEnv::new()?;
    env.write_readings("data/raw/readings.csv", 50)?;

    env.sentinel()
        .args([
            "quality",
            "--job-name",
            "nightly",
            "--source-path",
            "data/raw",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS"));

    let report = env.report("nightly_quality.json")?;
    assert_eq!(report["outcome"]["status"], "SUCCESS");
    assert_eq!(report["assessment"]["row_count"], 50);
    assert_eq!(report["assessment"]["quality_score"], 100.0);
    assert_eq!(report["notification"]["subject"], "Data Quality Check - SUCCESS");
    Ok(())
}

#[test]
fn test_quality_datafusion_engine_matches() -> Result<()> {
    let env = SentinelTestEnv::new()?;
    let csv = env.write_readings("readings.csv", 12)?;

    env.sentinel()
        .args(["quality", "--job-name", "df", "--engine", "datafusion", "--source-path"])
        .arg(&csv)
        .assert()
        .success();

    let report = env.report("df_quality.json")?;
    assert_eq!(report["outcome"]["status"], "SUCCESS");
    assert_eq!(report["assessment"]["row_count"], 12);
    Ok(())
}

#[test]
fn test_quality_mixed_directory_same_report_on_both_engines() -> Result<()> {
    let env = SentinelTestEnv::new()?;
    fs::create_dir_all(env.root.join("data/mixed"))?;
    fs::write(
        env.root.join("data/mixed/a.csv"),
        "sensor_id,temperature,humidity\ns1,20.0,40.0\ns2,21.0,41.0\n",
    )?;
    fs::write(
        env.root.join("data/mixed/b.CSV"),
        "sensor_id,humidity,temperature\ns3,95.0,-10.0\ns4,90.0,-20.0\n",
    )?;
    fs::write(
        env.root.join("data/mixed/c.csv"),
        "sensor_id,temperature\ns5,22.0\n",
    )?;

    for engine in ["duckdb", "datafusion"] {
        env.sentinel()
            .args(["quality", "--source-path", "data/mixed", "--engine", engine])
            .args(["--job-name", engine])
            .assert()
            .success();
    }

    let duckdb = env.report("duckdb_quality.json")?;
    let datafusion = env.report("datafusion_quality.json")?;

    assert_eq!(duckdb["assessment"]["row_count"], 5);
    assert_eq!(duckdb["assessment"]["outlier_count"], 0);
    assert_eq!(duckdb["assessment"]["null_count"], 1);
    assert_eq!(duckdb["assessment"], datafusion["assessment"]);
    assert_eq!(datafusion["outcome"]["status"], "LOW_VOLUME");
    Ok(())
}

#[test]
fn test_quality_empty_directory_is_no_data() -> Result<()> {
    let env = SentinelTestEnv::new()?;
    fs::create_dir_all(env.root.join("data/empty"))?;

    env.sentinel()
        .args(["quality", "--job-name", "empty", "--source-path", "data/empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NO_DATA"));

    let report = env.report("empty_quality.json")?;
    assert_eq!(report["outcome"]["status"], "NO_DATA");
    assert_eq!(report["assessment"]["quality_score"], 0.0);
    Ok(())
}

#[test]
fn test_quality_missing_source_is_indeterminate() -> Result<()> {
    let env = SentinelTestEnv::new()?;

    env.sentinel()
        .args(["quality", "--job-name", "ghost", "--source-path", "nowhere"])
        .assert()
        .success();

    let report = env.report("ghost_quality.json")?;
    assert_eq!(report["outcome"]["status"], "INDETERMINATE");
    assert_eq!(report["assessment"]["quality_score"], 50.0);
    Ok(())
}

#[test]
fn test_quality_without_source_is_a_harness_error() -> Result<()> {
    let env = SentinelTestEnv::new()?;

    env.sentinel()
        .args(["quality", "--job-name", "nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No source path configured"));
    Ok(())
}

#[test]
fn test_quality_reads_job_file_and_sinks() -> Result<()> {
    let env = SentinelTestEnv::new()?;
    env.write_readings("data/readings.csv", 3)?;
    fs::write(
        env.root.join("sentinel.yaml"),
        "job-name: from-file\n\
         source-path: data\n\
         metrics:\n  sink: jsonl\n\
         notification:\n  topic: ops-alerts\n  sink: outbox\n",
    )?;

    env.sentinel().arg("quality").assert().success();

    let report = env.report("from-file_quality.json")?;
    assert_eq!(report["outcome"]["status"], "LOW_VOLUME");
    assert_eq!(report["delivery"]["metrics_delivered"], true);
    assert_eq!(count_lines(&env.root.join("target/metrics.jsonl"))?, 6);
    assert_eq!(count_lines(&env.root.join("target/notifications.jsonl"))?, 1);
    Ok(())
}

#[test]
fn test_remediate_detects_quarantined_files() -> Result<()> {
    let env = SentinelTestEnv::new()?;
    fs::create_dir_all(env.root.join("quarantine/2024-06-01"))?;
    fs::write(env.root.join("quarantine/bad_1.csv"), "x")?;
    fs::write(env.root.join("quarantine/2024-06-01/bad_2.csv"), "x")?;

    env.sentinel()
        .args([
            "remediate",
            "--job-name",
            "nightly",
            "--quarantine-path",
            "quarantine",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("QUARANTINE_DETECTED"));

    let report = env.report("nightly_remediation.json")?;
    assert_eq!(report["outcome"]["status"], "QUARANTINE_DETECTED");
    assert_eq!(report["outcome"]["file_count"], 2);
    Ok(())
}

#[test]
fn test_remediate_object_store_reports_error() -> Result<()> {
    let env = SentinelTestEnv::new()?;

    env.sentinel()
        .args([
            "remediate",
            "--job-name",
            "cloud",
            "--quarantine-path",
            "s3://lake/quarantine/",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR"));

    let report = env.report("cloud_remediation.json")?;
    assert_eq!(report["outcome"]["status"], "ERROR");
    assert_eq!(report["outcome"]["file_count"], 0);
    Ok(())
}

#[test]
fn test_inspect_prints_profile() -> Result<()> {
    let env = SentinelTestEnv::new()?;
    let csv = env.write_readings("readings.csv", 5)?;

    env.sentinel()
        .args(["inspect", "--source-path"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("temperature"))
        .stdout(predicate::str::contains("Quality score: 100.0"));
    Ok(())
}
