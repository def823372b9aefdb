// Test intent: drives the `pardft` binary end to end through generate and run.

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Samples written by the generator for the sweep tests.
const DATASET_LEN: usize = 24;
/// Highest worker count used by the sweep tests.
const MAX_WORKERS: usize = 4;

fn pardft() -> Command {
    let mut cmd = Command::cargo_bin("pardft").unwrap();
    cmd.env_remove("PARDFT_MAX_WORKERS").env_remove("RUST_LOG");
    cmd
}

fn generated_dataset(len: usize) -> String {
    let output = pardft()
        .arg("generate")
        .arg(len.to_string())
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn generate_prints_count_then_samples() {
    let text = generated_dataset(12);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "12");
    // n counts down from 12, so the first sample is sin(0.2)
    let first: f64 = lines[1].parse().unwrap();
    assert!((first - 0.2f64.sin()).abs() < 1e-12);
    // n == 10 gives sin(0)
    let third: f64 = lines[3].parse().unwrap();
    assert_eq!(third, 0.0);
}

#[test]
fn generate_rejects_zero_length() {
    let output = pardft().args(["generate", "0"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn run_reports_every_schedule_from_stdin() {
    let dataset = generated_dataset(DATASET_LEN);
    let output = pardft()
        .args(["run", "--max-workers"])
        .arg(MAX_WORKERS.to_string())
        .write_stdin(dataset)
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), MAX_WORKERS + 1);
    assert!(lines[0].starts_with("24 samples"));
    assert!(lines[1].starts_with("sequential: time "));
    assert!(lines[2].starts_with("2 workers: time "));
    assert!(lines[4].starts_with("4 workers: time "));
    for line in &lines[1..] {
        let err: f64 = line.rsplit(' ').next().unwrap().parse().unwrap();
        assert!(err < 1e-9, "{}", line);
    }
}

#[test]
fn run_reads_input_file_and_emits_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(generated_dataset(DATASET_LEN).as_bytes())
        .unwrap();
    let output = pardft()
        .args(["run", "--format", "json", "--max-workers", "3", "--input"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let runs = json.as_array().unwrap();
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0]["schedule"]["kind"], "sequential");
    assert_eq!(runs[2]["schedule"]["kind"], "partitioned");
    assert_eq!(runs[2]["schedule"]["workers"], 3);
    for run in runs {
        assert!(run["seconds"].as_f64().unwrap() >= 0.0, "{}", run);
    }
}

#[test]
fn run_honours_max_workers_env() {
    let output = pardft()
        .env("PARDFT_MAX_WORKERS", "2")
        .arg("run")
        .write_stdin(generated_dataset(DATASET_LEN))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 3);
}

#[test]
fn run_aborts_when_workers_exceed_samples() {
    let output = pardft()
        .args(["run", "--max-workers", "5"])
        .write_stdin("3\n1.0\n2.0\n3.0\n")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // sequential, 2 and 3 workers complete before the failing run
    assert_eq!(stdout.lines().count(), 4);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("too many workers"), "{}", stderr);
}

#[test]
fn run_rejects_truncated_dataset() {
    let output = pardft()
        .arg("run")
        .write_stdin("5\n1.0\n2.0\n")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expected 5 samples, found 2"), "{}", stderr);
}
