// Shared test helpers for integration tests
#![allow(dead_code)]

use bench_compare::models::{BenchValue, BenchmarkEntry, ResultsTable};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds a base command that prints `json` on stdout. The script token the
/// registry appends ends up as a harmless trailing word on the same line.
pub fn echo_json(json: &str) -> String {
    format!("echo {}", shlex::try_quote(json).unwrap())
}

pub fn number(value: i64) -> BenchValue {
    BenchValue::Number(value.into())
}

pub fn text(value: &str) -> BenchValue {
    BenchValue::Text(value.to_string())
}

pub fn entry(name: &str, result: BenchValue) -> BenchmarkEntry {
    BenchmarkEntry {
        name: name.to_string(),
        result,
    }
}

/// The two-engine example used across the rendering tests:
/// `A` reports `ops`, `B` reports `ops` and `mem`.
pub fn sample_results() -> ResultsTable {
    let mut results = ResultsTable::new();
    results.insert("A", vec![entry("ops", number(100))]);
    results.insert(
        "B",
        vec![entry("ops", text("N/A-original")), entry("mem", number(50))],
    );
    results
}

/// Writes a fake engine script that echoes the script it was asked to run,
/// prints some noise, and then the result array on its own line.
pub fn write_fake_engine(temp_dir: &TempDir, name: &str, results_json: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    let content = format!(
        "#!/bin/sh\necho \"loading $1\"\necho 'warming up...'\necho '{}'\necho 'done'\n",
        results_json
    );
    fs::write(&path, content).expect("Failed to write fake engine");
    path
}
