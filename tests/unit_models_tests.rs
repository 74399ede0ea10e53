//! # Models Unit Tests / 模型单元测试

mod common;

use bench_compare::models::{
    BenchValue, Command, CommandOutcome, FailureReason, ResultsTable, RunSummary,
};
use common::{entry, number, text};
use std::time::Duration;

fn command(label: &str) -> Command {
    Command {
        label: label.to_string(),
        shell_command: format!("{} combined.js", label.to_lowercase()),
    }
}

#[test]
fn test_bench_value_deserializes_numbers_and_strings() {
    let value: BenchValue = serde_json::from_str("42").unwrap();
    assert_eq!(value, number(42));

    let value: BenchValue = serde_json::from_str("\"timeout\"").unwrap();
    assert_eq!(value, text("timeout"));

    assert!(serde_json::from_str::<BenchValue>("null").is_err());
}

#[test]
fn test_bench_value_display() {
    let float: BenchValue = serde_json::from_str("2.0").unwrap();
    let fraction: BenchValue = serde_json::from_str("0.25").unwrap();

    assert_eq!(number(1200).to_string(), "1200");
    assert_eq!(float.to_string(), "2");
    assert_eq!(fraction.to_string(), "0.25");
    assert_eq!(text("N/A-original").to_string(), "N/A-original");
}

#[test]
fn test_results_table_lookup() {
    let mut results = ResultsTable::new();
    assert!(results.is_empty());

    results.insert("A", vec![entry("ops", number(1)), entry("ops", number(2))]);

    assert_eq!(results.len(), 1);
    assert!(results.contains("A"));
    assert_eq!(results.find("A", "ops"), Some(&number(1)));
    assert_eq!(results.find("A", "mem"), None);
    assert!(results.entries("B").is_empty());
    assert_eq!(results.find("B", "ops"), None);
}

#[test]
fn test_results_table_insert_replaces() {
    let mut results = ResultsTable::new();
    results.insert("A", vec![entry("ops", number(1))]);
    results.insert("A", vec![entry("mem", number(2))]);

    assert_eq!(results.len(), 1);
    assert_eq!(results.entries("A"), &[entry("mem", number(2))]);
}

#[test]
fn test_failure_reason_display() {
    assert_eq!(
        FailureReason::NonZeroExit(Some(127)).to_string(),
        "exited with status 127"
    );
    assert_eq!(
        FailureReason::NonZeroExit(None).to_string(),
        "terminated by signal"
    );
    assert!(
        FailureReason::Spawn("No such file or directory".into())
            .to_string()
            .contains("No such file or directory")
    );
}

#[test]
fn test_outcome_accessors() {
    let completed = CommandOutcome::Completed {
        command: command("V8"),
        entries: vec![],
        duration: Duration::from_millis(5),
    };
    let failed = CommandOutcome::Failed {
        command: command("JSC"),
        reason: FailureReason::NonZeroExit(Some(1)),
        output: String::new(),
        duration: Duration::from_millis(7),
    };

    assert_eq!(completed.label(), "V8");
    assert!(!completed.is_failure());
    assert_eq!(completed.duration(), Duration::from_millis(5));
    assert_eq!(failed.command().shell_command, "jsc combined.js");
    assert!(failed.is_failure());

    let summary = RunSummary {
        failures: vec![failed],
        ..RunSummary::default()
    };
    assert!(summary.has_failures());
    assert!(!RunSummary::default().has_failures());
}
