//! # Command Module Unit Tests / Command 模块单元测试
//!
//! Tests for launching shell commands and capturing their output.
//!
//! 测试启动 shell 命令并捕获其输出。
#![cfg(unix)]

use bench_compare::infra::command::{CapturedOutput, shell_command, spawn_and_capture};
use tokio::process::Command;

#[tokio::test]
async fn test_captures_stdout_and_stderr_separately() {
    let (status, output) =
        spawn_and_capture(shell_command("echo out; echo err 1>&2; echo more")).await;

    assert!(status.unwrap().success());
    assert_eq!(output.stdout, "out\nmore\n");
    assert_eq!(output.stderr, "err\n");
}

#[tokio::test]
async fn test_invalid_utf8_does_not_end_capture() {
    let (status, output) = spawn_and_capture(shell_command(
        r#"printf 'caf\351 warming up\n[{"name":"x","result":1}]\n'; printf 'bad \377 byte\nstill here\n' 1>&2"#,
    ))
    .await;

    assert!(status.unwrap().success());
    assert_eq!(
        output.stdout,
        "caf\u{FFFD} warming up\n[{\"name\":\"x\",\"result\":1}]\n"
    );
    assert_eq!(output.stderr, "bad \u{FFFD} byte\nstill here\n");
}

#[tokio::test]
async fn test_reports_exit_code() {
    let (status, _) = spawn_and_capture(shell_command("exit 3")).await;
    assert_eq!(status.unwrap().code(), Some(3));
}

#[tokio::test]
async fn test_missing_program_through_shell_exits_127() {
    let (status, output) =
        spawn_and_capture(shell_command("this_command_definitely_does_not_exist_12345")).await;

    assert_eq!(status.unwrap().code(), Some(127));
    assert!(!output.stderr.is_empty());
}

#[tokio::test]
async fn test_spawn_failure_returns_error() {
    let cmd = Command::new("this_command_definitely_does_not_exist_12345");
    let (status, output) = spawn_and_capture(cmd).await;

    assert!(status.is_err());
    assert_eq!(output, CapturedOutput::default());
}

#[tokio::test]
async fn test_large_output_is_fully_captured() {
    let (status, output) = spawn_and_capture(shell_command(
        "i=0; while [ $i -lt 2000 ]; do echo line $i; echo noise $i 1>&2; i=$((i+1)); done",
    ))
    .await;

    assert!(status.unwrap().success());
    assert_eq!(output.stdout.lines().count(), 2000);
    assert_eq!(output.stderr.lines().count(), 2000);
    assert_eq!(output.stdout.lines().last(), Some("line 1999"));
}

#[test]
fn test_tail_prefers_stderr() {
    let output = CapturedOutput {
        stdout: "a\nb\n".to_string(),
        stderr: "1\n2\n3\n".to_string(),
    };
    assert_eq!(output.tail(2), "2\n3");

    let quiet = CapturedOutput {
        stdout: "a\nb\n".to_string(),
        stderr: String::new(),
    };
    assert_eq!(quiet.tail(5), "a\nb");
}
