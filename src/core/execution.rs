//! # Benchmark Execution Module / 基准执行模块
//!
//! Runs every registered command concurrently and collects exactly one outcome
//! per command. The orchestrator owns the results table; worker tasks only
//! hand their outcome back, so rendering can start as soon as the fixed set of
//! tasks has been drained, whether or not some of them failed.
//!
//! 并发运行所有已注册的命令，并为每个命令收集恰好一个结果。
//! 编排器拥有结果表；工作任务只负责交回结果，因此只要固定的任务集合被全部收集完，
//! 无论其中是否有失败，渲染都可以开始。

use futures::stream::{FuturesUnordered, StreamExt};
use std::time::{Duration, Instant};

use crate::{
    core::{
        models::{Command, CommandOutcome, FailureReason, ResultsTable, RunSummary},
        parser::parse_results,
    },
    infra::command::{shell_command, spawn_and_capture},
    reporting::console,
};

/// How many trailing lines of a failed command's output are kept for the report.
const FAILURE_OUTPUT_LINES: usize = 20;

/// Runs a single command to completion and classifies the result.
///
/// A successful exit is always `Completed`, even when the output holds no
/// result array. A result array that is not valid JSON is reported as a
/// warning and treated as an empty result list.
///
/// # Arguments
/// * `command` - The command to execute
/// * `locale` - The language locale to use for messages
///
/// # Returns
/// The `CommandOutcome` to hand back to the collector
pub async fn run_command(command: Command, locale: &str) -> CommandOutcome {
    let start = Instant::now();
    let (status, output) = spawn_and_capture(shell_command(&command.shell_command)).await;
    let duration = start.elapsed();

    match status {
        Err(e) => CommandOutcome::Failed {
            command,
            reason: FailureReason::Spawn(e.to_string()),
            output: String::new(),
            duration,
        },
        Ok(status) if !status.success() => CommandOutcome::Failed {
            command,
            reason: FailureReason::NonZeroExit(status.code()),
            output: output.tail(FAILURE_OUTPUT_LINES),
            duration,
        },
        Ok(_) => {
            let entries = match parse_results(&output.stdout) {
                Ok(entries) => entries,
                Err(e) => {
                    console::print_parse_warning(&command.label, &e, locale);
                    Vec::new()
                }
            };
            CommandOutcome::Completed {
                command,
                entries,
                duration,
            }
        }
    }
}

/// Launches every command at once and waits for all of them.
///
/// Each command gets its own task; there is no cap on how many run at the same
/// time. Outcomes are printed as they arrive and folded into the summary,
/// which lists completed labels and failures in registration order.
///
/// 一次性启动所有命令并等待它们全部结束。
///
/// 每个命令拥有自己的任务，同时运行的数量没有上限。结果到达时即被打印并汇入摘要，
/// 摘要按注册顺序列出已完成的标签和失败项。
pub async fn run_all(commands: &[Command], locale: &str) -> RunSummary {
    let mut pending: FuturesUnordered<_> = commands
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, command)| {
            console::print_launch(&command, locale);
            let worker_locale = locale.to_string();
            let fallback = command.clone();
            let handle =
                tokio::spawn(async move { run_command(command, &worker_locale).await });
            async move {
                let outcome = handle.await.unwrap_or_else(|e| CommandOutcome::Failed {
                    command: fallback,
                    reason: FailureReason::Worker(e.to_string()),
                    output: String::new(),
                    duration: Duration::default(),
                });
                (index, outcome)
            }
        })
        .collect();

    let mut results = ResultsTable::new();
    let mut slots: Vec<Option<CommandOutcome>> = vec![None; commands.len()];

    while let Some((index, outcome)) = pending.next().await {
        console::print_outcome(&outcome, locale);
        if let CommandOutcome::Completed {
            command, entries, ..
        } = &outcome
        {
            results.insert(command.label.clone(), entries.clone());
        }
        slots[index] = Some(outcome);
    }

    let mut summary = RunSummary {
        results,
        ..RunSummary::default()
    };
    for outcome in slots.into_iter().flatten() {
        if outcome.is_failure() {
            summary.failures.push(outcome);
        } else {
            summary.completed.push(outcome.label().to_string());
        }
    }
    summary
}
