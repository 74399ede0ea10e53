//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints progress while the benchmarks run and the final
//! comparison afterwards, using colored, localized console output.
//!
//! 此模块在基准运行期间打印进度，并在结束后打印最终比较结果，
//! 使用彩色且本地化的控制台输出。

use colored::*;

use crate::core::models::{Command, CommandOutcome};
use crate::infra::t;

/// Announces that a command is being launched.
pub fn print_launch(command: &Command, locale: &str) {
    println!(
        "{}",
        t!(
            "running_command",
            locale = locale,
            label = command.label,
            command = command.shell_command
        )
        .cyan()
    );
}

/// Prints the line for a finished command: a green completion line, or a red
/// error line followed by the tail of what the command printed.
///
/// 打印已结束命令的信息：绿色的完成行，或红色的错误行及命令输出的末尾部分。
pub fn print_outcome(outcome: &CommandOutcome, locale: &str) {
    match outcome {
        CommandOutcome::Completed {
            command,
            entries,
            duration,
        } => {
            println!(
                "{}",
                t!(
                    "command_finished",
                    locale = locale,
                    label = command.label,
                    duration = format!("{:.2?}", duration),
                    count = entries.len()
                )
                .green()
            );
        }
        CommandOutcome::Failed {
            command,
            reason,
            output,
            ..
        } => {
            eprintln!(
                "{}",
                t!(
                    "command_failed",
                    locale = locale,
                    label = command.label,
                    reason = reason
                )
                .red()
            );
            if !output.trim().is_empty() {
                eprintln!(
                    "--- {} ---\n{}",
                    t!("command_output_header", locale = locale, label = command.label).yellow(),
                    output
                );
            }
        }
    }
}

/// Warns that a command printed a result array that is not valid JSON.
/// The command's results are treated as empty.
pub fn print_parse_warning(label: &str, error: &anyhow::Error, locale: &str) {
    eprintln!(
        "{}",
        t!(
            "parse_warning",
            locale = locale,
            label = label,
            error = format!("{:#}", error)
        )
        .yellow()
    );
}

/// Prints the rendered Markdown table under its banner.
pub fn print_table(table: &str, locale: &str) {
    println!("\n{}", t!("markdown_banner", locale = locale).bold());
    print!("{}", table);
}

/// Lists every failed command with its reason.
///
/// # Output Format / 输出格式
/// ```text
/// --- Failed Commands ---
///   - JSC                  | exited with status 127
/// ```
pub fn print_failure_summary(failures: &[CommandOutcome], locale: &str) {
    if failures.is_empty() {
        return;
    }

    println!("\n{}", t!("failure_summary_banner", locale = locale).red().bold());
    for failure in failures {
        if let CommandOutcome::Failed { command, reason, .. } = failure {
            println!("  - {:<20} | {}", command.label.yellow(), reason);
        }
    }
}
