//! # Run Command Module / 运行命令模块
//!
//! Drives one comparison: launches the configured commands, waits for all of
//! them, then prints the Markdown table and optionally writes the CSV export.
//!
//! 驱动一次比较：启动已配置的命令，等待全部结束，
//! 然后打印 Markdown 表格，并可选地写出 CSV 导出文件。

use anyhow::{Result, bail};
use colored::*;

use crate::{
    core::{config::RunConfig, execution::run_all, models::RunSummary},
    infra::t,
    reporting::{
        console::{print_failure_summary, print_table},
        csv::write_csv,
        markdown::render_markdown_table,
    },
};

/// Executes the run command.
///
/// Only commands that completed become table columns. Failed commands are
/// listed after the table and make the run return an error; with `strict`
/// set, a single failure suppresses the table and the CSV export entirely.
///
/// # Arguments
/// * `config` - The run configuration built from the command line
///
/// # Returns
/// The collected `RunSummary` when every command succeeded
pub async fn execute(config: RunConfig) -> Result<RunSummary> {
    let locale = config.locale.as_str();

    if config.commands.is_empty() {
        println!("{}", t!("no_commands", locale = locale).yellow());
        return Ok(RunSummary::default());
    }

    let summary = run_all(&config.commands, locale).await;

    if config.strict && summary.has_failures() {
        print_failure_summary(&summary.failures, locale);
        bail!(
            "{}",
            t!(
                "strict_abort",
                locale = locale,
                count = summary.failures.len()
            )
        );
    }

    if summary.completed.is_empty() {
        println!("\n{}", t!("nothing_to_render", locale = locale).yellow());
    } else {
        let table = render_markdown_table(&summary.results, &summary.completed);
        print_table(&table, locale);

        if let Some(path) = &config.csv {
            write_csv(&summary.results, &summary.completed, path)?;
            println!(
                "{}",
                t!("csv_saved", locale = locale, path = path.display()).green()
            );
        }
    }

    if summary.has_failures() {
        print_failure_summary(&summary.failures, locale);
        bail!(
            "{}",
            t!(
                "commands_failed",
                locale = locale,
                count = summary.failures.len(),
                total = config.commands.len()
            )
        );
    }

    Ok(summary)
}
