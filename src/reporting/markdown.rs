//! # Markdown Table Module / Markdown 表格模块
//!
//! Renders the collected results as a pipe-delimited Markdown table with one
//! column per command and one row per distinct benchmark name.
//!
//! 将收集到的结果渲染为以竖线分隔的 Markdown 表格，
//! 每个命令一列，每个不同的基准名称一行。

use std::collections::HashSet;

use crate::core::models::ResultsTable;

/// Header of the benchmark-name column.
pub const NAME_HEADER: &str = "Benchmark (Higher scores are better)";
/// Minimum width of the benchmark-name column.
pub const MIN_NAME_WIDTH: usize = 37;
/// Minimum width of each command column.
pub const MIN_RESULT_WIDTH: usize = 17;
/// Placeholder for a command that has no entry for a benchmark.
pub const MISSING: &str = "N/A";

/// Collects the distinct benchmark names across all labels. Labels are
/// visited in the given order and entries in parse order; the first
/// occurrence of a name fixes its position.
///
/// 收集所有标签中不同的基准名称。按给定顺序访问标签，按解析顺序访问条目；
/// 名称第一次出现的位置决定其顺序。
pub fn benchmark_names<S: AsRef<str>>(results: &ResultsTable, labels: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for label in labels {
        for entry in results.entries(label.as_ref()) {
            if seen.insert(entry.name.as_str()) {
                names.push(entry.name.clone());
            }
        }
    }
    names
}

/// Computes the column widths: the name column first, then one per label.
/// Widths are measured in characters.
///
/// 计算列宽：首先是名称列，然后每个标签一列。宽度以字符数计算。
pub fn column_widths<S: AsRef<str>>(
    results: &ResultsTable,
    labels: &[S],
    names: &[String],
) -> Vec<usize> {
    let name_width = names
        .iter()
        .map(|name| name.chars().count())
        .chain(std::iter::once(MIN_NAME_WIDTH))
        .max()
        .unwrap_or(MIN_NAME_WIDTH);

    let mut widths = vec![name_width];
    for label in labels {
        let label = label.as_ref();
        let width = results
            .entries(label)
            .iter()
            .map(|entry| entry.result.to_string().chars().count())
            .chain([label.chars().count(), MIN_RESULT_WIDTH])
            .max()
            .unwrap_or(MIN_RESULT_WIDTH);
        widths.push(width);
    }
    widths
}

/// Renders the comparison table. Every line, including the last, ends with a
/// newline. Cells wider than their column are written in full.
///
/// # Arguments
/// * `results` - The collected results
/// * `labels` - The command labels to render as columns, in display order
///
/// # Output Format
/// ```text
/// | Benchmark (Higher scores are better)  | V8                | QuickJS           |
/// |---------------------------------------|-------------------|-------------------|
/// | Richards                              | 1200              | 900               |
/// | DeltaBlue                             | 1100              | N/A               |
/// ```
pub fn render_markdown_table<S: AsRef<str>>(results: &ResultsTable, labels: &[S]) -> String {
    let names = benchmark_names(results, labels);
    let widths = column_widths(results, labels, &names);
    let name_width = widths[0];

    let mut table = format!("| {:<width$} ", NAME_HEADER, width = name_width);
    for (label, width) in labels.iter().zip(&widths[1..]) {
        table.push_str(&format!("| {:<width$} ", label.as_ref(), width = *width));
    }
    table.push_str("|\n");

    for width in &widths {
        table.push_str("|-");
        table.push_str(&"-".repeat(*width));
        table.push('-');
    }
    table.push_str("|\n");

    for name in &names {
        table.push_str(&format!("| {:<width$}", name, width = name_width));
        for (label, width) in labels.iter().zip(&widths[1..]) {
            let cell = results
                .find(label.as_ref(), name)
                .map(|value| value.to_string())
                .unwrap_or_else(|| MISSING.to_string());
            table.push_str(&format!(" | {:<width$}", cell, width = *width));
        }
        table.push_str(" |\n");
    }

    table
}
