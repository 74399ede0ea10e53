//! # CSV Export Module / CSV 导出模块
//!
//! Renders the same comparison as the Markdown table in comma-separated form.
//! Values are written as-is, without quoting; names or results containing
//! commas or newlines will corrupt the layout.
//!
//! 以逗号分隔的形式渲染与 Markdown 表格相同的比较结果。
//! 值按原样写出，不加引号；包含逗号或换行的名称或结果会破坏布局。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::models::ResultsTable;
use crate::reporting::markdown::{MISSING, benchmark_names};

/// Renders the results as CSV: a `Benchmark,<labels...>` header followed by
/// one line per distinct benchmark name.
pub fn render_csv<S: AsRef<str>>(results: &ResultsTable, labels: &[S]) -> String {
    let header: Vec<&str> = labels.iter().map(|label| label.as_ref()).collect();
    let mut csv = format!("Benchmark,{}\n", header.join(","));

    for name in benchmark_names(results, labels) {
        let mut row = vec![name.clone()];
        for label in labels {
            row.push(
                results
                    .find(label.as_ref(), &name)
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| MISSING.to_string()),
            );
        }
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}

/// Writes the CSV rendering of the results to `path`, replacing any existing file.
///
/// 将结果的 CSV 渲染写入 `path`，覆盖已存在的文件。
pub fn write_csv<S: AsRef<str>>(results: &ResultsTable, labels: &[S], path: &Path) -> Result<()> {
    fs::write(path, render_csv(results, labels))
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))
}
