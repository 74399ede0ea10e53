//! # Result Parser Module / 结果解析模块
//!
//! Benchmark scripts print a JSON array of `{ "name", "result" }` objects
//! somewhere in their output, usually surrounded by progress noise. This module
//! locates that array with a greedy bracket pattern and decodes it.
//!
//! 基准脚本会在输出中的某处打印一个由 `{ "name", "result" }` 对象组成的 JSON 数组，
//! 通常夹杂着进度信息。此模块使用贪婪的方括号模式定位该数组并对其进行解码。

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::BenchmarkEntry;

// `.` stops at newlines, so the match is the widest bracketed span on the
// first line that has one.
static RESULT_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*\]").expect("result array pattern is valid"));

/// Returns the raw text of the first JSON-array-looking span, if any.
/// 返回第一个形似 JSON 数组的片段的原始文本（如果存在）。
pub fn find_result_array(output: &str) -> Option<&str> {
    RESULT_ARRAY.find(output).map(|m| m.as_str())
}

/// Extracts the benchmark entries from a process's output.
///
/// Output without a bracketed span yields an empty list. A span that is not a
/// valid JSON array of entries is an error; callers decide how to treat it.
///
/// 从进程输出中提取基准条目。
///
/// 没有方括号片段的输出返回空列表。片段不是有效的条目 JSON 数组时返回错误，
/// 由调用者决定如何处理。
pub fn parse_results(output: &str) -> Result<Vec<BenchmarkEntry>> {
    let Some(raw) = find_result_array(output) else {
        return Ok(Vec::new());
    };

    serde_json::from_str(raw).with_context(|| format!("invalid result array: {}", snippet(raw)))
}

fn snippet(raw: &str) -> String {
    const LIMIT: usize = 80;
    if raw.chars().count() <= LIMIT {
        raw.to_string()
    } else {
        let head: String = raw.chars().take(LIMIT).collect();
        format!("{}...", head)
    }
}
