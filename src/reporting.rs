//! # Reporting Module / 报告模块
//!
//! This module handles the output of a comparison run: progress and failure
//! lines on the console, the Markdown comparison table, and the CSV export.
//!
//! 此模块处理一次比较运行的输出：控制台上的进度和失败信息、
//! Markdown 比较表格以及 CSV 导出。

pub mod console;
pub mod csv;
pub mod markdown;

// Re-export common reporting functions
pub use csv::{render_csv, write_csv};
pub use markdown::render_markdown_table;
