//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Bench Compare,
//! including data models, the command registry, result parsing and
//! benchmark execution.
//!
//! 此模块包含 Bench Compare 的核心功能，
//! 包括数据模型、命令注册、结果解析和基准执行。

pub mod models;
pub mod config;
pub mod registry;
pub mod parser;
pub mod execution;

// Re-exports
pub use models::{BenchmarkEntry, CommandOutcome, ResultsTable};
pub use config::RunConfig;
pub use execution::run_all;
