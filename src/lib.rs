//! # Bench Compare Library / Bench Compare 库
//!
//! This library provides the core functionality for the Bench Compare tool,
//! which runs several JavaScript engine benchmark commands side by side and
//! renders their scores as a Markdown comparison table.
//!
//! 此库为 Bench Compare 工具提供核心功能，
//! 它并行运行多个 JavaScript 引擎基准命令，并将其分数渲染为 Markdown 比较表格。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, command registry, result parsing and execution
//! - `infra` - Infrastructure services like shell command execution
//! - `reporting` - Console output, Markdown and CSV rendering
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、命令注册、结果解析和执行
//! - `infra` - 基础设施服务，如 shell 命令执行
//! - `reporting` - 控制台输出、Markdown 和 CSV 渲染
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use self::core::{execution, models, parser, registry};

/// Selects the locale for console messages and returns the one in effect.
///
/// The requested locale is matched in full first (e.g., "zh-CN"), then by its
/// language part (e.g., "en" from "en-US"), and finally falls back to "en".
pub fn init_locale(requested: &str) -> String {
    let available_locales = rust_i18n::available_locales!();

    let is_available = |code: &str| available_locales.iter().any(|locale| *locale == code);

    let lang = if is_available(requested) {
        requested
    } else {
        requested
            .split(['-', '_'])
            .next()
            .filter(|lang_code| is_available(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
