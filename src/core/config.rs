//! # Run Configuration Module / 运行配置模块
//!
//! The settings for one comparison run, assembled from the command line.
//!
//! 一次比较运行的设置，由命令行参数组装而成。

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::core::models::Command;
use crate::core::registry::{DEFAULT_SCRIPT, build_commands};

/// Everything `run` needs to execute and report one comparison.
/// 执行并报告一次比较所需的全部设置。
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The commands to run, in registration order.
    /// 要运行的命令，按注册顺序排列。
    pub commands: Vec<Command>,
    /// Where to write the CSV export. `None` disables it.
    /// CSV 导出的写入位置。`None` 表示不导出。
    pub csv: Option<PathBuf>,
    /// Refuse to render the table if any command failed.
    /// 如果任何命令失败，则不渲染表格。
    pub strict: bool,
    /// The language locale for console messages.
    /// 控制台消息使用的语言区域。
    pub locale: String,
}

impl RunConfig {
    /// Builds a configuration from the raw positional arguments.
    ///
    /// # Arguments
    /// * `pairs` - Alternating labels and base commands
    /// * `script` - Script token appended to each command, `combined.js` if `None`
    /// * `csv` - Optional CSV output path; `~` and `$VARS` are expanded
    /// * `strict` - Whether any failure suppresses the table
    /// * `locale` - Locale for console messages
    pub fn from_args<S: AsRef<str>>(
        pairs: &[S],
        script: Option<&str>,
        csv: Option<&str>,
        strict: bool,
        locale: &str,
    ) -> Result<Self> {
        let commands = build_commands(pairs, script.unwrap_or(DEFAULT_SCRIPT));
        let csv = csv.map(expand_path).transpose()?;

        Ok(Self {
            commands,
            csv,
            strict,
            locale: locale.to_string(),
        })
    }
}

fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .with_context(|| format!("Failed to expand path: {}", raw))?;
    Ok(PathBuf::from(expanded.into_owned()))
}
