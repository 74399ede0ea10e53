//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the registry, the runner
//! and the renderers: registered commands, parsed benchmark entries, the
//! per-command outcomes sent back by worker tasks, and the accumulated results.
//!
//! 此模块定义了注册表、运行器和渲染器共享的数据结构：
//! 已注册的命令、解析出的基准条目、工作任务回传的单命令结果以及累积结果。

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// A single benchmark program invocation, configured from a label/command pair.
/// 一个基准程序调用，由标签/命令对配置而来。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The display name used as the column header in the comparison table.
    /// 在比较表中用作列标题的显示名称。
    pub label: String,
    /// The full shell invocation, including the trailing script token.
    /// 完整的 shell 调用，包括末尾的脚本参数。
    pub shell_command: String,
}

/// The value reported for a benchmark. Engines report either a numeric score
/// or a textual marker such as an error string.
///
/// 基准报告的值。引擎报告数值分数或文本标记（例如错误字符串）。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BenchValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for BenchValue {
    /// Formats the value the way a JavaScript runtime prints it. Every JSON
    /// number is a double there, so `100.0` prints `100` and `1e21` prints
    /// `1e+21`. Strings are written verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchValue::Text(text) => f.pad(text),
            BenchValue::Number(number) => match number.as_f64() {
                Some(value) => f.pad(ryu_js::Buffer::new().format(value)),
                None => fmt::Display::fmt(number, f),
            },
        }
    }
}

/// One named measurement reported by a command's subprocess.
/// 命令子进程报告的一个命名测量值。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkEntry {
    pub name: String,
    pub result: BenchValue,
}

/// Enumerates the possible reasons for a command failure.
/// 枚举命令失败的可能原因。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The shell could not be started at all.
    /// 无法启动 shell。
    Spawn(String),
    /// The process ran and exited unsuccessfully. `None` means it was
    /// terminated by a signal.
    /// 进程已运行但以失败状态退出。`None` 表示被信号终止。
    NonZeroExit(Option<i32>),
    /// The worker task running the command panicked or was cancelled.
    /// 运行命令的工作任务发生 panic 或被取消。
    Worker(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Spawn(message) => write!(f, "failed to start: {}", message),
            FailureReason::NonZeroExit(Some(code)) => write!(f, "exited with status {}", code),
            FailureReason::NonZeroExit(None) => f.write_str("terminated by signal"),
            FailureReason::Worker(message) => write!(f, "runner task failed: {}", message),
        }
    }
}

/// The single report a worker task delivers for its command.
/// 工作任务为其命令交付的唯一报告。
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    /// The command exited successfully. `entries` may be empty when the output
    /// contained no result array.
    Completed {
        command: Command,
        entries: Vec<BenchmarkEntry>,
        duration: Duration,
    },
    /// The command could not be run or exited unsuccessfully.
    Failed {
        command: Command,
        reason: FailureReason,
        output: String,
        duration: Duration,
    },
}

impl CommandOutcome {
    pub fn command(&self) -> &Command {
        match self {
            CommandOutcome::Completed { command, .. } => command,
            CommandOutcome::Failed { command, .. } => command,
        }
    }

    pub fn label(&self) -> &str {
        &self.command().label
    }

    pub fn duration(&self) -> Duration {
        match self {
            CommandOutcome::Completed { duration, .. } => *duration,
            CommandOutcome::Failed { duration, .. } => *duration,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CommandOutcome::Failed { .. })
    }
}

/// Accumulated results keyed by command label.
/// 按命令标签索引的累积结果。
#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    entries: HashMap<String, Vec<BenchmarkEntry>>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the entries for a label, replacing any previous ones.
    pub fn insert(&mut self, label: impl Into<String>, entries: Vec<BenchmarkEntry>) {
        self.entries.insert(label.into(), entries);
    }

    /// Returns the entries for a label, or an empty slice if it never reported.
    pub fn entries(&self, label: &str) -> &[BenchmarkEntry] {
        self.entries.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Finds the result a label reported for the given benchmark name.
    /// The first matching entry wins.
    pub fn find(&self, label: &str, benchmark: &str) -> Option<&BenchValue> {
        self.entries(label)
            .iter()
            .find(|entry| entry.name == benchmark)
            .map(|entry| &entry.result)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the orchestrator collected after all commands reported.
/// 所有命令报告完毕后编排器收集到的全部内容。
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub results: ResultsTable,
    /// Labels of completed commands, in registration order.
    /// 已完成命令的标签，按注册顺序排列。
    pub completed: Vec<String>,
    /// Failed outcomes, in registration order.
    /// 失败的结果，按注册顺序排列。
    pub failures: Vec<CommandOutcome>,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
