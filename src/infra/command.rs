//! # Command Execution Module / 命令执行模块
//!
//! Helpers for launching a configured benchmark command through the host
//! shell and capturing everything it prints.
//!
//! 通过宿主 shell 启动已配置的基准命令并捕获其全部输出的辅助函数。

use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncRead, AsyncReadExt};

/// The text a process wrote, kept per stream.
/// 进程写出的文本，按流分别保存。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// Returns the last `max_lines` lines of stderr, falling back to stdout
    /// when stderr is empty. Used when reporting a failed command.
    ///
    /// 返回 stderr 的最后 `max_lines` 行；若 stderr 为空则退回到 stdout。
    /// 用于报告失败的命令。
    pub fn tail(&self, max_lines: usize) -> String {
        let source = if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        };
        let lines: Vec<&str> = source.lines().collect();
        let start = lines.len().saturating_sub(max_lines);
        lines[start..].join("\n")
    }
}

/// Builds a `tokio::process::Command` that runs `command_line` through the
/// platform shell, so pipes, quoting and environment expansion behave as they
/// would when typed by hand.
///
/// 构建一个通过平台 shell 运行 `command_line` 的 `tokio::process::Command`，
/// 使管道、引号和环境变量展开的行为与手动输入时一致。
pub fn shell_command(command_line: &str) -> tokio::process::Command {
    if cfg!(windows) {
        let mut cmd = tokio::process::Command::new("cmd");
        cmd.arg("/C").arg(command_line);
        cmd
    } else {
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c").arg(command_line);
        cmd
    }
}

/// Spawns a command and captures its stdout and stderr.
/// Both streams are drained concurrently to the end so a chatty stderr cannot
/// stall the process while stdout is being read. Bytes that are not valid
/// UTF-8 are replaced rather than ending the capture.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The captured output. Empty if the process could not be spawned.
///
/// 派生一个命令，捕获其 stdout 和 stderr。
/// 两个流被并发地读取到结束，避免 stderr 输出过多时阻塞进程。
/// 非法的 UTF-8 字节会被替换，而不会中断捕获。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<ExitStatus>, CapturedOutput) {
    let mut child = match cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return (Err(e), CapturedOutput::default()),
    };

    let Some(stdout) = child.stdout.take() else {
        return (
            Err(std::io::Error::other("failed to capture stdout")),
            CapturedOutput::default(),
        );
    };
    let Some(stderr) = child.stderr.take() else {
        return (
            Err(std::io::Error::other("failed to capture stderr")),
            CapturedOutput::default(),
        );
    };

    let stdout_handle = tokio::spawn(read_stream(stdout, "stdout"));
    let stderr_handle = tokio::spawn(read_stream(stderr, "stderr"));

    let status = child.wait().await;

    // Join the readers so output written right before exit is not lost.
    let stdout = stdout_handle.await.unwrap_or_else(|e| {
        eprintln!("Failed to join stdout task: {}", e);
        String::new()
    });
    let stderr = stderr_handle.await.unwrap_or_else(|e| {
        eprintln!("Failed to join stderr task: {}", e);
        String::new()
    });

    (status, CapturedOutput { stdout, stderr })
}

/// Reads a stream to its end and decodes it lossily. A read error is logged
/// and whatever arrived before it is kept.
async fn read_stream<R>(mut stream: R, name: &'static str) -> String
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    if let Err(e) = stream.read_to_end(&mut bytes).await {
        eprintln!("Failed to read {}: {}", name, e);
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
