//! # Command Registry Module / 命令注册模块
//!
//! Turns the positional `<label> <command>` argument pairs into the ordered
//! list of commands to run.
//!
//! 将位置参数 `<标签> <命令>` 对转换为要运行的有序命令列表。

use crate::core::models::Command;

/// The script every engine is asked to run unless `--script` overrides it.
pub const DEFAULT_SCRIPT: &str = "combined.js";

/// Builds the command list from positional arguments, two at a time.
/// Consumption stops as soon as fewer than two arguments remain, so a trailing
/// unpaired argument is dropped. Labels are not checked for uniqueness.
///
/// 两个一组地从位置参数构建命令列表。
/// 剩余参数不足两个时停止，因此末尾未配对的参数会被丢弃。不检查标签是否唯一。
///
/// # Arguments
/// * `args` - The positional arguments, alternating label and base command
/// * `script` - The token appended to each base command
pub fn build_commands<S: AsRef<str>>(args: &[S], script: &str) -> Vec<Command> {
    let script = quote_script(script);
    args.chunks_exact(2)
        .map(|pair| Command {
            label: pair[0].as_ref().to_string(),
            shell_command: format!("{} {}", pair[1].as_ref(), script),
        })
        .collect()
}

/// Quotes the script token for the shell when it contains anything the shell
/// would split or expand. Plain file names are passed through untouched.
fn quote_script(script: &str) -> String {
    shlex::try_quote(script)
        .map(|quoted| quoted.into_owned())
        .unwrap_or_else(|_| script.to_string())
}
