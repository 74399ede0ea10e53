//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Bench Compare,
//! namely shell command execution and i18n support.
//!
//! 此模块为 Bench Compare 提供基础设施服务，
//! 即 shell 命令执行和国际化支持。

pub mod command;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
