//! # CLI Commands / 命令行命令

pub mod run;
