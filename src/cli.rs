// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::env;

use crate::{
    core::{config::RunConfig, registry::DEFAULT_SCRIPT},
    infra::t,
};

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("bench-compare")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .help(t!("arg_script", locale = locale).to_string())
                .value_name("FILE")
                .default_value(DEFAULT_SCRIPT)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help(t!("arg_csv", locale = locale).to_string())
                .value_name("PATH")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help(t!("arg_strict", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("commands")
                .help(t!("arg_commands", locale = locale).to_string())
                .value_name("LABEL COMMAND")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        )
}

/// Builds the run configuration from parsed matches.
pub fn config_from_matches(matches: &clap::ArgMatches, locale: &str) -> Result<RunConfig> {
    let pairs: Vec<String> = matches
        .get_many::<String>("commands")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let script = matches.get_one::<String>("script").map(String::as_str);
    let csv = matches.get_one::<String>("csv").map(String::as_str);
    let strict = matches.get_flag("strict");

    RunConfig::from_args(&pairs, script, csv, strict, locale)
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = crate::init_locale(&pre_parse_language());

    let matches = build_cli(&language).get_matches();
    let config = config_from_matches(&matches, &language)?;

    commands::run::execute(config).await?;
    Ok(())
}
