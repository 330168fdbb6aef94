// SPDX-License-Identifier: Apache-2.0

mod error;
mod file;
mod from_stable;
mod mode;
mod show;
mod to_stable;

pub(crate) use self::error::CliError;
use self::{
    from_stable::CommandFromStable, mode::CommandMode, show::CommandShow,
    to_stable::CommandToStable,
};

fn main() -> Result<(), CliError> {
    let mut cli_cmd = clap::Command::new("ipprovctl")
        .about("IP provisioning configuration tool")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .action(clap::ArgAction::SetTrue)
                .help("Disable logging")
                .global(true),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .action(clap::ArgAction::Count)
                .help("Increase verbose level")
                .global(true),
        )
        .subcommand(CommandToStable::new_cmd())
        .subcommand(CommandFromStable::new_cmd())
        .subcommand(CommandShow::new_cmd())
        .subcommand(CommandMode::new_cmd());

    let matches = cli_cmd.get_matches_mut();

    let (log_groups, log_level) = match matches.get_count("verbose") {
        0 => (vec!["ipprov", "ipprovctl"], log::LevelFilter::Warn),
        1 => (vec!["ipprov", "ipprovctl"], log::LevelFilter::Info),
        2 => (vec!["ipprov", "ipprovctl"], log::LevelFilter::Debug),
        3 => (vec!["ipprov", "ipprovctl"], log::LevelFilter::Trace),
        _ => (vec![""], log::LevelFilter::Trace),
    };

    if !matches.get_flag("quiet") {
        let mut log_builder = env_logger::Builder::new();
        for log_group in log_groups {
            if log_group.is_empty() {
                log_builder.filter(None, log_level);
            } else {
                log_builder.filter(Some(log_group), log_level);
            }
        }
        log_builder.init();
    }

    log::info!("ipprovctl version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = call_subcommand(&matches) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    Ok(())
}

fn call_subcommand(matches: &clap::ArgMatches) -> Result<(), CliError> {
    if let Some(matches) = matches.subcommand_matches(CommandToStable::CMD) {
        CommandToStable::handle(matches)
    } else if let Some(matches) =
        matches.subcommand_matches(CommandFromStable::CMD)
    {
        CommandFromStable::handle(matches)
    } else if let Some(matches) = matches.subcommand_matches(CommandShow::CMD)
    {
        CommandShow::handle(matches)
    } else if let Some(matches) = matches.subcommand_matches(CommandMode::CMD)
    {
        CommandMode::handle(matches)
    } else {
        Err(CliError::from("Unknown command"))
    }
}
