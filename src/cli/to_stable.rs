// SPDX-License-Identifier: Apache-2.0

use ipprov::ProvisioningConfiguration;

use super::{CliError, file::read_file};

pub(crate) struct CommandToStable;

impl CommandToStable {
    pub(crate) const CMD: &str = "to-stable";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .alias("t")
            .about(
                "Convert provisioning configuration YAML to stable \
                 representation JSON",
            )
            .arg(
                clap::Arg::new("CONFIG_FILE")
                    .required(false)
                    .index(1)
                    .help("Provisioning configuration file, `-` for stdin"),
            )
            .arg(
                clap::Arg::new("PRETTY")
                    .long("pretty")
                    .short('p')
                    .action(clap::ArgAction::SetTrue)
                    .help("Pretty print JSON"),
            )
            .arg(
                clap::Arg::new("NO_VALIDATE")
                    .long("no-validate")
                    .action(clap::ArgAction::SetTrue)
                    .help("Do not validate the configuration"),
            )
    }

    pub(crate) fn handle(matches: &clap::ArgMatches) -> Result<(), CliError> {
        let file_path = matches
            .get_one::<String>("CONFIG_FILE")
            .map(|s| s.as_str())
            .unwrap_or("-");
        let config = ProvisioningConfiguration::from_yaml(&read_file(
            file_path,
        )?)?;
        log::debug!("Loaded {config}");

        if !matches.get_flag("NO_VALIDATE") {
            config.validate()?;
        }

        let parcel = config.to_stable_parcelable();
        if matches.get_flag("PRETTY") {
            println!("{}", serde_json::to_string_pretty(&parcel)?);
        } else {
            println!("{}", parcel.to_json()?);
        }
        Ok(())
    }
}
