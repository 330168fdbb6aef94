// SPDX-License-Identifier: Apache-2.0

use ipprov::{
    ProvisioningConfiguration, ProvisioningConfigurationParcelable,
    WireContract,
};

use super::{CliError, file::read_file};

pub(crate) struct CommandFromStable;

impl CommandFromStable {
    pub(crate) const CMD: &str = "from-stable";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .alias("f")
            .about(
                "Convert stable representation JSON to provisioning \
                 configuration YAML",
            )
            .arg(
                clap::Arg::new("STABLE_FILE")
                    .required(false)
                    .index(1)
                    .help("Stable representation file, `-` for stdin"),
            )
            .arg(
                clap::Arg::new("INTERFACE_VERSION")
                    .long("interface-version")
                    .short('i')
                    .value_parser(clap::value_parser!(u32))
                    .help(
                        "Interface version of the producer, default to \
                         current version of the wire contract",
                    ),
            )
            .arg(
                clap::Arg::new("CONTRACT")
                    .long("contract")
                    .short('c')
                    .help("Wire contract YAML file"),
            )
    }

    pub(crate) fn handle(matches: &clap::ArgMatches) -> Result<(), CliError> {
        let contract =
            if let Some(path) = matches.get_one::<String>("CONTRACT") {
                WireContract::from_file(path)?
            } else {
                WireContract::default()
            };
        let interface_version = matches
            .get_one::<u32>("INTERFACE_VERSION")
            .copied()
            .unwrap_or(contract.current_version);
        if interface_version > contract.current_version {
            log::warn!(
                "Interface version {interface_version} is newer than \
                 current version {} of wire contract",
                contract.current_version
            );
        }

        let file_path = matches
            .get_one::<String>("STABLE_FILE")
            .map(|s| s.as_str())
            .unwrap_or("-");
        let parcel =
            ProvisioningConfigurationParcelable::from_json(&read_file(
                file_path,
            )?)?;

        let config =
            ProvisioningConfiguration::from_stable_parcelable_with_contract(
                &parcel,
                interface_version,
                &contract,
            );
        print!("{}", config.to_yaml()?);
        Ok(())
    }
}
