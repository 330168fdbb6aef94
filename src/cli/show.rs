// SPDX-License-Identifier: Apache-2.0

use ipprov::ProvisioningConfigurationParcelable;

use super::{CliError, file::read_file};

pub(crate) struct CommandShow;

impl CommandShow {
    pub(crate) const CMD: &str = "show";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .alias("s")
            .about("Show stable representation JSON in text form")
            .arg(
                clap::Arg::new("STABLE_FILE")
                    .required(false)
                    .index(1)
                    .help("Stable representation file, `-` for stdin"),
            )
    }

    pub(crate) fn handle(matches: &clap::ArgMatches) -> Result<(), CliError> {
        let file_path = matches
            .get_one::<String>("STABLE_FILE")
            .map(|s| s.as_str())
            .unwrap_or("-");
        let parcel =
            ProvisioningConfigurationParcelable::from_json(&read_file(
                file_path,
            )?)?;
        println!("{parcel}");
        Ok(())
    }
}
