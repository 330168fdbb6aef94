// SPDX-License-Identifier: Apache-2.0

use ipprov::{
    ipv4_provisioning_mode_to_string, ipv6_provisioning_mode_to_string,
};

use super::CliError;

pub(crate) struct CommandMode;

impl CommandMode {
    pub(crate) const CMD: &str = "mode";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .about("Show name of provisioning mode code")
            .arg(
                clap::Arg::new("FAMILY")
                    .required(true)
                    .index(1)
                    .value_parser(["ipv4", "ipv6"])
                    .help("Address family"),
            )
            .arg(
                clap::Arg::new("CODE")
                    .required(true)
                    .index(2)
                    .allow_negative_numbers(true)
                    .value_parser(clap::value_parser!(i32))
                    .help("Provisioning mode code"),
            )
    }

    pub(crate) fn handle(matches: &clap::ArgMatches) -> Result<(), CliError> {
        // It is safe to unwrap because clap `required(true)` has confirmed
        // so.
        let family = matches
            .get_one::<String>("FAMILY")
            .map(|s| s.as_str())
            .unwrap();
        // It is safe to unwrap because clap `required(true)` has confirmed
        // so.
        let code = matches.get_one::<i32>("CODE").copied().unwrap();

        let name = match family {
            "ipv4" => ipv4_provisioning_mode_to_string(code),
            "ipv6" => ipv6_provisioning_mode_to_string(code),
            _ => {
                return Err(CliError::from(format!(
                    "Unknown address family {family}"
                )));
            }
        };
        println!("{name}");
        Ok(())
    }
}
