// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use super::CliError;

/// Read whole file, `-` means stdin.
pub(crate) fn read_file(file_path: &str) -> Result<String, CliError> {
    if file_path == "-" {
        read_fd(&mut std::io::stdin())
    } else {
        read_fd(&mut std::fs::File::open(file_path).map_err(|e| {
            CliError::from(format!("Failed to open {file_path}: {e}"))
        })?)
    }
}

fn read_fd<R>(fd: &mut R) -> Result<String, CliError>
where
    R: Read,
{
    let mut content = String::new();
    fd.read_to_string(&mut content)?;
    // Replace non-breaking space '\u{A0}'  to normal space
    Ok(content.replace('\u{A0}', " "))
}
