pub(crate) mod account;
pub(crate) mod config;
pub(crate) mod favorites;
pub(crate) mod init;

use serde::Serialize;

use crate::CliError;

/// Print a value as pretty JSON on stdout, the shape a client would receive.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::invalid_input(format!("Failed to encode response: {}", e)))?;
    println!("{}", json);
    Ok(())
}
