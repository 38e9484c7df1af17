use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use jupiter_core::{encrypt_password, Account, LoginResponse};
use jupiter_db::Database;

use super::print_json;
use crate::CliError;

/// Register an account. An existing user id is reported as a conflict.
pub(crate) fn run_register(
    db: &Database,
    user_id: String,
    password: &str,
    first_name: String,
    last_name: String,
) -> Result<(), CliError> {
    if user_id.is_empty() {
        return Err(CliError::invalid_input("user id must not be empty"));
    }

    let account = Account {
        password: encrypt_password(&user_id, password),
        user_id,
        first_name,
        last_name,
    };

    let created = db.with_connection(|conn| jupiter_db::register(conn, &account))?;
    if !created {
        return Err(CliError::Conflict(account.user_id));
    }

    log::info!(
        "{} {} ({})",
        "Registered".if_supports_color(Stdout, |t| t.green()),
        account.user_id,
        account.display_name(),
    );
    Ok(())
}

/// Check credentials and print the login response.
pub(crate) fn run_login(db: &Database, user_id: String, password: &str) -> Result<(), CliError> {
    let credential = encrypt_password(&user_id, password);
    let name = db
        .with_connection(|conn| jupiter_db::verify_credentials(conn, &user_id, &credential))?
        .ok_or(CliError::Unauthorized)?;

    print_json(&LoginResponse { user_id, name })
}
