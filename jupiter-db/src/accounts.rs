//! Account registration and credential checks.

use jupiter_core::{display_name, Account};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{store_err, StoreError};

/// Register an account if its user id is free.
///
/// Returns `true` if the account was created and `false` if the user id was
/// already taken. An existing account is never overwritten.
pub fn register(conn: &Connection, account: &Account) -> Result<bool, StoreError> {
    let inserted = conn
        .execute(
            "INSERT INTO accounts (user_id, credential, first_name, last_name)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(user_id) DO NOTHING",
            params![
                account.user_id,
                account.password,
                account.first_name,
                account.last_name,
            ],
        )
        .map_err(store_err("add account"))?;

    if inserted == 0 {
        log::debug!("Account '{}' already exists", account.user_id);
    }
    Ok(inserted == 1)
}

/// Look up an account by exact user id and credential.
///
/// Returns the display name on a match. An unknown user and a wrong
/// credential both give `None`, so callers cannot tell which one happened.
pub fn verify_credentials(
    conn: &Connection,
    user_id: &str,
    credential: &str,
) -> Result<Option<String>, StoreError> {
    conn.query_row(
        "SELECT first_name, last_name FROM accounts WHERE user_id = ?1 AND credential = ?2",
        params![user_id, credential],
        |row| {
            let first: String = row.get(0)?;
            let last: String = row.get(1)?;
            Ok(display_name(&first, &last))
        },
    )
    .optional()
    .map_err(store_err("verify user credentials"))
}
