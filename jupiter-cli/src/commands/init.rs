use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use jupiter_db::Database;

use crate::CliError;

/// Create the database file and schema.
pub(crate) fn run_init(db: &Database) -> Result<(), CliError> {
    db.initialize()?;
    log::info!(
        "{} {}",
        "Database ready:".if_supports_color(Stdout, |t| t.bold()),
        db.path().display(),
    );
    Ok(())
}
