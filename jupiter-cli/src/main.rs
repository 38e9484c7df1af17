//! jupiter CLI
//!
//! Command-line front end for the accounts and favorites store.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use jupiter_db::Database;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        if let Some(hint) = e.hint() {
            log::error!("{}", hint.if_supports_color(Stderr, |t| t.dimmed()));
        }
        std::process::exit(1);
    }
}

/// Install the logger. `RUST_LOG` still overrides the flag-derived level.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if !verbose {
        builder.format_timestamp(None).format_target(false);
    }
    builder.parse_default_env();
    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings_path = settings::settings_path();
    let file_settings = settings::load_settings(&settings_path)?;
    let env_override = std::env::var_os(settings::DB_ENV_VAR).map(PathBuf::from);
    let config = settings::resolve_store_config(file_settings, cli.db, env_override);

    let db = Database::new(config);
    match cli.command {
        Commands::Init => commands::init::run_init(&db),
        Commands::Register {
            user_id,
            password,
            first_name,
            last_name,
        } => commands::account::run_register(&db, user_id, &password, first_name, last_name),
        Commands::Login { user_id, password } => {
            commands::account::run_login(&db, user_id, &password)
        }
        Commands::Favorite { user_id, item } => {
            commands::favorites::run_favorite(&db, &user_id, &item)
        }
        Commands::Unfavorite { user_id, item_id } => {
            commands::favorites::run_unfavorite(&db, &user_id, &item_id)
        }
        Commands::Favorites { user_id } => commands::favorites::run_favorites(&db, &user_id),
        Commands::GameIds { user_id } => commands::favorites::run_game_ids(&db, &user_id),
        Commands::Config {
            action: ConfigAction::Show,
        } => commands::config::run_config_show(&settings_path, db.config()),
    }
}
