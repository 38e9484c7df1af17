//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jupiter")]
#[command(about = "Manage jupiter accounts and favorites", long_about = None)]
pub(crate) struct Cli {
    /// Database file (overrides JUPITER_DB and the settings file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the database and schema if they don't exist
    Init,

    /// Register a new account
    Register {
        user_id: String,
        password: String,
        first_name: String,
        last_name: String,
    },

    /// Check credentials and print the login response
    Login { user_id: String, password: String },

    /// Favorite an item, given as JSON (e.g. '{"id":"...","item_type":"CLIP",...}')
    Favorite { user_id: String, item: String },

    /// Remove an item from a user's favorites
    Unfavorite { user_id: String, item_id: String },

    /// Print a user's favorite items grouped by type
    Favorites { user_id: String },

    /// Print the game ids among a user's favorites, grouped by type
    GameIds { user_id: String },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file location and resolved database settings
    Show,
}
