//! SQLite persistence layer for accounts, catalog items, and favorites.
//!
//! Provides schema creation, the account, item, and favorite-link stores,
//! and the grouped favorites queries, backed by SQLite (via rusqlite with
//! bundled feature). Store functions take a borrowed connection; use
//! [`Database`] to open one per request.

pub mod accounts;
pub mod config;
pub mod database;
pub mod error;
pub mod favorites;
pub mod items;
pub mod queries;
pub mod schema;

pub use accounts::{register, verify_credentials};
pub use config::{default_database_path, StoreConfig};
pub use database::Database;
pub use error::StoreError;
pub use favorites::{add_favorite, get_favorite_item_ids, remove_favorite};
pub use items::{get_item, get_items_by_id, save_item};
pub use queries::{get_favorite_game_ids, get_favorite_items, get_user_favorite_game_ids};
pub use schema::{open_database, open_memory, SchemaError};
