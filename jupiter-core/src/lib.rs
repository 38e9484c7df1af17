//! Data model types and credential helpers for jupiter.
//!
//! This crate defines accounts, catalog items, and the per-type groupings
//! returned by favorite queries, without any database dependencies. Pass
//! these types to `jupiter-db` for persistence.

pub mod credential;
pub mod types;

pub use credential::encrypt_password;
pub use types::*;
